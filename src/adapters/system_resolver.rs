use std::net::{IpAddr, ToSocketAddrs};

use crate::ports::HostResolver;

/// Resolves names through the operating system resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

impl HostResolver for SystemResolver {
    fn resolves(&self, host: &str) -> bool {
        if host.parse::<IpAddr>().is_ok() {
            return true;
        }

        match (host, 0u16).to_socket_addrs() {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(err) => {
                tracing::debug!(host, error = %err, "name resolution failed");
                false
            }
        }
    }
}
