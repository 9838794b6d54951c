use std::collections::HashSet;
use std::net::IpAddr;

use crate::ports::HostResolver;

/// Resolver that knows a fixed set of names. IP literals always resolve.
#[derive(Debug, Default)]
pub struct StaticResolver {
    hosts: HashSet<String>,
}

impl StaticResolver {
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { hosts: hosts.into_iter().map(Into::into).collect() }
    }
}

impl HostResolver for StaticResolver {
    fn resolves(&self, host: &str) -> bool {
        host.parse::<IpAddr>().is_ok() || self.hosts.contains(host)
    }
}
