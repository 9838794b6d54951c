/// Name resolution used to check that operator-supplied hosts exist.
pub trait HostResolver {
    /// True when `host` resolves to at least one address.
    ///
    /// Resolution failures are reported as `false`, never as errors.
    fn resolves(&self, host: &str) -> bool;
}
