pub mod guide;
pub mod status;
pub mod sysconfig;
