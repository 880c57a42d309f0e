//! Application services for proxy registration and installation.

mod installer;
mod registrar;

pub use installer::ProxyInstaller;
pub use registrar::{ProxyRegistrar, ProxyRegistrarError, ProxyRegistrarResult};
