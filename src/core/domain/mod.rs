//! Domain types.

mod access;
mod env;
mod role;
mod secret;
mod version;

pub use access::AccessRecord;
pub use env::DotEnv;
pub use role::Role;
pub use secret::SecretRecord;
pub use version::VersionInfo;
