//! Core library components.
//!
//! Envelope encryption, password verification, role-based access, the run
//! pipeline, and the configuration and store glue around them.

pub mod access;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod env;
pub mod identity;
pub mod injector;
pub mod password;
pub mod store;
pub mod validation;
