//! envhub - share encrypted environment variables with your team.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init, clone   # Create or link a project
//! │   ├── add, rm       # Publish a new version
//! │   ├── list, export  # Read the latest version
//! │   ├── decrypt       # Open a sealed .env file
//! │   ├── run           # Run with injected variables
//! │   ├── grant, revoke # Collaborator access
//! │   └── session       # Password resolution per command
//! └── core/             # Core library components
//!     ├── cipher/       # AES-256-GCM envelopes
//!     │   ├── mod       # Cipher trait
//!     │   ├── aes       # PBKDF2 + AES-GCM implementation
//!     │   └── envelope  # Envelope and its text form
//!     ├── password      # Salted password hashes
//!     ├── access        # Role-based project password recovery
//!     ├── injector      # Decrypt, merge, launch
//!     ├── config        # .envhub.toml management
//!     ├── store/        # Secret store backends
//!     │   ├── mod       # Store trait
//!     │   └── fs        # Filesystem JSON implementation
//!     └── env           # .env conversions
//! ```
//!
//! # Security model
//!
//! Every value is sealed under the project password. Owners hold the project
//! password itself; admins and members hold a personal access password that
//! unwraps a sealed copy of it. The store only sees ciphertext and hashes.

pub mod cli;
pub mod core;
pub mod error;
