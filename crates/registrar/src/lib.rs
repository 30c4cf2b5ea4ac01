//! Client-side core of the Alive On Base handle registrar: name
//! sanitization and the registration flow state machine.
//!
//! All chain interaction goes through the wallet collaborator in
//! [`alive_wallet`]; the registry contract itself is an external
//! collaborator reached only through its `register(string)` entry point.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod contract;
mod error;
mod flow;
mod handle;

pub use config::{DEFAULT_REFERRAL_BASE, REGISTRATION_FEE_WEI, RegistrarConfig};
pub use error::{ConfigError, FlowError};
pub use flow::{AttemptStatus, Registrar, RegistrationAttempt, referral_link};
pub use handle::{HANDLE_SUFFIX, Handle, MAX_HANDLE_LEN, PLACEHOLDER};
