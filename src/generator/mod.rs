//! Password generation.
//!
//! This module owns the request type with its validation rules, the
//! draw loop with class-coverage enforcement, and the file-based
//! defaults used by the CLI.
//!
//! Coverage is enforced by reject-and-retry: a candidate missing an
//! enabled class is thrown away and regenerated whole. Patching a
//! missing character into a fixed position would make that position's
//! distribution differ from the rest of the string.

mod config;
mod password;
mod request;

pub use config::{ConfigError, Defaults, FileConfig};
pub use password::{
    generate, GenerateError, Password, PasswordGenerator, MAX_COVERAGE_ATTEMPTS,
};
pub use request::{GenerationRequest, RequestError, MAX_LENGTH, MIN_LENGTH};
