//! Passforge Library
//!
//! Secure password generation with configurable character classes and
//! guaranteed class coverage, plus a deterministic strength classifier.
//!
//! # Architecture
//!
//! The generation path is an explicit data flow:
//!
//! ```text
//! charset → sampling → generator
//!                         ↓
//!                     password ──→ strength (independent consumer)
//! ```
//!
//! # Design Principles
//!
//! - **Cryptographic draws only**: every character comes from a
//!   ChaCha20 source seeded with OS entropy; sampling entry points are
//!   bounded on `CryptoRng`
//! - **No modulo bias**: random words map to alphabet indices by
//!   rejection sampling
//! - **Coverage by reject-and-retry**: a candidate missing an enabled
//!   class is regenerated whole, never patched in place
//! - **Errors over fallbacks**: an empty class set or an out-of-bounds
//!   length is an error, not a silently corrected input
//!
//! # Example
//!
//! ```
//! use passforge::{classify, ClassSet, GenerationRequest, PasswordGenerator, StrengthTier};
//!
//! let request = GenerationRequest::new(16, ClassSet::all()).unwrap();
//! let mut generator = PasswordGenerator::new();
//!
//! let password = generator.generate(&request).unwrap();
//! assert_eq!(password.len(), 16);
//! assert_eq!(classify(password.as_str()), StrengthTier::Strong);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod charset;
pub mod generator;
pub mod sampling;
pub mod strength;

// Re-export commonly used types at crate root
pub use charset::{CharacterClass, CharacterPool, ClassSet};
pub use generator::{
    generate, ConfigError, Defaults, FileConfig, GenerateError, GenerationRequest, Password,
    PasswordGenerator, RequestError, MAX_COVERAGE_ATTEMPTS, MAX_LENGTH, MIN_LENGTH,
};
pub use sampling::SecureRng;
pub use strength::{classify, score, StrengthTier};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
