//! Secure random sampling.
//!
//! This module provides the cryptographically secure random source
//! used for password draws and the bias-free mapping from raw random
//! words to alphabet indices.
//!
//! # Security Model
//!
//! - Every draw comes from a CSPRNG seeded with OS entropy
//! - Sampling entry points are bounded on `RngCore + CryptoRng`, so a
//!   general-purpose or constant-seeded PRNG cannot be plugged in
//! - Index mapping uses rejection sampling, never a bare modulus, so
//!   each alphabet index is exactly equally likely

mod secure;
mod uniform;

pub use secure::SecureRng;
pub use uniform::uniform_index;
