//! Password type and the generation loop.

use super::request::{GenerationRequest, RequestError};
use crate::charset::{CharacterPool, ClassSet};
use crate::sampling::{uniform_index, SecureRng};
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

/// Candidate regenerations allowed before giving up on coverage.
///
/// Even in the tightest case, four classes at the minimum length,
/// roughly one candidate in fourteen covers, so exhausting the budget
/// is not an expected runtime path. The bound exists so a broken
/// random source turns into an error instead of an infinite loop.
pub const MAX_COVERAGE_ATTEMPTS: usize = 100;

/// Password generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The request failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),
    /// The retry budget ran out before every enabled class appeared.
    #[error("class coverage not satisfied after {attempts} attempts")]
    CoverageUnsatisfiable {
        /// Candidates generated before giving up.
        attempts: usize,
    },
}

/// A generated password.
///
/// Immutable once produced: exactly the requested length, drawn only
/// from the enabled alphabets, covering every enabled class whenever
/// the length allows. The `Debug` form reveals the length but never
/// the characters, so passwords cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Returns the password characters.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Password length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if the password is empty. Generated passwords never
    /// are; this exists for container-style API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the password, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("length", &self.len())
            .finish_non_exhaustive()
    }
}

/// Generates passwords from a cryptographically secure random source.
///
/// The generator owns its source; independent instances are safe to
/// drive from independent threads. The RNG parameter is bounded on
/// [`CryptoRng`], so only unpredictable sources can be plugged in.
pub struct PasswordGenerator<R = SecureRng>
where
    R: RngCore + CryptoRng,
{
    rng: R,
}

impl PasswordGenerator<SecureRng> {
    /// Creates a generator backed by an OS-seeded ChaCha20 source.
    pub fn new() -> Self {
        Self {
            rng: SecureRng::from_os_entropy(),
        }
    }
}

impl Default for PasswordGenerator<SecureRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> PasswordGenerator<R>
where
    R: RngCore + CryptoRng,
{
    /// Creates a generator over a caller-supplied secure source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates one password satisfying the request.
    ///
    /// Characters are drawn independently and uniformly from the pool
    /// of enabled alphabets. When the length admits it, every enabled
    /// class must appear in the result; a candidate missing a class is
    /// discarded and redrawn whole, up to [`MAX_COVERAGE_ATTEMPTS`]
    /// times. Patching the miss in place would bias the patched
    /// positions, so it is never done.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<Password, GenerateError> {
        let pool = CharacterPool::from_classes(request.classes());

        for attempt in 1..=MAX_COVERAGE_ATTEMPTS {
            let candidate: String = (0..request.length())
                .map(|_| pool.char_at(uniform_index(&mut self.rng, pool.len())))
                .collect();

            if !request.requires_full_coverage() {
                return Ok(Password(candidate));
            }

            let missing = pool.missing_classes(&candidate);
            if missing.is_empty() {
                return Ok(Password(candidate));
            }

            tracing::trace!(attempt, ?missing, "candidate missed enabled classes");
        }

        Err(GenerateError::CoverageUnsatisfiable {
            attempts: MAX_COVERAGE_ATTEMPTS,
        })
    }
}

/// Validates and generates one password with a fresh OS-seeded
/// generator.
///
/// Convenience wrapper for one-shot callers; batch callers should
/// build a [`GenerationRequest`] once and reuse a
/// [`PasswordGenerator`].
pub fn generate(length: usize, classes: ClassSet) -> Result<Password, GenerateError> {
    let request = GenerationRequest::new(length, classes)?;
    PasswordGenerator::new().generate(&request)
}
