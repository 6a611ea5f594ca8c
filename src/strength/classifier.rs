//! Structural strength scoring.

/// Coarse strength tier for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    /// Score 0-2: short or structurally monotonous.
    Weak,
    /// Score 3-4: decent length or mixed content, not both.
    Medium,
    /// Score 5-6: long and mixed across character kinds.
    Strong,
}

impl std::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Computes the structural score of a password, 0 to 6.
///
/// One point each for: length of at least 8, length of at least 12 (the
/// two length checks accumulate), an ASCII uppercase letter, an ASCII
/// lowercase letter, an ASCII digit, and any character outside the
/// ASCII alphanumerics. The predicates are ASCII-scoped; an accented
/// letter earns only the last point. Length is counted in characters.
pub fn score(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score = 0;

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score
}

/// Maps a password to its strength tier.
///
/// Total over any string: the empty string scores 0 and classifies as
/// [`StrengthTier::Weak`]. "No password yet" is a caller-side state,
/// not a tier.
pub fn classify(password: &str) -> StrengthTier {
    match score(password) {
        0..=2 => StrengthTier::Weak,
        3..=4 => StrengthTier::Medium,
        _ => StrengthTier::Strong,
    }
}
