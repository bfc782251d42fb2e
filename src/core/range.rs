//! Inclusive range that secrets are drawn from

use std::fmt;

/// Inclusive `[min, max]` range of possible secrets
///
/// Always non-empty: construction rejects `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretRange {
    min: u32,
    max: u32,
}

/// Error type for invalid ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    Inverted { min: u32, max: u32 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { min, max } => {
                write!(f, "Range minimum {min} is greater than maximum {max}")
            }
        }
    }
}

impl std::error::Error for RangeError {}

impl SecretRange {
    /// Smallest secret in the default range
    pub const DEFAULT_MIN: u32 = 1;
    /// Largest secret in the default range
    pub const DEFAULT_MAX: u32 = 100;

    /// Create a new inclusive range
    ///
    /// # Errors
    /// Returns `RangeError::Inverted` if `min > max`.
    ///
    /// # Examples
    /// ```
    /// use guessing_game::core::SecretRange;
    ///
    /// let range = SecretRange::new(1, 10).unwrap();
    /// assert_eq!(range.size(), 10);
    /// assert!(SecretRange::new(10, 1).is_err());
    /// ```
    pub const fn new(min: u32, max: u32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Number of secrets in the range
    #[inline]
    #[must_use]
    pub const fn size(self) -> u64 {
        self.max as u64 - self.min as u64 + 1
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into the range
    #[inline]
    #[must_use]
    pub fn clamp(self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    /// Guesses a bisecting player needs in the worst case: `ceil(log2(size + 1))`
    #[must_use]
    pub const fn worst_case_guesses(self) -> u32 {
        // bits needed to represent `size` is exactly ceil(log2(size + 1))
        u64::BITS - self.size().leading_zeros()
    }
}

impl Default for SecretRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

impl fmt::Display for SecretRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
