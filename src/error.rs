//! Error types for adaptive-pipeline.
//!
//! ## Key Components
//!
//! - [`InvalidArgument`]: Returned when a cache is constructed with invalid
//!   parameters (zero capacity, a split outside `[0, capacity]`).
//! - [`InvariantError`]: Returned by
//!   [`AdaptiveCache::check_invariants`](crate::policy::adaptive::AdaptiveCache::check_invariants)
//!   when internal bookkeeping is inconsistent.
//!
//! A cache miss is never an error: lookups return `Option`.
//!
//! ## Example Usage
//!
//! ```
//! use adaptive_pipeline::error::InvalidArgument;
//! use adaptive_pipeline::policy::adaptive::AdaptiveCache;
//!
//! let cache: Result<AdaptiveCache<u64, String>, InvalidArgument> = AdaptiveCache::new(128);
//! assert!(cache.is_ok());
//!
//! let bad = AdaptiveCache::<u64, String>::new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvalidArgument
// ---------------------------------------------------------------------------

/// Error returned when cache construction parameters are invalid.
///
/// Produced by [`AdaptiveCache::new`](crate::policy::adaptive::AdaptiveCache::new),
/// [`create_cache`](crate::create_cache) and
/// [`AdaptiveCacheBuilder::try_build`](crate::builder::AdaptiveCacheBuilder::try_build).
///
/// # Example
///
/// ```
/// use adaptive_pipeline::create_cache;
///
/// let err = create_cache::<u64, u64>(0).unwrap_err();
/// assert!(err.to_string().contains("maxsize"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument(String);

impl InvalidArgument {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl std::error::Error for InvalidArgument {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when an internal cache invariant does not hold.
///
/// Carries a description of the first invariant found broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display_is_prefixed() {
        let err = InvalidArgument::new("maxsize must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid argument: maxsize must be greater than zero"
        );
        assert_eq!(err.message(), "maxsize must be greater than zero");
    }

    #[test]
    fn invalid_argument_clone_and_eq() {
        let a = InvalidArgument::new("x");
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("ghost key is resident");
        assert_eq!(err.to_string(), "ghost key is resident");
        assert!(format!("{:?}", err).contains("ghost key is resident"));
    }

    #[test]
    fn errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<InvalidArgument>();
        assert_error::<InvariantError>();
    }
}
