//! Dotted-version comparison.
//!
//! Versions handled here are plain dotted sequences of non-negative
//! integers (`"1.2.10"`), compared numerically component by component.
//! This is deliberately not semver: there are no pre-release or build
//! segments, and a two-component version like `"1.2"` is valid and equal
//! to `"1.2.0"` (missing trailing components compare as zero).
//!
//! Malformed components are hard errors, never guessed at: `"1.a.0"`
//! fails with [`UpdateError::MalformedVersion`] rather than comparing as
//! `"1.0.0"`.
//!
//! # Examples
//!
//! ```rust
//! use std::cmp::Ordering;
//! use handoff_update::version::VersionComparator;
//!
//! # fn example() -> Result<(), handoff_update::UpdateError> {
//! assert_eq!(VersionComparator::compare("1.2.3", "1.2.10")?, Ordering::Less);
//! assert_eq!(VersionComparator::compare("1.2", "1.2.0")?, Ordering::Equal);
//! assert!(VersionComparator::needs_update("0.9.9", "1.0.0")?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::cmp::Ordering;

use crate::core::UpdateError;

/// Comparison operations over dotted version strings.
///
/// All methods are associated functions; nothing is cached between calls.
pub struct VersionComparator;

impl VersionComparator {
    /// Compare two dotted version strings numerically.
    ///
    /// Components are compared as integers from most-significant to
    /// least; the shorter version is conceptually padded with zeros, so
    /// `"1.2"` and `"1.2.0"` are equal. Leading zeros are insignificant
    /// (`"01"` equals `"1"`).
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::MalformedVersion`] if either string
    /// contains a component that is not a non-negative integer. The empty
    /// string splits to a single empty component and is malformed.
    pub fn compare(a: &str, b: &str) -> Result<Ordering, UpdateError> {
        let left = Self::parse_components(a)?;
        let right = Self::parse_components(b)?;

        let length = left.len().max(right.len());
        for i in 0..length {
            let l = left.get(i).copied().unwrap_or(0);
            let r = right.get(i).copied().unwrap_or(0);
            match l.cmp(&r) {
                Ordering::Equal => {}
                ordering => return Ok(ordering),
            }
        }
        Ok(Ordering::Equal)
    }

    /// Whether `latest` is strictly newer than `current`.
    ///
    /// Equivalent to `compare(current, latest) == Ordering::Less`; equal
    /// versions never need an update.
    ///
    /// # Errors
    ///
    /// Propagates [`UpdateError::MalformedVersion`] from either operand.
    pub fn needs_update(current: &str, latest: &str) -> Result<bool, UpdateError> {
        Ok(Self::compare(current, latest)? == Ordering::Less)
    }

    fn parse_components(version: &str) -> Result<Vec<u64>, UpdateError> {
        version
            .split('.')
            .map(|component| {
                component.parse::<u64>().map_err(|_| UpdateError::MalformedVersion {
                    version: version.to_string(),
                    component: component.to_string(),
                })
            })
            .collect()
    }
}
