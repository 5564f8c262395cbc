//! Strict parser for Semantic Version numbers and range expressions.
//!
//! ## Motivation
//!
//! This crate parses versions exactly as the [semantic versioning](https://semver.org/) grammar defines them,
//! orders them by precedence, and matches them against range expressions like `>=1.2.0 <2.0.0 || 3.x`.
//!
//! - [`parse`] accepts only `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` and reports where the input is wrong
//! - [`parse_tolerant`] additionally accepts common spellings like `v1.2` or `01.02.03`
//! - [`compile_range`] turns a range expression into a reusable [`Matcher`]
//!
//! ## Examples
//!
//! ```rust
//! use strict_semver::{compile_range, parse, parse_tolerant, Version};
//!
//! let version = parse("1.2.3-rc.1+build.42").unwrap();
//! assert!(version < Version::new(1, 2, 3));
//! assert_eq!(version.to_string(), "1.2.3-rc.1+build.42");
//!
//! // a version needs all three components
//! assert!(parse("1.2").is_err());
//! assert_eq!(parse_tolerant("v1.2").unwrap(), Version::new(1, 2, 0));
//!
//! let matcher = compile_range(">= 1.2.0 <2.0.0 || 3.x").unwrap();
//! assert!(matcher.matches(&parse("1.9.0").unwrap()));
//! assert!(!matcher.matches(&parse("2.0.0").unwrap()));
//! assert!(matcher.matches(&parse("3.4.5").unwrap()));
//! ```
//!
//! Errors show the location of the problem with the alternate format:
//!
//! ```rust
//! let error = strict_semver::parse("1.02.3").unwrap_err();
//! assert_eq!(
//!     format!("{:#}", error),
//!     "Could not parse the minor number: `02` has a leading zero
//! |    1.02.3
//! |    ~~^^
//! "
//! );
//! ```
//!
//! ## Features
//!
//! - `version_serde`: [`Version`] implements `Serialize` and `Deserialize` as its canonical string
//! - `version_semver`: a [`Version`] can be converted into a [`semver::Version`](https://docs.rs/semver)

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

pub use strict_semver_parser::{Error, ErrorKind, NumberError, OwnedError, VersionBuilder};
pub use strict_semver_range::{
    compile_range, Matcher, Op, RangeError, RangeErrorKind, VersionRange,
};
pub use strict_semver_version::{
    Build, Identifier, IncrementError, PreRelease, ValidationError, ValidationErrorKind, Version,
    VersionPart,
};

/// The latest version of the semantic versioning specification that is fully supported.
pub const SPEC_VERSION: Version = Version::new(2, 0, 0);

/// Parse a string slice into a [`Version`].
///
/// ## Examples
///
/// ```rust
/// # use strict_semver::{parse, ErrorKind, NumberError, Version};
/// assert_eq!(parse("1.2.3"), Ok(Version::new(1, 2, 3)));
///
/// let error = parse("1.2.3-").unwrap_err();
/// assert_eq!(error.error_kind(), ErrorKind::EmptyPreRelease);
///
/// let error = parse("1.2.03").unwrap_err();
/// assert_eq!(error.error_kind(), ErrorKind::InvalidPatch(NumberError::LeadingZero));
/// assert_eq!(error.erroneous_input(), "03");
/// ```
pub fn parse(input: &str) -> Result<Version, Error<'_>> {
    Version::parse(input)
}

/// Parse a string slice into a custom version type.
///
/// See [`VersionBuilder`] for how to implement a custom type.
pub fn parse_into<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    strict_semver_parser::parse::<V>(input)
}

/// Parse a string slice into a [`Version`], accepting common non-strict spellings.
///
/// Surrounding whitespace and a leading `v` are removed, leading zeroes are dropped,
/// and missing minor and patch components default to `0`.
///
/// ## Examples
///
/// ```rust
/// # use strict_semver::{parse_tolerant, ErrorKind, Version};
/// assert_eq!(parse_tolerant("v1.2").unwrap(), Version::new(1, 2, 0));
/// assert_eq!(parse_tolerant("01.02.03").unwrap(), Version::new(1, 2, 3));
///
/// let error = parse_tolerant("1.0-rc.1").unwrap_err();
/// assert_eq!(error.error_kind(), ErrorKind::InvalidMinor(strict_semver::NumberError::NotANumber));
/// ```
pub fn parse_tolerant(input: &str) -> Result<Version, OwnedError> {
    Version::parse_tolerant(input)
}

/// Parse a string slice that is known to be a valid version.
///
/// ## Panics
///
/// Panics with the error message if the input is not a valid version.
///
/// ## Examples
///
/// ```rust
/// # use strict_semver::{must_parse, Version};
/// const MINIMUM: &str = "1.40.0";
/// assert_eq!(must_parse(MINIMUM), Version::new(1, 40, 0));
/// ```
///
/// ```rust,should_panic
/// strict_semver::must_parse("1.40");
/// ```
pub fn must_parse(input: &str) -> Version {
    match Version::parse(input) {
        Ok(version) => version,
        Err(error) => panic!("{}", error),
    }
}

/// Compile a range expression that is known to be valid.
///
/// ## Panics
///
/// Panics with the error message if the range expression is not valid.
pub fn must_compile_range(input: &str) -> Matcher {
    match compile_range(input) {
        Ok(matcher) => matcher,
        Err(error) => panic!("{}", error),
    }
}

#[cfg(test)]
mod tests;
