//! Strict semantic version.
//!
//! Companion version struct for the strict_semver_parser parser.
//! The version owns its metadata, orders itself by semantic version precedence,
//! and can re-check manually assembled metadata with [`Version::validate`].
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

use std::{
    cmp::Ordering,
    convert::TryFrom,
    fmt::{self, Display, Write},
    hash,
    str::FromStr,
};
use strict_semver_parser::{Error, OwnedError, VersionBuilder};

mod error;
mod metadata;
pub use error::{IncrementError, ValidationError, ValidationErrorKind, VersionPart};
pub use metadata::{Build, Identifier, PreRelease};

/// Represents a semantic version number.
///
/// Equality, ordering, and hashing follow semantic version precedence and ignore the build metadata.
#[derive(Debug, Clone, Default)]
pub struct Version {
    /// The major version.
    pub major: u64,
    /// The minor version.
    pub minor: u64,
    /// The patch version.
    pub patch: u64,
    /// The pre-release metadata.
    pub pre: PreRelease,
    /// The build metadata.
    pub build: Build,
}

impl Version {
    /// Constructs a new version out of the three regular version components
    ///
    /// ## Examples
    ///
    /// ```
    /// # use strict_semver_version::Version;
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.to_string(), "1.2.3")
    /// ```
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: PreRelease::empty(),
            build: Build::empty(),
        }
    }

    /// Parse a string slice into a Version.
    ///
    /// The input must be a complete `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version.
    /// For more information, see [`strict_semver_parser::parse`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_version::Version;
    /// let version = Version::parse("1.2.3-rc.1+build.42");
    /// assert!(version.is_ok());
    ///
    /// let version = Version::parse("1.2");
    /// assert!(version.is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error<'_>> {
        strict_semver_parser::parse::<Self>(input)
    }

    /// Parse a string slice into a Version, accepting common non-strict spellings like `v1.2`.
    ///
    /// For more information, see [`strict_semver_parser::parse_tolerant`].
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_version::Version;
    /// let version = Version::parse_tolerant("v1.2").unwrap();
    /// assert_eq!(version, Version::new(1, 2, 0));
    /// ```
    pub fn parse_tolerant(input: &str) -> Result<Self, OwnedError> {
        strict_semver_parser::parse_tolerant::<Self, _>(input)
    }

    /// Bumps the major version.
    ///
    /// Sets minor and patch to 0, keeps pre-release and build identifiers.
    /// Fails if the major version is already at its maximum, in which case the version is not modified.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_version::Version;
    /// let mut version = Version::parse("1.2.3-pre+build").unwrap();
    /// version.bump_major().unwrap();
    /// assert_eq!(version.to_string(), "2.0.0-pre+build");
    /// ```
    pub fn bump_major(&mut self) -> Result<(), IncrementError> {
        *self = self.bumped_major()?;
        Ok(())
    }

    /// Returns a new version with the major version bumped.
    ///
    /// Sets minor and patch to 0, keeps pre-release and build identifiers.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_version::Version;
    /// let version = Version::parse("1.2.3-pre+build").unwrap();
    /// assert_eq!(version.bumped_major().unwrap().to_string(), "2.0.0-pre+build");
    /// ```
    pub fn bumped_major(&self) -> Result<Self, IncrementError> {
        Ok(Version {
            major: increment(self.major, VersionPart::Major)?,
            minor: 0,
            patch: 0,
            pre: self.pre.clone(),
            build: self.build.clone(),
        })
    }

    /// Bumps the minor version.
    ///
    /// Sets patch to 0, keeps pre-release and build identifiers.
    /// Fails if the minor version is already at its maximum, in which case the version is not modified.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_version::Version;
    /// let mut version = Version::parse("1.2.3-pre+build").unwrap();
    /// version.bump_minor().unwrap();
    /// assert_eq!(version.to_string(), "1.3.0-pre+build");
    /// ```
    pub fn bump_minor(&mut self) -> Result<(), IncrementError> {
        *self = self.bumped_minor()?;
        Ok(())
    }

    /// Returns a new version with the minor version bumped.
    ///
    /// Sets patch to 0, keeps pre-release and build identifiers.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_version::Version;
    /// let version = Version::parse("1.2.3-pre+build").unwrap();
    /// assert_eq!(version.bumped_minor().unwrap().to_string(), "1.3.0-pre+build");
    /// ```
    pub fn bumped_minor(&self) -> Result<Self, IncrementError> {
        Ok(Version {
            major: self.major,
            minor: increment(self.minor, VersionPart::Minor)?,
            patch: 0,
            pre: self.pre.clone(),
            build: self.build.clone(),
        })
    }

    /// Bumps the patch version.
    ///
    /// Keeps pre-release and build identifiers.
    /// Fails if the patch version is already at its maximum, in which case the version is not modified.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_version::Version;
    /// let mut version = Version::parse("1.2.3-pre+build").unwrap();
    /// version.bump_patch().unwrap();
    /// assert_eq!(version.to_string(), "1.2.4-pre+build");
    /// ```
    pub fn bump_patch(&mut self) -> Result<(), IncrementError> {
        self.patch = increment(self.patch, VersionPart::Patch)?;
        Ok(())
    }

    /// Returns a new version with the patch version bumped.
    ///
    /// Keeps pre-release and build identifiers.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_version::Version;
    /// let version = Version::parse("1.2.3-pre+build").unwrap();
    /// assert_eq!(version.bumped_patch().unwrap().to_string(), "1.2.4-pre+build");
    /// ```
    pub fn bumped_patch(&self) -> Result<Self, IncrementError> {
        let mut version = self.clone();
        version.bump_patch()?;
        Ok(version)
    }

    /// Returns true if this version has pre-release metadata, i.e. it represents a pre-release.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_version::Version;
    /// let version = Version::parse("1.0.0").unwrap();
    /// assert!(!version.is_pre_release());
    ///
    /// let version = Version::parse("1.0.0-pre").unwrap();
    /// assert!(version.is_pre_release());
    ///
    /// let version = Version::parse("1.0.0+build").unwrap();
    /// assert!(!version.is_pre_release());
    /// ```
    pub fn is_pre_release(&self) -> bool {
        self.pre.is_defined()
    }

    /// Checks that the pre-release and build identifiers can be rendered and parsed back.
    ///
    /// Versions that came out of the parser always pass.
    /// The fields are public though, and identifiers pushed manually are not checked.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_version::{Version, ValidationErrorKind};
    /// let mut version = Version::new(1, 0, 0);
    /// assert!(version.validate().is_ok());
    ///
    /// version.pre.push("alpha");
    /// version.build.push("");
    ///
    /// let error = version.validate().unwrap_err();
    /// assert_eq!(error.kind(), ValidationErrorKind::EmptyBuildMetadata);
    /// assert_eq!(error.index(), 0);
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pre.validate()?;
        self.build.validate()
    }
}

fn increment(value: u64, part: VersionPart) -> Result<u64, IncrementError> {
    value
        .checked_add(1)
        .ok_or_else(|| IncrementError::overflow(part))
}

impl From<(u64, u64, u64)> for Version {
    fn from((x, y, z): (u64, u64, u64)) -> Self {
        Version::new(x, y, z)
    }
}

impl From<[u64; 3]> for Version {
    fn from(v: [u64; 3]) -> Self {
        Version::new(v[0], v[1], v[2])
    }
}

impl FromStr for Version {
    type Err = OwnedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).map_err(|e| e.owned())
    }
}

impl<'input> TryFrom<&'input str> for Version {
    type Error = Error<'input>;

    fn try_from(value: &'input str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = String::with_capacity(16);
        write!(result, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.pre.is_defined() {
            write!(result, "-{}", self.pre)?;
        }
        if self.build.is_defined() {
            write!(result, "+{}", self.build)?;
        }

        f.pad(result.as_ref())
    }
}

impl PartialEq for Version {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.pre == other.pre
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.pre.cmp(&other.pre))
    }
}

impl hash::Hash for Version {
    fn hash<H: hash::Hasher>(&self, into: &mut H) {
        self.major.hash(into);
        self.minor.hash(into);
        self.patch.hash(into);
        self.pre.hash(into);
    }
}

impl<'input> VersionBuilder<'input> for Version {
    type Out = Self;

    fn new() -> Self {
        Version::default()
    }

    fn set_major(&mut self, major: u64) {
        self.major = major;
    }

    fn set_minor(&mut self, minor: u64) {
        self.minor = minor;
    }

    fn set_patch(&mut self, patch: u64) {
        self.patch = patch;
    }

    fn add_pre_release_str(&mut self, pre_release: &'input str) {
        self.pre.push(pre_release)
    }

    fn add_pre_release_num(&mut self, pre_release: u64) {
        self.pre.push(pre_release)
    }

    fn add_build(&mut self, build: &'input str) {
        self.build.push(build)
    }

    fn build(self) -> Self::Out {
        self
    }
}

#[cfg(feature = "serde")]
use serde::de::{self, Deserialize, Deserializer, Visitor};
#[cfg(feature = "serde")]
use serde::ser::{self, Serialize, Serializer};
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if let Err(e) = self.validate() {
            return Err(ser::Error::custom(e));
        }
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl<'de> Visitor<'de> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a semantic version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Version::parse(v).map_err(de::Error::custom)
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match std::str::from_utf8(v) {
                    Ok(s) => self.visit_str(s),
                    Err(_) => Err(de::Error::invalid_value(de::Unexpected::Bytes(v), &self)),
                }
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}

#[cfg(feature = "semver")]
impl TryFrom<&Version> for semver::Version {
    type Error = semver::Error;

    fn try_from(v: &Version) -> Result<Self, Self::Error> {
        Ok(semver::Version {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            pre: semver::Prerelease::try_from(&v.pre)?,
            build: semver::BuildMetadata::try_from(&v.build)?,
        })
    }
}
