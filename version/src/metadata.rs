use crate::{ValidationError, ValidationErrorKind};
use std::{
    cmp::Ordering,
    fmt::{self, Display},
    iter::FromIterator,
    ops::Deref,
};
use strict_semver_parser::{is_alphanumeric, is_numeric};

/// A single pre-release identifier.
///
/// Identifiers that consist only of digits are numeric and compare by their value,
/// all other identifiers compare lexically in ASCII sort order.
/// Numeric identifiers always have lower precedence than alpha-numeric identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// An identifier that's solely numbers.
    Numeric(u64),
    /// An identifier with letters, numbers, and hyphens.
    AlphaNumeric(String),
}

impl Identifier {
    /// Returns true if this is a numeric identifier.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(lhs), Identifier::Numeric(rhs)) => lhs.cmp(rhs),
            (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
            (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::AlphaNumeric(lhs), Identifier::AlphaNumeric(rhs)) => {
                lhs.as_bytes().cmp(rhs.as_bytes())
            }
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(num) => Display::fmt(num, f),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Identifier {
    fn from(num: u64) -> Self {
        Identifier::Numeric(num)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::AlphaNumeric(String::from(s))
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier::AlphaNumeric(s)
    }
}

/// The pre-release segment of a semantic Version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PreRelease {
    identifiers: Vec<Identifier>,
}

impl PreRelease {
    /// Constructs an empty pre-release segment
    pub const fn empty() -> Self {
        Self {
            identifiers: Vec::new(),
        }
    }

    /// Returns true if the pre-release segment is missing
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Returns true if the pre-release is defined
    pub fn is_defined(&self) -> bool {
        !self.identifiers.is_empty()
    }

    /// Appends an identifier.
    ///
    /// The identifier is not validated, see [`crate::Version::validate`].
    pub fn push(&mut self, identifier: impl Into<Identifier>) {
        self.identifiers.push(identifier.into());
    }

    /// Removes all identifiers.
    pub fn clear(&mut self) {
        self.identifiers.clear();
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        for (index, identifier) in self.identifiers.iter().enumerate() {
            let text = match identifier {
                Identifier::Numeric(_) => continue,
                Identifier::AlphaNumeric(text) => text,
            };
            let kind = if text.is_empty() {
                ValidationErrorKind::EmptyPreRelease
            } else if !is_alphanumeric(text) {
                ValidationErrorKind::InvalidPreReleaseCharacter
            } else if is_numeric(text) {
                ValidationErrorKind::DigitsOnlyPreRelease
            } else {
                continue;
            };
            return Err(ValidationError::new(kind, index, text));
        }
        Ok(())
    }
}

impl Deref for PreRelease {
    type Target = [Identifier];

    fn deref(&self) -> &Self::Target {
        &self.identifiers[..]
    }
}

impl AsRef<[Identifier]> for PreRelease {
    fn as_ref(&self) -> &[Identifier] {
        &self.identifiers[..]
    }
}

impl FromIterator<Identifier> for PreRelease {
    fn from_iter<T: IntoIterator<Item = Identifier>>(iter: T) -> Self {
        Self {
            identifiers: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Identifier>> for PreRelease {
    fn from(identifiers: Vec<Identifier>) -> Self {
        Self { identifiers }
    }
}

impl PartialOrd for PreRelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PreRelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            // a release has higher precedence than any of its pre-releases
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => PreReleaseCmp {
                lhs: self.identifiers.iter(),
                rhs: other.identifiers.iter(),
            }
            .find(|c| *c != Ordering::Equal)
            .unwrap_or(Ordering::Equal),
        }
    }
}

struct PreReleaseCmp<I, J> {
    lhs: I,
    rhs: J,
}

impl<'a, I, J> Iterator for PreReleaseCmp<I, J>
where
    I: Iterator<Item = &'a Identifier>,
    J: Iterator<Item = &'a Identifier>,
{
    type Item = Ordering;

    /// Identifiers are compared pairwise, the first difference decides.
    /// A larger set of pre-release fields has a higher precedence than a smaller set, if all of the preceding identifiers are equal.
    /// Example: 1.0.0-alpha < 1.0.0-alpha.1 < 1.0.0-alpha.beta < 1.0.0-beta < 1.0.0-beta.2 < 1.0.0-beta.11 < 1.0.0-rc.1 < 1.0.0.
    fn next(&mut self) -> Option<Self::Item> {
        match (self.lhs.next(), self.rhs.next()) {
            (None, None) => None,
            (Some(_), None) => Some(Ordering::Greater),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(a), Some(b)) => Some(a.cmp(b)),
        }
    }
}

impl Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, self.identifiers.iter())
    }
}

/// The build segment of a semantic Version.
///
/// Build identifiers are kept verbatim and never take part in comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Build {
    identifiers: Vec<String>,
}

impl Build {
    /// Constructs an empty build segment
    pub const fn empty() -> Self {
        Self {
            identifiers: Vec::new(),
        }
    }

    /// Returns true if the build segment is missing
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Returns true if the build is defined
    pub fn is_defined(&self) -> bool {
        !self.identifiers.is_empty()
    }

    /// Appends an identifier.
    ///
    /// The identifier is not validated, see [`crate::Version::validate`].
    pub fn push(&mut self, identifier: impl Into<String>) {
        self.identifiers.push(identifier.into());
    }

    /// Removes all identifiers.
    pub fn clear(&mut self) {
        self.identifiers.clear();
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        for (index, identifier) in self.identifiers.iter().enumerate() {
            let kind = if identifier.is_empty() {
                ValidationErrorKind::EmptyBuildMetadata
            } else if !is_alphanumeric(identifier) {
                ValidationErrorKind::InvalidBuildCharacter
            } else {
                continue;
            };
            return Err(ValidationError::new(kind, index, identifier));
        }
        Ok(())
    }
}

impl Deref for Build {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.identifiers[..]
    }
}

impl AsRef<[String]> for Build {
    fn as_ref(&self) -> &[String] {
        &self.identifiers[..]
    }
}

impl FromIterator<String> for Build {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            identifiers: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Build {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}

impl From<Vec<String>> for Build {
    fn from(identifiers: Vec<String>) -> Self {
        Self { identifiers }
    }
}

impl Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, self.identifiers.iter())
    }
}

fn write_dotted<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

#[cfg(feature = "semver")]
impl std::convert::TryFrom<&PreRelease> for semver::Prerelease {
    type Error = semver::Error;

    fn try_from(pre: &PreRelease) -> Result<Self, Self::Error> {
        semver::Prerelease::new(&pre.to_string())
    }
}

#[cfg(feature = "semver")]
impl std::convert::TryFrom<&Build> for semver::BuildMetadata {
    type Error = semver::Error;

    fn try_from(build: &Build) -> Result<Self, Self::Error> {
        semver::BuildMetadata::new(&build.to_string())
    }
}
