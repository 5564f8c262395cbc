use std::fmt::{self, Display};

/// The numeric component of a version that an increment targeted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VersionPart {
    /// The major version
    Major,
    /// The minor version
    Minor,
    /// The patch version
    Patch,
}

impl Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPart::Major => f.pad("major"),
            VersionPart::Minor => f.pad("minor"),
            VersionPart::Patch => f.pad("patch"),
        }
    }
}

/// An increment would have overflowed the targeted component.
///
/// The version that was to be incremented is left unchanged.
///
/// ## Examples
///
/// ```rust
/// # use strict_semver_version::{Version, VersionPart};
/// let mut version = Version::new(1, u64::MAX, 3);
/// let error = version.bump_minor().unwrap_err();
///
/// assert_eq!(error.part(), VersionPart::Minor);
/// assert_eq!(error.to_string(), "Could not increment the minor version: it is already at 18446744073709551615");
/// assert_eq!(version, Version::new(1, u64::MAX, 3));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IncrementError {
    part: VersionPart,
}

impl IncrementError {
    pub(crate) fn overflow(part: VersionPart) -> Self {
        Self { part }
    }

    /// The component that could not be incremented
    pub fn part(&self) -> VersionPart {
        self.part
    }
}

impl Display for IncrementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not increment the {} version: it is already at {}",
            self.part,
            u64::MAX
        )
    }
}

impl std::error::Error for IncrementError {}

/// The reason why an identifier failed validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A pre-release identifier was empty
    EmptyPreRelease,
    /// A pre-release identifier contained a character outside of `[0-9A-Za-z-]`
    InvalidPreReleaseCharacter,
    /// An alpha-numeric pre-release identifier consisted only of digits
    /// and would be read back as a numeric identifier
    DigitsOnlyPreRelease,
    /// A build identifier was empty
    EmptyBuildMetadata,
    /// A build identifier contained a character outside of `[0-9A-Za-z-]`
    InvalidBuildCharacter,
}

/// A version contains metadata that has no canonical string representation.
///
/// Versions produced by the parser always validate.
/// Identifiers that were pushed manually can violate the grammar, which is reported by this error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    index: usize,
    identifier: String,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, index: usize, identifier: &str) -> Self {
        Self {
            kind,
            index,
            identifier: String::from(identifier),
        }
    }

    /// The reason of the failure
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// The position of the offending identifier within its segment
    pub fn index(&self) -> usize {
        self.index
    }

    /// The offending identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ValidationErrorKind::EmptyPreRelease => write!(
                f,
                "The pre-release identifier at position {} is empty",
                self.index
            ),
            ValidationErrorKind::InvalidPreReleaseCharacter => write!(
                f,
                "Invalid character in the pre-release identifier `{}` at position {}",
                self.identifier, self.index
            ),
            ValidationErrorKind::DigitsOnlyPreRelease => write!(
                f,
                "The pre-release identifier `{}` at position {} must be numeric",
                self.identifier, self.index
            ),
            ValidationErrorKind::EmptyBuildMetadata => write!(
                f,
                "The build identifier at position {} is empty",
                self.index
            ),
            ValidationErrorKind::InvalidBuildCharacter => write!(
                f,
                "Invalid character in the build identifier `{}` at position {}",
                self.identifier, self.index
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(VersionPart::Major => "Could not increment the major version: it is already at 18446744073709551615"; "major")]
    #[test_case(VersionPart::Patch => "Could not increment the patch version: it is already at 18446744073709551615"; "patch")]
    fn test_increment_message(part: VersionPart) -> String {
        IncrementError::overflow(part).to_string()
    }

    #[test_case(ValidationErrorKind::EmptyPreRelease, "" => "The pre-release identifier at position 1 is empty"; "empty pre")]
    #[test_case(ValidationErrorKind::InvalidPreReleaseCharacter, "a.b" => "Invalid character in the pre-release identifier `a.b` at position 1"; "pre char")]
    #[test_case(ValidationErrorKind::DigitsOnlyPreRelease, "007" => "The pre-release identifier `007` at position 1 must be numeric"; "digits")]
    #[test_case(ValidationErrorKind::EmptyBuildMetadata, "" => "The build identifier at position 1 is empty"; "empty build")]
    #[test_case(ValidationErrorKind::InvalidBuildCharacter, "b_1" => "Invalid character in the build identifier `b_1` at position 1"; "build char")]
    fn test_validation_message(kind: ValidationErrorKind, identifier: &str) -> String {
        ValidationError::new(kind, 1, identifier).to_string()
    }

    #[test]
    fn test_accessors() {
        let error = ValidationError::new(ValidationErrorKind::InvalidBuildCharacter, 3, "b_1");
        assert_eq!(error.kind(), ValidationErrorKind::InvalidBuildCharacter);
        assert_eq!(error.index(), 3);
        assert_eq!(error.identifier(), "b_1");
    }
}
