use std::fmt::{self, Display};
use strict_semver_parser::{ErrorKind, OwnedError};

/// Possible errors that happen while compiling a range expression.
///
/// The error keeps the complete range expression and, where the error can be
/// attributed to a single comparator, the offending token.
///
/// # Example
///
/// ```rust
/// # use strict_semver_range::{compile_range, RangeErrorKind};
/// let error = compile_range(">=1.2.0 ||").unwrap_err();
/// assert_eq!(error.kind(), RangeErrorKind::DanglingOr);
/// assert_eq!(error.to_string(), "`||` must separate two range groups in `>=1.2.0 ||`");
///
/// let error = compile_range("~1.2.0").unwrap_err();
/// assert_eq!(error.kind(), RangeErrorKind::UnknownComparator);
/// assert_eq!(error.token(), Some("~1.2.0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeError {
    input: String,
    token: Option<String>,
    kind: RangeErrorKind,
    source: Option<OwnedError>,
}

/// The reason why a range expression was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RangeErrorKind {
    /// A `||` appeared as the first or the last token
    DanglingOr,
    /// The expression or one of the groups between `||` had no comparators
    EmptyRangeGroup,
    /// A comparator token contained no version
    MissingVersion,
    /// The comparator symbol is not one of `=`, `==`, `!`, `!=`, `>`, `>=`, `<`, `<=`
    UnknownComparator,
    /// The version of a comparator could not be parsed
    InvalidVersion(ErrorKind),
    /// A wildcard could not be expanded without overflowing its upper bound
    WildcardOverflow,
    /// The negated wildcards of a group would expand into more than
    /// [`crate::MAX_GROUP_ALTERNATIVES`] alternatives
    TooManyAlternatives,
}

impl RangeError {
    /// The complete range expression
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The token that caused the error, if any
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The reason of the failure
    pub fn kind(&self) -> RangeErrorKind {
        self.kind
    }

    /// The parser error for [`RangeErrorKind::InvalidVersion`]
    pub fn version_error(&self) -> Option<&OwnedError> {
        self.source.as_ref()
    }

    fn culprit(&self) -> &str {
        self.token.as_deref().unwrap_or(&self.input)
    }
}

impl Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            RangeErrorKind::DanglingOr => write!(
                f,
                "`||` must separate two range groups in `{}`",
                self.input
            ),
            RangeErrorKind::EmptyRangeGroup => write!(f, "Empty range group in `{}`", self.input),
            RangeErrorKind::MissingVersion => {
                write!(f, "Could not get a version from `{}`", self.culprit())
            }
            RangeErrorKind::UnknownComparator => {
                write!(f, "Unknown comparator in `{}`", self.culprit())
            }
            RangeErrorKind::InvalidVersion(_) => {
                write!(f, "Invalid version in `{}`", self.culprit())?;
                if let Some(source) = &self.source {
                    write!(f, ": {}", source)?;
                }
                Ok(())
            }
            RangeErrorKind::WildcardOverflow => write!(
                f,
                "The wildcard in `{}` has no upper bound",
                self.culprit()
            ),
            RangeErrorKind::TooManyAlternatives => write!(
                f,
                "Too many negated wildcards in one range group, at `{}`",
                self.culprit()
            ),
        }
    }
}

impl std::error::Error for RangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| -> &(dyn std::error::Error + 'static) { e })
    }
}

/// A range error before it is attached to the complete input.
#[derive(Debug)]
pub(crate) struct TokenError {
    pub(crate) kind: RangeErrorKind,
    pub(crate) token: Option<String>,
    pub(crate) source: Option<OwnedError>,
}

impl TokenError {
    pub(crate) fn new(kind: RangeErrorKind, token: Option<&str>) -> Self {
        Self {
            kind,
            token: token.map(String::from),
            source: None,
        }
    }

    pub(crate) fn invalid_version(token: &str, source: OwnedError) -> Self {
        Self {
            kind: RangeErrorKind::InvalidVersion(source.error_kind()),
            token: Some(String::from(token)),
            source: Some(source),
        }
    }

    pub(crate) fn with_input(self, input: &str) -> RangeError {
        RangeError {
            input: String::from(input),
            token: self.token,
            kind: self.kind,
            source: self.source,
        }
    }
}
