//! Strict parser for Semantic Version numbers.
//!
//! The parser accepts exactly the `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` grammar
//! and reports every violation with the kind of error and the location in the input.
//! A tolerant entry point, [`parse_tolerant`], normalizes common non-strict spellings
//! (`v1.2`, `01.02.03`) before delegating to the strict parser.
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

use std::{fmt::Display, ops::Range};

mod classify;
mod tolerant;

pub use classify::{has_leading_zero, is_alphanumeric, is_numeric, parse_numeric};
pub use tolerant::parse_tolerant;

/// Parse a string slice into a Version.
///
/// The input must follow the semantic version grammar exactly:
///
/// - Major, minor, and patch are required, consist of ASCII digits only, and must not have leading zeroes
/// - Pre-release identifiers follow the first `-` that appears before any `+`
/// - Build identifiers follow the first `+`, a `-` inside of the build metadata is part of the identifier
/// - Numeric pre-release identifiers must not have leading zeroes, build identifiers may
///
/// ## Examples
///
/// ```rust
/// # use strict_semver_parser::{parse, ErrorKind, NumberError, VersionBuilder};
/// # #[derive(Debug, Default, PartialEq)]
/// # struct Parts(u64, u64, u64);
/// # impl VersionBuilder<'_> for Parts {
/// #     type Out = Self;
/// #     fn new() -> Self { Self::default() }
/// #     fn set_major(&mut self, major: u64) { self.0 = major }
/// #     fn set_minor(&mut self, minor: u64) { self.1 = minor }
/// #     fn set_patch(&mut self, patch: u64) { self.2 = patch }
/// #     fn build(self) -> Self { self }
/// # }
/// assert_eq!(parse::<Parts>("1.2.3"), Ok(Parts(1, 2, 3)));
/// assert_eq!(parse::<Parts>("1.2.3-rc.1+build.42"), Ok(Parts(1, 2, 3)));
///
/// let error = parse::<Parts>("1.02.3").unwrap_err();
/// assert_eq!(error.error_kind(), ErrorKind::InvalidMinor(NumberError::LeadingZero));
/// ```
pub fn parse<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    parse_version::<V>(input).map_err(|ErrorSpan { error, span }| Error { input, span, error })
}

/// Trait to abstract over version building.
///
/// The methods to implement in this trait represent the components of a semantic version,
/// but allow for parsing into a custom type.
///
/// The trait is generic over the lifetime of the input string, so that one could
/// parse into a version without having to allocate.
///
/// Most methods have a default implementation that does nothing and ignores the input.
/// This can be used to implement some form of validation without needing to keep the result.
///
/// ## Example
///
/// ```rust
/// # use strict_semver_parser::VersionBuilder;
///
/// struct IsPreRelease(bool);
///
/// impl<'input> VersionBuilder<'input> for IsPreRelease {
///     type Out = bool;
///
///     fn new() -> Self {
///        IsPreRelease(false)
///     }
///
///     fn add_pre_release_str(&mut self, _input: &'input str) {
///         self.0 = true;
///     }
///
///     fn add_pre_release_num(&mut self, _input: u64) {
///         self.0 = true;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// fn is_pre_release(v: &str) -> bool {
///     strict_semver_parser::parse::<IsPreRelease>(v).unwrap_or_default()
/// }
///
/// assert!(is_pre_release("1.2.3-pre"));
/// assert!(is_pre_release("1.2.3-1"));
/// assert!(!is_pre_release("1.2.3"));
/// assert!(!is_pre_release("1.2.3+build-1"));
/// ```
pub trait VersionBuilder<'input> {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail and the version (if returned from [`VersionBuilder::build`] at this point)
    /// should represent something akin to "0.0.0"
    fn new() -> Self;

    /// Set the major version component.
    #[allow(unused)]
    fn set_major(&mut self, major: u64) {}

    /// Set the minor version component.
    #[allow(unused)]
    fn set_minor(&mut self, minor: u64) {}

    /// Set the patch version component.
    #[allow(unused)]
    fn set_patch(&mut self, patch: u64) {}

    /// Add an alpha-numeric pre-release identifier.
    ///
    /// The identifier is non-empty, consists of `[0-9A-Za-z-]`, and contains at least one non-digit.
    ///
    /// This method might be called multiple times, interleaved with [`VersionBuilder::add_pre_release_num`].
    #[allow(unused)]
    fn add_pre_release_str(&mut self, pre_release: &'input str) {}

    /// Add a numeric pre-release identifier.
    ///
    /// This method might be called multiple times, interleaved with [`VersionBuilder::add_pre_release_str`].
    #[allow(unused)]
    fn add_pre_release_num(&mut self, pre_release: u64) {}

    /// Add a build identifier.
    ///
    /// The identifier is non-empty and consists of `[0-9A-Za-z-]`.
    /// Build identifiers are never interpreted as numbers, `001` is kept as-is.
    ///
    /// This method might be called multiple times.
    #[allow(unused)]
    fn add_build(&mut self, build: &'input str) {}

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

/// Possible errors that happen during parsing
/// and the location of the input where the error occurred.
///
/// # Example
///
/// ```rust
/// # use strict_semver_parser::VersionBuilder;
/// # struct Unit;
/// # impl VersionBuilder<'_> for Unit {
/// #     type Out = ();
/// #     fn new() -> Self { Unit }
/// #     fn build(self) {}
/// # }
/// let error = strict_semver_parser::parse::<Unit>("1.2.3+").unwrap_err();
/// assert_eq!(error.to_string(), "Could not parse the build identifier: No input");
///
/// let error = strict_semver_parser::parse::<Unit>("1.2.3-b!").unwrap_err();
/// assert_eq!(error.to_string(), "Invalid character in the pre-release identifier `b!`");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Error<'input> {
    input: &'input str,
    span: Span,
    error: ErrorKind,
}

impl<'input> Error<'input> {
    /// Creates a new [`OwnedError`] out of this [`Error`].
    ///
    /// This is specialized version of [`Clone`] which returns a different type.
    #[inline]
    pub fn owned(&self) -> OwnedError {
        OwnedError {
            input: self.input.into(),
            span: self.span,
            error: self.error,
        }
    }

    /// Returns the original input line.
    #[inline]
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns range into the input string that points to the erroneous input.
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.error
    }

    /// Returns a slice from the original input line that triggered the error.
    #[inline]
    pub fn erroneous_input(&self) -> &'input str {
        self.span.at(self.input)
    }

    /// Returns a text representation of the error.
    ///
    /// This is equivalent to the [`Display`] implementation, which can be further customized with format specifiers.
    pub fn error_line(&self) -> String {
        match self.error {
            ErrorKind::EmptyInput => String::from("Version string empty"),
            ErrorKind::MalformedStructure => format!(
                "Expected a major.minor.patch version, found `{}`",
                self.erroneous_input()
            ),
            ErrorKind::InvalidMajor(error) => self.number_line(Part::Major, error),
            ErrorKind::InvalidMinor(error) => self.number_line(Part::Minor, error),
            ErrorKind::InvalidPatch(error) => self.number_line(Part::Patch, error),
            ErrorKind::EmptyPreRelease => {
                String::from("Could not parse the pre-release identifier: No input")
            }
            ErrorKind::InvalidPreReleaseCharacter => format!(
                "Invalid character in the pre-release identifier `{}`",
                self.erroneous_input()
            ),
            ErrorKind::InvalidPreReleaseNumber(error) => self.number_line(Part::PreRelease, error),
            ErrorKind::EmptyBuildMetadata => {
                String::from("Could not parse the build identifier: No input")
            }
            ErrorKind::InvalidBuildCharacter => format!(
                "Invalid character in the build identifier `{}`",
                self.erroneous_input()
            ),
            ErrorKind::AmbiguousShorthand => format!(
                "A short version cannot carry pre-release or build metadata: `{}`",
                self.erroneous_input()
            ),
        }
    }

    fn number_line(&self, part: Part, error: NumberError) -> String {
        match error {
            NumberError::Empty => format!("Could not parse the {} number: No input", part),
            NumberError::NotANumber => format!(
                "Could not parse the {} number: `{}` is not a number",
                part,
                self.erroneous_input()
            ),
            NumberError::LeadingZero => format!(
                "Could not parse the {} number: `{}` has a leading zero",
                part,
                self.erroneous_input()
            ),
            NumberError::Overflow => format!(
                "Could not parse the {} number: `{}` is too large",
                part,
                self.erroneous_input()
            ),
        }
    }

    /// Returns a caret line indication the erroneous input if it was written under the original input line.
    pub fn indicate_erroneous_input(&self) -> String {
        format!(
            "{0:~<start$}{0:^<width$}",
            "",
            start = self.span.start,
            width = self.span.end - self.span.start
        )
    }
}

/// Owned version of [`Error`] which clones the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedError {
    input: String,
    span: Span,
    error: ErrorKind,
}

impl OwnedError {
    /// Return a borrowed version of this error.
    pub fn borrowed(&self) -> Error<'_> {
        Error {
            input: &self.input,
            span: self.span,
            error: self.error,
        }
    }

    /// See [`Error::input`].
    #[inline]
    pub fn input(&self) -> &str {
        self.borrowed().input()
    }

    /// See [`Error::error_span`].
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.borrowed().error_span()
    }

    /// See [`Error::error_kind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.error
    }

    /// See [`Error::erroneous_input`].
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.borrowed().erroneous_input()
    }

    /// See [`Error::error_line`].
    #[inline]
    pub fn error_line(&self) -> String {
        self.borrowed().error_line()
    }

    /// See [`Error::indicate_erroneous_input`].
    #[inline]
    pub fn indicate_erroneous_input(&self) -> String {
        self.borrowed().indicate_erroneous_input()
    }
}

/// Possible errors that can happen.
/// These don't include an information as those are covered by various
/// error methods like [`Error::erroneous_input`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was empty
    EmptyInput,
    /// The input did not contain three dot-separated major, minor, and patch parts
    MalformedStructure,
    /// The major number is not a valid number
    InvalidMajor(NumberError),
    /// The minor number is not a valid number
    InvalidMinor(NumberError),
    /// The patch number is not a valid number
    InvalidPatch(NumberError),
    /// A pre-release identifier was empty
    EmptyPreRelease,
    /// A pre-release identifier contained a character outside of `[0-9A-Za-z-]`
    InvalidPreReleaseCharacter,
    /// A numeric pre-release identifier had a leading zero or did not fit into an u64
    InvalidPreReleaseNumber(NumberError),
    /// A build identifier was empty
    EmptyBuildMetadata,
    /// A build identifier contained a character outside of `[0-9A-Za-z-]`
    InvalidBuildCharacter,
    /// A shortened version (like `1.2`) carried pre-release or build metadata
    AmbiguousShorthand,
}

/// Reasons why a numeric component was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NumberError {
    /// The component was empty
    Empty,
    /// The component contained a character that is not an ASCII digit
    NotANumber,
    /// The component had a leading zero
    LeadingZero,
    /// The component does not fit into an u64
    Overflow,
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.error_line())?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            writeln!(f, "|    {}", self.indicate_erroneous_input())?;
        }
        Ok(())
    }
}

impl Display for OwnedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.borrowed().fmt(f)
    }
}

impl std::error::Error for Error<'_> {}

impl std::error::Error for OwnedError {}

#[derive(Debug, PartialEq, Eq)]
struct ErrorSpan {
    error: ErrorKind,
    span: Span,
}

impl ErrorSpan {
    fn new(error: ErrorKind, span: Span) -> Self {
        Self { error, span }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Part {
    Major,
    Minor,
    Patch,
    PreRelease,
}

impl Part {
    fn error(self, error: NumberError) -> ErrorKind {
        match self {
            Part::Major => ErrorKind::InvalidMajor(error),
            Part::Minor => ErrorKind::InvalidMinor(error),
            Part::Patch => ErrorKind::InvalidPatch(error),
            Part::PreRelease => ErrorKind::InvalidPreReleaseNumber(error),
        }
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Part::Major => f.pad("major"),
            Part::Minor => f.pad("minor"),
            Part::Patch => f.pad("patch"),
            Part::PreRelease => f.pad("pre-release"),
        }
    }
}

fn parse_version<'input, V>(input: &'input str) -> Result<V::Out, ErrorSpan>
where
    V: VersionBuilder<'input>,
{
    if input.is_empty() {
        return Err(ErrorSpan::new(ErrorKind::EmptyInput, Span::default()));
    }

    let malformed = || ErrorSpan::new(ErrorKind::MalformedStructure, Span::new(0, input.len()));
    let major_end = input.find('.').ok_or_else(malformed)?;
    let minor_end = input[major_end + 1..]
        .find('.')
        .map(|i| major_end + 1 + i)
        .ok_or_else(malformed)?;

    let mut version = V::new();
    version.set_major(parse_number(input, Span::new(0, major_end), Part::Major)?);
    version.set_minor(parse_number(
        input,
        Span::new(major_end + 1, minor_end),
        Part::Minor,
    )?);

    // the build separator has to be found first,
    // a hyphen within the build metadata does not start a pre-release
    let rest = minor_end + 1;
    let build_start = input[rest..].find('+').map(|i| rest + i);
    let pre_end = build_start.unwrap_or_else(|| input.len());
    let pre_start = input[rest..pre_end].find('-').map(|i| rest + i);
    let patch_end = pre_start.unwrap_or(pre_end);

    version.set_patch(parse_number(input, Span::new(rest, patch_end), Part::Patch)?);

    if let Some(pre_start) = pre_start {
        for span in dot_separated(input, pre_start + 1, pre_end) {
            add_pre_release(input, span, &mut version)?;
        }
    }

    if let Some(build_start) = build_start {
        for span in dot_separated(input, build_start + 1, input.len()) {
            add_build(input, span, &mut version)?;
        }
    }

    Ok(version.build())
}

fn parse_number(input: &str, span: Span, part: Part) -> Result<u64, ErrorSpan> {
    parse_numeric(span.at(input)).map_err(|error| {
        let span = match error {
            NumberError::Empty => span.or_neighbour(input),
            _ => span,
        };
        ErrorSpan::new(part.error(error), span)
    })
}

fn add_pre_release<'input, V>(
    input: &'input str,
    span: Span,
    version: &mut V,
) -> Result<(), ErrorSpan>
where
    V: VersionBuilder<'input>,
{
    let identifier = span.at(input);
    if identifier.is_empty() {
        return Err(ErrorSpan::new(
            ErrorKind::EmptyPreRelease,
            span.or_neighbour(input),
        ));
    }
    if is_numeric(identifier) {
        version.add_pre_release_num(parse_number(input, span, Part::PreRelease)?);
    } else if is_alphanumeric(identifier) {
        version.add_pre_release_str(identifier);
    } else {
        return Err(ErrorSpan::new(ErrorKind::InvalidPreReleaseCharacter, span));
    }
    Ok(())
}

fn add_build<'input, V>(input: &'input str, span: Span, version: &mut V) -> Result<(), ErrorSpan>
where
    V: VersionBuilder<'input>,
{
    let identifier = span.at(input);
    if identifier.is_empty() {
        return Err(ErrorSpan::new(
            ErrorKind::EmptyBuildMetadata,
            span.or_neighbour(input),
        ));
    }
    if !is_alphanumeric(identifier) {
        return Err(ErrorSpan::new(ErrorKind::InvalidBuildCharacter, span));
    }
    version.add_build(identifier);
    Ok(())
}

/// Spans of the `.` separated identifiers within `start..end`, including empty ones.
fn dot_separated(input: &str, start: usize, end: usize) -> impl Iterator<Item = Span> + '_ {
    let mut offset = start;
    input[start..end].split('.').map(move |identifier| {
        let span = Span::new(offset, offset + identifier.len());
        offset = span.end + 1;
        span
    })
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    fn at<'input>(&self, input: &'input str) -> &'input str {
        &input[self.start..self.end]
    }

    /// An empty span points at the separator next to it instead.
    fn or_neighbour(self, input: &str) -> Self {
        if self.start != self.end {
            self
        } else if self.start < input.len() {
            Self::new(self.start, self.start + 1)
        } else {
            Self::new(self.start.saturating_sub(1), self.start)
        }
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}
