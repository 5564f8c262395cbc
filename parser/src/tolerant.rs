use crate::{parse, Error, ErrorKind, OwnedError, Span, VersionBuilder};
use std::borrow::Cow;

/// Parse a string slice into a Version, accepting common non-strict spellings.
///
/// Before handing the input to the strict [`parse`], the input is normalized:
///
/// - Surrounding whitespace is removed
/// - A single leading `v` or `V` is removed
/// - Leading zeroes are removed from the major, minor, and patch segments
/// - Missing minor or patch segments are filled in as `0`, unless the last given segment
///   carries pre-release or build metadata, which is rejected as ambiguous
///
/// Errors are reported against the normalized input, which is why they are returned as [`OwnedError`].
///
/// ## Examples
///
/// ```rust
/// # use strict_semver_parser::{parse_tolerant, ErrorKind, VersionBuilder};
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
/// assert_eq!(parse_tolerant::<Parts, _>("v1.2"), Ok(Parts(1, 2, 0)));
/// assert_eq!(parse_tolerant::<Parts, _>(" 01.02.03 "), Ok(Parts(1, 2, 3)));
///
/// let error = parse_tolerant::<Parts, _>("1.0-rc").unwrap_err();
/// assert_eq!(error.error_kind(), ErrorKind::AmbiguousShorthand);
/// ```
pub fn parse_tolerant<V, O>(input: &str) -> Result<O, OwnedError>
where
    V: for<'a> VersionBuilder<'a, Out = O>,
{
    let normalized = normalize(input).map_err(|e| e.owned())?;
    parse::<V>(&normalized).map_err(|e| e.owned())
}

fn normalize(input: &str) -> Result<String, Error<'_>> {
    let trimmed = input.trim();
    let start = input.len() - input.trim_start().len();
    let span = Span::new(start, start + trimmed.len());

    let unprefixed = trimmed
        .strip_prefix(|c: char| c == 'v' || c == 'V')
        .unwrap_or(trimmed);
    if unprefixed.is_empty() {
        return Err(Error {
            input,
            span,
            error: ErrorKind::EmptyInput,
        });
    }

    let mut segments = unprefixed
        .splitn(3, '.')
        .map(strip_leading_zeroes)
        .collect::<Vec<_>>();

    if segments.len() < 3 {
        let shorthand = segments.last().map_or(false, |s| s.contains(&['+', '-'][..]));
        if shorthand {
            return Err(Error {
                input,
                span,
                error: ErrorKind::AmbiguousShorthand,
            });
        }
        segments.resize(3, Cow::Borrowed("0"));
    }

    Ok(segments.join("."))
}

fn strip_leading_zeroes(segment: &str) -> Cow<'_, str> {
    if segment.len() < 2 {
        return Cow::Borrowed(segment);
    }
    let stripped = segment.trim_start_matches('0');
    if stripped.bytes().next().map_or(true, |b| !b.is_ascii_digit()) {
        Cow::Owned(format!("0{}", stripped))
    } else {
        Cow::Borrowed(stripped)
    }
}
