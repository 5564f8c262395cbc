use crate::{error::TokenError, Op, RangeErrorKind, VersionRange, MAX_GROUP_ALTERNATIVES};
use strict_semver_version::Version;

/// Splits a range expression into comparator tokens.
///
/// Whitespace separates tokens, unless the last non-space character was a comparator
/// character, in which case the whitespace is dropped (`>= 1.2.0` becomes `>=1.2.0`).
/// A `||` is always a token on its own, even without surrounding whitespace.
pub(crate) fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut last = None;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            if !matches!(last, Some('>') | Some('<') | Some('=') | Some('!')) {
                flush(&mut tokens, &mut current);
            }
        } else if c == '|' && chars.peek() == Some(&'|') {
            let _ = chars.next();
            flush(&mut tokens, &mut current);
            tokens.push(String::from("||"));
            last = Some('|');
        } else {
            current.push(c);
            last = Some(c);
        }
    }
    flush(&mut tokens, &mut current);

    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

/// Splits the tokens into the AND-groups that are separated by `||`.
pub(crate) fn split_or(tokens: &[String]) -> Result<Vec<&[String]>, TokenError> {
    let is_or = |token: &String| token == "||";

    match (tokens.first(), tokens.last()) {
        (None, _) | (_, None) => {
            return Err(TokenError::new(RangeErrorKind::EmptyRangeGroup, None));
        }
        (Some(first), _) if is_or(first) => {
            return Err(TokenError::new(RangeErrorKind::DanglingOr, Some(first)));
        }
        (_, Some(last)) if is_or(last) => {
            return Err(TokenError::new(RangeErrorKind::DanglingOr, Some(last)));
        }
        _ => {}
    }

    let groups = tokens.split(is_or).collect::<Vec<_>>();
    if groups.iter().any(|group| group.is_empty()) {
        return Err(TokenError::new(RangeErrorKind::EmptyRangeGroup, None));
    }
    Ok(groups)
}

/// Splits a token into its comparator symbol and the version.
///
/// The version starts at the first ASCII digit.
pub(crate) fn split_comparator(token: &str) -> Result<(&str, &str), TokenError> {
    token
        .find(|c: char| c.is_ascii_digit())
        .map(|index| token.split_at(index))
        .ok_or_else(|| TokenError::new(RangeErrorKind::MissingVersion, Some(token)))
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Depth {
    /// `1.x` or `1.x.x`
    Minor,
    /// `1.2.x`
    Patch,
}

/// A version with an `x` in the minor or patch position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Wildcard {
    depth: Depth,
    /// The lower bound, wildcards replaced by `0`
    flat: Version,
}

impl Wildcard {
    /// Returns `None` if the version has no wildcard in a supported position.
    pub(crate) fn detect(token: &str, version: &str) -> Result<Option<Self>, TokenError> {
        let segments = version.split('.').collect::<Vec<_>>();
        let (depth, flat) = match segments[..] {
            [major, "x"] | [major, "x", "x"] => (Depth::Minor, format!("{}.0.0", major)),
            [major, minor, "x"] if minor != "x" => {
                (Depth::Patch, format!("{}.{}.0", major, minor))
            }
            _ => return Ok(None),
        };
        let flat = Version::parse(&flat)
            .map_err(|e| TokenError::invalid_version(token, e.owned()))?;
        Ok(Some(Wildcard { depth, flat }))
    }

    /// The exclusive upper bound of the wildcard
    fn bumped(&self, token: &str) -> Result<Version, TokenError> {
        let bumped = match self.depth {
            Depth::Minor => self.flat.bumped_major(),
            Depth::Patch => self.flat.bumped_minor(),
        };
        bumped.map_err(|_| TokenError::new(RangeErrorKind::WildcardOverflow, Some(token)))
    }

    /// Rewrites the wildcard into explicit comparators.
    ///
    /// | comparator | rewritten          |
    /// |------------|--------------------|
    /// | `>`        | `>=` upper         |
    /// | `>=`       | `>=` lower         |
    /// | `<`        | `<` lower          |
    /// | `<=`       | `<` upper          |
    /// | `=`        | `>=` lower AND `<` upper |
    /// | `!=`       | `<` lower OR `>=` upper  |
    pub(crate) fn expand(self, op: Op, token: &str) -> Result<Expansion, TokenError> {
        let expansion = match op {
            Op::Gt => Expansion::One(VersionRange::new(Op::Ge, self.bumped(token)?)),
            Op::Ge => Expansion::One(VersionRange::new(Op::Ge, self.flat)),
            Op::Lt => Expansion::One(VersionRange::new(Op::Lt, self.flat)),
            Op::Le => Expansion::One(VersionRange::new(Op::Lt, self.bumped(token)?)),
            Op::Eq => {
                let upper = self.bumped(token)?;
                Expansion::Both(
                    VersionRange::new(Op::Ge, self.flat),
                    VersionRange::new(Op::Lt, upper),
                )
            }
            Op::Ne => {
                let upper = self.bumped(token)?;
                Expansion::Either(
                    VersionRange::new(Op::Lt, self.flat),
                    VersionRange::new(Op::Ge, upper),
                )
            }
        };
        Ok(expansion)
    }
}

/// The comparators that a single token compiles into.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expansion {
    One(VersionRange),
    /// Both comparators must match
    Both(VersionRange, VersionRange),
    /// Either comparator must match
    Either(VersionRange, VersionRange),
}

/// Compiles a single comparator token.
pub(crate) fn compile_token(token: &str) -> Result<Expansion, TokenError> {
    let (symbol, version) = split_comparator(token)?;
    let op = Op::from_symbol(symbol)
        .ok_or_else(|| TokenError::new(RangeErrorKind::UnknownComparator, Some(token)))?;

    match Wildcard::detect(token, version)? {
        Some(wildcard) => wildcard.expand(op, token),
        None => {
            let version = Version::parse(version)
                .map_err(|e| TokenError::invalid_version(token, e.owned()))?;
            Ok(Expansion::One(VersionRange::new(op, version)))
        }
    }
}

/// Compiles an AND-group into one or more conjunctions of comparators.
///
/// Every [`Expansion::Either`] doubles the conjunctions, once with each alternative.
/// A group may not expand into more than [`MAX_GROUP_ALTERNATIVES`] conjunctions.
pub(crate) fn compile_group(group: &[String]) -> Result<Vec<Vec<VersionRange>>, TokenError> {
    let mut conjunctions = vec![Vec::with_capacity(group.len())];
    for token in group {
        match compile_token(token)? {
            Expansion::One(range) => {
                for conjunction in &mut conjunctions {
                    conjunction.push(range.clone());
                }
            }
            Expansion::Both(lower, upper) => {
                for conjunction in &mut conjunctions {
                    conjunction.push(lower.clone());
                    conjunction.push(upper.clone());
                }
            }
            Expansion::Either(lower, upper) => {
                if conjunctions.len() * 2 > MAX_GROUP_ALTERNATIVES {
                    return Err(TokenError::new(
                        RangeErrorKind::TooManyAlternatives,
                        Some(token.as_str()),
                    ));
                }
                conjunctions = conjunctions
                    .into_iter()
                    .flat_map(|conjunction| {
                        let mut with_lower = conjunction.clone();
                        with_lower.push(lower.clone());
                        let mut with_upper = conjunction;
                        with_upper.push(upper.clone());
                        vec![with_lower, with_upper]
                    })
                    .collect();
            }
        }
    }
    Ok(conjunctions)
}
