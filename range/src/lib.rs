//! Range expressions over strict semantic versions.
//!
//! A range expression is a list of comparators like `>=1.2.0 <2.0.0`,
//! where whitespace separated comparators must all match and `||` separates alternatives.
//! Versions with an `x` in the minor or patch position are wildcards and expand to explicit bounds.
//!
//! ```rust
//! # use strict_semver_range::compile_range;
//! # use strict_semver_version::Version;
//! let matcher = compile_range(">=1.2.0 <2.0.0 || 3.x").unwrap();
//!
//! assert!(matcher.matches(&Version::new(1, 5, 0)));
//! assert!(matcher.matches(&Version::new(3, 9, 1)));
//! assert!(!matcher.matches(&Version::new(2, 5, 0)));
//!
//! assert_eq!(matcher.to_string(), ">=1.2.0 <2.0.0 || >=3.0.0 <4.0.0");
//! ```
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
    fmt::{self, Display},
    str::FromStr,
};
use strict_semver_version::Version;

mod error;
mod expand;

pub use error::{RangeError, RangeErrorKind};

/// The most alternatives a single range group may expand into.
///
/// Every negated wildcard (`!1.2.x`) doubles the alternatives of its group,
/// so a group can hold at most six of them.
pub const MAX_GROUP_ALTERNATIVES: usize = 64;

/// Compile a range expression into a [`Matcher`].
///
/// The expression is split into tokens on whitespace; a comparator may be separated from its version by spaces.
/// Tokens are grouped by `||`, each group must match completely, and any group may match.
/// Wildcard versions are expanded:
///
/// | expression | compiled              |
/// |------------|-----------------------|
/// | `1.2.x`    | `>=1.2.0 <1.3.0`      |
/// | `>1.x`     | `>=2.0.0`             |
/// | `<=1.2.x`  | `<1.3.0`              |
/// | `!=1.2.x`  | `<1.2.0 \|\| >=1.3.0` |
///
/// A negated wildcard cannot be expressed within a single group,
/// the group that contains it is replaced by two groups, one for each bound.
/// A group that would expand into more than [`MAX_GROUP_ALTERNATIVES`] groups
/// fails with [`RangeErrorKind::TooManyAlternatives`].
///
/// ## Examples
///
/// ```rust
/// # use strict_semver_range::compile_range;
/// # use strict_semver_version::Version;
/// let matcher = compile_range(">= 1.0.0 !=1.2.x").unwrap();
/// assert_eq!(matcher.to_string(), ">=1.0.0 <1.2.0 || >=1.0.0 >=1.3.0");
///
/// assert!(matcher.matches(&Version::new(1, 1, 0)));
/// assert!(!matcher.matches(&Version::new(1, 2, 7)));
/// assert!(matcher.matches(&Version::new(1, 3, 0)));
/// ```
pub fn compile_range(input: &str) -> Result<Matcher, RangeError> {
    let tokens = expand::tokenize(input);
    let groups = expand::split_or(&tokens).map_err(|e| e.with_input(input))?;

    let mut alternatives = Vec::with_capacity(groups.len());
    for group in groups {
        let conjunctions = expand::compile_group(group).map_err(|e| e.with_input(input))?;
        alternatives.extend(
            conjunctions
                .into_iter()
                .map(|leaves| Matcher::all(leaves.into_iter().map(Matcher::Leaf).collect())),
        );
    }

    Ok(Matcher::any(alternatives))
}

/// The comparator of a [`VersionRange`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Op {
    /// `=`, `==`, or no comparator at all
    Eq,
    /// `!` or `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `<`
    Lt,
    /// `<=`
    Le,
}

impl Op {
    /// Parses a comparator symbol.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_range::Op;
    /// assert_eq!(Op::from_symbol(""), Some(Op::Eq));
    /// assert_eq!(Op::from_symbol("!="), Some(Op::Ne));
    /// assert_eq!(Op::from_symbol("~>"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol {
            "" | "=" | "==" => Op::Eq,
            "!" | "!=" => Op::Ne,
            ">" => Op::Gt,
            ">=" => Op::Ge,
            "<" => Op::Lt,
            "<=" => Op::Le,
            _ => return None,
        };
        Some(op)
    }

    /// The canonical symbol, equality is rendered without a symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Eq => "",
            Op::Ne => "!",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Lt => "<",
            Op::Le => "<=",
        }
    }

    /// Returns true if the comparator accepts the result of comparing a version to the bound.
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Ge => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Le => ordering != Ordering::Greater,
        }
    }

    /// Applies the comparator to two versions, `version <op> bound`.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_range::Op;
    /// # use strict_semver_version::Version;
    /// let v1 = Version::new(1, 2, 3);
    /// let v2 = Version::parse("1.2.3-rc.1").unwrap();
    ///
    /// assert!(Op::Gt.matches(&v1, &v2));
    /// assert!(Op::Ne.matches(&v1, &v2));
    /// assert!(!Op::Le.matches(&v1, &v2));
    /// ```
    pub fn matches(self, version: &Version, bound: &Version) -> bool {
        self.accepts(version.cmp(bound))
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

/// A single comparator with its bound, like `>=1.2.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRange {
    /// The comparator
    pub op: Op,
    /// The version to compare against
    pub version: Version,
}

impl VersionRange {
    /// Constructs a new comparator
    pub fn new(op: Op, version: Version) -> Self {
        Self { op, version }
    }

    /// Returns true if the version satisfies this comparator.
    pub fn matches(&self, version: &Version) -> bool {
        self.op.matches(version, &self.version)
    }
}

impl Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op.symbol(), self.version)
    }
}

/// A compiled range expression.
///
/// `All` and `Any` nodes are never empty when created by [`compile_range`].
/// Compiled matchers only nest `All` inside `Any`, which is the shape the range grammar can express.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Matcher {
    /// Every matcher must match
    All(Vec<Matcher>),
    /// At least one matcher must match
    Any(Vec<Matcher>),
    /// A single comparator
    Leaf(VersionRange),
}

impl Matcher {
    /// Returns true if the version satisfies the matcher.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// # use strict_semver_range::compile_range;
    /// # use strict_semver_version::Version;
    /// let matcher = compile_range("<2.0.0 || >=3.0.0").unwrap();
    /// assert!(!matcher.matches(&Version::new(2, 5, 0)));
    /// assert!(matcher.matches(&Version::new(3, 1, 0)));
    /// ```
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Matcher::All(matchers) => matchers.iter().all(|m| m.matches(version)),
            Matcher::Any(matchers) => matchers.iter().any(|m| m.matches(version)),
            Matcher::Leaf(range) => range.matches(version),
        }
    }

    fn all(mut matchers: Vec<Matcher>) -> Self {
        if matchers.len() == 1 {
            if let Some(matcher) = matchers.pop() {
                return matcher;
            }
        }
        Matcher::All(matchers)
    }

    fn any(mut matchers: Vec<Matcher>) -> Self {
        if matchers.len() == 1 {
            if let Some(matcher) = matchers.pop() {
                return matcher;
            }
        }
        Matcher::Any(matchers)
    }
}

impl Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (matchers, separator) = match self {
            Matcher::All(matchers) => (matchers, " "),
            Matcher::Any(matchers) => (matchers, " || "),
            Matcher::Leaf(range) => return Display::fmt(range, f),
        };
        for (i, matcher) in matchers.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            Display::fmt(matcher, f)?;
        }
        Ok(())
    }
}

impl FromStr for Matcher {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile_range(s)
    }
}
