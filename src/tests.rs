//! Some of these tests are replicated in the crate documentation as a doc test
//! Please try to keep them in sync

mod custom_test {
    use crate::VersionBuilder;

    /// Simpler version struct that lives only on the stack
    #[derive(Debug, Default)]
    struct MyVersion {
        numbers: [u64; 3],
        is_pre_release: bool,
    }

    /// The VersionBuilder trait is generic over the lifetime of the input string.
    /// We don't store references to those strings, so we don't care about the specific lifetime.
    impl VersionBuilder<'_> for MyVersion {
        /// We will modify the target struct directly
        type Out = Self;

        /// Construct a new builder instance.
        fn new() -> Self {
            Self::default()
        }

        /// Construct the final result. In this case, we can just return ourselves.
        fn build(self) -> Self::Out {
            self
        }

        /// Called when the major component was found.
        fn set_major(&mut self, major: u64) {
            self.numbers[0] = major;
        }

        /// Called when the minor component was found.
        fn set_minor(&mut self, minor: u64) {
            self.numbers[1] = minor;
        }

        /// Called when the patch component was found.
        fn set_patch(&mut self, patch: u64) {
            self.numbers[2] = patch;
        }

        /// Called for pre-release identifiers that contain more than digits.
        fn add_pre_release_str(&mut self, _pre_release: &str) {
            self.is_pre_release = true
        }

        /// Called for numeric pre-release identifiers, the number has already been parsed.
        fn add_pre_release_num(&mut self, _pre_release: u64) {
            self.is_pre_release = true
        }
    }

    #[test]
    fn test_custom_version_builder() {
        let input = "1.3.37-alpha21+build.42";

        let my_version = crate::parse_into::<MyVersion>(input).unwrap();

        assert_eq!([1, 3, 37], my_version.numbers);
        assert!(my_version.is_pre_release);
    }

    #[test]
    fn test_custom_version_builder_numeric_pre_release() {
        let my_version = crate::parse_into::<MyVersion>("0.0.1-7").unwrap();

        assert_eq!([0, 0, 1], my_version.numbers);
        assert!(my_version.is_pre_release);
    }
}

mod builder_as_validation_test {
    use crate::VersionBuilder;

    /// newtype around unit, so we can implement the VersionBuilder trait for it
    #[derive(Debug, Default)]
    struct Valid;

    impl VersionBuilder<'_> for Valid {
        /// Here we parse into a different value than Self
        type Out = ();

        fn new() -> Self {
            Self::default()
        }

        /// Nothing to keep, all other methods use the default implementation
        fn build(self) -> Self::Out {}
    }

    fn is_valid(v: &str) -> bool {
        crate::parse_into::<Valid>(v).is_ok()
    }

    #[test]
    fn test_custom_version_validation() {
        assert!(is_valid("1.2.3-pre"));
        assert!(is_valid("1.2.3+build.001"));
        assert!(!is_valid("1.2"));
        assert!(!is_valid("1.2.3-01"));
    }
}

mod version_test {
    use crate::{parse, parse_tolerant, ErrorKind, NumberError, Version, SPEC_VERSION};
    use test_case::test_case;

    #[test_case("0.0.0"; "zero")]
    #[test_case("1.2.3-alpha.1"; "pre-release")]
    #[test_case("1.2.3+build.001"; "build")]
    #[test_case("1.2.3-0.a-b.C+001-b"; "everything")]
    #[test_case("18446744073709551615.0.0-18446744073709551615"; "largest numbers")]
    fn test_round_trip(input: &str) {
        let version = parse(input).unwrap();
        assert_eq!(version.to_string(), input);
        assert_eq!(parse(&version.to_string()).unwrap(), version);
    }

    #[test_case("01.2.3" => ErrorKind::InvalidMajor(NumberError::LeadingZero); "major")]
    #[test_case("1.02.3" => ErrorKind::InvalidMinor(NumberError::LeadingZero); "minor")]
    #[test_case("1.2.03" => ErrorKind::InvalidPatch(NumberError::LeadingZero); "patch")]
    #[test_case("1.2.3-01" => ErrorKind::InvalidPreReleaseNumber(NumberError::LeadingZero); "pre-release")]
    fn test_leading_zero(input: &str) -> ErrorKind {
        parse(input).unwrap_err().error_kind()
    }

    #[test]
    fn test_leading_zero_in_build_is_fine() {
        assert_eq!(parse("1.2.3+01").unwrap().build.to_string(), "01");
    }

    #[test_case("v1.2" => Ok(Version::new(1, 2, 0)); "short with prefix")]
    #[test_case("01.02.03" => Ok(Version::new(1, 2, 3)); "leading zeroes")]
    #[test_case("1.0-rc.1" => Err(ErrorKind::InvalidMinor(NumberError::NotANumber)); "short with pre-release")]
    #[test_case("1-rc" => Err(ErrorKind::AmbiguousShorthand); "major only with pre-release")]
    fn test_tolerant(input: &str) -> Result<Version, ErrorKind> {
        parse_tolerant(input).map_err(|e| e.error_kind())
    }

    #[test]
    fn test_spec_version() {
        assert_eq!(SPEC_VERSION.to_string(), "2.0.0");
        assert!(!SPEC_VERSION.is_pre_release());
    }

    #[test]
    fn test_must_parse() {
        assert_eq!(crate::must_parse("1.2.3"), Version::new(1, 2, 3));
    }

    #[test]
    #[should_panic(expected = "Expected a major.minor.patch version, found `1.2`")]
    fn test_must_parse_panics() {
        let _ = crate::must_parse("1.2");
    }

    #[test]
    fn test_increment_overflow() {
        let mut version = parse("1.18446744073709551615.3-rc").unwrap();
        let error = version.bump_minor().unwrap_err();
        assert_eq!(error.part(), crate::VersionPart::Minor);
        assert_eq!(version.to_string(), "1.18446744073709551615.3-rc");

        version.bump_major().unwrap();
        assert_eq!(version.to_string(), "2.0.0-rc");
    }
}

mod ordering_test {
    use crate::{parse, Version};
    use std::cmp::Ordering;

    const SAMPLE: &[&str] = &[
        "0.0.0",
        "0.0.1-0",
        "0.0.1",
        "0.1.0",
        "1.0.0-0.3.7",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0-x.7.z.92",
        "1.0.0-x-y-z.--",
        "1.0.0",
        "1.0.1",
        "1.10.0",
        "2.0.0-RC",
        "2.0.0-rc",
        "2.0.0",
        "10.0.0",
    ];

    fn versions() -> Vec<Version> {
        SAMPLE.iter().map(|v| parse(v).unwrap()).collect()
    }

    #[test]
    fn test_sample_is_sorted() {
        let versions = versions();
        for window in versions.windows(2) {
            assert_eq!(
                window[0].cmp(&window[1]),
                Ordering::Less,
                "{} < {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_total_and_antisymmetric() {
        let versions = versions();
        for a in &versions {
            for b in &versions {
                assert_eq!(a.cmp(b), b.cmp(a).reverse(), "{} vs {}", a, b);
                assert_eq!(a.cmp(b) == Ordering::Equal, a == b, "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_agrees_with_semver() {
        let versions = versions();
        for a in &versions {
            for b in &versions {
                let sa = semver::Version::parse(&a.to_string()).unwrap();
                let sb = semver::Version::parse(&b.to_string()).unwrap();
                assert_eq!(a.cmp(b), sa.cmp(&sb), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_build_metadata_is_ignored() {
        let a = parse("1.2.3-rc.1+build.1").unwrap();
        let b = parse("1.2.3-rc.1+build.2").unwrap();
        let c = parse("1.2.3-rc.1").unwrap();
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.cmp(&c), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_semver() {
        use std::convert::TryFrom;

        for version in versions() {
            let converted = semver::Version::try_from(&version).unwrap();
            assert_eq!(converted.to_string(), version.to_string());
        }
    }
}

mod range_test {
    use crate::{compile_range, must_compile_range, parse, Matcher, RangeErrorKind};
    use test_case::test_case;

    #[test_case(">1.0.0 <2.0.0", "1.5.0" => true; "inside")]
    #[test_case(">1.0.0 <2.0.0", "2.0.0" => false; "upper bound")]
    #[test_case("1.2.x", "1.2.9" => true; "wildcard")]
    #[test_case("1.2.x", "1.3.0" => false; "wildcard above")]
    #[test_case("<2.0.0 || >=3.0.0", "2.5.0" => false; "gap")]
    #[test_case("<2.0.0 || >=3.0.0", "3.1.0" => true; "alternative")]
    fn test_matches(range: &str, version: &str) -> bool {
        compile_range(range)
            .unwrap()
            .matches(&parse(version).unwrap())
    }

    #[test]
    fn test_compile_render_compile() {
        let matcher = compile_range(">= 1.2.x !=1.4.x <2.0.0 || 3.x").unwrap();
        let rendered = matcher.to_string();
        let recompiled = rendered.parse::<Matcher>().unwrap();

        for version in &["1.1.0", "1.2.0", "1.3.9", "1.4.2", "1.5.0", "2.0.0", "3.9.9", "4.0.0"] {
            let version = parse(version).unwrap();
            assert_eq!(matcher.matches(&version), recompiled.matches(&version));
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            compile_range("|| 1.0.0").unwrap_err().kind(),
            RangeErrorKind::DanglingOr
        );
        assert_eq!(
            compile_range("~1.0.0").unwrap_err().kind(),
            RangeErrorKind::UnknownComparator
        );
    }

    #[test]
    #[should_panic(expected = "Unknown comparator in `^1.0.0`")]
    fn test_must_compile_range_panics() {
        let _ = must_compile_range("^1.0.0");
    }
}

mod serde_test {
    use crate::Version;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Deserialize, Serialize)]
    struct DependencySpec {
        name: String,
        version: Version,
    }

    #[test]
    fn test_serde_feature() {
        let input = r#"{"name":"strict_semver","version":"1.3.37+build.42"}"#;

        let dep = serde_json::from_str::<DependencySpec>(input).unwrap();
        assert_eq!(dep.name, "strict_semver");

        let mut expected = Version::new(1, 3, 37);
        expected.build.push("build");
        expected.build.push("42");
        assert_eq!(dep.version, expected);
        assert_eq!(dep.version.build, expected.build);

        assert_eq!(serde_json::to_string(&dep).unwrap(), input);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let input = r#"{"name":"strict_semver","version":"1.3"}"#;
        assert!(serde_json::from_str::<DependencySpec>(input).is_err());

        let input = r#"{"name":"strict_semver","version":1}"#;
        let error = serde_json::from_str::<DependencySpec>(input).unwrap_err();
        assert!(error.to_string().starts_with("invalid type: integer `1`"));

        let mut dep = DependencySpec {
            name: String::from("strict_semver"),
            version: Version::new(1, 0, 0),
        };
        dep.version.pre.push("not valid");
        assert!(serde_json::to_string(&dep).is_err());
    }
}
