use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use regex::Regex;
use strict_semver::{compile_range, parse, parse_tolerant, Version};

const INPUT_S: &str = "1.0.0";
const INPUT_XL: &str = "1.2.3-1.alpha1.9+build5.7.3aedf.01337";

fn regex_parser(re: &Regex, input: &str) -> Option<Version> {
    let caps = re.captures(input)?;

    let mut version = Version::new(
        caps.name("major")?.as_str().parse().ok()?,
        caps.name("minor")?.as_str().parse().ok()?,
        caps.name("patch")?.as_str().parse().ok()?,
    );

    if let Some(pre) = caps.name("prerelease") {
        for id in pre.as_str().split('.') {
            match id.parse::<u64>() {
                Ok(n) => version.pre.push(n),
                Err(_) => version.pre.push(id),
            }
        }
    }
    if let Some(build) = caps.name("buildmetadata") {
        for id in build.as_str().split('.') {
            version.build.push(id);
        }
    }

    Some(version)
}

fn bench_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parser");
    let re = Regex::new(r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$").unwrap();

    for &input in [INPUT_S, INPUT_XL].iter() {
        let strict = BenchmarkId::new("strict_parser", input);
        group.bench_with_input(strict, input, |b, input| {
            b.iter(|| parse(black_box(input)).unwrap())
        });
        let tolerant = BenchmarkId::new("tolerant_parser", input);
        group.bench_with_input(tolerant, input, |b, input| {
            b.iter(|| parse_tolerant(black_box(input)).unwrap())
        });
        let semver = BenchmarkId::new("semver_parser", input);
        group.bench_with_input(semver, input, |b, input| {
            b.iter(|| semver::Version::parse(black_box(input)).unwrap())
        });
        let regex = BenchmarkId::new("regex_parser", input);
        group.bench_with_input(regex, &(input, &re), |b, (input, re)| {
            b.iter(|| regex_parser(re, black_box(input)).unwrap())
        });
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compare");

    let pairs = [
        ("1.2.3", "1.2.4"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0-beta.11+build", "1.0.0-beta.11+other"),
    ];
    for &(lhs, rhs) in pairs.iter() {
        let id = format!("{} {}", lhs, rhs);

        let strict = (parse(lhs).unwrap(), parse(rhs).unwrap());
        group.bench_with_input(BenchmarkId::new("strict", &id), &strict, |b, (l, r)| {
            b.iter(|| black_box(l).cmp(black_box(r)))
        });

        let semver = (
            semver::Version::parse(lhs).unwrap(),
            semver::Version::parse(rhs).unwrap(),
        );
        group.bench_with_input(BenchmarkId::new("semver", &id), &semver, |b, (l, r)| {
            b.iter(|| black_box(l).cmp(black_box(r)))
        });
    }

    group.finish();
}

fn bench_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("Range");

    // the same constraints in both range grammars
    let ranges = [
        (">=1.2.0 <2.0.0", ">=1.2.0, <2.0.0"),
        ("1.2.x", "=1.2"),
        (">=1.0.0 <1.5.0 || >=2.0.0 <3.0.0", ">=1.0.0, <1.5.0"),
    ];
    let version = parse("1.4.7").unwrap();
    let semver_version = semver::Version::parse("1.4.7").unwrap();

    for &(strict, semver) in ranges.iter() {
        group.bench_with_input(BenchmarkId::new("strict_compile", strict), strict, |b, r| {
            b.iter(|| compile_range(black_box(r)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("semver_compile", semver), semver, |b, r| {
            b.iter(|| semver::VersionReq::parse(black_box(r)).unwrap())
        });

        let matcher = compile_range(strict).unwrap();
        group.bench_with_input(BenchmarkId::new("strict_match", strict), &matcher, |b, m| {
            b.iter(|| m.matches(black_box(&version)))
        });
        let req = semver::VersionReq::parse(semver).unwrap();
        group.bench_with_input(BenchmarkId::new("semver_match", semver), &req, |b, r| {
            b.iter(|| r.matches(black_box(&semver_version)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parsers, bench_compare, bench_ranges);
criterion_main!(benches);
