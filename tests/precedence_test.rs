use git_minver::domain::Version;
use std::cmp::Ordering;

const VERSIONS: &[&str] = &[
    "0.0.0-alpha.0",
    "0.0.0",
    "0.0.1",
    "0.1.0-0",
    "0.1.0-alpha",
    "0.1.0",
    "1.0.0-0.3.7",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0-x-y-z.--",
    "1.0.0",
    "1.2.3",
    "1.10.0",
    "2.0.0-9",
    "2.0.0-10",
    "2.0.0-a10",
    "2.0.0-a9",
    "10.0.0",
    "18446744073709551615.0.0",
];

#[test]
fn test_precedence_agrees_with_semver_crate() {
    for a in VERSIONS {
        for b in VERSIONS {
            let ours = a.parse::<Version>().unwrap().cmp(&b.parse::<Version>().unwrap());
            let reference = semver::Version::parse(a)
                .unwrap()
                .cmp(&semver::Version::parse(b).unwrap());
            assert_eq!(ours, reference, "comparing {} with {}", a, b);
        }
    }
}

#[test]
fn test_build_metadata_does_not_affect_precedence() {
    let plain: Version = "1.0.0-rc.1".parse().unwrap();
    let with_metadata: Version = "1.0.0-rc.1+build.5".parse().unwrap();

    assert_eq!(plain.cmp(&with_metadata), Ordering::Equal);
    assert_eq!(plain, with_metadata);
    assert_eq!(with_metadata.to_string(), "1.0.0-rc.1+build.5");
}
