use crate::domain::prerelease::{parse_pre_release, BuildMetadata, PreReleaseIdentifier};
use crate::error::{MinVerError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-([0-9A-Za-z.-]+))?(?:\+([0-9A-Za-z.-]+))?$",
    )
    .expect("version pattern is a valid regex")
});

/// Semantic version (SemVer 2.0) representation
///
/// Values are immutable: every transformation returns a new `Version`.
/// Equality, ordering and hashing follow SemVer precedence, so build
/// metadata is ignored by all three. Compare rendered strings when the
/// metadata matters.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<PreReleaseIdentifier>,
    build_metadata: BuildMetadata,
}

impl Version {
    /// Create a new release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: BuildMetadata::empty(),
        }
    }

    /// Create a version with the given pre-release identifiers
    pub fn with_pre_release(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Vec<PreReleaseIdentifier>,
    ) -> Self {
        Version {
            pre_release,
            ..Version::new(major, minor, patch)
        }
    }

    /// The version used when no tag can be found: `0.0.0-{phase}.0`
    pub fn default_version(default_phase: &PreReleaseIdentifier) -> Self {
        Version::with_pre_release(0, 0, 0, vec![default_phase.clone(), 0.into()])
    }

    /// Parse a version from a tag name that must start with `prefix`
    ///
    /// # Examples
    /// ```ignore
    /// let v = Version::parse("v1.2.3-rc.1", "v")?;
    /// assert_eq!(v.to_string(), "1.2.3-rc.1");
    /// assert!(Version::parse("1.2.3", "v").is_err());
    /// ```
    pub fn parse(text: &str, prefix: &str) -> Result<Self> {
        let remainder = text.strip_prefix(prefix).ok_or_else(|| {
            MinVerError::version(format!("'{}' does not start with '{}'", text, prefix))
        })?;

        let captures = VERSION_PATTERN.captures(remainder).ok_or_else(|| {
            MinVerError::version(format!(
                "'{}' is not major.minor.patch[-pre-release][+metadata]",
                remainder
            ))
        })?;

        let number = |index: usize| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|_| {
                MinVerError::version(format!("Version component too large in '{}'", text))
            })
        };

        let pre_release = match captures.get(4) {
            Some(m) => parse_pre_release(m.as_str())?,
            None => Vec::new(),
        };

        let build_metadata = match captures.get(5) {
            Some(m) => BuildMetadata::parse(m.as_str())?,
            None => BuildMetadata::empty(),
        };

        Ok(Version {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            pre_release,
            build_metadata,
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> &[PreReleaseIdentifier] {
        &self.pre_release
    }

    pub fn build_metadata(&self) -> &BuildMetadata {
        &self.build_metadata
    }

    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Bump the selected part and reset all lower parts to 0
    ///
    /// Pre-release identifiers are dropped; build metadata is kept.
    /// Returns `None` when the part is already `u64::MAX`.
    pub fn bump(&self, part: VersionPart) -> Option<Self> {
        let (major, minor, patch) = match part {
            VersionPart::Major => (self.major.checked_add(1)?, 0, 0),
            VersionPart::Minor => (self.major, self.minor.checked_add(1)?, 0),
            VersionPart::Patch => (self.major, self.minor, self.patch.checked_add(1)?),
        };

        Some(Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: self.build_metadata.clone(),
        })
    }

    /// Derive the version of a commit `height` commits past this one
    ///
    /// - height 0: unchanged
    /// - release: bump `part`, then pre-release `{phase}.{height}`
    /// - pre-release: height appended to the existing identifiers
    ///
    /// Returns `None` when a release cannot be bumped without overflow.
    pub fn with_height(
        &self,
        height: usize,
        part: VersionPart,
        default_phase: &PreReleaseIdentifier,
    ) -> Option<Self> {
        if height == 0 {
            return Some(self.clone());
        }

        let height = PreReleaseIdentifier::Numeric(height as u64);

        if self.is_pre_release() {
            let mut pre_release = self.pre_release.clone();
            pre_release.push(height);

            return Some(Version {
                pre_release,
                ..self.clone()
            });
        }

        Some(Version {
            pre_release: vec![default_phase.clone(), height],
            ..self.bump(part)?
        })
    }

    /// Raise the version to `minimum` when major.minor falls below it
    ///
    /// The raised version is `{min.major}.{min.minor}.0-{phase}.0`.
    /// Applying this twice gives the same result as applying it once.
    pub fn satisfying(&self, minimum: MajorMinor, default_phase: &PreReleaseIdentifier) -> Self {
        if (self.major, self.minor) >= (minimum.major, minimum.minor) {
            return self.clone();
        }

        Version {
            major: minimum.major,
            minor: minimum.minor,
            patch: 0,
            pre_release: vec![default_phase.clone(), 0.into()],
            build_metadata: self.build_metadata.clone(),
        }
    }

    /// Attach build metadata, joining with any metadata already present
    pub fn add_build_metadata(&self, metadata: &BuildMetadata) -> Self {
        Version {
            build_metadata: self.build_metadata.join(metadata),
            ..self.clone()
        }
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(
                || match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => self.pre_release.cmp(&other.pre_release),
                },
            )
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}

impl FromStr for Version {
    type Err = MinVerError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s, "")
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        for (i, id) in self.pre_release.iter().enumerate() {
            let separator = if i == 0 { '-' } else { '.' };
            write!(f, "{}{}", separator, id)?;
        }

        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }

        Ok(())
    }
}

/// The version part incremented on commits past a release tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionPart {
    Major,
    #[default]
    Minor,
    Patch,
}

impl FromStr for VersionPart {
    type Err = MinVerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(VersionPart::Major),
            "minor" => Ok(VersionPart::Minor),
            "patch" => Ok(VersionPart::Patch),
            _ => Err(MinVerError::config(format!(
                "Invalid auto-increment part '{}' - expected major, minor or patch",
                s
            ))),
        }
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionPart::Major => write!(f, "major"),
            VersionPart::Minor => write!(f, "minor"),
            VersionPart::Patch => write!(f, "patch"),
        }
    }
}

/// Minimum major.minor floor ("1", "1.0", "2.5")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MajorMinor {
    pub major: u64,
    pub minor: u64,
}

impl MajorMinor {
    pub fn new(major: u64, minor: u64) -> Self {
        MajorMinor { major, minor }
    }
}

impl FromStr for MajorMinor {
    type Err = MinVerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            MinVerError::config(format!(
                "Invalid minimum major minor '{}' - expected MAJOR or MAJOR.MINOR",
                s
            ))
        };
        let number = |part: &str| -> Result<u64> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u64>().map_err(|_| invalid())
        };

        match s.split_once('.') {
            Some((major, minor)) => Ok(MajorMinor::new(number(major)?, number(minor)?)),
            None => Ok(MajorMinor::new(number(s)?, 0)),
        }
    }
}

impl fmt::Display for MajorMinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
