//! Small immutable values shared by the planner, the renderer and the CLI.

use std::fmt;

use serde::Serialize;

// ============================================================================
// TemplateId
// ============================================================================

/// Closed set of templates a generated project can be built from.
///
/// Each id maps to exactly one static body in the renderer adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    Readme,
    Gitignore,
    LintConfig,
    CoverageIgnore,
    TypeCheckIgnore,
    ProjectManifest,
    ProjectManifestUmbrella,
    ProjectManifestSubpackage,
    Config,
    ConfigUmbrella,
    LibraryEntry,
    LibraryApplicationEntry,
    TestEntry,
    TestBootstrap,
}

impl TemplateId {
    pub const ALL: [TemplateId; 14] = [
        Self::Readme,
        Self::Gitignore,
        Self::LintConfig,
        Self::CoverageIgnore,
        Self::TypeCheckIgnore,
        Self::ProjectManifest,
        Self::ProjectManifestUmbrella,
        Self::ProjectManifestSubpackage,
        Self::Config,
        Self::ConfigUmbrella,
        Self::LibraryEntry,
        Self::LibraryApplicationEntry,
        Self::TestEntry,
        Self::TestBootstrap,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Readme => "readme",
            Self::Gitignore => "ignore-file",
            Self::LintConfig => "lint-config",
            Self::CoverageIgnore => "coverage-ignore",
            Self::TypeCheckIgnore => "type-check-ignore",
            Self::ProjectManifest => "project-manifest",
            Self::ProjectManifestUmbrella => "project-manifest-umbrella",
            Self::ProjectManifestSubpackage => "project-manifest-subpackage",
            Self::Config => "config",
            Self::ConfigUmbrella => "config-umbrella",
            Self::LibraryEntry => "library-entry",
            Self::LibraryApplicationEntry => "library-application-entry",
            Self::TestEntry => "test-entry",
            Self::TestBootstrap => "test-bootstrap",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ProjectShape
// ============================================================================

/// Layout the planner produces for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectShape {
    /// Self-contained project with its own lint, coverage and type-check files.
    Standalone,
    /// Project created inside an existing umbrella's `apps/` directory.
    Nested,
    /// Umbrella root hosting sub-projects under `apps/`.
    Umbrella,
}

impl ProjectShape {
    /// Pick the layout from the umbrella flag and the nesting probe result.
    ///
    /// The umbrella flag wins; nesting only matters for plain projects.
    pub fn resolve(umbrella: bool, nested_in_umbrella: bool) -> Self {
        match (umbrella, nested_in_umbrella) {
            (true, _) => Self::Umbrella,
            (false, true) => Self::Nested,
            (false, false) => Self::Standalone,
        }
    }
}

impl fmt::Display for ProjectShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standalone => write!(f, "standalone"),
            Self::Nested => write!(f, "nested"),
            Self::Umbrella => write!(f, "umbrella"),
        }
    }
}

// ============================================================================
// ToolVersion
// ============================================================================

/// Toolchain version used to stamp the manifest's compatibility constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersion {
    major: u64,
    minor: u64,
    pre: Option<String>,
}

impl ToolVersion {
    pub fn new(major: u64, minor: u64, pre: Option<String>) -> Self {
        Self { major, minor, pre }
    }

    /// Parse a semver string such as `1.15.2` or `1.16.0-rc.1`.
    ///
    /// Only the first pre-release identifier is kept (`rc` above).
    pub fn parse(raw: &str) -> Result<Self, semver::Error> {
        let version = semver::Version::parse(raw.trim())?;
        let pre = version
            .pre
            .as_str()
            .split('.')
            .next()
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok(Self::new(version.major, version.minor, pre))
    }

    /// Requirement string written into `mix.exs`, e.g. `~> 1.15`.
    pub fn requirement(&self) -> String {
        match &self.pre {
            Some(pre) => format!("~> {}.{}-{}", self.major, self.minor, pre),
            None => format!("~> {}.{}", self.major, self.minor),
        }
    }
}

impl Default for ToolVersion {
    fn default() -> Self {
        Self::new(1, 15, None)
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(pre) = &self.pre {
            write!(f, "-{pre}")?;
        }
        Ok(())
    }
}
