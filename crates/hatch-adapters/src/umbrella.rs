//! Detects projects generated inside an umbrella's `apps/` directory.

use std::path::Path;

use hatch_core::{application::ports::UmbrellaProbe, error::HatchResult};
use tracing::debug;

use crate::filesystem::map_io_error;

/// Marker an umbrella manifest carries.
const APPS_PATH_KEY: &str = "apps_path:";

/// A project root is nested when its parent directory is named `apps` and
/// the directory above that holds a `mix.exs` declaring `apps_path:`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixUmbrellaProbe;

impl MixUmbrellaProbe {
    pub fn new() -> Self {
        Self
    }
}

impl UmbrellaProbe for MixUmbrellaProbe {
    fn is_nested_in_umbrella(&self, project_root: &Path) -> HatchResult<bool> {
        let Some(apps) = project_root.parent() else {
            return Ok(false);
        };
        if apps.file_name().is_none_or(|name| name != "apps") {
            return Ok(false);
        }
        let Some(umbrella_root) = apps.parent() else {
            return Ok(false);
        };

        let manifest = umbrella_root.join("mix.exs");
        if !manifest.is_file() {
            return Ok(false);
        }

        let contents = std::fs::read_to_string(&manifest)
            .map_err(|e| map_io_error(&manifest, e, "read umbrella manifest"))?;
        let nested = contents.contains(APPS_PATH_KEY);
        debug!(manifest = %manifest.display(), nested, "umbrella probe");
        Ok(nested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn umbrella(manifest: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("apps")).unwrap();
        std::fs::write(dir.path().join("mix.exs"), manifest).unwrap();
        dir
    }

    #[test]
    fn project_under_apps_is_nested() {
        let dir = umbrella("def project do\n  [apps_path: \"apps\"]\nend\n");
        let probe = MixUmbrellaProbe::new();
        assert!(probe.is_nested_in_umbrella(&dir.path().join("apps/billing")).unwrap());
    }

    #[test]
    fn plain_manifest_is_not_an_umbrella() {
        let dir = umbrella("def project do\n  [app: :shop]\nend\n");
        let probe = MixUmbrellaProbe::new();
        assert!(!probe.is_nested_in_umbrella(&dir.path().join("apps/billing")).unwrap());
    }

    #[test]
    fn parent_must_be_named_apps() {
        let dir = umbrella("[apps_path: \"apps\"]");
        let probe = MixUmbrellaProbe::new();
        assert!(!probe.is_nested_in_umbrella(&dir.path().join("billing")).unwrap());
        assert!(!probe.is_nested_in_umbrella(Path::new("/")).unwrap());
    }
}
