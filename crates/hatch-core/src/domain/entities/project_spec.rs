use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::NamespaceLookup;
use crate::domain::names::{
    check_module_available, derive_app_name, derive_module_name, validate_app_name,
    validate_module_name,
};
use crate::error::HatchResult;

/// Options as they arrive from the argument parser, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewOptions {
    pub path: PathBuf,
    pub app: Option<String>,
    pub module: Option<String>,
    pub sup: bool,
    pub umbrella: bool,
}

impl NewOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn app(mut self, app: impl Into<String>) -> Self {
        self.app = Some(app.into());
        self
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn sup(mut self, sup: bool) -> Self {
        self.sup = sup;
        self
    }

    pub fn umbrella(mut self, umbrella: bool) -> Self {
        self.umbrella = umbrella;
        self
    }
}

/// Validated description of the project to generate.
///
/// Only obtainable through [`ProjectSpec::resolve`], so holding one means the
/// names passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    path: PathBuf,
    app_name: String,
    module_name: String,
    supervised: bool,
    umbrella: bool,
}

impl ProjectSpec {
    /// Derive missing names and run the validation chain.
    ///
    /// Order is fixed: application name, module name, then the namespace
    /// lookup, which never sees a malformed module name.
    pub fn resolve(
        options: NewOptions,
        cwd: &Path,
        lookup: &dyn NamespaceLookup,
    ) -> HatchResult<Self> {
        let (app_name, inferred) = match options.app {
            Some(app) => (app, false),
            None => (derive_app_name(&options.path, cwd), true),
        };
        validate_app_name(&app_name, inferred)?;

        let module_name = options
            .module
            .unwrap_or_else(|| derive_module_name(&app_name));
        validate_module_name(&module_name)?;
        check_module_available(&module_name, lookup)?;

        debug!(app = %app_name, module = %module_name, inferred, "names resolved");

        Ok(Self {
            path: options.path,
            app_name,
            module_name,
            supervised: options.sup,
            umbrella: options.umbrella,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn supervised(&self) -> bool {
        self.supervised
    }

    pub fn umbrella(&self) -> bool {
        self.umbrella
    }

    /// Whether the project is generated into the working directory itself.
    pub fn targets_current_dir(&self) -> bool {
        is_current_dir(&self.path)
    }
}

/// `.`, `./` and the empty path all name the working directory.
pub(crate) fn is_current_dir(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, std::path::Component::CurDir))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockNamespaceLookup;
    use crate::domain::DomainError;
    use crate::error::HatchError;

    fn free_lookup() -> MockNamespaceLookup {
        let mut lookup = MockNamespaceLookup::new();
        lookup.expect_is_taken().returning(|_| Ok(false));
        lookup
    }

    #[test]
    fn names_are_derived_from_path() {
        let spec = ProjectSpec::resolve(
            NewOptions::new("hello_world"),
            Path::new("/tmp"),
            &free_lookup(),
        )
        .unwrap();

        assert_eq!(spec.app_name(), "hello_world");
        assert_eq!(spec.module_name(), "HelloWorld");
        assert!(!spec.targets_current_dir());
    }

    #[test]
    fn current_dir_uses_cwd_basename() {
        let spec = ProjectSpec::resolve(
            NewOptions::new(".").module("Foo.Bar").sup(true),
            Path::new("/home/dev/inventory"),
            &free_lookup(),
        )
        .unwrap();

        assert_eq!(spec.app_name(), "inventory");
        assert_eq!(spec.module_name(), "Foo.Bar");
        assert!(spec.supervised());
        assert!(spec.targets_current_dir());
    }

    #[test]
    fn inferred_invalid_name_is_flagged_as_inferred() {
        let err = ProjectSpec::resolve(
            NewOptions::new("My-Project"),
            Path::new("/tmp"),
            &free_lookup(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            HatchError::Domain(DomainError::InvalidAppName { inferred: true, .. })
        ));
    }

    #[test]
    fn explicit_app_overrides_path() {
        let spec = ProjectSpec::resolve(
            NewOptions::new("My-Project").app("my_project"),
            Path::new("/tmp"),
            &free_lookup(),
        )
        .unwrap();
        assert_eq!(spec.module_name(), "MyProject");
    }

    #[test]
    fn lookup_is_skipped_for_malformed_module() {
        let mut lookup = MockNamespaceLookup::new();
        lookup.expect_is_taken().never();

        let err = ProjectSpec::resolve(
            NewOptions::new("ok").module("not_a_module"),
            Path::new("/tmp"),
            &lookup,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            HatchError::Domain(DomainError::InvalidModuleName { .. })
        ));
    }

    #[test]
    fn current_dir_detection() {
        assert!(is_current_dir(Path::new(".")));
        assert!(is_current_dir(Path::new("./")));
        assert!(is_current_dir(Path::new("")));
        assert!(!is_current_dir(Path::new("./app")));
        assert!(!is_current_dir(Path::new("..")));
    }
}
