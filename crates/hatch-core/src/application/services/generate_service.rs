//! Generate Service - main application orchestrator.
//!
//! This service coordinates the whole `new` workflow:
//! 1. Resolve and validate names
//! 2. Probe for an enclosing umbrella
//! 3. Plan the tree and render every file
//! 4. Hand the plan to the [`Materializer`]
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, NamespaceLookup, OverwritePrompt, TemplateRenderer, UmbrellaProbe},
        services::materializer::{GenerationResult, Materializer},
    },
    domain::{
        FileAction, FilePlan, NewOptions, ProjectShape, ProjectSpec, RenderContext, ToolVersion,
        normalize_path,
    },
    error::HatchResult,
};

/// Main generation service.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    namespace: Box<dyn NamespaceLookup>,
    umbrella: Box<dyn UmbrellaProbe>,
    tool_version: ToolVersion,
    working_dir: PathBuf,
}

impl GenerateService {
    /// Create a new service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use hatch_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    ///     namespace,  // impl NamespaceLookup
    ///     umbrella,   // impl UmbrellaProbe
    /// )
    /// .with_working_dir(std::env::current_dir()?);
    /// ```
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        namespace: Box<dyn NamespaceLookup>,
        umbrella: Box<dyn UmbrellaProbe>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            namespace,
            umbrella,
            tool_version: ToolVersion::default(),
            working_dir: PathBuf::from("."),
        }
    }

    /// Toolchain version written into generated manifests.
    pub fn with_tool_version(mut self, version: ToolVersion) -> Self {
        self.tool_version = version;
        self
    }

    /// Directory relative paths and name derivation are resolved against.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Generate a project.
    ///
    /// Validation happens before any filesystem access, so a rejected name
    /// never leaves anything behind.
    #[instrument(skip_all, fields(path = %options.path.display()))]
    pub fn generate(
        &self,
        options: NewOptions,
        prompt: &dyn OverwritePrompt,
    ) -> HatchResult<GenerationResult> {
        let spec = ProjectSpec::resolve(options, &self.working_dir, self.namespace.as_ref())?;

        let root = normalize_path(&self.working_dir.join(spec.path()));

        let mut warnings = Vec::new();
        let nested = if spec.umbrella() {
            false
        } else {
            self.probe_umbrella(&root, &mut warnings)
        };

        let plan = FilePlan::for_project(&spec, nested);
        info!(
            app = %spec.app_name(),
            module = %spec.module_name(),
            shape = %plan.shape(),
            files = plan.file_count(),
            "generating project"
        );

        let context = RenderContext::for_project(&spec, &self.tool_version, plan.shape());
        let plan = plan.try_map(|action| self.render_action(action, &context))?;

        let result =
            Materializer::new(self.filesystem.as_ref()).materialize(&root, &spec, &plan, prompt)?;

        Ok(result
            .with_warnings(warnings)
            .with_next_steps(next_steps(&spec, plan.shape())))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn probe_umbrella(&self, root: &Path, warnings: &mut Vec<String>) -> bool {
        match self.umbrella.is_nested_in_umbrella(root) {
            Ok(nested) => nested,
            Err(e) => {
                warn!(error = %e, "umbrella probe failed, assuming standalone project");
                warnings.push(format!(
                    "Could not check for a parent umbrella project ({e}); generated a standalone project"
                ));
                false
            }
        }
    }

    fn render_action(&self, action: FileAction, context: &RenderContext) -> HatchResult<FileAction> {
        match action.template() {
            Some(template) => {
                let content = self.renderer.render(template, context)?;
                Ok(action.with_content(content))
            }
            None => Ok(action),
        }
    }
}

fn next_steps(spec: &ProjectSpec, shape: ProjectShape) -> Vec<String> {
    let mut steps = Vec::new();
    if !spec.targets_current_dir() {
        steps.push(format!("cd {}", spec.path().display()));
    }
    match shape {
        ProjectShape::Umbrella => {
            steps.push("cd apps".into());
            steps.push("mix new my_app".into());
        }
        ProjectShape::Standalone | ProjectShape::Nested => steps.push("mix test".into()),
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{
            FixedAnswer, MockFilesystem, MockNamespaceLookup, MockOverwritePrompt,
            MockTemplateRenderer, MockUmbrellaProbe,
        },
    };
    use crate::domain::{DomainError, TemplateId};
    use crate::error::HatchError;
    use std::sync::{Arc, Mutex};

    fn free_lookup() -> MockNamespaceLookup {
        let mut lookup = MockNamespaceLookup::new();
        lookup.expect_is_taken().returning(|_| Ok(false));
        lookup
    }

    fn standalone_probe() -> MockUmbrellaProbe {
        let mut probe = MockUmbrellaProbe::new();
        probe.expect_is_nested_in_umbrella().returning(|_| Ok(false));
        probe
    }

    fn echo_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|id, ctx| Ok(format!("{id} {}\n", ctx.get("app").unwrap().as_text())));
        renderer
    }

    /// Filesystem mock recording every written path.
    fn recording_fs(written: Arc<Mutex<Vec<PathBuf>>>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |path, _| {
            written.lock().unwrap().push(path.to_path_buf());
            Ok(())
        });
        fs
    }

    fn service(fs: MockFilesystem) -> GenerateService {
        GenerateService::new(
            Box::new(echo_renderer()),
            Box::new(fs),
            Box::new(free_lookup()),
            Box::new(standalone_probe()),
        )
        .with_working_dir("/work")
    }

    #[test]
    fn generates_standalone_project() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let result = service(recording_fs(written.clone()))
            .generate(NewOptions::new("hello_world"), &FixedAnswer(false))
            .unwrap();

        assert_eq!(result.shape, ProjectShape::Standalone);
        assert_eq!(result.files_created.len(), 10);
        assert_eq!(result.root, Path::new("/work/hello_world"));
        assert_eq!(result.next_steps, vec!["cd hello_world", "mix test"]);
        assert!(result.warnings.is_empty());

        let written = written.lock().unwrap();
        assert_eq!(written[0], Path::new("/work/hello_world/README.md"));
        assert!(written.contains(&PathBuf::from("/work/hello_world/lib/hello_world.ex")));
    }

    #[test]
    fn invalid_name_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().never();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let mut probe = MockUmbrellaProbe::new();
        probe.expect_is_nested_in_umbrella().never();

        let service = GenerateService::new(
            Box::new(MockTemplateRenderer::new()),
            Box::new(fs),
            Box::new(free_lookup()),
            Box::new(probe),
        );

        let err = service
            .generate(NewOptions::new("Bad-Name"), &FixedAnswer(true))
            .unwrap_err();
        assert!(matches!(
            err,
            HatchError::Domain(DomainError::InvalidAppName { inferred: true, .. })
        ));
    }

    #[test]
    fn taken_module_is_rejected_before_writing() {
        let mut lookup = MockNamespaceLookup::new();
        lookup
            .expect_is_taken()
            .withf(|name| name == "Enum")
            .returning(|_| Ok(true));

        let mut fs = MockFilesystem::new();
        fs.expect_write_file().never();

        let service = GenerateService::new(
            Box::new(MockTemplateRenderer::new()),
            Box::new(fs),
            Box::new(lookup),
            Box::new(standalone_probe()),
        );

        let err = service
            .generate(NewOptions::new("enum"), &FixedAnswer(true))
            .unwrap_err();
        assert!(matches!(
            err,
            HatchError::Domain(DomainError::ModuleNameTaken { .. })
        ));
    }

    #[test]
    fn declined_overwrite_is_a_conflict() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let mut prompt = MockOverwritePrompt::new();
        prompt.expect_confirm().times(1).returning(|_| Ok(false));

        let err = service(fs)
            .generate(NewOptions::new("existing"), &prompt)
            .unwrap_err();
        assert_eq!(
            err,
            HatchError::from(ApplicationError::DirectoryConflict {
                path: PathBuf::from("existing")
            })
        );
    }

    #[test]
    fn current_directory_has_no_cd_step() {
        let written = Arc::new(Mutex::new(Vec::new()));
        let mut prompt = MockOverwritePrompt::new();
        prompt.expect_confirm().never();

        let result = service(recording_fs(written))
            .generate(
                NewOptions::new(".").module("Foo.Bar").sup(true),
                &prompt,
            )
            .unwrap();

        assert_eq!(result.next_steps, vec!["mix test"]);
        assert_eq!(result.files_created.len(), 11);
        assert!(
            result
                .files_created
                .iter()
                .any(|p| p.to_string() == "lib/work/application.ex")
        );
    }

    #[test]
    fn probe_failure_degrades_to_standalone_with_warning() {
        let mut probe = MockUmbrellaProbe::new();
        probe.expect_is_nested_in_umbrella().returning(|_| {
            Err(ApplicationError::FilesystemError {
                path: PathBuf::from("../../mix.exs"),
                reason: "permission denied".into(),
            }
            .into())
        });

        let written = Arc::new(Mutex::new(Vec::new()));
        let service = GenerateService::new(
            Box::new(echo_renderer()),
            Box::new(recording_fs(written)),
            Box::new(free_lookup()),
            Box::new(probe),
        );

        let result = service
            .generate(NewOptions::new("app"), &FixedAnswer(true))
            .unwrap();
        assert_eq!(result.shape, ProjectShape::Standalone);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("permission denied"));
    }

    #[test]
    fn umbrella_skips_probe_and_lists_apps_steps() {
        let mut probe = MockUmbrellaProbe::new();
        probe.expect_is_nested_in_umbrella().never();

        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .withf(|id, _| *id != TemplateId::LibraryEntry)
            .returning(|_, _| Ok("ok\n".into()));

        let written = Arc::new(Mutex::new(Vec::new()));
        let service = GenerateService::new(
            Box::new(renderer),
            Box::new(recording_fs(written)),
            Box::new(free_lookup()),
            Box::new(probe),
        );

        let result = service
            .generate(NewOptions::new("platform").umbrella(true), &FixedAnswer(true))
            .unwrap();
        assert_eq!(result.shape, ProjectShape::Umbrella);
        assert_eq!(
            result.next_steps,
            vec!["cd platform", "cd apps", "mix new my_app"]
        );
    }

    #[test]
    fn manifests_receive_configured_version() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|id, ctx| {
            if id == TemplateId::ProjectManifest {
                assert_eq!(ctx.get("version").unwrap().as_text(), "~> 1.16-rc");
            }
            Ok("x\n".into())
        });

        let written = Arc::new(Mutex::new(Vec::new()));
        let service = GenerateService::new(
            Box::new(renderer),
            Box::new(recording_fs(written)),
            Box::new(free_lookup()),
            Box::new(standalone_probe()),
        )
        .with_tool_version(ToolVersion::parse("1.16.0-rc.1").unwrap());

        service
            .generate(NewOptions::new("app"), &FixedAnswer(true))
            .unwrap();
    }
}
