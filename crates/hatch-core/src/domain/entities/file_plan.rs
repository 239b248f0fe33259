use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::domain::{
    entities::{common::RelativePath, project_spec::ProjectSpec},
    error::DomainError,
    value_objects::{ProjectShape, TemplateId},
};

/// What a single plan step does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    CreateDir,
    CreateFile,
}

/// One step of a generation plan.
///
/// Files carry the template they are rendered from; the rendered content is
/// attached by the orchestrator before the plan is materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAction {
    relative_path: RelativePath,
    kind: ActionKind,
    template: Option<TemplateId>,
    rendered_content: Option<String>,
}

impl FileAction {
    pub fn dir(path: impl Into<RelativePath>) -> Self {
        Self {
            relative_path: path.into(),
            kind: ActionKind::CreateDir,
            template: None,
            rendered_content: None,
        }
    }

    pub fn file(path: impl Into<RelativePath>, template: TemplateId) -> Self {
        Self {
            relative_path: path.into(),
            kind: ActionKind::CreateFile,
            template: Some(template),
            rendered_content: None,
        }
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.rendered_content = Some(content);
        self
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn template(&self) -> Option<TemplateId> {
        self.template
    }

    pub fn rendered_content(&self) -> Option<&str> {
        self.rendered_content.as_deref()
    }

    pub fn is_file(&self) -> bool {
        self.kind == ActionKind::CreateFile
    }
}

/// Ordered list of actions for one project, plus the layout it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    shape: ProjectShape,
    actions: Vec<FileAction>,
}

impl FilePlan {
    /// Plan the tree for `spec`.
    ///
    /// `nested_in_umbrella` is the result of the umbrella probe; it only
    /// matters when `spec` is not itself an umbrella.
    pub fn for_project(spec: &ProjectSpec, nested_in_umbrella: bool) -> Self {
        let shape = ProjectShape::resolve(spec.umbrella(), nested_in_umbrella);
        let actions = match shape {
            ProjectShape::Umbrella => umbrella_actions(),
            ProjectShape::Standalone | ProjectShape::Nested => project_actions(spec, shape),
        };
        Self { shape, actions }
    }

    pub fn shape(&self) -> ProjectShape {
        self.shape
    }

    pub fn actions(&self) -> &[FileAction] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<FileAction> {
        self.actions
    }

    /// Apply `f` to every action, keeping order.
    pub fn try_map<E>(
        self,
        f: impl FnMut(FileAction) -> Result<FileAction, E>,
    ) -> Result<Self, E> {
        let actions = self
            .actions
            .into_iter()
            .map(f)
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Self {
            shape: self.shape,
            actions,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &FileAction> {
        self.actions.iter().filter(|a| a.is_file())
    }

    pub fn directories(&self) -> impl Iterator<Item = &FileAction> {
        self.actions.iter().filter(|a| !a.is_file())
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    /// Check the ordering contract: no duplicate paths, and every file's
    /// parent directory is created by an earlier action (or is the root).
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        let mut dirs: HashSet<&Path> = HashSet::new();

        for action in &self.actions {
            let path = action.relative_path().as_path();
            if !seen.insert(path) {
                return Err(DomainError::InvalidPlan {
                    reason: format!("duplicate path {}", action.relative_path()),
                });
            }

            let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
            if let Some(parent) = parent {
                if !dirs.contains(parent) {
                    return Err(DomainError::InvalidPlan {
                        reason: format!(
                            "{} is planned before its directory",
                            action.relative_path()
                        ),
                    });
                }
            }

            if !action.is_file() {
                dirs.insert(path);
            }
        }
        Ok(())
    }
}

// ============================================================================
// Layouts
// ============================================================================

fn auxiliary_files(actions: &mut Vec<FileAction>) {
    actions.push(FileAction::file(".credo.exs", TemplateId::LintConfig));
    actions.push(FileAction::file("coveralls.json", TemplateId::CoverageIgnore));
    actions.push(FileAction::file(
        ".dialyzer_ignore.exs",
        TemplateId::TypeCheckIgnore,
    ));
}

fn umbrella_actions() -> Vec<FileAction> {
    let mut actions = vec![
        FileAction::file("README.md", TemplateId::Readme),
        FileAction::file(".gitignore", TemplateId::Gitignore),
    ];
    auxiliary_files(&mut actions);
    actions.extend([
        FileAction::file("mix.exs", TemplateId::ProjectManifestUmbrella),
        FileAction::dir("config"),
        FileAction::file("config/config.exs", TemplateId::ConfigUmbrella),
        FileAction::dir("apps"),
    ]);
    actions
}

fn project_actions(spec: &ProjectSpec, shape: ProjectShape) -> Vec<FileAction> {
    let app = spec.app_name();
    let mut actions = vec![
        FileAction::file("README.md", TemplateId::Readme),
        FileAction::file(".gitignore", TemplateId::Gitignore),
    ];

    let manifest = if shape == ProjectShape::Nested {
        TemplateId::ProjectManifestSubpackage
    } else {
        auxiliary_files(&mut actions);
        TemplateId::ProjectManifest
    };
    actions.push(FileAction::file("mix.exs", manifest));

    let lib = RelativePath::new("lib");
    let test = RelativePath::new("test");

    actions.extend([
        FileAction::dir("config"),
        FileAction::file("config/config.exs", TemplateId::Config),
        FileAction::dir(lib.clone()),
        FileAction::file(lib.join(format!("{app}.ex")), TemplateId::LibraryEntry),
    ]);

    if spec.supervised() {
        let app_dir = lib.join(app);
        actions.extend([
            FileAction::dir(app_dir.clone()),
            FileAction::file(
                app_dir.join("application.ex"),
                TemplateId::LibraryApplicationEntry,
            ),
        ]);
    }

    actions.extend([
        FileAction::dir(test.clone()),
        FileAction::file(test.join("test_helper.exs"), TemplateId::TestBootstrap),
        FileAction::file(test.join(format!("{app}_test.exs")), TemplateId::TestEntry),
    ]);
    actions
}
