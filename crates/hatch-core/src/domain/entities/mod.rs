pub mod common;
pub mod file_plan;
pub mod project_spec;
pub mod template;

pub use common::RelativePath;
pub use file_plan::{ActionKind, FileAction, FilePlan};
pub use project_spec::{NewOptions, ProjectSpec};
pub use template::{ContextValue, RenderContext};
