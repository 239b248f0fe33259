//! End-to-end generation through the real adapters.

use std::path::Path;

use hatch_adapters::{
    LocalFilesystem, MemoryFilesystem, MixUmbrellaProbe, ReservedNamespaces, SimpleRenderer,
};
use hatch_core::{
    application::{ApplicationError, FixedAnswer, GenerateService},
    domain::{DomainError, NewOptions, ProjectShape},
    error::HatchError,
};
use tempfile::TempDir;

fn local_service(cwd: &Path) -> GenerateService {
    GenerateService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(ReservedNamespaces::new()),
        Box::new(MixUmbrellaProbe::new()),
    )
    .with_working_dir(cwd)
}

fn read(path: impl AsRef<Path>) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn hello_world_standalone() {
    let cwd = TempDir::new().unwrap();
    let result = local_service(cwd.path())
        .generate(NewOptions::new("hello_world"), &FixedAnswer(false))
        .unwrap();

    let root = cwd.path().join("hello_world");
    let files: Vec<_> = result.files_created.iter().map(ToString::to_string).collect();
    assert_eq!(
        files,
        [
            "README.md",
            ".gitignore",
            ".credo.exs",
            "coveralls.json",
            ".dialyzer_ignore.exs",
            "mix.exs",
            "config/config.exs",
            "lib/hello_world.ex",
            "test/test_helper.exs",
            "test/hello_world_test.exs",
        ]
    );
    for file in &files {
        assert!(root.join(file).is_file(), "{file} missing");
    }
    assert_eq!(result.next_steps, ["cd hello_world", "mix test"]);

    let manifest = read(root.join("mix.exs"));
    assert!(manifest.starts_with("defmodule HelloWorld.MixProject do"));
    assert!(manifest.contains("app: :hello_world,"));
    assert!(manifest.contains("elixir: \"~> 1.15\","));
    assert!(manifest.contains("extra_applications: [:logger]\n"));

    let lib = read(root.join("lib/hello_world.ex"));
    assert!(lib.contains("iex> HelloWorld.hello()"));
}

#[test]
fn current_dir_with_module_and_supervisor() {
    let cwd = TempDir::new().unwrap();
    let project = cwd.path().join("inventory");
    std::fs::create_dir(&project).unwrap();

    let result = local_service(&project)
        .generate(
            NewOptions::new(".").module("Foo.Bar").sup(true),
            &FixedAnswer(false),
        )
        .unwrap();

    assert_eq!(result.next_steps, ["mix test"]);
    assert!(project.join("lib/inventory/application.ex").is_file());
    assert!(project.join("lib/inventory.ex").is_file());

    let app = read(project.join("lib/inventory/application.ex"));
    assert!(app.starts_with("defmodule Foo.Bar.Application do"));
    assert!(app.contains("name: Foo.Bar.Supervisor"));

    let manifest = read(project.join("mix.exs"));
    assert!(manifest.contains("mod: {Foo.Bar.Application, []}"));
}

#[test]
fn nested_app_inside_umbrella() {
    let cwd = TempDir::new().unwrap();
    local_service(cwd.path())
        .generate(NewOptions::new("platform").umbrella(true), &FixedAnswer(false))
        .unwrap();

    let umbrella = cwd.path().join("platform");
    assert!(umbrella.join("apps").is_dir());
    assert!(read(umbrella.join("mix.exs")).contains("apps_path: \"apps\""));

    let result = local_service(&umbrella.join("apps"))
        .generate(NewOptions::new("billing"), &FixedAnswer(false))
        .unwrap();

    assert_eq!(result.shape, ProjectShape::Nested);
    let app = umbrella.join("apps/billing");
    assert!(!app.join(".credo.exs").exists());
    assert!(read(app.join("mix.exs")).contains("deps_path: \"../../deps\""));
}

#[test]
fn reserved_module_is_rejected_without_writing() {
    let cwd = TempDir::new().unwrap();
    let err = local_service(cwd.path())
        .generate(NewOptions::new("enum"), &FixedAnswer(true))
        .unwrap_err();

    assert!(matches!(
        err,
        HatchError::Domain(DomainError::ModuleNameTaken { .. })
    ));
    assert!(!cwd.path().join("enum").exists());
}

#[test]
fn explicit_test_framework_module_is_rejected() {
    let cwd = TempDir::new().unwrap();
    let err = local_service(cwd.path())
        .generate(
            NewOptions::new("ex_unit").module("ExUnit"),
            &FixedAnswer(true),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        HatchError::Domain(DomainError::ModuleNameTaken { ref name }) if name == "ExUnit"
    ));
    assert!(!cwd.path().join("ex_unit/lib/ex_unit.ex").exists());
}

#[test]
fn declined_overwrite_leaves_directory_untouched() {
    let cwd = TempDir::new().unwrap();
    std::fs::create_dir(cwd.path().join("existing")).unwrap();

    let err = local_service(cwd.path())
        .generate(NewOptions::new("existing"), &FixedAnswer(false))
        .unwrap_err();

    assert!(matches!(
        err,
        HatchError::Application(ApplicationError::DirectoryConflict { .. })
    ));
    assert_eq!(std::fs::read_dir(cwd.path().join("existing")).unwrap().count(), 0);
}

#[test]
fn partial_failure_reports_created_files() {
    let fs = MemoryFilesystem::new();
    fs.fail_writes_to("/work/shop/mix.exs");

    let service = GenerateService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
        Box::new(ReservedNamespaces::new()),
        Box::new(MixUmbrellaProbe::new()),
    )
    .with_working_dir("/work");

    let err = service
        .generate(NewOptions::new("shop"), &FixedAnswer(true))
        .unwrap_err();

    let HatchError::Application(ApplicationError::WriteFailure { created, .. }) = err else {
        panic!("expected write failure, got {err:?}");
    };
    assert_eq!(created.len(), 5);
    assert_eq!(fs.list_files().len(), 5);
    assert!(fs.read_file(Path::new("/work/shop/lib/shop.ex")).is_none());
}
