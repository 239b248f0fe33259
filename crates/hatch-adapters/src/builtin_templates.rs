//! Template bodies that ship with Hatch.
//!
//! Every [`TemplateId`] maps to exactly one body here; [`body`] is a plain
//! `match`, so a missing entry is a compile error rather than a runtime one.
//!
//! Bodies use the core engine syntax: `{{var}}`, `{{#if flag}}` and
//! `{{#unless flag}}`. Variables available are `app`, `mod`, `version`,
//! `sup`, `umbrella`, `in_umbrella` and `sup_app`.

use hatch_core::domain::TemplateId;

/// Static body for `id`.
pub fn body(id: TemplateId) -> &'static str {
    match id {
        TemplateId::Readme => README,
        TemplateId::Gitignore => GITIGNORE,
        TemplateId::LintConfig => CREDO,
        TemplateId::CoverageIgnore => COVERALLS,
        TemplateId::TypeCheckIgnore => DIALYZER_IGNORE,
        TemplateId::ProjectManifest => MIX_EXS,
        TemplateId::ProjectManifestUmbrella => MIX_EXS_UMBRELLA,
        TemplateId::ProjectManifestSubpackage => MIX_EXS_APPS,
        TemplateId::Config => CONFIG,
        TemplateId::ConfigUmbrella => CONFIG_UMBRELLA,
        TemplateId::LibraryEntry => LIB,
        TemplateId::LibraryApplicationEntry => LIB_APP,
        TemplateId::TestEntry => TEST,
        TemplateId::TestBootstrap => TEST_HELPER,
    }
}

// ── Shared ────────────────────────────────────────────────────────────────────

const README: &str = r#"# {{mod}}

**TODO: Add description**
{{#unless umbrella}}
{{#unless in_umbrella}}

## Installation

If [available in Hex](https://hex.pm/docs/publish), the package can be installed
by adding `{{app}}` to your list of dependencies in `mix.exs`:

```elixir
def deps do
  [
    {:{{app}}, "~> 0.1.0"}
  ]
end
```

Documentation can be generated with [ExDoc](https://github.com/elixir-lang/ex_doc)
and published on [HexDocs](https://hexdocs.pm). Once published, the docs can
be found at <https://hexdocs.pm/{{app}}>.
{{/unless}}
{{/unless}}
"#;

const GITIGNORE: &str = r#"# The directory Mix will write compiled artifacts to.
/_build/

# If you run "mix test --cover", coverage assets end up here.
/cover/

# The directory Mix downloads your dependencies sources to.
/deps/

# Where third-party dependencies like ExDoc output generated docs.
/doc/

# Ignore .fetch files in case you like to edit your project deps locally.
/.fetch

# If the VM crashes, it generates a dump, let's ignore it too.
erl_crash.dump

# Also ignore archive artifacts (built via "mix archive.build").
*.ez
{{#unless umbrella}}

# Ignore package tarball (built via "mix hex.build").
{{app}}-*.tar
{{/unless}}

# Temporary files, for example, from tests.
/tmp/
"#;

// ── Tooling (standalone and umbrella roots only) ──────────────────────────────

const CREDO: &str = r#"%{
  configs: [
    %{
      name: "default",
      files: %{
{{#if umbrella}}
        included: ["apps/*/lib/", "apps/*/test/", "config/"],
{{/if}}
{{#unless umbrella}}
        included: ["lib/", "test/", "config/"],
{{/unless}}
        excluded: [~r"/_build/", ~r"/deps/"]
      },
      strict: true,
      color: true,
      checks: %{
        disabled: [
          {Credo.Check.Readability.ModuleDoc, []}
        ]
      }
    }
  ]
}
"#;

const COVERALLS: &str = r#"{
  "skip_files": [
{{#if sup}}
    "lib/{{app}}/application.ex",
{{/if}}
    "test/support"
  ],
  "coverage_options": {
    "treat_no_relevant_lines_as_covered": true
  }
}
"#;

const DIALYZER_IGNORE: &str = r#"# Warnings listed here are skipped by `mix dialyzer`.
#
# Each entry is either a {file, warning} tuple or a regex, for example:
#
#     {"lib/{{app}}.ex", :no_return}
#     ~r/unknown function/
[
]
"#;

// ── Manifests ─────────────────────────────────────────────────────────────────

const MIX_EXS: &str = r#"defmodule {{mod}}.MixProject do
  use Mix.Project

  def project do
    [
      app: :{{app}},
      version: "0.1.0",
      elixir: "{{version}}",
      start_permanent: Mix.env() == :prod,
      test_coverage: [tool: ExCoveralls],
      preferred_cli_env: [coveralls: :test, "coveralls.html": :test],
      dialyzer: [ignore_warnings: ".dialyzer_ignore.exs"],
      deps: deps()
    ]
  end

  # Run "mix help compile.app" to learn about applications.
  def application do
    [
      extra_applications: [:logger]{{sup_app}}
    ]
  end

  # Run "mix help deps" to learn about dependencies.
  defp deps do
    [
      {:credo, "~> 1.7", only: [:dev, :test], runtime: false},
      {:dialyxir, "~> 1.4", only: [:dev, :test], runtime: false},
      {:excoveralls, "~> 0.18", only: :test}
    ]
  end
end
"#;

const MIX_EXS_APPS: &str = r#"defmodule {{mod}}.MixProject do
  use Mix.Project

  def project do
    [
      app: :{{app}},
      version: "0.1.0",
      build_path: "../../_build",
      config_path: "../../config/config.exs",
      deps_path: "../../deps",
      lockfile: "../../mix.lock",
      elixir: "{{version}}",
      start_permanent: Mix.env() == :prod,
      deps: deps()
    ]
  end

  # Run "mix help compile.app" to learn about applications.
  def application do
    [
      extra_applications: [:logger]{{sup_app}}
    ]
  end

  # Run "mix help deps" to learn about dependencies.
  defp deps do
    [
      # {:dep_from_hexpm, "~> 0.3.0"},
      # {:dep_from_git, git: "https://github.com/elixir-lang/my_dep.git", tag: "0.1.0"},
      # {:sibling_app_in_umbrella, in_umbrella: true}
    ]
  end
end
"#;

const MIX_EXS_UMBRELLA: &str = r#"defmodule {{mod}}.MixProject do
  use Mix.Project

  def project do
    [
      apps_path: "apps",
      version: "0.1.0",
      start_permanent: Mix.env() == :prod,
      test_coverage: [tool: ExCoveralls],
      preferred_cli_env: [coveralls: :test, "coveralls.html": :test],
      dialyzer: [ignore_warnings: ".dialyzer_ignore.exs"],
      deps: deps()
    ]
  end

  # Dependencies listed here are available only for this
  # project and cannot be accessed from applications inside
  # the apps folder.
  #
  # Run "mix help deps" for examples and options.
  defp deps do
    [
      {:credo, "~> 1.7", only: [:dev, :test], runtime: false},
      {:dialyxir, "~> 1.4", only: [:dev, :test], runtime: false},
      {:excoveralls, "~> 0.18", only: :test}
    ]
  end
end
"#;

// ── Config ────────────────────────────────────────────────────────────────────

const CONFIG: &str = r##"# This file is responsible for configuring your application
# and its dependencies with the aid of the Config module.
{{#if in_umbrella}}
#
# This configuration file is loaded before any dependency and
# is restricted to this project. The umbrella root config at
# ../../config/config.exs is the one used when running from it.
{{/if}}
import Config

# Sample configuration:
#
#     config :{{app}}, key: :value
#
#     config :logger, :console,
#       level: :info,
#       format: "$date $time [$level] $metadata$message\n",
#       metadata: [:user_id]
#
# Environment specific files can be imported at the bottom:
#
#     import_config "#{config_env()}.exs"
"##;

const CONFIG_UMBRELLA: &str = r#"# This file is responsible for configuring your umbrella
# and **all applications** and their dependencies with the
# help of the Config module.
#
# Note that all applications in your umbrella share the
# same configuration and dependencies, which is why they
# all use the same configuration file. If you want different
# configurations or dependencies per app, it is best to
# move said applications out of the umbrella.
import Config

# Sample configuration:
#
#     config :logger, :console,
#       level: :info,
#       format: "$date $time [$level] $metadata$message\n",
#       metadata: [:user_id]
#
"#;

// ── Library ───────────────────────────────────────────────────────────────────

const LIB: &str = r#"defmodule {{mod}} do
  @moduledoc """
  Documentation for `{{mod}}`.
  """

  @doc """
  Hello world.

  ## Examples

      iex> {{mod}}.hello()
      :world

  """
  def hello do
    :world
  end
end
"#;

const LIB_APP: &str = r#"defmodule {{mod}}.Application do
  # See https://hexdocs.pm/elixir/Application.html
  # for more information on OTP Applications
  @moduledoc false

  use Application

  @impl true
  def start(_type, _args) do
    children = [
      # Starts a worker by calling: {{mod}}.Worker.start_link(arg)
      # {{{mod}}.Worker, arg}
    ]

    # See https://hexdocs.pm/elixir/Supervisor.html
    # for other strategies and supported options
    opts = [strategy: :one_for_one, name: {{mod}}.Supervisor]
    Supervisor.start_link(children, opts)
  end
end
"#;

// ── Tests ─────────────────────────────────────────────────────────────────────

const TEST: &str = r#"defmodule {{mod}}Test do
  use ExUnit.Case
  doctest {{mod}}

  test "greets the world" do
    assert {{mod}}.hello() == :world
  end
end
"#;

const TEST_HELPER: &str = "ExUnit.start()\n";
