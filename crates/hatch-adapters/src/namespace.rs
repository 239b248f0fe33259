//! Namespace lookup backed by the Elixir/OTP standard library module set.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use hatch_core::{application::ports::NamespaceLookup, error::HatchResult};
use tracing::debug;

/// Modules shipped with Elixir itself, kept in byte order for readability.
const STANDARD_MODULES: &[&str] = &[
    "Access",
    "Agent",
    "Application",
    "ArgumentError",
    "ArithmeticError",
    "Atom",
    "Base",
    "Behaviour",
    "Bitwise",
    "Calendar",
    "Calendar.ISO",
    "Code",
    "Collectable",
    "Config",
    "Config.Provider",
    "Date",
    "Date.Range",
    "DateTime",
    "Dict",
    "Duration",
    "DynamicSupervisor",
    "EEx",
    "Enum",
    "Enumerable",
    "ErlangError",
    "ExUnit",
    "ExUnit.Case",
    "Exception",
    "File",
    "File.Stat",
    "Float",
    "Function",
    "GenEvent",
    "GenServer",
    "HashDict",
    "HashSet",
    "IEx",
    "IO",
    "Inspect",
    "Integer",
    "Kernel",
    "Kernel.SpecialForms",
    "KeyError",
    "Keyword",
    "List",
    "List.Chars",
    "Logger",
    "Macro",
    "Map",
    "MapSet",
    "MatchError",
    "Mix",
    "Mix.Project",
    "Mix.Task",
    "Module",
    "NaiveDateTime",
    "Node",
    "OptionParser",
    "PartitionSupervisor",
    "Path",
    "Port",
    "Process",
    "Protocol",
    "Range",
    "Record",
    "Regex",
    "Registry",
    "RuntimeError",
    "Set",
    "Stream",
    "String",
    "String.Chars",
    "StringIO",
    "Supervisor",
    "System",
    "Task",
    "Task.Supervisor",
    "Time",
    "Tuple",
    "URI",
    "Version",
];

static STANDARD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STANDARD_MODULES.iter().copied().collect());

/// Treats standard library modules and configured extras as taken.
///
/// Matching is exact on the fully-qualified name: `Enum` is taken,
/// `MyApp.Enum` is not.
#[derive(Debug, Clone, Default)]
pub struct ReservedNamespaces {
    extra: BTreeSet<String>,
}

impl ReservedNamespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also reserve `names` (for example, modules of an in-house platform).
    pub fn with_extra<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra.extend(names.into_iter().map(Into::into));
        self
    }
}

impl NamespaceLookup for ReservedNamespaces {
    fn is_taken(&self, qualified_name: &str) -> HatchResult<bool> {
        let taken = STANDARD_SET.contains(qualified_name)
            || self.extra.contains(qualified_name);
        debug!(module = qualified_name, taken, "namespace lookup");
        Ok(taken)
    }
}
