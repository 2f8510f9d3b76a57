//! Program table and emission configuration.
//!
//! An [`EmitConfig`] carries what the command line hands the emission
//! stage: the output path prefix, the optional module name scoping all
//! generated names, the set of requested target languages, and the
//! program table. Programs are emitted in table order.

use serde::{Deserialize, Serialize};

use crate::slang::SlangSet;

// ---------------------------------------------------------------------------
// Program
// ---------------------------------------------------------------------------

/// One shader program: a named (vertex, fragment) shader pair.
///
/// Constructed once from the build configuration and read-only during
/// emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Program name, used in artifact file names and the manifest.
    pub name: String,
    /// Name of the vertex-stage shader in the per-language output tables.
    pub vs_name: String,
    /// Name of the fragment-stage shader in the per-language output tables.
    pub fs_name: String,
}

impl Program {
    /// Construct a program entry.
    pub fn new(name: impl Into<String>, vs_name: impl Into<String>, fs_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vs_name: vs_name.into(),
            fs_name: fs_name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// EmitConfig
// ---------------------------------------------------------------------------

/// Configuration for one emission invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitConfig {
    /// Output path prefix; every generated file name starts with this.
    pub out_prefix: String,
    /// Optional module name scoping generated file names.
    pub module: Option<String>,
    /// Requested target languages.
    pub slangs: SlangSet,
    /// Program table, in emission order.
    pub programs: Vec<Program>,
}

impl EmitConfig {
    /// Create a configuration with an empty program table.
    pub fn new(out_prefix: impl Into<String>) -> Self {
        Self {
            out_prefix: out_prefix.into(),
            module: None,
            slangs: SlangSet::new(),
            programs: Vec::new(),
        }
    }

    /// The `module_` prefix inserted before program names in stage
    /// artifact paths; empty when no module name is configured.
    pub fn module_prefix(&self) -> String {
        match &self.module {
            Some(module) => format!("{module}_"),
            None => String::new(),
        }
    }

    /// The `_module` suffix appended to the manifest file name; empty
    /// when no module name is configured.
    pub fn module_suffix(&self) -> String {
        match &self.module {
            Some(module) => format!("_{module}"),
            None => String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
