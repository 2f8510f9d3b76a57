//! Prism Emit -- artifact emission for the Prism shader build tool.
//!
//! Given per-language cross-compile results ([`prism_reflect::shader::BuildOutput`])
//! and the emission configuration, this crate writes one artifact file
//! per (program, language, stage) and a single YAML manifest describing
//! them all.
//!
//! The manifest is accumulated in memory and committed in one write only
//! after every requested language pass has succeeded, so a manifest on
//! disk never references artifacts that do not fully exist. Stage
//! artifact files do *not* get that guarantee: they are written as each
//! program is processed and are left in place when a later step fails.
//!
//! # Quick Start
//!
//! ```no_run
//! use prism_emit::pipeline::emit;
//! use prism_reflect::prelude::*;
//!
//! let mut cfg = EmitConfig::new("out/shaders");
//! cfg.slangs.insert(Slang::Glsl330);
//! cfg.programs.push(Program::new("triangle", "triangle_vs", "triangle_fs"));
//!
//! let mut output = BuildOutput::new();
//! let glsl = output.entry(Slang::Glsl330);
//! glsl.insert("triangle_vs", CompiledShader::new("...", Reflection::new("main")));
//! glsl.insert("triangle_fs", CompiledShader::new("...", Reflection::new("main")));
//!
//! emit(&cfg, &output)?;
//! # Ok::<(), prism_emit::EmitError>(())
//! ```

#![deny(unsafe_code)]

pub mod manifest;
pub mod paths;
pub mod pipeline;
pub mod writer;

use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by an emission invocation.
///
/// Every variant carries the offending path and a human-readable
/// message. The first error encountered -- scanning languages, then
/// programs, then stages, in fixed order -- aborts the whole invocation;
/// there is no partial-success mode and no retry.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// A compiled stage or its reflection is absent for a requested
    /// language/program. The path is where the artifact would have been
    /// written.
    #[error("{path}: {message}")]
    MissingArtifact {
        path: PathBuf,
        message: String,
    },

    /// The destination path could not be opened for writing.
    #[error("{path}: {message}")]
    OpenError {
        path: PathBuf,
        message: String,
    },

    /// Fewer bytes reached disk than were requested.
    #[error("{path}: {message}")]
    ShortWriteError {
        path: PathBuf,
        message: String,
    },
}

impl EmitError {
    /// The path this error is about.
    pub fn path(&self) -> &Path {
        match self {
            EmitError::MissingArtifact { path, .. }
            | EmitError::OpenError { path, .. }
            | EmitError::ShortWriteError { path, .. } => path,
        }
    }
}

/// Result type alias for emission operations.
pub type EmitResult<T> = Result<T, EmitError>;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::manifest::ManifestBuffer;
    pub use crate::pipeline::{emit, Emitter};
    pub use crate::{EmitError, EmitResult};
    pub use prism_reflect::prelude::*;
}
