//! Persists one compiled stage to its generated path.
//!
//! Stage artifacts are written immediately as each program is processed,
//! before overall success of the run is known. A failed write can leave
//! a zero-length or truncated file at the target path; nothing is staged
//! through temporary paths and nothing is rolled back. Only the manifest
//! gets the buffer-then-commit guarantee (see [`crate::manifest`]).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use prism_reflect::shader::CompiledShader;
use tracing::debug;

use crate::EmitError;

/// Write one compiled stage to `path`.
///
/// The bytecode blob is preferred when present; otherwise the raw bytes
/// of the cross-compiled source are written. No framing or header is
/// added.
pub fn write_stage(path: &Path, shader: &CompiledShader) -> Result<(), EmitError> {
    let data = shader.payload();
    write_bytes(path, data)?;
    debug!(
        path = %path.display(),
        bytes = data.len(),
        binary = shader.has_bytecode(),
        "wrote stage artifact"
    );
    Ok(())
}

/// Create `path` and write `data` in full.
///
/// Fails with [`EmitError::OpenError`] when the file cannot be created
/// and [`EmitError::ShortWriteError`] when fewer bytes reach disk than
/// requested.
pub(crate) fn write_bytes(path: &Path, data: &[u8]) -> Result<(), EmitError> {
    let mut file = File::create(path).map_err(|err| EmitError::OpenError {
        path: path.to_path_buf(),
        message: format!("failed to open output file: {err}"),
    })?;
    file.write_all(data).map_err(|err| EmitError::ShortWriteError {
        path: path.to_path_buf(),
        message: format!("failed to write {} bytes: {err}", data.len()),
    })?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
