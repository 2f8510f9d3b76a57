//! The per-language emission pass driver.
//!
//! [`emit`] walks the requested target languages in [`Slang::ALL`] order
//! (never configuration-flag order), so manifest language blocks are
//! deterministic. For each language it first validates that every
//! program's vertex and fragment artifacts exist; only then does it
//! write stage files and append manifest entries, program by program in
//! table order. The manifest is committed in a single write after every
//! language pass has succeeded.
//!
//! Any failure aborts the whole invocation: the first error in language
//! -> program -> stage scan order is returned, the manifest is never
//! written, and stage files already written for earlier languages or
//! programs are left in place (see [`crate::writer`]).

use prism_reflect::config::{EmitConfig, Program};
use prism_reflect::shader::{BuildOutput, CompiledShader, ShaderStage};
use prism_reflect::slang::Slang;
use tracing::info;

use crate::manifest::ManifestBuffer;
use crate::paths;
use crate::writer;
use crate::EmitError;

/// Run one emission invocation.
///
/// On success every requested (program, language, stage) artifact file
/// and the manifest exist on disk. On failure no manifest is written.
pub fn emit(config: &EmitConfig, output: &BuildOutput) -> Result<(), EmitError> {
    Emitter::new(config, output).run()
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Drives one emission invocation and owns its manifest buffer.
///
/// The buffer lives and dies with the `Emitter` value, so concurrent
/// invocations are fully independent.
pub struct Emitter<'a> {
    config: &'a EmitConfig,
    output: &'a BuildOutput,
    manifest: ManifestBuffer,
}

impl<'a> Emitter<'a> {
    /// Create an emitter with a fresh manifest buffer.
    pub fn new(config: &'a EmitConfig, output: &'a BuildOutput) -> Self {
        Self {
            config,
            output,
            manifest: ManifestBuffer::new(),
        }
    }

    /// Run every requested language pass, then commit the manifest.
    pub fn run(mut self) -> Result<(), EmitError> {
        let config = self.config;
        self.manifest.begin_document();

        for slang in Slang::ALL {
            if !config.slangs.contains(slang) {
                continue;
            }
            self.check_programs(slang)?;

            info!(
                slang = slang.tag(),
                programs = config.programs.len(),
                "emitting language pass"
            );
            self.manifest.begin_slang(slang);
            for program in &config.programs {
                self.emit_program(slang, program)?;
            }
        }

        let path = paths::manifest_path(config);
        self.manifest.commit(&path)?;
        info!(path = %path.display(), "manifest committed");
        Ok(())
    }

    /// Validate that every program's vertex and fragment artifacts exist
    /// for `slang` before any of its files are written.
    fn check_programs(&self, slang: Slang) -> Result<(), EmitError> {
        for program in &self.config.programs {
            self.resolve(slang, program)?;
        }
        Ok(())
    }

    /// Look up a program's compiled vertex and fragment shaders for
    /// `slang`, in stage order, reporting the first one missing.
    fn resolve(
        &self,
        slang: Slang,
        program: &Program,
    ) -> Result<(&'a CompiledShader, &'a CompiledShader), EmitError> {
        let output = self.output;
        let vs = output
            .get(slang)
            .and_then(|o| o.get(&program.vs_name))
            .ok_or_else(|| self.missing_artifact(slang, ShaderStage::Vertex, program, &program.vs_name))?;
        let fs = output
            .get(slang)
            .and_then(|o| o.get(&program.fs_name))
            .ok_or_else(|| self.missing_artifact(slang, ShaderStage::Fragment, program, &program.fs_name))?;
        Ok((vs, fs))
    }

    fn missing_artifact(
        &self,
        slang: Slang,
        stage: ShaderStage,
        program: &Program,
        shader_name: &str,
    ) -> EmitError {
        EmitError::MissingArtifact {
            // The text-mode path the artifact would have been written to.
            path: paths::stage_path(self.config, &program.name, slang, stage, false),
            message: format!(
                "no {stage} shader '{shader_name}' compiled for program '{}' in {}",
                program.name,
                slang.tag()
            ),
        }
    }

    /// Write both stage files for one program and append its manifest
    /// entry. The entry is only appended once both writes succeeded.
    fn emit_program(&mut self, slang: Slang, program: &Program) -> Result<(), EmitError> {
        let (vs, fs) = self.resolve(slang, program)?;

        let vs_path =
            paths::stage_path(self.config, &program.name, slang, ShaderStage::Vertex, vs.has_bytecode());
        let fs_path =
            paths::stage_path(self.config, &program.name, slang, ShaderStage::Fragment, fs.has_bytecode());

        writer::write_stage(&vs_path, vs)?;
        writer::write_stage(&fs_path, fs)?;

        self.manifest.begin_program(&program.name);
        self.manifest.stage_entry(ShaderStage::Vertex, &vs_path, &vs.reflection);
        self.manifest.stage_entry(ShaderStage::Fragment, &fs_path, &fs.reflection);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use prism_reflect::reflect::Reflection;

    fn one_program_config(slang: Slang) -> EmitConfig {
        let mut cfg = EmitConfig::new("unwritten/out");
        cfg.slangs.insert(slang);
        cfg.programs.push(Program::new("tri", "tri_vs", "tri_fs"));
        cfg
    }

    #[test]
    fn missing_language_output_is_missing_artifact() {
        let cfg = one_program_config(Slang::Glsl330);
        let output = BuildOutput::new();

        // Validation precedes every write, so the bogus prefix is never
        // touched.
        let err = emit(&cfg, &output).unwrap_err();
        assert!(matches!(err, EmitError::MissingArtifact { .. }));
        assert!(err.to_string().contains("tri_vs"));
    }

    #[test]
    fn vertex_stage_is_reported_before_fragment() {
        let cfg = one_program_config(Slang::Glsl330);

        // Only the fragment shader is present: the vertex stage must be
        // the one reported.
        let mut output = BuildOutput::new();
        output
            .entry(Slang::Glsl330)
            .insert("tri_fs", CompiledShader::new("fs", Reflection::new("main")));

        let err = emit(&cfg, &output).unwrap_err();
        assert!(err.to_string().contains("vertex"));
        assert!(err.to_string().contains("tri_vs"));
    }

    #[test]
    fn missing_artifact_path_names_the_stage_file() {
        let cfg = one_program_config(Slang::Hlsl5);
        let output = BuildOutput::new();

        let err = emit(&cfg, &output).unwrap_err();
        assert_eq!(
            err.path(),
            std::path::Path::new("unwritten/out_tri_hlsl5_vs.hlsl")
        );
    }

    #[test]
    fn first_failing_program_in_table_order_wins() {
        let mut cfg = EmitConfig::new("unwritten/out");
        cfg.slangs.insert(Slang::Glsl330);
        cfg.programs.push(Program::new("alpha", "alpha_vs", "alpha_fs"));
        cfg.programs.push(Program::new("beta", "beta_vs", "beta_fs"));

        // Both programs are missing everything; alpha is first in table
        // order, so alpha's vertex stage is the error.
        let err = emit(&cfg, &BuildOutput::new()).unwrap_err();
        assert!(err.to_string().contains("alpha_vs"));
    }
}
