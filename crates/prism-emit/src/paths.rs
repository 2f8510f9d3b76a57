//! Deterministic output paths for stage artifacts and the manifest.
//!
//! Path generation is pure string formatting: the same configuration,
//! program, language, stage, and binary flag always produce the same
//! path, and distinct (program, language, stage) triples never collide
//! for a fixed configuration (a tested property, not a runtime check).

use std::path::PathBuf;

use prism_reflect::config::EmitConfig;
use prism_reflect::shader::ShaderStage;
use prism_reflect::slang::Slang;

/// File extension for one stage artifact.
///
/// The GLSL dialects share one text extension regardless of the binary
/// flag; HLSL and Metal targets have a native binary container used when
/// a binary artifact was produced, and their text extension otherwise.
pub fn file_extension(slang: Slang, binary: bool) -> &'static str {
    match slang {
        Slang::Glsl330 | Slang::Glsl100 | Slang::Glsl300Es => ".glsl",
        Slang::Hlsl4 | Slang::Hlsl5 => {
            if binary {
                ".fxc"
            } else {
                ".hlsl"
            }
        }
        Slang::MetalMacos | Slang::MetalIos | Slang::MetalSim => {
            if binary {
                ".metallib"
            } else {
                ".metal"
            }
        }
    }
}

/// Path of one stage artifact:
/// `{prefix}_{module}{program}_{language}_{stage}{extension}`.
pub fn stage_path(
    cfg: &EmitConfig,
    program: &str,
    slang: Slang,
    stage: ShaderStage,
    binary: bool,
) -> PathBuf {
    PathBuf::from(format!(
        "{}_{}{}_{}_{}{}",
        cfg.out_prefix,
        cfg.module_prefix(),
        program,
        slang.tag(),
        stage.tag(),
        file_extension(slang, binary),
    ))
}

/// Path of the manifest file: `{prefix}{module-suffix}.yaml`.
pub fn manifest_path(cfg: &EmitConfig) -> PathBuf {
    PathBuf::from(format!("{}{}.yaml", cfg.out_prefix, cfg.module_suffix()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(module: Option<&str>) -> EmitConfig {
        let mut cfg = EmitConfig::new("out/shaders");
        cfg.module = module.map(str::to_owned);
        cfg
    }

    #[test]
    fn stage_path_shape() {
        let path = stage_path(&cfg(None), "triangle", Slang::Glsl330, ShaderStage::Vertex, false);
        assert_eq!(path, PathBuf::from("out/shaders_triangle_glsl330_vs.glsl"));
    }

    #[test]
    fn stage_path_includes_module_prefix() {
        let path = stage_path(&cfg(Some("fx")), "blur", Slang::Hlsl5, ShaderStage::Fragment, false);
        assert_eq!(path, PathBuf::from("out/shaders_fx_blur_hlsl5_fs.hlsl"));
    }

    #[test]
    fn binary_flag_selects_container_extension() {
        assert_eq!(file_extension(Slang::Hlsl4, true), ".fxc");
        assert_eq!(file_extension(Slang::Hlsl4, false), ".hlsl");
        assert_eq!(file_extension(Slang::MetalIos, true), ".metallib");
        assert_eq!(file_extension(Slang::MetalIos, false), ".metal");
        // GLSL has no binary container.
        assert_eq!(file_extension(Slang::Glsl100, true), ".glsl");
        assert_eq!(file_extension(Slang::Glsl100, false), ".glsl");
    }

    #[test]
    fn manifest_path_with_and_without_module() {
        assert_eq!(manifest_path(&cfg(None)), PathBuf::from("out/shaders.yaml"));
        assert_eq!(
            manifest_path(&cfg(Some("fx"))),
            PathBuf::from("out/shaders_fx.yaml")
        );
    }

    #[test]
    fn distinct_stages_never_share_a_path() {
        let cfg = cfg(Some("fx"));
        let mut seen = std::collections::HashSet::new();
        for program in ["a", "b"] {
            for slang in Slang::ALL {
                for stage in ShaderStage::ALL {
                    assert!(
                        seen.insert(stage_path(&cfg, program, slang, stage, false)),
                        "path collision for {program}/{slang}/{stage}"
                    );
                }
            }
        }
    }
}
