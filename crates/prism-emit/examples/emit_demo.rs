//! Minimal emission demo -- one program, two target languages.
//!
//! Builds a fabricated cross-compile result for a textured-quad program
//! and runs the full emission pipeline against a temp directory, then
//! prints the generated manifest.
//!
//! Run with:
//!   cargo run --example emit_demo -p prism-emit
//!
//! Set RUST_LOG=debug to see per-artifact write events.

use anyhow::Result;

use prism_emit::paths;
use prism_emit::pipeline::emit;
use prism_reflect::prelude::*;

// ---------------------------------------------------------------------------
// Fabricated compile results
// ---------------------------------------------------------------------------

fn quad_vs_reflection() -> Reflection {
    let mut refl = Reflection::new("main");
    refl.inputs.push(Attribute::new(0, "pos", "POSITION", 0));
    refl.inputs.push(Attribute::new(1, "uv0", "TEXCOORD", 0));
    refl.outputs.push(Attribute::new(0, "uv", "TEXCOORD", 0));

    let mut block = UniformBlock::new(0, 64, "vs_params");
    block.uniforms.push(Uniform::new("mvp", UniformType::Mat4, 1, 0));
    refl.uniform_blocks.push(block);
    refl
}

fn quad_fs_reflection() -> Reflection {
    let mut refl = Reflection::new("main");
    refl.inputs.push(Attribute::new(0, "uv", "TEXCOORD", 0));
    refl.outputs.push(Attribute::new(0, "frag_color", "COLOR", 0));
    refl.images
        .push(Image::new(0, "tex", ImageType::Tex2d, ImageBaseType::Float));
    refl
}

fn compile_for(slang: Slang) -> SlangOutput {
    let mut table = SlangOutput::new();
    table.insert(
        "quad_vs",
        CompiledShader::new(
            format!("// {} vertex stage\nvoid main() {{}}\n", slang.tag()),
            quad_vs_reflection(),
        ),
    );
    table.insert(
        "quad_fs",
        CompiledShader::new(
            format!("// {} fragment stage\nvoid main() {{}}\n", slang.tag()),
            quad_fs_reflection(),
        ),
    );
    table
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let dir = std::env::temp_dir().join("prism_emit_demo");
    std::fs::create_dir_all(&dir)?;

    let mut cfg = EmitConfig::new(dir.join("demo").display().to_string());
    cfg.module = Some("fx".to_owned());
    cfg.slangs = SlangSet::new().with(Slang::Glsl330).with(Slang::MetalMacos);
    cfg.programs.push(Program::new("quad", "quad_vs", "quad_fs"));

    let mut output = BuildOutput::new();
    for slang in cfg.slangs.iter() {
        output.insert(slang, compile_for(slang));
    }

    emit(&cfg, &output)?;

    let manifest = paths::manifest_path(&cfg);
    println!("manifest written to {}", manifest.display());
    println!("---");
    print!("{}", std::fs::read_to_string(&manifest)?);
    Ok(())
}
