//! Manifest accumulation, reflection serialization, and the final commit.
//!
//! The manifest is a YAML document listing every emitted artifact with
//! its reflection. It is accumulated in a [`ManifestBuffer`] owned by
//! the emission invocation and written to disk in a single commit only
//! after every language pass has succeeded, so a manifest file on disk
//! is always structurally complete for the languages it was asked for.
//!
//! Serialization rules for the bounded-list sequences: attribute, block,
//! and image sequences stop at the *first* entry whose slot is
//! [`UNUSED_SLOT`]; a block's uniform members carry no terminator and
//! are emitted in full. The `uniform_blocks:` and `images:` keys only
//! appear when their sequences are non-empty.

use std::fmt::Write as _;
use std::path::Path;

use prism_reflect::reflect::{Attribute, Image, Reflection, UniformBlock, UNUSED_SLOT};
use prism_reflect::shader::ShaderStage;
use prism_reflect::slang::Slang;

use crate::writer;
use crate::EmitError;

// ---------------------------------------------------------------------------
// ManifestBuffer
// ---------------------------------------------------------------------------

/// In-memory manifest accumulator with a single-shot commit.
///
/// One buffer belongs to exactly one emission invocation; a concurrent
/// invocation must use its own. Append methods are pure text formatting
/// and cannot fail.
#[derive(Debug, Default)]
pub struct ManifestBuffer {
    content: String,
}

impl ManifestBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the document with the top-level `shaders:` key.
    pub fn begin_document(&mut self) {
        self.content.push_str("shaders:\n");
    }

    /// Open a language block.
    pub fn begin_slang(&mut self, slang: Slang) {
        self.content.push_str("  -\n");
        let _ = writeln!(self.content, "    slang: {}", slang.tag());
        self.content.push_str("    programs:\n");
    }

    /// Open a program block within the current language block.
    pub fn begin_program(&mut self, name: &str) {
        self.content.push_str("      -\n");
        let _ = writeln!(self.content, "        name: {name}");
    }

    /// Append one stage entry: the artifact path followed by the full
    /// reflection rendering.
    pub fn stage_entry(&mut self, stage: ShaderStage, path: &Path, reflection: &Reflection) {
        let _ = writeln!(self.content, "        {}:", stage.tag());
        let _ = writeln!(self.content, "          path: {}", path.display());
        write_reflection(&mut self.content, reflection);
    }

    /// The accumulated document text.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns `true` if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Write the accumulated document to `path` in one shot.
    ///
    /// This is the only point in an emission run where the manifest
    /// touches disk. Fails with [`EmitError::OpenError`] /
    /// [`EmitError::ShortWriteError`] under the same rules as stage
    /// writes.
    pub fn commit(&self, path: &Path) -> Result<(), EmitError> {
        writer::write_bytes(path, self.content.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Reflection serialization
// ---------------------------------------------------------------------------

/// Render one stage's reflection under its manifest entry.
fn write_reflection(out: &mut String, refl: &Reflection) {
    let _ = writeln!(out, "          entry_point: {}", refl.entry_point);

    out.push_str("          inputs:\n");
    for input in &refl.inputs {
        if input.slot == UNUSED_SLOT {
            break;
        }
        write_attribute(out, input);
    }

    out.push_str("          outputs:\n");
    for output in &refl.outputs {
        if output.slot == UNUSED_SLOT {
            break;
        }
        write_attribute(out, output);
    }

    if !refl.uniform_blocks.is_empty() {
        out.push_str("          uniform_blocks:\n");
        for block in &refl.uniform_blocks {
            if block.slot == UNUSED_SLOT {
                break;
            }
            write_uniform_block(out, block);
        }
    }

    if !refl.images.is_empty() {
        out.push_str("          images:\n");
        for image in &refl.images {
            if image.slot == UNUSED_SLOT {
                break;
            }
            write_image(out, image);
        }
    }
}

fn write_attribute(out: &mut String, attr: &Attribute) {
    out.push_str("            -\n");
    let _ = writeln!(out, "              slot: {}", attr.slot);
    let _ = writeln!(out, "              name: {}", attr.name);
    let _ = writeln!(out, "              sem_name: {}", attr.sem_name);
    let _ = writeln!(out, "              sem_index: {}", attr.sem_index);
}

fn write_uniform_block(out: &mut String, block: &UniformBlock) {
    out.push_str("            -\n");
    let _ = writeln!(out, "              slot: {}", block.slot);
    let _ = writeln!(out, "              size: {}", block.size);
    let _ = writeln!(out, "              struct_name: {}", block.struct_name);
    out.push_str("              uniforms:\n");
    // Uniform members have no sentinel; every declared member is real.
    for uniform in &block.uniforms {
        out.push_str("                -\n");
        let _ = writeln!(out, "                  name: {}", uniform.name);
        let _ = writeln!(out, "                  type: {}", uniform.ty.tag());
        let _ = writeln!(out, "                  array_count: {}", uniform.array_count);
        let _ = writeln!(out, "                  offset: {}", uniform.offset);
    }
}

fn write_image(out: &mut String, image: &Image) {
    out.push_str("            -\n");
    let _ = writeln!(out, "              slot: {}", image.slot);
    let _ = writeln!(out, "              name: {}", image.name);
    let _ = writeln!(out, "              type: {}", image.ty.tag());
    let _ = writeln!(out, "              base_type: {}", image.base_type.tag());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
