//! Shader stages and per-language cross-compile results.
//!
//! A [`CompiledShader`] is what one backend produced for one shader in
//! one target language: the cross-compiled source text, its
//! [`Reflection`], and optionally a platform bytecode blob. The blob,
//! when present, is what gets written to disk and selects the binary
//! file extension; the source text is the fallback.
//!
//! [`SlangOutput`] collects a language's shaders by name, and
//! [`BuildOutput`] collects the per-language outputs of one build
//! invocation. A shader missing from a requested language's output is a
//! precondition violation the emission pipeline reports before writing
//! anything for that language.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::reflect::Reflection;
use crate::slang::Slang;

// ---------------------------------------------------------------------------
// ShaderStage
// ---------------------------------------------------------------------------

/// One of the two shader pipeline stages handled by the emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Both stages, in the order they are written per program.
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    /// Short tag used in artifact file names and manifest keys.
    pub fn tag(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs",
            ShaderStage::Fragment => "fs",
        }
    }

    /// Human-readable stage name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// CompiledShader
// ---------------------------------------------------------------------------

/// One shader's cross-compile result for one target language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledShader {
    /// Cross-compiled source text.
    pub source: String,
    /// Reflection extracted alongside the source.
    pub reflection: Reflection,
    /// Platform bytecode, when a backend produced a binary container.
    pub bytecode: Option<Vec<u8>>,
}

impl CompiledShader {
    /// A text-only compiled shader.
    pub fn new(source: impl Into<String>, reflection: Reflection) -> Self {
        Self {
            source: source.into(),
            reflection,
            bytecode: None,
        }
    }

    /// Attach a bytecode blob.
    pub fn with_bytecode(mut self, bytecode: Vec<u8>) -> Self {
        self.bytecode = Some(bytecode);
        self
    }

    /// Whether a binary container was produced for this shader.
    #[inline]
    pub fn has_bytecode(&self) -> bool {
        self.bytecode.is_some()
    }

    /// The bytes that go to disk: bytecode when present, source otherwise.
    pub fn payload(&self) -> &[u8] {
        match &self.bytecode {
            Some(blob) => blob,
            None => self.source.as_bytes(),
        }
    }
}

// ---------------------------------------------------------------------------
// SlangOutput
// ---------------------------------------------------------------------------

/// One target language's cross-compile results, keyed by shader name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlangOutput {
    shaders: HashMap<String, CompiledShader>,
}

impl SlangOutput {
    /// Create an empty output table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a shader's compile result.
    pub fn insert(&mut self, name: impl Into<String>, shader: CompiledShader) {
        self.shaders.insert(name.into(), shader);
    }

    /// Look up a shader by name.
    pub fn get(&self, name: &str) -> Option<&CompiledShader> {
        self.shaders.get(name)
    }

    /// Number of compiled shaders in this language's table.
    pub fn len(&self) -> usize {
        self.shaders.len()
    }

    /// Returns `true` if no shader was compiled for this language.
    pub fn is_empty(&self) -> bool {
        self.shaders.is_empty()
    }
}

// ---------------------------------------------------------------------------
// BuildOutput
// ---------------------------------------------------------------------------

/// Per-language cross-compile results for one build invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildOutput {
    per_slang: HashMap<Slang, SlangOutput>,
}

impl BuildOutput {
    /// Create an empty build output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a language's output table.
    pub fn insert(&mut self, slang: Slang, output: SlangOutput) {
        self.per_slang.insert(slang, output);
    }

    /// The output table for `slang`, if that language was compiled.
    pub fn get(&self, slang: Slang) -> Option<&SlangOutput> {
        self.per_slang.get(&slang)
    }

    /// The output table for `slang`, created on first use.
    pub fn entry(&mut self, slang: Slang) -> &mut SlangOutput {
        self.per_slang.entry(slang).or_default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
