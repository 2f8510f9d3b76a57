//! Prism Reflect -- data model for the Prism shader build tool's emission
//! stage.
//!
//! This crate holds the read-only inputs the emission pipeline consumes:
//! the target-language enumeration ([`slang`]), shader stages and compiled
//! artifacts ([`shader`]), reflection records ([`reflect`]), and the
//! program table plus emission configuration ([`config`]).
//!
//! Everything here is produced by the upstream cross-compilation stages
//! and is read-only to the emission core. The types derive `serde`
//! traits so downstream consumers can persist or transport them as JSON.
//!
//! # Quick Start
//!
//! ```
//! use prism_reflect::prelude::*;
//!
//! let refl = Reflection::new("main");
//! let shader = CompiledShader::new("void main() {}", refl);
//!
//! let mut output = SlangOutput::new();
//! output.insert("triangle_vs", shader);
//! assert!(output.get("triangle_vs").is_some());
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod reflect;
pub mod shader;
pub mod slang;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{EmitConfig, Program};
    pub use crate::reflect::{
        Attribute, Image, ImageBaseType, ImageType, Reflection, Uniform, UniformBlock,
        UniformType, UNUSED_SLOT,
    };
    pub use crate::shader::{BuildOutput, CompiledShader, ShaderStage, SlangOutput};
    pub use crate::slang::{Slang, SlangSet};
}
