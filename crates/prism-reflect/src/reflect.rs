//! Reflection records for compiled shader stages.
//!
//! A [`Reflection`] describes the interface of one compiled stage: its
//! entry point, vertex inputs and outputs, uniform-block layout, and
//! bound images. A runtime uses this to bind resources without parsing
//! the generated source.
//!
//! The attribute, uniform-block, and image sequences are ordered `Vec`s.
//! Producers may still append an entry with slot [`UNUSED_SLOT`] as a
//! terminator; consumers stop at the *first* such entry and never look
//! past it. Uniform members carry no terminator -- every declared member
//! of a block is real.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot value marking an unused entry. Entries at or after the first
/// occurrence in a sequence are ignored.
pub const UNUSED_SLOT: i32 = -1;

// ---------------------------------------------------------------------------
// Attribute
// ---------------------------------------------------------------------------

/// One vertex input or output of a shader stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Bind slot, or [`UNUSED_SLOT`] for a terminator entry.
    pub slot: i32,
    /// Attribute name as it appears in the cross-compiled source.
    pub name: String,
    /// HLSL semantic name (e.g. `TEXCOORD`).
    pub sem_name: String,
    /// HLSL semantic index.
    pub sem_index: u32,
}

impl Attribute {
    /// Construct a populated attribute.
    pub fn new(slot: i32, name: impl Into<String>, sem_name: impl Into<String>, sem_index: u32) -> Self {
        Self {
            slot,
            name: name.into(),
            sem_name: sem_name.into(),
            sem_index,
        }
    }

    /// A terminator entry (slot = [`UNUSED_SLOT`], empty names).
    pub fn unused() -> Self {
        Self::new(UNUSED_SLOT, "", "", 0)
    }
}

// ---------------------------------------------------------------------------
// Uniforms
// ---------------------------------------------------------------------------

/// Scalar/vector/matrix type of a uniform-block member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UniformType {
    Float,
    Float2,
    Float3,
    Float4,
    Mat4,
}

impl UniformType {
    /// Stable tag used in the manifest's `type:` field.
    pub fn tag(self) -> &'static str {
        match self {
            UniformType::Float => "float",
            UniformType::Float2 => "float2",
            UniformType::Float3 => "float3",
            UniformType::Float4 => "float4",
            UniformType::Mat4 => "mat4",
        }
    }
}

impl fmt::Display for UniformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One member of a uniform block.
///
/// Uniform members are never sentinel-terminated; a block's `uniforms`
/// sequence holds exactly its declared members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uniform {
    /// Member name.
    pub name: String,
    /// Member type.
    pub ty: UniformType,
    /// Array element count (1 for non-arrays).
    pub array_count: u32,
    /// Byte offset within the block.
    pub offset: u32,
}

impl Uniform {
    /// Construct a uniform-block member.
    pub fn new(name: impl Into<String>, ty: UniformType, array_count: u32, offset: u32) -> Self {
        Self {
            name: name.into(),
            ty,
            array_count,
            offset,
        }
    }
}

/// One uniform block bound by a shader stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformBlock {
    /// Bind slot, or [`UNUSED_SLOT`] for a terminator entry.
    pub slot: i32,
    /// Total block size in bytes.
    pub size: u32,
    /// Name of the block's struct in the cross-compiled source.
    pub struct_name: String,
    /// Declared members, in declaration order.
    pub uniforms: Vec<Uniform>,
}

impl UniformBlock {
    /// Construct a uniform block with no members yet.
    pub fn new(slot: i32, size: u32, struct_name: impl Into<String>) -> Self {
        Self {
            slot,
            size,
            struct_name: struct_name.into(),
            uniforms: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// Dimensionality of a bound image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageType {
    Tex2d,
    TexCube,
    Tex3d,
    TexArray,
}

impl ImageType {
    /// Stable tag used in the manifest's `type:` field.
    pub fn tag(self) -> &'static str {
        match self {
            ImageType::Tex2d => "2d",
            ImageType::TexCube => "cube",
            ImageType::Tex3d => "3d",
            ImageType::TexArray => "array",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Base numeric type of a bound image's texels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageBaseType {
    Float,
    SInt,
    UInt,
}

impl ImageBaseType {
    /// Stable tag used in the manifest's `base_type:` field.
    pub fn tag(self) -> &'static str {
        match self {
            ImageBaseType::Float => "float",
            ImageBaseType::SInt => "sint",
            ImageBaseType::UInt => "uint",
        }
    }
}

impl fmt::Display for ImageBaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One image (texture) binding of a shader stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Bind slot, or [`UNUSED_SLOT`] for a terminator entry.
    pub slot: i32,
    /// Binding name in the cross-compiled source.
    pub name: String,
    /// Image dimensionality.
    pub ty: ImageType,
    /// Texel base type.
    pub base_type: ImageBaseType,
}

impl Image {
    /// Construct a populated image binding.
    pub fn new(slot: i32, name: impl Into<String>, ty: ImageType, base_type: ImageBaseType) -> Self {
        Self {
            slot,
            name: name.into(),
            ty,
            base_type,
        }
    }
}

// ---------------------------------------------------------------------------
// Reflection
// ---------------------------------------------------------------------------

/// Structural metadata for one compiled shader stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflection {
    /// Entry-point function name in the cross-compiled source.
    pub entry_point: String,
    /// Vertex inputs, in slot order.
    pub inputs: Vec<Attribute>,
    /// Stage outputs, in slot order.
    pub outputs: Vec<Attribute>,
    /// Bound uniform blocks, in slot order.
    pub uniform_blocks: Vec<UniformBlock>,
    /// Bound images, in slot order.
    pub images: Vec<Image>,
}

impl Reflection {
    /// An empty reflection with the given entry point.
    pub fn new(entry_point: impl Into<String>) -> Self {
        Self {
            entry_point: entry_point.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            uniform_blocks: Vec::new(),
            images: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
