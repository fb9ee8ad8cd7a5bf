//! Structure block replacement.
//!
//! Structures built from vanilla blocks are rewritten block by block while they are
//! placed: stone, soil and wood follow the terrain and the template around them, and
//! utility blocks map to fixed catalog equivalents. Anything without an equivalent in
//! the catalog is left as it was.

pub mod config;
pub mod level;
pub mod processor;
pub mod template;

pub use config::{ConfigError, ProcessorConfig};
pub use level::{Dimension, MemoryTerrain, TerrainAccess};
pub use processor::{
    BlockReplacementProcessor, PlacementContext, ProcessRequest, ProcessorCache, ReplacementScope,
};
pub use template::{
    Palette, PaletteSelector, SeededPaletteSelector, StructureBlockInfo, StructureTemplate,
    TemplateError,
};
