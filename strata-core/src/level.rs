//! Read-only access to terrain that is already placed.

use rustc_hash::FxHashMap;
use strata_registry::BlockState;
use strata_utils::{BlockPos, Identifier};

/// The dimension a structure is placed in, as far as replacement defaults care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// `minecraft:overworld`.
    Overworld,
    /// `minecraft:the_nether`.
    Nether,
    /// `minecraft:the_end`.
    End,
    /// Any other dimension.
    Other,
}

impl Dimension {
    /// Classifies a dimension key.
    #[must_use]
    pub fn from_key(key: &Identifier) -> Self {
        if !key.is_vanilla() {
            return Dimension::Other;
        }
        match &*key.path {
            "overworld" => Dimension::Overworld,
            "the_nether" => Dimension::Nether,
            "the_end" => Dimension::End,
            _ => Dimension::Other,
        }
    }
}

/// Terrain the processor may look at while placing a structure.
pub trait TerrainAccess: Sync {
    /// The block at `pos`, or `None` if it is not available.
    fn get_block_state(&self, pos: BlockPos) -> Option<BlockState>;

    /// The lowest y coordinate that holds blocks.
    fn min_build_height(&self) -> i32;

    /// The dimension being generated, if known.
    fn dimension(&self) -> Option<Dimension> {
        None
    }
}

/// Sparse in-memory terrain. Unset positions read as unavailable.
#[derive(Debug, Clone, Default)]
pub struct MemoryTerrain {
    blocks: FxHashMap<BlockPos, BlockState>,
    min_build_height: i32,
    dimension: Option<Dimension>,
}

impl MemoryTerrain {
    /// Empty terrain with the given lower bound and dimension.
    #[must_use]
    pub fn new(min_build_height: i32, dimension: Option<Dimension>) -> Self {
        Self {
            blocks: FxHashMap::default(),
            min_build_height,
            dimension,
        }
    }

    /// Places `state` at `pos`, replacing whatever was there.
    pub fn set_block(&mut self, pos: BlockPos, state: BlockState) {
        self.blocks.insert(pos, state);
    }

    /// Fills `from_y..=to_y` in the column at `(x, z)`.
    pub fn fill_column(&mut self, x: i32, z: i32, from_y: i32, to_y: i32, state: &BlockState) {
        for y in from_y..=to_y {
            self.blocks.insert(BlockPos::new(x, y, z), state.clone());
        }
    }
}

impl TerrainAccess for MemoryTerrain {
    fn get_block_state(&self, pos: BlockPos) -> Option<BlockState> {
        self.blocks.get(&pos).cloned()
    }

    fn min_build_height(&self) -> i32 {
        self.min_build_height
    }

    fn dimension(&self) -> Option<Dimension> {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_keys() {
        assert_eq!(
            Dimension::from_key(&Identifier::vanilla_static("overworld")),
            Dimension::Overworld
        );
        assert_eq!(
            Dimension::from_key(&Identifier::vanilla_static("the_nether")),
            Dimension::Nether
        );
        assert_eq!(
            Dimension::from_key(&Identifier::vanilla_static("the_end")),
            Dimension::End
        );
        assert_eq!(
            Dimension::from_key(&Identifier::new_static("tfc", "overworld")),
            Dimension::Other
        );
    }
}
