//! Structure templates and palette selection.

use simdnbt::owned::NbtCompound;
use strata_registry::BlockState;
use strata_utils::{
    BlockPos, Identifier,
    random::{LegacyRandom, get_seed_at},
};
use thiserror::Error;

/// A block about to be placed by a structure.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureBlockInfo {
    /// Where the block goes.
    pub pos: BlockPos,
    /// The block state to place.
    pub state: BlockState,
    /// Block entity data, if any.
    pub nbt: Option<NbtCompound>,
}

impl StructureBlockInfo {
    /// A block without block entity data.
    #[must_use]
    pub fn new(pos: BlockPos, state: BlockState) -> Self {
        Self {
            pos,
            state,
            nbt: None,
        }
    }

    /// Attaches block entity data.
    #[must_use]
    pub fn with_nbt(mut self, nbt: NbtCompound) -> Self {
        self.nbt = Some(nbt);
        self
    }
}

/// One complete set of blocks for a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    blocks: Vec<StructureBlockInfo>,
}

impl Palette {
    /// Wraps a block list.
    #[must_use]
    pub fn new(blocks: Vec<StructureBlockInfo>) -> Self {
        Self { blocks }
    }

    /// Blocks in template order.
    #[must_use]
    pub fn blocks(&self) -> &[StructureBlockInfo] {
        &self.blocks
    }
}

/// A loaded structure template with one or more alternative palettes.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureTemplate {
    /// Template identifier.
    pub id: Identifier,
    palettes: Vec<Palette>,
}

impl StructureTemplate {
    /// Creates a template from its palettes.
    #[must_use]
    pub fn new(id: Identifier, palettes: Vec<Palette>) -> Self {
        Self { id, palettes }
    }

    /// All palettes in load order.
    #[must_use]
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }
}

/// Failure to pick a palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// No template was supplied with the block.
    #[error("no structure template available")]
    Missing,
    /// The template has an empty palette list.
    #[error("template {0} has no palettes")]
    NoPalettes(Identifier),
}

/// Chooses which palette of a template is placed at an origin.
pub trait PaletteSelector: Send + Sync {
    /// Picks a palette. The same template and origin always give the same palette.
    fn select<'t>(
        &self,
        template: &'t StructureTemplate,
        origin: BlockPos,
    ) -> Result<&'t Palette, TemplateError>;
}

/// Vanilla palette choice: a legacy random seeded from the origin, or from a fixed seed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeededPaletteSelector {
    seed: Option<i64>,
}

impl SeededPaletteSelector {
    /// Seeds from each origin's positional seed.
    #[must_use]
    pub const fn positional() -> Self {
        Self { seed: None }
    }

    /// Uses the same seed for every origin.
    #[must_use]
    pub const fn fixed(seed: i64) -> Self {
        Self { seed: Some(seed) }
    }
}

impl PaletteSelector for SeededPaletteSelector {
    fn select<'t>(
        &self,
        template: &'t StructureTemplate,
        origin: BlockPos,
    ) -> Result<&'t Palette, TemplateError> {
        let palettes = template.palettes();
        if palettes.is_empty() {
            return Err(TemplateError::NoPalettes(template.id.clone()));
        }
        if palettes.len() == 1 {
            return Ok(&palettes[0]);
        }
        let seed = self.seed.unwrap_or_else(|| get_seed_at(origin));
        let mut random = LegacyRandom::from_seed(seed as u64);
        let index = random.next_i32_bounded(palettes.len() as i32) as usize;
        Ok(&palettes[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use strata_registry::BlockDefinition;

    fn palette(path: &'static str) -> Palette {
        let state = BlockState::default_of(Arc::new(BlockDefinition::new(
            Identifier::vanilla_static(path),
        )));
        Palette::new(vec![StructureBlockInfo::new(BlockPos::new(0, 0, 0), state)])
    }

    fn template(palettes: Vec<Palette>) -> StructureTemplate {
        StructureTemplate::new(Identifier::new_static("irons_spellbooks", "tower"), palettes)
    }

    #[test]
    fn empty_template_is_an_error() {
        let template = template(Vec::new());
        assert_eq!(
            SeededPaletteSelector::positional().select(&template, BlockPos::new(0, 0, 0)),
            Err(TemplateError::NoPalettes(template.id.clone()))
        );
    }

    #[test]
    fn selection_matches_legacy_random() {
        let template = template(vec![palette("oak_planks"), palette("spruce_planks"), palette("birch_planks")]);
        let origin = BlockPos::new(100, 64, -200);

        let mut random = LegacyRandom::from_seed(get_seed_at(origin) as u64);
        let expected = &template.palettes()[random.next_i32_bounded(3) as usize];
        let selected = SeededPaletteSelector::positional()
            .select(&template, origin)
            .expect("non-empty");
        assert_eq!(selected, expected);
    }

    #[test]
    fn selection_is_stable_per_origin() {
        let template = template(vec![palette("oak_planks"), palette("spruce_planks")]);
        let selector = SeededPaletteSelector::fixed(42);
        let first = selector.select(&template, BlockPos::new(1, 2, 3)).expect("non-empty");
        let second = selector.select(&template, BlockPos::new(-9, 0, 7)).expect("non-empty");
        assert_eq!(first, second);
    }
}
