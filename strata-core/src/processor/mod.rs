//! Replaces vanilla blocks in placed structures with their catalog equivalents.
//!
//! Each call handles one block. The placement origin keys three small caches (rock,
//! soil and palette wood) so the terrain scan and palette walk run once per
//! placement; [`ProcessorCache`] is owned by the caller, one per worker.

pub mod cache;
pub mod context;
pub mod mapping;
pub mod state_transfer;
pub mod wood;

use rayon::prelude::*;
use strata_registry::{BlockCatalog, BlockStateProperties, PropertyValue};
use strata_utils::BlockPos;

use crate::config::ProcessorConfig;
use crate::level::{Dimension, TerrainAccess};
use crate::template::{PaletteSelector, SeededPaletteSelector, StructureBlockInfo, StructureTemplate};

pub use cache::{OriginCache, ProcessorCache};
pub use context::{PlacementContext, ReplacementScope};
pub use mapping::{Category, Mapping, MappingInput, TFC_FIREPIT, map_vanilla_to_tfc};

use context::{DEFAULT_ROCK_OVERWORLD, DEFAULT_SOIL, default_rock, find_rock_below, find_soil_below};
use mapping::MINECRAFT_WATER;
use state_transfer::{apply_firepit_axis_from_facing, copy_properties_by_name};

/// One block handed over by the structure placement.
pub struct ProcessRequest<'a> {
    /// Terrain around the placement.
    pub level: &'a dyn TerrainAccess,
    /// Anchor of the placement; keys the caches.
    pub origin: BlockPos,
    /// The block after earlier processors ran.
    pub block: StructureBlockInfo,
    /// The template being placed, if the host has it.
    pub template: Option<&'a StructureTemplate>,
}

/// The replacement processor.
pub struct BlockReplacementProcessor<C, P = SeededPaletteSelector> {
    catalog: C,
    palette_selector: P,
    scan_depth: u32,
    cache_capacity: usize,
}

impl<C: BlockCatalog> BlockReplacementProcessor<C> {
    /// A processor using vanilla palette selection.
    pub fn new(catalog: C, config: &ProcessorConfig) -> Self {
        Self::with_palette_selector(catalog, SeededPaletteSelector::positional(), config)
    }
}

impl<C: BlockCatalog, P: PaletteSelector> BlockReplacementProcessor<C, P> {
    /// A processor with a custom palette selector.
    pub fn with_palette_selector(catalog: C, palette_selector: P, config: &ProcessorConfig) -> Self {
        Self {
            catalog,
            palette_selector,
            scan_depth: config.scan_depth,
            cache_capacity: config.cache_capacity,
        }
    }

    /// The catalog outputs are checked against.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// A fresh cache sized for this processor. Give each worker its own.
    #[must_use]
    pub fn new_cache(&self) -> ProcessorCache {
        ProcessorCache::new(self.cache_capacity)
    }

    /// Processes one block. Returns the input unchanged when nothing applies.
    pub fn process(&self, cache: &mut ProcessorCache, request: ProcessRequest<'_>) -> StructureBlockInfo {
        let ProcessRequest {
            level,
            origin,
            block,
            template,
        } = request;

        let state = &block.state;
        if state.is_air() {
            return block;
        }
        let key = state.block();
        if !key.is_vanilla() || key.path.contains("blackstone") || key.path.contains("deepslate") {
            return block;
        }
        let path = key.path.strip_prefix("infested_").unwrap_or(&key.path);

        if path == "tall_seagrass"
            && state.try_get_value(&BlockStateProperties::DOUBLE_BLOCK_HALF)
                == Some(&PropertyValue::named("upper"))
        {
            return match self.catalog.default_state(&MINECRAFT_WATER) {
                Some(water) => StructureBlockInfo {
                    pos: block.pos,
                    state: water,
                    nbt: block.nbt,
                },
                None => block,
            };
        }

        let dimension = level.dimension();
        let context = self.resolve_context(level, cache, dimension, origin, path, template);
        let input = MappingInput {
            path,
            context: &context,
            catalog: &self.catalog,
        };
        let Some(mapping) = map_vanilla_to_tfc(&input) else {
            return block;
        };
        let Some(target) = self.catalog.default_state(&mapping.id) else {
            return block;
        };
        if target.is_air() {
            return block;
        }

        let mut out = copy_properties_by_name(state, target);
        let mut nbt = block.nbt;
        if mapping.is_fire_source() {
            out = apply_firepit_axis_from_facing(state, out);
            nbt = None;
        }
        log::trace!("{key} at {} -> {out} ({:?})", block.pos, mapping.category);

        StructureBlockInfo {
            pos: block.pos,
            state: out,
            nbt,
        }
    }

    /// Processes a whole placement in parallel. Each rayon work unit gets its own cache;
    /// the output is identical to calling [`Self::process`] on each block in order.
    pub fn process_batch(
        &self,
        level: &dyn TerrainAccess,
        origin: BlockPos,
        template: Option<&StructureTemplate>,
        blocks: &[StructureBlockInfo],
    ) -> Vec<StructureBlockInfo> {
        blocks
            .par_iter()
            .map_init(
                || self.new_cache(),
                |cache, block| {
                    self.process(
                        cache,
                        ProcessRequest {
                            level,
                            origin,
                            block: block.clone(),
                            template,
                        },
                    )
                },
            )
            .collect()
    }

    /// Rock, soil and wood for this block, from the caches when possible.
    fn resolve_context(
        &self,
        level: &dyn TerrainAccess,
        cache: &mut ProcessorCache,
        dimension: Option<Dimension>,
        origin: BlockPos,
        path: &str,
        template: Option<&StructureTemplate>,
    ) -> PlacementContext {
        let scope = ReplacementScope::for_dimension(dimension);
        let key = origin.as_i64();

        let (rock, soil) = match scope {
            ReplacementScope::Full => {
                let rock = cache
                    .rock
                    .get_or_insert_with(key, || {
                        let rock = find_rock_below(level, origin, self.scan_depth)
                            .unwrap_or_else(|| default_rock(dimension).to_string());
                        log::debug!("rock at origin {origin} resolved to {rock}");
                        rock
                    })
                    .to_string();
                let soil = cache
                    .soil
                    .get_or_insert_with(key, || {
                        let soil = find_soil_below(level, origin, self.scan_depth)
                            .unwrap_or_else(|| DEFAULT_SOIL.to_string());
                        log::debug!("soil at origin {origin} resolved to {soil}");
                        soil
                    })
                    .to_string();
                (rock, soil)
            }
            ReplacementScope::UtilityOnly => {
                (DEFAULT_ROCK_OVERWORLD.to_string(), DEFAULT_SOIL.to_string())
            }
        };

        let wood_hint = match wood::detect_vanilla_wood_type(path) {
            Some(wood) => wood.to_string(),
            None => cache
                .wood
                .get_or_insert_with(key, || {
                    let wood = wood::palette_wood_hint(&self.palette_selector, template, origin);
                    log::debug!("palette wood at origin {origin} resolved to {wood}");
                    wood.to_string()
                })
                .to_string(),
        };

        PlacementContext {
            rock,
            soil,
            wood_hint,
            scope,
        }
    }
}
