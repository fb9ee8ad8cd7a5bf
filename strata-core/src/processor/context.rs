//! Placement context: replacement scope plus the rock and soil found under the origin.

use strata_utils::{BlockPos, Identifier};

use crate::level::{Dimension, TerrainAccess};

/// Namespace of the replacement catalog.
pub const NS_TFC: &str = "tfc";

/// Rock used in the overworld when the scan finds nothing.
pub const DEFAULT_ROCK_OVERWORLD: &str = "granite";
/// Rock used in the nether when the scan finds nothing.
pub const DEFAULT_ROCK_NETHER: &str = "basalt";
/// Rock used in the end when the scan finds nothing.
pub const DEFAULT_ROCK_END: &str = "granite";
/// Soil used when the scan finds nothing.
pub const DEFAULT_SOIL: &str = "mollisol";

const SOIL_PREFIXES: [&str; 10] = [
    "dirt/",
    "coarse_dirt/",
    "grass/",
    "grass_path/",
    "rooted_dirt/",
    "farmland/",
    "clay_grass/",
    "mud/",
    "mud_bricks/",
    "muddy_roots/",
];

/// Which rule categories may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplacementScope {
    /// Every category.
    Full,
    /// Only categories that do not depend on local rock or soil.
    UtilityOnly,
}

impl ReplacementScope {
    /// Full in the overworld or when the dimension is unknown.
    #[must_use]
    pub fn for_dimension(dimension: Option<Dimension>) -> Self {
        match dimension {
            None | Some(Dimension::Overworld) => ReplacementScope::Full,
            Some(_) => ReplacementScope::UtilityOnly,
        }
    }
}

/// Everything the mapping rules know about a placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementContext {
    /// Rock material name, such as `granite`.
    pub rock: String,
    /// Soil material name, such as `loam`.
    pub soil: String,
    /// Source wood family, such as `spruce`.
    pub wood_hint: String,
    /// Which categories may run.
    pub scope: ReplacementScope,
}

impl PlacementContext {
    /// Context with the given materials.
    pub fn new(
        rock: impl Into<String>,
        soil: impl Into<String>,
        wood_hint: impl Into<String>,
        scope: ReplacementScope,
    ) -> Self {
        Self {
            rock: rock.into(),
            soil: soil.into(),
            wood_hint: wood_hint.into(),
            scope,
        }
    }
}

/// Default rock for a dimension.
#[must_use]
pub fn default_rock(dimension: Option<Dimension>) -> &'static str {
    match dimension {
        Some(Dimension::Nether) => DEFAULT_ROCK_NETHER,
        Some(Dimension::End) => DEFAULT_ROCK_END,
        _ => DEFAULT_ROCK_OVERWORLD,
    }
}

/// Strips one trailing `_stairs`, `_slab` and `_wall`, in that order.
fn strip_shape_suffixes(tail: &str) -> &str {
    let tail = tail.strip_suffix("_stairs").unwrap_or(tail);
    let tail = tail.strip_suffix("_slab").unwrap_or(tail);
    tail.strip_suffix("_wall").unwrap_or(tail)
}

fn material_tail(path: &str) -> Option<&str> {
    let tail = path.rsplit_once('/').map_or(path, |(_, tail)| tail);
    let tail = strip_shape_suffixes(tail);
    (!tail.is_empty()).then_some(tail)
}

/// Rock name encoded by a catalog rock block, e.g. `tfc:rock/bricks/diorite_slab`.
#[must_use]
pub fn rock_name(block: &Identifier) -> Option<&str> {
    if !block.is_in_namespace(NS_TFC) || !block.path.starts_with("rock/") {
        return None;
    }
    material_tail(&block.path)
}

/// Soil name encoded by a catalog soil block, e.g. `tfc:grass/loam`.
#[must_use]
pub fn soil_name(block: &Identifier) -> Option<&str> {
    if !block.is_in_namespace(NS_TFC)
        || !SOIL_PREFIXES
            .iter()
            .any(|prefix| block.path.starts_with(prefix))
    {
        return None;
    }
    material_tail(&block.path)
}

/// Walks down from `origin`, the origin included, for at most `depth` positions and
/// stops below `min_build_height`. Returns the first material `extract` recognizes.
pub fn find_below<T, F>(level: &T, origin: BlockPos, depth: u32, extract: F) -> Option<String>
where
    T: TerrainAccess + ?Sized,
    F: Fn(&Identifier) -> Option<&str>,
{
    let min_y = level.min_build_height();
    let mut cursor = origin;
    for _ in 0..depth {
        if cursor.y() < min_y {
            break;
        }
        if let Some(state) = level.get_block_state(cursor)
            && let Some(material) = extract(state.block())
        {
            return Some(material.to_string());
        }
        cursor = cursor.below();
    }
    None
}

/// Rock under `origin`, if any is within reach.
pub fn find_rock_below<T>(level: &T, origin: BlockPos, depth: u32) -> Option<String>
where
    T: TerrainAccess + ?Sized,
{
    find_below(level, origin, depth, rock_name)
}

/// Soil under `origin`, if any is within reach.
pub fn find_soil_below<T>(level: &T, origin: BlockPos, depth: u32) -> Option<String>
where
    T: TerrainAccess + ?Sized,
{
    find_below(level, origin, depth, soil_name)
}
