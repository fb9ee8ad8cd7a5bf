//! Vanilla path to catalog identifier rules.
//!
//! Rules are grouped into [`Category`] matchers and evaluated in a fixed order; the
//! first category that produces an identifier wins. Every matcher is a plain function
//! of the path, the placement context and the catalog, so each can be tested alone.

mod metal;
mod nether;
mod plants;
mod soil;
mod stone;
mod wood;

use std::borrow::Cow;

use strata_registry::BlockCatalog;
use strata_utils::Identifier;

use crate::processor::context::{NS_TFC, PlacementContext, ReplacementScope};

pub use metal::{map_crops, map_metal};
pub use nether::map_beneath_nether;
pub use plants::{MINECRAFT_WATER, map_cauldron, map_lights, map_plants_and_decor};
pub use soil::map_soil;
pub use stone::{map_sandstone, map_stone};
pub use wood::{map_wood, map_wood_utility};

/// Namespace of the companion nether catalog.
pub const NS_BENEATH: &str = "beneath";

/// The single output of the fire source category.
pub const TFC_FIREPIT: Identifier = Identifier::new_static(NS_TFC, "firepit");

/// Input to one matcher.
#[derive(Clone, Copy)]
pub struct MappingInput<'a> {
    /// Vanilla block path with any `infested_` prefix removed.
    pub path: &'a str,
    /// Resolved context of the placement.
    pub context: &'a PlacementContext,
    /// Catalog used for existence checks.
    pub catalog: &'a dyn BlockCatalog,
}

impl MappingInput<'_> {
    /// Returns `id` only if the catalog has it.
    #[must_use]
    pub fn existing(&self, id: Identifier) -> Option<Identifier> {
        self.catalog.contains(&id).then_some(id)
    }

    /// `tfc:<path>` if the catalog has it.
    #[must_use]
    pub fn existing_tfc(&self, path: String) -> Option<Identifier> {
        self.existing(tfc(path))
    }
}

/// A matcher for one rule category.
pub type Matcher = fn(&MappingInput<'_>) -> Option<Identifier>;

/// Rule categories in the order they are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Crimson and warped woods, nether wart and nether gold into the companion catalog.
    BeneathNether,
    /// Furnaces and campfires into a firepit.
    FireSource,
    /// Chests, lecterns and tables, keyed by the wood hint.
    WoodUtility,
    /// Yellow and red sandstone shapes.
    Sandstone,
    /// Rock blocks keyed by local rock.
    Stone,
    /// Soil blocks keyed by local soil.
    Soil,
    /// Every wood family block.
    Wood,
    /// Iron, gold and copper blocks.
    Metal,
    /// Crop blocks.
    Crops,
    /// Plants, pots, candles, beds and glass.
    PlantsAndDecor,
    /// The empty cauldron.
    Cauldron,
    /// Torches.
    Lights,
}

/// Categories that run before the scope split.
const ALWAYS: [Category; 2] = [Category::BeneathNether, Category::FireSource];

const UTILITY_ONLY: [Category; 6] = [
    Category::WoodUtility,
    Category::Metal,
    Category::Crops,
    Category::PlantsAndDecor,
    Category::Cauldron,
    Category::Lights,
];

const FULL: [Category; 9] = [
    Category::Sandstone,
    Category::Stone,
    Category::Soil,
    Category::Wood,
    Category::Metal,
    Category::Crops,
    Category::PlantsAndDecor,
    Category::Cauldron,
    Category::Lights,
];

impl Category {
    /// The matcher function for this category.
    #[must_use]
    pub fn matcher(self) -> Matcher {
        match self {
            Category::BeneathNether => map_beneath_nether,
            Category::FireSource => map_fire_source,
            Category::WoodUtility => map_wood_utility,
            Category::Sandstone => map_sandstone,
            Category::Stone => map_stone,
            Category::Soil => map_soil,
            Category::Wood => map_wood,
            Category::Metal => map_metal,
            Category::Crops => map_crops,
            Category::PlantsAndDecor => map_plants_and_decor,
            Category::Cauldron => map_cauldron,
            Category::Lights => map_lights,
        }
    }

    /// Categories evaluated for `scope`, in precedence order.
    pub fn chain(scope: ReplacementScope) -> impl Iterator<Item = Category> {
        let scoped: &'static [Category] = match scope {
            ReplacementScope::Full => &FULL,
            ReplacementScope::UtilityOnly => &UTILITY_ONLY,
        };
        ALWAYS.into_iter().chain(scoped.iter().copied())
    }

    /// True if the category only runs in [`ReplacementScope::Full`].
    #[must_use]
    pub fn is_full_only(self) -> bool {
        !ALWAYS.contains(&self) && !UTILITY_ONLY.contains(&self)
    }
}

/// A successful mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Output block.
    pub id: Identifier,
    /// Category that produced it.
    pub category: Category,
}

impl Mapping {
    /// The output replaces a cooking block: its block entity data is dropped and its
    /// axis is derived from the input facing.
    #[must_use]
    pub fn is_fire_source(&self) -> bool {
        self.category == Category::FireSource
    }
}

/// Runs the category chain for the input's scope.
#[must_use]
pub fn map_vanilla_to_tfc(input: &MappingInput<'_>) -> Option<Mapping> {
    Category::chain(input.context.scope).find_map(|category| {
        category.matcher()(input).map(|id| Mapping { id, category })
    })
}

fn map_fire_source(input: &MappingInput<'_>) -> Option<Identifier> {
    matches!(input.path, "furnace" | "campfire").then_some(TFC_FIREPIT)
}

/// `tfc:<path>`.
pub(crate) fn tfc(path: impl Into<Cow<'static, str>>) -> Identifier {
    Identifier::new(NS_TFC, path)
}

/// Splits one trailing `_slab`, `_stairs` or `_wall` off `path`.
pub(crate) fn split_shape_suffix(path: &str) -> (&str, &'static str) {
    for suffix in ["_slab", "_stairs", "_wall"] {
        if let Some(base) = path.strip_suffix(suffix) {
            return (base, suffix);
        }
    }
    (path, "")
}
