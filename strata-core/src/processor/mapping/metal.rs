use phf::phf_map;
use strata_utils::Identifier;

use super::MappingInput;
use crate::processor::context::NS_TFC;

pub(super) static METAL: phf::Map<&'static str, &'static str> = phf_map! {
    "iron_bars" => "metal/bars/wrought_iron",
    "chain" => "metal/chain/wrought_iron",
    "iron_block" => "metal/block/wrought_iron",
    "iron_trapdoor" => "metal/trapdoor/wrought_iron",
    "bell" => "bronze_bell",
    "gold_block" => "metal/block/gold",
    "raw_gold_block" => "metal/block/gold",

    "copper_block" => "metal/block/copper",
    "cut_copper" => "metal/block/copper",
    "cut_copper_slab" => "metal/block/copper_slab",
    "cut_copper_stairs" => "metal/block/copper_stairs",

    "exposed_copper" => "metal/exposed_block/copper",
    "exposed_cut_copper" => "metal/exposed_block/copper",
    "exposed_cut_copper_slab" => "metal/exposed_block/copper_slab",
    "exposed_cut_copper_stairs" => "metal/exposed_block/copper_stairs",

    "weathered_copper" => "metal/weathered_block/copper",
    "weathered_cut_copper" => "metal/weathered_block/copper",
    "weathered_cut_copper_slab" => "metal/weathered_block/copper_slab",
    "weathered_cut_copper_stairs" => "metal/weathered_block/copper_stairs",

    "oxidized_copper" => "metal/oxidized_block/copper",
    "oxidized_cut_copper" => "metal/oxidized_block/copper",
    "waxed_oxidized_cut_copper" => "metal/oxidized_block/copper",
    "oxidized_cut_copper_slab" => "metal/oxidized_block/copper_slab",
    "waxed_oxidized_cut_copper_slab" => "metal/oxidized_block/copper_slab",
    "oxidized_cut_copper_stairs" => "metal/oxidized_block/copper_stairs",
    "waxed_oxidized_cut_copper_stairs" => "metal/oxidized_block/copper_stairs",
    "oxidized_copper_trapdoor" => "metal/trapdoor/copper",
};

pub(super) static CROPS: phf::Map<&'static str, &'static str> = phf_map! {
    "potatoes" => "crop/potato",
    "pumpkin_stem" => "crop/pumpkin",
    "attached_pumpkin_stem" => "crop/pumpkin",
    "melon_stem" => "crop/melon",
    "pumpkin" => "pumpkin",
    "carved_pumpkin" => "pumpkin",
    "melon" => "melon",
};

/// Iron, gold and copper blocks, including copper weathering stages.
pub fn map_metal(input: &MappingInput<'_>) -> Option<Identifier> {
    METAL
        .get(input.path)
        .map(|&path| Identifier::new_static(NS_TFC, path))
}

/// Crops and their fruit blocks.
pub fn map_crops(input: &MappingInput<'_>) -> Option<Identifier> {
    CROPS
        .get(input.path)
        .map(|&path| Identifier::new_static(NS_TFC, path))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::ListCatalog;
    use super::*;
    use crate::processor::context::{PlacementContext, ReplacementScope};

    fn run(matcher: super::super::Matcher, path: &str) -> Option<String> {
        let context = PlacementContext::new("granite", "loam", "oak", ReplacementScope::UtilityOnly);
        let catalog = ListCatalog::of(&[]);
        matcher(&MappingInput {
            path,
            context: &context,
            catalog: &catalog,
        })
        .map(|id| id.to_string())
    }

    #[test]
    fn copper_stages_keep_their_shape() {
        assert_eq!(
            run(map_metal, "exposed_cut_copper_slab"),
            Some("tfc:metal/exposed_block/copper_slab".into())
        );
        assert_eq!(
            run(map_metal, "waxed_oxidized_cut_copper_stairs"),
            Some("tfc:metal/oxidized_block/copper_stairs".into())
        );
        assert_eq!(
            run(map_metal, "oxidized_copper_trapdoor"),
            Some("tfc:metal/trapdoor/copper".into())
        );
        assert_eq!(run(map_metal, "waxed_copper_block"), None);
    }

    #[test]
    fn iron_and_gold() {
        assert_eq!(run(map_metal, "chain"), Some("tfc:metal/chain/wrought_iron".into()));
        assert_eq!(run(map_metal, "bell"), Some("tfc:bronze_bell".into()));
        assert_eq!(run(map_metal, "raw_gold_block"), Some("tfc:metal/block/gold".into()));
        assert_eq!(run(map_metal, "anvil"), None);
    }

    #[test]
    fn crops() {
        assert_eq!(run(map_crops, "potatoes"), Some("tfc:crop/potato".into()));
        assert_eq!(run(map_crops, "attached_pumpkin_stem"), Some("tfc:crop/pumpkin".into()));
        assert_eq!(run(map_crops, "carved_pumpkin"), Some("tfc:pumpkin".into()));
        assert_eq!(run(map_crops, "wheat"), None);
    }
}
