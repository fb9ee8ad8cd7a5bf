use phf::phf_map;
use strata_utils::Identifier;

use super::{MappingInput, tfc};
use crate::processor::wood::{DEFAULT_WOOD, is_vanilla_wood, normalize_wood};

/// Functional blocks that encode no wood; the output prefix is completed with the hint.
pub(super) static WOOD_UTILITY: phf::Map<&'static str, &'static str> = phf_map! {
    "chest" => "wood/chest/",
    "trapped_chest" => "wood/trapped_chest/",
    "lectern" => "wood/lectern/",
    "crafting_table" => "wood/workbench/",
    "fletching_table" => "wood/scribing_table/",
};

/// Plank shapes: vanilla suffix and output suffix.
pub(super) const PLANK_SHAPES: [(&str, &str); 3] = [("_planks", ""), ("_stairs", "_stairs"), ("_slab", "_slab")];

/// `stripped_<wood><suffix>` families.
pub(super) const STRIPPED_FAMILIES: [(&str, &str); 2] = [
    ("_log", "wood/stripped_log/"),
    ("_wood", "wood/stripped_wood/"),
];

/// `<wood><suffix>` families, checked in order.
pub(super) const FAMILIES: [(&str, &str); 11] = [
    ("_log", "wood/log/"),
    ("_wood", "wood/wood/"),
    ("_leaves", "wood/leaves/"),
    ("_fence_gate", "wood/fence_gate/"),
    ("_fence", "wood/fence/"),
    ("_door", "wood/door/"),
    ("_trapdoor", "wood/trapdoor/"),
    ("_pressure_plate", "wood/pressure_plate/"),
    ("_button", "wood/button/"),
    ("_wall_sign", "wood/wall_sign/"),
    ("_sign", "wood/sign/"),
];

/// `<prefix><normalized wood>`, or the oak member when that block does not exist.
pub(crate) fn tfc_wood(input: &MappingInput<'_>, prefix: &str, wood: &str) -> Identifier {
    input
        .existing_tfc(format!("{prefix}{}", normalize_wood(wood)))
        .unwrap_or_else(|| tfc(format!("{prefix}{DEFAULT_WOOD}")))
}

fn tfc_wood_planks(input: &MappingInput<'_>, wood: &str, suffix: &str) -> Identifier {
    input
        .existing_tfc(format!("wood/planks/{}{suffix}", normalize_wood(wood)))
        .unwrap_or_else(|| tfc(format!("wood/planks/{DEFAULT_WOOD}{suffix}")))
}

/// Chests, lecterns and tables in the hinted wood.
pub fn map_wood_utility(input: &MappingInput<'_>) -> Option<Identifier> {
    let prefix = WOOD_UTILITY.get(input.path)?;
    Some(tfc_wood(input, prefix, &input.context.wood_hint))
}

/// Every wood block. The wood token inside the path decides the output; a shape that
/// matches with an unknown token ends the category without a result.
pub fn map_wood(input: &MappingInput<'_>) -> Option<Identifier> {
    if let Some(utility) = map_wood_utility(input) {
        return Some(utility);
    }

    let path = input.path;
    if path == "stripped_bamboo_block" {
        return Some(tfc("wood/stripped_log/palm"));
    }

    for (vanilla_suffix, suffix) in PLANK_SHAPES {
        if let Some(wood) = path.strip_suffix(vanilla_suffix) {
            return is_vanilla_wood(wood).then(|| tfc_wood_planks(input, wood, suffix));
        }
    }

    if let Some(rest) = path.strip_prefix("stripped_") {
        for (vanilla_suffix, prefix) in STRIPPED_FAMILIES {
            if let Some(wood) = rest.strip_suffix(vanilla_suffix) {
                return is_vanilla_wood(wood).then(|| tfc_wood(input, prefix, wood));
            }
        }
    }

    for (vanilla_suffix, prefix) in FAMILIES {
        if let Some(wood) = path.strip_suffix(vanilla_suffix) {
            return is_vanilla_wood(wood).then(|| tfc_wood(input, prefix, wood));
        }
    }
    None
}
