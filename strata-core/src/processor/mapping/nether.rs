use phf::phf_map;
use strata_utils::Identifier;

use super::{MappingInput, NS_BENEATH};

pub(super) static BENEATH_NETHER: phf::Map<&'static str, &'static str> = phf_map! {
    "crimson_planks" => "wood/planks/crimson",
    "crimson_slab" => "wood/planks/crimson_slab",
    "crimson_stairs" => "wood/planks/crimson_stairs",
    "crimson_door" => "wood/door/crimson",
    "crimson_trapdoor" => "wood/trapdoor/crimson",
    "crimson_button" => "wood/button/crimson",
    "crimson_pressure_plate" => "wood/pressure_plate/crimson",
    "crimson_fence" => "wood/fence/crimson",
    "crimson_fence_gate" => "wood/fence_gate/crimson",
    "crimson_sign" => "wood/sign/crimson",
    "crimson_wall_sign" => "wood/wall_sign/crimson",
    "crimson_stem" => "wood/log/crimson",
    "crimson_hyphae" => "wood/wood/crimson",
    "stripped_crimson_stem" => "wood/stripped_log/crimson",
    "stripped_crimson_hyphae" => "wood/stripped_wood/crimson",
    "crimson_roots" => "crop/crimson_roots",
    "warped_planks" => "wood/planks/warped",
    "warped_slab" => "wood/planks/warped_slab",
    "warped_stairs" => "wood/planks/warped_stairs",
    "warped_door" => "wood/door/warped",
    "warped_trapdoor" => "wood/trapdoor/warped",
    "warped_button" => "wood/button/warped",
    "warped_pressure_plate" => "wood/pressure_plate/warped",
    "warped_fence" => "wood/fence/warped",
    "warped_fence_gate" => "wood/fence_gate/warped",
    "warped_sign" => "wood/sign/warped",
    "warped_wall_sign" => "wood/wall_sign/warped",
    "warped_stem" => "wood/log/warped",
    "warped_hyphae" => "wood/wood/warped",
    "stripped_warped_stem" => "wood/stripped_log/warped",
    "stripped_warped_hyphae" => "wood/stripped_wood/warped",
    "warped_roots" => "crop/warped_roots",
    "nether_wart" => "crop/nether_wart",
    "nether_gold_ore" => "ore/normal_nether_gold",
};

/// Nether blocks with a companion catalog equivalent. Nothing matches when that
/// catalog is not installed.
pub fn map_beneath_nether(input: &MappingInput<'_>) -> Option<Identifier> {
    let path = BENEATH_NETHER.get(input.path)?;
    input.existing(Identifier::new_static(NS_BENEATH, *path))
}
