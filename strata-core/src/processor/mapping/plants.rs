use phf::phf_map;
use strata_utils::Identifier;

use super::{MappingInput, tfc};
use crate::processor::wood::{is_vanilla_wood, normalize_wood};

/// Vanilla water, used where kelp stood.
pub const MINECRAFT_WATER: Identifier = Identifier::vanilla_static("water");

/// Potted plants whose catalog name differs from the vanilla one.
pub(super) static POTTED_RENAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "azalea_bush" => "plant/potted/azalea",
    "azure_bluet" => "plant/potted/houstonia",
    "red_tulip" => "plant/potted/tulip_red",
};

pub(super) static LIGHTS: phf::Map<&'static str, &'static str> = phf_map! {
    "torch" => "torch",
    "wall_torch" => "wall_torch",
};

/// Plants, flower pots, candles, beds, hay, coal, terracotta and glass.
pub fn map_plants_and_decor(input: &MappingInput<'_>) -> Option<Identifier> {
    let path = input.path;
    match path {
        "kelp" | "kelp_plant" => return Some(MINECRAFT_WATER),
        "seagrass" | "tall_seagrass" => return Some(tfc("plant/eel_grass")),
        "sea_pickle" => return Some(tfc("sea_pickle")),
        "candle" => return Some(tfc("candle")),
        "candle_cake" => return Some(tfc("candle_cake")),
        "hay_block" => return Some(tfc("thatch")),
        "glass" => return Some(tfc("poured_glass")),
        _ => {}
    }

    let existing = match path {
        "dead_bush" | "azalea" => input.existing_tfc(format!("plant/{path}")),
        "coal_block" => input.existing_tfc("bituminous_coal".to_string()),
        "terracotta" => input.existing_tfc("hardened_clay".to_string()),
        _ => None,
    };
    if existing.is_some() {
        return existing;
    }

    if let Some(plant) = path.strip_prefix("potted_")
        && let Some(potted) = map_potted(input, plant)
    {
        return Some(potted);
    }

    if let Some(color) = path.strip_suffix("_candle")
        && let Some(candle) = input.existing_tfc(format!("candle/{color}"))
    {
        return Some(candle);
    }
    if let Some(color) = path.strip_suffix("_candle_cake")
        && let Some(cake) = input.existing_tfc(format!("candle_cake/{color}"))
    {
        return Some(cake);
    }

    if path.ends_with("_bed") {
        return Some(tfc("thatch_bed"));
    }

    path.strip_suffix("_stained_glass")
        .and_then(|color| input.existing_tfc(format!("{color}_poured_glass")))
}

fn map_potted(input: &MappingInput<'_>, plant: &str) -> Option<Identifier> {
    if let Some(wood) = plant.strip_suffix("_sapling")
        && is_vanilla_wood(wood)
        && let Some(sapling) =
            input.existing_tfc(format!("wood/potted_sapling/{}", normalize_wood(wood)))
    {
        return Some(sapling);
    }
    if let Some(&renamed) = POTTED_RENAMES.get(plant)
        && let Some(potted) = input.existing(tfc(renamed))
    {
        return Some(potted);
    }
    input.existing_tfc(format!("plant/potted/{plant}"))
}

/// The empty cauldron. Filled cauldrons keep their contents and are left alone.
pub fn map_cauldron(input: &MappingInput<'_>) -> Option<Identifier> {
    (input.path == "cauldron").then(|| tfc("ceramic/large_vessel"))
}

/// Torches.
pub fn map_lights(input: &MappingInput<'_>) -> Option<Identifier> {
    LIGHTS.get(input.path).map(|&path| tfc(path))
}
