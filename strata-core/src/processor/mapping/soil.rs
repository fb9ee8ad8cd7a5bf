use phf::phf_map;
use strata_utils::Identifier;

use super::{MappingInput, tfc};

/// Vanilla block to `(prefix, suffix)`; the output is `prefix + soil + suffix`.
pub(super) static SOIL_KEYED: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "dirt" => ("dirt/", ""),
    "coarse_dirt" => ("coarse_dirt/", ""),
    "grass_block" => ("grass/", ""),
    "dirt_path" => ("grass_path/", ""),
    "rooted_dirt" => ("rooted_dirt/", ""),
    "farmland" => ("farmland/", ""),
    "mud" => ("mud/", ""),
    "packed_mud" => ("mud/", ""),
    "mud_bricks" => ("mud_bricks/", ""),
    "mud_brick_slab" => ("mud_bricks/", "_slab"),
    "mud_brick_stairs" => ("mud_bricks/", "_stairs"),
    "mud_brick_wall" => ("mud_bricks/", "_wall"),
    "muddy_mangrove_roots" => ("muddy_roots/", ""),
};

/// Soil blocks keyed by the local soil, plus podzol and mangrove roots which have a
/// single equivalent.
pub fn map_soil(input: &MappingInput<'_>) -> Option<Identifier> {
    match input.path {
        "podzol" => return Some(tfc("dirt/podzol")),
        "mangrove_roots" => return Some(tfc("tree_roots")),
        _ => {}
    }
    let (prefix, suffix) = SOIL_KEYED.get(input.path)?;
    Some(tfc(format!("{prefix}{}{suffix}", input.context.soil)))
}
