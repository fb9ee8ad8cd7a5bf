use phf::{phf_map, phf_set};
use strata_utils::Identifier;

use super::{MappingInput, split_shape_suffix, tfc};
use crate::processor::context::{DEFAULT_ROCK_OVERWORLD, NS_TFC};

/// Sandstone base block to `(kind, color)`.
pub(super) static SANDSTONE: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "sandstone" => ("raw_sandstone", "yellow"),
    "smooth_sandstone" => ("smooth_sandstone", "yellow"),
    "cut_sandstone" => ("cut_sandstone", "yellow"),
    "red_sandstone" => ("raw_sandstone", "red"),
    "smooth_red_sandstone" => ("smooth_sandstone", "red"),
    "cut_red_sandstone" => ("cut_sandstone", "red"),
};

pub(super) static AMETHYST: phf::Set<&'static str> = phf_set! {
    "amethyst_block",
    "budding_amethyst",
    "amethyst_cluster",
    "large_amethyst_bud",
    "medium_amethyst_bud",
    "small_amethyst_bud",
};

/// Rock-independent outputs.
pub(super) static FIXED: phf::Map<&'static str, &'static str> = phf_map! {
    "calcite" => "calcite",
    "tuff" => "rock/raw/tuff",
};

/// Vanilla block to `(prefix, suffix)`; the output is `prefix + rock + suffix`.
pub(super) static ROCK_KEYED: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "stone_bricks" => ("rock/bricks/", ""),
    "mossy_stone_bricks" => ("rock/mossy_bricks/", ""),
    "cracked_stone_bricks" => ("rock/cracked_bricks/", ""),
    "chiseled_stone_bricks" => ("rock/chiseled/", ""),
    "stone_brick_stairs" => ("rock/bricks/", "_stairs"),
    "stone_brick_slab" => ("rock/bricks/", "_slab"),
    "stone_brick_wall" => ("rock/bricks/", "_wall"),
    "mossy_stone_brick_stairs" => ("rock/mossy_bricks/", "_stairs"),
    "mossy_stone_brick_slab" => ("rock/mossy_bricks/", "_slab"),
    "mossy_stone_brick_wall" => ("rock/mossy_bricks/", "_wall"),

    "cobblestone" => ("rock/cobble/", ""),
    "mossy_cobblestone" => ("rock/mossy_cobble/", ""),
    "cobblestone_stairs" => ("rock/cobble/", "_stairs"),
    "cobblestone_slab" => ("rock/cobble/", "_slab"),
    "cobblestone_wall" => ("rock/cobble/", "_wall"),
    "mossy_cobblestone_stairs" => ("rock/mossy_cobble/", "_stairs"),
    "mossy_cobblestone_slab" => ("rock/mossy_cobble/", "_slab"),
    "mossy_cobblestone_wall" => ("rock/mossy_cobble/", "_wall"),

    "stone" => ("rock/raw/", ""),
    "stone_stairs" => ("rock/raw/", "_stairs"),
    "stone_slab" => ("rock/raw/", "_slab"),
    "smooth_stone" => ("rock/smooth/", ""),
    "smooth_stone_slab" => ("rock/smooth/", "_slab"),
    "gravel" => ("rock/gravel/", ""),

    "emerald_ore" => ("ore/emerald/", ""),
    "gold_ore" => ("ore/normal_native_gold/", ""),

    "andesite" => ("rock/raw/", ""),
    "diorite" => ("rock/raw/", ""),
    "granite" => ("rock/raw/", ""),
    "andesite_stairs" => ("rock/raw/", "_stairs"),
    "diorite_stairs" => ("rock/raw/", "_stairs"),
    "granite_stairs" => ("rock/raw/", "_stairs"),
    "andesite_slab" => ("rock/raw/", "_slab"),
    "diorite_slab" => ("rock/raw/", "_slab"),
    "granite_slab" => ("rock/raw/", "_slab"),
    "andesite_wall" => ("rock/raw/", "_wall"),
    "diorite_wall" => ("rock/raw/", "_wall"),
    "granite_wall" => ("rock/raw/", "_wall"),
    "polished_andesite" => ("rock/smooth/", ""),
    "polished_diorite" => ("rock/smooth/", ""),
    "polished_granite" => ("rock/smooth/", ""),
    "polished_andesite_stairs" => ("rock/smooth/", "_stairs"),
    "polished_diorite_stairs" => ("rock/smooth/", "_stairs"),
    "polished_granite_stairs" => ("rock/smooth/", "_stairs"),
    "polished_andesite_slab" => ("rock/smooth/", "_slab"),
    "polished_diorite_slab" => ("rock/smooth/", "_slab"),
    "polished_granite_slab" => ("rock/smooth/", "_slab"),

    "stone_button" => ("rock/button/", ""),
    "stone_pressure_plate" => ("rock/pressure_plate/", ""),
};

/// Yellow and red sandstone in every shape, when the colored block exists.
pub fn map_sandstone(input: &MappingInput<'_>) -> Option<Identifier> {
    let (base, suffix) = split_shape_suffix(input.path);
    let (kind, color) = SANDSTONE.get(base)?;
    input.existing_tfc(format!("{kind}/{color}{suffix}"))
}

/// Stone, cobble, bricks, ores and the andesite/diorite/granite group, all keyed by the
/// local rock.
pub fn map_stone(input: &MappingInput<'_>) -> Option<Identifier> {
    let rock = input.context.rock.as_str();
    if AMETHYST.contains(input.path) {
        return Some(amethyst_ore(input, rock));
    }
    if let Some(&path) = FIXED.get(input.path) {
        return Some(Identifier::new_static(NS_TFC, path));
    }
    let (prefix, suffix) = ROCK_KEYED.get(input.path)?;
    Some(tfc(format!("{prefix}{rock}{suffix}")))
}

fn amethyst_ore(input: &MappingInput<'_>, rock: &str) -> Identifier {
    input
        .existing_tfc(format!("ore/amethyst/{rock}"))
        .unwrap_or_else(|| tfc(format!("ore/amethyst/{DEFAULT_ROCK_OVERWORLD}")))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::ListCatalog;
    use super::*;
    use crate::processor::context::{PlacementContext, ReplacementScope};

    fn run(
        matcher: fn(&MappingInput<'_>) -> Option<Identifier>,
        path: &str,
        rock: &str,
        catalog: &ListCatalog,
    ) -> Option<String> {
        let context = PlacementContext::new(rock, "loam", "oak", ReplacementScope::Full);
        matcher(&MappingInput {
            path,
            context: &context,
            catalog,
        })
        .map(|id| id.to_string())
    }

    #[test]
    fn sandstone_keeps_shape_and_color() {
        let catalog = ListCatalog::of(&[
            "tfc:raw_sandstone/yellow",
            "tfc:cut_sandstone/red_slab",
            "tfc:smooth_sandstone/red_stairs",
        ]);
        assert_eq!(
            run(map_sandstone, "sandstone", "granite", &catalog),
            Some("tfc:raw_sandstone/yellow".into())
        );
        assert_eq!(
            run(map_sandstone, "cut_red_sandstone_slab", "granite", &catalog),
            Some("tfc:cut_sandstone/red_slab".into())
        );
        assert_eq!(
            run(map_sandstone, "smooth_red_sandstone_stairs", "granite", &catalog),
            Some("tfc:smooth_sandstone/red_stairs".into())
        );
        assert_eq!(run(map_sandstone, "sandstone_wall", "granite", &catalog), None);
        assert_eq!(run(map_sandstone, "chiseled_sandstone", "granite", &catalog), None);
    }

    #[test]
    fn stone_follows_local_rock() {
        let catalog = ListCatalog::of(&[]);
        assert_eq!(
            run(map_stone, "stone", "granite", &catalog),
            Some("tfc:rock/raw/granite".into())
        );
        assert_eq!(
            run(map_stone, "diorite_wall", "chalk", &catalog),
            Some("tfc:rock/raw/chalk_wall".into())
        );
        assert_eq!(
            run(map_stone, "polished_granite_slab", "shale", &catalog),
            Some("tfc:rock/smooth/shale_slab".into())
        );
        assert_eq!(
            run(map_stone, "gold_ore", "basalt", &catalog),
            Some("tfc:ore/normal_native_gold/basalt".into())
        );
        assert_eq!(
            run(map_stone, "stone_pressure_plate", "slate", &catalog),
            Some("tfc:rock/pressure_plate/slate".into())
        );
        assert_eq!(
            run(map_stone, "tuff", "slate", &catalog),
            Some("tfc:rock/raw/tuff".into())
        );
        assert_eq!(run(map_stone, "calcite", "slate", &catalog), Some("tfc:calcite".into()));
        assert_eq!(run(map_stone, "andesite_brick", "slate", &catalog), None);
    }

    #[test]
    fn shape_variants_follow_their_base() {
        let catalog = ListCatalog::of(&[]);
        for (base, expected) in [
            ("cobblestone", "rock/cobble/dacite"),
            ("mossy_cobblestone", "rock/mossy_cobble/dacite"),
        ] {
            let full = run(map_stone, base, "dacite", &catalog).expect("base maps");
            assert_eq!(full, format!("tfc:{expected}"));
            for suffix in ["_stairs", "_slab", "_wall"] {
                assert_eq!(
                    run(map_stone, &format!("{base}{suffix}"), "dacite", &catalog),
                    Some(format!("tfc:{expected}{suffix}"))
                );
            }
        }
    }

    #[test]
    fn amethyst_falls_back_to_granite() {
        let catalog = ListCatalog::of(&["tfc:ore/amethyst/marble"]);
        assert_eq!(
            run(map_stone, "amethyst_cluster", "marble", &catalog),
            Some("tfc:ore/amethyst/marble".into())
        );
        assert_eq!(
            run(map_stone, "budding_amethyst", "basalt", &catalog),
            Some("tfc:ore/amethyst/granite".into())
        );
    }
}
