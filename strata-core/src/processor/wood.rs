//! Wood families and the per-placement wood hint.

use strata_utils::BlockPos;

use crate::template::{PaletteSelector, StructureBlockInfo, StructureTemplate, TemplateError};

/// Wood family used when nothing better is known.
pub const DEFAULT_WOOD: &str = "oak";

/// Source wood families, in detection order.
pub const VANILLA_WOOD_TYPES: [&str; 9] = [
    "oak", "spruce", "birch", "jungle", "acacia", "dark_oak", "mangrove", "cherry", "bamboo",
];

/// True for a recognized source wood family.
#[must_use]
pub fn is_vanilla_wood(wood: &str) -> bool {
    VANILLA_WOOD_TYPES.contains(&wood)
}

/// Maps a source wood family to its catalog name.
#[must_use]
pub fn normalize_wood(wood: &str) -> &str {
    match wood {
        "jungle" => "kapok",
        "dark_oak" => "blackwood",
        "cherry" => "rosewood",
        "bamboo" => "palm",
        other => other,
    }
}

/// The wood family a block path starts with, ignoring a `stripped_` prefix.
#[must_use]
pub fn detect_vanilla_wood_type(path: &str) -> Option<&'static str> {
    let path = path.strip_prefix("stripped_").unwrap_or(path);
    VANILLA_WOOD_TYPES.into_iter().find(|wood| {
        path.strip_prefix(wood)
            .is_some_and(|rest| rest.starts_with('_'))
    })
}

/// The most common wood family among source blocks. Ties go to the family seen first.
#[must_use]
pub fn dominant_vanilla_wood_type(blocks: &[StructureBlockInfo]) -> Option<&'static str> {
    let mut counts: Vec<(&'static str, u32)> = Vec::new();
    for info in blocks {
        let key = info.state.block();
        if !key.is_vanilla() {
            continue;
        }
        let Some(wood) = detect_vanilla_wood_type(&key.path) else {
            continue;
        };
        match counts.iter_mut().find(|(seen, _)| *seen == wood) {
            Some((_, count)) => *count += 1,
            None => counts.push((wood, 1)),
        }
    }

    let mut best: Option<(&'static str, u32)> = None;
    for (wood, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((wood, count));
        }
    }
    best.map(|(wood, _)| wood)
}

/// Dominant wood of the palette placed at `origin`.
pub fn palette_wood_type<P>(
    selector: &P,
    template: Option<&StructureTemplate>,
    origin: BlockPos,
) -> Result<Option<&'static str>, TemplateError>
where
    P: PaletteSelector + ?Sized,
{
    let template = template.ok_or(TemplateError::Missing)?;
    let palette = selector.select(template, origin)?;
    Ok(dominant_vanilla_wood_type(palette.blocks()))
}

/// Wood hint from the template palette, falling back to [`DEFAULT_WOOD`] on any failure.
pub fn palette_wood_hint<P>(
    selector: &P,
    template: Option<&StructureTemplate>,
    origin: BlockPos,
) -> &'static str
where
    P: PaletteSelector + ?Sized,
{
    match palette_wood_type(selector, template, origin) {
        Ok(Some(wood)) => wood,
        Ok(None) => DEFAULT_WOOD,
        Err(err) => {
            log::debug!("no palette wood hint at {origin}: {err}");
            DEFAULT_WOOD
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use strata_registry::{BlockDefinition, BlockState};
    use strata_utils::Identifier;

    use crate::template::{Palette, SeededPaletteSelector};

    fn info(namespace: &'static str, path: &'static str) -> StructureBlockInfo {
        let state = BlockState::default_of(Arc::new(BlockDefinition::new(
            Identifier::new_static(namespace, path),
        )));
        StructureBlockInfo::new(BlockPos::new(0, 0, 0), state)
    }

    #[test]
    fn detects_wood_prefix() {
        assert_eq!(detect_vanilla_wood_type("oak_planks"), Some("oak"));
        assert_eq!(detect_vanilla_wood_type("dark_oak_door"), Some("dark_oak"));
        assert_eq!(detect_vanilla_wood_type("stripped_spruce_log"), Some("spruce"));
        assert_eq!(detect_vanilla_wood_type("bamboo_mosaic"), Some("bamboo"));
        assert_eq!(detect_vanilla_wood_type("oak"), None);
        assert_eq!(detect_vanilla_wood_type("oaken_barrel"), None);
        assert_eq!(detect_vanilla_wood_type("chest"), None);
    }

    #[test]
    fn normalizes_to_catalog_names() {
        assert_eq!(normalize_wood("jungle"), "kapok");
        assert_eq!(normalize_wood("dark_oak"), "blackwood");
        assert_eq!(normalize_wood("cherry"), "rosewood");
        assert_eq!(normalize_wood("bamboo"), "palm");
        assert_eq!(normalize_wood("spruce"), "spruce");
    }

    #[test]
    fn dominant_counts_only_vanilla_blocks() {
        let blocks = [
            info("minecraft", "spruce_planks"),
            info("minecraft", "birch_log"),
            info("minecraft", "spruce_stairs"),
            info("tfc", "birch_planks"),
            info("tfc", "birch_log"),
            info("minecraft", "stone"),
        ];
        assert_eq!(dominant_vanilla_wood_type(&blocks), Some("spruce"));
        assert_eq!(dominant_vanilla_wood_type(&blocks[5..]), None);
    }

    #[test]
    fn ties_go_to_first_seen() {
        let blocks = [
            info("minecraft", "birch_door"),
            info("minecraft", "acacia_fence"),
            info("minecraft", "acacia_slab"),
            info("minecraft", "birch_slab"),
        ];
        assert_eq!(dominant_vanilla_wood_type(&blocks), Some("birch"));
    }

    #[test]
    fn missing_or_empty_template_falls_back() {
        let selector = SeededPaletteSelector::positional();
        let origin = BlockPos::new(0, 64, 0);
        assert_eq!(
            palette_wood_type(&selector, None, origin),
            Err(TemplateError::Missing)
        );
        assert_eq!(palette_wood_hint(&selector, None, origin), DEFAULT_WOOD);

        let empty = StructureTemplate::new(Identifier::new_static("irons_spellbooks", "empty"), Vec::new());
        assert_eq!(palette_wood_hint(&selector, Some(&empty), origin), DEFAULT_WOOD);

        let plain = StructureTemplate::new(
            Identifier::new_static("irons_spellbooks", "plain"),
            vec![Palette::new(vec![info("minecraft", "stone")])],
        );
        assert_eq!(palette_wood_hint(&selector, Some(&plain), origin), DEFAULT_WOOD);
    }

    #[test]
    fn palette_hint_uses_selected_palette() {
        let template = StructureTemplate::new(
            Identifier::new_static("irons_spellbooks", "hut"),
            vec![Palette::new(vec![
                info("minecraft", "jungle_planks"),
                info("minecraft", "chest"),
            ])],
        );
        assert_eq!(
            palette_wood_hint(&SeededPaletteSelector::positional(), Some(&template), BlockPos::new(5, 70, 5)),
            "jungle"
        );
    }
}
