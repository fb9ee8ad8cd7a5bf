//! Carrying block state across a replacement.

use strata_registry::{BlockState, BlockStateProperties, Direction};

/// Copies every property of `from` that `to` declares under the same name and whose
/// value is allowed there. Anything else is skipped.
#[must_use]
pub fn copy_properties_by_name(from: &BlockState, mut to: BlockState) -> BlockState {
    for (property, value) in from.properties() {
        let Some(target) = to.property_named(&property.name) else {
            continue;
        };
        if !target.domain.contains(value) {
            continue;
        }
        if let Ok(next) = to.set_value_by_name(&property.name, value.clone()) {
            to = next;
        }
    }
    to
}

/// Turns the horizontal facing of a furnace or campfire into the firepit's axis.
#[must_use]
pub fn apply_firepit_axis_from_facing(from: &BlockState, firepit: BlockState) -> BlockState {
    let Some(facing) = from
        .try_get_value(&BlockStateProperties::HORIZONTAL_FACING)
        .and_then(|value| value.as_enum())
        .and_then(Direction::from_name)
    else {
        return firepit;
    };
    let axis = facing.get_axis();
    if !axis.is_horizontal() {
        return firepit;
    }

    let property = if firepit.has_property(&BlockStateProperties::HORIZONTAL_AXIS) {
        BlockStateProperties::HORIZONTAL_AXIS
    } else if firepit.has_property(&BlockStateProperties::AXIS) {
        BlockStateProperties::AXIS
    } else {
        return firepit;
    };
    match firepit.set_value(&property, axis) {
        Ok(oriented) => oriented,
        Err(_) => firepit,
    }
}
