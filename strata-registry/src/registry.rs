use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Deserialize;
use strata_utils::Identifier;
use thiserror::Error;

use crate::block::{BlockDefinition, BlockState};
use crate::properties::{Property, PropertyValue};
use crate::{BlockCatalog, RegistryExt};

/// Failure to build a [`BlockRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry was frozen before this registration.
    #[error("cannot register {0} after the registry is frozen")]
    Frozen(Identifier),
    /// The identifier was already registered.
    #[error("block {0} is registered twice")]
    Duplicate(Identifier),
    /// A property has no possible values.
    #[error("property {property} of {block} has an empty domain")]
    EmptyDomain {
        /// Block declaring the property.
        block: Identifier,
        /// Offending property name.
        property: String,
    },
    /// A declared default does not belong to its property's domain.
    #[error("default {value} is not valid for property {property} of {block}")]
    InvalidDefault {
        /// Block declaring the property.
        block: Identifier,
        /// Property name.
        property: String,
        /// Rejected default.
        value: String,
    },
    /// The catalog document could not be parsed.
    #[error("malformed block catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Block definitions keyed by identifier.
pub struct BlockRegistry {
    by_key: FxHashMap<Identifier, Arc<BlockDefinition>>,
    allows_registering: bool,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockRegistry {
    /// An empty, unfrozen registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_key: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Adds a block definition.
    pub fn register(&mut self, definition: BlockDefinition) -> Result<(), RegistryError> {
        if !self.allows_registering {
            return Err(RegistryError::Frozen(definition.key));
        }
        if self.by_key.contains_key(&definition.key) {
            return Err(RegistryError::Duplicate(definition.key));
        }
        for property in &definition.properties {
            if property.domain.first().is_none() {
                return Err(RegistryError::EmptyDomain {
                    block: definition.key.clone(),
                    property: property.name.to_string(),
                });
            }
        }
        self.by_key
            .insert(definition.key.clone(), Arc::new(definition));
        Ok(())
    }

    /// Number of registered blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// True if no blocks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Builds the state of `key` with the given serialized property values applied over
    /// the defaults. Returns `None` if the block or any property value is unknown.
    #[must_use]
    pub fn state_with(&self, key: &Identifier, values: &[(&str, &str)]) -> Option<BlockState> {
        let mut state = self.default_state(key)?;
        for (name, raw) in values {
            state = state.with_serialized(name, raw).ok()?;
        }
        Some(state)
    }

    /// Parses a JSON catalog and returns a frozen registry.
    ///
    /// The document is an array of blocks:
    ///
    /// ```json
    /// [
    ///   { "id": "tfc:firepit", "properties": [
    ///       { "type": "enum", "name": "axis", "values": ["x", "z"] },
    ///       { "type": "bool", "name": "lit" } ] },
    ///   { "id": "tfc:thatch" }
    /// ]
    /// ```
    ///
    /// Identifiers without a namespace are read as `minecraft:`.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let entries: Vec<BlockJson> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry.into_definition()?)?;
        }
        registry.freeze();
        log::debug!("loaded block catalog with {} blocks", registry.len());
        Ok(registry)
    }
}

impl RegistryExt for BlockRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}

impl BlockCatalog for BlockRegistry {
    fn contains(&self, key: &Identifier) -> bool {
        self.by_key.contains_key(key)
    }

    fn default_state(&self, key: &Identifier) -> Option<BlockState> {
        self.by_key
            .get(key)
            .map(|definition| BlockState::default_of(Arc::clone(definition)))
    }
}

#[derive(Deserialize)]
struct BlockJson {
    id: Identifier,
    #[serde(default)]
    properties: Vec<PropertyJson>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum PropertyJson {
    Bool {
        name: String,
        #[serde(default)]
        default: Option<bool>,
    },
    Int {
        name: String,
        min: i32,
        max: i32,
        #[serde(default)]
        default: Option<i32>,
    },
    Enum {
        name: String,
        values: Vec<String>,
        #[serde(default)]
        default: Option<String>,
    },
}

impl BlockJson {
    fn into_definition(self) -> Result<BlockDefinition, RegistryError> {
        let mut definition = BlockDefinition::new(self.id);
        for property in self.properties {
            let (property, default) = match property {
                PropertyJson::Bool { name, default } => {
                    (Property::boolean(name), default.map(PropertyValue::Bool))
                }
                PropertyJson::Int {
                    name,
                    min,
                    max,
                    default,
                } => (Property::int(name, min, max), default.map(PropertyValue::Int)),
                PropertyJson::Enum {
                    name,
                    values,
                    default,
                } => (
                    Property::enumeration(name, values),
                    default.map(|value| PropertyValue::Enum(value.into())),
                ),
            };
            definition = match default {
                Some(value) if !property.domain.contains(&value) => {
                    return Err(RegistryError::InvalidDefault {
                        block: definition.key,
                        property: property.name.to_string(),
                        value: value.to_string(),
                    });
                }
                Some(value) => definition.with_default(property, value),
                None => definition.with_property(property),
            };
        }
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::BlockStateProperties;

    const CATALOG: &str = r#"[
        { "id": "minecraft:furnace", "properties": [
            { "type": "enum", "name": "facing", "values": ["north", "south", "west", "east"] },
            { "type": "bool", "name": "lit" } ] },
        { "id": "tfc:firepit", "properties": [
            { "type": "enum", "name": "axis", "values": ["x", "z"] },
            { "type": "bool", "name": "lit" } ] },
        { "id": "tfc:crop/wheat", "properties": [
            { "type": "int", "name": "age", "min": 0, "max": 7, "default": 2 } ] },
        { "id": "stone" }
    ]"#;

    #[test]
    fn loads_catalog_and_freezes() {
        let mut registry = BlockRegistry::from_json(CATALOG).expect("valid catalog");
        assert_eq!(registry.len(), 4);
        assert!(registry.contains(&Identifier::vanilla_static("stone")));
        assert!(registry.contains(&Identifier::new_static("tfc", "firepit")));
        assert!(!registry.contains(&Identifier::new_static("tfc", "missing")));

        let result = registry.register(BlockDefinition::new(Identifier::new_static("tfc", "x")));
        assert!(matches!(result, Err(RegistryError::Frozen(_))));
    }

    #[test]
    fn json_properties_match_vanilla_definitions() {
        let registry = BlockRegistry::from_json(CATALOG).expect("valid catalog");
        let firepit = registry
            .default_state(&Identifier::new_static("tfc", "firepit"))
            .expect("registered");
        assert!(firepit.has_property(&BlockStateProperties::HORIZONTAL_AXIS));
        assert!(!firepit.has_property(&BlockStateProperties::AXIS));
        assert!(firepit.has_property(&BlockStateProperties::LIT));

        let wheat = registry
            .default_state(&Identifier::new_static("tfc", "crop/wheat"))
            .expect("registered");
        assert_eq!(wheat.get_value_by_name("age"), Some(&PropertyValue::Int(2)));
    }

    #[test]
    fn state_with_applies_values() {
        let registry = BlockRegistry::from_json(CATALOG).expect("valid catalog");
        let furnace = registry
            .state_with(
                &Identifier::vanilla_static("furnace"),
                &[("facing", "east"), ("lit", "true")],
            )
            .expect("valid values");
        assert_eq!(furnace.to_string(), "minecraft:furnace[facing=east,lit=true]");
        assert!(
            registry
                .state_with(&Identifier::vanilla_static("furnace"), &[("facing", "up")])
                .is_none()
        );
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(matches!(
            BlockRegistry::from_json(r#"[{"id": "a:b"}, {"id": "a:b"}]"#),
            Err(RegistryError::Duplicate(_))
        ));
        assert!(matches!(
            BlockRegistry::from_json(
                r#"[{"id": "a:b", "properties": [{"type": "enum", "name": "p", "values": []}]}]"#
            ),
            Err(RegistryError::EmptyDomain { .. })
        ));
        assert!(matches!(
            BlockRegistry::from_json(
                r#"[{"id": "a:b", "properties": [{"type": "int", "name": "p", "min": 0, "max": 3, "default": 9}]}]"#
            ),
            Err(RegistryError::InvalidDefault { .. })
        ));
        assert!(matches!(
            BlockRegistry::from_json("{"),
            Err(RegistryError::Json(_))
        ));
    }
}
