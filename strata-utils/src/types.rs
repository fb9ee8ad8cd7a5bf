// Wrapper types making it harder to accidentaly use the wrong underlying type.

use std::{
    borrow::Cow,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

use crate::math::Vector3;

/// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    const PACKED_X_LENGTH: u32 = 26;
    const PACKED_Z_LENGTH: u32 = 26;
    const PACKED_Y_LENGTH: u32 = 12;
    const X_OFFSET: u32 = Self::PACKED_Y_LENGTH + Self::PACKED_Z_LENGTH;
    const Z_OFFSET: u32 = Self::PACKED_Y_LENGTH;

    /// Creates a new block position.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// Returns the position moved by the given deltas.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }

    /// Returns the position one block below.
    #[must_use]
    pub const fn below(&self) -> Self {
        self.offset(0, -1, 0)
    }

    /// Packs the position into a single `i64` using the vanilla 26/12/26 bit layout.
    ///
    /// Coordinates outside the packable range wrap, matching `BlockPos.asLong`.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        let x = (self.0.x as i64) & ((1 << Self::PACKED_X_LENGTH) - 1);
        let y = (self.0.y as i64) & ((1 << Self::PACKED_Y_LENGTH) - 1);
        let z = (self.0.z as i64) & ((1 << Self::PACKED_Z_LENGTH) - 1);
        (x << Self::X_OFFSET) | (z << Self::Z_OFFSET) | y
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.0.x, self.0.y, self.0.z)
    }
}

/// Errors produced while parsing an [`Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// The string did not contain exactly one `:` separator.
    #[error("invalid identifier: {0}")]
    Malformed(String),
    /// The namespace contained a character outside `[a-z0-9_.-]`.
    #[error("invalid namespace: {0}")]
    Namespace(String),
    /// The path contained a character outside `[a-z0-9_./-]`.
    #[error("invalid path: {0}")]
    Path(String),
}

/// A namespaced block identifier such as `minecraft:stone` or `tfc:rock/raw/granite`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    /// The namespace, e.g. `minecraft`.
    pub namespace: Cow<'static, str>,
    /// The path, e.g. `oak_planks`.
    pub path: Cow<'static, str>,
}

impl Identifier {
    /// The vanilla namespace.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// Creates an identifier from any namespace and path.
    pub fn new(
        namespace: impl Into<Cow<'static, str>>,
        path: impl Into<Cow<'static, str>>,
    ) -> Self {
        Identifier {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Creates an identifier from static parts without allocating.
    #[must_use]
    pub const fn new_static(namespace: &'static str, path: &'static str) -> Self {
        Identifier {
            namespace: Cow::Borrowed(namespace),
            path: Cow::Borrowed(path),
        }
    }

    /// Creates a `minecraft:` identifier from a static path.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        Self::new_static(Self::VANILLA_NAMESPACE, path)
    }

    /// Returns true if this identifier lives in `namespace`.
    #[must_use]
    pub fn is_in_namespace(&self, namespace: &str) -> bool {
        self.namespace == namespace
    }

    /// Returns true if this identifier lives in the vanilla namespace.
    #[must_use]
    pub fn is_vanilla(&self) -> bool {
        self.is_in_namespace(Self::VANILLA_NAMESPACE)
    }

    /// True if `namespace_char` may appear in a namespace.
    #[must_use]
    pub fn valid_namespace_char(namespace_char: char) -> bool {
        namespace_char == '_'
            || namespace_char == '-'
            || namespace_char.is_ascii_lowercase()
            || namespace_char.is_ascii_digit()
            || namespace_char == '.'
    }

    /// True if `path_char` may appear in a path.
    #[must_use]
    pub fn valid_path_char(path_char: char) -> bool {
        path_char == '_'
            || path_char == '-'
            || path_char.is_ascii_lowercase()
            || path_char.is_ascii_digit()
            || path_char == '/'
            || path_char == '.'
    }

    /// True if `namespace` is non-empty and every character is allowed.
    #[must_use]
    pub fn validate_namespace(namespace: &str) -> bool {
        !namespace.is_empty() && namespace.chars().all(Self::valid_namespace_char)
    }

    /// True if every character of `path` is allowed.
    #[must_use]
    pub fn validate_path(path: &str) -> bool {
        path.chars().all(Self::valid_path_char)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    /// Parses `namespace:path`. A missing or empty namespace defaults to `minecraft`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, path) = match s.split_once(':') {
            Some(("", path)) => (Self::VANILLA_NAMESPACE, path),
            Some((namespace, path)) => (namespace, path),
            None => (Self::VANILLA_NAMESPACE, s),
        };

        if path.is_empty() || path.contains(':') {
            return Err(IdentifierError::Malformed(s.to_string()));
        }
        if !Identifier::validate_namespace(namespace) {
            return Err(IdentifierError::Namespace(namespace.to_string()));
        }
        if !Identifier::validate_path(path) {
            return Err(IdentifierError::Path(path.to_string()));
        }

        Ok(Identifier {
            namespace: Cow::Owned(namespace.to_string()),
            path: Cow::Owned(path.to_string()),
        })
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_and_without_namespace() {
        let id: Identifier = "tfc:rock/raw/granite".parse().expect("valid identifier");
        assert_eq!(id, Identifier::new_static("tfc", "rock/raw/granite"));

        let vanilla: Identifier = "oak_planks".parse().expect("valid identifier");
        assert!(vanilla.is_vanilla());
        assert_eq!(vanilla.to_string(), "minecraft:oak_planks");

        let empty: Identifier = ":stone".parse().expect("valid identifier");
        assert_eq!(empty, Identifier::vanilla_static("stone"));
    }

    #[test]
    fn empty_namespace_is_invalid() {
        assert!(!Identifier::validate_namespace(""));
        assert!(Identifier::validate_namespace("irons_spellbooks"));
        assert!(!Identifier::validate_namespace("Bad Name"));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            "a:b:c".parse::<Identifier>(),
            Err(IdentifierError::Malformed(_))
        ));
        assert!(matches!(
            "Tfc:stone".parse::<Identifier>(),
            Err(IdentifierError::Namespace(_))
        ));
        assert!(matches!(
            "tfc:Stone".parse::<Identifier>(),
            Err(IdentifierError::Path(_))
        ));
        assert!(matches!(
            "tfc:".parse::<Identifier>(),
            Err(IdentifierError::Malformed(_))
        ));
    }

    #[test]
    fn serde_uses_the_display_form() {
        let id = Identifier::new_static("beneath", "wood/planks/crimson");
        let json = serde_json::to_string(&id).expect("serializable");
        assert_eq!(json, "\"beneath:wood/planks/crimson\"");
        let back: Identifier = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, id);
    }

    #[test]
    fn packed_position_matches_vanilla_layout() {
        assert_eq!(BlockPos::new(0, 0, 0).as_i64(), 0);
        assert_eq!(BlockPos::new(0, 1, 0).as_i64(), 1);
        assert_eq!(BlockPos::new(0, 0, 1).as_i64(), 1 << 12);
        assert_eq!(BlockPos::new(1, 0, 0).as_i64(), 1 << 38);
        assert_eq!(BlockPos::new(0, -1, 0).as_i64(), 0xFFF);
    }

    #[test]
    fn distinct_origins_pack_to_distinct_keys() {
        let a = BlockPos::new(128, 64, -256).as_i64();
        let b = BlockPos::new(-256, 64, 128).as_i64();
        let c = BlockPos::new(128, 65, -256).as_i64();
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
