//! Block state properties.
//!
//! A [`Property`] is a name plus a value domain. Two properties are the same property
//! only if both the name and the domain match, so a horizontal `axis` (`x`, `z`) is not
//! the same property as a full `axis` (`x`, `y`, `z`).

use std::borrow::Cow;
use std::fmt::{self, Display};

use strata_utils::math::Axis;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    /// A boolean property value.
    Bool(bool),
    /// An integer property value.
    Int(i32),
    /// A lowercase enum constant name such as `north` or `upper`.
    Enum(Cow<'static, str>),
}

impl PropertyValue {
    /// Creates an enum value from a static name.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        PropertyValue::Enum(Cow::Borrowed(name))
    }

    /// Returns the enum constant name, if this is an enum value.
    #[must_use]
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            PropertyValue::Enum(name) => Some(name),
            _ => None,
        }
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(value) => write!(f, "{value}"),
            PropertyValue::Int(value) => write!(f, "{value}"),
            PropertyValue::Enum(name) => f.write_str(name),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<Axis> for PropertyValue {
    fn from(axis: Axis) -> Self {
        PropertyValue::named(axis.name())
    }
}

/// The set of values a property may take.
///
/// Enum domains compare as sets: declaration order does not matter.
#[derive(Debug, Clone)]
pub enum PropertyDomain {
    /// `true` or `false`.
    Bool,
    /// An inclusive integer range.
    Int {
        /// Smallest allowed value.
        min: i32,
        /// Largest allowed value.
        max: i32,
    },
    /// A fixed list of enum constant names.
    Enum(Cow<'static, [Cow<'static, str>]>),
}

impl PartialEq for PropertyDomain {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropertyDomain::Bool, PropertyDomain::Bool) => true,
            (
                PropertyDomain::Int { min, max },
                PropertyDomain::Int {
                    min: other_min,
                    max: other_max,
                },
            ) => min == other_min && max == other_max,
            (PropertyDomain::Enum(values), PropertyDomain::Enum(other_values)) => {
                values.len() == other_values.len()
                    && values.iter().all(|value| other_values.contains(value))
                    && other_values.iter().all(|value| values.contains(value))
            }
            _ => false,
        }
    }
}

impl Eq for PropertyDomain {}

impl PropertyDomain {
    /// Returns true if `value` is one of the possible values.
    #[must_use]
    pub fn contains(&self, value: &PropertyValue) -> bool {
        match (self, value) {
            (PropertyDomain::Bool, PropertyValue::Bool(_)) => true,
            (PropertyDomain::Int { min, max }, PropertyValue::Int(v)) => (*min..=*max).contains(v),
            (PropertyDomain::Enum(values), PropertyValue::Enum(name)) => {
                values.iter().any(|candidate| candidate == name)
            }
            _ => false,
        }
    }

    /// Parses the serialized form of a value in this domain.
    #[must_use]
    pub fn parse(&self, raw: &str) -> Option<PropertyValue> {
        let value = match self {
            PropertyDomain::Bool => PropertyValue::Bool(raw.parse().ok()?),
            PropertyDomain::Int { .. } => PropertyValue::Int(raw.parse().ok()?),
            PropertyDomain::Enum(_) => PropertyValue::Enum(Cow::Owned(raw.to_string())),
        };
        self.contains(&value).then_some(value)
    }

    /// The first possible value, used as the default when none is given.
    #[must_use]
    pub fn first(&self) -> Option<PropertyValue> {
        match self {
            PropertyDomain::Bool => Some(PropertyValue::Bool(false)),
            PropertyDomain::Int { min, max } => (min <= max).then_some(PropertyValue::Int(*min)),
            PropertyDomain::Enum(values) => values
                .first()
                .map(|name| PropertyValue::Enum(name.clone())),
        }
    }
}

/// A named block state property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Serialized property name.
    pub name: Cow<'static, str>,
    /// The possible values.
    pub domain: PropertyDomain,
}

impl Property {
    /// Creates a boolean property.
    pub fn boolean(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            domain: PropertyDomain::Bool,
        }
    }

    /// Creates an integer property over `min..=max`.
    pub fn int(name: impl Into<Cow<'static, str>>, min: i32, max: i32) -> Self {
        Self {
            name: name.into(),
            domain: PropertyDomain::Int { min, max },
        }
    }

    /// Creates an enum property from owned value names.
    pub fn enumeration(name: impl Into<Cow<'static, str>>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            domain: PropertyDomain::Enum(Cow::Owned(
                values.into_iter().map(Cow::Owned).collect(),
            )),
        }
    }
}

const HORIZONTAL_DIRECTION_VALUES: &[Cow<'static, str>] = &[
    Cow::Borrowed("north"),
    Cow::Borrowed("south"),
    Cow::Borrowed("west"),
    Cow::Borrowed("east"),
];
const DIRECTION_VALUES: &[Cow<'static, str>] = &[
    Cow::Borrowed("down"),
    Cow::Borrowed("up"),
    Cow::Borrowed("north"),
    Cow::Borrowed("south"),
    Cow::Borrowed("west"),
    Cow::Borrowed("east"),
];
const HORIZONTAL_AXIS_VALUES: &[Cow<'static, str>] = &[Cow::Borrowed("x"), Cow::Borrowed("z")];
const AXIS_VALUES: &[Cow<'static, str>] =
    &[Cow::Borrowed("x"), Cow::Borrowed("y"), Cow::Borrowed("z")];
const DOUBLE_BLOCK_HALF_VALUES: &[Cow<'static, str>] =
    &[Cow::Borrowed("upper"), Cow::Borrowed("lower")];
const HALF_VALUES: &[Cow<'static, str>] = &[Cow::Borrowed("top"), Cow::Borrowed("bottom")];
const SLAB_TYPE_VALUES: &[Cow<'static, str>] = &[
    Cow::Borrowed("top"),
    Cow::Borrowed("bottom"),
    Cow::Borrowed("double"),
];

/// Vanilla property definitions the processor and its tests refer to.
pub struct BlockStateProperties;

impl BlockStateProperties {
    /// `facing` restricted to the four horizontal directions.
    pub const HORIZONTAL_FACING: Property = Property {
        name: Cow::Borrowed("facing"),
        domain: PropertyDomain::Enum(Cow::Borrowed(HORIZONTAL_DIRECTION_VALUES)),
    };
    /// `facing` over all six directions.
    pub const FACING: Property = Property {
        name: Cow::Borrowed("facing"),
        domain: PropertyDomain::Enum(Cow::Borrowed(DIRECTION_VALUES)),
    };
    /// `axis` restricted to `x` and `z`.
    pub const HORIZONTAL_AXIS: Property = Property {
        name: Cow::Borrowed("axis"),
        domain: PropertyDomain::Enum(Cow::Borrowed(HORIZONTAL_AXIS_VALUES)),
    };
    /// `axis` over all three axes.
    pub const AXIS: Property = Property {
        name: Cow::Borrowed("axis"),
        domain: PropertyDomain::Enum(Cow::Borrowed(AXIS_VALUES)),
    };
    /// Upper or lower half of a two block tall plant or door.
    pub const DOUBLE_BLOCK_HALF: Property = Property {
        name: Cow::Borrowed("half"),
        domain: PropertyDomain::Enum(Cow::Borrowed(DOUBLE_BLOCK_HALF_VALUES)),
    };
    /// Top or bottom half of stairs and trapdoors.
    pub const HALF: Property = Property {
        name: Cow::Borrowed("half"),
        domain: PropertyDomain::Enum(Cow::Borrowed(HALF_VALUES)),
    };
    /// Slab placement.
    pub const SLAB_TYPE: Property = Property {
        name: Cow::Borrowed("type"),
        domain: PropertyDomain::Enum(Cow::Borrowed(SLAB_TYPE_VALUES)),
    };
    /// Waterlogged flag.
    pub const WATERLOGGED: Property = Property {
        name: Cow::Borrowed("waterlogged"),
        domain: PropertyDomain::Bool,
    };
    /// Lit flag used by furnaces, campfires and firepits.
    pub const LIT: Property = Property {
        name: Cow::Borrowed("lit"),
        domain: PropertyDomain::Bool,
    };
    /// Crop age 0..=7.
    pub const AGE_7: Property = Property {
        name: Cow::Borrowed("age"),
        domain: PropertyDomain::Int { min: 0, max: 7 },
    };
    /// Fluid level 0..=15.
    pub const LEVEL: Property = Property {
        name: Cow::Borrowed("level"),
        domain: PropertyDomain::Int { min: 0, max: 15 },
    };
}

/// One of the six block faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Negative y.
    Down,
    /// Positive y.
    Up,
    /// Negative z.
    North,
    /// Positive z.
    South,
    /// Negative x.
    West,
    /// Positive x.
    East,
}

impl Direction {
    /// All directions in vanilla order.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The axis this direction points along.
    #[must_use]
    pub const fn get_axis(self) -> Axis {
        match self {
            Direction::Down | Direction::Up => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
            Direction::West | Direction::East => Axis::X,
        }
    }

    /// The serialized lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Down => "down",
            Direction::Up => "up",
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        }
    }

    /// Parses a serialized direction name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.name() == name)
    }
}

impl From<Direction> for PropertyValue {
    fn from(direction: Direction) -> Self {
        PropertyValue::named(direction.name())
    }
}
