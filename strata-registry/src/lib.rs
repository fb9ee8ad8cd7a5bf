//! Block definitions, block states and the catalog the replacement processor consults.

pub mod block;
pub mod properties;
pub mod registry;

use strata_utils::Identifier;

pub use block::{BlockDefinition, BlockState, PropertyError};
pub use properties::{BlockStateProperties, Direction, Property, PropertyDomain, PropertyValue};
pub use registry::{BlockRegistry, RegistryError};

/// Registries that stop accepting entries once loading is finished.
pub trait RegistryExt {
    /// Rejects any further registration.
    fn freeze(&mut self);
}

/// Read-only view of the blocks that exist at runtime.
///
/// Both the vanilla source blocks and the replacement targets are looked up here. A
/// target that the catalog does not contain is never produced.
pub trait BlockCatalog: Send + Sync {
    /// True if `key` names a registered block.
    fn contains(&self, key: &Identifier) -> bool;

    /// Default state of the block, or `None` if it is not registered.
    fn default_state(&self, key: &Identifier) -> Option<BlockState>;
}

impl<T: BlockCatalog + ?Sized> BlockCatalog for &T {
    fn contains(&self, key: &Identifier) -> bool {
        (**self).contains(key)
    }

    fn default_state(&self, key: &Identifier) -> Option<BlockState> {
        (**self).default_state(key)
    }
}
