//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Raw entity identifier.
///
/// UUIDv7 (time-ordered), so locally generated ids sort by creation time and
/// stay unique within any collection without coordination. Feature crates
/// wrap this in their own newtypes (`ProductId`, `SupplierId`, ...).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Create a new identifier.
    ///
    /// Prefer passing ids explicitly in tests for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<EntityId> for Uuid {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("EntityId: {}", e)))?;
        Ok(Self(uuid))
    }
}

/// Implement the shared plumbing for a domain id newtype over [`EntityId`].
#[macro_export]
macro_rules! impl_entity_id {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new() -> Self {
                Self($crate::EntityId::new())
            }

            pub fn as_entity_id(&self) -> $crate::EntityId {
                self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$crate::EntityId> for $t {
            fn from(value: $crate::EntityId) -> Self {
                Self(value)
            }
        }

        impl core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let id = s.parse::<$crate::EntityId>().map_err(|_| {
                    $crate::DomainError::invalid_id(format!("{}: {}", $name, s))
                })?;
                Ok(Self(id))
            }
        }
    };
}
