//! Strongly-typed identifiers used across the domain.

use core::fmt;

use uuid::Uuid;

use crate::entity_type::EntityType;
use crate::value_object::ValueObject;

/// Capability of any entity identifier.
///
/// `Display` (and thus `to_string()`) must render the same text as
/// [`EntityId::as_string`], so the plain form round-trips through generic
/// string formatting.
pub trait EntityId: fmt::Display {
    /// The kind of entity this identifier belongs to.
    fn entity_type(&self) -> EntityType;

    /// The identifier's own value in plain form, without a type prefix.
    /// Stable; suitable as a persistence key.
    fn as_string(&self) -> String;

    /// `"{type name} {value}"`: disambiguates identifiers across kinds
    /// whose plain values could collide (e.g. numeric ids reused per kind).
    /// For logs and diagnostics, not meant to be parsed back.
    fn as_typed_string(&self) -> String {
        format!("{} {}", self.entity_type(), self.as_string())
    }
}

/// Marker capability for identifiers of aggregate roots.
///
/// Lets call sites accept root identifiers only (e.g. a repository keyed by
/// consistency boundary), keeping plain entity identifiers out at compile
/// time. Adds no operations.
pub trait AggregateRootId: EntityId {}

/// UUID-backed aggregate root identifier.
///
/// Pairs an [`EntityType`] with a [`Uuid`]; the pair is fixed at
/// construction. Two identifiers are equal iff both the type name and the
/// UUID value match; ordering is lexicographic with the type name first and
/// the UUID (128-bit value order) as tie-break, so identifiers of mixed
/// kinds sort deterministically.
///
/// Aggregate kinds usually wrap this in their own newtype via
/// [`impl_aggregate_root_uuid!`] rather than using it directly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AggregateRootUuid {
    entity_type: EntityType,
    uuid: Uuid,
}

impl AggregateRootUuid {
    /// Fresh identity for a newly created aggregate (random UUID).
    pub fn new(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            uuid: Uuid::new_v4(),
        }
    }

    /// Rehydrate from a previously persisted or transmitted UUID value.
    ///
    /// Takes a parsed [`Uuid`], not raw text; candidate strings go through
    /// [`crate::validation::require_valid_uuid`] first.
    pub const fn from_uuid(entity_type: EntityType, uuid: Uuid) -> Self {
        Self { entity_type, uuid }
    }

    /// The wrapped UUID value.
    pub const fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl fmt::Display for AggregateRootUuid {
    /// Canonical form: lower-case, unbraced, `8-4-4-4-12` hyphenated
    /// groups, regardless of how the value was originally written.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uuid, f)
    }
}

impl EntityId for AggregateRootUuid {
    fn entity_type(&self) -> EntityType {
        self.entity_type
    }

    fn as_string(&self) -> String {
        self.uuid.to_string()
    }
}

impl AggregateRootId for AggregateRootUuid {}

impl ValueObject for AggregateRootUuid {}

/// Equips a per-kind identifier newtype with the full identifier surface.
///
/// The struct is declared by hand, so each kind carries its own docs and
/// derives, as a single-field tuple struct wrapping [`AggregateRootUuid`]:
///
/// ```
/// use domainid_core::{impl_aggregate_root_uuid, AggregateRootUuid, EntityId};
///
/// #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// pub struct OrderId(AggregateRootUuid);
/// impl_aggregate_root_uuid!(OrderId, "Order");
///
/// let id = OrderId::new();
/// assert!(id.as_typed_string().starts_with("Order "));
/// ```
///
/// Serialization uses the canonical UUID string; deserialization
/// re-validates the text and rejects anything else.
#[macro_export]
macro_rules! impl_aggregate_root_uuid {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Entity type shared by all identifiers of this kind.
            pub const TYPE: $crate::EntityType = $crate::EntityType::new($name);

            /// Create an identifier with a freshly generated random UUID.
            pub fn new() -> Self {
                Self($crate::AggregateRootUuid::new(Self::TYPE))
            }

            /// Wrap an existing UUID value.
            pub const fn from_uuid(uuid: $crate::Uuid) -> Self {
                Self($crate::AggregateRootUuid::from_uuid(Self::TYPE, uuid))
            }

            /// The wrapped UUID value.
            pub const fn as_uuid(&self) -> $crate::Uuid {
                self.0.uuid()
            }
        }

        impl $crate::EntityId for $t {
            fn entity_type(&self) -> $crate::EntityType {
                Self::TYPE
            }

            fn as_string(&self) -> ::std::string::String {
                ::std::string::ToString::to_string(&self.0)
            }
        }

        impl $crate::AggregateRootId for $t {}

        impl $crate::ValueObject for $t {}

        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::str::FromStr for $t {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::require_valid_uuid($name, s)?;
                let uuid = $crate::Uuid::parse_str(s).map_err(|e| {
                    $crate::DomainError::invalid_id(::std::format!("{}: {}", $name, e))
                })?;
                ::core::result::Result::Ok(Self::from_uuid(uuid))
            }
        }

        impl ::core::convert::From<$crate::Uuid> for $t {
            fn from(value: $crate::Uuid) -> Self {
                Self::from_uuid(value)
            }
        }

        impl ::core::convert::From<$t> for $crate::Uuid {
            fn from(value: $t) -> Self {
                value.as_uuid()
            }
        }

        impl $crate::serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> $crate::serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::serde::Deserializer<'de>,
            {
                let value =
                    <::std::string::String as $crate::serde::Deserialize>::deserialize(
                        deserializer,
                    )?;
                ::core::str::FromStr::from_str(&value)
                    .map_err(<D::Error as $crate::serde::de::Error>::custom)
            }
        }
    };
}
