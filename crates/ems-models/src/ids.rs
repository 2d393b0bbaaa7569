//! Strongly-typed ID newtypes.
//!
//! Each entity gets its own wrapper around `Uuid`, so a `UserId` can never be
//! passed where an `EmployeeId` is expected.

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgHasArrayType, PgTypeInfo},
};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
        #[schema(value_type = String, format = "uuid")]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl Type<sqlx::Postgres> for $name {
            fn type_info() -> PgTypeInfo {
                <Uuid as Type<sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &PgTypeInfo) -> bool {
                <Uuid as Type<sqlx::Postgres>>::compatible(ty)
            }
        }

        impl<'q> Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <Uuid as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        impl<'r> Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <Uuid as Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }

        impl PgHasArrayType for $name {
            fn array_type_info() -> PgTypeInfo {
                <Uuid as PgHasArrayType>::array_type_info()
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                Uuid::deserialize(deserializer).map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a user account.
    UserId
);

define_id!(
    /// Identifier of an employee record.
    EmployeeId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_uuid() {
        let uuid = Uuid::new_v4();
        let id: EmployeeId = uuid.to_string().parse().unwrap();
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("123".parse::<UserId>().is_err());
        assert!("507f1f77bcf86cd799439011".parse::<EmployeeId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&UserId::from(uuid)).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }

    #[test]
    fn test_debug_names_the_type() {
        let id = EmployeeId::from(Uuid::nil());
        assert_eq!(
            format!("{:?}", id),
            "EmployeeId(00000000-0000-0000-0000-000000000000)"
        );
    }
}
