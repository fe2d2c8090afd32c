use crate::utils::error::{Result, ServiceError};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a hex-encoded 12-byte ObjectId.
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// Identifier of a stored whisky, kept in its canonical lowercase hex form.
///
/// Only strings of exactly 24 ASCII hex digits are accepted; anything else is
/// rejected with [`ServiceError::InvalidIdError`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WhiskyId(String);

impl WhiskyId {
    pub fn parse(value: &str) -> Result<Self> {
        if is_valid_object_id(value) {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(ServiceError::InvalidIdError {
                value: value.to_string(),
            })
        }
    }

    /// Fresh identifier for stores that do not assign one themselves.
    pub fn generate() -> Self {
        Self::from(ObjectId::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_object_id(&self) -> Result<ObjectId> {
        ObjectId::parse_str(&self.0).map_err(|_| ServiceError::InvalidIdError {
            value: self.0.clone(),
        })
    }
}

pub fn is_valid_object_id(value: &str) -> bool {
    value.len() == OBJECT_ID_HEX_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
}

impl From<ObjectId> for WhiskyId {
    fn from(oid: ObjectId) -> Self {
        Self(oid.to_hex())
    }
}

impl FromStr for WhiskyId {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for WhiskyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for WhiskyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for WhiskyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        WhiskyId::parse(&raw).map_err(|_| serde::de::Error::custom("Invalid ObjectId"))
    }
}
