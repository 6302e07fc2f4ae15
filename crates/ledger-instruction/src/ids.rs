//! Fixed-length ledger identifiers.
//!
//! Object addresses are a pair of 32-byte identifiers: the governing darc
//! and the instance under it. The nonce has the same width. All three are
//! opaque to the hasher and are fed to it as raw bytes.

use crate::error::{InstructionError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Length of a darc id and of an instance id.
pub const ID_LEN: usize = 32;

/// Length of an instruction nonce.
pub const NONCE_LEN: usize = 32;

macro_rules! fixed_bytes {
    ($(#[$meta:meta])* $name:ident, $len:expr, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name([u8; $len]);

        impl $name {
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Decode from a slice that must be exactly the protocol length.
            pub fn from_slice(bytes: &[u8]) -> Result<Self> {
                let arr: [u8; $len] =
                    bytes
                        .try_into()
                        .map_err(|_| InstructionError::InvalidLength {
                            kind: $kind,
                            expected: $len,
                            actual: bytes.len(),
                        })?;
                Ok(Self(arr))
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = InstructionError;

            fn from_str(s: &str) -> Result<Self> {
                let bytes = hex::decode(s)
                    .map_err(|source| InstructionError::InvalidHex { kind: $kind, source })?;
                Self::from_slice(&bytes)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

fixed_bytes!(
    /// Identifier of a governing permission document (darc).
    DarcId,
    ID_LEN,
    "darc id"
);

fixed_bytes!(
    /// Identifier of a ledger object under its governing darc.
    InstanceId,
    ID_LEN,
    "instance id"
);

fixed_bytes!(
    /// Freshness token shared by the instructions of one transaction.
    Nonce,
    NONCE_LEN,
    "nonce"
);

impl Nonce {
    /// Fresh random nonce from the thread-local CSPRNG.
    pub fn random() -> Self {
        Self(rand::random())
    }
}

/// Address of a ledger object: governing darc plus instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ObjectId {
    pub darc_id: DarcId,
    pub instance_id: InstanceId,
}

impl ObjectId {
    pub fn new(darc_id: DarcId, instance_id: InstanceId) -> Self {
        Self {
            darc_id,
            instance_id,
        }
    }

    /// All-zero address.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn darc_id(&self) -> &DarcId {
        &self.darc_id
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    /// Darc id followed by instance id, 64 bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 * ID_LEN);
        out.extend_from_slice(self.darc_id.as_ref());
        out.extend_from_slice(self.instance_id.as_ref());
        out
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.darc_id, self.instance_id)
    }
}
