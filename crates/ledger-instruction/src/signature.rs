//! Signer identities, attached signatures and the signing collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque signer identity as understood by the darc evaluator,
/// e.g. `ed25519:<hex public key>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One authorizer's signature over an instruction digest.
///
/// Identity and bytes travel together so the request builder can never
/// produce signer and signature lists of different lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub signer: Identity,
    #[serde(with = "crate::serde_hex")]
    pub signature: Vec<u8>,
}

impl Signature {
    pub fn new(signer: Identity, signature: impl Into<Vec<u8>>) -> Self {
        Self {
            signer,
            signature: signature.into(),
        }
    }
}

/// Signing collaborator. Key material stays with the implementation.
pub trait Signer {
    fn identity(&self) -> Identity;

    /// Raw signature bytes over `msg` (an instruction digest).
    fn sign(&self, msg: &[u8]) -> anyhow::Result<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_json_shape() {
        let sig = Signature::new(Identity::from("ed25519:00ff"), vec![0xde, 0xad]);
        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, r#"{"signer":"ed25519:00ff","signature":"dead"}"#);
    }

    #[test]
    fn test_identity_display() {
        assert_eq!(Identity::new("x509ec:abc").to_string(), "x509ec:abc");
    }
}
