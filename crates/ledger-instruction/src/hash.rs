//! Canonical instruction digest.
//!
//! The digest is what authorizers sign and what the ledger's darc layer
//! re-derives before checking those signatures, so the byte stream below
//! must match the server bit for bit:
//!
//! ```text
//! SHA256(
//!     darc_id || instance_id || nonce
//!     || u32_le(index) || u32_le(length)
//!     || discriminator                      // 0 spawn, 1 invoke, 2 delete
//!     || contract_id                        // spawn only
//!     || name_0 || value_0 || name_1 || ... // spawn and invoke
//! )
//! ```
//!
//! There are no length prefixes or separators. Name/value boundaries are
//! therefore ambiguous (`"ab" + "c"` hashes like `"a" + "bc"`); the
//! verifier on the ledger uses the same encoding, so this must not change.
//!
//! The Invoke command is not part of the stream, only of the action label.
//! Signatures are excluded since they are computed over the digest.

use crate::action::Action;
use crate::instruction::Instruction;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 32;

/// SHA-256 digest of an instruction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstructionDigest([u8; DIGEST_LEN]);

impl InstructionDigest {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for InstructionDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for InstructionDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for InstructionDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstructionDigest({})", self.to_hex())
    }
}

impl Serialize for InstructionDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for InstructionDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        let arr: [u8; DIGEST_LEN] = bytes.as_slice().try_into().map_err(|_| {
            serde::de::Error::custom(format!(
                "digest must be {} bytes, got {}",
                DIGEST_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// Feed the canonical byte stream of `inst` to `out`, in order.
fn write_canonical(inst: &Instruction, mut out: impl FnMut(&[u8])) {
    let object_id = inst.object_id();
    out(object_id.darc_id.as_ref());
    out(object_id.instance_id.as_ref());
    out(inst.nonce().as_ref());
    out(&inst.index().to_le_bytes());
    out(&inst.length().to_le_bytes());

    let action = inst.action();
    out(&[action.discriminator()]);
    if let Action::Spawn(spawn) = action {
        out(spawn.contract_id.as_bytes());
    }
    for arg in action.arguments() {
        out(arg.name.as_bytes());
        out(&arg.value);
    }
}

/// Compute the instruction digest.
///
/// Infallible: SHA-256 is linked statically, there is no algorithm lookup.
pub fn compute_instruction_hash(inst: &Instruction) -> InstructionDigest {
    let mut hasher = Sha256::new();
    write_canonical(inst, |bytes| hasher.update(bytes));

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&hasher.finalize());
    let digest = InstructionDigest(digest);

    tracing::trace!(
        index = inst.index(),
        length = inst.length(),
        action = %inst.action_label(),
        digest = %digest,
        "computed instruction digest"
    );
    digest
}

/// The exact byte stream hashed by [`compute_instruction_hash`].
pub fn canonical_bytes(inst: &Instruction) -> Vec<u8> {
    let mut buf = Vec::new();
    write_canonical(inst, |bytes| buf.extend_from_slice(bytes));
    buf
}
