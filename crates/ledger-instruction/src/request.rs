//! Authorization requests for the darc evaluator.
//!
//! The request bundles what a darc rule check needs: the governing darc,
//! the action label to match, the digest the signatures cover, and the
//! signers with their signatures in attachment order.

use crate::hash::InstructionDigest;
use crate::ids::DarcId;
use crate::instruction::Instruction;
use crate::signature::Identity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    base_id: DarcId,
    action: String,
    msg: InstructionDigest,
    identities: Vec<Identity>,
    #[serde(with = "crate::serde_hex::vec")]
    signatures: Vec<Vec<u8>>,
}

impl AuthorizationRequest {
    /// Derive the request from an instruction.
    ///
    /// The digest is recomputed, never cached. An unsigned instruction
    /// yields empty signer lists, which is enough for pre-flight checks.
    pub fn from_instruction(inst: &Instruction) -> Self {
        let (identities, signatures): (Vec<_>, Vec<_>) = inst
            .signatures()
            .iter()
            .map(|s| (s.signer.clone(), s.signature.clone()))
            .unzip();

        let request = Self {
            base_id: inst.object_id().darc_id,
            action: inst.action_label(),
            msg: inst.hash(),
            identities,
            signatures,
        };
        tracing::debug!(
            darc = %request.base_id,
            action = %request.action,
            signers = request.identities.len(),
            "built authorization request"
        );
        request
    }

    /// Governing darc of the target object.
    pub fn base_id(&self) -> &DarcId {
        &self.base_id
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Instruction digest the signatures cover.
    pub fn msg(&self) -> &InstructionDigest {
        &self.msg
    }

    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    pub fn signatures(&self) -> &[Vec<u8>] {
        &self.signatures
    }

    /// Signer and signature pairs, in attachment order.
    pub fn signers(&self) -> impl Iterator<Item = (&Identity, &[u8])> + '_ {
        self.identities
            .iter()
            .zip(self.signatures.iter().map(Vec::as_slice))
    }

    pub fn is_signed(&self) -> bool {
        !self.identities.is_empty()
    }
}

impl From<&Instruction> for AuthorizationRequest {
    fn from(inst: &Instruction) -> Self {
        Self::from_instruction(inst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::Arguments;
    use crate::ids::{InstanceId, Nonce, ObjectId};
    use crate::signature::Signature;

    fn spawn_darc() -> Instruction {
        Instruction::spawn(
            ObjectId::new(DarcId::new([1; 32]), InstanceId::new([2; 32])),
            Nonce::new([3; 32]),
            0,
            1,
            "darc",
            Arguments::new().with("darc", vec![0xaa, 0xbb]),
        )
        .unwrap()
    }

    #[test]
    fn test_unsigned_request() {
        let inst = spawn_darc();
        let req = inst.to_authorization_request();

        assert!(!req.is_signed());
        assert!(req.identities().is_empty());
        assert!(req.signatures().is_empty());
        assert_eq!(req.msg(), &inst.hash());
        assert_eq!(req.base_id(), &DarcId::new([1; 32]));
        assert_eq!(req.action(), "Spawn_darc");
    }

    #[test]
    fn test_parallel_lists_follow_attachment_order() {
        let mut inst = spawn_darc();
        inst.set_signatures(vec![
            Signature::new(Identity::from("ed25519:01"), vec![1, 1]),
            Signature::new(Identity::from("ed25519:02"), vec![2, 2]),
            Signature::new(Identity::from("ed25519:03"), vec![3, 3]),
        ]);
        let req = AuthorizationRequest::from(&inst);

        assert_eq!(req.identities().len(), 3);
        assert_eq!(req.signatures().len(), 3);
        for (i, (id, sig)) in req.signers().enumerate() {
            assert_eq!(id, &inst.signatures()[i].signer);
            assert_eq!(sig, inst.signatures()[i].signature.as_slice());
        }
    }

    #[test]
    fn test_request_wire_shape() {
        let mut inst = spawn_darc();
        inst.set_signatures(vec![Signature::new(Identity::from("ed25519:01"), vec![0xca, 0xfe])]);
        let json = serde_json::to_value(inst.to_authorization_request()).unwrap();

        assert_eq!(json["base_id"], "01".repeat(32));
        assert_eq!(json["action"], "Spawn_darc");
        assert_eq!(json["identities"], serde_json::json!(["ed25519:01"]));
        assert_eq!(json["signatures"], serde_json::json!(["cafe"]));
    }
}
