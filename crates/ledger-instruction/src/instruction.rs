//! Ledger instructions.
//!
//! An [`Instruction`] targets one object, carries one [`Action`] and sits at
//! a fixed position in its transaction. Signatures are attached after the
//! digest has been signed and never take part in the digest.

use crate::action::Action;
use crate::argument::Arguments;
use crate::error::{InstructionError, Result};
use crate::hash::{compute_instruction_hash, InstructionDigest};
use crate::ids::{InstanceId, Nonce, ObjectId};
use crate::request::AuthorizationRequest;
use crate::signature::Signature;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireInstruction")]
pub struct Instruction {
    object_id: ObjectId,
    nonce: Nonce,
    index: u32,
    length: u32,
    action: Action,
    signatures: Vec<Signature>,
}

/// Unvalidated wire form; decoding goes through [`Instruction::new`].
#[derive(Deserialize)]
struct WireInstruction {
    object_id: ObjectId,
    nonce: Nonce,
    index: u32,
    length: u32,
    action: Action,
    #[serde(default)]
    signatures: Vec<Signature>,
}

impl TryFrom<WireInstruction> for Instruction {
    type Error = InstructionError;

    fn try_from(wire: WireInstruction) -> Result<Self> {
        let mut inst = Self::new(
            wire.object_id,
            wire.nonce,
            wire.index,
            wire.length,
            wire.action,
        )?;
        inst.signatures = wire.signatures;
        Ok(inst)
    }
}

impl Instruction {
    /// Build an unsigned instruction.
    ///
    /// Fails if `index` is not below `length`.
    pub fn new(
        object_id: ObjectId,
        nonce: Nonce,
        index: u32,
        length: u32,
        action: Action,
    ) -> Result<Self> {
        if index >= length {
            return Err(InstructionError::IndexOutOfRange { index, length });
        }
        Ok(Self {
            object_id,
            nonce,
            index,
            length,
            action,
            signatures: Vec::new(),
        })
    }

    pub fn spawn(
        object_id: ObjectId,
        nonce: Nonce,
        index: u32,
        length: u32,
        contract_id: impl Into<String>,
        args: Arguments,
    ) -> Result<Self> {
        Self::new(
            object_id,
            nonce,
            index,
            length,
            Action::spawn(contract_id, args),
        )
    }

    pub fn invoke(
        object_id: ObjectId,
        nonce: Nonce,
        index: u32,
        length: u32,
        command: impl Into<String>,
        args: Arguments,
    ) -> Result<Self> {
        Self::new(object_id, nonce, index, length, Action::invoke(command, args))
    }

    pub fn delete(object_id: ObjectId, nonce: Nonce, index: u32, length: u32) -> Result<Self> {
        Self::new(object_id, nonce, index, length, Action::Delete)
    }

    pub fn object_id(&self) -> &ObjectId {
        &self.object_id
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Replace the attached signatures.
    pub fn set_signatures(&mut self, signatures: Vec<Signature>) {
        self.signatures = signatures;
    }

    /// Canonical digest; see [`crate::hash`].
    pub fn hash(&self) -> InstructionDigest {
        compute_instruction_hash(self)
    }

    pub fn action_label(&self) -> String {
        self.action.label()
    }

    /// Request for the darc evaluator, with a freshly computed digest.
    pub fn to_authorization_request(&self) -> AuthorizationRequest {
        AuthorizationRequest::from_instruction(self)
    }

    /// Id of an object derived from this instruction, e.g. the object a
    /// Spawn creates. Same darc, instance id `SHA256(digest || what)`.
    pub fn derive_id(&self, what: &str) -> ObjectId {
        let mut hasher = Sha256::new();
        hasher.update(self.hash().as_ref());
        hasher.update(what.as_bytes());

        let mut instance = [0u8; 32];
        instance.copy_from_slice(&hasher.finalize());
        ObjectId::new(self.object_id.darc_id, InstanceId::new(instance))
    }
}
