//! Client transactions: the instructions submitted together.
//!
//! The builder assigns positions so every instruction carries
//! `index = position` and `length = count`, all under one nonce.

use crate::action::Action;
use crate::error::{InstructionError, Result};
use crate::ids::{Nonce, ObjectId};
use crate::instruction::Instruction;
use crate::signature::{Signature, Signer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireClientTransaction")]
pub struct ClientTransaction {
    instructions: Vec<Instruction>,
}

/// Unvalidated wire form; decoding must restore what the builder assigns.
#[derive(Deserialize)]
struct WireClientTransaction {
    instructions: Vec<Instruction>,
}

impl TryFrom<WireClientTransaction> for ClientTransaction {
    type Error = InstructionError;

    fn try_from(wire: WireClientTransaction) -> Result<Self> {
        let instructions = wire.instructions;
        let Some(first) = instructions.first() else {
            return Err(InstructionError::EmptyTransaction);
        };
        let count = instructions.len();
        let length = u32::try_from(count)
            .map_err(|_| InstructionError::TooManyInstructions { count })?;
        let nonce = *first.nonce();

        for (position, inst) in instructions.iter().enumerate() {
            let field = if u32::try_from(position).ok() != Some(inst.index()) {
                Some("index")
            } else if inst.length() != length {
                Some("length")
            } else if inst.nonce() != &nonce {
                Some("nonce")
            } else {
                None
            };
            if let Some(field) = field {
                return Err(InstructionError::TransactionMismatch { position, field });
            }
        }
        Ok(Self { instructions })
    }
}

impl ClientTransaction {
    pub fn builder(nonce: Nonce) -> ClientTransactionBuilder {
        ClientTransactionBuilder {
            nonce,
            pending: Vec::new(),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn instructions_mut(&mut self) -> &mut [Instruction] {
        &mut self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Have every signer sign every instruction digest and attach the
    /// signatures in signer order, replacing any previous ones.
    pub fn sign_with(&mut self, signers: &[&dyn Signer]) -> Result<()> {
        for inst in &mut self.instructions {
            let digest = inst.hash();
            let signatures = signers
                .iter()
                .map(|signer| {
                    let identity = signer.identity();
                    let bytes =
                        signer
                            .sign(digest.as_ref())
                            .map_err(|source| InstructionError::Signing {
                                identity: identity.to_string(),
                                index: inst.index(),
                                source,
                            })?;
                    Ok(Signature::new(identity, bytes))
                })
                .collect::<Result<Vec<_>>>()?;

            tracing::debug!(
                index = inst.index(),
                digest = %digest,
                signers = signatures.len(),
                "signed instruction"
            );
            inst.set_signatures(signatures);
        }
        Ok(())
    }
}

pub struct ClientTransactionBuilder {
    nonce: Nonce,
    pending: Vec<(ObjectId, Action)>,
}

impl ClientTransactionBuilder {
    pub fn add(mut self, object_id: ObjectId, action: Action) -> Self {
        self.pending.push((object_id, action));
        self
    }

    pub fn build(self) -> Result<ClientTransaction> {
        if self.pending.is_empty() {
            return Err(InstructionError::EmptyTransaction);
        }
        let length =
            u32::try_from(self.pending.len()).map_err(|_| InstructionError::TooManyInstructions {
                count: self.pending.len(),
            })?;

        let instructions = self
            .pending
            .into_iter()
            .zip(0u32..)
            .map(|((object_id, action), index)| {
                Instruction::new(object_id, self.nonce, index, length, action)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            nonce = %self.nonce,
            instructions = instructions.len(),
            "built client transaction"
        );
        Ok(ClientTransaction { instructions })
    }
}
