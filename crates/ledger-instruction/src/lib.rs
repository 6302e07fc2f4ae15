//! Client-side builder for darc-authorized ledger instructions.
//!
//! An instruction is one Spawn, Invoke or Delete against one ledger object.
//! This crate produces the two things the ledger's access control works
//! from:
//!
//! - the **instruction digest**: SHA-256 over a fixed byte encoding of the
//!   instruction, which every authorizer signs, and
//! - the **authorization request**: governing darc, action label, digest
//!   and the attached signer/signature pairs, handed to the darc evaluator.
//!
//! It holds no keys. Signing is delegated to [`Signer`] implementations and
//! the results are attached with [`Instruction::set_signatures`] or
//! [`ClientTransaction::sign_with`].
//!
//! # Example
//!
//! ```
//! use ledger_instruction::{Arguments, DarcId, InstanceId, Instruction, Nonce, ObjectId};
//!
//! let target = ObjectId::new(DarcId::new([1; 32]), InstanceId::new([2; 32]));
//! let inst = Instruction::spawn(
//!     target,
//!     Nonce::new([3; 32]),
//!     0,
//!     1,
//!     "darc",
//!     Arguments::new().with("darc", vec![0xaa, 0xbb]),
//! )
//! .unwrap();
//!
//! let request = inst.to_authorization_request();
//! assert_eq!(request.action(), "Spawn_darc");
//! assert_eq!(request.msg(), &inst.hash());
//! assert!(request.identities().is_empty());
//! ```

pub mod action;
pub mod argument;
pub mod error;
pub mod hash;
pub mod ids;
pub mod instruction;
pub mod request;
mod serde_hex;
pub mod signature;
pub mod transaction;

pub use action::{Action, Invoke, Spawn};
pub use argument::{Argument, Arguments};
pub use error::{InstructionError, Result};
pub use hash::{canonical_bytes, compute_instruction_hash, InstructionDigest, DIGEST_LEN};
pub use ids::{DarcId, InstanceId, Nonce, ObjectId, ID_LEN, NONCE_LEN};
pub use instruction::Instruction;
pub use request::AuthorizationRequest;
pub use signature::{Identity, Signature, Signer};
pub use transaction::{ClientTransaction, ClientTransactionBuilder};
