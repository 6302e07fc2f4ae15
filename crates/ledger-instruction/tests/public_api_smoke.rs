//! Compile-test for the crate root: ensures public API symbols are re-exported.
//!
//! Prevents regressions when refactoring module structure.

#[test]
fn public_api_smoke_crate_root() {
    use ledger_instruction::{
        canonical_bytes, compute_instruction_hash, Action, Argument, Arguments,
        AuthorizationRequest, ClientTransaction, ClientTransactionBuilder, DarcId, Identity,
        InstanceId, Instruction, InstructionDigest, InstructionError, Invoke, Nonce, ObjectId,
        Signature, Signer, Spawn, DIGEST_LEN, ID_LEN, NONCE_LEN,
    };

    assert_eq!(DIGEST_LEN, 32);
    assert_eq!(ID_LEN, 32);
    assert_eq!(NONCE_LEN, 32);

    // Type-check: functions exist and have expected signatures
    let _ = compute_instruction_hash as fn(&Instruction) -> InstructionDigest;
    let _ = canonical_bytes as fn(&Instruction) -> Vec<u8>;
    let _ = AuthorizationRequest::from_instruction as fn(&Instruction) -> AuthorizationRequest;

    // Symbols exist; no runtime needed
    let _ = std::mem::size_of::<Action>();
    let _ = std::mem::size_of::<Argument>();
    let _ = std::mem::size_of::<Arguments>();
    let _ = std::mem::size_of::<ClientTransaction>();
    let _ = std::mem::size_of::<ClientTransactionBuilder>();
    let _ = std::mem::size_of::<DarcId>();
    let _ = std::mem::size_of::<Identity>();
    let _ = std::mem::size_of::<InstanceId>();
    let _ = std::mem::size_of::<InstructionError>();
    let _ = std::mem::size_of::<Invoke>();
    let _ = std::mem::size_of::<Nonce>();
    let _ = std::mem::size_of::<ObjectId>();
    let _ = std::mem::size_of::<Signature>();
    let _ = std::mem::size_of::<Spawn>();
    let _ = std::mem::size_of::<&dyn Signer>();
}
