//! Error types for instruction construction and signing.

/// Result type for instruction operations.
pub type Result<T> = std::result::Result<T, InstructionError>;

/// Errors raised while building or signing instructions.
///
/// Hashing and request derivation never fail; only construction-time
/// validation and the signing collaborator can produce an error.
#[derive(Debug, thiserror::Error)]
pub enum InstructionError {
    /// Position is not inside the enclosing transaction.
    #[error("instruction index {index} out of range for transaction of length {length}")]
    IndexOutOfRange { index: u32, length: u32 },

    /// Fixed-length identifier decoded from a slice of the wrong size.
    #[error("invalid {kind} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Identifier text is not valid hex.
    #[error("invalid {kind} hex: {source}")]
    InvalidHex {
        kind: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    /// A transaction needs at least one instruction.
    #[error("transaction has no instructions")]
    EmptyTransaction,

    /// Positions are u32 on the wire.
    #[error("transaction has {count} instructions, more than a u32 position allows")]
    TooManyInstructions { count: usize },

    /// An instruction disagrees with its transaction on position, count
    /// or nonce.
    #[error("instruction at position {position} has inconsistent {field}")]
    TransactionMismatch {
        position: usize,
        field: &'static str,
    },

    /// The signing collaborator failed to produce a signature.
    #[error("signer {identity} failed to sign instruction {index}")]
    Signing {
        identity: String,
        index: u32,
        #[source]
        source: anyhow::Error,
    },
}

impl InstructionError {
    /// Returns true if this error came from the signing collaborator.
    pub fn is_signing(&self) -> bool {
        matches!(self, Self::Signing { .. })
    }
}
