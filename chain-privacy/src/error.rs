//! Errors related to chain-privacy.
use thiserror::Error;

/// The algebraic check of a verifier that did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailedCheck {
    /// `Com(0, z) == c^x * B` of the zero commitment proof.
    ZeroOpening,
    /// `c^x * ca == Com(f, za)` for the given bit.
    BitOpening { bit: usize },
    /// `c^(x-f) * cb == Com(0, zb)` for the given bit.
    BitSquare { bit: usize },
    /// Aggregation of the ring against the polynomial coefficient commitments.
    RingAggregate,
}

impl std::fmt::Display for FailedCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailedCheck::ZeroOpening => write!(f, "opening to zero"),
            FailedCheck::BitOpening { bit } => write!(f, "opening of bit {}", bit),
            FailedCheck::BitSquare { bit } => write!(f, "zero or one constraint of bit {}", bit),
            FailedCheck::RingAggregate => write!(f, "ring aggregation"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZkpError {
    /// The ring of commitments (or a vector of the proof) does not have the
    /// configured size.
    #[error("Invalid ring size. Expected {expected} and got {got}")]
    InvalidRingSize { expected: usize, got: usize },

    /// The index of the commitment to zero is not a position of the ring.
    #[error("Index {index} is out of the ring of size {ring_size}")]
    IndexOutOfRange { index: usize, ring_size: usize },

    /// A binary witness was built over something else than 0 or 1.
    #[error("Committed value must be zero or one, got {0}")]
    InvalidCommittedValue(u64),

    /// A public point does not have affine coordinates on the curve.
    #[error("Point is not on the curve")]
    PointNotOnCurve,

    /// A point encoding could not be decompressed.
    #[error("Point decompression failure")]
    PointDecompressionFailure,

    /// A scalar encoding is not lower than the group order.
    #[error("Scalar out of bounds")]
    ScalarOutOfRange,

    /// Unknown slot identifier.
    #[error("Invalid slot identifier {0}")]
    InvalidSlot(u8),

    /// The ring size exponent is not supported.
    #[error("Unsupported ring size exponent {0}")]
    InvalidRingParameters(usize),

    /// The byte representation of a proof has an unexpected length.
    #[error("Serialization length mismatch. Expected {expected} bytes and got {got}")]
    SerializationLengthMismatch { expected: usize, got: usize },

    /// Every check was run, and at least one of them did not hold.
    #[error("Proof verification failed: {0}")]
    ProofVerificationFailed(FailedCheck),

    /// The random source failed while proving.
    #[error("Randomness generation failure: {0}")]
    RandomnessGenerationFailure(String),
}

impl From<rand_core::Error> for ZkpError {
    fn from(e: rand_core::Error) -> ZkpError {
        ZkpError::RandomnessGenerationFailure(e.to_string())
    }
}

impl From<FailedCheck> for ZkpError {
    fn from(check: FailedCheck) -> ZkpError {
        ZkpError::ProofVerificationFailed(check)
    }
}
