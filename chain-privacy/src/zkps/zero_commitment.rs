//! Proof that a commitment opens to zero, without revealing its randomness.
use super::challenge_context::{challenge, ChallengeInput};
use crate::commitment::{Commitment, Slot};
use crate::encoding::{check_length, ReadBuf, POINT_BYTES_LEN, SCALAR_BYTES_LEN};
use crate::error::{FailedCheck, ZkpError};
use crate::gang::Scalar;
use crate::parameters::Crs;
use rand_core::{CryptoRng, RngCore};

const LOG_TARGET: &str = "chain_privacy::zkps::zero_commitment";

/// Opening of `commitment` to zero at `slot`: `commitment = Com(0, randomness)`
#[derive(Debug, Clone)]
pub struct ZeroCommitmentWitness {
    commitment: Commitment,
    randomness: Scalar,
    slot: Slot,
}

impl ZeroCommitmentWitness {
    pub fn new(commitment: Commitment, randomness: Scalar, slot: Slot) -> Self {
        ZeroCommitmentWitness {
            commitment,
            randomness,
            slot,
        }
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }
}

/// Proof that a commitment is `Com(0, r)`. The randomness generator is shared
/// by every slot, so a proof made at one slot also verifies at any other slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZeroCommitmentProof {
    masked_commitment: Commitment,
    response: Scalar,
}

impl ZeroCommitmentProof {
    pub const BYTES_LEN: usize = POINT_BYTES_LEN + SCALAR_BYTES_LEN;

    pub fn prove<R: RngCore + CryptoRng>(
        rng: &mut R,
        crs: &Crs,
        witness: &ZeroCommitmentWitness,
    ) -> Result<Self, ZkpError> {
        tracing::trace!(target: LOG_TARGET, slot = ?witness.slot, "proving");
        let params = crs.pedersen();

        let s = Scalar::try_random(rng)?;
        let masked_commitment = params.commit(&Scalar::zero(), &s, witness.slot);

        let x = challenge(params, &[ChallengeInput::Commitment(&witness.commitment)]);
        let response = &witness.randomness * x + s;

        Ok(ZeroCommitmentProof {
            masked_commitment,
            response,
        })
    }

    /// Verify that `commitment` opens to zero at `slot`
    pub fn verify(&self, crs: &Crs, commitment: &Commitment, slot: Slot) -> Result<(), ZkpError> {
        tracing::trace!(target: LOG_TARGET, ?slot, "verifying");
        if !commitment.is_on_curve() || !self.masked_commitment.is_on_curve() {
            tracing::debug!(target: LOG_TARGET, "point not on curve");
            return Err(ZkpError::PointNotOnCurve);
        }
        let params = crs.pedersen();

        let x = challenge(params, &[ChallengeInput::Commitment(commitment)]);
        let lhs = params.commit(&Scalar::zero(), &self.response, slot);
        let rhs = commitment * x + &self.masked_commitment;
        if lhs != rhs {
            tracing::debug!(target: LOG_TARGET, "verification failed: {}", FailedCheck::ZeroOpening);
            return Err(FailedCheck::ZeroOpening.into());
        }
        Ok(())
    }

    /// `masked_commitment || response`. The slot is supplied by the verifier.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::BYTES_LEN);
        buf.extend_from_slice(&self.masked_commitment.to_bytes());
        buf.extend_from_slice(&self.response.to_bytes());
        debug_assert_eq!(buf.len(), Self::BYTES_LEN);
        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ZkpError> {
        check_length(bytes, Self::BYTES_LEN)?;
        let mut buf = ReadBuf::from(bytes);
        let masked_commitment = buf.get_commitment()?;
        let response = buf.get_scalar()?;
        buf.expect_end()?;
        Ok(ZeroCommitmentProof {
            masked_commitment,
            response,
        })
    }
}
