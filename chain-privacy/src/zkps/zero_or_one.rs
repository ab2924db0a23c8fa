//! Proof that a commitment opens to 0 or 1. The per bit announcement,
//! response and checks are shared with the one-of-many proof, which runs one
//! instance of them for every bit of the hidden ring index.
use super::challenge_context::{challenge, ChallengeInput};
use crate::commitment::{Commitment, PedersenParams, Slot};
use crate::encoding::{
    check_length, ReadBuf, POINT_BYTES_LEN, SCALAR_BYTES_LEN, SLOT_BYTES_LEN,
};
use crate::error::{FailedCheck, ZkpError};
use crate::gang::Scalar;
use crate::parameters::Crs;
use rand_core::{CryptoRng, RngCore};

const LOG_TARGET: &str = "chain_privacy::zkps::zero_or_one";

/// Randomness generated in the proof of one bit, used for the hiding property.
pub(crate) struct BitBlinding {
    a: Scalar,
    s: Scalar,
    t: Scalar,
}

/// Commitments to the blinding of one bit.
pub(crate) struct BitAnnouncement {
    pub(crate) ca: Commitment,
    pub(crate) cb: Commitment,
}

/// Response to the challenge for one bit.
pub(crate) struct BitResponse {
    pub(crate) f: Scalar,
    pub(crate) za: Scalar,
    pub(crate) zb: Scalar,
}

impl BitBlinding {
    pub(crate) fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, ZkpError> {
        Ok(BitBlinding {
            a: Scalar::try_random(rng)?,
            s: Scalar::try_random(rng)?,
            t: Scalar::try_random(rng)?,
        })
    }

    /// `a` is the free coefficient of the linear factor of the bit in the ring polynomials.
    pub(crate) fn a(&self) -> &Scalar {
        &self.a
    }

    /// `ca = Com(a, s)` and `cb = Com(a * bit, t)`
    pub(crate) fn announce(&self, params: &PedersenParams, bit: &Scalar, slot: Slot) -> BitAnnouncement {
        BitAnnouncement {
            ca: params.commit(&self.a, &self.s, slot),
            cb: params.commit(&(&self.a * bit), &self.t, slot),
        }
    }

    /// Response for the bit committed with `randomness`, under `challenge`
    pub(crate) fn respond(&self, bit: &Scalar, randomness: &Scalar, challenge: &Scalar) -> BitResponse {
        let f = bit * challenge + &self.a;
        let za = randomness * challenge + &self.s;
        let zb = randomness * (challenge - f) + &self.t;
        BitResponse { f, za, zb }
    }
}

/// Check the two equations binding the commitment `c` of bit number `bit`
/// to the response. They hold together only if `c` opens to 0 or 1.
pub(crate) fn verify_bit(
    params: &PedersenParams,
    c: &Commitment,
    announcement: &BitAnnouncement,
    response: &BitResponse,
    challenge: &Scalar,
    slot: Slot,
    bit: usize,
) -> Result<(), FailedCheck> {
    let opening = c * challenge + &announcement.ca;
    if opening != params.commit(&response.f, &response.za, slot) {
        return Err(FailedCheck::BitOpening { bit });
    }
    let square = c * (challenge - response.f) + &announcement.cb;
    if square != params.commit(&Scalar::zero(), &response.zb, slot) {
        return Err(FailedCheck::BitSquare { bit });
    }
    Ok(())
}

/// Opening of `commitment` to a bit `value` at `slot`
#[derive(Debug, Clone)]
pub struct BinaryWitness {
    commitment: Commitment,
    value: Scalar,
    randomness: Scalar,
    slot: Slot,
}

impl BinaryWitness {
    pub fn new(
        commitment: Commitment,
        value: u64,
        randomness: Scalar,
        slot: Slot,
    ) -> Result<Self, ZkpError> {
        if value > 1 {
            return Err(ZkpError::InvalidCommittedValue(value));
        }
        Ok(BinaryWitness {
            commitment,
            value: Scalar::from_u64(value),
            randomness,
            slot,
        })
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryProof {
    ca: Commitment,
    cb: Commitment,
    f: Scalar,
    za: Scalar,
    zb: Scalar,
    slot: Slot,
}

impl BinaryProof {
    pub const BYTES_LEN: usize = POINT_BYTES_LEN * 2 + SCALAR_BYTES_LEN * 3 + SLOT_BYTES_LEN;

    pub fn prove<R: RngCore + CryptoRng>(
        rng: &mut R,
        crs: &Crs,
        witness: &BinaryWitness,
    ) -> Result<Self, ZkpError> {
        tracing::trace!(target: LOG_TARGET, slot = ?witness.slot, "proving");
        let params = crs.pedersen();

        let blinding = BitBlinding::random(rng)?;
        let BitAnnouncement { ca, cb } = blinding.announce(params, &witness.value, witness.slot);

        let x = challenge(
            params,
            &[
                ChallengeInput::Commitment(&ca),
                ChallengeInput::Commitment(&cb),
                ChallengeInput::Commitment(&witness.commitment),
            ],
        );
        let BitResponse { f, za, zb } = blinding.respond(&witness.value, &witness.randomness, &x);

        Ok(BinaryProof {
            ca,
            cb,
            f,
            za,
            zb,
            slot: witness.slot,
        })
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Verify that `commitment` opens to 0 or 1 at the slot of the proof
    pub fn verify(&self, crs: &Crs, commitment: &Commitment) -> Result<(), ZkpError> {
        tracing::trace!(target: LOG_TARGET, slot = ?self.slot, "verifying");
        if [commitment, &self.ca, &self.cb].iter().any(|c| !c.is_on_curve()) {
            tracing::debug!(target: LOG_TARGET, "point not on curve");
            return Err(ZkpError::PointNotOnCurve);
        }
        let params = crs.pedersen();

        let x = challenge(
            params,
            &[
                ChallengeInput::Commitment(&self.ca),
                ChallengeInput::Commitment(&self.cb),
                ChallengeInput::Commitment(commitment),
            ],
        );
        let announcement = BitAnnouncement {
            ca: self.ca,
            cb: self.cb,
        };
        let response = BitResponse {
            f: self.f,
            za: self.za,
            zb: self.zb,
        };
        verify_bit(params, commitment, &announcement, &response, &x, self.slot, 0).map_err(
            |check| {
                tracing::debug!(target: LOG_TARGET, "verification failed: {}", check);
                ZkpError::from(check)
            },
        )
    }

    /// `ca || cb || f || za || zb || slot`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::BYTES_LEN);
        for commitment in [&self.ca, &self.cb].iter() {
            buf.extend_from_slice(&commitment.to_bytes());
        }
        for scalar in [&self.f, &self.za, &self.zb].iter() {
            buf.extend_from_slice(&scalar.to_bytes());
        }
        buf.push(self.slot.as_u8());
        debug_assert_eq!(buf.len(), Self::BYTES_LEN);
        buf
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ZkpError> {
        check_length(bytes, Self::BYTES_LEN)?;
        let mut buf = ReadBuf::from(bytes);
        let ca = buf.get_commitment()?;
        let cb = buf.get_commitment()?;
        let f = buf.get_scalar()?;
        let za = buf.get_scalar()?;
        let zb = buf.get_scalar()?;
        let slot = buf.get_slot()?;
        buf.expect_end()?;
        Ok(BinaryProof {
            ca,
            cb,
            f,
            za,
            zb,
            slot,
        })
    }
}
