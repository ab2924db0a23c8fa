//! Proof that one commitment of a ring opens to zero, without revealing which
//! one. The prover commits to the bits of the hidden index, proves each of them
//! is 0 or 1, and masks the aggregation of the ring with commitments to the
//! lower coefficients of the selector polynomials.
use super::challenge_context::ChallengeContext;
use super::zero_or_one::{verify_bit, BitAnnouncement, BitBlinding, BitResponse};
use crate::commitment::{Commitment, PedersenParams, Slot};
use crate::encoding::{
    check_length, ReadBuf, POINT_BYTES_LEN, RING_INDEX_BYTES_LEN, SCALAR_BYTES_LEN,
    SLOT_BYTES_LEN,
};
use crate::error::{FailedCheck, ZkpError};
use crate::gang::Scalar;
use crate::math::Polynomial;
use crate::parameters::{Crs, RingParameters};
use rand_core::{CryptoRng, RngCore};
use rayon::prelude::*;

const LOG_TARGET: &str = "chain_privacy::zkps::one_of_many";

/// Bits of `n`, least significant first
pub(crate) fn binrep(n: usize, digits: usize) -> Vec<bool> {
    (0..digits).map(|i| (n >> i) & 1 == 1).collect()
}

fn check_ring_size(expected: usize, got: usize) -> Result<(), ZkpError> {
    if expected != got {
        return Err(ZkpError::InvalidRingSize { expected, got });
    }
    Ok(())
}

/// Ring of commitments with the position of the one opening to zero.
#[derive(Debug, Clone)]
pub struct OneOfManyWitness {
    commitments: Vec<Commitment>,
    ring_indices: Vec<u64>,
    index_of_zero: usize,
    randomness: Scalar,
    slot: Slot,
}

impl OneOfManyWitness {
    /// `commitments[index_of_zero]` is expected to be `Com(0, randomness)` at
    /// `slot`. `ring_indices` are the public positions of the ring members.
    pub fn new(
        ring: &RingParameters,
        commitments: Vec<Commitment>,
        ring_indices: Vec<u64>,
        index_of_zero: usize,
        randomness: Scalar,
        slot: Slot,
    ) -> Result<Self, ZkpError> {
        let witness = OneOfManyWitness {
            commitments,
            ring_indices,
            index_of_zero,
            randomness,
            slot,
        };
        witness.check(ring)?;
        Ok(witness)
    }

    fn check(&self, ring: &RingParameters) -> Result<(), ZkpError> {
        let ring_size = ring.ring_size();
        check_ring_size(ring_size, self.commitments.len())?;
        if self.index_of_zero >= ring_size {
            return Err(ZkpError::IndexOutOfRange {
                index: self.index_of_zero,
                ring_size,
            });
        }
        check_ring_size(ring_size, self.ring_indices.len())
    }

    pub fn commitments(&self) -> &[Commitment] {
        &self.commitments
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OneOfManyProof {
    cl: Vec<Commitment>,
    ca: Vec<Commitment>,
    cb: Vec<Commitment>,
    cd: Vec<Commitment>,
    f: Vec<Scalar>,
    za: Vec<Scalar>,
    zb: Vec<Scalar>,
    zd: Scalar,
    ring_indices: Vec<u64>,
    slot: Slot,
}

/// `x` chained backwards over the bits: starting from zero, each round hashes
/// the previous challenge with the commitments of bit `j`.
fn chained_challenge(
    params: &PedersenParams,
    cl: &[Commitment],
    ca: &[Commitment],
    cb: &[Commitment],
    cd: &[Commitment],
) -> Scalar {
    let mut x = Scalar::zero();
    for j in (0..cl.len()).rev() {
        let mut ctx = ChallengeContext::new(params);
        ctx.append_scalar(&x);
        ctx.append_commitment(&cl[j]);
        ctx.append_commitment(&ca[j]);
        ctx.append_commitment(&cb[j]);
        ctx.append_commitment(&cd[j]);
        x = ctx.challenge();
    }
    x
}

/// Selector polynomials `p_i(x) = prod_j f_{j, i_j}(x)` of every ring member,
/// with `f_{j,1}(x) = l_j x + a_j` and `f_{j,0}(x) = x - f_{j,1}(x)`. The
/// coefficient of `x^n` is 1 at the hidden index and 0 elsewhere.
fn selector_polynomials(ring_size: usize, bits: &[bool], a: &[Scalar]) -> Vec<Polynomial> {
    let factors = bits
        .iter()
        .zip(a.iter())
        .map(|(lj, aj)| {
            let f1 = Polynomial::new(1).set2(*aj, (*lj).into());
            let f0 = Polynomial::new(1).set2(aj.negate(), (!lj).into());
            (f0, f1)
        })
        .collect::<Vec<_>>();

    (0..ring_size)
        .into_par_iter()
        .map(|i| {
            binrep(i, factors.len())
                .iter()
                .zip(factors.iter())
                .fold(Polynomial::constant(Scalar::one()), |acc, (ij, (f0, f1))| {
                    if *ij {
                        acc * f1
                    } else {
                        acc * f0
                    }
                })
        })
        .collect()
}

/// `sum_i commitments[i] * scalars[i]`
fn ring_sum(commitments: &[Commitment], scalars: &[Scalar]) -> Commitment {
    commitments
        .par_iter()
        .zip(scalars.par_iter())
        .map(|(c, s)| c * s)
        .reduce(Commitment::zero, |a, b| a + b)
}

impl OneOfManyProof {
    /// Length of the encoding of a proof over `ring`
    pub fn serialized_len(ring: &RingParameters) -> usize {
        let n = ring.bits();
        POINT_BYTES_LEN * 4 * n
            + SCALAR_BYTES_LEN * (3 * n + 1)
            + RING_INDEX_BYTES_LEN * ring.ring_size()
            + SLOT_BYTES_LEN
    }

    pub fn prove<R: RngCore + CryptoRng>(
        rng: &mut R,
        crs: &Crs,
        witness: &OneOfManyWitness,
    ) -> Result<Self, ZkpError> {
        let ring = crs.ring();
        tracing::trace!(
            target: LOG_TARGET,
            ring_size = ring.ring_size(),
            slot = ?witness.slot,
            "proving"
        );
        witness.check(ring)?;
        let params = crs.pedersen();
        let n = ring.bits();
        let slot = witness.slot;

        let bits = binrep(witness.index_of_zero, n);
        let bit_scalars: Vec<Scalar> = bits.iter().map(|b| Scalar::from(*b)).collect();

        let mut r = Vec::with_capacity(n);
        let mut blindings = Vec::with_capacity(n);
        let mut u = Vec::with_capacity(n);
        for _ in 0..n {
            r.push(Scalar::try_random(rng)?);
            blindings.push(BitBlinding::random(rng)?);
            u.push(Scalar::try_random(rng)?);
        }

        let cl: Vec<Commitment> = bit_scalars
            .iter()
            .zip(r.iter())
            .map(|(l, rj)| params.commit(l, rj, slot))
            .collect();
        let (ca, cb): (Vec<Commitment>, Vec<Commitment>) = blindings
            .iter()
            .zip(bit_scalars.iter())
            .map(|(blinding, l)| {
                let BitAnnouncement { ca, cb } = blinding.announce(params, l, slot);
                (ca, cb)
            })
            .unzip();

        let a: Vec<Scalar> = blindings.iter().map(|b| *b.a()).collect();
        let polys = selector_polynomials(ring.ring_size(), &bits, &a);

        let cd: Vec<Commitment> = u
            .iter()
            .enumerate()
            .map(|(k, uk)| {
                let coefficients: Vec<Scalar> =
                    polys.iter().map(|p| p.get_coefficient_at(k)).collect();
                ring_sum(&witness.commitments, &coefficients)
                    + params.commit(&Scalar::zero(), uk, slot)
            })
            .collect();

        let x = chained_challenge(params, &cl, &ca, &cb, &cd);

        let mut f = Vec::with_capacity(n);
        let mut za = Vec::with_capacity(n);
        let mut zb = Vec::with_capacity(n);
        for ((blinding, l), rj) in blindings.iter().zip(bit_scalars.iter()).zip(r.iter()) {
            let response = blinding.respond(l, rj, &x);
            f.push(response.f);
            za.push(response.za);
            zb.push(response.zb);
        }

        let masks = u.iter().enumerate().map(|(k, uk)| uk * x.power(k));
        let zd = &witness.randomness * x.power(n)
            - Scalar::sum(masks).unwrap_or_else(Scalar::zero);

        Ok(OneOfManyProof {
            cl,
            ca,
            cb,
            cd,
            f,
            za,
            zb,
            zd,
            ring_indices: witness.ring_indices.clone(),
            slot,
        })
    }

    /// Public positions of the ring members, as given by the prover. They are
    /// not bound by any challenge: callers resolve them to commitments
    /// themselves and must not trust this field.
    pub fn ring_indices(&self) -> &[u64] {
        &self.ring_indices
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Verify that one of `commitments` opens to zero at the slot of the proof
    pub fn verify(&self, crs: &Crs, commitments: &[Commitment]) -> Result<(), ZkpError> {
        let ring = crs.ring();
        tracing::trace!(
            target: LOG_TARGET,
            ring_size = ring.ring_size(),
            slot = ?self.slot,
            "verifying"
        );
        let n = ring.bits();
        let ring_size = ring.ring_size();
        check_ring_size(ring_size, commitments.len())?;
        for len in [
            self.cl.len(),
            self.ca.len(),
            self.cb.len(),
            self.cd.len(),
            self.f.len(),
            self.za.len(),
            self.zb.len(),
        ]
        .iter()
        {
            check_ring_size(n, *len)?;
        }
        check_ring_size(ring_size, self.ring_indices.len())?;

        if self
            .cl
            .iter()
            .chain(self.ca.iter())
            .chain(self.cb.iter())
            .chain(self.cd.iter())
            .any(|c| !c.is_on_curve())
        {
            tracing::debug!(target: LOG_TARGET, "point not on curve");
            return Err(ZkpError::PointNotOnCurve);
        }

        let params = crs.pedersen();
        let x = chained_challenge(params, &self.cl, &self.ca, &self.cb, &self.cd);

        self.verify_bits(params, &x)
            .and_then(|()| self.verify_aggregate(params, commitments, &x))
            .map_err(|check| {
                tracing::debug!(target: LOG_TARGET, "verification failed: {}", check);
                ZkpError::from(check)
            })
    }

    fn verify_bits(&self, params: &PedersenParams, x: &Scalar) -> Result<(), FailedCheck> {
        for j in 0..self.cl.len() {
            let announcement = BitAnnouncement {
                ca: self.ca[j],
                cb: self.cb[j],
            };
            let response = BitResponse {
                f: self.f[j],
                za: self.za[j],
                zb: self.zb[j],
            };
            verify_bit(params, &self.cl[j], &announcement, &response, x, self.slot, j)?;
        }
        Ok(())
    }

    fn verify_aggregate(
        &self,
        params: &PedersenParams,
        commitments: &[Commitment],
        x: &Scalar,
    ) -> Result<(), FailedCheck> {
        let n = self.f.len();
        let x_minus_f: Vec<Scalar> = self.f.iter().map(|fj| x - fj).collect();

        let selectors: Vec<Scalar> = (0..commitments.len())
            .into_par_iter()
            .map(|i| {
                binrep(i, n)
                    .iter()
                    .enumerate()
                    .fold(Scalar::one(), |acc, (j, ij)| {
                        if *ij {
                            acc * self.f[j]
                        } else {
                            acc * x_minus_f[j]
                        }
                    })
            })
            .collect();

        let minus_powers: Vec<Scalar> = (0..n).map(|k| x.power(k).negate()).collect();
        let lhs = ring_sum(commitments, &selectors) + ring_sum(&self.cd, &minus_powers);

        if lhs != params.commit(&Scalar::zero(), &self.zd, self.slot) {
            return Err(FailedCheck::RingAggregate);
        }
        Ok(())
    }

    /// `cl || ca || cb || cd || f || za || zb || zd || ring_indices || slot`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for commitments in [&self.cl, &self.ca, &self.cb, &self.cd].iter() {
            for c in commitments.iter() {
                buf.extend_from_slice(&c.to_bytes());
            }
        }
        for scalars in [&self.f, &self.za, &self.zb].iter() {
            for s in scalars.iter() {
                buf.extend_from_slice(&s.to_bytes());
            }
        }
        buf.extend_from_slice(&self.zd.to_bytes());
        for index in self.ring_indices.iter() {
            buf.extend_from_slice(&index.to_le_bytes());
        }
        buf.push(self.slot.as_u8());
        buf
    }

    /// Decode a proof over `ring`; the ring size is not part of the encoding.
    pub fn from_bytes(ring: &RingParameters, bytes: &[u8]) -> Result<Self, ZkpError> {
        check_length(bytes, Self::serialized_len(ring))?;
        let n = ring.bits();
        let mut buf = ReadBuf::from(bytes);

        let cl = buf.get_commitments(n)?;
        let ca = buf.get_commitments(n)?;
        let cb = buf.get_commitments(n)?;
        let cd = buf.get_commitments(n)?;
        let f = buf.get_scalars(n)?;
        let za = buf.get_scalars(n)?;
        let zb = buf.get_scalars(n)?;
        let zd = buf.get_scalar()?;
        let ring_indices = (0..ring.ring_size())
            .map(|_| buf.get_u64_le())
            .collect::<Result<Vec<_>, _>>()?;
        let slot = buf.get_slot()?;
        buf.expect_end()?;

        Ok(OneOfManyProof {
            cl,
            ca,
            cb,
            cd,
            f,
            za,
            zb,
            zd,
            ring_indices,
            slot,
        })
    }
}
