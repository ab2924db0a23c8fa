use crate::commitment::{Commitment, PedersenParams};
use crate::gang::{GroupElement, Scalar};
use cryptoxide::blake2b::Blake2b;
use cryptoxide::digest::Digest;

/// Fiat-Shamir transcript. It is bound to the generators of the commitment
/// scheme, then absorbs the public elements in the order they are appended.
#[derive(Clone)]
pub struct ChallengeContext(Blake2b);

impl ChallengeContext {
    pub fn new(params: &PedersenParams) -> Self {
        let mut ctx = Blake2b::new(32);
        ctx.input(&params.to_bytes());
        ChallengeContext(ctx)
    }

    pub fn append_point(&mut self, point: &GroupElement) {
        self.0.input(&point.to_bytes());
    }

    pub fn append_commitment(&mut self, commitment: &Commitment) {
        self.0.input(&commitment.to_bytes());
    }

    pub fn append_scalar(&mut self, scalar: &Scalar) {
        self.0.input(&scalar.to_bytes());
    }

    /// Big endian digest of the transcript, reduced modulo the group order.
    /// The context can keep absorbing afterwards.
    pub fn challenge(&self) -> Scalar {
        Scalar::hash_to_scalar(&self.0)
    }
}

/// Public element absorbed by `challenge`
#[derive(Debug, Clone, Copy)]
pub enum ChallengeInput<'a> {
    Point(&'a GroupElement),
    Commitment(&'a Commitment),
    Scalar(&'a Scalar),
}

/// Challenge over an ordered sequence of points and scalars.
pub fn challenge(params: &PedersenParams, inputs: &[ChallengeInput<'_>]) -> Scalar {
    let mut ctx = ChallengeContext::new(params);
    for input in inputs {
        match input {
            ChallengeInput::Point(p) => ctx.append_point(p),
            ChallengeInput::Commitment(c) => ctx.append_commitment(c),
            ChallengeInput::Scalar(s) => ctx.append_scalar(s),
        }
    }
    ctx.challenge()
}
