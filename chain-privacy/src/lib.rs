#[macro_use]
mod macros;
pub mod commitment;
pub mod encoding;
mod error;
mod gang;
pub mod math;
pub mod parameters;
pub mod zkps;

pub use crate::{
    commitment::{Commitment, Open, PedersenParams, Slot},
    error::{FailedCheck, ZkpError},
    gang::{GroupElement, Scalar},
    parameters::{Crs, RingParameters, MAX_RING_SIZE_EXP},
    zkps::{
        BinaryProof, BinaryWitness, OneOfManyProof, OneOfManyWitness, ZeroCommitmentProof,
        ZeroCommitmentWitness,
    },
};
