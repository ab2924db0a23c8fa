mod challenge_context;
mod one_of_many;
mod zero_commitment;
mod zero_or_one;

pub use self::challenge_context::{challenge, ChallengeContext, ChallengeInput};
pub use self::one_of_many::{OneOfManyProof, OneOfManyWitness};
pub use self::zero_commitment::{ZeroCommitmentProof, ZeroCommitmentWitness};
pub use self::zero_or_one::{BinaryProof, BinaryWitness};
