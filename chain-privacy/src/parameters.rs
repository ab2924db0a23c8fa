//! Public parameters shared by provers and verifiers.
use crate::commitment::PedersenParams;
use crate::error::ZkpError;

/// Largest supported exponent of the anonymity ring size.
pub const MAX_RING_SIZE_EXP: usize = 16;

/// Size of the anonymity ring of one-of-many proofs, stored as the exponent
/// `n` of `N = 2^n`. Prover and verifier must read the ring size from the same
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct RingParameters {
    ring_size_exp: usize,
}

impl RingParameters {
    pub const DEFAULT_RING_SIZE_EXP: usize = 3;

    pub fn new(ring_size_exp: usize) -> Result<Self, ZkpError> {
        if ring_size_exp == 0 || ring_size_exp > MAX_RING_SIZE_EXP {
            return Err(ZkpError::InvalidRingParameters(ring_size_exp));
        }
        Ok(RingParameters { ring_size_exp })
    }

    /// Number of bits `n` of a ring index.
    pub fn bits(&self) -> usize {
        self.ring_size_exp
    }

    /// Number of commitments `N` of a ring.
    pub fn ring_size(&self) -> usize {
        1 << self.ring_size_exp
    }
}

impl Default for RingParameters {
    fn default() -> Self {
        RingParameters {
            ring_size_exp: Self::DEFAULT_RING_SIZE_EXP,
        }
    }
}

impl TryFrom<usize> for RingParameters {
    type Error = ZkpError;

    fn try_from(ring_size_exp: usize) -> Result<Self, Self::Error> {
        Self::new(ring_size_exp)
    }
}

impl From<RingParameters> for usize {
    fn from(ring: RingParameters) -> usize {
        ring.ring_size_exp
    }
}

/// Common reference string of the proof system: the commitment generators and
/// the ring size. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crs {
    pedersen: PedersenParams,
    ring: RingParameters,
}

lazy_static::lazy_static! {
    static ref GLOBAL_CRS: Crs = Crs::new(Crs::DEFAULT_SEED, RingParameters::default());
}

impl Crs {
    pub const DEFAULT_SEED: &'static [u8] = b"chain-privacy default crs";

    pub fn new(seed: &[u8], ring: RingParameters) -> Self {
        Crs {
            pedersen: PedersenParams::generate_from_seed(seed),
            ring,
        }
    }

    /// Process wide parameters built from `DEFAULT_SEED` with the default ring.
    pub fn global() -> &'static Crs {
        &GLOBAL_CRS
    }

    pub fn pedersen(&self) -> &PedersenParams {
        &self.pedersen
    }

    pub fn ring(&self) -> &RingParameters {
        &self.ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_bounds() {
        assert_eq!(RingParameters::new(0), Err(ZkpError::InvalidRingParameters(0)));
        assert_eq!(
            RingParameters::new(MAX_RING_SIZE_EXP + 1),
            Err(ZkpError::InvalidRingParameters(MAX_RING_SIZE_EXP + 1))
        );
        let ring = RingParameters::new(MAX_RING_SIZE_EXP).unwrap();
        assert_eq!(ring.ring_size(), 1 << MAX_RING_SIZE_EXP);
        assert_eq!(RingParameters::try_from(1).unwrap().ring_size(), 2);
    }

    #[test]
    fn default_ring() {
        let ring = RingParameters::default();
        assert_eq!(ring.bits(), 3);
        assert_eq!(ring.ring_size(), 8);
        assert_eq!(usize::from(ring), 3);
    }

    #[test]
    fn global_crs() {
        assert_eq!(Crs::global(), Crs::global());
        assert_eq!(
            Crs::global(),
            &Crs::new(Crs::DEFAULT_SEED, RingParameters::default())
        );
        assert_eq!(Crs::global().ring().ring_size(), 8);
    }
}
