use crate::error::ZkpError;
use crate::gang::{GroupElement, Scalar};
use std::ops::{Add, Mul, Sub};

/// Generator set a commitment is defined over. Two commitments (or proofs)
/// over different slots are never interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    SecretKey = 0,
    Value = 1,
    SerialNumberDerivator = 2,
    ShardId = 3,
}

impl Slot {
    pub const COUNT: usize = 4;

    pub const ALL: [Slot; Slot::COUNT] = [
        Slot::SecretKey,
        Slot::Value,
        Slot::SerialNumberDerivator,
        Slot::ShardId,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Slot {
    type Error = ZkpError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0 => Ok(Slot::SecretKey),
            1 => Ok(Slot::Value),
            2 => Ok(Slot::SerialNumberDerivator),
            3 => Ok(Slot::ShardId),
            _ => Err(ZkpError::InvalidSlot(byte)),
        }
    }
}

/// Pedersen commitment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment {
    c: GroupElement,
}

/// Multi generator Pedersen parameters: one value generator per `Slot`, and
/// one generator `h` shared by the randomness of every slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PedersenParams {
    g: [GroupElement; Slot::COUNT],
    h: GroupElement,
}

impl PedersenParams {
    const DOMAIN: &'static [u8] = b"chain-privacy pedersen generator";

    /// Generate the generators from a seed. Every generator is obtained by
    /// hashing the seed with a distinct label, so that no relation between
    /// them is known.
    pub fn generate_from_seed(seed: &[u8]) -> Self {
        let derive = |label: u8| {
            let mut buffer = Vec::with_capacity(Self::DOMAIN.len() + seed.len() + 1);
            buffer.extend_from_slice(Self::DOMAIN);
            buffer.extend_from_slice(seed);
            buffer.push(label);
            GroupElement::from_hash(&buffer)
        };

        let g = [derive(0), derive(1), derive(2), derive(3)];
        let h = derive(Slot::COUNT as u8);
        PedersenParams { g, h }
    }

    pub fn generator(&self, slot: Slot) -> &GroupElement {
        &self.g[slot.index()]
    }

    pub fn randomness_generator(&self) -> &GroupElement {
        &self.h
    }

    /// Return a commitment with the given message, `m`, opening key, `r`, at `slot`
    pub fn commit(&self, m: &Scalar, r: &Scalar, slot: Slot) -> Commitment {
        let c = self.generator(slot) * m + &self.h * r;
        Commitment { c }
    }

    /// Return a commitment with the given opening, `o`, at `slot`
    pub fn commit_with_open(&self, o: &Open, slot: Slot) -> Commitment {
        self.commit(&o.m, &o.r, slot)
    }

    /// Compressed generators, value generators first.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(GroupElement::BYTES_LEN * (Slot::COUNT + 1));
        for generator in self.g.iter().chain(std::iter::once(&self.h)) {
            buf.extend_from_slice(&generator.to_bytes());
        }
        buf
    }
}

/// Opening of a commitment: the committed message and its randomness.
#[derive(Debug, Clone)]
pub struct Open {
    m: Scalar,
    r: Scalar,
}

impl Open {
    pub fn new(m: Scalar, r: Scalar) -> Self {
        Open { m, r }
    }
}

impl Commitment {
    pub const BYTES_LEN: usize = GroupElement::BYTES_LEN;

    /// Verify that the opening `o` corresponds to this commitment at `slot`
    pub fn opens_to(&self, params: &PedersenParams, o: &Open, slot: Slot) -> bool {
        self == &params.commit_with_open(o, slot)
    }

    pub fn zero() -> Self {
        Commitment {
            c: GroupElement::zero(),
        }
    }

    pub fn from_point(c: GroupElement) -> Self {
        Commitment { c }
    }

    pub fn is_on_curve(&self) -> bool {
        self.c.is_on_curve()
    }

    pub fn to_bytes(&self) -> [u8; Self::BYTES_LEN] {
        self.c.to_bytes()
    }

    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        Some(Self {
            c: GroupElement::from_bytes(buf)?,
        })
    }
}

impl<'a, 'b> Add<&'b Commitment> for &'a Commitment {
    type Output = Commitment;
    fn add(self, rhs: &'b Commitment) -> Self::Output {
        let c = &self.c + &rhs.c;
        Commitment { c }
    }
}

std_ops_gen!(Commitment, Add, Commitment, Commitment, add);

impl<'a, 'b> Sub<&'b Commitment> for &'a Commitment {
    type Output = Commitment;
    fn sub(self, rhs: &'b Commitment) -> Self::Output {
        let c = &self.c - &rhs.c;
        Commitment { c }
    }
}

std_ops_gen!(Commitment, Sub, Commitment, Commitment, sub);

impl<'a, 'b> Mul<&'b Scalar> for &'a Commitment {
    type Output = Commitment;
    fn mul(self, rhs: &'b Scalar) -> Self::Output {
        Commitment { c: &self.c * rhs }
    }
}

std_ops_gen!(Commitment, Mul, Scalar, Commitment, mul);

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn params() -> PedersenParams {
        PedersenParams::generate_from_seed(b"commitment tests")
    }

    #[test]
    fn generators_are_distinct() {
        let params = params();
        for (i, a) in Slot::ALL.iter().enumerate() {
            assert_ne!(params.generator(*a), params.randomness_generator());
            for b in Slot::ALL.iter().skip(i + 1) {
                assert_ne!(params.generator(*a), params.generator(*b));
            }
        }
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(params(), params());
        assert_ne!(params(), PedersenParams::generate_from_seed(b"another seed"));
    }

    #[test]
    fn homomorphism() {
        let mut r = ChaCha20Rng::from_seed([1u8; 32]);
        let params = params();
        let (m1, r1) = (Scalar::random(&mut r), Scalar::random(&mut r));
        let (m2, r2) = (Scalar::random(&mut r), Scalar::random(&mut r));

        let sum = params.commit(&m1, &r1, Slot::Value) + params.commit(&m2, &r2, Slot::Value);
        assert_eq!(sum, params.commit(&(m1 + m2), &(r1 + r2), Slot::Value));

        let k = Scalar::from_u64(7);
        let scaled = params.commit(&m1, &r1, Slot::Value) * k;
        assert_eq!(scaled, params.commit(&(m1 * k), &(r1 * k), Slot::Value));
    }

    #[test]
    fn open() {
        let mut r = ChaCha20Rng::from_seed([2u8; 32]);
        let params = params();
        let o = Open::new(Scalar::from_u64(3), Scalar::random(&mut r));
        let c = params.commit_with_open(&o, Slot::SecretKey);
        assert!(c.opens_to(&params, &o, Slot::SecretKey));
        assert!(!c.opens_to(&params, &o, Slot::Value));
        let other = Open::new(Scalar::from_u64(4), Scalar::random(&mut r));
        assert!(!c.opens_to(&params, &other, Slot::SecretKey));
    }

    #[test]
    fn slots_bind_differently() {
        let params = params();
        let m = Scalar::from_u64(5);
        let r = Scalar::from_u64(11);
        assert_ne!(
            params.commit(&m, &r, Slot::Value),
            params.commit(&m, &r, Slot::SerialNumberDerivator)
        );
        // the randomness part is shared by every slot
        assert_eq!(
            params.commit(&Scalar::zero(), &r, Slot::Value),
            params.commit(&Scalar::zero(), &r, Slot::ShardId)
        );
    }

    #[test]
    fn slot_identifiers() {
        for slot in Slot::ALL.iter() {
            assert_eq!(Slot::try_from(slot.as_u8()), Ok(*slot));
        }
        assert_eq!(Slot::try_from(4), Err(ZkpError::InvalidSlot(4)));
    }
}
