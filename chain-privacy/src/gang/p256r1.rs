use cryptoxide::blake2b::Blake2b;
use cryptoxide::digest::Digest;
use p256::elliptic_curve::group::Group;
use p256::elliptic_curve::ops::Reduce;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::elliptic_curve::{Field, PrimeField};
use p256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint as Point, Scalar as IScalar, U256};
use rand_core::{CryptoRng, RngCore};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar(IScalar);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupElement(Point);

impl Hash for GroupElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.to_bytes())
    }
}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.to_bytes())
    }
}

impl GroupElement {
    /// Size of the byte representation of `GroupElement`. We always encode the
    /// SEC1 compressed value.
    pub const BYTES_LEN: usize = 33;

    /// Serialized GroupElement::zero
    const BYTES_ZERO: [u8; Self::BYTES_LEN] = [0; Self::BYTES_LEN];

    /// Point from hash. The digest is used as an x coordinate candidate, and
    /// a counter is absorbed until the candidate lands on the curve.
    pub fn from_hash(buffer: &[u8]) -> Self {
        let mut result = [0u8; 32];
        let mut hash = Blake2b::new(32);
        hash.input(buffer);
        let mut i = 0u32;
        loop {
            hash.clone().result(&mut result);

            let mut compressed = [0u8; Self::BYTES_LEN];
            compressed[0] = 0x02;
            compressed[1..].copy_from_slice(&result);
            if let Some(point) = Self::from_bytes(&compressed) {
                break point;
            }
            hash.input(&i.to_be_bytes());
            i += 1;
        }
    }

    pub fn generator() -> Self {
        GroupElement(Point::GENERATOR)
    }

    pub fn zero() -> Self {
        GroupElement(Point::IDENTITY)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_identity().into()
    }

    /// The point at infinity has no affine coordinates, every other value of
    /// this type satisfies the curve equation by construction.
    pub fn is_on_curve(&self) -> bool {
        !self.is_zero()
    }

    pub fn to_bytes(&self) -> [u8; Self::BYTES_LEN] {
        if self.is_zero() {
            return Self::BYTES_ZERO;
        }
        let encoded = self.0.to_affine().to_encoded_point(true);
        let mut bytes = [0u8; Self::BYTES_LEN];
        bytes.copy_from_slice(encoded.as_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Self::BYTES_LEN {
            return None;
        }
        if bytes.iter().all(|b| *b == 0) {
            return Some(Self::zero());
        }
        if bytes[0] != 0x02 && bytes[0] != 0x03 {
            return None;
        }
        let encoded = EncodedPoint::from_bytes(bytes).ok()?;
        let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
        affine.map(|p| GroupElement(Point::from(p)))
    }
}

impl Scalar {
    pub const BYTES_LEN: usize = 32;

    /// additive identity
    pub fn zero() -> Self {
        Scalar(IScalar::ZERO)
    }

    /// multiplicative identity
    pub fn one() -> Self {
        Scalar(IScalar::ONE)
    }

    pub fn negate(&self) -> Self {
        Scalar(-self.0)
    }

    /// Big endian, left padded to `BYTES_LEN`.
    pub fn to_bytes(&self) -> [u8; Self::BYTES_LEN] {
        let mut bytes = [0u8; Self::BYTES_LEN];
        bytes.copy_from_slice(&self.0.to_repr());
        bytes
    }

    /// Only canonical encodings (strictly lower than the group order) are accepted.
    pub fn from_bytes(slice: &[u8]) -> Option<Self> {
        if slice.len() != Self::BYTES_LEN {
            return None;
        }
        let repr = *FieldBytes::from_slice(slice);
        Option::<IScalar>::from(IScalar::from_repr(repr)).map(Scalar)
    }

    /// Finalise a copy of a 32 bytes blake2b context, and reduce the big endian
    /// digest modulo the group order.
    pub fn hash_to_scalar(ctx: &Blake2b) -> Self {
        let mut h = [0u8; 32];
        ctx.clone().result(&mut h);
        Scalar(<IScalar as Reduce<U256>>::reduce_bytes(FieldBytes::from_slice(&h)))
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Scalar(IScalar::random(rng))
    }

    /// Same as `random`, but surfaces a failing source instead of panicking.
    pub fn try_random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, rand_core::Error> {
        let mut r = [0u8; Self::BYTES_LEN];
        loop {
            rng.try_fill_bytes(&mut r)?;

            if let Some(s) = Self::from_bytes(&r) {
                break Ok(s);
            }
        }
    }

    pub fn from_u64(v: u64) -> Self {
        Scalar(IScalar::from(v))
    }

    pub fn power(&self, n: usize) -> Self {
        Scalar(self.0.pow_vartime(&[n as u64]))
    }

    pub fn sum<I>(mut i: I) -> Option<Self>
    where
        I: Iterator<Item = Self>,
    {
        let mut sum = i.next()?;
        for v in i {
            sum = sum + v;
        }
        Some(sum)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        if b {
            Scalar::one()
        } else {
            Scalar::zero()
        }
    }
}

//////////
// FE + FE
//////////

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn add(self, other: &'b Scalar) -> Scalar {
        Scalar(self.0 + other.0)
    }
}

std_ops_gen!(Scalar, Add, Scalar, Scalar, add);

//////////
// FE - FE
//////////

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn sub(self, other: &'b Scalar) -> Scalar {
        Scalar(self.0 - other.0)
    }
}

std_ops_gen!(Scalar, Sub, Scalar, Scalar, sub);

//////////
// FE * FE
//////////

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;

    fn mul(self, other: &'b Scalar) -> Scalar {
        Scalar(self.0 * other.0)
    }
}

std_ops_gen!(Scalar, Mul, Scalar, Scalar, mul);

//////////
// FE * GE
//////////

impl<'a, 'b> Mul<&'b GroupElement> for &'a Scalar {
    type Output = GroupElement;

    fn mul(self, other: &'b GroupElement) -> GroupElement {
        GroupElement(other.0 * self.0)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a GroupElement {
    type Output = GroupElement;

    fn mul(self, other: &'b Scalar) -> GroupElement {
        GroupElement(self.0 * other.0)
    }
}

std_ops_gen!(Scalar, Mul, GroupElement, GroupElement, mul);

std_ops_gen!(GroupElement, Mul, Scalar, GroupElement, mul);

//////////
// GE + GE
//////////

impl<'a, 'b> Add<&'b GroupElement> for &'a GroupElement {
    type Output = GroupElement;

    fn add(self, other: &'b GroupElement) -> GroupElement {
        GroupElement(self.0 + other.0)
    }
}

std_ops_gen!(GroupElement, Add, GroupElement, GroupElement, add);

//////////
// GE - GE
//////////

impl<'a, 'b> Sub<&'b GroupElement> for &'a GroupElement {
    type Output = GroupElement;

    fn sub(self, other: &'b GroupElement) -> GroupElement {
        GroupElement(self.0 - other.0)
    }
}

std_ops_gen!(GroupElement, Sub, GroupElement, GroupElement, sub);

#[cfg(test)]
mod test {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn from_hash() {
        let element = GroupElement::from_hash(&[1u8]);
        let element2 = GroupElement::from_hash(&[1u8]);
        let other = GroupElement::from_hash(&[2u8]);

        assert_eq!(element, element2);
        assert_ne!(element, other);
        assert!(element.is_on_curve());
    }

    #[test]
    fn point_encoding() {
        let mut r = ChaCha20Rng::from_seed([0u8; 32]);
        let point = GroupElement::generator() * Scalar::random(&mut r);
        let bytes = point.to_bytes();

        assert!(bytes[0] == 0x02 || bytes[0] == 0x03);
        assert_eq!(GroupElement::from_bytes(&bytes), Some(point));
        assert_eq!(GroupElement::from_bytes(&bytes[1..]), None);
    }

    #[test]
    fn zero_encoding() {
        let bytes = GroupElement::zero().to_bytes();
        assert_eq!(bytes, [0u8; GroupElement::BYTES_LEN]);
        assert_eq!(GroupElement::from_bytes(&bytes), Some(GroupElement::zero()));
        assert!(!GroupElement::zero().is_on_curve());
    }

    #[test]
    fn uncompressed_tag_rejected() {
        let mut bytes = GroupElement::generator().to_bytes();
        bytes[0] = 0x04;
        assert_eq!(GroupElement::from_bytes(&bytes), None);
    }

    #[test]
    fn scalar_encoding_is_big_endian() {
        let bytes = Scalar::from_u64(0x0102).to_bytes();
        assert_eq!(bytes[30..], [0x01, 0x02]);
        assert!(bytes[..30].iter().all(|b| *b == 0));
        assert_eq!(Scalar::from_bytes(&bytes), Some(Scalar::from_u64(0x0102)));
    }

    #[test]
    fn non_canonical_scalar_rejected() {
        assert_eq!(Scalar::from_bytes(&[0xff; Scalar::BYTES_LEN]), None);
        assert_eq!(Scalar::from_bytes(&[0x00; Scalar::BYTES_LEN - 1]), None);
    }

    #[test]
    fn power() {
        let x = Scalar::from_u64(3);
        assert_eq!(x.power(0), Scalar::one());
        assert_eq!(x.power(4), Scalar::from_u64(81));
    }
}
