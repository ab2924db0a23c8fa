//! Fixed width wire encoding of the proof components.
use crate::commitment::{Commitment, Slot};
use crate::error::ZkpError;
use crate::gang::Scalar;

pub const POINT_BYTES_LEN: usize = Commitment::BYTES_LEN;
pub const SCALAR_BYTES_LEN: usize = Scalar::BYTES_LEN;
pub const RING_INDEX_BYTES_LEN: usize = 8;
pub const SLOT_BYTES_LEN: usize = 1;

/// Fail with `SerializationLengthMismatch` unless `bytes` is exactly `expected` long.
pub fn check_length(bytes: &[u8], expected: usize) -> Result<(), ZkpError> {
    if bytes.len() != expected {
        return Err(ZkpError::SerializationLengthMismatch {
            expected,
            got: bytes.len(),
        });
    }
    Ok(())
}

/// Cursor over a proof encoding
pub struct ReadBuf<'a> {
    offset: usize,
    data: &'a [u8],
}

impl<'a> ReadBuf<'a> {
    pub fn from(slice: &'a [u8]) -> Self {
        ReadBuf {
            offset: 0,
            data: slice,
        }
    }

    fn left(&self) -> usize {
        self.data.len() - self.offset
    }

    fn get_slice(&mut self, sz: usize) -> Result<&'a [u8], ZkpError> {
        if self.left() < sz {
            return Err(ZkpError::SerializationLengthMismatch {
                expected: self.offset + sz,
                got: self.data.len(),
            });
        }
        let s = &self.data[self.offset..self.offset + sz];
        self.offset += sz;
        Ok(s)
    }

    /// Check if everything has been consumed
    pub fn expect_end(&self) -> Result<(), ZkpError> {
        if self.left() == 0 {
            Ok(())
        } else {
            Err(ZkpError::SerializationLengthMismatch {
                expected: self.offset,
                got: self.data.len(),
            })
        }
    }

    pub fn get_commitment(&mut self) -> Result<Commitment, ZkpError> {
        let bytes = self.get_slice(POINT_BYTES_LEN)?;
        Commitment::from_bytes(bytes).ok_or(ZkpError::PointDecompressionFailure)
    }

    pub fn get_commitments(&mut self, count: usize) -> Result<Vec<Commitment>, ZkpError> {
        (0..count).map(|_| self.get_commitment()).collect()
    }

    pub fn get_scalar(&mut self) -> Result<Scalar, ZkpError> {
        let bytes = self.get_slice(SCALAR_BYTES_LEN)?;
        Scalar::from_bytes(bytes).ok_or(ZkpError::ScalarOutOfRange)
    }

    pub fn get_scalars(&mut self, count: usize) -> Result<Vec<Scalar>, ZkpError> {
        (0..count).map(|_| self.get_scalar()).collect()
    }

    /// Ring indices are little endian
    pub fn get_u64_le(&mut self) -> Result<u64, ZkpError> {
        let bytes = self.get_slice(RING_INDEX_BYTES_LEN)?;
        let buf: [u8; RING_INDEX_BYTES_LEN] = bytes
            .try_into()
            .map_err(|_| ZkpError::SerializationLengthMismatch {
                expected: RING_INDEX_BYTES_LEN,
                got: bytes.len(),
            })?;
        Ok(u64::from_le_bytes(buf))
    }

    pub fn get_slot(&mut self) -> Result<Slot, ZkpError> {
        let byte = self.get_slice(SLOT_BYTES_LEN)?[0];
        Slot::try_from(byte)
    }
}
