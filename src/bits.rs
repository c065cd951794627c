/*
    Bit-level serialization
*/

use bitvec::field::BitField;
use bitvec::prelude::Lsb0;

use crate::error::BitsError;
use crate::fixed::{Fixed, FixedRaw};
use crate::{Clamped, ClampedMath};

/// The bit storage used by the codec.
pub type BitVec = bitvec::vec::BitVec<u32, Lsb0>;

/// A value with a fixed-width binary encoding.
///
/// Every encoding fits in 128 bits and is written least significant
/// bit first.
pub trait BitCodec: Sized {
    /// Number of bits in the encoding.
    const WIDTH: usize;

    /// Returns the encoding in the low `WIDTH` bits.
    fn encode(&self) -> u128;

    /// Rebuilds a value from the low `WIDTH` bits of `bits`.
    fn decode(bits: u128) -> Self;
}

macro_rules! impl_bit_codec_int {
    ($($t:ty, $u:ty);*) => {$(
        impl BitCodec for $t {
            const WIDTH: usize = <$t>::BITS as usize;

            #[inline]
            fn encode(&self) -> u128 {
                *self as $u as u128
            }

            #[inline]
            fn decode(bits: u128) -> Self {
                bits as $u as $t
            }
        }
    )*};
}

macro_rules! impl_bit_codec_float {
    ($($t:ty, $u:ty);*) => {$(
        impl BitCodec for $t {
            const WIDTH: usize = <$u>::BITS as usize;

            #[inline]
            fn encode(&self) -> u128 {
                self.to_bits() as u128
            }

            #[inline]
            fn decode(bits: u128) -> Self {
                <$t>::from_bits(bits as $u)
            }
        }
    )*};
}

impl_bit_codec_int!(i8, u8; i16, u16; i32, u32; i64, u64; i128, u128);
impl_bit_codec_int!(u8, u8; u16, u16; u32, u32; u64, u64; u128, u128);
impl_bit_codec_float!(f32, u32; f64, u64);

// Decoding normalizes, so a NaN or infinite float in the stream
// still yields a finite `Clamped`.
impl<T: ClampedMath + BitCodec> BitCodec for Clamped<T> {
    const WIDTH: usize = T::WIDTH;

    #[inline]
    fn encode(&self) -> u128 {
        self.get().encode()
    }

    #[inline]
    fn decode(bits: u128) -> Self {
        Clamped::new(T::decode(bits))
    }
}

impl<I: FixedRaw + BitCodec, const SCALE: u32> BitCodec for Fixed<I, SCALE> {
    const WIDTH: usize = I::WIDTH;

    #[inline]
    fn encode(&self) -> u128 {
        self.raw().encode()
    }

    #[inline]
    fn decode(bits: u128) -> Self {
        Fixed::from_raw(I::decode(bits))
    }
}

/// Appends values to a growing bit stream.
#[derive(Clone, Debug, Default)]
pub struct BitWriter {
    bits: BitVec,
}

impl BitWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the `WIDTH`-bit encoding of `value`.
    pub fn write<T: BitCodec>(&mut self, value: T) {
        let encoded = value.encode();
        for i in 0..T::WIDTH {
            self.bits.push((encoded >> i) & 1 == 1);
        }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Consumes the writer, returning the bit stream.
    pub fn into_bits(self) -> BitVec {
        self.bits
    }

    /// Packs the stream into bytes, least significant bit first.
    /// The final byte is padded with zeros.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| chunk.load_le::<u8>())
            .collect()
    }
}

/// Reads values back out of a bit stream.
#[derive(Clone, Debug)]
pub struct BitReader {
    bits: BitVec,
    pos: usize,
}

impl BitReader {
    /// Creates a reader positioned at the start of `bits`.
    pub fn new(bits: BitVec) -> Self {
        Self { bits, pos: 0 }
    }

    /// Creates a reader over bytes packed by [`BitWriter::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = BitVec::with_capacity(bytes.len() * 8);
        for byte in bytes {
            for i in 0..8 {
                bits.push((byte >> i) & 1 == 1);
            }
        }
        Self::new(bits)
    }

    /// Number of bits left to read.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }

    /// Reads the next `WIDTH` bits as a `T`.
    pub fn read<T: BitCodec>(&mut self) -> Result<T, BitsError> {
        let remaining = self.remaining();
        if remaining < T::WIDTH {
            return Err(BitsError::UnexpectedEnd {
                needed: T::WIDTH,
                remaining,
            });
        }

        let mut encoded = 0u128;
        for (i, bit) in self.bits[self.pos..self.pos + T::WIDTH].iter().enumerate() {
            if *bit {
                encoded |= 1 << i;
            }
        }
        self.pos += T::WIDTH;
        Ok(T::decode(encoded))
    }
}
