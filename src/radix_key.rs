use bytemuck::Pod;
use std::fmt::Debug;

/// Fixed-width unsigned integer that a [`RadixKey`] is sorted as.
///
/// Digits are extracted from the least significant end. `shift` is always below `BITS`, so bits
/// past the natural width never contribute to a digit.
pub trait UnsignedBits: Pod + Ord + Debug {
    const BITS: usize;

    fn digit(self, shift: usize, mask: usize) -> usize;
}

/// A key that can be radix sorted.
///
/// `encode` maps the raw bit pattern of the key onto an unsigned integer whose natural order
/// matches the order of the key. `decode` is its exact inverse. Both operate on the bit pattern
/// only, so a key buffer can be viewed as a `Bits` buffer for the duration of a sort and hold
/// encoded values in between the first and last pass.
///
/// For unsigned integers both are the identity. For floats this is the classic "float flip":
/// negative values have every bit inverted, positive values only the sign bit. That gives a total
/// order over finite values (with `-0.0` before `0.0`); where NaNs end up is unspecified.
pub trait RadixKey: Pod {
    type Bits: UnsignedBits;

    fn encode(bits: Self::Bits) -> Self::Bits;

    fn decode(bits: Self::Bits) -> Self::Bits;

    #[inline]
    fn to_bits(self) -> Self::Bits {
        bytemuck::cast(self)
    }

    #[inline]
    fn from_bits(bits: Self::Bits) -> Self {
        bytemuck::cast(bits)
    }

    /// The key as an unsigned integer in sort order.
    #[inline]
    fn sort_bits(self) -> Self::Bits {
        Self::encode(self.to_bits())
    }
}
