use crate::radix_key::{RadixKey, UnsignedBits};

#[inline]
pub const fn cdiv(a: usize, b: usize) -> usize {
    (a + b - 1) / b
}

/// Number of digits of `radix_bits` width needed to cover every bit of `K`.
#[inline]
pub const fn pass_count<K>(radix_bits: usize) -> usize
where
    K: RadixKey,
{
    cdiv(<K::Bits as UnsignedBits>::BITS, radix_bits)
}
