use crate::radix_key::{RadixKey, UnsignedBits};

impl UnsignedBits for u32 {
    const BITS: usize = 32;

    #[inline(always)]
    fn digit(self, shift: usize, mask: usize) -> usize {
        (self >> shift) as usize & mask
    }
}

impl UnsignedBits for u64 {
    const BITS: usize = 64;

    #[inline(always)]
    fn digit(self, shift: usize, mask: usize) -> usize {
        // Truncation is fine, mask is never wider than a digit
        (self >> shift) as usize & mask
    }
}

impl RadixKey for u32 {
    type Bits = u32;

    #[inline(always)]
    fn encode(bits: u32) -> u32 {
        bits
    }

    #[inline(always)]
    fn decode(bits: u32) -> u32 {
        bits
    }
}

impl RadixKey for u64 {
    type Bits = u64;

    #[inline(always)]
    fn encode(bits: u64) -> u64 {
        bits
    }

    #[inline(always)]
    fn decode(bits: u64) -> u64 {
        bits
    }
}

impl RadixKey for f32 {
    type Bits = u32;

    #[inline(always)]
    fn encode(bits: u32) -> u32 {
        // All ones when the sign is set, otherwise only the sign bit
        let mask = 0u32.wrapping_sub(bits >> 31) | 0x8000_0000;
        bits ^ mask
    }

    #[inline(always)]
    fn decode(bits: u32) -> u32 {
        let mask = (bits >> 31).wrapping_sub(1) | 0x8000_0000;
        bits ^ mask
    }
}

impl RadixKey for f64 {
    type Bits = u64;

    #[inline(always)]
    fn encode(bits: u64) -> u64 {
        let mask = 0u64.wrapping_sub(bits >> 63) | 0x8000_0000_0000_0000;
        bits ^ mask
    }

    #[inline(always)]
    fn decode(bits: u64) -> u64 {
        let mask = (bits >> 63).wrapping_sub(1) | 0x8000_0000_0000_0000;
        bits ^ mask
    }
}
