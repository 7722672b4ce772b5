use crate::radix_key::{RadixKey, UnsignedBits};
use std::ops::{Index, IndexMut};

/// Digit counts for every pass of a sort, `passes` rows of `1 << RADIX_BITS` counters.
///
/// Rows start out as plain counts and are turned into starting offsets in place by
/// [`Histogram::prefix_sums`]. A histogram lives for a single sort call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram<const RADIX_BITS: usize> {
    passes: usize,
    counts: Vec<usize>,
}

impl<const RADIX_BITS: usize> Histogram<RADIX_BITS> {
    pub const WIDTH: usize = 1 << RADIX_BITS;
    pub const MASK: usize = Self::WIDTH - 1;

    pub fn new(passes: usize) -> Self {
        Self {
            passes,
            counts: vec![0usize; passes * Self::WIDTH],
        }
    }

    #[inline]
    pub fn passes(&self) -> usize {
        self.passes
    }

    #[inline]
    #[cfg(test)]
    pub fn row(&self, pass: usize) -> &[usize] {
        &self.counts[pass * Self::WIDTH..(pass + 1) * Self::WIDTH]
    }

    #[inline]
    pub fn row_mut(&mut self, pass: usize) -> &mut [usize] {
        &mut self.counts[pass * Self::WIDTH..(pass + 1) * Self::WIDTH]
    }

    /// Counts the digits of every pass in a single sweep over `keys`.
    ///
    /// `keys` hold raw bit patterns, each is encoded once and then split into all of its digits.
    pub fn count<K>(&mut self, keys: &[K::Bits])
    where
        K: RadixKey,
    {
        let passes = self.passes;
        let counts = &mut self.counts;
        let chunks = keys.chunks_exact(4);
        let rem = chunks.remainder();

        chunks.for_each(|chunk| {
            let a = K::encode(chunk[0]);
            let b = K::encode(chunk[1]);
            let c = K::encode(chunk[2]);
            let d = K::encode(chunk[3]);

            for pass in 0..passes {
                let shift = pass * RADIX_BITS;
                let row = &mut counts[pass * Self::WIDTH..(pass + 1) * Self::WIDTH];

                row[a.digit(shift, Self::MASK)] += 1;
                row[b.digit(shift, Self::MASK)] += 1;
                row[c.digit(shift, Self::MASK)] += 1;
                row[d.digit(shift, Self::MASK)] += 1;
            }
        });

        rem.iter().for_each(|k| {
            let k = K::encode(*k);

            for pass in 0..passes {
                let shift = pass * RADIX_BITS;
                counts[pass * Self::WIDTH + k.digit(shift, Self::MASK)] += 1;
            }
        });
    }

    /// Converts every row into exclusive prefix sums, so `self[(pass, digit)]` becomes the first
    /// write position of `digit` in `pass`.
    ///
    /// All rows advance together one digit column at a time.
    pub fn prefix_sums(&mut self) {
        let mut running_totals = vec![0usize; self.passes];

        for digit in 0..Self::WIDTH {
            for (pass, total) in running_totals.iter_mut().enumerate() {
                let count = &mut self.counts[pass * Self::WIDTH + digit];
                let next = *total + *count;
                *count = *total;
                *total = next;
            }
        }
    }
}

impl<const RADIX_BITS: usize> Index<(usize, usize)> for Histogram<RADIX_BITS> {
    type Output = usize;

    #[inline(always)]
    fn index(&self, (pass, digit): (usize, usize)) -> &usize {
        &self.counts[pass * Self::WIDTH + digit]
    }
}

impl<const RADIX_BITS: usize> IndexMut<(usize, usize)> for Histogram<RADIX_BITS> {
    #[inline(always)]
    fn index_mut(&mut self, (pass, digit): (usize, usize)) -> &mut usize {
        &mut self.counts[pass * Self::WIDTH + digit]
    }
}
