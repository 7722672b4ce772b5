use crate::error::SortError;
use crate::radix_key::RadixKey;
use crate::sort_buffers::{BufferId, SortBuffers};
use crate::sorts::{radix11_sort, radix8_sort};
use bytemuck::Zeroable;

/// Width of each digit. Wider digits mean fewer passes but a larger histogram.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum RadixBits {
    #[default]
    Eight,
    Eleven,
}

impl RadixBits {
    #[inline]
    pub const fn bits(self) -> usize {
        match self {
            RadixBits::Eight => 8,
            RadixBits::Eleven => 11,
        }
    }

    /// Number of passes needed to sort keys of type `K`.
    #[inline]
    pub const fn passes<K>(self) -> usize
    where
        K: RadixKey,
    {
        crate::utils::pass_count::<K>(self.bits())
    }
}

/// Sorts caller-provided buffers with the given digit width.
#[inline]
pub fn radix_sort<K, V>(buffers: &mut SortBuffers<'_, K, V>, radix_bits: RadixBits) -> BufferId
where
    K: RadixKey,
    V: Copy,
{
    match radix_bits {
        RadixBits::Eight => radix8_sort(buffers),
        RadixBits::Eleven => radix11_sort(buffers),
    }
}

/// Sorts a key slice and its value slice in place, allocating the scratch buffers internally.
pub struct RadixSortBuilder<'a, K, V> {
    keys: &'a mut [K],
    values: &'a mut [V],
    radix_bits: RadixBits,
}

impl<'a, K, V> RadixSortBuilder<'a, K, V>
where
    K: RadixKey,
    V: Copy,
{
    pub fn new(keys: &'a mut [K], values: &'a mut [V]) -> Self {
        Self {
            keys,
            values,
            radix_bits: RadixBits::default(),
        }
    }

    pub fn with_radix_bits(mut self, radix_bits: RadixBits) -> Self {
        self.radix_bits = radix_bits;

        self
    }

    pub fn with_eight_bit_digits(self) -> Self {
        self.with_radix_bits(RadixBits::Eight)
    }

    pub fn with_eleven_bit_digits(self) -> Self {
        self.with_radix_bits(RadixBits::Eleven)
    }

    pub fn sort(self) -> Result<(), SortError> {
        if self.values.len() != self.keys.len() {
            return Err(SortError::LengthMismatch {
                buffer: "value",
                expected: self.keys.len(),
                actual: self.values.len(),
            });
        }

        // By definition, this is already sorted
        if self.keys.len() <= 1 {
            return Ok(());
        }

        let mut keys_tmp = vec![K::zeroed(); self.keys.len()];
        let mut values_tmp = self.values.to_vec();

        let result = {
            let mut buffers = SortBuffers::new(
                &mut *self.keys,
                &mut keys_tmp,
                &mut *self.values,
                &mut values_tmp,
            )?;
            radix_sort(&mut buffers, self.radix_bits)
        };

        if result == BufferId::Scratch {
            self.keys.copy_from_slice(&keys_tmp);
            self.values.copy_from_slice(&values_tmp);
        }

        Ok(())
    }
}

pub trait RadixSortPairs<K, V> {
    /// Sorts `self` with 8-bit digits, applying the same permutation to `values`.
    fn radix_sort_pairs(&mut self, values: &mut [V]) -> Result<(), SortError>;

    /// Like `radix_sort_pairs`, but lets you configure the sort before running it.
    fn radix_sort_builder<'a>(&'a mut self, values: &'a mut [V]) -> RadixSortBuilder<'a, K, V>;
}

impl<K, V> RadixSortPairs<K, V> for [K]
where
    K: RadixKey,
    V: Copy,
{
    fn radix_sort_pairs(&mut self, values: &mut [V]) -> Result<(), SortError> {
        RadixSortBuilder::new(self, values).sort()
    }

    fn radix_sort_builder<'a>(&'a mut self, values: &'a mut [V]) -> RadixSortBuilder<'a, K, V> {
        RadixSortBuilder::new(self, values)
    }
}

impl<K, V> RadixSortPairs<K, V> for Vec<K>
where
    K: RadixKey,
    V: Copy,
{
    fn radix_sort_pairs(&mut self, values: &mut [V]) -> Result<(), SortError> {
        RadixSortBuilder::new(self, values).sort()
    }

    fn radix_sort_builder<'a>(&'a mut self, values: &'a mut [V]) -> RadixSortBuilder<'a, K, V> {
        RadixSortBuilder::new(self, values)
    }
}
