//! `lsb_sort` drives a complete least-significant-digit radix sort of a key buffer and its
//! value buffer.
//!
//! The histograms of every digit are built in one sweep, turned into offsets, and then one
//! [`out_of_place_pass`] runs per digit, ping-ponging between the primary and scratch buffers.
//! Pass `n` reads `BufferId::for_pass(n)` and writes the other one, so the buffer holding the
//! result is fixed by the parity of the pass count:
//!
//! | key       | 8-bit digits        | 11-bit digits       |
//! |-----------|---------------------|---------------------|
//! | u32 / f32 | 4 passes, `Primary` | 3 passes, `Scratch` |
//! | u64 / f64 | 8 passes, `Primary` | 6 passes, `Primary` |
//!
//! Keys are processed as their raw bit patterns. The first pass encodes keys as it scatters them
//! and the last pass decodes them again, so intermediate buffers hold encoded keys and the result
//! buffer holds the original bit patterns.

use crate::counts::Histogram;
use crate::radix_key::RadixKey;
use crate::sort_buffers::{BufferId, SortBuffers};
use crate::sorts::out_of_place_sort::out_of_place_pass;
use crate::utils::pass_count;
use std::convert::identity;

pub fn lsb_sort<K, V, const RADIX_BITS: usize>(buffers: &mut SortBuffers<'_, K, V>) -> BufferId
where
    K: RadixKey,
    V: Copy,
{
    if buffers.is_empty() {
        return BufferId::Primary;
    }

    let passes = pass_count::<K>(RADIX_BITS);
    let last = passes - 1;
    let mut histogram = Histogram::<RADIX_BITS>::new(passes);

    #[cfg(feature = "work_profiles")]
    println!("HISTOGRAM len={} passes={}", buffers.len(), passes);

    histogram.count::<K>(bytemuck::cast_slice(buffers.keys(BufferId::Primary)));

    #[cfg(feature = "work_profiles")]
    println!("PREFIX_SUM width={}", Histogram::<RADIX_BITS>::WIDTH);

    histogram.prefix_sums();

    for pass in 0..histogram.passes() {
        let src = BufferId::for_pass(pass);
        let shift = pass * RADIX_BITS;

        #[cfg(feature = "work_profiles")]
        println!("({}) PASS shift={} src={:?}", pass, shift, src);

        let bufs = buffers.pass_buffers(src);
        let src_keys: &[K::Bits] = bytemuck::cast_slice(bufs.src_keys);
        let dst_keys: &mut [K::Bits] = bytemuck::cast_slice_mut(bufs.dst_keys);
        let offsets = histogram.row_mut(pass);
        let mask = Histogram::<RADIX_BITS>::MASK;

        match (pass == 0, pass == last) {
            (true, true) => out_of_place_pass(
                src_keys,
                dst_keys,
                bufs.src_values,
                bufs.dst_values,
                offsets,
                shift,
                mask,
                K::encode,
                K::decode,
            ),
            (true, false) => out_of_place_pass(
                src_keys,
                dst_keys,
                bufs.src_values,
                bufs.dst_values,
                offsets,
                shift,
                mask,
                K::encode,
                identity,
            ),
            (false, true) => out_of_place_pass(
                src_keys,
                dst_keys,
                bufs.src_values,
                bufs.dst_values,
                offsets,
                shift,
                mask,
                identity,
                K::decode,
            ),
            (false, false) => out_of_place_pass(
                src_keys,
                dst_keys,
                bufs.src_values,
                bufs.dst_values,
                offsets,
                shift,
                mask,
                identity,
                identity,
            ),
        }
    }

    BufferId::after_passes(passes)
}

/// Sorts with 8-bit digits and returns the buffer that holds the sorted keys and values.
///
/// ```
/// use lsdr::{radix8_sort, BufferId, SortBuffers};
///
/// let mut keys = [5u32, 3, 3, 1];
/// let mut keys_tmp = [0u32; 4];
/// let mut values = [0u32, 1, 2, 3];
/// let mut values_tmp = [0u32; 4];
///
/// let mut buffers = SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp)?;
/// let result = radix8_sort(&mut buffers);
///
/// assert_eq!(result, BufferId::Primary);
/// assert_eq!(buffers.keys(result), &[1, 3, 3, 5]);
/// assert_eq!(buffers.values(result), &[3, 1, 2, 0]);
/// # Ok::<(), lsdr::SortError>(())
/// ```
#[inline]
pub fn radix8_sort<K, V>(buffers: &mut SortBuffers<'_, K, V>) -> BufferId
where
    K: RadixKey,
    V: Copy,
{
    lsb_sort::<K, V, 8>(buffers)
}

/// Sorts with 11-bit digits and returns the buffer that holds the sorted keys and values.
///
/// Fewer passes than [`radix8_sort`] at the cost of a larger histogram.
#[inline]
pub fn radix11_sort<K, V>(buffers: &mut SortBuffers<'_, K, V>) -> BufferId
where
    K: RadixKey,
    V: Copy,
{
    lsb_sort::<K, V, 11>(buffers)
}

#[cfg(test)]
mod tests {
    use crate::sorts::lsb_sort::{radix11_sort, radix8_sort};
    use crate::test_utils::{sort_comparison_suite, validate_u32_patterns};
    use crate::{BufferId, SortBuffers};

    #[test]
    pub fn test_u32() {
        sort_comparison_suite::<u32, _>(1, |b| radix8_sort(b));
        sort_comparison_suite::<u32, _>(2, |b| radix11_sort(b));
    }

    #[test]
    pub fn test_u64() {
        sort_comparison_suite::<u64, _>(3, |b| radix8_sort(b));
        sort_comparison_suite::<u64, _>(4, |b| radix11_sort(b));
    }

    #[test]
    pub fn test_f32() {
        sort_comparison_suite::<f32, _>(5, |b| radix8_sort(b));
        sort_comparison_suite::<f32, _>(6, |b| radix11_sort(b));
    }

    #[test]
    pub fn test_f64() {
        sort_comparison_suite::<f64, _>(7, |b| radix8_sort(b));
        sort_comparison_suite::<f64, _>(8, |b| radix11_sort(b));
    }

    #[test]
    pub fn test_u32_patterns() {
        validate_u32_patterns(|b| radix8_sort(b));
        validate_u32_patterns(|b| radix11_sort(b));
    }

    #[test]
    pub fn test_result_parity() {
        let mut keys = [9u64, 2, 7];
        let mut keys_tmp = [0u64; 3];
        let mut values = [0u16, 1, 2];
        let mut values_tmp = [0u16; 3];
        let mut buffers =
            SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

        assert_eq!(radix11_sort(&mut buffers), BufferId::Primary);
        assert_eq!(buffers.keys(BufferId::Primary), &[2, 7, 9]);

        let mut keys = [9u32, 2, 7];
        let mut keys_tmp = [0u32; 3];
        let mut values = [0u16, 1, 2];
        let mut values_tmp = [0u16; 3];
        let mut buffers =
            SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

        assert_eq!(radix11_sort(&mut buffers), BufferId::Scratch);
        assert_eq!(buffers.keys(BufferId::Scratch), &[2, 7, 9]);
        assert_eq!(buffers.values(BufferId::Scratch), &[1, 2, 0]);
    }

    #[test]
    pub fn test_f32_two_keys() {
        let mut keys = [1.0f32, -2.0];
        let mut keys_tmp = [0f32; 2];
        let mut values = [0u32, 1];
        let mut values_tmp = [0u32; 2];
        let mut buffers =
            SortBuffers::new(&mut keys, &mut keys_tmp, &mut values, &mut values_tmp).unwrap();

        let result = radix11_sort(&mut buffers);
        assert_eq!(result, BufferId::Scratch);
        assert_eq!(buffers.keys(result), &[-2.0, 1.0]);
        assert_eq!(buffers.values(result), &[1, 0]);
    }
}
