//! `out_of_place_pass` is a single stable counting-sort pass over one digit, moving keys and their
//! values from a source buffer pair into a destination buffer pair.
//!
//! Items are visited in input order and each write offset only ever grows, so items that share a
//! digit keep their relative order. That is what lets a sequence of passes from the least to the
//! most significant digit produce a fully sorted, stable result.
//!
//! The `read` and `write` hooks let the first and last pass of a float sort fold the key codec
//! into the scatter instead of spending an extra sweep on it. Every other pass uses
//! `std::convert::identity` for both, which compiles away.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * lsb-first
//!  * stable

use crate::radix_key::UnsignedBits;

#[inline]
#[allow(clippy::too_many_arguments)]
pub fn out_of_place_pass<B, V, R, W>(
    src_keys: &[B],
    dst_keys: &mut [B],
    src_values: &[V],
    dst_values: &mut [V],
    offsets: &mut [usize],
    shift: usize,
    mask: usize,
    read: R,
    write: W,
) where
    B: UnsignedBits,
    V: Copy,
    R: Fn(B) -> B,
    W: Fn(B) -> B,
{
    debug_assert_eq!(src_keys.len(), dst_keys.len());
    debug_assert_eq!(src_keys.len(), src_values.len());
    debug_assert_eq!(src_keys.len(), dst_values.len());
    debug_assert_eq!(offsets.len(), mask + 1);

    let key_chunks = src_keys.chunks_exact(4);
    let value_chunks = src_values.chunks_exact(4);
    let key_rem = key_chunks.remainder();
    let value_rem = value_chunks.remainder();

    key_chunks.zip(value_chunks).for_each(|(keys, values)| {
        let k0 = read(keys[0]);
        let k1 = read(keys[1]);
        let k2 = read(keys[2]);
        let k3 = read(keys[3]);

        let i = offsets[k0.digit(shift, mask)];
        offsets[k0.digit(shift, mask)] = i + 1;
        dst_keys[i] = write(k0);
        dst_values[i] = values[0];

        let i = offsets[k1.digit(shift, mask)];
        offsets[k1.digit(shift, mask)] = i + 1;
        dst_keys[i] = write(k1);
        dst_values[i] = values[1];

        let i = offsets[k2.digit(shift, mask)];
        offsets[k2.digit(shift, mask)] = i + 1;
        dst_keys[i] = write(k2);
        dst_values[i] = values[2];

        let i = offsets[k3.digit(shift, mask)];
        offsets[k3.digit(shift, mask)] = i + 1;
        dst_keys[i] = write(k3);
        dst_values[i] = values[3];
    });

    key_rem.iter().zip(value_rem).for_each(|(key, value)| {
        let k = read(*key);
        let d = k.digit(shift, mask);
        let i = offsets[d];
        offsets[d] = i + 1;
        dst_keys[i] = write(k);
        dst_values[i] = *value;
    });
}
