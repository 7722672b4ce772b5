//! # lsdr
//!
//! lsdr is a stable least-significant-digit radix sort that sorts a key array and permutes a
//! parallel value array exactly the same way.
//!
//! ## Usage
//!
//! In the simplest case, call `keys.radix_sort_pairs(&mut values)`. The values usually hold the
//! original index of each key, but can be any `Copy` payload.
//!
//! ```
//! use lsdr::RadixSortPairs;
//!
//! let mut keys = vec![-1.5f32, 2.0, -3.0, 0.0];
//! let mut values = vec![0u32, 1, 2, 3];
//!
//! keys.radix_sort_pairs(&mut values)?;
//!
//! assert_eq!(keys, vec![-3.0, -1.5, 0.0, 2.0]);
//! assert_eq!(values, vec![2, 0, 3, 1]);
//! # Ok::<(), lsdr::SortError>(())
//! ```
//!
//! If you already own a second pair of buffers, use [`radix8_sort`] or [`radix11_sort`] directly.
//! They never allocate anything but the histogram, and return the [`BufferId`] of the buffer that
//! holds the result instead of copying it back.
//!
//! ## Digit widths
//!
//! Each pass sorts by one digit, starting from the least significant one. Digits are either 8 or
//! 11 bits wide:
//!
//!  * 8-bit: 4 passes for 32-bit keys, 8 passes for 64-bit keys, 256 counters per pass
//!  * 11-bit: 3 passes for 32-bit keys, 6 passes for 64-bit keys, 2048 counters per pass
//!
//! ## Default Implementations
//!
//! `RadixKey` is implemented for the following key types out-of-the-box:
//!
//!  * `u32`
//!  * `u64`
//!  * `f32`
//!  * `f64`
//!
//! Floats are sorted by the total order of their bit patterns: `-0.0` sorts before `0.0`, and
//! infinities sort at the ends. Where NaNs end up is unspecified.
//!
//! ## Features
//!
//!  * `work_profiles` prints every step of every sort to stdout
//!  * `bench` exposes the random input helpers used by the criterion benches
//!  * `timings` builds the `timings` binary, a size sweep comparing against a comparison sort
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

mod counts;
mod error;
mod radix_key;
mod radix_key_impl;
mod radix_sort_builder;
mod sort_buffers;
mod sorts;
pub mod utils;
pub mod verify;

#[cfg(test)]
mod tests;

pub use error::{SortError, VerifyError};
pub use radix_key::{RadixKey, UnsignedBits};
pub use radix_sort_builder::{radix_sort, RadixBits, RadixSortBuilder, RadixSortPairs};
pub use sort_buffers::{BufferId, SortBuffers};
pub use sorts::{radix11_sort, radix8_sort};

#[cfg(any(test, feature = "bench", feature = "timings"))]
pub use utils::test_utils;
