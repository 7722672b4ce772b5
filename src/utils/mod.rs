#[cfg(any(test, feature = "bench", feature = "timings"))]
pub mod test_utils;

mod sort_utils;

pub use sort_utils::*;
