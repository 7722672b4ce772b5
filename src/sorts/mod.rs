mod lsb_sort;
mod out_of_place_sort;

pub use lsb_sort::*;
pub use out_of_place_sort::*;
