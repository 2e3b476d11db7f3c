//! Sorting routines tailored to keys in `[0,n)`
//!
//! The optimization kernels sort subtree sizes and directional edge sizes,
//! both of which are bounded by the number of vertices, so counting sort
//! beats comparison sorting throughout. [`bit_sort`] handles the special
//! case of pairwise distinct keys with a plain presence bitmap.

mod bit;
mod counting;
mod radix;

pub use bit::{bit_sort, bit_sort_mem};
pub use counting::{counting_sort, counting_sort_with_memory, CountingSortMemory, SortOrder};
pub use radix::radix_sort;
