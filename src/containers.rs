//! Small reusable containers the algorithmic kernels are built on
//!
//! All three containers are allocated once to a fixed capacity and then
//! reused across (possibly many) inner iterations, so the hot loops of the
//! engines never touch the allocator.

mod fixed_array;
mod movable_set;
mod queue_array;

pub use fixed_array::FixedArray;
pub use movable_set::MovableSet;
pub use queue_array::QueueArray;
