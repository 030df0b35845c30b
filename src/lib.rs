//! Growable array backed by one contiguous allocation.
//!
//! `GrowableArray` keeps its capacity at a power of two no smaller than `MIN_CAPACITY`,
//! doubling when full and halving when a removal leaves it a quarter full.
//!
//! Enable the `logging` feature to get `log` records for every resize.

mod logging;
mod error;
mod policy;
mod buffer;
mod array;
mod iter;

pub use error::ArrayError;
pub use policy::MIN_CAPACITY;
pub use array::GrowableArray;
pub use iter::IntoIter;

#[cfg(test)]
pub mod dropflag;
