//! Capacity policy shared by every `GrowableArray`.
//!
//! Capacities are always powers of two and never drop below `MIN_CAPACITY`.

/// Smallest capacity an array ever holds.
pub const MIN_CAPACITY: usize = 16;

/// Capacity for an array created to hold at least `requested` items.
#[inline]
pub fn initial_capacity(requested: usize) -> usize {
    requested
        .max(MIN_CAPACITY)
        .checked_next_power_of_two()
        .unwrap_or_else(|| panic!("capacity overflow"))
}

/// Capacity to move to before writing an item into an array of `len` items,
/// or `None` if the current buffer still has a free slot.
#[inline]
pub fn grown(len: usize, capacity: usize) -> Option<usize> {
    if len < capacity {
        None
    } else {
        Some(capacity.checked_mul(2).unwrap_or_else(|| panic!("capacity overflow")))
    }
}

/// Capacity to move to after a removal left `len` items, or `None` if the
/// array is still at least a quarter full or already at the floor.
#[inline]
pub fn shrunk(len: usize, capacity: usize) -> Option<usize> {
    if capacity > MIN_CAPACITY && len <= capacity / 4 {
        Some(capacity / 2)
    } else {
        None
    }
}
