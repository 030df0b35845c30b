use crate::buffer::Buffer;
use crate::policy;
use crate::ArrayError;
use std::ops::{Index, IndexMut};

/// Mutable, indexable sequence stored in a single contiguous allocation.
///
/// The capacity is always a power of two and never smaller than `MIN_CAPACITY`. It doubles
/// when an insertion finds the buffer full, and halves when a removal leaves the array at most
/// a quarter full. Appending and popping at the tail are amortized constant time, positional
/// insertion and deletion are linear.
///
/// The array is meant to be used by one owner at a time. Wrap it in a lock to share it.
pub struct GrowableArray<T> {
    buffer: Buffer<T>,
    len: usize,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with `MIN_CAPACITY` slots.
    pub fn new() -> GrowableArray<T> {
        GrowableArray::with_capacity(0)
    }

    /// Creates an empty array able to hold at least `capacity` items before it grows.
    ///
    /// The capacity is rounded up to the next power of two, and to at least `MIN_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> GrowableArray<T> {
        GrowableArray {
            buffer: Buffer::allocate(policy::initial_capacity(capacity)),
            len: 0,
        }
    }

    /// Returns the number of items in the array.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Same as `size`.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ArrayError::IndexOutOfRange { index, len: self.len })
        }
    }

    /// Returns a reference to the item at `index`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    /// Returns a mutable reference to the item at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Appends `item` at the end of the array, doubling the capacity first if it is full.
    pub fn push(&mut self, item: T) {
        self.grow_if_full();
        unsafe { self.buffer.write(self.len, item) };
        self.len += 1;
    }

    /// Inserts `item` at `index`, moving the items at `index` and after it one place right.
    ///
    /// `index` must refer to an existing item, so inserting into an empty array or at
    /// `size()` fails. Use `push` to append.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.grow_if_full();
        trace!(target: crate::logging::SHIFT_TARGET, "insert at {}, shifting {} items right", index, self.len - index);
        unsafe {
            self.buffer.shift_right(index, self.len);
            self.buffer.write(index, item);
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts `item` before the first item. Fails on an empty array, like `insert(0, item)`.
    pub fn prepend(&mut self, item: T) -> Result<(), ArrayError> {
        self.insert(0, item)
    }

    /// Removes and returns the last item, halving the capacity if the array became a quarter full.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        if self.is_empty() {
            return Err(ArrayError::EmptyContainer);
        }
        self.len -= 1;
        let item = unsafe { self.buffer.read(self.len) };
        self.shrink_if_sparse();
        Ok(item)
    }

    /// Removes and returns the item at `index`, moving the items after it one place left.
    pub fn delete(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        trace!(target: crate::logging::SHIFT_TARGET, "delete at {}, shifting {} items left", index, self.len - index - 1);
        let item = unsafe {
            let item = self.buffer.read(index);
            self.buffer.shift_left(index, self.len);
            item
        };
        self.len -= 1;
        self.shrink_if_sparse();
        Ok(item)
    }

    /// Returns a slice over the items in order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.buffer.as_ptr(), self.len) }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.buffer.as_mut_ptr(), self.len) }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    fn grow_if_full(&mut self) {
        if let Some(capacity) = policy::grown(self.len, self.capacity()) {
            self.resize(capacity);
        }
    }

    fn shrink_if_sparse(&mut self) {
        if let Some(capacity) = policy::shrunk(self.len, self.capacity()) {
            self.resize(capacity);
        }
    }

    fn resize(&mut self, capacity: usize) {
        debug!(target: crate::logging::RESIZE_TARGET, "resize {} -> {} with {} items", self.capacity(), capacity, self.len);
        self.buffer.relocate(self.len, capacity);
    }

    /// Gives up ownership of the buffer without dropping the items in it.
    pub(crate) fn into_raw_parts(self) -> (Buffer<T>, usize) {
        let this = std::mem::ManuallyDrop::new(self);
        let buffer = unsafe { std::ptr::read(&this.buffer) };
        (buffer, this.len)
    }
}

impl<T: PartialEq> GrowableArray<T> {
    /// Returns the index of the first item equal to `item`.
    pub fn find(&self, item: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Deletes the first item equal to `item` and returns it. Later equal items stay.
    ///
    /// Does nothing if no item is equal.
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.find(item)?;
        self.delete(index).ok()
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        let live = self.as_mut_slice() as *mut [T];
        self.len = 0;
        unsafe { std::ptr::drop_in_place(live) };
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        GrowableArray::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        let mut copy = GrowableArray::with_capacity(self.capacity());
        for item in self.iter() {
            copy.push(item.clone());
        }
        copy
    }
}

impl<T> std::fmt::Debug for GrowableArray<T> where T: std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!("index out of bounds: {} >= {}", index, self.len),
        }
    }
}

impl<T> IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(item) => item,
            None => panic!("index out of bounds: {} >= {}", index, len),
        }
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> std::iter::FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut array = GrowableArray::with_capacity(lower);
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
