//! Owned contiguous allocation of `capacity` slots of `T`.
//!
//! The buffer knows nothing about which slots hold live values. The owner tracks
//! that, and is responsible for dropping live values before the buffer goes away:
//! dropping a `Buffer` only returns the memory to the allocator.

use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

pub struct Buffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

unsafe impl<T: Send> Send for Buffer<T> {}
unsafe impl<T: Sync> Sync for Buffer<T> {}

impl<T> Buffer<T> {
    fn layout(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).unwrap_or_else(|_| panic!("capacity overflow"))
    }

    /// Allocates room for `capacity` values. All slots start unused.
    pub fn allocate(capacity: usize) -> Buffer<T> {
        let layout = Self::layout(capacity);
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            let raw = unsafe { alloc(layout) } as *mut T;
            match NonNull::new(raw) {
                Some(ptr) => ptr,
                None => handle_alloc_error(layout),
            }
        };
        Buffer {
            ptr,
            capacity,
            _owns: PhantomData,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Moves `value` into an unused slot.
    #[inline(always)]
    pub unsafe fn write(&mut self, slot: usize, value: T) {
        debug_assert!(slot < self.capacity, "write: slot < capacity");
        ptr::write(self.as_mut_ptr().add(slot), value);
    }

    /// Moves the value out of a live slot, leaving the slot unused.
    #[inline(always)]
    pub unsafe fn read(&self, slot: usize) -> T {
        debug_assert!(slot < self.capacity, "read: slot < capacity");
        ptr::read(self.as_ptr().add(slot))
    }

    /// Moves live slots `[at, len)` to `[at + 1, len + 1)`. Slot `at` is unused afterwards.
    pub unsafe fn shift_right(&mut self, at: usize, len: usize) {
        debug_assert!(at <= len && len < self.capacity, "shift_right: room for one more");
        let base = self.as_mut_ptr().add(at);
        ptr::copy(base, base.add(1), len - at);
    }

    /// Moves live slots `(at, len)` to `[at, len - 1)`. Slot `at` must already be unused.
    pub unsafe fn shift_left(&mut self, at: usize, len: usize) {
        debug_assert!(at < len && len <= self.capacity, "shift_left: at inside live range");
        let base = self.as_mut_ptr().add(at);
        ptr::copy(base.add(1), base, len - at - 1);
    }

    /// Moves the first `len` values into a fresh buffer of `new_capacity` slots,
    /// then releases the old allocation.
    pub fn relocate(&mut self, len: usize, new_capacity: usize) {
        assert!(len <= new_capacity && len <= self.capacity, "relocate: live values must fit");
        let mut next = Buffer::allocate(new_capacity);
        unsafe { ptr::copy_nonoverlapping(self.as_ptr(), next.as_mut_ptr(), len) };
        std::mem::swap(self, &mut next);
        // `next` now holds the old allocation with its values moved out
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Self::layout(self.capacity);
        if layout.size() != 0 {
            unsafe { dealloc(self.ptr.as_ptr() as *mut u8, layout) };
        }
    }
}
