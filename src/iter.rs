use crate::buffer::Buffer;
use crate::GrowableArray;

/// Iterator that moves items out of a `GrowableArray`, front to back.
///
/// Items not yet yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    buffer: Buffer<T>,
    front: usize,
    back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = unsafe { self.buffer.read(self.front) };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(unsafe { self.buffer.read(self.back) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.back - self.front;
        let start = unsafe { self.buffer.as_mut_ptr().add(self.front) };
        self.front = self.back;
        unsafe { std::ptr::drop_in_place(std::ptr::slice_from_raw_parts_mut(start, remaining)) };
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (buffer, len) = self.into_raw_parts();
        IntoIter {
            buffer,
            front: 0,
            back: len,
        }
    }
}
