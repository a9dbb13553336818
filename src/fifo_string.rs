use crate::trace::{debug, trace};
use crate::Fifo;
use core::{fmt, slice};
use std::str::Utf8Error;

/// FIFO view over a growable run of character-like elements.
///
/// Meant for buffering data that arrives in pieces and is consumed
/// incrementally, such as bytes read from a socket: pushes append to the
/// underlying `Vec`, pops only move an offset. Consumed elements stay in
/// memory, so consumption can be undone, until [`clear`] drops them all.
///
/// [`clear`]: BasicFifoString::clear
pub struct BasicFifoString<C> {
    buf: Vec<C>,
    offset: usize,
}

/// Byte FIFO, the usual choice for I/O buffering.
pub type FifoString = BasicFifoString<u8>;

impl<C> BasicFifoString<C> {
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            offset: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            offset: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.buf.len() == self.offset
    }

    /// Number of popped elements still held in memory.
    pub fn consumed(&self) -> usize {
        self.offset
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    pub fn push_back(&mut self, value: C) {
        self.buf.push(value);
    }

    /// Advances the offset by one.
    ///
    /// Popping an empty buffer is a caller bug: debug builds panic, release
    /// builds leave the buffer empty.
    pub fn pop_front(&mut self) {
        debug_assert!(!self.is_empty(), "pop_front on empty BasicFifoString");
        self.pop_front_n(1);
    }

    /// Advances the offset by `n`, stopping at the end of the buffer.
    pub fn pop_front_n(&mut self, n: usize) {
        let next = self.offset.saturating_add(n);
        if next > self.buf.len() {
            debug!(requested = n, live = self.len(), "pop saturated at end of buffer");
            self.offset = self.buf.len();
        } else {
            self.offset = next;
        }
    }

    pub fn unpop_front(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn unpop_all(&mut self) {
        self.offset = 0;
    }

    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn front(&self) -> &C {
        assert!(!self.is_empty(), "front on empty BasicFifoString");
        unsafe { self.front_unchecked() }
    }

    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn front_mut(&mut self) -> &mut C {
        assert!(!self.is_empty(), "front_mut on empty BasicFifoString");
        unsafe { self.buf.get_unchecked_mut(self.offset) }
    }

    /// # Safety
    ///
    /// The buffer must not be empty.
    pub unsafe fn front_unchecked(&self) -> &C {
        debug_assert!(!self.is_empty(), "front on empty BasicFifoString");
        self.buf.get_unchecked(self.offset)
    }

    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn back(&self) -> &C {
        assert!(!self.is_empty(), "back on empty BasicFifoString");
        unsafe { self.back_unchecked() }
    }

    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn back_mut(&mut self) -> &mut C {
        assert!(!self.is_empty(), "back_mut on empty BasicFifoString");
        let last = self.buf.len() - 1;
        unsafe { self.buf.get_unchecked_mut(last) }
    }

    /// # Safety
    ///
    /// The buffer must not be empty.
    pub unsafe fn back_unchecked(&self) -> &C {
        debug_assert!(!self.is_empty(), "back on empty BasicFifoString");
        self.buf.get_unchecked(self.buf.len() - 1)
    }

    /// The unconsumed elements, without copying.
    pub fn view(&self) -> &[C] {
        unsafe { self.buf.get_unchecked(self.offset..) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [C] {
        unsafe { self.buf.get_unchecked_mut(self.offset..) }
    }

    /// Pointer to the first unconsumed element.
    pub fn as_ptr(&self) -> *const C {
        self.buf.as_ptr().wrapping_add(self.offset)
    }

    pub fn as_mut_ptr(&mut self) -> *mut C {
        self.buf.as_mut_ptr().wrapping_add(self.offset)
    }

    pub fn iter(&self) -> slice::Iter<'_, C> {
        self.view().iter()
    }

    /// Truncates the buffer and resets the offset. This is the only way the
    /// consumed prefix is released.
    pub fn clear(&mut self) {
        trace!(consumed = self.offset, live = self.len(), "clear");
        self.buf.clear();
        self.offset = 0;
    }

    pub fn swap(&mut self, other: &mut Self) {
        trace!(lhs = self.len(), rhs = other.len(), "swap");
        core::mem::swap(&mut self.buf, &mut other.buf);
        core::mem::swap(&mut self.offset, &mut other.offset);
    }

    /// Returns the unconsumed elements, dropping the consumed prefix.
    pub fn into_inner(mut self) -> Vec<C> {
        self.buf.drain(..self.offset);
        self.buf
    }
}

impl<C: Clone> BasicFifoString<C> {
    pub fn extend_from_slice(&mut self, values: &[C]) {
        self.buf.extend_from_slice(values);
    }
}

impl BasicFifoString<u8> {
    /// The unconsumed bytes as UTF-8.
    ///
    /// Fails when the offset splits a multi-byte character or the buffer
    /// holds invalid UTF-8.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self.view())
    }
}

// The buffer is never pinned in place.
impl<C> Unpin for BasicFifoString<C> {}

impl<C> Default for BasicFifoString<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clone> Clone for BasicFifoString<C> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            offset: self.offset,
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for BasicFifoString<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<C: PartialEq> PartialEq for BasicFifoString<C> {
    fn eq(&self, other: &Self) -> bool {
        self.view() == other.view()
    }
}

impl<C: Eq> Eq for BasicFifoString<C> {}

impl<C> From<Vec<C>> for BasicFifoString<C> {
    fn from(buf: Vec<C>) -> Self {
        Self { buf, offset: 0 }
    }
}

impl<C: Clone> From<&[C]> for BasicFifoString<C> {
    fn from(values: &[C]) -> Self {
        Self::from(values.to_vec())
    }
}

impl From<&str> for FifoString {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl From<String> for FifoString {
    fn from(s: String) -> Self {
        Self::from(s.into_bytes())
    }
}

impl<C> FromIterator<C> for BasicFifoString<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<C> Extend<C> for BasicFifoString<C> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}

impl<'a, C> IntoIterator for &'a BasicFifoString<C> {
    type Item = &'a C;
    type IntoIter = slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C> Fifo<C> for BasicFifoString<C> {
    fn push_back(&mut self, value: C) {
        BasicFifoString::push_back(self, value)
    }

    fn pop_front(&mut self) {
        BasicFifoString::pop_front(self)
    }

    fn unpop_front(&mut self) {
        BasicFifoString::unpop_front(self)
    }

    fn unpop_all(&mut self) {
        BasicFifoString::unpop_all(self)
    }

    fn front(&self) -> &C {
        BasicFifoString::front(self)
    }

    fn back(&self) -> &C {
        BasicFifoString::back(self)
    }

    fn len(&self) -> usize {
        BasicFifoString::len(self)
    }

    fn clear(&mut self) {
        BasicFifoString::clear(self)
    }

    fn swap(&mut self, other: &mut Self) {
        BasicFifoString::swap(self, other)
    }
}
