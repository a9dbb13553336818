use crate::error::TryPushError;
use crate::trace::{debug, trace, warn};
use crate::Fifo;
use core::mem::MaybeUninit;
use core::{fmt, ptr, slice};

/// FIFO view over an inline array of `N` elements.
///
/// Pushing writes at the push offset and popping only advances the pop
/// offset: nothing is ever shifted, and the popped prefix is not reused
/// until [`clear`](FifoArray::clear). A popped value stays in place, so
/// [`unpop_front`](FifoArray::unpop_front) can bring it back.
///
/// ```
/// use fifo_rs::FifoArray;
///
/// let mut fifo = FifoArray::<i32, 4>::new();
/// fifo.push_back(1);
/// fifo.push_back(2);
/// fifo.pop_front();
/// assert_eq!(fifo.front(), &2);
/// fifo.unpop_front();
/// assert_eq!(fifo.as_slice(), &[1, 2]);
/// ```
pub struct FifoArray<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    pop_offset: usize,
    push_offset: usize,
    // slots [0, init_len) hold a value, even below the offsets after a clear
    init_len: usize,
}

impl<T, const N: usize> FifoArray<T, N> {
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            pop_offset: 0,
            push_offset: 0,
            init_len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.push_offset - self.pop_offset
    }

    pub fn is_empty(&self) -> bool {
        self.push_offset == self.pop_offset
    }

    /// Returns `true` once every slot has been written since the last clear.
    ///
    /// Popping does not make room: the popped prefix is only reclaimed by
    /// [`clear`](FifoArray::clear).
    pub fn is_full(&self) -> bool {
        self.push_offset == N
    }

    /// Number of pushes left before the adapter is full.
    pub fn remaining(&self) -> usize {
        N - self.push_offset
    }

    /// Appends `value` at the push offset.
    ///
    /// # Panics
    ///
    /// Panics if the adapter is full.
    pub fn push_back(&mut self, value: T) {
        assert!(self.push_offset < N, "FifoArray is at capacity");
        unsafe { self.push_back_unchecked(value) }
    }

    /// Appends `value`, handing it back inside the error if there is no room.
    pub fn try_push_back(&mut self, value: T) -> Result<(), TryPushError<T>> {
        if self.is_full() {
            warn!(capacity = N, "push rejected by full fifo");
            return Err(TryPushError::new(N, value));
        }

        unsafe { self.push_back_unchecked(value) };
        Ok(())
    }

    /// Appends `value` without checking the capacity.
    ///
    /// # Safety
    ///
    /// The adapter must not be full.
    pub unsafe fn push_back_unchecked(&mut self, value: T) {
        debug_assert!(self.push_offset < N, "FifoArray is at capacity");

        let idx = self.push_offset;
        let slot = self.buf.get_unchecked_mut(idx);
        if idx < self.init_len {
            // overwrite a value left behind by clear, dropping it
            *slot.assume_init_mut() = value;
        } else {
            slot.write(value);
            self.init_len += 1;
        }
        self.push_offset += 1;
    }

    /// Advances the pop offset by one.
    ///
    /// The value is not dropped. Popping an empty adapter is a caller bug:
    /// debug builds panic, release builds leave the adapter empty.
    pub fn pop_front(&mut self) {
        debug_assert!(!self.is_empty(), "pop_front on empty FifoArray");
        self.pop_front_n(1);
    }

    /// Advances the pop offset by `n`, stopping at the push offset.
    pub fn pop_front_n(&mut self, n: usize) {
        let next = self.pop_offset.saturating_add(n);
        if next > self.push_offset {
            debug!(
                requested = n,
                live = self.len(),
                "pop saturated at push offset"
            );
            self.pop_offset = self.push_offset;
        } else {
            self.pop_offset = next;
        }
    }

    /// Moves the pop offset back by one, if anything was popped.
    pub fn unpop_front(&mut self) {
        self.pop_offset = self.pop_offset.saturating_sub(1);
    }

    /// Makes every element pushed since the last clear live again.
    pub fn unpop_all(&mut self) {
        self.pop_offset = 0;
    }

    /// # Panics
    ///
    /// Panics if the adapter is empty.
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "front on empty FifoArray");
        unsafe { self.front_unchecked() }
    }

    /// # Panics
    ///
    /// Panics if the adapter is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "front_mut on empty FifoArray");
        unsafe { self.buf.get_unchecked_mut(self.pop_offset).assume_init_mut() }
    }

    /// # Safety
    ///
    /// The adapter must not be empty.
    pub unsafe fn front_unchecked(&self) -> &T {
        debug_assert!(!self.is_empty(), "front on empty FifoArray");
        self.buf.get_unchecked(self.pop_offset).assume_init_ref()
    }

    /// # Panics
    ///
    /// Panics if the adapter is empty.
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "back on empty FifoArray");
        unsafe { self.back_unchecked() }
    }

    /// # Panics
    ///
    /// Panics if the adapter is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "back_mut on empty FifoArray");
        unsafe {
            self.buf
                .get_unchecked_mut(self.push_offset - 1)
                .assume_init_mut()
        }
    }

    /// # Safety
    ///
    /// The adapter must not be empty.
    pub unsafe fn back_unchecked(&self) -> &T {
        debug_assert!(!self.is_empty(), "back on empty FifoArray");
        self.buf.get_unchecked(self.push_offset - 1).assume_init_ref()
    }

    /// Resets both offsets.
    ///
    /// Old values are not dropped here; each one is dropped when a later push
    /// overwrites its slot, or with the adapter.
    pub fn clear(&mut self) {
        trace!(
            pop_offset = self.pop_offset,
            push_offset = self.push_offset,
            "clear"
        );
        self.pop_offset = 0;
        self.push_offset = 0;
    }

    /// Exchanges storage and offsets with `other`. Copies the whole array.
    pub fn swap(&mut self, other: &mut Self) {
        trace!(lhs = self.len(), rhs = other.len(), "swap");
        core::mem::swap(self, other);
    }

    /// Pointer to the first live element.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast::<T>().wrapping_add(self.pop_offset)
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf
            .as_mut_ptr()
            .cast::<T>()
            .wrapping_add(self.pop_offset)
    }

    /// The live elements, front first.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len()) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    // every element pushed since the last clear, popped ones included
    fn pushed(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.push_offset) }
    }
}

impl<T, const N: usize> Drop for FifoArray<T, N> {
    fn drop(&mut self) {
        unsafe {
            let init =
                ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.init_len);
            ptr::drop_in_place(init);
        }
    }
}

impl<T, const N: usize> Default for FifoArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// The buffer is never pinned in place.
impl<T, const N: usize> Unpin for FifoArray<T, N> {}

impl<T: Clone, const N: usize> Clone for FifoArray<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for value in self.pushed() {
            unsafe { out.push_back_unchecked(value.clone()) };
        }
        out.pop_offset = self.pop_offset;
        out
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FifoArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FifoArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for FifoArray<T, N> {}

impl<T, const N: usize> Extend<T> for FifoArray<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FifoArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, const N: usize> Fifo<T> for FifoArray<T, N> {
    fn push_back(&mut self, value: T) {
        FifoArray::push_back(self, value)
    }

    fn pop_front(&mut self) {
        FifoArray::pop_front(self)
    }

    fn unpop_front(&mut self) {
        FifoArray::unpop_front(self)
    }

    fn unpop_all(&mut self) {
        FifoArray::unpop_all(self)
    }

    fn front(&self) -> &T {
        FifoArray::front(self)
    }

    fn back(&self) -> &T {
        FifoArray::back(self)
    }

    fn len(&self) -> usize {
        FifoArray::len(self)
    }

    fn clear(&mut self) {
        FifoArray::clear(self)
    }

    fn swap(&mut self, other: &mut Self) {
        FifoArray::swap(self, other)
    }
}
