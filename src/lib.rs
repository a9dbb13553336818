//! FIFO adapters over one contiguous buffer.
//!
//! [`FifoArray`] works over an inline array of fixed capacity,
//! [`BasicFifoString`] over a growable `Vec`. Both keep a read cursor into
//! their buffer: popping moves the cursor and never shifts data, so push and
//! pop are O(1) and a pop can be undone. The price is that popped space is
//! only reused after a `clear`.
//!
//! Neither adapter synchronizes anything; share one across threads behind a
//! lock like any other collection.

pub mod error;
mod fifo_array;
mod fifo_string;
mod io;
mod sink;
pub mod trace;

pub use crate::fifo_array::FifoArray;
pub use crate::fifo_string::{BasicFifoString, FifoString};

/// The operations a queue needs from its underlying storage.
///
/// `front` and `back` panic on an empty adapter, and `push_back` panics when
/// a fixed adapter is full. There is no `emplace_back`: `push_back` takes the
/// value by move, which is all an in-place construction would buy.
pub trait Fifo<T> {
    fn push_back(&mut self, value: T);

    fn pop_front(&mut self);

    fn unpop_front(&mut self);

    fn unpop_all(&mut self);

    fn front(&self) -> &T;

    fn back(&self) -> &T;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);

    fn swap(&mut self, other: &mut Self)
    where
        Self: Sized;
}

/// Swaps `lhs` and `rhs`.
pub fn swap<T, F: Fifo<T>>(lhs: &mut F, rhs: &mut F) {
    lhs.swap(rhs);
}
