use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapacityError {
    pub(crate) capacity: usize,
}

#[derive(Clone, PartialEq, Eq)]
pub struct TryPushError<T> {
    pub(crate) err: CapacityError,
    pub(crate) val: T,
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "push failed because fifo is full (capacity {})",
            self.capacity
        )
    }
}

impl std::error::Error for CapacityError {}

impl CapacityError {
    pub(crate) fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The fixed capacity of the adapter that rejected the push.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> fmt::Debug for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryPushError")
            .field("kind", &self.err)
            .finish()
    }
}

impl<T> fmt::Display for TryPushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.err.fmt(f)
    }
}

impl<T> std::error::Error for TryPushError<T> {}

impl<T> TryPushError<T> {
    pub(crate) fn new(capacity: usize, val: T) -> Self {
        Self {
            err: CapacityError::new(capacity),
            val,
        }
    }

    pub fn capacity(&self) -> usize {
        self.err.capacity()
    }

    /// Gives back the value that did not fit.
    pub fn into_inner(self) -> T {
        self.val
    }

    pub fn into_capacity_error(self) -> CapacityError {
        self.err
    }
}
