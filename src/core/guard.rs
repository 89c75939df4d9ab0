//! Guard predicates for controlling moves.
//!
//! Guards are pure boolean functions that decide whether something may
//! happen. Move rules wrap caller-supplied guards so that house rules can
//! be layered on top of the standard ones without side effects.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate over a value of type `T`.
///
/// # Example
///
/// ```rust
/// use tictactoe::core::{Board, Guard};
///
/// let not_full = Guard::new(|board: &Board| !board.is_full());
///
/// assert!(not_full.check(&Board::empty()));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows `value`.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
