//! Type aliases for commonly used shared-state types.
//!
//! The viewer session runs on one thread, so shared mutable state is
//! `Rc<RefCell<T>>` rather than a lock.
//!
//! ```rust,ignore
//! use ifckit_core::types::*;
//!
//! let dispatcher: Shared<NotificationDispatcher> = shared(NotificationDispatcher::default());
//! dispatcher.borrow_mut().dismiss();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Borrows must never be held across an `.await`.
pub type Shared<T> = Rc<RefCell<T>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
