//! Session layer.
//!
//! One [`Session`] per user: it owns the product list and handles the user actions
//! (add, import, export, clear) one at a time, each to completion. Failures end
//! the action that raised them and leave the list untouched.

pub mod session;
pub mod store;

pub use session::{ActionOutcome, Notification, Session, SessionAction};
pub use store::{PendingClear, ProductListStore};
