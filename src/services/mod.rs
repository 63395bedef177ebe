//! Service layer for the expense ledger
//!
//! Binds a logged-in user to their ledger and budgets and routes every
//! mutation through the persistence adapter.

pub mod session;

pub use session::UserSession;
