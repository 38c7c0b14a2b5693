//! Command implementations

pub mod check;
pub mod puzzle;
pub mod simple;
pub mod verify;

pub use check::{CheckCommandError, CheckInput, run_check};
pub use puzzle::draw_puzzle;
pub use simple::run_simple;
pub use verify::{AuditFailure, AuditReport, audit_book, audit_puzzle, run_verify};
