//! Patient intake service.
//!
//! Collects patient details through a web form, validates them and appends
//! each accepted submission to a SQLite table.

pub mod api;
pub mod db;
pub mod intake;
