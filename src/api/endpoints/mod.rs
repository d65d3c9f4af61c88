//! API endpoint handlers.
//!
//! Each module corresponds to one feature area and delegates to the
//! workflow modules; handlers hold the database lock only between awaits.

pub mod accounts;
pub mod admin;
pub mod appointments;
pub mod assessments;
pub mod chat;
pub mod directory;
pub mod education;
pub mod health;
pub mod prescriptions;
