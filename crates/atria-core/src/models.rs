//! Domain models for Atria.
//!
//! These are the plain data records the surrounding UI layer renders
//! without further interpretation.

pub mod account;
pub mod booking;
pub mod contact;
pub mod lead;
pub mod role;
pub mod shortlist;
pub mod timeline;
