//! Core types for the userbase service.
//!
//! Pure data and contracts only: the `User` entity, its request payloads,
//! field validation and the storage repository trait with its error
//! taxonomy. No I/O happens in this crate.

pub mod storage;
pub mod user;
