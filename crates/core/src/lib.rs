//! Core domain library for the playbill catalog service.
//!
//! Pure types, pure functions, and the trait seams the service binary
//! implements: the [`catalog`] domain model, the [`storage`] repository
//! contract, and the [`cache`] contract. No I/O happens in this crate.

pub mod cache;
pub mod catalog;
pub mod storage;
