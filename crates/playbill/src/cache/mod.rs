//! Cache backend implementations.
//!
//! Concrete implementations of the cache trait defined in
//! `playbill_core::cache`. A single in-process backend exists: a second
//! cache instance cannot participate in this design, since cross-instance
//! coherency is out of scope.

pub mod memory;

pub use memory::MemoryCache;
