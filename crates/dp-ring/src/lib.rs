//! `dp-ring` — the dining table as a cycle graph.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`topology`] | `RingTopology`, `NodeKind`                          |
//!
//! The topology is built once per model and never changes.  It answers
//! neighbor questions only; all mutable state lives in `dp-agent`.

pub mod topology;


pub use topology::{NodeKind, RingTopology};
