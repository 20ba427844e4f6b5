//! Purpose: Test-support crate for JSON protocol round-trip verification.
//! Exports: `error`, `fixture` (path resolution, slurp), `roundtrip` (verifier).
//! Role: Leaf utility consumed by protocol test suites; not a serialization library.
//! Invariants: Every operation is call-scoped and stateless; safe under parallel tests.
//! Invariants: JSON semantics come from serde_json; this crate only compares and reports.
pub mod error;
pub mod fixture;
pub mod roundtrip;
