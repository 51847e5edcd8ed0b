//! Bindings for the `dqproto` protobuf package — the wire contract of the
//! external derivatives analytics engine.
//!
//! The engine owns the `.proto` files (copies live under `proto/`); this
//! crate commits the corresponding prost types so that consumers build
//! without `protoc` and so that the encoded bytes stay reviewable. Field
//! numbers and types must never change here without a matching change on
//! the engine side: requests and responses are compared byte-for-byte in
//! the regression tests.
//!
//! Module layout mirrors the contract files: one Rust module per `.proto`
//! file, all inside the single `dqproto` wire package.

pub mod analytics;
pub mod api;
pub mod cm;
pub mod credit;
pub mod datetime;
pub mod fi;
pub mod fx;
pub mod irmarket;
pub mod market;
pub mod numerics;
