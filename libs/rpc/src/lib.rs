//! Protobuf messages and gRPC stubs for the `todo.v1` package.
//!
//! Sources live in `proto/`; the Rust output under `src/gen/` is generated
//! with buf (prost + tonic plugins) and checked in.

mod gen;

pub use gen::todo;
