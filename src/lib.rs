// Library target exists solely for the integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// that tests/ can import types via `matchlab::data::*` / `matchlab::store::*`.
// Most code is only exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod config;
pub mod data;
pub mod engine;
pub mod store;

// Private: pulled in so their unit tests run under the lib harness
mod app;
mod event;
mod ui;
