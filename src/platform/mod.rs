//! Platform abstraction layer
//!
//! The engine takes time and pointer positions as plain values, so hosts only
//! translate their events. On the web that translation lives in `web`.

#[cfg(target_arch = "wasm32")]
pub mod web;
