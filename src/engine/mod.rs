//! Geospatial risk alerting core.
//!
//! ## Modules
//! - `geo.rs` — haversine distance and coordinate checks.
//! - `store.rs` — newest-first report collection.
//! - `window.rs` — time-window and risk filtering of the active view.
//! - `safe_point.rs` — nearest verified-safe report for evacuation.
//! - `danger.rs` — local truth override and threat scan.
//!
//! ## Conventions
//! - Pure functions over explicit inputs; the host owns the store and the user location
//!   and calls back in after every mutation.
//! - `now` is always passed in, never read from the clock here.

pub mod danger;
pub mod geo;
pub mod safe_point;
pub mod store;
pub mod window;
