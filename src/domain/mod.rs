//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep report, location and alert-state structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — reports, session state, settings, command output structs.
//! - `constants.rs` — alerting radii, fallback center, fixed labels.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/process side effects.
//!
//! ## Compatibility note
//! Report fields serialize camelCase to stay compatible with the classifier answer and
//! the web client; command outputs are snake_case. Keep both in sync with `docs/contracts/*`.

pub mod constants;
pub mod models;
