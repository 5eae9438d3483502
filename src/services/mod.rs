//! Service layer containing orchestration and side-effect helpers.
//!
//! ## Service map
//! - `classifier.rs` — classifier answer ingestion (with fallback) and report creation.
//! - `monitor.rs` — danger rescan after session mutations, siren trigger.
//! - `alarm.rs` — fire-and-forget siren implementations.
//! - `navigation.rs` — routing link and navigation range check.
//! - `demo.rs` — demonstration dataset.
//! - `settings.rs` — `config.toml` loading.
//! - `storage.rs` — session state persistence + audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Alerting math lives in `engine/*`; services only wire it to the session.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod alarm;
pub mod classifier;
pub mod demo;
pub mod monitor;
pub mod navigation;
pub mod output;
pub mod settings;
pub mod storage;
