//! Preferences Assistant - authenticated preference service
//!
//! Stores per-user theme, language and notification settings and exposes a
//! command endpoint that turns short free-text requests ("switch to dark
//! theme", "bahasa indonesia") into preference updates.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
