//! Core traits for zone listing
//!
//! - [`ZoneService`]: Read hosted zones from a provider API

pub mod zone_service;

pub use zone_service::{Zone, ZonePage, ZoneService, ZoneSummary};
