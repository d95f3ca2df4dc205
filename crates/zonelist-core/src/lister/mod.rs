//! Zone lister
//!
//! The ZoneLister is responsible for:
//! - Walking every page of the zone listing
//! - Fetching the detail of each listed zone
//! - Returning the zones in listing order
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────┐   list_zones(marker)   ┌──────────────┐
//! │ ZoneLister  │ ─────────────────────▶ │ ZoneService  │
//! │             │ ◀───── ZonePage ────── │              │
//! │             │                        │              │
//! │             │   get_zone(id) × N     │              │
//! │             │ ─────────────────────▶ │              │
//! │             │ ◀─────── Zone ──────── │              │
//! └─────────────┘                        └──────────────┘
//! ```
//!
//! Every failure aborts the whole run. No partial results are returned.

use crate::config::ListerConfig;
use crate::error::{Error, Result};
use crate::traits::{Zone, ZoneService, ZoneSummary};
use std::collections::HashSet;
use tracing::{debug, info};

/// Lists every hosted zone visible to a [`ZoneService`]
///
/// The service handle is passed in explicitly and owned by the lister.
/// Calls are made strictly one at a time.
pub struct ZoneLister {
    /// Zone service for API calls
    service: Box<dyn ZoneService>,

    /// Page size hint passed on every listing call
    page_size: Option<u32>,
}

impl ZoneLister {
    /// Create a new zone lister
    ///
    /// # Parameters
    ///
    /// - `service`: Zone service implementation
    /// - `config`: Lister configuration
    ///
    /// # Returns
    ///
    /// - `Err(Error::Config)` if the configuration is invalid
    pub fn new(service: Box<dyn ZoneService>, config: ListerConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            service,
            page_size: config.page_size,
        })
    }

    /// Fetch every hosted zone with its name servers
    ///
    /// Zones come back in the order of the listing. If the listing or any
    /// detail call fails, the error is returned and no zones are.
    pub async fn list_zones(&self) -> Result<Vec<Zone>> {
        let summaries = self.list_summaries().await?;
        debug!(
            "Listed {} zone(s) from {}",
            summaries.len(),
            self.service.provider_name()
        );

        let mut zones = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            debug!("Fetching zone {} ({})", summary.name, summary.id);
            let zone = self
                .service
                .get_zone(&summary.id)
                .await
                .map_err(|e| Error::for_zone(&summary.id, e))?;
            debug!(
                "Fetched zone {} ({} name server(s))",
                zone.name,
                zone.name_servers.len()
            );
            zones.push(zone);
        }

        info!("Retrieved {} hosted zone(s)", zones.len());
        Ok(zones)
    }

    /// Walk the listing until the provider stops handing out markers
    ///
    /// A marker that was already requested means the listing cycles; it is
    /// rejected instead of followed.
    async fn list_summaries(&self) -> Result<Vec<ZoneSummary>> {
        let mut summaries = Vec::new();
        let mut marker: Option<String> = None;
        let mut seen: HashSet<String> = HashSet::new();
        let mut pages = 0usize;

        loop {
            let page = self
                .service
                .list_zones(marker.as_deref(), self.page_size)
                .await?;
            pages += 1;
            debug!("Listing page {}: {} zone(s)", pages, page.zones.len());

            summaries.extend(page.zones);

            let Some(next) = page.next_marker else {
                break;
            };
            if !seen.insert(next.clone()) {
                return Err(Error::invalid_response(format!(
                    "Zone listing cycled back to marker {}",
                    next
                )));
            }
            marker = Some(next);
        }

        Ok(summaries)
    }
}
