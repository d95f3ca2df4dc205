// # Zone Service Trait
//
// Defines the interface for reading hosted zones from a DNS provider API.
//
// ## Implementations
//
// - Route 53: `zonelist-provider-route53` crate
//
// ## Usage
//
// ```rust,ignore
// use zonelist_core::ZoneService;
//
// async fn show(service: &dyn ZoneService) -> zonelist_core::Result<()> {
//     let page = service.list_zones(None, None).await?;
//     for summary in page.zones {
//         let zone = service.get_zone(&summary.id).await?;
//         println!("{} {:?}", zone.name, zone.name_servers);
//     }
//     Ok(())
// }
// ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A hosted zone with its authoritative name servers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    /// Zone name, trailing dot included (e.g. "example.com.")
    pub name: String,
    /// Name servers in the order the provider returned them
    pub name_servers: Vec<String>,
}

impl Zone {
    /// Create a new zone
    pub fn new(name: impl Into<String>, name_servers: Vec<String>) -> Self {
        Self {
            name: name.into(),
            name_servers,
        }
    }
}

/// One entry of a zone listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSummary {
    /// Opaque provider identifier, passed back to [`ZoneService::get_zone`]
    pub id: String,
    /// Zone name
    pub name: String,
}

impl ZoneSummary {
    /// Create a new zone summary
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One page of a zone listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZonePage {
    /// Zones on this page, in provider order
    pub zones: Vec<ZoneSummary>,
    /// Continuation marker; `Some` only when the listing is truncated
    pub next_marker: Option<String>,
}

impl ZonePage {
    /// A page that ends the listing
    pub fn last(zones: Vec<ZoneSummary>) -> Self {
        Self {
            zones,
            next_marker: None,
        }
    }

    /// A page followed by more results
    pub fn truncated(zones: Vec<ZoneSummary>, next_marker: impl Into<String>) -> Self {
        Self {
            zones,
            next_marker: Some(next_marker.into()),
        }
    }
}

/// Trait for zone service implementations
///
/// Implementations wrap one provider API and translate its responses into
/// [`ZoneSummary`], [`ZonePage`] and [`Zone`].
///
/// # Single-shot
///
/// Each method performs exactly one API call. Implementations must not
/// retry, back off, cache, or spawn tasks: the caller decides what a failure
/// means, and [`ZoneLister`](crate::ZoneLister) treats every failure as fatal.
///
/// Pagination is likewise owned by the caller. `list_zones` returns a single
/// page and reports the marker for the next one.
#[async_trait]
pub trait ZoneService: Send + Sync {
    /// Fetch one page of hosted zone summaries
    ///
    /// # Parameters
    ///
    /// - `marker`: Continuation marker from the previous page, `None` for the first page
    /// - `max_items`: Page size hint; `None` uses the provider default
    async fn list_zones(
        &self,
        marker: Option<&str>,
        max_items: Option<u32>,
    ) -> Result<ZonePage, crate::Error>;

    /// Fetch the detail of one hosted zone
    ///
    /// # Parameters
    ///
    /// - `id`: Identifier taken from a [`ZoneSummary`]
    ///
    /// # Returns
    ///
    /// - `Ok(Zone)`: Zone name and its delegation set name servers
    /// - `Err(Error)`: If the request failed or the response had no zone
    async fn get_zone(&self, id: &str) -> Result<Zone, crate::Error>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}
