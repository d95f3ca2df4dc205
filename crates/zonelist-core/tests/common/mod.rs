//! Test doubles and common utilities for lister contract tests
//!
//! The scripted service answers from canned pages and zone details and
//! records every call it receives, so tests can check both the result and
//! the exact call sequence.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use zonelist_core::error::{Error, Result};
use zonelist_core::traits::{Zone, ZonePage, ZoneService, ZoneSummary};

/// A call received by [`ScriptedZoneService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List {
        marker: Option<String>,
        max_items: Option<u32>,
    },
    Get {
        id: String,
    },
}

/// Canned answer for a detail call
#[derive(Clone)]
enum Detail {
    Found(Zone),
    Fails(String),
}

/// A ZoneService that replays scripted responses
pub struct ScriptedZoneService {
    /// Listing pages keyed by the marker that requests them (`None` = first)
    pages: HashMap<Option<String>, std::result::Result<ZonePage, String>>,
    /// Detail responses keyed by zone id
    details: HashMap<String, Detail>,
    /// Every call made, in order
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedZoneService {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            details: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Single-page listing where each zone's id is its name
    pub fn with_zones(zones: &[(&str, &[&str])]) -> Self {
        let mut service = Self::new();
        let summaries = zones
            .iter()
            .map(|(name, _)| ZoneSummary::new(*name, *name))
            .collect();
        service = service.page(None, ZonePage::last(summaries));
        for (name, servers) in zones {
            service = service.zone(name, name, servers);
        }
        service
    }

    /// Answer the listing request carrying `marker` with `page`
    pub fn page(mut self, marker: Option<&str>, page: ZonePage) -> Self {
        self.pages.insert(marker.map(str::to_string), Ok(page));
        self
    }

    /// Fail the listing request carrying `marker`
    pub fn failing_page(mut self, marker: Option<&str>, message: &str) -> Self {
        self.pages
            .insert(marker.map(str::to_string), Err(message.to_string()));
        self
    }

    /// Answer `get_zone(id)` with a zone
    pub fn zone(mut self, id: &str, name: &str, servers: &[&str]) -> Self {
        let servers = servers.iter().map(|s| s.to_string()).collect();
        self.details
            .insert(id.to_string(), Detail::Found(Zone::new(name, servers)));
        self
    }

    /// Fail `get_zone(id)`
    pub fn failing_zone(mut self, id: &str, message: &str) -> Self {
        self.details
            .insert(id.to_string(), Detail::Fails(message.to_string()));
        self
    }

    /// Handle to the call log, usable after the service is boxed
    pub fn call_log(&self) -> Arc<Mutex<Vec<Call>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait::async_trait]
impl ZoneService for ScriptedZoneService {
    async fn list_zones(&self, marker: Option<&str>, max_items: Option<u32>) -> Result<ZonePage> {
        self.calls.lock().unwrap().push(Call::List {
            marker: marker.map(str::to_string),
            max_items,
        });

        match self.pages.get(&marker.map(str::to_string)) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(message)) => Err(Error::provider("scripted", message.clone())),
            None => Err(Error::provider(
                "scripted",
                format!("no page scripted for marker {:?}", marker),
            )),
        }
    }

    async fn get_zone(&self, id: &str) -> Result<Zone> {
        self.calls.lock().unwrap().push(Call::Get { id: id.to_string() });

        match self.details.get(id) {
            Some(Detail::Found(zone)) => Ok(zone.clone()),
            Some(Detail::Fails(message)) => Err(Error::provider("scripted", message.clone())),
            None => Err(Error::provider("scripted", format!("unknown zone {}", id))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

/// Shorthand for a `Get` call
pub fn get(id: &str) -> Call {
    Call::Get { id: id.to_string() }
}

/// Shorthand for a `List` call without a page size
pub fn list(marker: Option<&str>) -> Call {
    Call::List {
        marker: marker.map(str::to_string),
        max_items: None,
    }
}
