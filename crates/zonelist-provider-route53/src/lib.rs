// # Route 53 Zone Service
//
// This crate provides the AWS Route 53 implementation of `ZoneService`.
//
// ## Behavior
//
// - One SDK call per trait method (`ListHostedZones` / `GetHostedZone`)
// - Pagination is surfaced as `ZonePage::next_marker`; the lister walks it
// - No retry policy of our own beyond what the SDK's default config applies
// - Private hosted zones have no delegation set and report no name servers
//
// ## Credentials
//
// Credentials and region come from the standard AWS chain (environment,
// shared config and credential files, container or instance role). They are
// resolved once up front by `load_ambient_config` so a missing or broken
// credential setup is reported as a configuration error, before any zone is
// requested.
//
// ## API Reference
//
// - ListHostedZones: GET `/2013-04-01/hostedzone?marker=...&maxitems=...`
// - GetHostedZone: GET `/2013-04-01/hostedzone/:id`

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_route53::error::DisplayErrorContext;
use aws_sdk_route53::types::{DelegationSet, HostedZone};
use zonelist_core::traits::{Zone, ZonePage, ZoneService, ZoneSummary};
use zonelist_core::{Error, Result};

/// Provider name used in errors and logs
const PROVIDER_NAME: &str = "route53";

/// Region used when the ambient chain yields none
///
/// Route 53 is a global service served from us-east-1.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Load the ambient AWS configuration and resolve credentials
///
/// # Returns
///
/// - `Ok(SdkConfig)`: Configuration with a region and working credentials
/// - `Err(Error::Config)`: If no credentials provider is configured or it
///   fails to produce credentials
pub async fn load_ambient_config() -> Result<SdkConfig> {
    let region = RegionProviderChain::default_provider().or_else(DEFAULT_REGION);
    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;

    let provider = config
        .credentials_provider()
        .ok_or_else(|| Error::config("No AWS credentials provider is configured"))?;

    provider.provide_credentials().await.map_err(|e| {
        Error::config(format!(
            "Failed to resolve AWS credentials: {}",
            DisplayErrorContext(&e)
        ))
    })?;

    tracing::debug!(
        "Loaded AWS configuration (region: {})",
        config
            .region()
            .map(ToString::to_string)
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    );

    Ok(config)
}

/// Route 53 zone service
///
/// Stateless wrapper over an `aws_sdk_route53::Client`. The client is built
/// once by the caller and handed in.
#[derive(Clone)]
pub struct Route53ZoneService {
    client: aws_sdk_route53::Client,
}

// The SDK client's Debug output includes its whole config; keep it out of logs.
impl std::fmt::Debug for Route53ZoneService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route53ZoneService")
            .field("client", &"<aws_sdk_route53::Client>")
            .finish()
    }
}

impl Route53ZoneService {
    /// Wrap an existing Route 53 client
    pub fn new(client: aws_sdk_route53::Client) -> Self {
        Self { client }
    }

    /// Build a client from loaded SDK configuration
    pub fn from_sdk_config(config: &SdkConfig) -> Self {
        Self::new(aws_sdk_route53::Client::new(config))
    }
}

#[async_trait]
impl ZoneService for Route53ZoneService {
    /// List one page of hosted zones
    ///
    /// # API Call
    ///
    /// ```http
    /// GET /2013-04-01/hostedzone?marker=<marker>&maxitems=<max_items>
    /// ```
    async fn list_zones(&self, marker: Option<&str>, max_items: Option<u32>) -> Result<ZonePage> {
        tracing::debug!("ListHostedZones (marker: {:?})", marker);

        let output = self
            .client
            .list_hosted_zones()
            .set_marker(marker.map(str::to_string))
            .set_max_items(max_items.and_then(|n| i32::try_from(n).ok()))
            .send()
            .await
            .map_err(|e| {
                Error::provider(
                    PROVIDER_NAME,
                    format!("ListHostedZones failed: {}", DisplayErrorContext(&e)),
                )
            })?;

        let zones = output
            .hosted_zones
            .into_iter()
            .map(|hz| ZoneSummary::new(hz.id, hz.name))
            .collect();

        page_from_parts(zones, output.is_truncated, output.next_marker)
    }

    /// Fetch one hosted zone and its delegation set
    ///
    /// # API Call
    ///
    /// ```http
    /// GET /2013-04-01/hostedzone/:id
    /// ```
    async fn get_zone(&self, id: &str) -> Result<Zone> {
        tracing::debug!("GetHostedZone {}", id);

        let output = self
            .client
            .get_hosted_zone()
            .id(id)
            .send()
            .await
            .map_err(|e| {
                Error::provider(
                    PROVIDER_NAME,
                    format!("GetHostedZone failed: {}", DisplayErrorContext(&e)),
                )
            })?;

        zone_from_parts(id, output.hosted_zone, output.delegation_set)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

/// Map the truncation fields of a listing onto a page
fn page_from_parts(
    zones: Vec<ZoneSummary>,
    is_truncated: bool,
    next_marker: Option<String>,
) -> Result<ZonePage> {
    match (is_truncated, next_marker) {
        (false, _) => Ok(ZonePage::last(zones)),
        (true, Some(marker)) if !marker.is_empty() => Ok(ZonePage::truncated(zones, marker)),
        (true, _) => Err(Error::invalid_response(
            "ListHostedZones is truncated but has no NextMarker",
        )),
    }
}

/// Build a zone from a GetHostedZone response
fn zone_from_parts(
    id: &str,
    hosted_zone: Option<HostedZone>,
    delegation_set: Option<DelegationSet>,
) -> Result<Zone> {
    let hosted_zone = hosted_zone.ok_or_else(|| {
        Error::invalid_response(format!("GetHostedZone {} returned no hosted zone", id))
    })?;

    let name_servers = delegation_set
        .map(|set| set.name_servers)
        .unwrap_or_default();

    if name_servers.is_empty() {
        tracing::debug!("Zone {} has no delegation set name servers", hosted_zone.name);
    }

    Ok(Zone::new(hosted_zone.name, name_servers))
}
