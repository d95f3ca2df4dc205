// # zonelist - Route 53 zone lister
//
// Prints every hosted zone visible to the ambient AWS credentials, one line
// per zone:
//
// ```text
// zone=example.com. nameservers=ns-1.awsdns-01.org,ns-2.awsdns-02.com
// ```
//
// This binary is a thin integration layer: listing logic lives in
// zonelist-core, the AWS calls in zonelist-provider-route53.
//
// ## Configuration
//
// None of its own. There are no command-line arguments and no environment
// variables read by this program; credentials and region come from the
// standard AWS chain (`AWS_PROFILE`, `AWS_REGION`, `AWS_ACCESS_KEY_ID`,
// shared config files, instance role, ...).
//
// Logs go to stderr at info level; stdout carries only zone lines.

use anyhow::{Context, Result};
use std::io::Write;
use std::process::ExitCode;
use tracing::{Level, debug, error, warn};
use tracing_subscriber::FmtSubscriber;
use zonelist_core::output::{EMPTY_ACCOUNT_NOTICE, write_zones};
use zonelist_core::{ListerConfig, ZoneLister, ZoneService};
use zonelist_provider_route53::{Route53ZoneService, load_ambient_config};

/// Exit codes for different termination scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZonelistExitCode {
    /// All zones printed
    Success = 0,
    /// Credential resolution failure or invalid lister settings
    ConfigError = 1,
    /// Zone retrieval or output failure
    RuntimeError = 2,
}

impl From<ZonelistExitCode> for ExitCode {
    fn from(code: ZonelistExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return ZonelistExitCode::ConfigError.into();
    }

    debug!("Starting zonelist");

    let rt = match build_runtime() {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("{:#}", e);
            return ZonelistExitCode::RuntimeError.into();
        }
    };

    rt.block_on(run()).into()
}

/// One call in flight at a time; a single-threaded runtime is enough.
fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")
}

/// Load credentials, then list and print zones to stdout
async fn run() -> ZonelistExitCode {
    let sdk_config = match load_ambient_config().await {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load the default configuration: {}", e);
            return ZonelistExitCode::ConfigError;
        }
    };

    let service = Route53ZoneService::from_sdk_config(&sdk_config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_zones(Box::new(service), ListerConfig::default(), &mut out).await
}

/// List every zone through `service` and write one line per zone to `out`
///
/// Nothing is written unless the whole listing succeeded. An empty account
/// logs the empty-account notice once.
async fn print_zones<W: Write>(
    service: Box<dyn ZoneService>,
    config: ListerConfig,
    out: &mut W,
) -> ZonelistExitCode {
    let lister = match ZoneLister::new(service, config) {
        Ok(lister) => lister,
        Err(e) => {
            error!("Invalid lister configuration: {}", e);
            return ZonelistExitCode::ConfigError;
        }
    };

    let zones = match lister.list_zones().await {
        Ok(zones) => zones,
        Err(e) => {
            error!("Failed to retrieve the Route 53 hosted zones: {}", e);
            return ZonelistExitCode::RuntimeError;
        }
    };

    if let Err(e) = write_zones(out, &zones) {
        error!("Failed to write zones to stdout: {}", e);
        return ZonelistExitCode::RuntimeError;
    }

    if zones.is_empty() {
        warn!("{}", EMPTY_ACCOUNT_NOTICE);
    }

    ZonelistExitCode::Success
}
