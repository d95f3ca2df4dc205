// # zonelist-core
//
// Core library for listing hosted DNS zones and their name servers.
//
// ## Architecture Overview
//
// - **ZoneService**: Trait for reading zones from a provider API
// - **ZoneLister**: Walks the listing, fetches each zone's detail, fails fast
// - **output**: Renders zones as `zone=<name> nameservers=<a,b>` lines
//
// Provider crates implement `ZoneService`; the binary wires one in and
// prints the result.

pub mod traits;
pub mod lister;
pub mod config;
pub mod error;
pub mod output;

// Re-export core types for convenience
pub use traits::{Zone, ZonePage, ZoneService, ZoneSummary};
pub use lister::ZoneLister;
pub use config::ListerConfig;
pub use error::{Error, Result};
