//! Line rendering for listed zones
//!
//! Each zone prints as `zone=<name> nameservers=<ns1,ns2,...>`.

use crate::traits::Zone;
use std::io::{self, Write};

/// Logged instead of zone lines when the account has no zones
pub const EMPTY_ACCOUNT_NOTICE: &str = "NB The AWS account does not have any DNS Zones.";

/// Render one zone as a single output line (without newline)
pub fn format_zone(zone: &Zone) -> String {
    format!(
        "zone={} nameservers={}",
        zone.name,
        zone.name_servers.join(",")
    )
}

/// Write one line per zone, in order
pub fn write_zones<W: Write>(writer: &mut W, zones: &[Zone]) -> io::Result<()> {
    for zone in zones {
        writeln!(writer, "{}", format_zone(zone))?;
    }
    writer.flush()
}
