use std::path::PathBuf;

use clap::Parser;

/// Compute converged per-AS local RIBs from an AS relationship graph, a set
/// of origin announcements, and a set of ROV-enabled ASes.
#[derive(Debug, Parser)]
#[command(name = "asrank-propagator", version, about)]
pub struct Cli {
    /// CAIDA-format relationship file (`as1|as2|relationship|source` per line).
    #[arg(long)]
    pub relationships: PathBuf,

    /// Announcements CSV (`asn,prefix,rov_invalid` per row, header skipped).
    #[arg(long)]
    pub announcements: PathBuf,

    /// ROV-enabled ASN list, one integer per line.
    #[arg(long = "rov-asns")]
    pub rov_asns: PathBuf,

    /// Destination for the RIB CSV. Defaults to stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}
