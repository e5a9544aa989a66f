use std::io::Write;

use crate::announcement::Announcement;
use crate::as_graph::AsGraph;
use crate::announcement::ASN;

/// Write every RIB entry in `graph` as a CSV row to `out`: header
/// `asn,prefix,as_path`, then one row per `(asn, prefix)` pair with the path
/// formatted `"(p1, p2, …, pk)"` — a single-element path gets a trailing
/// comma before the closing paren.
pub fn write_rib_csv<W: Write>(graph: &AsGraph, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "asn,prefix,as_path")?;
    for (asn, prefix, announcement) in graph.rib_entries() {
        writeln!(out, "{},{},\"{}\"", asn, prefix, format_as_path(announcement))?;
    }
    Ok(())
}

fn format_as_path(announcement: &Announcement) -> String {
    let joined = announcement
        .as_path
        .iter()
        .map(ASN::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    if announcement.as_path.len() == 1 {
        format!("({},)", joined)
    } else {
        format!("({})", joined)
    }
}
