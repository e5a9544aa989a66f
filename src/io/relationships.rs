use std::fs;
use std::path::Path;

use log::debug;

use crate::as_graph::AsGraph;
use crate::error::SimulatorError;

/// Load a CAIDA-format relationship file into `graph`. Line-oriented: blank
/// lines and `#`-comments are skipped; each record is
/// `as1|as2|relationship|source`, with `source` discarded. Unparseable
/// integers or records with the wrong field count are silently skipped.
pub fn load_relationships(graph: &mut AsGraph, path: &Path) -> Result<(), SimulatorError> {
    let contents = fs::read_to_string(path).map_err(|e| SimulatorError::io(path, e))?;

    let mut loaded = 0usize;
    let mut skipped = 0usize;
    for line in contents.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_relationship_line(line) {
            Some((as1, as2, relationship)) => {
                graph.add_relationship(as1, as2, relationship);
                loaded += 1;
            }
            None => skipped += 1,
        }
    }
    debug!("loaded {} relationship records ({} skipped)", loaded, skipped);
    Ok(())
}

fn parse_relationship_line(line: &str) -> Option<(u32, u32, i32)> {
    let mut fields = line.splitn(4, '|');
    let as1 = fields.next()?.parse().ok()?;
    let as2 = fields.next()?.parse().ok()?;
    let relationship = fields.next()?.parse().ok()?;
    fields.next()?; // source, discarded
    Some((as1, as2, relationship))
}
