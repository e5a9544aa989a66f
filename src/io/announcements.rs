use std::fs;
use std::path::Path;

use log::debug;

use crate::as_graph::AsGraph;
use crate::error::SimulatorError;

/// Load announcement seeds from a CSV file: header row skipped
/// unconditionally, then `asn,prefix,rov_invalid` per data row. Rows whose
/// ASN is not in the graph (or has no policy set) are silently ignored, as
/// are malformed rows.
pub fn load_announcements(graph: &mut AsGraph, path: &Path) -> Result<(), SimulatorError> {
    let contents = fs::read_to_string(path).map_err(|e| SimulatorError::io(path, e))?;

    let mut seeded = 0usize;
    let mut skipped = 0usize;
    for (i, line) in contents.lines().enumerate() {
        if i == 0 {
            continue; // header
        }
        if line.is_empty() {
            continue;
        }
        let line = strip_trailing_cr(line);
        match parse_announcement_line(line) {
            Some((asn, prefix, rov_invalid)) => {
                graph.seed_announcement(asn, prefix, rov_invalid);
                seeded += 1;
            }
            None => skipped += 1,
        }
    }
    debug!("seeded {} announcements ({} malformed rows skipped)", seeded, skipped);
    Ok(())
}

fn strip_trailing_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn parse_announcement_line(line: &str) -> Option<(u32, String, bool)> {
    let mut fields = line.splitn(3, ',');
    let asn: u32 = fields.next()?.parse().ok()?;
    let prefix = strip_trailing_cr(fields.next()?).to_string();
    let rov_field = strip_trailing_cr(fields.next()?);
    Some((asn, prefix, parse_rov_invalid(rov_field)))
}

fn parse_rov_invalid(field: &str) -> bool {
    match field {
        "true" | "True" => true,
        "false" | "False" => false,
        "1" => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rov_invalid_parsing_rules() {
        assert!(parse_rov_invalid("true"));
        assert!(parse_rov_invalid("True"));
        assert!(!parse_rov_invalid("false"));
        assert!(!parse_rov_invalid("False"));
        assert!(parse_rov_invalid("1"));
        assert!(!parse_rov_invalid("0"));
        assert!(!parse_rov_invalid("garbage"));
    }

    #[test]
    fn parses_well_formed_row() {
        let (asn, prefix, invalid) = parse_announcement_line("65001,10.0.0.0/24,true").unwrap();
        assert_eq!(asn, 65001);
        assert_eq!(prefix, "10.0.0.0/24");
        assert!(invalid);
    }

    #[test]
    fn unknown_asn_is_silently_ignored() {
        let dir = std::env::temp_dir().join(format!("ann_test_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ann.csv");
        fs::write(&path, "asn,prefix,rov_invalid\n999,10.0.0.0/24,false\n").unwrap();

        let mut graph = AsGraph::new();
        graph.get_or_create(1);
        graph.initialize_policies(&HashSet::new());
        load_announcements(&mut graph, &path).unwrap();

        assert!(graph.nodes[&1].policy.as_ref().unwrap().local_rib.is_empty());
        assert!(!graph.nodes.contains_key(&999));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn seeds_known_asn_with_policy() {
        let dir = std::env::temp_dir().join(format!("ann_test2_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ann.csv");
        fs::write(&path, "asn,prefix,rov_invalid\r\n1,10.0.0.0/24,false\r\n").unwrap();

        let mut graph = AsGraph::new();
        graph.get_or_create(1);
        graph.initialize_policies(&HashSet::new());
        load_announcements(&mut graph, &path).unwrap();

        assert!(graph.nodes[&1]
            .policy
            .as_ref()
            .unwrap()
            .local_rib
            .contains_key("10.0.0.0/24"));

        fs::remove_dir_all(&dir).ok();
    }
}
