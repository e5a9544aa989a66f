use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::announcement::ASN;
use crate::error::SimulatorError;

/// Load a list of ROV-enabled ASNs, one integer per line. Blank and
/// malformed lines are silently ignored.
pub fn load_rov_asns(path: &Path) -> Result<HashSet<ASN>, SimulatorError> {
    let contents = fs::read_to_string(path).map_err(|e| SimulatorError::io(path, e))?;

    let mut rov_asns = HashSet::new();
    for line in contents.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        if let Ok(asn) = line.parse::<ASN>() {
            rov_asns.insert(asn);
        }
    }
    Ok(rov_asns)
}
