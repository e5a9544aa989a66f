use std::collections::HashMap;

use crate::announcement::{Announcement, ASN, Prefix};
use crate::relationship::Relationship;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Bgp,
    Rov,
}

#[derive(Debug, Clone)]
pub struct Policy {
    pub kind: PolicyKind,
    pub local_rib: HashMap<Prefix, Announcement>,
    pub received_queue: HashMap<Prefix, Vec<Announcement>>,
}

impl Policy {
    pub fn new(kind: PolicyKind) -> Self {
        Policy {
            kind,
            local_rib: HashMap::new(),
            received_queue: HashMap::new(),
        }
    }

    pub fn seed_announcement(&mut self, prefix: Prefix, origin_asn: ASN, rov_invalid: bool) {
        if self.kind == PolicyKind::Rov && rov_invalid {
            return;
        }
        let announcement = Announcement::seed(prefix.clone(), origin_asn, rov_invalid);
        self.local_rib.insert(prefix, announcement);
    }

    pub fn add_to_received_queue(&mut self, prefix: Prefix, announcement: Announcement) {
        if self.kind == PolicyKind::Rov && announcement.rov_invalid {
            return;
        }
        self.received_queue.entry(prefix).or_default().push(announcement);
    }

    // Drains the whole queue even for prefixes whose candidate loses to the
    // installed route, so a stale entry never lingers into the next phase.
    pub fn process_announcements(&mut self, current_asn: ASN) {
        for (prefix, queued) in self.received_queue.drain() {
            if queued.is_empty() {
                continue;
            }
            let mut candidates = queued.into_iter().map(|mut candidate| {
                candidate.as_path.insert(0, current_asn);
                candidate
            });
            let first = candidates.next().expect("queued is non-empty");
            let best = candidates.fold(first, |best, candidate| {
                if candidate.is_better_than(&best) {
                    candidate
                } else {
                    best
                }
            });

            match self.local_rib.get(&prefix) {
                Some(installed) if !best.is_better_than(installed) => {}
                _ => {
                    self.local_rib.insert(prefix, best);
                }
            }
        }
    }

    pub fn announcements_to_send(&self) -> Vec<Announcement> {
        self.local_rib.values().cloned().collect()
    }
}
