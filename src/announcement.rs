use crate::relationship::Relationship;

pub type ASN = u32;
pub type Prefix = String;

// as_path is non-empty; for a route installed at ASN A, as_path[0] == A.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub prefix: Prefix,
    pub as_path: Vec<ASN>,
    pub next_hop_asn: ASN,
    pub received_from: Relationship,
    pub rov_invalid: bool,
}

impl Announcement {
    pub fn seed(prefix: Prefix, origin_asn: ASN, rov_invalid: bool) -> Self {
        Announcement {
            prefix,
            as_path: vec![origin_asn],
            next_hop_asn: origin_asn,
            received_from: Relationship::Origin,
            rov_invalid,
        }
    }

    // AS-path prepending happens at processing time in the receiver, not here.
    pub fn create_propagated(&self, sender: ASN, received_from: Relationship) -> Self {
        Announcement {
            next_hop_asn: sender,
            received_from,
            ..self.clone()
        }
    }

    pub fn is_better_than(&self, other: &Announcement) -> bool {
        if self.received_from != other.received_from {
            return self.received_from < other.received_from;
        }
        if self.as_path.len() != other.as_path.len() {
            return self.as_path.len() < other.as_path.len();
        }
        self.next_hop_asn < other.next_hop_asn
    }
}
