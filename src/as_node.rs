use std::collections::HashSet;

use crate::announcement::ASN;
use crate::policy::Policy;

/// Rank value meaning "not yet assigned by flattening".
pub const UNRANKED: i64 = -1;

/// An Autonomous System: identity, neighbor sets, propagation rank, and its
/// exclusively-owned policy. Neighbor sets are pairwise disjoint by
/// invariant (enforced by `AsGraph::add_relationship`, the only mutator).
#[derive(Debug, Clone)]
pub struct AsNode {
    pub asn: ASN,
    pub providers: HashSet<ASN>,
    pub customers: HashSet<ASN>,
    pub peers: HashSet<ASN>,
    pub propagation_rank: i64,
    pub policy: Option<Policy>,
}

impl AsNode {
    pub fn new(asn: ASN) -> Self {
        AsNode {
            asn,
            providers: HashSet::new(),
            customers: HashSet::new(),
            peers: HashSet::new(),
            propagation_rank: UNRANKED,
            policy: None,
        }
    }
}
