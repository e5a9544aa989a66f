use std::collections::{HashMap, HashSet, VecDeque};

use crate::announcement::{Announcement, Prefix, ASN};
use crate::as_node::{AsNode, UNRANKED};
use crate::policy::{Policy, PolicyKind};
use crate::relationship::Relationship;

pub const REL_PROVIDER_TO_CUSTOMER: i32 = -1;
pub const REL_PEER: i32 = 0;
pub const REL_SIBLING: i32 = 1;

#[derive(Debug, Clone, Default)]
pub struct AsGraph {
    pub nodes: HashMap<ASN, AsNode>,
    pub propagation_ranks: Vec<Vec<ASN>>,
}

impl AsGraph {
    pub fn new() -> Self {
        AsGraph {
            nodes: HashMap::new(),
            propagation_ranks: Vec::new(),
        }
    }

    pub fn get_or_create(&mut self, asn: ASN) -> &mut AsNode {
        self.nodes.entry(asn).or_insert_with(|| AsNode::new(asn))
    }

    // Sibling (1) is folded into peer; any other tag is ignored.
    pub fn add_relationship(&mut self, as1: ASN, as2: ASN, relationship: i32) {
        match relationship {
            REL_PROVIDER_TO_CUSTOMER => {
                self.get_or_create(as1).customers.insert(as2);
                self.get_or_create(as2).providers.insert(as1);
            }
            REL_PEER | REL_SIBLING => {
                self.get_or_create(as1).peers.insert(as2);
                self.get_or_create(as2).peers.insert(as1);
            }
            _ => {}
        }
    }

    fn has_cycle_from(
        &self,
        start: ASN,
        visited: &mut HashSet<ASN>,
        neighbors_of: &dyn Fn(&AsNode) -> Vec<ASN>,
    ) -> bool {
        if visited.contains(&start) {
            return false;
        }

        let mut rec_stack: HashSet<ASN> = HashSet::new();
        let mut stack: Vec<(ASN, std::vec::IntoIter<ASN>)> = Vec::new();

        visited.insert(start);
        rec_stack.insert(start);
        let start_neighbors = self.nodes.get(&start).map(neighbors_of).unwrap_or_default();
        stack.push((start, start_neighbors.into_iter()));

        while let Some((asn, iter)) = stack.last_mut() {
            match iter.next() {
                Some(neighbor) => {
                    if rec_stack.contains(&neighbor) {
                        return true;
                    }
                    if !visited.contains(&neighbor) {
                        visited.insert(neighbor);
                        rec_stack.insert(neighbor);
                        let next = self.nodes.get(&neighbor).map(neighbors_of).unwrap_or_default();
                        stack.push((neighbor, next.into_iter()));
                    }
                }
                None => {
                    rec_stack.remove(asn);
                    stack.pop();
                }
            }
        }
        false
    }

    pub fn has_provider_cycle(&self) -> bool {
        let mut visited = HashSet::new();
        let asns: Vec<ASN> = self.nodes.keys().copied().collect();
        for asn in asns {
            if !visited.contains(&asn)
                && self.has_cycle_from(asn, &mut visited, &|n: &AsNode| {
                    n.customers.iter().copied().collect()
                })
            {
                return true;
            }
        }
        false
    }

    pub fn has_customer_cycle(&self) -> bool {
        let mut visited = HashSet::new();
        let asns: Vec<ASN> = self.nodes.keys().copied().collect();
        for asn in asns {
            if !visited.contains(&asn)
                && self.has_cycle_from(asn, &mut visited, &|n: &AsNode| {
                    n.providers.iter().copied().collect()
                })
            {
                return true;
            }
        }
        false
    }

    // Capped at 3 * |nodes| relaxations as a safety net for inputs that
    // slipped past cycle detection. A node never reached from a
    // customer-empty seed keeps rank UNRANKED and is excluded below.
    pub fn flatten(&mut self) {
        self.propagation_ranks.clear();

        let mut rank: HashMap<ASN, i64> = self.nodes.keys().map(|&asn| (asn, UNRANKED)).collect();
        let mut queue: VecDeque<ASN> = VecDeque::new();

        for (&asn, node) in &self.nodes {
            if node.customers.is_empty() {
                rank.insert(asn, 0);
                queue.push_back(asn);
            }
        }

        let mut in_queue: HashSet<ASN> = queue.iter().copied().collect();
        let max_iterations = self.nodes.len() * 3;
        let mut iterations = 0usize;

        while !queue.is_empty() && iterations < max_iterations {
            let current_asn = queue.pop_front().expect("queue is non-empty");
            in_queue.remove(&current_asn);
            let current_rank = rank[&current_asn];

            let providers: Vec<ASN> = self
                .nodes
                .get(&current_asn)
                .map(|n| n.providers.iter().copied().collect())
                .unwrap_or_default();

            for provider_asn in providers {
                if !self.nodes.contains_key(&provider_asn) {
                    continue;
                }
                let provider_rank = rank.get(&provider_asn).copied().unwrap_or(UNRANKED);
                if provider_rank < current_rank + 1 {
                    rank.insert(provider_asn, current_rank + 1);
                    if !in_queue.contains(&provider_asn) {
                        queue.push_back(provider_asn);
                        in_queue.insert(provider_asn);
                    }
                }
            }
            iterations += 1;
        }

        for (&asn, &r) in &rank {
            if let Some(node) = self.nodes.get_mut(&asn) {
                node.propagation_rank = r;
            }
        }

        let max_rank = rank.values().copied().max().unwrap_or(UNRANKED);
        if max_rank >= 0 {
            let mut ranks: Vec<Vec<ASN>> = vec![Vec::new(); (max_rank + 1) as usize];
            for (&asn, &r) in &rank {
                if r >= 0 {
                    ranks[r as usize].push(asn);
                }
            }
            self.propagation_ranks = ranks;
        }
    }

    pub fn initialize_policies(&mut self, rov_asns: &HashSet<ASN>) {
        for (asn, node) in self.nodes.iter_mut() {
            let kind = if rov_asns.contains(asn) {
                PolicyKind::Rov
            } else {
                PolicyKind::Bgp
            };
            node.policy = Some(Policy::new(kind));
        }
    }

    pub fn seed_announcement(&mut self, asn: ASN, prefix: Prefix, rov_invalid: bool) {
        if let Some(node) = self.nodes.get_mut(&asn) {
            if let Some(policy) = node.policy.as_mut() {
                policy.seed_announcement(prefix, asn, rov_invalid);
            }
        }
    }

    fn send_to_neighbors(
        &mut self,
        sender: ASN,
        neighbors: &[ASN],
        announcements: &[Announcement],
        received_from: Relationship,
    ) {
        for &neighbor in neighbors {
            if !self.nodes.contains_key(&neighbor) {
                continue;
            }
            for announcement in announcements {
                // Split horizon: never re-announce to the neighbor we heard it from.
                if announcement.next_hop_asn == neighbor {
                    continue;
                }
                let propagated = announcement.create_propagated(sender, received_from);
                if let Some(policy) = self.nodes.get_mut(&neighbor).and_then(|n| n.policy.as_mut()) {
                    policy.add_to_received_queue(propagated.prefix.clone(), propagated);
                }
            }
        }
    }

    fn neighbors_of(&self, asn: ASN, rel: Relationship) -> Vec<ASN> {
        self.nodes
            .get(&asn)
            .map(|n| match rel {
                Relationship::Provider => n.providers.iter().copied().collect(),
                Relationship::Customer => n.customers.iter().copied().collect(),
                Relationship::Peer => n.peers.iter().copied().collect(),
                Relationship::Origin => Vec::new(),
            })
            .unwrap_or_default()
    }

    fn propagate_upward(&mut self) {
        let ranks = self.propagation_ranks.clone();
        for rank_asns in &ranks {
            for &asn in rank_asns {
                let announcements = match self.nodes.get(&asn).and_then(|n| n.policy.as_ref()) {
                    Some(policy) => policy.announcements_to_send(),
                    None => continue,
                };
                let providers = self.neighbors_of(asn, Relationship::Provider);
                self.send_to_neighbors(asn, &providers, &announcements, Relationship::Customer);
            }
            for &asn in rank_asns {
                let providers = self.neighbors_of(asn, Relationship::Provider);
                for provider in providers {
                    if let Some(policy) = self.nodes.get_mut(&provider).and_then(|n| n.policy.as_mut()) {
                        policy.process_announcements(provider);
                    }
                }
            }
        }
    }

    fn propagate_across(&mut self) {
        let asns: Vec<ASN> = self.nodes.keys().copied().collect();
        for &asn in &asns {
            let announcements = match self.nodes.get(&asn).and_then(|n| n.policy.as_ref()) {
                Some(policy) => policy.announcements_to_send(),
                None => continue,
            };
            let peers = self.neighbors_of(asn, Relationship::Peer);
            self.send_to_neighbors(asn, &peers, &announcements, Relationship::Peer);
        }
        for &asn in &asns {
            if let Some(policy) = self.nodes.get_mut(&asn).and_then(|n| n.policy.as_mut()) {
                policy.process_announcements(asn);
            }
        }
    }

    fn propagate_downward(&mut self) {
        let ranks = self.propagation_ranks.clone();
        for rank_asns in ranks.iter().rev() {
            for &asn in rank_asns {
                let announcements = match self.nodes.get(&asn).and_then(|n| n.policy.as_ref()) {
                    Some(policy) => policy.announcements_to_send(),
                    None => continue,
                };
                let customers = self.neighbors_of(asn, Relationship::Customer);
                self.send_to_neighbors(asn, &customers, &announcements, Relationship::Provider);
            }
            for &asn in rank_asns {
                let customers = self.neighbors_of(asn, Relationship::Customer);
                for customer in customers {
                    if let Some(policy) = self.nodes.get_mut(&customer).and_then(|n| n.policy.as_mut()) {
                        policy.process_announcements(customer);
                    }
                }
            }
        }
    }

    pub fn propagate_announcements(&mut self) {
        self.propagate_upward();
        self.propagate_across();
        self.propagate_downward();
    }

    pub fn rib_entries(&self) -> impl Iterator<Item = (ASN, &Prefix, &Announcement)> {
        self.nodes.iter().flat_map(|(&asn, node)| {
            node.policy
                .iter()
                .flat_map(move |policy| policy.local_rib.iter().map(move |(prefix, ann)| (asn, prefix, ann)))
        })
    }
}
