use std::fmt;

/// The relationship under which a route was learned, from the receiver's
/// point of view. Variant order is significant: it doubles as local
/// preference, so `Origin` sorts before `Customer` before `Peer` before
/// `Provider` under the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relationship {
    Origin,
    Customer,
    Peer,
    Provider,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Relationship::Origin => "ORIGIN",
            Relationship::Customer => "CUSTOMER",
            Relationship::Peer => "PEER",
            Relationship::Provider => "PROVIDER",
        };
        write!(f, "{}", s)
    }
}
