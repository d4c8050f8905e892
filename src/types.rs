use std::fmt;

/// Topology of the provisioned cluster, as told to us by the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClusterMode {
    SingleNode,
    MultiNode,
}

impl ClusterMode {
    /// Returns `None` for anything but the two known selectors. Unknown
    /// values are not an error: the tool treats them as "nothing to do".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "single-node" => Some(Self::SingleNode),
            "multi-node" => Some(Self::MultiNode),
            _ => None,
        }
    }
}

impl fmt::Display for ClusterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleNode => f.write_str("single-node"),
            Self::MultiNode => f.write_str("multi-node"),
        }
    }
}
