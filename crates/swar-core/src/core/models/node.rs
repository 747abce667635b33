use serde::Serialize;
use std::fmt;

/// A node identifier as it appears in schema markup, case-folded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeName(String);

impl NodeName {
    pub fn new(token: &str) -> Self {
        Self(token.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeName {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// An unordered pair of node names, stored with the lexically smaller name first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodePair {
    first: NodeName,
    second: NodeName,
}

impl NodePair {
    pub fn new(a: NodeName, b: NodeName) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    pub fn first(&self) -> &NodeName {
        &self.first
    }

    pub fn second(&self) -> &NodeName {
        &self.second
    }

    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }

    pub fn contains(&self, node: &str) -> bool {
        self.first.as_str() == node || self.second.as_str() == node
    }
}

impl fmt::Display for NodePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' and '{}'", self.first, self.second)
    }
}
