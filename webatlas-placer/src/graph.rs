use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Directed link graph between domains, as the crawl step exports it.
///
/// `linked_from` is the precomputed inverse of `links_to`. Either map may
/// omit a domain that has no links in that direction; a missing entry is
/// read as an empty list, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkGraph {
    #[serde(default)]
    pub links_to: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub linked_from: HashMap<String, Vec<String>>,
    /// Image ids per domain. Irrelevant to placement, carried through for
    /// the viewers downstream.
    #[serde(default)]
    pub images: HashMap<String, Vec<String>>,
}

impl LinkGraph {
    /// Outgoing links for a domain.
    pub fn outgoing(&self, domain: &str) -> &[String] {
        self.links_to.get(domain).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming links for a domain.
    pub fn incoming(&self, domain: &str) -> &[String] {
        self.linked_from
            .get(domain)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of outgoing links. Domains without a `links_to` entry rank
    /// lowest, same as an empty list.
    pub fn out_degree(&self, domain: &str) -> usize {
        self.outgoing(domain).len()
    }

    /// Every domain the graph knows about: keys of both edge maps plus
    /// every domain mentioned inside an edge list.
    pub fn domains(&self) -> HashSet<&str> {
        let mut all: HashSet<&str> = HashSet::new();
        for (domain, targets) in self.links_to.iter().chain(self.linked_from.iter()) {
            all.insert(domain.as_str());
            all.extend(targets.iter().map(String::as_str));
        }
        all
    }
}
