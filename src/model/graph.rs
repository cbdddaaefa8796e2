use std::collections::HashMap;

use serde::Serialize;

use crate::constants::CONTRACT_CREATION_PLACEHOLDER;

#[derive(Debug, Clone, Serialize)]
pub struct AddressNode {
    pub address: String,
    /// Indices into the graph's edge list
    pub outgoing: Vec<usize>,
    pub incoming: Vec<usize>,
}

impl AddressNode {
    fn new(address: String) -> Self {
        Self {
            address,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    pub fn degree(&self) -> usize {
        self.outgoing.len() + self.incoming.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionEdge {
    pub from: String,
    pub to: String,
    pub hash: String,
    pub value_eth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeEntry {
    pub address: String,
    pub degree: usize,
}

/// Directed multigraph of address-to-address transfers.
///
/// Nodes keep first-seen order so every listing derived from the graph is
/// deterministic. Parallel edges are kept; a self-transfer counts once in
/// each direction of the same node.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionGraph {
    nodes: Vec<AddressNode>,
    edges: Vec<TransactionEdge>,
    #[serde(skip)]
    node_indices: HashMap<String, usize>,
    contract_creations: usize,
}

impl TransactionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(
        &mut self,
        address: &str,
    ) -> usize {
        if let Some(&idx) = self.node_indices.get(address) {
            return idx;
        }

        let idx = self.nodes.len();
        self.nodes.push(AddressNode::new(address.to_string()));
        self.node_indices.insert(address.to_string(), idx);

        idx
    }

    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        hash: &str,
        value_eth: f64,
    ) -> usize {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);

        let edge_idx = self.edges.len();
        self.edges.push(TransactionEdge {
            from: from.to_string(),
            to: to.to_string(),
            hash: hash.to_string(),
            value_eth,
        });

        self.nodes[from_idx].outgoing.push(edge_idx);
        self.nodes[to_idx].incoming.push(edge_idx);

        edge_idx
    }

    /// Place one transaction in the graph. Empty addresses get no node, and an
    /// edge is added only when both ends are known (or the placeholder stands in
    /// for a missing destination).
    pub fn add_transaction(
        &mut self,
        from: &str,
        to: Option<&str>,
        hash: &str,
        value_eth: f64,
        with_placeholder: bool,
    ) {
        let from = Some(from).filter(|address| !address.trim().is_empty());
        let to = to.filter(|address| !address.trim().is_empty());

        match (from, to) {
            (Some(from), Some(to)) => {
                self.add_edge(from, to, hash, value_eth);
            },
            (Some(from), None) => self.add_contract_creation(from, hash, value_eth, with_placeholder),
            (None, Some(to)) => {
                self.add_node(to);
            },
            (None, None) => self.contract_creations += 1,
        }
    }

    /// Register a transaction that has no destination address.
    pub fn add_contract_creation(
        &mut self,
        from: &str,
        hash: &str,
        value_eth: f64,
        with_placeholder: bool,
    ) {
        self.contract_creations += 1;
        if with_placeholder {
            self.add_edge(from, CONTRACT_CREATION_PLACEHOLDER, hash, value_eth);
        } else {
            self.add_node(from);
        }
    }

    pub fn contains(
        &self,
        address: &str,
    ) -> bool {
        self.node_indices.contains_key(address)
    }

    pub fn node(
        &self,
        address: &str,
    ) -> Option<&AddressNode> {
        self.node_indices.get(address).map(|&idx| &self.nodes[idx])
    }

    pub fn degree(
        &self,
        address: &str,
    ) -> usize {
        self.node(address).map(AddressNode::degree).unwrap_or(0)
    }

    /// In+out edge counts per node, first-seen order
    pub fn degrees(&self) -> Vec<DegreeEntry> {
        self.nodes
            .iter()
            .map(|node| DegreeEntry {
                address: node.address.clone(),
                degree: node.degree(),
            })
            .collect()
    }

    /// Highest-degree nodes, descending. Ties keep first-seen order.
    pub fn top_degrees(
        &self,
        n: usize,
    ) -> Vec<DegreeEntry> {
        let mut degrees = self.degrees();
        degrees.sort_by(|a, b| b.degree.cmp(&a.degree));
        degrees.truncate(n);
        degrees
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contract_creations(&self) -> usize {
        self.contract_creations
    }

    pub fn nodes(&self) -> &[AddressNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[TransactionEdge] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_node_is_idempotent() {
        let mut graph = TransactionGraph::new();
        let a = graph.add_node("0xa");
        let b = graph.add_node("0xb");
        assert_eq!(graph.add_node("0xa"), a);
        assert_ne!(a, b);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn keeps_parallel_edges() {
        let mut graph = TransactionGraph::new();
        graph.add_edge("0xa", "0xb", "0x01", 1.0);
        graph.add_edge("0xa", "0xb", "0x02", 2.0);

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree("0xa"), 2);
        assert_eq!(graph.degree("0xb"), 2);
        assert_eq!(graph.node("0xa").unwrap().outgoing, vec![0, 1]);
        assert_eq!(graph.node("0xb").unwrap().incoming, vec![0, 1]);
    }

    #[test]
    fn self_transfer_counts_both_directions() {
        let mut graph = TransactionGraph::new();
        graph.add_edge("0xa", "0xa", "0x01", 1.0);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.degree("0xa"), 2);
    }

    #[test]
    fn contract_creation_policies() {
        let mut omit = TransactionGraph::new();
        omit.add_contract_creation("0xa", "0x01", 0.0, false);
        assert_eq!(omit.node_count(), 1);
        assert_eq!(omit.edge_count(), 0);
        assert_eq!(omit.degree("0xa"), 0);
        assert_eq!(omit.contract_creations(), 1);

        let mut placeholder = TransactionGraph::new();
        placeholder.add_contract_creation("0xa", "0x01", 0.0, true);
        assert_eq!(placeholder.node_count(), 2);
        assert_eq!(placeholder.degree(CONTRACT_CREATION_PLACEHOLDER), 1);
        assert_eq!(placeholder.degree("0xa"), 1);
    }

    #[test]
    fn top_degrees_sorts_descending_with_stable_ties() {
        let mut graph = TransactionGraph::new();
        graph.add_edge("0xa", "0xb", "0x01", 1.0);
        graph.add_edge("0xc", "0xb", "0x02", 1.0);
        graph.add_edge("0xd", "0xe", "0x03", 1.0);

        let top = graph.top_degrees(3);
        let addresses: Vec<&str> = top.iter().map(|e| e.address.as_str()).collect();
        assert_eq!(addresses, vec!["0xb", "0xa", "0xc"]);
        assert_eq!(top[0].degree, 2);

        assert_eq!(graph.top_degrees(10).len(), 5);
        assert!(TransactionGraph::new().top_degrees(10).is_empty());
    }

    #[test]
    fn empty_addresses_get_no_node() {
        let mut graph = TransactionGraph::new();
        graph.add_transaction("", Some("0xb"), "0x01", 1.0, false);
        graph.add_transaction("  ", None, "0x02", 0.0, true);
        graph.add_transaction("0xa", Some(""), "0x03", 1.0, false);
        graph.add_transaction("0xa", Some("0xb"), "0x04", 1.0, false);

        assert!(!graph.contains(""));
        assert!(!graph.contains("  "));
        assert!(!graph.contains(CONTRACT_CREATION_PLACEHOLDER));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree("0xb"), 1);
        assert_eq!(graph.contract_creations(), 2);
    }
}
