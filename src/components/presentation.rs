//! Maps projected collection graphs onto what the canvas draws.

use crate::components::force_graph::scale::radius_for;
use crate::components::force_graph::{GraphData, GraphLink, GraphNode};
use crate::graph::{CollectionGraph, Node, NodeKind};

/// Fill colour per node kind.
pub fn color_for(kind: NodeKind) -> &'static str {
	match kind {
		NodeKind::Collection => "#f97316",
		NodeKind::Page => "#a855f7",
		NodeKind::Chunk => "#3b82f6",
		NodeKind::UrlLink => "#22c55e",
	}
}

fn render_node(node: &Node) -> GraphNode {
	// Chunks and links are numerous; their names only appear on hover.
	let label = match node.kind() {
		NodeKind::Collection | NodeKind::Page => Some(node.name.clone()),
		NodeKind::Chunk | NodeKind::UrlLink => None,
	};
	let title = match node.kind() {
		NodeKind::UrlLink => node.id.clone(),
		_ => node.name.clone(),
	};
	GraphNode {
		id: node.id.clone(),
		label,
		title: Some(title),
		color: Some(color_for(node.kind()).to_string()),
		radius: Some(radius_for(node.size_hint)),
	}
}

/// Canvas input for a projected graph.
pub fn to_graph_data(graph: &CollectionGraph) -> GraphData {
	GraphData {
		nodes: graph.nodes.iter().map(render_node).collect(),
		links: graph
			.links
			.iter()
			.map(|link| GraphLink {
				source: link.source.clone(),
				target: link.target.clone(),
				label: Some(link.label.to_string()),
			})
			.collect(),
	}
}

/// Full record behind a clicked canvas node.
pub fn resolve_click(graph: &CollectionGraph, id: &str) -> Option<Node> {
	graph.node(id).cloned()
}
