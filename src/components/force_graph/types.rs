use serde::{Deserialize, Serialize};

/// A node as the canvas draws it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
	pub id: String,
	/// Text drawn next to the node at all times.
	#[serde(default)]
	pub label: Option<String>,
	/// Text drawn while the node is hovered.
	#[serde(default)]
	pub title: Option<String>,
	#[serde(default)]
	pub color: Option<String>,
	#[serde(default)]
	pub radius: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	#[serde(default)]
	pub label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
