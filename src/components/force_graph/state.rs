use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};

use super::config::ForceGraphConfig;
use super::scale::DEFAULT_RADIUS;
use super::types::GraphData;

const DEFAULT_COLOR: &str = "#ffffff";

pub const HIT_RADIUS: f64 = 12.0;
/// Pointer travel, in screen pixels, below which a press counts as a click.
pub const CLICK_SLOP: f64 = 3.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: Option<String>,
	pub title: Option<String>,
	pub color: String,
	pub radius: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub config: ForceGraphConfig,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	edge_labels: HashMap<(DefaultNodeIdx, DefaultNodeIdx), String>,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, config: ForceGraphConfig) -> Self {
		let mut graph = ForceGraph::new(config.simulation());
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();
		let mut edge_labels = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = ((100.0 * angle.cos()) as f32, (100.0 * angle.sin()) as f32);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					title: node.title.clone(),
					color: node.color.clone().unwrap_or_else(|| DEFAULT_COLOR.into()),
					radius: node.radius.unwrap_or(DEFAULT_RADIUS),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
				if let Some(label) = &link.label {
					edge_labels.insert((src, tgt), label.clone());
				}
			}
		}

		Self {
			graph,
			config,
			edges,
			edge_labels,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		}
	}

	/// Carries the viewport of a previous state over so a data change does not
	/// reset pan and zoom.
	pub fn keep_view(&mut self, previous: &ForceGraphState) {
		self.transform = previous.transform.clone();
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// world-space, scales with zoom like nodes
			let reach = node.data.user_data.radius.max(HIT_RADIUS);
			if (dx * dx + dy * dy).sqrt() < reach {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	pub fn edge_label(&self, src: DefaultNodeIdx, tgt: DefaultNodeIdx) -> Option<&str> {
		self.edge_labels.get(&(src, tgt)).map(String::as_str)
	}

	/// Records pointer travel during a drag and reports whether it still
	/// qualifies as a click.
	pub fn track_drag(&mut self, x: f64, y: f64) -> bool {
		let (dx, dy) = (x - self.drag.start_x, y - self.drag.start_y);
		if (dx * dx + dy * dy).sqrt() > CLICK_SLOP {
			self.drag.moved = true;
		}
		!self.drag.moved
	}

	/// Ends a drag, returning the id of the node if the press was a click.
	pub fn release(&mut self) -> Option<String> {
		let clicked = match (self.drag.active, self.drag.node_idx) {
			(true, Some(idx)) if !self.drag.moved => self.node_id(idx),
			_ => None,
		};
		self.drag = DragState::default();
		self.pan.active = false;
		clicked
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	/// Whether the edge touches the hovered node.
	pub fn is_hovered_edge(&self, src: DefaultNodeIdx, tgt: DefaultNodeIdx) -> bool {
		self.is_hovered(src) || self.is_hovered(tgt)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
