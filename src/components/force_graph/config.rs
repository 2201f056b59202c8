use force_graph::SimulationParameters;

/// Tunables for the canvas and its physics.
#[derive(Clone, Debug, PartialEq)]
pub struct ForceGraphConfig {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	/// CSS colour of the canvas background.
	pub background: String,
	/// RGB of edges and arrow heads; alpha is driven by hover state.
	pub link_rgb: (u8, u8, u8),
	/// Draw link labels on edges touching the hovered node.
	pub link_labels: bool,
}

impl Default for ForceGraphConfig {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			background: "#111827".into(),
			link_rgb: (100, 180, 255),
			link_labels: true,
		}
	}
}

impl ForceGraphConfig {
	pub fn simulation(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}

	pub fn link_color(&self, alpha: f64) -> String {
		let (r, g, b) = self.link_rgb;
		format!("rgba({r}, {g}, {b}, {alpha})")
	}
}
