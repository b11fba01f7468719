/// Colours, sizes and timing for the radial graph canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	pub background: &'static str,
	pub vertex_color: &'static str,
	pub edge_color: &'static str,
	pub label_color: &'static str,
	pub selected_color: &'static str,
	pub connected_color: &'static str,
	/// Display range edge weights are mapped onto, in pixels.
	pub thickness: (f64, f64),
	/// Circle radius is `min(width, height) / radius_divisor`.
	pub radius_divisor: u32,
	/// Vertex radius is `min(width, height) / vertex_divisor`.
	pub vertex_divisor: u32,
	/// Label font size as a fraction of `min(width, height)`.
	pub label_fraction: f64,
	pub fps_target: u32,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			background: "rgb(20, 20, 20)",
			vertex_color: "rgb(0, 255, 255)",
			edge_color: "rgb(255, 255, 255)",
			label_color: "rgb(255, 0, 0)",
			selected_color: "rgb(0, 255, 0)",
			connected_color: "rgb(0, 150, 40)",
			thickness: (2.0, 10.0),
			radius_divisor: 3,
			vertex_divisor: 40,
			label_fraction: 0.03,
			fps_target: 20,
		}
	}
}

impl GraphConfig {
	/// Minimum milliseconds between two scene frames.
	pub fn frame_interval_ms(&self) -> f64 {
		1000.0 / self.fps_target.max(1) as f64
	}
}
