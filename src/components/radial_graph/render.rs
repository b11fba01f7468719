use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::RadialGraphState;
use super::types::Edge;

/// Drawing primitives a frame needs.
pub trait Painter {
	fn fill_background(&self, color: &str, width: f64, height: f64);
	fn line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
	fn circle(&self, center: (f64, f64), radius: f64, color: &str);
	fn text(&self, text: &str, at: (f64, f64), color: &str, size: f64);
}

impl Painter for CanvasRenderingContext2d {
	fn fill_background(&self, color: &str, width: f64, height: f64) {
		self.set_fill_style_str(color);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn circle(&self, center: (f64, f64), radius: f64, color: &str) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(color);
		self.fill();
	}

	fn text(&self, text: &str, at: (f64, f64), color: &str, size: f64) {
		self.set_fill_style_str(color);
		self.set_font(&format!("{}px monospace", size.max(1.0)));
		self.set_text_align("center");
		self.set_text_baseline("middle");
		let _ = self.fill_text(text, at.0, at.1);
	}
}

/// Draws one frame. Call [`RadialGraphState::pre_update`] first.
pub fn render<P: Painter + ?Sized>(state: &RadialGraphState, painter: &P) {
	let (width, height) = state.size();
	painter.fill_background(state.config.background, width as f64, height as f64);
	draw_edges(state, painter);
	draw_vertices(state, painter);
}

fn draw_edges<P: Painter + ?Sized>(state: &RadialGraphState, painter: &P) {
	let draw = |edge: &Edge, color: &str| {
		let (Some(from), Some(to)) = (state.position(edge.start), state.position(edge.end)) else {
			return;
		};
		painter.line(from, to, color, state.edge_width(edge));
	};

	for edge in state.graph.edges() {
		if !state.selection.is_incident(edge) {
			draw(edge, state.config.edge_color);
		}
	}
	// highlighted edges go on top
	for edge in state.selection.incident_edges() {
		draw(edge, state.config.connected_color);
	}
}

fn draw_vertices<P: Painter + ?Sized>(state: &RadialGraphState, painter: &P) {
	let label_size = state.label_size();
	for v in state.vertices() {
		let Some(pos) = state.position(v.index) else {
			continue;
		};
		painter.circle(pos, v.radius, state.vertex_color(v.index));
		painter.text(&v.label, pos, state.config.label_color, label_size);
	}
}
