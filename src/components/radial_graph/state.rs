use log::{debug, info, trace};

use super::config::GraphConfig;
use super::layout::{Layout, circular_positions};
use super::registry::{EntityId, Registry, Tag};
use super::scale::LinearScale;
use super::selection::SelectionState;
use super::types::{Edge, GraphData};

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
	pub index: usize,
	/// Offset from the window centre.
	pub base_position: (f64, f64),
	pub radius: f64,
	pub label: String,
}

pub struct RadialGraphState {
	pub graph: GraphData,
	pub config: GraphConfig,
	pub layout: Layout,
	pub selection: SelectionState,
	pub scale: LinearScale,
	vertices: Vec<Vertex>,
	positions: Vec<(f64, f64)>,
	registry: Registry,
}

impl RadialGraphState {
	pub fn new(graph: GraphData, config: GraphConfig, width: u32, height: u32) -> Self {
		let n = graph.vertex_count();
		let mut registry = Registry::default();
		registry.register(EntityId::Selection);

		let vertices = (1..=n)
			.map(|index| {
				registry.register(EntityId::Vertex(index));
				Vertex {
					index,
					base_position: (0.0, 0.0),
					radius: 0.0,
					label: index.to_string(),
				}
			})
			.collect();

		let mut state = Self {
			scale: LinearScale::new(graph.weight_range(), config.thickness),
			layout: Layout::new(n),
			selection: SelectionState::default(),
			positions: vec![(0.0, 0.0); n],
			graph,
			config,
			vertices,
			registry,
		};
		info!(
			"Loaded graph with {} vertices and {} edges",
			n,
			state.graph.edges().len()
		);
		state.on_resize(width, height);
		state
	}

	pub fn lookup_by_tag(&self, tag: Tag) -> &[EntityId] {
		let found = self.registry.lookup(tag);
		trace!("Lookup {:?}: {} entities", tag.as_str(), found.len());
		found
	}

	/// Recomputes circle radius, vertex radius and base positions.
	pub fn on_resize(&mut self, width: u32, height: u32) {
		self.layout.resize(
			width,
			height,
			self.config.radius_divisor,
			self.config.vertex_divisor,
		);
		self.update_vertices();
		debug!(
			"Resized to {}x{}, circle radius {}",
			width, height, self.layout.radius
		);
	}

	fn update_vertices(&mut self) {
		let order: Vec<usize> = self.registry.vertices().collect();
		let points = circular_positions(order.len(), self.layout.radius, self.layout.gamma);
		for (index, point) in order.into_iter().zip(points) {
			if let Some(v) = self.vertices.get_mut(index - 1) {
				v.base_position = point;
				v.radius = self.layout.vertex_radius;
			}
		}
	}

	/// Per-frame bookkeeping before drawing. Returns whether the selection
	/// was rebuilt this frame.
	pub fn pre_update(&mut self) -> bool {
		let refreshed = self.selection.refresh(self.graph.edges());
		if refreshed {
			debug!(
				"Selection {:?}: {} incident edges, connected {:?}",
				self.selection.selected(),
				self.selection.incident_edges().len(),
				self.selection.connected()
			);
		}
		for (slot, v) in self.positions.iter_mut().zip(&self.vertices) {
			*slot = self.layout.to_screen(v.base_position);
		}
		refreshed
	}

	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	/// Screen positions as of the last [`Self::pre_update`], by index − 1.
	pub fn positions(&self) -> &[(f64, f64)] {
		&self.positions
	}

	pub fn position(&self, index: usize) -> Option<(f64, f64)> {
		self.positions.get(index.checked_sub(1)?).copied()
	}

	pub fn screen_position(&self, index: usize) -> Option<(f64, f64)> {
		let v = self.vertices.get(index.checked_sub(1)?)?;
		Some(self.layout.to_screen(v.base_position))
	}

	/// Topmost vertex whose circle contains the screen point.
	pub fn vertex_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		self.registry.vertices().rev().find(|&index| {
			let (Some(v), Some((x, y))) = (
				self.vertices.get(index - 1),
				self.screen_position(index),
			) else {
				return false;
			};
			let (dx, dy) = (x - sx, y - sy);
			(dx * dx + dy * dy).sqrt() <= v.radius
		})
	}

	/// Selects the vertex under the pointer, if any.
	pub fn on_click(&mut self, sx: f64, sy: f64) -> Option<usize> {
		let hit = self.vertex_at_position(sx, sy)?;
		self.selection.select(hit);
		info!("Selected vertex {}", hit);
		Some(hit)
	}

	pub fn vertex_color(&self, index: usize) -> &'static str {
		if self.selection.is_selected(index) {
			self.config.selected_color
		} else if self.selection.is_connected(index) {
			self.config.connected_color
		} else {
			self.config.vertex_color
		}
	}

	pub fn edge_width(&self, edge: &Edge) -> f64 {
		self.scale.line_width(edge.weight)
	}

	/// Window size in pixels as of the last resize.
	pub fn size(&self) -> (u32, u32) {
		self.layout.size
	}

	pub fn label_size(&self) -> f64 {
		let (width, height) = self.size();
		width.min(height) as f64 * self.config.label_fraction
	}
}
