use std::collections::BTreeSet;

use super::types::Edge;

/// The currently selected vertex and the edges incident to it.
///
/// `connected` and `incident` are derived from the edge list and only
/// rebuilt by [`SelectionState::refresh`] after a [`SelectionState::select`].
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
	selected: Option<usize>,
	connected: BTreeSet<usize>,
	incident: Vec<Edge>,
	changed: bool,
}

impl SelectionState {
	pub fn select(&mut self, index: usize) {
		self.selected = Some(index);
		self.changed = true;
	}

	/// Rebuilds the derived sets if the selection changed since the last call.
	/// Returns whether a rebuild happened.
	pub fn refresh(&mut self, edges: &[Edge]) -> bool {
		if !self.changed {
			return false;
		}
		self.connected.clear();
		self.incident.clear();

		if let Some(idx) = self.selected {
			for edge in edges.iter().filter(|e| e.touches(idx)) {
				self.connected.insert(edge.start);
				self.connected.insert(edge.end);
				self.incident.push(*edge);
			}
		}
		self.changed = false;
		true
	}

	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn is_selected(&self, index: usize) -> bool {
		self.selected == Some(index)
	}

	pub fn is_connected(&self, index: usize) -> bool {
		self.connected.contains(&index)
	}

	pub fn is_incident(&self, edge: &Edge) -> bool {
		self.selected.is_some_and(|idx| edge.touches(idx))
	}

	pub fn connected(&self) -> &BTreeSet<usize> {
		&self.connected
	}

	pub fn incident_edges(&self) -> &[Edge] {
		&self.incident
	}

	pub fn is_changed(&self) -> bool {
		self.changed
	}
}
