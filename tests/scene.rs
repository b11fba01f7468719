//! Full frames driven through a recording painter.

use std::cell::RefCell;

use radial_graph_canvas::components::radial_graph::render::{Painter, render};
use radial_graph_canvas::components::radial_graph::{GraphConfig, GraphData, RadialGraphState};

#[derive(Clone, Debug, PartialEq)]
enum Op {
	Background(String),
	Line {
		from: (f64, f64),
		to: (f64, f64),
		color: String,
		width: f64,
	},
	Circle {
		center: (f64, f64),
		radius: f64,
		color: String,
	},
	Text {
		text: String,
		color: String,
	},
}

#[derive(Default)]
struct Recorder {
	ops: RefCell<Vec<Op>>,
}

impl Recorder {
	fn take(&self) -> Vec<Op> {
		std::mem::take(&mut *self.ops.borrow_mut())
	}
}

impl Painter for Recorder {
	fn fill_background(&self, color: &str, _width: f64, _height: f64) {
		self.ops.borrow_mut().push(Op::Background(color.into()));
	}

	fn line(&self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.ops.borrow_mut().push(Op::Line {
			from,
			to,
			color: color.into(),
			width,
		});
	}

	fn circle(&self, center: (f64, f64), radius: f64, color: &str) {
		self.ops.borrow_mut().push(Op::Circle {
			center,
			radius,
			color: color.into(),
		});
	}

	fn text(&self, text: &str, _at: (f64, f64), color: &str, _size: f64) {
		self.ops.borrow_mut().push(Op::Text {
			text: text.into(),
			color: color.into(),
		});
	}
}

fn scene(source: &str) -> RadialGraphState {
	let graph = GraphData::parse(source).unwrap();
	RadialGraphState::new(graph, GraphConfig::default(), 600, 600)
}

fn frame(state: &mut RadialGraphState, painter: &Recorder) -> Vec<Op> {
	state.pre_update();
	render(state, painter);
	painter.take()
}

fn lines(ops: &[Op]) -> Vec<(String, f64)> {
	ops.iter()
		.filter_map(|op| match op {
			Op::Line { color, width, .. } => Some((color.clone(), *width)),
			_ => None,
		})
		.collect()
}

fn circle_colors(ops: &[Op]) -> Vec<String> {
	ops.iter()
		.filter_map(|op| match op {
			Op::Circle { color, .. } => Some(color.clone()),
			_ => None,
		})
		.collect()
}

#[test]
fn unselected_frame_draws_every_edge_in_base_color() {
	let config = GraphConfig::default();
	let mut s = scene("3 3\n1 2 5\n2 3 5\n1 3 10");
	let ops = frame(&mut s, &Recorder::default());

	assert_eq!(ops[0], Op::Background(config.background.into()));
	assert_eq!(
		lines(&ops),
		vec![
			(config.edge_color.to_string(), 2.0),
			(config.edge_color.to_string(), 2.0),
			(config.edge_color.to_string(), 10.0),
		]
	);
	assert_eq!(circle_colors(&ops), vec![config.vertex_color.to_string(); 3]);
	let labels: Vec<_> = ops
		.iter()
		.filter_map(|op| match op {
			Op::Text { text, color } => {
				assert_eq!(color, config.label_color);
				Some(text.as_str())
			}
			_ => None,
		})
		.collect();
	assert_eq!(labels, vec!["1", "2", "3"]);
}

#[test]
fn selecting_a_vertex_highlights_incident_edges_last() {
	let config = GraphConfig::default();
	let painter = Recorder::default();
	let mut s = scene("3 3\n1 2 5\n2 3 5\n1 3 10");
	frame(&mut s, &painter);

	// vertex 1 sits at (radius, 0) from the centre: (500, 300)
	assert_eq!(s.on_click(500.0, 300.0), Some(1));
	let ops = frame(&mut s, &painter);

	assert_eq!(
		lines(&ops),
		vec![
			(config.edge_color.to_string(), 2.0),
			(config.connected_color.to_string(), 2.0),
			(config.connected_color.to_string(), 10.0),
		]
	);
	assert_eq!(
		circle_colors(&ops),
		vec![
			config.selected_color.to_string(),
			config.connected_color.to_string(),
			config.connected_color.to_string(),
		]
	);

	// cached highlight persists on later frames
	assert!(!s.pre_update());
	assert_eq!(lines(&frame(&mut s, &painter)), lines(&ops));
}

#[test]
fn switching_selection_moves_the_highlight() {
	let config = GraphConfig::default();
	let painter = Recorder::default();
	let mut s = scene("4 2\n1 2 1\n3 4 2");
	frame(&mut s, &painter);

	s.selection.select(1);
	frame(&mut s, &painter);
	s.selection.select(3);
	let ops = frame(&mut s, &painter);

	assert_eq!(
		circle_colors(&ops),
		vec![
			config.vertex_color.to_string(),
			config.vertex_color.to_string(),
			config.selected_color.to_string(),
			config.connected_color.to_string(),
		]
	);
	assert_eq!(
		lines(&ops),
		vec![
			(config.edge_color.to_string(), 2.0),
			(config.connected_color.to_string(), 10.0),
		]
	);
}

#[test]
fn equal_weights_use_the_middle_width() {
	let mut s = scene("3 2\n1 2 7\n2 3 7");
	let widths: Vec<f64> = lines(&frame(&mut s, &Recorder::default()))
		.into_iter()
		.map(|(_, w)| w)
		.collect();
	assert_eq!(widths, vec![6.0, 6.0]);
}

#[test]
fn graph_without_edges_still_lays_out_vertices() {
	let mut s = scene("2 0");
	let ops = frame(&mut s, &Recorder::default());
	assert!(lines(&ops).is_empty());
	let centers: Vec<(f64, f64)> = ops
		.iter()
		.filter_map(|op| match op {
			Op::Circle { center, .. } => Some(*center),
			_ => None,
		})
		.collect();
	assert_eq!(centers.len(), 2);
	assert_eq!(centers[0], (500.0, 300.0));
	assert!((centers[1].0 - 100.0).abs() < 1e-9);
	assert!((centers[1].1 - 300.0).abs() < 1e-9);
}

#[test]
fn empty_graph_draws_only_background() {
	let mut s = scene("0 0");
	let ops = frame(&mut s, &Recorder::default());
	assert_eq!(ops.len(), 1);
}

#[test]
fn resize_moves_vertices_with_the_window() {
	let painter = Recorder::default();
	let mut s = scene("1 0");
	frame(&mut s, &painter);
	s.on_resize(900, 300);
	let ops = frame(&mut s, &painter);
	assert!(ops.contains(&Op::Circle {
		center: (550.0, 150.0),
		radius: 7.0,
		color: GraphConfig::default().vertex_color.into(),
	}));
}
