//! Canvas components.

pub mod radial_graph;
