mod component;
pub mod config;
pub mod layout;
pub mod registry;
pub mod render;
pub mod scale;
pub mod selection;
pub mod state;
mod types;

pub use component::RadialGraphCanvas;
pub use config::GraphConfig;
pub use state::RadialGraphState;
pub use types::{Edge, GraphData, WeightRange};
