use leptos::prelude::*;
use log::error;

use crate::components::radial_graph::{GraphData, RadialGraphCanvas};
use crate::error::LoadError;

/// Graph description shipped with the app.
const GRAPH_SOURCE: &str = include_str!("../../graf.txt");

fn load_graph(source: &str) -> Result<GraphData, LoadError> {
	GraphData::parse(source).inspect_err(|e| error!("Failed to load graph: {e}"))
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph = load_graph(GRAPH_SOURCE);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Could not load the graph"</h1>

				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				{graph.map(|data| view! { <RadialGraphCanvas data=Signal::stored(data) fullscreen=true /> })}
				<div class="graph-overlay">
					<h1>"Weighted Graph"</h1>
					<p class="subtitle">"Click a vertex to highlight its edges and neighbours."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
