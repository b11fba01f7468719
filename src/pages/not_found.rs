use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<h1>"Not found"</h1>
		<p>"Nothing lives at this address."</p>
		<a href="/">"Back to the graph"</a>
	}
}
