use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::GraphConfig;
use super::render;
use super::state::RadialGraphState;
use super::types::GraphData;
use crate::error::CanvasError;

type SharedState = Rc<RefCell<Option<RadialGraphState>>>;
type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ResizeClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[component]
pub fn RadialGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(default = GraphConfig::default())] config: GraphConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: FrameClosure = Rc::new(RefCell::new(None));
	let resize_cb: ResizeClosure = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let size = CanvasSize {
			fullscreen,
			width,
			height,
		};
		let handles = Handles {
			state: state_init.clone(),
			animate: animate_init.clone(),
			resize_cb: resize_cb_init.clone(),
		};
		if let Err(e) = start(&canvas, data.get(), config.clone(), size, handles) {
			error!("Radial graph canvas setup failed: {e}");
		}
	});

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		if let Some(ref mut s) = *state_click.borrow_mut() {
			s.on_click(x, y);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="radial-graph-canvas"
			on:click=on_click
			style="display: block; cursor: pointer;"
		/>
	}
}

#[derive(Clone, Copy)]
struct CanvasSize {
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
}

struct Handles {
	state: SharedState,
	animate: FrameClosure,
	resize_cb: ResizeClosure,
}

fn start(
	canvas: &HtmlCanvasElement,
	data: GraphData,
	config: GraphConfig,
	size: CanvasSize,
	handles: Handles,
) -> Result<(), CanvasError> {
	let window = web_sys::window().ok_or(CanvasError::WindowNotAvailable)?;
	let (w, h) = if size.fullscreen {
		window_size(&window)?
	} else {
		(
			size.width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			size.height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		)
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.map_err(|e| CanvasError::ContextUnavailable(format!("{e:?}")))?
		.ok_or_else(|| CanvasError::ContextUnavailable("no 2d context".into()))?
		.dyn_into()
		.map_err(|_| CanvasError::ContextUnavailable("not a 2d context".into()))?;

	let interval = config.frame_interval_ms();
	*handles.state.borrow_mut() = Some(RadialGraphState::new(data, config, w as u32, h as u32));
	info!("Radial graph canvas started at {}x{}", w, h);

	if size.fullscreen {
		let (state_resize, canvas_resize) = (handles.state.clone(), canvas.clone());
		*handles.resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = match window_size(&win) {
				Ok(size) => size,
				Err(e) => {
					error!("Resize ignored: {e}");
					return;
				}
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.on_resize(nw as u32, nh as u32);
			}
		}));
		if let Some(ref cb) = *handles.resize_cb.borrow() {
			window
				.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())
				.map_err(|e| CanvasError::ListenerFailed {
					event: "resize",
					reason: format!("{e:?}"),
				})?;
		}
	}

	let last_frame: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
	let (state_anim, animate_inner) = (handles.state.clone(), handles.animate.clone());
	*handles.animate.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
		let due = last_frame.get().is_none_or(|t| timestamp - t >= interval);
		if due {
			last_frame.set(Some(timestamp));
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.pre_update();
				render::render(s, &ctx);
			}
		}
		if let Err(e) = request_frame(&animate_inner) {
			error!("Animation stopped: {e}");
		}
	}));
	request_frame(&handles.animate)
}

fn window_size(window: &Window) -> Result<(f64, f64), CanvasError> {
	Ok((
		js_number(window.inner_width())?,
		js_number(window.inner_height())?,
	))
}

fn js_number(value: Result<JsValue, JsValue>) -> Result<f64, CanvasError> {
	value
		.map_err(|e| CanvasError::WindowSize(format!("{e:?}")))?
		.as_f64()
		.ok_or_else(|| CanvasError::WindowSize("not a number".into()))
}

fn request_frame(closure: &FrameClosure) -> Result<(), CanvasError> {
	let window = web_sys::window().ok_or(CanvasError::WindowNotAvailable)?;
	if let Some(ref cb) = *closure.borrow() {
		window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.map_err(|e| CanvasError::RequestFrameFailed(format!("{e:?}")))?;
	}
	Ok(())
}
