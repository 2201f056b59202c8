use leptos::ev::Event;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::info;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

use crate::error::LoadError;
use crate::loader::parse_collection;
use crate::session::Session;

fn io_error(err: JsValue) -> LoadError {
	let message = err
		.dyn_ref::<js_sys::Error>()
		.map(|e| String::from(e.message()))
		.or_else(|| err.as_string())
		.unwrap_or_else(|| format!("{err:?}"));
	LoadError::Io(message)
}

async fn read_file(file: File) -> Result<String, LoadError> {
	let text = JsFuture::from(file.text()).await.map_err(io_error)?;
	text.as_string().ok_or(LoadError::EmptyInput)
}

/// File picker that reads a JSONL export into the session.
///
/// Disabled while a load is in flight so loads never overlap.
#[component]
pub fn FileInput(session: RwSignal<Session>, #[prop(into)] label: String) -> impl IntoView {
	let loading = move || session.with(Session::is_loading);

	let on_change = move |ev: Event| {
		let input: HtmlInputElement = event_target(&ev);
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			return;
		};
		// Clear so picking the same file again still fires `change`.
		input.set_value("");
		if !session.try_update(Session::begin_load).unwrap_or(false) {
			return;
		}
		info!("reading {} ({} bytes)", file.name(), file.size());
		spawn_local(async move {
			let result = match read_file(file).await {
				Ok(text) => parse_collection(&text),
				Err(err) => Err(err),
			};
			session.update(|s| s.finish_load(result));
		});
	};

	view! {
		<label class="file-picker" class:disabled=loading>
			{move || if loading() { "Parsing...".to_string() } else { label.clone() }}
			<input
				type="file"
				accept=".jsonl,application/x-jsonlines"
				style="display: none;"
				prop:disabled=loading
				on:change=on_change
			/>
		</label>
	}
}
