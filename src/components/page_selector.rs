use leptos::prelude::*;

use super::file_input::FileInput;
use crate::session::Session;

/// Sidebar listing every loaded page with a checkbox.
#[component]
pub fn PageSelector(session: RwSignal<Session>) -> impl IntoView {
	let all_selected = move || session.with(Session::all_selected);
	let select_all_label = move || session.with(Session::select_all_label);
	let load_error = move || session.with(|s| s.error().map(ToString::to_string));

	view! {
		<aside class="page-selector">
			<h2>"Pages"</h2>
			<label class="select-all">
				<input
					type="checkbox"
					prop:checked=all_selected
					on:change=move |_| session.update(Session::toggle_all)
				/>
				<span>{select_all_label}</span>
			</label>
			<ul class="page-list">
				<For
					each=move || session.with(|s| s.pages().to_vec())
					key=|page| page.unique_id.clone()
					children=move |page| {
						let id = page.unique_id.clone();
						let checked_id = id.clone();
						view! {
							<li>
								<label>
									<input
										type="checkbox"
										prop:checked=move || {
											session.with(|s| s.selection().is_selected(&checked_id))
										}
										on:change=move |_| session.update(|s| s.toggle_page(&id))
									/>
									<span>{page.title.clone()}</span>
								</label>
							</li>
						}
					}
				/>
			</ul>
			<div class="reload">
				<FileInput session label="Load another file" />
				{move || load_error().map(|message| view! { <p class="load-error">{message}</p> })}
			</div>
		</aside>
	}
}
