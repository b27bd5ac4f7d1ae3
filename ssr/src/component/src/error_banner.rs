use leptos::prelude::*;

/// Inline error text, hidden while `message` is empty.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| !m.is_empty())>
            <div class="bg-red-500/20 border border-red-500 rounded-lg p-4 mb-6 text-red-300">
                {message}
            </div>
        </Show>
    }
}
