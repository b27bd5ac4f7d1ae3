use leptos::prelude::*;

/// Playable preview of a local object URL.
///
/// `filter` is applied as a CSS filter on the element only; with `overlay`
/// a tinted layer is stacked on top that lets clicks through to the controls.
#[component]
pub fn VideoPlayer(
    #[prop(into)] title: String,
    #[prop(into)] src: Signal<Option<String>>,
    #[prop(optional)] filter: Option<&'static str>,
    #[prop(optional)] overlay: bool,
    #[prop(default = "text-purple-300")] title_class: &'static str,
) -> impl IntoView {
    let style = filter.map(|f| format!("filter: {f};")).unwrap_or_default();

    view! {
        <div>
            <h3 class=format!("text-lg font-semibold mb-3 {title_class}")>{title}</h3>
            <div class="relative">
                <video
                    src=src
                    controls
                    playsinline
                    preload="metadata"
                    class="w-full rounded-lg shadow-lg"
                    style=style
                >
                    <p class="text-white p-4">"Your browser doesn't support video playback."</p>
                </video>
                <Show when=move || overlay>
                    <div class="absolute inset-0 pointer-events-none rounded-lg bg-gradient-to-br from-transparent via-transparent to-purple-500/10"></div>
                </Show>
            </div>
        </div>
    }
}
