mod actions;
mod host;
mod previews;

use actions::ConverterActions;
use component::{
    drop_zone::DropZone, error_banner::ErrorBanner, feature_card::FeatureCard,
    progress_bar::ProgressBar,
};
use consts::{
    copy::{FEATURE_HIGHLIGHTS, PAGE_SUBTITLE, PAGE_TITLE, PROGRESS_LABEL},
    PROGRESS_TICK_INTERVAL,
};
use leptos::{html::Input, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_interval_fn_with_options, utils::Pausable, UseIntervalFnOptions};
use previews::PreviewGrid;
use state::converter::{Command, ConverterState, LocalFile};
use utils::web::PickedFile;

pub use host::BrowserHost;

pub(crate) type ConverterSignal = RwSignal<ConverterState<PickedFile>, LocalStorage>;

/// Applies one transition and runs whatever it asks of the host.
pub(crate) fn dispatch<F: LocalFile + 'static>(
    state: RwSignal<ConverterState<F>, LocalStorage>,
    host: BrowserHost,
    transition: impl FnOnce(&mut ConverterState<F>) -> Vec<Command>,
) {
    let commands = state.try_update(transition).unwrap_or_default();
    for command in commands {
        command.run(&host);
    }
}

#[component]
pub fn ConverterPage() -> impl IntoView {
    let state: ConverterSignal = RwSignal::new_local(ConverterState::new());
    let picker = NodeRef::<Input>::new();
    let host = BrowserHost::new(picker);

    // Paused until a conversion starts; leptos-use clears it when the page is
    // disposed.
    let Pausable { pause, resume, .. } = use_interval_fn_with_options(
        move || dispatch(state, host, ConverterState::tick),
        PROGRESS_TICK_INTERVAL.as_millis() as u64,
        UseIntervalFnOptions::default().immediate(false),
    );
    Effect::new(move |_| {
        if host.is_ticking() {
            resume();
        } else {
            pause();
        }
    });

    let on_pick = Callback::new(move |file: Option<PickedFile>| {
        dispatch(state, host, move |s| s.select(file))
    });
    let error = Signal::derive(move || state.with(|s| s.error_message()));
    let processing = Signal::derive(move || state.with(|s| s.processing()));
    let percent = Signal::derive(move || state.with(|s| s.percent()));

    view! {
        <Title text=PAGE_TITLE />
        <div class="min-h-screen bg-gradient-to-br from-purple-900 via-blue-900 to-black text-white">
            <div class="container mx-auto px-4 py-8">
                <div class="text-center mb-12">
                    <h1 class="text-5xl font-bold mb-4 bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                        {PAGE_TITLE}
                    </h1>
                    <p class="text-gray-300 text-lg">{PAGE_SUBTITLE}</p>
                </div>

                <div class="max-w-4xl mx-auto">
                    <div class="bg-gray-800/50 backdrop-blur-lg rounded-2xl p-8 shadow-2xl border border-gray-700">
                        <div class="mb-8">
                            <DropZone node_ref=picker on_pick=on_pick />
                        </div>

                        <ErrorBanner message=error />

                        <PreviewGrid state=state />

                        <Show when=move || processing.get()>
                            <ProgressBar label=PROGRESS_LABEL percent=percent />
                        </Show>

                        <ConverterActions state=state host=host />
                    </div>

                    // Static, purely decorative
                    <div class="mt-12 grid md:grid-cols-3 gap-6">
                        {FEATURE_HIGHLIGHTS
                            .into_iter()
                            .map(|feature| view! { <FeatureCard feature=feature /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
