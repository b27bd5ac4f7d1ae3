use component::buttons::{ButtonTone, GradientButton};
use leptos::prelude::*;
use state::converter::ConverterState;

use super::{dispatch, BrowserHost, ConverterSignal};

#[component]
pub fn ConverterActions(state: ConverterSignal, host: BrowserHost) -> impl IntoView {
    let has_result = Signal::derive(move || state.with(|s| s.has_result()));
    let has_selection = Signal::derive(move || state.with(|s| s.has_selection()));
    let processing = Signal::derive(move || state.with(|s| s.processing()));
    let cannot_convert = Signal::derive(move || state.with(|s| !s.can_convert()));

    let convert = move || dispatch(state, host, ConverterState::convert);
    let download = move || {
        for command in state.with_untracked(|s| s.download()) {
            command.run(&host);
        }
    };
    let reset = move || dispatch(state, host, ConverterState::reset);

    view! {
        <div class="flex gap-4 justify-center">
            <Show
                when=move || has_result.get()
                fallback=move || {
                    view! {
                        <GradientButton on_click=convert disabled=cannot_convert>
                            {move || {
                                if processing.get() { "Converting..." } else { "Convert to Real Video" }
                            }}
                        </GradientButton>
                        <Show when=move || has_selection.get()>
                            <GradientButton tone=ButtonTone::Neutral on_click=reset>
                                "Start Over"
                            </GradientButton>
                        </Show>
                    }
                }
            >
                <GradientButton tone=ButtonTone::Success on_click=download>
                    "Download Result"
                </GradientButton>
                <GradientButton tone=ButtonTone::Neutral on_click=reset>
                    "Convert Another"
                </GradientButton>
            </Show>
        </div>
    }
}
