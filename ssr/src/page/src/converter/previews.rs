use component::video_player::VideoPlayer;
use consts::{
    copy::{CONVERTED_LABEL, ORIGINAL_LABEL},
    CONVERTED_PREVIEW_FILTER,
};
use leptos::prelude::*;

use super::ConverterSignal;

/// Original and "converted" players side by side. The converted one plays the
/// very same object URL, only restyled.
#[component]
pub fn PreviewGrid(state: ConverterSignal) -> impl IntoView {
    let preview = Signal::derive(move || state.with(|s| s.preview_url()));
    let result = Signal::derive(move || state.with(|s| s.result_url()));

    view! {
        <Show when=move || preview.with(Option::is_some)>
            <div class="mb-8">
                <div class="grid md:grid-cols-2 gap-6">
                    <VideoPlayer title=ORIGINAL_LABEL src=preview />
                    <Show when=move || result.with(Option::is_some)>
                        <VideoPlayer
                            title=CONVERTED_LABEL
                            src=result
                            filter=CONVERTED_PREVIEW_FILTER
                            overlay=true
                            title_class="text-pink-300"
                        />
                    </Show>
                </div>
            </div>
        </Show>
    }
}
