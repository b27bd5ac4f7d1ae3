use consts::{
    copy::{UPLOAD_HINT, UPLOAD_PROMPT},
    VIDEO_ACCEPT,
};
use leptos::{html::Input, prelude::*};
use leptos_icons::*;
use utils::web::PickedFile;
use web_sys::HtmlInputElement;

/// Dashed upload target wrapping a hidden file input. `on_pick` receives
/// `None` when the input changed without a file.
#[component]
pub fn DropZone(node_ref: NodeRef<Input>, on_pick: Callback<Option<PickedFile>>) -> impl IntoView {
    view! {
        <label class="block text-center">
            <input
                node_ref=node_ref
                type="file"
                accept=VIDEO_ACCEPT
                class="hidden"
                on:change=move |ev| {
                    let input = event_target::<HtmlInputElement>(&ev);
                    on_pick.run(PickedFile::from_input(&input));
                }
            />
            <div class="cursor-pointer border-2 border-dashed border-purple-500 rounded-xl p-12 hover:border-pink-500 hover:scale-[1.02] active:scale-[0.98] transition-all">
                <Icon attr:class="mx-auto h-16 w-16 text-purple-400 mb-4" icon=icondata::BiCloudUploadRegular />
                <p class="text-xl font-semibold mb-2">{UPLOAD_PROMPT}</p>
                <p class="text-gray-400 text-sm">{UPLOAD_HINT}</p>
            </div>
        </label>
    }
}
