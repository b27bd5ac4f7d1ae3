use leptos::prelude::*;

#[component]
pub fn ProgressBar(#[prop(into)] label: String, #[prop(into)] percent: Signal<u8>) -> impl IntoView {
    view! {
        <div class="mb-8">
            <div class="flex items-center justify-between mb-2">
                <span class="text-sm font-medium text-purple-300">{label}</span>
                <span class="text-sm font-medium text-purple-300">{move || format!("{}%", percent.get())}</span>
            </div>
            <div class="w-full bg-gray-700 rounded-full h-3 overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-purple-500 to-pink-500 transition-all duration-300"
                    style:width=move || format!("{}%", percent.get())
                ></div>
            </div>
        </div>
    }
}
