use leptos::prelude::*;

const BUTTON_BASE: &str = "px-8 py-3 rounded-lg font-semibold text-lg transition-all shadow-lg hover:scale-105 active:scale-95";

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonTone {
    #[default]
    Brand,
    Success,
    Neutral,
}

impl ButtonTone {
    fn classes(self) -> &'static str {
        match self {
            ButtonTone::Brand => "bg-gradient-to-r from-purple-600 to-pink-600 hover:from-purple-700 hover:to-pink-700 disabled:opacity-50 disabled:cursor-not-allowed disabled:hover:scale-100",
            ButtonTone::Success => "bg-gradient-to-r from-green-600 to-emerald-600 hover:from-green-700 hover:to-emerald-700",
            ButtonTone::Neutral => "bg-gray-700 hover:bg-gray-600",
        }
    }
}

#[component]
pub fn GradientButton(
    children: Children,
    on_click: impl Fn() + 'static,
    #[prop(optional)] tone: ButtonTone,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class=format!("{BUTTON_BASE} {}", tone.classes())
            disabled=disabled
            on:click=move |_| on_click()
        >
            {children()}
        </button>
    }
}
