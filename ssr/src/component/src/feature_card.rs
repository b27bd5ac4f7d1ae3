use consts::copy::FeatureHighlight;
use leptos::prelude::*;

#[component]
pub fn FeatureCard(feature: FeatureHighlight) -> impl IntoView {
    view! {
        <div class="bg-gray-800/30 backdrop-blur rounded-xl p-6 border border-gray-700 text-center hover:-translate-y-1 transition-transform">
            <div class="text-4xl mb-3">{feature.icon}</div>
            <h3 class="text-lg font-semibold mb-2 text-purple-300">{feature.title}</h3>
            <p class="text-gray-400 text-sm">{feature.desc}</p>
        </div>
    }
}
