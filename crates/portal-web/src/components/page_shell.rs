use leptos::prelude::*;

/// Centered column every page renders into
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            {children()}
        </main>
    }
}
