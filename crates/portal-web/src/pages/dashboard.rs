use leptos::prelude::*;
use leptos_router::components::A;
use shared::PortalConfig;

use crate::components::PageShell;
use crate::config;

/// Dashboard page - the portal's landing content
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = config::injected_values();

    view! {
        <PageShell>
            <DashboardContent config=config />
            <nav class="mt-8">
                <A href="/apis">"browse the API catalog"</A>
            </nav>
        </PageShell>
    }
}

/// Pure view over the injected config: a heading and a body text, nothing else.
/// Rendering the same config twice produces the same tree.
#[component]
fn DashboardContent(config: PortalConfig) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-bold mb-2">{config.title}</h3>
            <p class="text-[var(--ink-light)]">{config.description}</p>
        </div>
    }
}
