use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::{Catalog, get_catalog};
use crate::components::{PageShell, Section};

/// APIs page - lists the services the portal exposes
#[component]
pub fn ApisPage() -> impl IntoView {
    let catalog = LocalResource::new(get_catalog);

    view! {
        <PageShell>
            <header class="mb-8 text-center">
                <h1 class="text-xl font-bold">"APIs"</h1>
                <div class="mt-4">
                    <A href="/" attr:class="text-sm">"← back to dashboard"</A>
                </div>
            </header>

            <Suspense fallback=move || view! {
                <div class="text-[var(--ink-light)]">"Loading catalog..."</div>
            }>
                {move || {
                    catalog.get().map(|result| {
                        // Dereference SendWrapper to access inner Option
                        match &*result {
                            Some(catalog) => view! { <CatalogContent catalog=catalog.clone() /> }.into_any(),
                            None => view! {
                                <div class="text-[var(--ink-light)]">
                                    "The API catalog is unavailable right now. Try reloading the page."
                                </div>
                            }.into_any(),
                        }
                    })
                }}
            </Suspense>
        </PageShell>
    }
}

#[component]
fn CatalogContent(catalog: Catalog) -> impl IntoView {
    let urls = catalog.urls();
    let services = catalog.services.clone();
    let updated = catalog.updated_at.format("%Y-%m-%d %H:%M UTC").to_string();

    view! {
        <div class="space-y-6">
            <Section id="catalog" title=catalog.name.clone()>
                <div>
                    <strong>"VERSION"</strong> "  " {catalog.version.clone()}
                    <br />
                    <strong>"UPDATED"</strong> "  " {updated}
                </div>
                <div class="mt-2">
                    {urls.into_iter().map(|url| view! {
                        <div>
                            <a href=url.clone() target="_blank" rel="noopener noreferrer">{url.clone()} " ↗"</a>
                        </div>
                    }).collect_view()}
                </div>
            </Section>

            <Section id="services" title="Services">
                {if services.is_empty() {
                    view! {
                        <div class="text-[var(--ink-light)]">"No services exposed yet."</div>
                    }.into_any()
                } else {
                    view! {
                        <div class="space-y-1">
                            {services.into_iter().map(|service| {
                                let label = service.label();
                                view! {
                                    <div>
                                        {label}
                                        {service.open_api_spec_url.clone().map(|url| view! {
                                            " · "
                                            <a href=url target="_blank" rel="noopener noreferrer">"openapi ↗"</a>
                                        })}
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </Section>
        </div>
    }
}
