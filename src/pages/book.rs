//! Book Detail Page

use leptos::*;
use leptos_router::A;

use crate::routes::{href_for, RouteName};

/// Detail view for one book, keyed by the `id` path segment
#[component]
pub fn Book(#[prop(into)] id: Signal<String>) -> impl IntoView {
    let home = href_for(RouteName::Home, &[]).unwrap_or_else(|_| "/".to_string());

    view! {
        <div class="space-y-6">
            <div class="flex items-center gap-4">
                <A href=home class="p-2 hover:bg-theme-elevated rounded-lg transition-colors">
                    "← Back"
                </A>
                <h1 class="text-2xl font-bold text-theme-primary">"Book Details"</h1>
            </div>

            <div class="bg-theme-card border border-theme-default rounded-xl p-6">
                <span class="text-theme-muted block text-sm">"ID"</span>
                <span class="font-mono text-theme-primary">{move || id.get()}</span>
            </div>
        </div>
    }
}
