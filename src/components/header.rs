//! Top navigation bar

use leptos::*;
use leptos_router::A;

use crate::routes::{href_for, RouteName};
use crate::theme::ThemeContext;

/// Navigation bar with the app title and the startup theme
#[component]
pub fn Header() -> impl IntoView {
    let home = href_for(RouteName::Home, &[]).unwrap_or_else(|_| "/".to_string());
    let dark = use_context::<ThemeContext>()
        .map(|ctx| ctx.theme.is_dark())
        .unwrap_or(false);

    view! {
        <nav class="bg-theme-card border-b border-theme-default shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=home class="text-xl font-bold text-theme-primary">
                        "Bookshelf"
                    </A>
                    <span class="text-sm text-theme-muted">
                        {if dark { "Dark theme" } else { "Light theme" }}
                    </span>
                </div>
            </div>
        </nav>
    }
}
