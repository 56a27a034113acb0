//! Main Application Component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::Header;
use crate::config::AppConfig;
use crate::routes::ROUTES;
use crate::theme::{Theme, ThemeContext};

/// Main application component
///
/// `theme` is the presentation restored at startup; the root class is
/// already applied by the time this renders.
#[component]
pub fn App(config: AppConfig, theme: Theme) -> impl IntoView {
    provide_meta_context();
    provide_context(ThemeContext { theme });

    let [home, book] = &ROUTES;

    view! {
        <Title text="Bookshelf" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router base=config.base_path>
            <main class="min-h-screen flex flex-col bg-theme-base text-theme-primary">
                <Header />
                <div class="flex-1 container mx-auto px-4 py-8">
                    // No catch-all: unmatched paths render nothing
                    <Routes>
                        <Route path=home.path view=home.view />
                        <Route path=book.path view=book.view />
                    </Routes>
                </div>
            </main>
        </Router>
    }
}
