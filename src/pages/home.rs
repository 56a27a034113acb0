//! Home Page

use leptos::*;
use leptos_router::use_navigate;

use crate::routes::{href_for, RouteName};

/// Landing page with a jump-to-book form
#[component]
pub fn Home() -> impl IntoView {
    let (book_id, set_book_id) = create_signal(String::new());
    let navigate = use_navigate();

    let open_book = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let id = book_id.get().trim().to_string();
        match href_for(RouteName::Book, &[("id", &id)]) {
            Ok(path) => navigate(&path, Default::default()),
            Err(e) => tracing::warn!("Cannot open book: {}", e),
        }
    };

    view! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold text-theme-primary">"Bookshelf"</h1>

            <section class="bg-theme-card border border-theme-default rounded-lg p-6 space-y-4">
                <p class="text-theme-secondary">"Jump straight to a book by its id."</p>
                <form class="flex gap-4" on:submit=open_book>
                    <input
                        type="text"
                        placeholder="Book id"
                        class="flex-1 px-3 py-2 bg-theme-card text-theme-primary border border-theme-default rounded-lg focus:outline-none focus:border-theme-info"
                        prop:value=book_id
                        on:input=move |ev| set_book_id.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="px-6 py-2 bg-theme-info text-white rounded-lg hover:opacity-90 disabled:opacity-50"
                        disabled=move || book_id.get().trim().is_empty()
                    >
                        "Open"
                    </button>
                </form>
            </section>
        </div>
    }
}
