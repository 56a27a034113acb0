//! Startup wiring

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::app::App;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::theme::{apply_startup_theme, BrowserStorage, DocumentRoot};

/// Restore the theme, then mount the app with its router into the host page.
pub fn start(config: AppConfig) -> Result<()> {
    // Before mount, so the first paint already has the right theme
    let theme = apply_startup_theme(&BrowserStorage, &DocumentRoot, config.theme_key);

    let parent = mount_point(config.mount_id)?;
    tracing::info!(base = config.base_path, "Mounting into #{}", config.mount_id);

    mount_to(parent, move || view! { <App config=config theme=theme /> });
    Ok(())
}

fn mount_point(id: &str) -> Result<HtmlElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(Error::NoDocument)?;

    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::MountPointMissing(id.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| Error::MountPointNotHtml(id.to_string()))
}
