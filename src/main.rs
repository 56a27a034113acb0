fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();

        // Initialize tracing for WASM
        tracing_wasm::set_as_global_default();

        tracing::info!("Starting Bookshelf Web");

        if let Err(e) = bookshelf_web::start(bookshelf_web::AppConfig::from_env()) {
            tracing::error!("Startup failed: {}", e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("❌ This binary is intended for the browser (WASM).");
        eprintln!("   Please use `trunk serve` to run the development server.");
    }
}
