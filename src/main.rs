use anyhow::Result;
use leptos::logging::log;
use product_form::{App, config::AppConfig};

fn setup() -> Result<()> {
    let config = AppConfig::from_document()?;
    log!("products endpoint: {}", config.endpoint);
    leptos::mount::mount_to_body(move || leptos::view! { <App config /> });
    Ok(())
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(x) = setup() {
        panic!("error: {x}")
    }
}
