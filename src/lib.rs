use leptos::prelude::*;

pub mod client;
pub mod config;
pub mod form;
pub mod product;
pub mod submission;
mod widgets;

use client::HttpProductClient;
use config::AppConfig;

/// Root of the page: a single create-product form talking to the configured endpoint.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api = HttpProductClient::new(config.endpoint);
    view! { <form::ProductForm api /> }
}
