use anyhow::{Context, Result, anyhow};
use reqwest::Url;
use wasm_bindgen::JsCast;

pub const DEFAULT_PRODUCTS_PATH: &str = "/products";
/// `<meta name="products-endpoint" content="...">` overrides the default path
pub const ENDPOINT_META: &str = "products-endpoint";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub endpoint: Url,
}

impl AppConfig {
    /// Resolves the endpoint against the page URL, the way a relative fetch
    /// would. The override may be relative (`./products`, `/api/products`) or absolute.
    pub fn resolve(page_url: &str, endpoint_override: Option<&str>) -> Result<Self> {
        let base = Url::parse(page_url).with_context(|| format!("invalid page url {page_url:?}"))?;
        let path = endpoint_override
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_PRODUCTS_PATH);
        let endpoint = base
            .join(path)
            .with_context(|| format!("invalid products endpoint {path:?}"))?;
        Ok(AppConfig { endpoint })
    }

    pub fn from_document() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
        let page_url = window
            .location()
            .href()
            .map_err(|e| anyhow!("cannot read location href: {e:?}"))?;
        let endpoint_override = window.document().and_then(|document| {
            document
                .query_selector(&format!("meta[name=\"{ENDPOINT_META}\"]"))
                .ok()
                .flatten()
                .and_then(|meta| meta.dyn_into::<web_sys::HtmlMetaElement>().ok())
                .map(|meta| meta.content())
        });
        Self::resolve(&page_url, endpoint_override.as_deref())
    }
}
