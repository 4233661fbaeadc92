//! Page-supplied configuration.

use mzl_types::{DomError, UiConfig};

/// Id of the `<script type="application/json">` element holding a [`UiConfig`].
pub const CONFIG_ELEMENT_ID: &str = "mzl-config";

/// Read and validate the page's configuration block. `Ok(None)` when the page
/// has no such block.
pub fn read_page_config() -> mzl_types::Result<Option<UiConfig>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| DomError::operation("window.document", "no document available"))?;
    let Some(text) =
        document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|element| element.text_content())
    else {
        return Ok(None);
    };
    Ok(Some(UiConfig::from_json(&text)?))
}

/// Read the page's configuration block, falling back to defaults when it is
/// missing or invalid.
pub fn load_page_config() -> UiConfig {
    match read_page_config() {
        Ok(Some(config)) => {
            log::info!("Loaded widget config from #{CONFIG_ELEMENT_ID}");
            config
        },
        Ok(None) => {
            log::debug!("No #{CONFIG_ELEMENT_ID} block, using default config");
            UiConfig::default()
        },
        Err(e) => {
            log::warn!("Ignoring #{CONFIG_ELEMENT_ID}: {e}");
            UiConfig::default()
        },
    }
}
