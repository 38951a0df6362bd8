//! Prompt export: clipboard copy and text-file download.
//!
//! Browser-only mechanics live behind the `web` feature; filename
//! construction is pure and testable natively.
//!
//! CLIPBOARD STRATEGY
//! ==================
//! Try the async Clipboard API first. If the write promise rejects (older
//! browsers, permission denied), fall back to selecting the output textarea
//! and issuing the legacy `execCommand("copy")`.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// Attachment filename for a downloaded prompt: feature name lower-cased
/// with whitespace runs collapsed to hyphens, prefixed `automation-prompt-`.
/// A blank feature name falls back to `prompt`.
pub fn filename_for(feature_name: &str) -> String {
    let slug = feature_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if slug.is_empty() {
        "automation-prompt-prompt.txt".to_owned()
    } else {
        format!("automation-prompt-{slug}.txt")
    }
}

/// Write `text` to the OS clipboard, falling back to a selection-based copy
/// on the given textarea when the Clipboard API is unavailable or rejects.
/// Returns whether either mechanism succeeded.
#[cfg(feature = "web")]
pub async fn copy_to_clipboard(text: &str, fallback: Option<&web_sys::HtmlTextAreaElement>) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard = window.navigator().clipboard();
    if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
        .await
        .is_ok()
    {
        return true;
    }
    legacy_copy(fallback)
}

#[cfg(feature = "web")]
fn legacy_copy(textarea: Option<&web_sys::HtmlTextAreaElement>) -> bool {
    let Some(el) = textarea else {
        return false;
    };
    el.select();
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.exec_command("copy").ok())
        .unwrap_or(false)
}

/// Save `text` as a `text/plain` attachment with the given filename by
/// synthesizing and clicking a temporary object-URL anchor.
/// Returns whether the save was triggered.
#[cfg(feature = "web")]
pub fn download_as_file(text: &str, filename: &str) -> bool {
    download_inner(text, filename).is_ok()
}

#[cfg(feature = "web")]
fn download_inner(text: &str, filename: &str) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(text));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/plain");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}
