//! Thin wrappers over the browser APIs the converter screen touches: the
//! picked file, its object URL and the anchor trick used to save it.

use std::fmt;

use consts::{CONVERTED_FILE_PREFIX, DEFAULT_DOWNLOAD_NAME};
use gloo::file::{Blob, File, ObjectUrl};
use leptos::prelude::document;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlInputElement};

/// A file chosen through the native file dialog.
#[derive(Clone, Debug)]
pub struct PickedFile(File);

impl PickedFile {
    /// First file of the input's selection, if any.
    pub fn from_input(input: &HtmlInputElement) -> Option<Self> {
        let file = input.files()?.get(0)?;
        Some(Self(File::from(file)))
    }

    pub fn name(&self) -> String {
        self.0.name()
    }

    /// Declared media type, as reported by the browser (may be empty).
    pub fn media_type(&self) -> String {
        self.0.raw_mime_type()
    }

    /// Mints a fresh `blob:` URL for this file. The URL is revoked once the
    /// last clone of the returned handle is dropped.
    pub fn object_url(&self) -> BlobUrl {
        BlobUrl(ObjectUrl::from(Blob::clone(&self.0)))
    }
}

#[derive(Clone)]
pub struct BlobUrl(ObjectUrl);

impl BlobUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// `ObjectUrl` has no `Debug` of its own
impl fmt::Debug for BlobUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BlobUrl").field(&self.as_str()).finish()
    }
}

/// `converted_<name>`, falling back to a default name when the original has
/// none.
pub fn converted_file_name(original: Option<&str>) -> String {
    let name = original
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DOWNLOAD_NAME);
    format!("{CONVERTED_FILE_PREFIX}{name}")
}

/// Offers the bytes behind `url` as a download named `file_name`.
pub fn trigger_download(url: &str, file_name: &str) {
    let Some(anchor) = document()
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    else {
        log::warn!("could not create download anchor for {file_name}");
        return;
    };
    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();
}

/// Empties the input so that picking the same file again fires `change`.
pub fn clear_file_input(input: &HtmlInputElement) {
    input.set_value("");
}
