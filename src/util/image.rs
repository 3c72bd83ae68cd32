//! Profile image intake: validation and browser bridges.
//!
//! DESIGN
//! ======
//! All rules run client-side before any bytes go to the server: file type
//! and size come straight off the `File`, dimensions from decoding the
//! data URL into an offscreen image. The pure checks are plain functions;
//! only the `FileReader`/`HtmlImageElement` bridges are hydrate-gated.
//!
//! The two browser bridges convert callback APIs into futures with oneshot
//! channels. Each callback closure is kept alive until its channel has
//! delivered, then dropped.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Smallest accepted edge length in pixels.
pub const MIN_DIMENSION: u32 = 500;
/// Largest accepted edge length in pixels.
pub const MAX_DIMENSION: u32 = 1000;
/// Upload ceiling. `File::size()` reports `f64`, so the limit does too.
pub const MAX_FILE_BYTES: f64 = 1024.0 * 1024.0;

#[cfg(feature = "hydrate")]
const READ_FAILED: &str = "Could not read the selected file.";
#[cfg(feature = "hydrate")]
const DECODE_FAILED: &str = "The selected file is not a readable image.";

/// Accept only JPEG and PNG uploads.
pub fn validate_file_type(mime: &str) -> Result<(), &'static str> {
    match mime {
        "image/jpeg" | "image/jpg" | "image/png" => Ok(()),
        _ => Err("Only .jpg and .png images can be uploaded."),
    }
}

/// Enforce the upload size ceiling.
pub fn validate_file_size(bytes: f64) -> Result<(), &'static str> {
    if bytes > MAX_FILE_BYTES {
        Err("Images must be 1 MB or smaller.")
    } else {
        Ok(())
    }
}

/// Profile pictures must be square and between 500x500 and 1000x1000.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), &'static str> {
    if width != height {
        return Err("Images must be square.");
    }
    if width < MIN_DIMENSION || width > MAX_DIMENSION {
        return Err("Images must be between 500x500 and 1000x1000 pixels.");
    }
    Ok(())
}

/// Base64 payload of a data URL: everything after the first comma.
pub fn base64_payload(data_url: &str) -> Option<&str> {
    let (_prefix, payload) = data_url.split_once(',')?;
    if payload.is_empty() {
        None
    } else {
        Some(payload)
    }
}

/// A validated, ready-to-submit profile image selection.
#[cfg(feature = "hydrate")]
pub struct SelectedImage {
    /// Full data URL for the local preview.
    pub data_url: String,
    /// Raw Base64 payload as the server expects it.
    pub base64: String,
}

/// Run the full intake pipeline on a selected file.
#[cfg(feature = "hydrate")]
pub async fn intake_profile_image(file: &web_sys::File) -> Result<SelectedImage, &'static str> {
    validate_file_type(&file.type_())?;
    validate_file_size(file.size())?;
    let data_url = read_as_data_url(file).await?;
    let (width, height) = probe_dimensions(&data_url).await?;
    validate_dimensions(width, height)?;
    let base64 = base64_payload(&data_url).ok_or(READ_FAILED)?.to_owned();
    Ok(SelectedImage { data_url, base64 })
}

/// Read a file into a `data:` URL via `FileReader`.
#[cfg(feature = "hydrate")]
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, &'static str> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = web_sys::FileReader::new().map_err(|_| READ_FAILED)?;
    let (sender, receiver) = futures::channel::oneshot::channel::<Option<String>>();

    // loadend fires for success and failure alike; a failed read leaves
    // `result()` empty, which maps to None below.
    let reader_in_callback = reader.clone();
    let onloadend = Closure::once(move |_event: web_sys::Event| {
        let result = reader_in_callback
            .result()
            .ok()
            .and_then(|value| value.as_string());
        let _ = sender.send(result);
    });
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
    reader.read_as_data_url(file).map_err(|_| READ_FAILED)?;

    let outcome = receiver.await.map_err(|_| READ_FAILED)?;
    drop(onloadend);
    outcome.ok_or(READ_FAILED)
}

/// Decode a data URL offscreen and report its natural dimensions.
#[cfg(feature = "hydrate")]
pub async fn probe_dimensions(data_url: &str) -> Result<(u32, u32), &'static str> {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let image = web_sys::HtmlImageElement::new().map_err(|_| DECODE_FAILED)?;
    let (sender, receiver) = futures::channel::oneshot::channel::<Option<(u32, u32)>>();
    // One sender, two possible callbacks; whichever fires first takes it.
    let sender = Rc::new(RefCell::new(Some(sender)));

    let image_in_callback = image.clone();
    let sender_on_load = Rc::clone(&sender);
    let onload = Closure::once(move |_event: web_sys::Event| {
        if let Some(sender) = sender_on_load.borrow_mut().take() {
            let dimensions = (
                image_in_callback.natural_width(),
                image_in_callback.natural_height(),
            );
            let _ = sender.send(Some(dimensions));
        }
    });
    let sender_on_error = Rc::clone(&sender);
    let onerror = Closure::once(move |_event: web_sys::Event| {
        if let Some(sender) = sender_on_error.borrow_mut().take() {
            let _ = sender.send(None);
        }
    });
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(data_url);

    let outcome = receiver.await.map_err(|_| DECODE_FAILED)?;
    drop((onload, onerror));
    outcome.ok_or(DECODE_FAILED)
}
