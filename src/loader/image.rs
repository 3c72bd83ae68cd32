//! Load sequencing and installation for authenticated images.
//!
//! DESIGN
//! ======
//! A display slot (one `AuthenticatedImage` instance) may have several
//! fetches in flight when its target path changes quickly. Each fetch is
//! stamped with a generation from the slot's [`LoadSequence`]; on arrival
//! the result is settled against the sequence and either installed (it is
//! still the newest request) or discarded with its handle revoked. The
//! slot's previously installed handle is revoked at the moment it is
//! replaced, never while the DOM can still reference it.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use super::handle::ImageHandle;

/// Monotonic generation counter for one display slot.
///
/// `begin` stamps a new fetch and implicitly stales every earlier one.
/// `detach` stales all outstanding fetches without starting a new one,
/// used when the owning component unmounts.
#[derive(Debug, Default)]
pub struct LoadSequence {
    current: u64,
}

impl LoadSequence {
    /// Start a new load attempt and return its generation stamp.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Whether `generation` is still the newest load attempt.
    pub fn is_current(&self, generation: u64) -> bool {
        self.current == generation
    }

    /// Invalidate every outstanding load attempt.
    pub fn detach(&mut self) {
        self.current += 1;
    }
}

/// Outcome of settling a completed fetch against its sequence.
#[derive(Debug)]
pub enum Settled {
    /// The fetch was current: its handle is now installed in the slot.
    /// Any handle it displaced comes back already revoked.
    Installed { superseded: Option<ImageHandle> },
    /// The fetch was stale: its handle comes back revoked, the slot is
    /// untouched.
    Discarded(ImageHandle),
}

impl Settled {
    pub fn was_installed(&self) -> bool {
        matches!(self, Settled::Installed { .. })
    }
}

/// Settle a completed fetch: install the newest result, revoke everything
/// else.
pub fn settle(
    sequence: &LoadSequence,
    generation: u64,
    incoming: ImageHandle,
    slot: &mut Option<ImageHandle>,
) -> Settled {
    if sequence.is_current(generation) {
        let mut superseded = slot.replace(incoming);
        if let Some(previous) = superseded.as_mut() {
            previous.revoke();
        }
        Settled::Installed { superseded }
    } else {
        let mut stale = incoming;
        stale.revoke();
        Settled::Discarded(stale)
    }
}

/// Empty the slot, revoking whatever was installed.
///
/// Used on unmount and when the target path becomes empty. Returns the
/// revoked handle so callers (and tests) can observe the release.
pub fn release(slot: &mut Option<ImageHandle>) -> Option<ImageHandle> {
    let mut previous = slot.take()?;
    previous.revoke();
    Some(previous)
}

/// Mint an object-URL handle from fetched image bytes.
#[cfg(feature = "hydrate")]
pub fn handle_from_bytes(bytes: &[u8], content_type: &str) -> Result<ImageHandle, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "could not assemble image data".to_owned())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "could not create an object URL".to_owned())?;
    Ok(ImageHandle::object_url(url))
}
