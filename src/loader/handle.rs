//! Displayable handles for fetched protected resources.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

/// What backs the handle's URL, which decides whether releasing it must
/// notify the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HandleKind {
    /// A `URL.createObjectURL` result owning browser-side blob memory.
    ObjectUrl,
    /// A plain URL (fallback art, data URLs). Nothing to release.
    Fixed,
}

/// A displayable URL with a deterministic release point.
///
/// Object-URL handles revoke exactly once: either explicitly via
/// [`ImageHandle::revoke`] (the loader does this when a handle is replaced
/// or arrives stale) or on drop as a backstop. A revoked handle's URL must
/// not be handed to the DOM again.
#[derive(Debug)]
pub struct ImageHandle {
    url: String,
    kind: HandleKind,
    revoked: bool,
}

impl ImageHandle {
    /// Wrap a freshly minted object URL.
    pub fn object_url(url: String) -> ImageHandle {
        ImageHandle {
            url,
            kind: HandleKind::ObjectUrl,
            revoked: false,
        }
    }

    /// Wrap a URL that needs no browser-side release.
    pub fn fixed(url: &str) -> ImageHandle {
        ImageHandle {
            url: url.to_owned(),
            kind: HandleKind::Fixed,
            revoked: false,
        }
    }

    /// The URL to hand to an `<img src>` attribute.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_object_url(&self) -> bool {
        self.kind == HandleKind::ObjectUrl
    }

    /// True once the handle's browser resource has been released.
    pub fn is_revoked(&self) -> bool {
        self.revoked
    }

    /// Release the underlying browser resource.
    ///
    /// Returns `true` only on the call that performs the release; repeated
    /// calls and calls on fixed handles return `false`. Safe to call any
    /// number of times.
    pub fn revoke(&mut self) -> bool {
        if self.revoked || self.kind != HandleKind::ObjectUrl {
            // Fixed handles are marked revoked too so they cannot be
            // reinstalled after release.
            self.revoked = true;
            return false;
        }
        self.revoked = true;
        #[cfg(feature = "hydrate")]
        {
            if web_sys::Url::revoke_object_url(&self.url).is_err() {
                log::warn!("image handle: revoking object URL failed");
            }
        }
        true
    }
}

impl Drop for ImageHandle {
    fn drop(&mut self) {
        self.revoke();
    }
}
