//! Authenticated resource loading.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected images cannot be fetched by the browser's own `<img>` loader
//! because it attaches no session token. `handle` wraps the object URLs we
//! mint from fetched bytes with revoke-exactly-once semantics; `image`
//! sequences overlapping loads so only the newest request may install its
//! result.

pub mod handle;
pub mod image;
