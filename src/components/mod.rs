//! Reusable UI components shared across pages.

pub mod authenticated_image;
pub mod match_request_modal;
