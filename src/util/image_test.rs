use super::*;

// =============================================================
// validate_file_type
// =============================================================

#[test]
fn jpeg_and_png_mime_types_are_accepted() {
    assert!(validate_file_type("image/jpeg").is_ok());
    assert!(validate_file_type("image/jpg").is_ok());
    assert!(validate_file_type("image/png").is_ok());
}

#[test]
fn other_mime_types_are_rejected() {
    assert_eq!(
        validate_file_type("image/gif"),
        Err("Only .jpg and .png images can be uploaded.")
    );
    assert!(validate_file_type("image/webp").is_err());
    assert!(validate_file_type("application/pdf").is_err());
    assert!(validate_file_type("").is_err());
}

// =============================================================
// validate_file_size
// =============================================================

#[test]
fn files_up_to_one_megabyte_pass() {
    assert!(validate_file_size(0.0).is_ok());
    assert!(validate_file_size(512.0 * 1024.0).is_ok());
    assert!(validate_file_size(MAX_FILE_BYTES).is_ok());
}

#[test]
fn oversized_files_are_rejected() {
    assert_eq!(
        validate_file_size(MAX_FILE_BYTES + 1.0),
        Err("Images must be 1 MB or smaller.")
    );
}

// =============================================================
// validate_dimensions
// =============================================================

#[test]
fn square_images_within_range_pass() {
    assert!(validate_dimensions(500, 500).is_ok());
    assert!(validate_dimensions(750, 750).is_ok());
    assert!(validate_dimensions(1000, 1000).is_ok());
}

#[test]
fn non_square_images_are_rejected() {
    assert_eq!(validate_dimensions(600, 601), Err("Images must be square."));
    assert_eq!(validate_dimensions(1000, 500), Err("Images must be square."));
}

#[test]
fn out_of_range_squares_are_rejected() {
    assert_eq!(
        validate_dimensions(499, 499),
        Err("Images must be between 500x500 and 1000x1000 pixels.")
    );
    assert_eq!(
        validate_dimensions(1001, 1001),
        Err("Images must be between 500x500 and 1000x1000 pixels.")
    );
}

#[test]
fn squareness_is_checked_before_range() {
    // 499x1001 fails both rules; the squareness message wins.
    assert_eq!(validate_dimensions(499, 1001), Err("Images must be square."));
}

// =============================================================
// base64_payload
// =============================================================

#[test]
fn payload_follows_the_first_comma() {
    assert_eq!(
        base64_payload("data:image/png;base64,iVBORw0KGgo="),
        Some("iVBORw0KGgo=")
    );
}

#[test]
fn payload_may_itself_contain_commas() {
    // Only the first comma separates header from payload.
    assert_eq!(base64_payload("data:image/png;base64,abc,def"), Some("abc,def"));
}

#[test]
fn missing_or_empty_payload_is_none() {
    assert_eq!(base64_payload("data:image/png;base64"), None);
    assert_eq!(base64_payload("data:image/png;base64,"), None);
    assert_eq!(base64_payload(""), None);
}
