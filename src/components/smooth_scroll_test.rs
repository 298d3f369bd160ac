use super::*;

#[test]
fn fragment_href_is_its_own_selector() {
	assert_eq!(anchor_selector("#servicios"), Some("#servicios"));
	assert_eq!(anchor_selector("#contact-form"), Some("#contact-form"));
}

#[test]
fn bare_hash_has_no_target() {
	assert_eq!(anchor_selector("#"), None);
	assert_eq!(anchor_selector(""), None);
}

#[test]
fn non_fragment_href_has_no_target() {
	assert_eq!(anchor_selector("/about#team"), None);
	assert_eq!(anchor_selector("https://example.com/#top"), None);
}

#[test]
fn surrounding_whitespace_is_ignored() {
	assert_eq!(anchor_selector("  #faq "), Some("#faq"));
}
