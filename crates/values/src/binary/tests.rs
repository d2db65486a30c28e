use super::*;

#[test]
fn test_size_and_indexing() {
	let jfif = BinaryConstant::from(JFIF0_SIGNATURE);
	assert_eq!(jfif.size(), 5);
	assert_eq!(jfif.get(0), Some(0x4A));
	assert_eq!(jfif.get(4), Some(0x00));
	assert_eq!(jfif.get(5), None);
	assert!(!jfif.is_empty());
}

#[test]
fn test_empty_constant() {
	let empty = BinaryConstant::new(&[]);
	assert_eq!(empty.size(), 0);
	assert!(empty.is_empty());
	assert_eq!(empty.get(0), None);
}

#[test]
fn test_matches_prefix() {
	let png = BinaryConstant::from(PNG_SIGNATURE);
	let mut file = PNG_SIGNATURE.to_vec();
	file.extend_from_slice(b"\0\0\0\rIHDR");
	assert!(png.matches(&file));
	assert!(!png.matches(&file[1..]));
	assert!(!png.matches(&PNG_SIGNATURE[..4]));
}

#[test]
fn test_clones_share_bytes() {
	let exif = BinaryConstant::from(EXIF_IDENTIFIER_CODE.to_vec());
	let clone = exif.clone();
	assert_eq!(exif, clone);
	assert!(core::ptr::eq(exif.as_bytes(), clone.as_bytes()));
}

#[test]
fn test_debug_is_hex() {
	let constant = BinaryConstant::from(&[0x4A, 0x00, 0xFF]);
	assert_eq!(format!("{constant:?}"), "BinaryConstant(4a00ff)");
}
