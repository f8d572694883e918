use crate::{sha1_hex_to_bin, BloomError};

#[test]
fn decodes_known_digest() {
    let hex = "a9993e364706816aba3e25717850c26c9cd0d89";
    let bin = sha1_hex_to_bin(hex).unwrap();
    assert_eq!(
        bin,
        [
            0xa9, 0x99, 0x3e, 0x36, 0x47, 0x06, 0x81, 0x6a, 0xba, 0x3e, 0x25, 0x71, 0x78, 0x50,
            0xc2, 0x6c, 0x9c, 0xd0, 0xd8, 0x9d,
        ],
    );
}

#[test]
fn rejects_wrong_length() {
    assert!(matches!(sha1_hex_to_bin("abcd"), Err(BloomError::ParamError)));
}

#[test]
fn rejects_non_hex_character() {
    let mut hex = "a".repeat(40);
    hex.replace_range(39..40, "z");
    assert!(matches!(sha1_hex_to_bin(&hex), Err(BloomError::ParamError)));
}

#[test]
fn accepts_uppercase_hex() {
    let hex = "A9993E364706816ABA3E25717850C26C9CD0D89";
    assert!(sha1_hex_to_bin(hex).is_ok());
}
