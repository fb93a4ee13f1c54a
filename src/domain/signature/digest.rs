//! MD5 digest primitive.
//!
//! # Compatibility
//!
//! The Payin-Payout gateway authenticates every request and notification with
//! MD5. The algorithm is mandated by the gateway protocol, it is **not** a
//! security recommendation. Substituting a stronger hash breaks
//! interoperability with the gateway.

/// Length of every digest rendered by [`md5_hex`].
pub const DIGEST_HEX_LEN: usize = 32;

/// Computes the MD5 digest of the UTF-8 bytes of `input`, as lowercase hex.
pub fn md5_hex(input: &str) -> String {
    format!("{:x}", md5::compute(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_of_empty_string() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn digest_of_test() {
        assert_eq!(md5_hex("test"), "098f6bcd4621d373cade4e832627b4f6");
    }

    #[test]
    fn digest_hashes_utf8_bytes() {
        // "тест" in UTF-8
        assert_eq!(md5_hex("тест"), format!("{:x}", md5::compute("тест".as_bytes())));
        assert_eq!(md5_hex("тест").len(), DIGEST_HEX_LEN);
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let digest = md5_hex("mysecret");
        assert_eq!(digest.len(), DIGEST_HEX_LEN);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
