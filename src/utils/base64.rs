use base64::{engine::general_purpose, Engine as _};

/// Decodes a Base64 string to its original form.
///
/// Accepts standard and URL-safe alphabets, with or without padding.
///
/// # Returns
/// The decoded string, or `None` if the input is not Base64 or not UTF-8.
pub fn base64_decode(input: &str) -> Option<String> {
    let input = input.trim().trim_end_matches('=');
    let decoded = general_purpose::STANDARD_NO_PAD
        .decode(input)
        .or_else(|_| general_purpose::URL_SAFE_NO_PAD.decode(input))
        .ok()?;
    String::from_utf8(decoded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_decode() {
        assert_eq!(base64_decode("aGVsbG8=").as_deref(), Some("hello"));
        assert_eq!(base64_decode("aGVsbG8").as_deref(), Some("hello"));
        assert_eq!(base64_decode("vless://not-base64"), None);
    }
}
