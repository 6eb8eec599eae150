//! URL decoding utilities

/// Decodes a URL-encoded string
///
/// # Arguments
/// * `input` - The URL-encoded string to decode
///
/// # Returns
/// * String containing the decoded input
/// * Returns the original string if decoding fails
///
/// # Examples
/// ```
/// use link2clash::utils::url::url_decode;
///
/// let decoded = url_decode("Hello%20World%21");
/// assert_eq!(decoded, "Hello World!");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

/// Returns the first value of query parameter `key`, or an empty string
pub fn get_url_arg(url: &url::Url, key: &str) -> String {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .unwrap_or_default()
}

/// Like [`get_url_arg`], but `None` when the parameter is missing or empty
pub fn get_url_arg_opt(url: &url::Url, key: &str) -> Option<String> {
    Some(get_url_arg(url, key)).filter(|v| !v.is_empty())
}
