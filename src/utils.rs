/// Resolves a link against the base URL
///
/// Links that already start with `http` are returned unchanged; anything else
/// is assumed root-relative and appended to the base as-is.
pub fn resolve_url(base_url: &str, link: &str) -> String {
    if link.starts_with("http") {
        link.to_string()
    } else {
        format!("{}{}", base_url, link)
    }
}
