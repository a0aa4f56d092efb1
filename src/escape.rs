/// Escape HTML-significant characters.
///
/// `&` is replaced first so entities introduced by later replacements are
/// not escaped again. When `unescape` names a tag, its escaped open and
/// close forms (`&lt;code&gt;`, `&lt;/code&gt;`) are restored afterwards so
/// markup inserted before escaping survives.
pub fn escape_html(text: &str, unescape: Option<&str>) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;");

    match unescape {
        Some(tag) if !tag.is_empty() => escaped
            .replace(&format!("&lt;{tag}&gt;"), &format!("<{tag}>"))
            .replace(&format!("&lt;/{tag}&gt;"), &format!("</{tag}>")),
        _ => escaped,
    }
}
