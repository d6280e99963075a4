use percent_encoding::percent_decode_str;

/// Percent-decodes a URL component. Invalid UTF-8 is replaced, never rejected.
pub fn decode_component(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

/// Lowercases and keeps only ASCII letters and digits
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Removes a leading `<digits>_` upload timestamp, if present
pub fn strip_timestamp_prefix(name: &str) -> &str {
    let digits = name.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return name;
    }

    name[digits..].strip_prefix('_').unwrap_or(name)
}
