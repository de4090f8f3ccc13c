/// Split comma-separated free text into trimmed, non-empty parts.
///
/// Order and duplicates are kept as typed.
pub fn split_comma_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Join list entries into the text shown in a comma-separated input.
pub fn join_comma_list(items: &[String]) -> String {
    items.join(", ")
}
