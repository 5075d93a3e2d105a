// SPDX-License-Identifier: MPL-2.0
//! Strips file system paths from messages before they are stored.

use std::sync::LazyLock;

use regex::Regex;

static PATH_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Unix absolute paths, home shortcuts and Windows drive or UNC paths,
    // up to whitespace or a quoting delimiter.
    Regex::new(r#"(/[^\s"'()\[\]]*/[^\s"'()\[\]]+|~/[^\s"'()\[\]]+|[A-Za-z]:\\[^\s"'()\[\]]+|\\\\[^\s"'()\[\]]+)"#)
        .map_err(|err| tracing::error!("invalid path pattern: {}", err))
        .ok()
});

/// Replaces file paths in `message` with `<path>`.
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    match PATH_PATTERN.as_ref() {
        Some(pattern) => pattern.replace_all(message, "<path>").into_owned(),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_paths_are_replaced() {
        assert_eq!(
            sanitize_message("cannot open /home/ada/pictures/cat.png"),
            "cannot open <path>"
        );
    }

    #[test]
    fn windows_paths_are_replaced() {
        assert_eq!(
            sanitize_message("cannot open C:\\Users\\ada\\cat.png now"),
            "cannot open <path> now"
        );
    }

    #[test]
    fn plain_messages_are_unchanged() {
        assert_eq!(sanitize_message("permission denied"), "permission denied");
    }
}
