//! Text normalization shared by the adapters and the catalog writer.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Localization placeholder: `<N:EN:Key>` renders as `Key` when untranslated.
static TRANSLATION_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<N:[A-Z]{2}:(\w+)>").expect("placeholder pattern is valid")
});

/// Replace every `<N:xx:Key>` placeholder with its `Key`.
///
/// Runs to a fixed point, so a placeholder that only appears after an inner
/// one was replaced is also stripped and re-applying is always a no-op.
pub fn strip_translations(s: &str) -> String {
    let mut out = Cow::Borrowed(s);
    while TRANSLATION_PLACEHOLDER.is_match(&out) {
        out = Cow::Owned(
            TRANSLATION_PLACEHOLDER
                .replace_all(&out, "${1}")
                .into_owned(),
        );
    }
    out.into_owned()
}

/// Flatten a description onto one line: drop `\r`, write `\n` as the two
/// characters `\` `n`.
pub fn escape_description(s: &str) -> String {
    s.replace('\r', "").replace('\n', "\\n")
}

/// Parse an exported integer field. Anything that is not an integer after
/// trimming whitespace is unresolved rather than an error.
pub fn parse_optional_int(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
