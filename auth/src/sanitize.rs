use unicode_normalization::UnicodeNormalization;

/// Control characters kept by [`sanitize_multiline`].
const MULTILINE_WHITELIST: &[char] = &['\n', '\t'];

/// Clean untrusted single-line text before it reaches policy checks or storage.
///
/// Removes every control character, normalizes to Unicode NFC so visually
/// identical strings compare equal, then trims surrounding whitespace.
///
/// # Arguments
/// * `input` - Raw text from the caller
///
/// # Returns
/// Sanitized text (possibly empty). Applying it twice yields the same result.
pub fn sanitize(input: &str) -> String {
    sanitize_with(input, &[])
}

/// Same as [`sanitize`], but keeps line feeds and tabs inside the text.
pub fn sanitize_multiline(input: &str) -> String {
    sanitize_with(input, MULTILINE_WHITELIST)
}

fn sanitize_with(input: &str, allowed: &[char]) -> String {
    // Controls go first: a stripped control between a base character and a
    // combining mark must not block composition.
    let stripped: String = input
        .chars()
        .filter(|c| !c.is_control() || allowed.contains(c))
        .collect();

    let normalized: String = stripped.nfc().collect();

    normalized.trim().to_string()
}
