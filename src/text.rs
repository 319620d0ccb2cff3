//! Prompt text layout helpers.

const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Maps ASCII letters and digits to their full-width forms so they sit evenly
/// next to CJK glyphs. Everything else passes through.
pub fn to_full_width(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                char::from_u32(c as u32 + FULL_WIDTH_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Breaks a prompt into lines of `width` characters. Counts characters, not
/// words: dense scripts have no spaces to break on. `width == 0` disables
/// wrapping.
pub fn wrap_prompt(text: &str, width: usize) -> Vec<String> {
    let normalized = to_full_width(text);
    if width == 0 {
        return vec![normalized];
    }
    let chars: Vec<char> = normalized.chars().collect();
    chars.chunks(width).map(|line| line.iter().collect()).collect()
}
