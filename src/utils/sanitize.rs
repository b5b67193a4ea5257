//! Utilities for sanitizing text captured from external programs.
//!
//! Standard error of a failed command ends up in log lines and user-visible
//! error messages, so control characters are removed and its length bounded.

/// Maximum length of captured diagnostic output, in bytes
pub const MAX_DIAGNOSTIC_LENGTH: usize = 500;

/// Removes control characters except newline, tab and carriage return.
pub fn sanitize_output(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09
                || code == 0x0A
                || code == 0x0D
        })
        .filter(|c| *c != '\u{7f}')
        .collect()
}

/// Sanitizes and truncates diagnostic output to [`MAX_DIAGNOSTIC_LENGTH`].
pub fn sanitize_and_truncate(message: &str) -> String {
    let sanitized = sanitize_output(message.trim());

    if sanitized.len() > MAX_DIAGNOSTIC_LENGTH {
        let mut cut = MAX_DIAGNOSTIC_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... (truncated, original length: {} bytes)",
            &sanitized[..cut],
            sanitized.len()
        )
    } else {
        sanitized
    }
}
