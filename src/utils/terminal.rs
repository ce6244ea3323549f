//! Terminal output sanitization
//!
//! Targets come straight from tool arguments chosen by the model, so anything echoed back
//! to the console goes through [`strip_control_sequences`] first. Escape sequences could
//! otherwise recolor, clear or retitle the user's terminal.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Removes ANSI escape sequences and control characters from a string
///
/// Handles CSI sequences (`ESC [ ... final`), OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`) and lone two-byte escapes. Tabs survive; every other control
/// character is dropped.
///
/// # Examples
///
/// ```
/// use gemini_activity_log::utils::terminal::strip_control_sequences;
///
/// assert_eq!(strip_control_sequences("\x1b[31msrc/main.rs\x1b[0m"), "src/main.rs");
/// ```
pub fn strip_control_sequences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.next() {
                // CSI: parameters then a final byte in '@'..='~'
                Some('[') => {
                    for next in chars.by_ref() {
                        if ('@'..='~').contains(&next) {
                            break;
                        }
                    }
                }
                // OSC: runs until BEL or the string terminator ESC '\'
                Some(']') => {
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    result
}
