//! Case-insensitive alphanumeric palindrome check.
//!
//! Variables:
//!   s : &[u8]   — input bytes, length N
//!   w : Window  — mirror pair cursors, initially [0, N-1]
//!
//! Equations:
//!   !alnum(s[front])            →  front' = front + 1
//!   !alnum(s[back])             →  back'  = back - 1
//!   lower(s[front]) != lower(s[back])  →  false
//!   otherwise                   →  front' = front + 1,  back' = back - 1
//!   front >= back               →  true
//!
//!   Two-pointer form: O(N) time, O(1) space.
//!   Filtered form:    O(N) time, O(N) space.
//!
//! Only ASCII letters and digits take part in the comparison. Every other
//! byte, multi-byte UTF-8 sequences included, is skipped.

use serde::{Deserialize, Serialize};

use crate::window::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PalindromeStrategy {
    /// Mirror scan from both ends, constant extra space.
    #[default]
    TwoPointer,
    /// Collect the lowercased alphanumerics once, compare against the reverse.
    Filtered,
}

impl PalindromeStrategy {
    pub const ALL: [PalindromeStrategy; 2] = [Self::TwoPointer, Self::Filtered];

    pub fn check(self, s: &str) -> bool {
        match self {
            Self::TwoPointer => is_palindrome(s),
            Self::Filtered => is_palindrome_filtered(s),
        }
    }
}

pub fn is_palindrome(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some(mut window) = Window::closed(bytes.len()) else {
        return true;
    };

    while window.has_pair() {
        // Read fresh on every pass; the cursors may have moved.
        let front = bytes[window.front()];
        let back = bytes[window.back()];

        if !front.is_ascii_alphanumeric() {
            window.advance_front();
            continue;
        }
        if !back.is_ascii_alphanumeric() {
            window.retreat_back();
            continue;
        }
        if !front.eq_ignore_ascii_case(&back) {
            return false;
        }
        window.step_inward();
    }
    true
}

pub fn is_palindrome_filtered(s: &str) -> bool {
    let cleaned: Vec<u8> = s
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| b.to_ascii_lowercase())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}
