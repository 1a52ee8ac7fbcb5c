pub mod palindrome;

pub use palindrome::{is_palindrome, is_palindrome_filtered, PalindromeStrategy};
