pub mod contains_duplicate;

pub use contains_duplicate::{has_duplicate, DuplicateStrategy};
