//! # Linear Scans
//!
//! Pointer-pair and single-pass algorithms over linear sequences,
//! organized by category.
//!
//! ## Modules
//!
//! - `window` – Closed `[front, back]` index window shared by the two-pointer scans
//! - `searching` – Binary search over sorted distinct slices
//! - `two_pointers` – Alphanumeric palindrome check (mirror scan, filtered)
//! - `sliding_window` – Single-transaction max profit (running minimum)
//! - `arrays_hashing` – Duplicate detection (early exit, distinct count)
//! - `data_structures` – Singly-linked list and in-place reversal
//! - `invariant` / `validate` – Precondition checks and checked entry points
//! - `config` – Strategy selection
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use linear_scans::searching::search;
//! use linear_scans::two_pointers::is_palindrome;
//! use linear_scans::sliding_window::max_profit;
//!
//! assert_eq!(search(&[-1, 0, 2, 4, 6, 8], 4), 3);
//! assert!(is_palindrome("Was it a car or a cat I saw?"));
//! assert_eq!(max_profit(&[10, 1, 5, 6, 7, 1]), 6);
//! ```

pub mod arrays_hashing;
pub mod computation_map;
pub mod config;
pub mod data_structures;
pub mod invariant;
pub mod searching;
pub mod sliding_window;
pub mod two_pointers;
pub mod validate;
pub mod window;

pub use config::Strategies;
pub use validate::InputError;
