/// Mapping of modules in algorithms/src to the scan pattern they use,
/// with time and extra-space cost
pub const ALGORITHMS_COMPUTATION_MAP: &[(&str, &str, &str, &str)] = &[
    // Two-pointer window
    (
        "searching/binary_search.rs",
        "Halving window search",
        "O(log n)",
        "O(1)",
    ),
    (
        "two_pointers/palindrome.rs#two-pointer",
        "Mirror scan",
        "O(n)",
        "O(1)",
    ),
    (
        "two_pointers/palindrome.rs#filtered",
        "Filter then reverse-compare",
        "O(n)",
        "O(n)",
    ),
    // Running extremum
    (
        "sliding_window/max_profit.rs",
        "Running minimum scan",
        "O(n)",
        "O(1)",
    ),
    // Hashing
    (
        "arrays_hashing/contains_duplicate.rs#early-exit",
        "Seen-set scan",
        "O(n)",
        "O(n)",
    ),
    (
        "arrays_hashing/contains_duplicate.rs#distinct-count",
        "Distinct-set size",
        "O(n)",
        "O(n)",
    ),
    // Data structures
    (
        "data_structures/linked_list.rs#iterative",
        "In-place relink",
        "O(n)",
        "O(1)",
    ),
    (
        "data_structures/linked_list.rs#recursive",
        "Recursive relink",
        "O(n)",
        "O(n) stack",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn every_entry_names_a_declared_module() {
        let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
        for &(path, ..) in ALGORITHMS_COMPUTATION_MAP {
            let file = path.split('#').next().unwrap_or(path);
            let (dir, module) = file
                .trim_end_matches(".rs")
                .split_once('/')
                .unwrap_or_else(|| panic!("{path} has no category directory"));
            assert!(src.join(file).is_file(), "{path}: no such file");

            let lib = std::fs::read_to_string(src.join("lib.rs")).unwrap();
            assert!(lib.contains(&format!("pub mod {dir};")), "{path}: `{dir}` not in lib.rs");
            let parent = std::fs::read_to_string(src.join(dir).join("mod.rs")).unwrap();
            assert!(
                parent.contains(&format!("pub mod {module};")),
                "{path}: `{module}` not declared in {dir}/mod.rs"
            );
        }
    }
}
