use unicode_normalization::UnicodeNormalization;

/// NFKC-normalize and lowercase a product name so trie keys and search
/// queries agree on one canonical form.
pub fn normalize_name(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_compatibility_forms() {
        assert_eq!(normalize_name("Laptop"), "laptop");
        assert_eq!(normalize_name("ＬＡＰＴＯＰ"), "laptop");
        assert_eq!(normalize_name("Café"), "café");
    }
}
