//! Word normalizers
//!
//! Provides the `Normalizer` trait and the implementations used to turn the
//! trimmed core of a word into its comparison key. Normalizers only ever see
//! the word text; the word's offsets keep pointing at the original input.

/// Trait for word normalizers
pub trait Normalizer: Send + Sync {
    /// Normalize a single word
    fn normalize(&self, word: &str) -> String;

    /// Get the name of this normalizer
    fn name(&self) -> &str;

    /// Clone this normalizer into a Box
    fn clone_box(&self) -> Box<dyn Normalizer>;
}

// Implement Clone for Box<dyn Normalizer>
impl Clone for Box<dyn Normalizer> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

// ============================================================================
// Built-in Normalizers
// ============================================================================

/// Converts words to lowercase
#[derive(Clone)]
pub struct Lowercase;

impl Normalizer for Lowercase {
    fn normalize(&self, word: &str) -> String {
        word.to_lowercase()
    }

    fn name(&self) -> &str {
        "lowercase"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

/// Applies Unicode compatibility composition (NFKC)
///
/// Folds ligatures, full-width forms and similar compatibility characters so
/// that `"ﬁle"` and `"file"` compare equal.
#[derive(Clone)]
pub struct UnicodeNfkc;

impl Normalizer for UnicodeNfkc {
    fn normalize(&self, word: &str) -> String {
        use unicode_normalization::UnicodeNormalization;

        word.nfkc().collect()
    }

    fn name(&self) -> &str {
        "unicode_nfkc"
    }

    fn clone_box(&self) -> Box<dyn Normalizer> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        assert_eq!(Lowercase.normalize("HeLLo"), "hello");
        assert_eq!(Lowercase.normalize("ÉCOLE"), "école");
    }

    #[test]
    fn test_nfkc_folds_ligatures() {
        assert_eq!(UnicodeNfkc.normalize("ﬁle"), "file");
        assert_eq!(UnicodeNfkc.normalize("ＡＢＣ"), "ABC");
    }

    #[test]
    fn test_boxed_clone_keeps_name() {
        let boxed: Box<dyn Normalizer> = Box::new(UnicodeNfkc);
        assert_eq!(boxed.clone().name(), "unicode_nfkc");
    }
}
