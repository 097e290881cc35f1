use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Tone name → Munsell notation table
// ---------------------------------------------------------------------------

/// Separator between the primary descriptor and an optional variant suffix
/// in a composite tone label, e.g. `灰白～淡` (FULLWIDTH TILDE, U+FF5E).
pub const TONE_SEPARATOR: char = '～';

/// The reference descriptor → notation pairs shipped with the crate.
///
/// These come from field-survey recording practice; downstream datasets are
/// reproducibility-sensitive, so existing keys must keep their notation
/// across releases. New descriptors may be appended.
const BUILTIN_TONES: &[(&str, &str)] = &[
    ("暗灰褐", "10YR 3/2"),
    ("暗灰", "N 3"),
    ("褐灰", "10YR 5/2"),
    ("灰褐", "10YR 4/2"),
    ("茶褐", "7.5YR 3/4"),
    ("茶灰", "7.5YR 5/2"),
    ("白灰", "N 8"),
    ("緑灰", "5G 6/1"),
    ("黄灰", "2.5Y 7/2"),
    ("淡暗灰", "N 4"),
    ("灰白", "N 7"),
    ("黒灰", "N 2"),
    ("淡黄褐", "2.5Y 6/4"),
    ("暗褐", "7.5YR 3/2"),
    ("黄褐", "10YR 6/4"),
    ("青灰", "5PB 5/2"),
    ("乳灰", "N 9"),
    ("暗茶", "5YR 3/2"),
    ("灰", "N 5"),
];

/// Immutable mapping from a primary tone descriptor to its Munsell notation.
///
/// Built once at startup and never mutated afterwards. Lookups are total:
/// an unknown descriptor is a plain `None`, not an error.
#[derive(Debug, Clone)]
pub struct ToneTable {
    mapping: BTreeMap<String, String>,
}

impl Default for ToneTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ToneTable {
    /// The built-in reference table.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_TONES.iter().copied())
    }

    /// Build a table from arbitrary descriptor → notation pairs.
    ///
    /// Later duplicates win, so `builtin()` entries can be extended by
    /// chaining the reference pairs with project-specific ones.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mapping = pairs
            .into_iter()
            .map(|(name, notation)| (name.to_string(), notation.to_string()))
            .collect();
        ToneTable { mapping }
    }

    /// Resolve a tone label to its Munsell notation.
    ///
    /// Composite labels are split on the first [`TONE_SEPARATOR`]; only the
    /// primary segment takes part in the lookup, any variant suffix is
    /// ignored. Exact string match, case- and script-sensitive.
    pub fn resolve(&self, label: &str) -> Option<&str> {
        let primary = match label.split_once(TONE_SEPARATOR) {
            Some((primary, _variant)) => primary,
            None => label,
        };
        self.mapping.get(primary).map(String::as_str)
    }

    /// Number of descriptors in the table.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Iterate over (descriptor, notation) pairs in descriptor order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.mapping
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resolves_reference_entries() {
        let table = ToneTable::builtin();
        assert_eq!(table.resolve("暗灰"), Some("N 3"));
        assert_eq!(table.resolve("暗灰褐"), Some("10YR 3/2"));
        assert_eq!(table.resolve("青灰"), Some("5PB 5/2"));
        assert_eq!(table.resolve("灰"), Some("N 5"));
    }

    #[test]
    fn variant_suffix_is_ignored() {
        let table = ToneTable::builtin();
        assert_eq!(table.resolve("灰白～淡"), Some("N 7"));
        // Whatever follows the separator has no effect on the lookup.
        assert_eq!(table.resolve("灰白～まったく別の文字列"), Some("N 7"));
    }

    #[test]
    fn only_the_first_separator_splits() {
        let table = ToneTable::builtin();
        assert_eq!(table.resolve("黄褐～淡～暗"), Some("10YR 6/4"));
    }

    #[test]
    fn unknown_label_is_a_miss_not_an_error() {
        let table = ToneTable::builtin();
        assert_eq!(table.resolve("不明色"), None);
        assert_eq!(table.resolve(""), None);
        // Separator with an unknown primary still resolves to nothing.
        assert_eq!(table.resolve("不明色～淡"), None);
    }

    #[test]
    fn from_pairs_later_duplicates_win() {
        let table = ToneTable::from_pairs([("灰", "N 5"), ("灰", "N 6")]);
        assert_eq!(table.resolve("灰"), Some("N 6"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn builtin_has_all_nineteen_descriptors() {
        assert_eq!(ToneTable::builtin().len(), 19);
    }
}
