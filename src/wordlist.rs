//! Static word dictionaries such as homophone or common-misspelling
//! lists. These are plain lookup tables with no rule logic and no
//! dependency on the inflection engine; the caller supplies the text
//! resource.

use std::collections::HashMap;

/// A bidirectional word mapping parsed from a line-delimited
/// `canonical->variant[,variant...]` resource.
///
/// ```
/// use inflect::WordList;
///
/// let list = WordList::parse("their->there,they're\naffect->effect\n");
/// assert_eq!(list.lookup("there"), Some("their"));
/// assert_eq!(list.lookup("they're"), Some("their"));
/// assert_eq!(list.lookup("their"), Some("there"));
/// assert_eq!(list.lookup("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordList {
    /// canonical -> first listed variant
    canonical_to_variant: HashMap<String, String>,
    /// any variant -> canonical
    variant_to_canonical: HashMap<String, String>,
}

impl WordList {
    /// Parses the resource text. Blank lines and lines without the `->`
    /// delimiter are skipped rather than rejected.
    pub fn parse(text: &str) -> WordList {
        let mut list = WordList::default();
        for line in text.lines() {
            let Some((canonical, variants)) = line.split_once("->") else {
                continue;
            };
            let canonical = canonical.trim();
            if canonical.is_empty() {
                continue;
            }
            for variant in variants.split(',') {
                let variant = variant.trim();
                if variant.is_empty() {
                    continue;
                }
                list.canonical_to_variant
                    .entry(canonical.to_owned())
                    .or_insert_with(|| variant.to_owned());
                list.variant_to_canonical
                    .insert(variant.to_owned(), canonical.to_owned());
            }
        }
        list
    }

    /// Maps a variant to its canonical form, or a canonical form to its
    /// first listed variant.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.variant_to_canonical
            .get(word)
            .or_else(|| self.canonical_to_variant.get(word))
            .map(String::as_str)
    }

    /// Number of canonical entries.
    pub fn len(&self) -> usize {
        self.canonical_to_variant.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical_to_variant.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::WordList;

    const HOMOPHONES: &str = "\
their->there,they're
brake->break

too->two,to";

    #[test]
    fn variants_map_to_their_canonical_form() {
        let list = WordList::parse(HOMOPHONES);
        assert_eq!(list.lookup("there"), Some("their"));
        assert_eq!(list.lookup("they're"), Some("their"));
        assert_eq!(list.lookup("two"), Some("too"));
        assert_eq!(list.lookup("to"), Some("too"));
    }

    #[test]
    fn canonical_forms_map_to_their_first_variant() {
        let list = WordList::parse(HOMOPHONES);
        assert_eq!(list.lookup("their"), Some("there"));
        assert_eq!(list.lookup("too"), Some("two"));
    }

    #[test]
    fn unknown_words_have_no_mapping() {
        let list = WordList::parse(HOMOPHONES);
        assert_eq!(list.lookup("principal"), None);
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let list = WordList::parse("not a mapping\n->orphan\nbrake->break\n");
        assert_eq!(list.len(), 1);
        assert_eq!(list.lookup("break"), Some("brake"));
    }

    #[test]
    fn whitespace_around_entries_is_trimmed() {
        let list = WordList::parse("brake -> break , braking");
        assert_eq!(list.lookup("break"), Some("brake"));
        assert_eq!(list.lookup("braking"), Some("brake"));
    }
}
