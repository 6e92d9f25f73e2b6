use once_cell::sync::Lazy;
use regex::Regex;

use super::capitalize_first;
use super::snake::underscore;

static TITLE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b('?\w)").unwrap());

/// Turns an attribute name into human-readable text: strips a trailing
/// `_id`, replaces underscores with spaces and capitalizes the first
/// character. The case of everything else is left alone.
///
/// ```
/// use inflect::humanize;
///
/// assert_eq!(humanize("employee_salary"), "Employee salary");
/// assert_eq!(humanize("author_id"), "Author");
/// ```
pub fn humanize(word: &str) -> String {
    let word = word.strip_suffix("_id").unwrap_or(word);
    capitalize_first(&word.replace('_', " "))
}

/// Creates a title from an identifier-style string: humanizes the
/// underscored form, then capitalizes each word. A word is a run of
/// word characters, optionally preceded by an apostrophe; the letter
/// after an apostrophe stays lowercase.
///
/// ```
/// use inflect::titleize;
///
/// assert_eq!(titleize("man from the boondocks"), "Man From The Boondocks");
/// assert_eq!(titleize("x-men: the last stand"), "X Men: The Last Stand");
/// assert_eq!(titleize("TheManWithoutAPast"), "The Man Without A Past");
/// assert_eq!(titleize("raiders_of_the_lost_ark"), "Raiders Of The Lost Ark");
/// ```
pub fn titleize(word: &str) -> String {
    let humanized = humanize(&underscore(word));
    TITLE_WORD
        .replace_all(&humanized, |caps: &regex::Captures| {
            let start = &caps[1];
            if start.starts_with('\'') {
                start.to_owned()
            } else {
                start.to_uppercase()
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::humanize;
    use super::titleize;

    #[test]
    fn humanize_replaces_underscores_and_capitalizes() {
        assert_eq!(humanize("employee_salary"), "Employee salary")
    }

    #[test]
    fn humanize_strips_trailing_id() {
        assert_eq!(humanize("author_id"), "Author")
    }

    #[test]
    fn humanize_only_strips_id_at_the_end() {
        assert_eq!(humanize("id_card"), "Id card")
    }

    #[test]
    fn humanize_leaves_tail_case_alone() {
        assert_eq!(humanize("employee_HR_contact"), "Employee HR contact")
    }

    #[test]
    fn titleize_from_sentence() {
        assert_eq!(titleize("man from the boondocks"), "Man From The Boondocks")
    }

    #[test]
    fn titleize_from_camel_case() {
        assert_eq!(titleize("TheManWithoutAPast"), "The Man Without A Past")
    }

    #[test]
    fn titleize_keeps_letters_after_apostrophes_lowercase() {
        assert_eq!(titleize("doesn't matter"), "Doesn't Matter")
    }
}
