use once_cell::sync::Lazy;
use regex::Regex;

static ACRONYM_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static WORD_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

/// Converts a camel-cased, possibly namespace-qualified name to
/// `snake_case`, turning `::` into `/`.
///
/// An underscore is inserted between an uppercase run and a following
/// Titlecase word, and between a lowercase letter or digit and an
/// uppercase letter; dashes become underscores and the whole result is
/// lowercased.
///
/// ```
/// use inflect::underscore;
///
/// assert_eq!(underscore("SpecialGuest"), "special_guest");
/// assert_eq!(underscore("Admin::Post"), "admin/post");
/// assert_eq!(underscore("HTMLParser"), "html_parser");
/// assert_eq!(underscore("area51Controller"), "area51_controller");
/// assert_eq!(underscore("foo-bar"), "foo_bar");
/// ```
pub fn underscore(word: &str) -> String {
    let word = word.replace("::", "/");
    let word = ACRONYM_BOUNDARY.replace_all(&word, "${1}_${2}");
    let word = WORD_BOUNDARY.replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

/// Replaces every underscore with a dash.
///
/// ```
/// use inflect::dasherize;
///
/// assert_eq!(dasherize("puni_puni"), "puni-puni");
/// ```
pub fn dasherize(word: &str) -> String {
    word.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::dasherize;
    use super::underscore;
    use crate::camelize;

    #[test]
    fn from_camel_case() {
        assert_eq!(underscore("FooBar"), "foo_bar")
    }

    #[test]
    fn from_namespaced_name() {
        assert_eq!(underscore("Admin::Post"), "admin/post")
    }

    #[test]
    fn from_acronym_run() {
        assert_eq!(underscore("SSLError"), "ssl_error")
    }

    #[test]
    fn from_digit_then_uppercase() {
        assert_eq!(underscore("Area51Controller"), "area51_controller")
    }

    #[test]
    fn already_underscored_is_unchanged() {
        assert_eq!(underscore("foo_bar"), "foo_bar")
    }

    #[test]
    fn underscore_inverts_camelize_on_snake_inputs() {
        for word in ["employee_salary", "special_guest", "area51_controller"] {
            assert_eq!(underscore(&camelize(word)), underscore(word));
        }
    }

    #[test]
    fn dasherize_replaces_underscores() {
        assert_eq!(dasherize("foo_bar_baz"), "foo-bar-baz")
    }

    #[test]
    fn dasherized_tokens_round_trip_through_camel_case() {
        let token = "foo-bar";
        assert_eq!(dasherize(&underscore(&camelize(token))), token);
    }
}
