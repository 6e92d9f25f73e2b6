use super::lowercase_first;

/// Converts an underscored, possibly path-qualified name to
/// `UpperCamelCase`, turning `/` into the `::` namespace separator.
///
/// Underscores are removed and the character after each underscore (or
/// at the start of a path segment) is uppercased; other characters keep
/// their case.
///
/// ```
/// use inflect::camelize;
///
/// assert_eq!(camelize("special_guest"), "SpecialGuest");
/// assert_eq!(camelize("app/models/post"), "App::Models::Post");
/// assert_eq!(camelize("API_key"), "APIKey");
/// assert_eq!(camelize("_private"), "Private");
/// ```
pub fn camelize(word: &str) -> String {
    camelize_segments(word)
}

/// Like [camelize] but lowercases only the first character of the
/// overall result, leaving later segments upper-cased.
///
/// ```
/// use inflect::camelize_lower;
///
/// assert_eq!(camelize_lower("special_guest"), "specialGuest");
/// assert_eq!(camelize_lower("app/models/post"), "app::Models::Post");
/// ```
pub fn camelize_lower(word: &str) -> String {
    lowercase_first(&camelize_segments(word))
}

fn camelize_segments(word: &str) -> String {
    let mut result = String::with_capacity(word.len() + 2);
    let mut first_segment = true;
    for segment in word.split('/') {
        if !first_segment {
            result.push_str("::");
        }
        first_segment = false;
        let mut new_word = true;
        for character in segment.chars() {
            if character == '_' {
                new_word = true;
            } else if new_word {
                result.extend(character.to_uppercase());
                new_word = false;
            } else {
                result.push(character);
            }
        }
    }
    result
}
