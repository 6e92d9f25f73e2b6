/// Provides conversion to camel-cased class and method names.
///
/// Example string `Admin::Post`
pub mod camel;
pub use camel::camelize;
pub use camel::camelize_lower;

/// Provides conversion to underscored and dashed identifier names.
///
/// Example string `admin/post`
pub mod snake;
pub use snake::dasherize;
pub use snake::underscore;

/// Provides conversion to human-readable and title-cased text.
///
/// Example string `Employee salary`
pub mod humanize;
pub use humanize::humanize;
pub use humanize::titleize;

/// Provides namespace handling: demodulize, foreign keys and the
/// constant-resolution hook.
///
/// Example string `post_id`
pub mod modules;
pub use modules::constant_path;
pub use modules::constantize;
pub use modules::demodulize;
pub use modules::foreign_key;
pub use modules::foreign_key_joined;
pub use modules::ConstantResolver;

/// Provides English ordinal suffixes for integers.
///
/// Example string `21st`
pub mod ordinal;
pub use ordinal::ordinal;
pub use ordinal::ordinalize;

/// Uppercases the first character, leaving the rest untouched.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character, leaving the rest untouched.
pub(crate) fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[test]
fn test_capitalize_first() {
    assert_eq!(capitalize_first("employee salary"), "Employee salary");
}

#[test]
fn test_capitalize_first_on_empty() {
    assert_eq!(capitalize_first(""), "")
}

#[test]
fn test_capitalize_first_leaves_tail_case_alone() {
    assert_eq!(capitalize_first("aPI key"), "API key")
}

#[test]
fn test_lowercase_first() {
    assert_eq!(lowercase_first("Admin::Post"), "admin::Post")
}

#[test]
fn test_lowercase_first_on_empty() {
    assert_eq!(lowercase_first(""), "")
}
