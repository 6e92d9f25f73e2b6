/// Returns the English ordinal suffix for an integer: `st`, `nd`, `rd`
/// or `th`. The teens are always `th`; otherwise the last digit
/// decides. Negative numbers use the suffix of their absolute value.
///
/// ```
/// use inflect::ordinal;
///
/// assert_eq!(ordinal(1), "st");
/// assert_eq!(ordinal(2), "nd");
/// assert_eq!(ordinal(3), "rd");
/// assert_eq!(ordinal(11), "th");
/// ```
pub fn ordinal(number: i64) -> &'static str {
    let value = number.unsigned_abs();
    match value % 100 {
        11..=13 => "th",
        _ => match value % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Appends the ordinal suffix to the number's decimal text.
///
/// ```
/// use inflect::ordinalize;
///
/// assert_eq!(ordinalize(1), "1st");
/// assert_eq!(ordinalize(21), "21st");
/// assert_eq!(ordinalize(112), "112th");
/// assert_eq!(ordinalize(-3), "-3rd");
/// ```
pub fn ordinalize(number: i64) -> String {
    format!("{number}{}", ordinal(number))
}
