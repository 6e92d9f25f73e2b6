use crate::error::Error;

use super::snake::underscore;

/// Strips everything up to and including the last `::`, leaving the
/// trailing identifier.
///
/// ```
/// use inflect::demodulize;
///
/// assert_eq!(demodulize("Admin::Users::Post"), "Post");
/// assert_eq!(demodulize("Post"), "Post");
/// ```
pub fn demodulize(name: &str) -> String {
    match name.rfind("::") {
        Some(idx) => name[idx + 2..].to_owned(),
        None => name.to_owned(),
    }
}

/// Derives a foreign-key column name from a class name:
///
/// ```
/// use inflect::foreign_key;
///
/// assert_eq!(foreign_key("Message"), "message_id");
/// assert_eq!(foreign_key("Admin::Post"), "post_id");
/// ```
pub fn foreign_key(class_name: &str) -> String {
    format!("{}_id", underscore(&demodulize(class_name)))
}

/// Like [foreign_key], without the underscore before `id`:
///
/// ```
/// use inflect::foreign_key_joined;
///
/// assert_eq!(foreign_key_joined("Message"), "messageid");
/// ```
pub fn foreign_key_joined(class_name: &str) -> String {
    format!("{}id", underscore(&demodulize(class_name)))
}

/// Resolves namespace paths to live values. The embedding application
/// supplies the implementation; the library only produces the segment
/// sequence. Implementations report missing constants with
/// [Error::ConstantNotFound].
pub trait ConstantResolver {
    type Constant;

    fn resolve(&self, path: &[&str]) -> Result<Self::Constant, Error>;
}

/// Splits a namespaced constant name into its segments. A leading `::`
/// anchors the name at the root and is dropped; an empty name or an
/// empty interior segment is an [Error::InvalidConstantPath].
///
/// ```
/// use inflect::constant_path;
///
/// assert_eq!(constant_path("Admin::Post").unwrap(), ["Admin", "Post"]);
/// assert_eq!(constant_path("::Admin::Post").unwrap(), ["Admin", "Post"]);
/// assert!(constant_path("Admin::::Post").is_err());
/// ```
pub fn constant_path(name: &str) -> Result<Vec<&str>, Error> {
    let anchored = name.strip_prefix("::").unwrap_or(name);
    if anchored.is_empty() {
        return Err(Error::InvalidConstantPath {
            name: name.to_owned(),
        });
    }
    let segments: Vec<&str> = anchored.split("::").collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(Error::InvalidConstantPath {
            name: name.to_owned(),
        });
    }
    Ok(segments)
}

/// Resolves a namespaced constant name through a host-supplied
/// [ConstantResolver], walking each namespace segment. Resolution
/// failures are propagated, never recovered: an invalid name and a
/// missing constant stay distinct errors.
pub fn constantize<R: ConstantResolver>(name: &str, resolver: &R) -> Result<R::Constant, Error> {
    let path = constant_path(name)?;
    resolver.resolve(&path)
}
