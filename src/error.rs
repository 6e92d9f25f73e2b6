/// Errors surfaced by rule registration and constant resolution.
///
/// Unmatched words are never an error: `pluralize` and `singularize`
/// return their input unchanged when no rule applies.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A rule's regular expression failed to compile. Surfaced at
    /// registration time, never while applying rules.
    #[error("invalid rule pattern")]
    Pattern(#[from] regex::Error),

    /// The input to `constantize` is not a well-formed namespaced name,
    /// e.g. it is empty or contains an empty segment (`Admin::::Post`).
    #[error("`{name}` is not a valid namespaced constant name")]
    InvalidConstantPath { name: String },

    /// A resolver walked the namespace path but found no constant there.
    /// Produced by [ConstantResolver](crate::ConstantResolver)
    /// implementations, propagated as-is by `constantize`.
    #[error("constant `{path}` not found")]
    ConstantNotFound { path: String },
}
