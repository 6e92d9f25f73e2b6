//! String inflections for English words and identifier-style strings.
//! Pluralization and singularization are driven by an ordered, mutable
//! rule registry; camel, snake, dashed, human-readable, title, table,
//! class and foreign-key forms plus ordinal numbers are deterministic
//! rewrites on top. Everything is available both as free functions and
//! as methods through the [Inflect] and [Ordinalize] traits.
//!
//! ```
//! use inflect::Inflect;
//!
//! assert_eq!(inflect::pluralize("octopus"), "octopi");
//! assert_eq!("RawScaledScorer".tableize(), "raw_scaled_scorers");
//! assert_eq!("Admin::Post".foreign_key(), "post_id");
//! ```

use once_cell::sync::Lazy;
use parking_lot::RwLock;

pub mod error;
pub mod rules;
pub mod transform;
pub mod wordlist;

pub use error::Error;
pub use rules::{Inflections, Rule, Scope};
pub use transform::camel::{camelize, camelize_lower};
pub use transform::humanize::{humanize, titleize};
pub use transform::modules::{
    constant_path, constantize, demodulize, foreign_key, foreign_key_joined, ConstantResolver,
};
pub use transform::ordinal::{ordinal, ordinalize};
pub use transform::snake::{dasherize, underscore};
pub use wordlist::WordList;

/// The process-wide registry backing the free functions below. Created
/// with the default English rule set on first touch and never torn
/// down; `clear` empties its lists in place.
static REGISTRY: Lazy<RwLock<Inflections>> = Lazy::new(|| RwLock::new(Inflections::standard()));

/// Runs `f` with read access to the process-wide registry.
pub fn inflections<R>(f: impl FnOnce(&Inflections) -> R) -> R {
    f(&REGISTRY.read())
}

/// Runs `f` with write access to the process-wide registry, for
/// layering domain vocabulary on top of the defaults:
///
/// ```no_run
/// inflect::inflections_mut(|inflections| {
///     inflections.irregular("corpus", "corpora");
///     inflections.uncountable(["middleware"]);
/// });
/// ```
///
/// Mutation takes the write lock, so it is safe from any thread, but
/// vocabulary is normally registered once at startup before heavy
/// concurrent reading begins.
pub fn inflections_mut<R>(f: impl FnOnce(&mut Inflections) -> R) -> R {
    f(&mut REGISTRY.write())
}

/// Returns the plural form of an English word, using the process-wide
/// registry. Words no rule matches come back unchanged.
pub fn pluralize(word: &str) -> String {
    REGISTRY.read().pluralize(word)
}

/// Returns the singular form of an English word, using the process-wide
/// registry. Words no rule matches come back unchanged.
pub fn singularize(word: &str) -> String {
    REGISTRY.read().singularize(word)
}

/// Derives a table name from a class name, using the process-wide
/// registry. See [Inflections::tableize].
pub fn tableize(name: &str) -> String {
    REGISTRY.read().tableize(name)
}

/// Derives a class name from a table name, using the process-wide
/// registry. See [Inflections::classify] for the already-singular
/// caveat.
pub fn classify(table_name: &str) -> String {
    REGISTRY.read().classify(table_name)
}

/// String inflections as methods. Implemented for `str`; the
/// registry-backed methods go through the process-wide registry.
#[allow(missing_docs)]
pub trait Inflect {
    fn pluralize(&self) -> String;
    fn singularize(&self) -> String;

    fn camelize(&self) -> String;
    fn camelize_lower(&self) -> String;

    fn underscore(&self) -> String;
    fn dasherize(&self) -> String;

    fn humanize(&self) -> String;
    fn titleize(&self) -> String;

    fn demodulize(&self) -> String;
    fn foreign_key(&self) -> String;

    fn tableize(&self) -> String;
    fn classify(&self) -> String;
}

impl Inflect for str {
    fn pluralize(&self) -> String {
        pluralize(self)
    }

    fn singularize(&self) -> String {
        singularize(self)
    }

    fn camelize(&self) -> String {
        camelize(self)
    }

    fn camelize_lower(&self) -> String {
        camelize_lower(self)
    }

    fn underscore(&self) -> String {
        underscore(self)
    }

    fn dasherize(&self) -> String {
        dasherize(self)
    }

    fn humanize(&self) -> String {
        humanize(self)
    }

    fn titleize(&self) -> String {
        titleize(self)
    }

    fn demodulize(&self) -> String {
        demodulize(self)
    }

    fn foreign_key(&self) -> String {
        foreign_key(self)
    }

    fn tableize(&self) -> String {
        tableize(self)
    }

    fn classify(&self) -> String {
        classify(self)
    }
}

/// Ordinal suffixes as a method on the integer types.
pub trait Ordinalize {
    fn ordinalize(&self) -> String;
}

macro_rules! impl_ordinalize {
    ($($ty:ty),+) => {$(
        impl Ordinalize for $ty {
            fn ordinalize(&self) -> String {
                ordinalize(*self as i64)
            }
        }
    )+};
}

impl_ordinalize!(i8, i16, i32, i64, isize, u8, u16, u32);

#[cfg(test)]
mod tests {
    use super::{Inflect, Ordinalize};

    // These read the process-wide registry; mutation is covered against
    // local `Inflections` instances in `rules`.

    #[test]
    fn free_functions_use_the_default_rule_set() {
        assert_eq!(super::pluralize("post"), "posts");
        assert_eq!(super::singularize("posts"), "post");
        assert_eq!(super::tableize("RawScaledScorer"), "raw_scaled_scorers");
        assert_eq!(super::classify("egg_and_hams"), "EggAndHam");
    }

    #[test]
    fn registry_accessor_exposes_read_views() {
        super::inflections(|inflections| {
            assert!(!inflections.plurals().is_empty());
            assert!(inflections.is_uncountable("sheep"));
        });
    }

    #[test]
    fn str_methods_mirror_the_free_functions() {
        assert_eq!("message".pluralize(), "messages");
        assert_eq!("special_guest".camelize(), "SpecialGuest");
        assert_eq!("Admin::Post".demodulize(), "Post");
        assert_eq!("Admin::Post".foreign_key(), "post_id");
        assert_eq!("employee_salary".humanize(), "Employee salary");
    }

    #[test]
    fn integers_ordinalize() {
        assert_eq!(21u8.ordinalize(), "21st");
        assert_eq!(112i64.ordinalize(), "112th");
        assert_eq!((-42i32).ordinalize(), "-42nd");
    }
}
