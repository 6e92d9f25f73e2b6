use std::collections::HashSet;

use regex::Regex;

use crate::error::Error;
use crate::transform::camel::camelize;
use crate::transform::snake::underscore;

/// The default English rule set loaded by [Inflections::standard].
pub mod defaults;

/// How a rule recognizes the word it rewrites.
#[derive(Debug, Clone)]
enum Matcher {
    /// A literal suffix, compared case-sensitively.
    Suffix(String),
    /// A regular expression. Rules author their own anchoring; the
    /// default set anchors everything at end-of-string.
    Pattern(Regex),
}

/// An ordered pair of matcher and replacement, the atomic unit of the
/// rule registry. Regex replacements may reference captures with
/// `$1`/`${1}` syntax.
#[derive(Debug, Clone)]
pub struct Rule {
    matcher: Matcher,
    replacement: String,
}

impl Rule {
    /// Builds a regex rule. Compilation failure surfaces here, at
    /// registration, rather than on first use.
    pub fn pattern(pattern: &str, replacement: &str) -> Result<Rule, Error> {
        Ok(Rule {
            matcher: Matcher::Pattern(Regex::new(pattern)?),
            replacement: replacement.to_owned(),
        })
    }

    /// Builds a literal-suffix rule. Never fails.
    pub fn suffix(suffix: &str, replacement: &str) -> Rule {
        Rule {
            matcher: Matcher::Suffix(suffix.to_owned()),
            replacement: replacement.to_owned(),
        }
    }

    /// Applies the rule to `word`, or returns `None` when the matcher
    /// does not match.
    fn apply(&self, word: &str) -> Option<String> {
        match &self.matcher {
            Matcher::Pattern(re) => {
                if re.is_match(word) {
                    Some(re.replace(word, self.replacement.as_str()).into_owned())
                } else {
                    None
                }
            }
            Matcher::Suffix(suffix) => word
                .strip_suffix(suffix.as_str())
                .map(|stem| format!("{stem}{}", self.replacement)),
        }
    }
}

/// Which rule list(s) [Inflections::clear] resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Plurals,
    Singulars,
    Uncountables,
}

/// The inflection rule registry: ordered plural and singular rule lists
/// plus the uncountable-word set.
///
/// Rules are prepended, so the most recently registered rule is tried
/// first. This lets callers layer domain vocabulary on top of the
/// defaults without touching them:
///
/// ```
/// use inflect::Inflections;
///
/// let mut inflections = Inflections::standard();
/// inflections.irregular("octopus", "octopodes");
/// assert_eq!(inflections.pluralize("octopus"), "octopodes");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Inflections {
    plurals: Vec<Rule>,
    singulars: Vec<Rule>,
    uncountables: HashSet<String>,
}

impl Inflections {
    /// A registry with no rules at all. Words pass through unchanged
    /// until rules are registered.
    pub fn empty() -> Inflections {
        Inflections::default()
    }

    /// A registry pre-loaded with the default English rule set.
    pub fn standard() -> Inflections {
        let mut inflections = Inflections::empty();
        defaults::install(&mut inflections);
        inflections
    }

    /// Prepends a regex pluralization rule.
    pub fn plural(&mut self, pattern: &str, replacement: &str) -> Result<(), Error> {
        self.plurals.insert(0, Rule::pattern(pattern, replacement)?);
        Ok(())
    }

    /// Prepends a literal-suffix pluralization rule.
    pub fn plural_suffix(&mut self, suffix: &str, replacement: &str) {
        self.plurals.insert(0, Rule::suffix(suffix, replacement));
    }

    /// Prepends a regex singularization rule.
    pub fn singular(&mut self, pattern: &str, replacement: &str) -> Result<(), Error> {
        self.singulars.insert(0, Rule::pattern(pattern, replacement)?);
        Ok(())
    }

    /// Prepends a literal-suffix singularization rule.
    pub fn singular_suffix(&mut self, suffix: &str, replacement: &str) {
        self.singulars.insert(0, Rule::suffix(suffix, replacement));
    }

    /// Registers an irregular singular/plural pair, prepending derived
    /// rules to both lists so the pair is invertible in either casing:
    ///
    /// ```
    /// use inflect::Inflections;
    ///
    /// let mut inflections = Inflections::empty();
    /// inflections.irregular("person", "people");
    /// assert_eq!(inflections.pluralize("person"), "people");
    /// assert_eq!(inflections.singularize("People"), "Person");
    /// ```
    ///
    /// Both forms must be non-empty; empty forms are a caller error and
    /// register nothing.
    pub fn irregular(&mut self, singular: &str, plural: &str) {
        debug_assert!(
            !singular.is_empty() && !plural.is_empty(),
            "irregular forms must be non-empty"
        );
        let Some((to_plural, to_singular)) = irregular_rules(singular, plural) else {
            return;
        };
        for rule in to_plural {
            self.plurals.insert(0, rule);
        }
        for rule in to_singular {
            self.singulars.insert(0, rule);
        }
    }

    /// Adds words to the uncountable set. Words are stored as given and
    /// compared case-insensitively at lookup time.
    pub fn uncountable<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.uncountables.insert(word.into());
        }
    }

    /// Empties the rule list(s) named by `scope` in place.
    pub fn clear(&mut self, scope: Scope) {
        match scope {
            Scope::All => {
                self.plurals.clear();
                self.singulars.clear();
                self.uncountables.clear();
            }
            Scope::Plurals => self.plurals.clear(),
            Scope::Singulars => self.singulars.clear(),
            Scope::Uncountables => self.uncountables.clear(),
        }
    }

    /// The pluralization rules, highest priority first.
    pub fn plurals(&self) -> &[Rule] {
        &self.plurals
    }

    /// The singularization rules, highest priority first.
    pub fn singulars(&self) -> &[Rule] {
        &self.singulars
    }

    /// The uncountable words, as registered.
    pub fn uncountables(&self) -> &HashSet<String> {
        &self.uncountables
    }

    /// Whether `word` is exempt from inflection. Comparison lowercases
    /// both the probe and the stored words.
    pub fn is_uncountable(&self, word: &str) -> bool {
        let probe = word.to_lowercase();
        self.uncountables.iter().any(|w| w.to_lowercase() == probe)
    }

    /// Returns the plural form of an English word:
    ///
    /// ```
    /// use inflect::Inflections;
    ///
    /// let inflections = Inflections::standard();
    /// assert_eq!(inflections.pluralize("post"), "posts");
    /// assert_eq!(inflections.pluralize("octopus"), "octopi");
    /// assert_eq!(inflections.pluralize("sheep"), "sheep");
    /// assert_eq!(inflections.pluralize("CamelOctopus"), "CamelOctopi");
    /// ```
    pub fn pluralize(&self, word: &str) -> String {
        self.apply(word, &self.plurals)
    }

    /// Returns the singular form of an English word:
    ///
    /// ```
    /// use inflect::Inflections;
    ///
    /// let inflections = Inflections::standard();
    /// assert_eq!(inflections.singularize("posts"), "post");
    /// assert_eq!(inflections.singularize("matrices"), "matrix");
    /// assert_eq!(inflections.singularize("sheep"), "sheep");
    /// ```
    pub fn singularize(&self, word: &str) -> String {
        self.apply(word, &self.singulars)
    }

    /// Derives a table name from a class name:
    ///
    /// ```
    /// use inflect::Inflections;
    ///
    /// let inflections = Inflections::standard();
    /// assert_eq!(inflections.tableize("RawScaledScorer"), "raw_scaled_scorers");
    /// assert_eq!(inflections.tableize("Admin::Post"), "admin/posts");
    /// ```
    pub fn tableize(&self, name: &str) -> String {
        self.pluralize(&underscore(name))
    }

    /// Derives a class name from a table name, stripping any leading
    /// schema qualifier:
    ///
    /// ```
    /// use inflect::Inflections;
    ///
    /// let inflections = Inflections::standard();
    /// assert_eq!(inflections.classify("egg_and_hams"), "EggAndHam");
    /// assert_eq!(inflections.classify("public.users"), "User");
    /// ```
    ///
    /// Known limitation: already-singular input may be mangled, because
    /// singularize is not idempotent-safe on singular nouns
    /// (`classify("calculus")` yields `"Calculu"`).
    pub fn classify(&self, table_name: &str) -> String {
        let table = match table_name.rsplit_once('.') {
            Some((_schema, table)) => table,
            None => table_name,
        };
        camelize(&self.singularize(table))
    }

    /// The shared rule engine: tries `rules` in order and stops at the
    /// first match. Empty and uncountable words pass through, as do
    /// words no rule matches.
    fn apply(&self, word: &str, rules: &[Rule]) -> String {
        if word.is_empty() || self.is_uncountable(word) {
            return word.to_owned();
        }
        for rule in rules {
            if let Some(inflected) = rule.apply(word) {
                return inflected;
            }
        }
        word.to_owned()
    }
}

/// Derives the rules an irregular pair installs: `(plural-direction,
/// singular-direction)`. Returns `None` when either form is empty.
///
/// When the first letters of the two forms case-fold to the same letter
/// a single case-insensitive rule per direction suffices, capturing the
/// first letter so its case survives the replacement. Otherwise each
/// direction gets an upper- and a lower-case-explicit variant, with the
/// tail still matched case-insensitively.
pub fn irregular_rules(singular: &str, plural: &str) -> Option<(Vec<Rule>, Vec<Rule>)> {
    let s_first = singular.chars().next()?;
    let p_first = plural.chars().next()?;
    let s_rest = &singular[s_first.len_utf8()..];
    let p_rest = &plural[p_first.len_utf8()..];

    if s_first.to_lowercase().to_string() == p_first.to_lowercase().to_string() {
        let to_plural = vec![capture_first(s_first, s_rest, p_rest)];
        let to_singular = vec![capture_first(p_first, p_rest, s_rest)];
        Some((to_plural, to_singular))
    } else {
        let s_upper = s_first.to_uppercase().to_string();
        let s_lower = s_first.to_lowercase().to_string();
        let p_upper = p_first.to_uppercase().to_string();
        let p_lower = p_first.to_lowercase().to_string();
        let to_plural = vec![
            case_explicit(&s_upper, s_rest, &p_upper, p_rest),
            case_explicit(&s_lower, s_rest, &p_lower, p_rest),
        ];
        let to_singular = vec![
            case_explicit(&p_upper, p_rest, &s_upper, s_rest),
            case_explicit(&p_lower, p_rest, &s_lower, s_rest),
        ];
        Some((to_plural, to_singular))
    }
}

/// One case-insensitive rule matching `first + rest` at end-of-string,
/// replacing with the captured first letter followed by `replacement_rest`.
fn capture_first(first: char, rest: &str, replacement_rest: &str) -> Rule {
    let pattern = format!(
        "(?i)({}){}$",
        regex::escape(&first.to_string()),
        regex::escape(rest)
    );
    let replacement = format!("${{1}}{}", template_literal(replacement_rest));
    // Patterns are built from escaped text and always compile.
    Rule::pattern(&pattern, &replacement).unwrap()
}

/// One rule matching a case-explicit first letter and case-insensitive
/// tail at end-of-string, replacing with a fixed literal.
fn case_explicit(first: &str, rest: &str, replacement_first: &str, replacement_rest: &str) -> Rule {
    let pattern = format!("{}(?i){}$", regex::escape(first), regex::escape(rest));
    let replacement = template_literal(&format!("{replacement_first}{replacement_rest}"));
    // Patterns are built from escaped text and always compile.
    Rule::pattern(&pattern, &replacement).unwrap()
}

/// Escapes `$` so word text passes through the replacement-template
/// syntax untouched.
fn template_literal(text: &str) -> String {
    text.replace('$', "$$")
}
