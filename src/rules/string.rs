//! String rules. Each is generic over `T: AsRef<str>`, so the same rule
//! checks `str`, `String`, `Cow<str>` or any other string-like type.

use core::fmt;

use crate::types::alloc_type::String;
#[cfg(feature = "regex")]
use crate::validation::Validation;
use crate::validator::Validator;

/// Accepts strings starting with `prefix`.
///
/// Fails with `must begin with "{prefix}"`.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::begins_with;
///
/// let rule = begins_with::<str>("https://");
/// assert!(rule.is_valid("https://example.com"));
/// assert_eq!(
///     rule.check("ftp://example.com").into_errors().unwrap(),
///     [r#"must begin with "https://""#]
/// );
/// ```
pub fn begins_with<T>(prefix: impl Into<String>) -> Validator<T>
where
    T: AsRef<str> + ?Sized + 'static,
{
    let prefix = prefix.into();
    let error = format!("must begin with \"{prefix}\"");
    Validator::from_predicate(move |value: &T| value.as_ref().starts_with(prefix.as_str()), error)
}

/// Accepts strings ending with `suffix`.
///
/// Fails with `must end with "{suffix}"`.
pub fn ends_with<T>(suffix: impl Into<String>) -> Validator<T>
where
    T: AsRef<str> + ?Sized + 'static,
{
    let suffix = suffix.into();
    let error = format!("must end with \"{suffix}\"");
    Validator::from_predicate(move |value: &T| value.as_ref().ends_with(suffix.as_str()), error)
}

/// Checks the string's length (in `char`s) with any `usize` validator.
///
/// Errors of `length` are prefixed with `"length "`.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::{is_at_most, is_exactly, its_length};
///
/// let code = its_length::<String>(is_exactly(3));
/// assert_eq!(
///     code.validate("ABCD".to_string()).into_errors().unwrap(),
///     ["length must be exactly 3"]
/// );
///
/// let short = its_length::<str>(is_at_most(2));
/// assert!(short.is_valid("ok"));
/// ```
pub fn its_length<T>(length: Validator<usize>) -> Validator<T>
where
    T: AsRef<str> + ?Sized + 'static,
{
    length
        .pullback(|value: &T| value.as_ref().chars().count())
        .map_errors(|error| format!("length {error}"))
}

/// How [`matches`] compares a pattern against the input.
///
/// Every mode searches for the pattern anywhere in the input; anchor regular
/// expressions with `^...$` to require a whole-string match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum MatchMode {
    /// The pattern is a literal substring.
    #[default]
    Literal,
    /// The pattern is a literal substring, compared ignoring case.
    CaseInsensitive,
    /// The pattern is a regular expression.
    #[cfg(feature = "regex")]
    Regex,
    /// The pattern is a regular expression, matched ignoring case.
    #[cfg(feature = "regex")]
    CaseInsensitiveRegex,
}

/// A pattern that could not be compiled.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PatternError {
    pattern: String,
    reason: String,
}

impl PatternError {
    /// The pattern that was rejected.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern \"{}\": {}", self.pattern, self.reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}

/// Accepts strings in which `pattern` is found under the given [`MatchMode`].
///
/// Fails with `must match "{pattern}"`. Literal modes never fail to build;
/// regular expression modes return [`PatternError`] for an invalid expression.
///
/// # Examples
///
/// ```
/// use validation_rail::rules::{matches, MatchMode};
///
/// let rule = matches::<str>("rail", MatchMode::CaseInsensitive)?;
/// assert!(rule.is_valid("Validation RAIL"));
/// assert_eq!(rule.check("train").into_errors().unwrap(), [r#"must match "rail""#]);
/// # Ok::<(), validation_rail::rules::PatternError>(())
/// ```
pub fn matches<T>(pattern: impl Into<String>, mode: MatchMode) -> Result<Validator<T>, PatternError>
where
    T: AsRef<str> + ?Sized + 'static,
{
    let pattern = pattern.into();
    let error = format!("must match \"{pattern}\"");

    let validator = match mode {
        MatchMode::Literal => Validator::from_predicate(
            move |value: &T| value.as_ref().contains(pattern.as_str()),
            error,
        ),
        MatchMode::CaseInsensitive => {
            let needle = pattern.to_lowercase();
            Validator::from_predicate(
                move |value: &T| value.as_ref().to_lowercase().contains(needle.as_str()),
                error,
            )
        }
        #[cfg(feature = "regex")]
        MatchMode::Regex => regex_validator(&pattern, false, error)?,
        #[cfg(feature = "regex")]
        MatchMode::CaseInsensitiveRegex => regex_validator(&pattern, true, error)?,
    };

    Ok(validator)
}

#[cfg(feature = "regex")]
fn regex_validator<T>(
    pattern: &str,
    case_insensitive: bool,
    error: String,
) -> Result<Validator<T>, PatternError>
where
    T: AsRef<str> + ?Sized + 'static,
{
    let regex = regex::RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| PatternError {
            pattern: pattern.to_string(),
            reason: source.to_string(),
        })?;

    Ok(Validator::new(move |value: &T| {
        if regex.is_match(value.as_ref()) {
            Validation::valid(())
        } else {
            Validation::invalid(error.clone())
        }
    }))
}
