//! Small regex-like matchers built on the engine.
//!
//! Each constructor returns an automaton over `char` symbols with `String`
//! states, starting in `"start"`. Matching a string means feeding its
//! characters and then checking acceptance, see [`Automaton::matches`].

use crate::automaton::Automaton;
use thiserror::Error;

const START: &str = "start";

/// Errors raised for malformed pattern literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern {pattern:?} must be exactly one character")]
    NotSingleCharacter { pattern: String },

    #[error("Pattern must contain at least one character")]
    Empty,
}

/// Matches exactly one occurrence of `literal`, like `^a$`.
///
/// # Example
///
/// ```
/// use tablefsm::patterns::only_one;
///
/// let mut matcher = only_one("a").unwrap();
/// assert!(matcher.matches("a".chars()));
///
/// matcher.reset();
/// assert!(!matcher.matches("aa".chars()));
/// ```
pub fn only_one(literal: &str) -> Result<Automaton<String, char>, PatternError> {
    let c = single_char(literal)?;
    let accept = format!("{c}_end");

    Ok(Automaton::new(
        START.to_string(),
        [((START.to_string(), c), accept.clone())],
        [accept],
    ))
}

/// Matches one or more occurrences of `literal`, like `^a+$`.
pub fn one_or_more(literal: &str) -> Result<Automaton<String, char>, PatternError> {
    let c = single_char(literal)?;
    let accept = c.to_string();

    Ok(Automaton::new(
        START.to_string(),
        [
            ((START.to_string(), c), accept.clone()),
            ((accept.clone(), c), accept.clone()),
        ],
        [accept],
    ))
}

/// Matches one or more repetitions of any single character of `chars`.
///
/// Every character gets its own accepting state with a self loop and no
/// edges to the other characters' states, so `"aabb"` does not match
/// `any_of_one_or_more("abc")` while `"aa"` and `"bbbb"` do.
pub fn any_of_one_or_more(chars: &str) -> Result<Automaton<String, char>, PatternError> {
    if chars.is_empty() {
        return Err(PatternError::Empty);
    }

    let mut transitions = Vec::new();
    let mut accept = Vec::new();
    for c in chars.chars() {
        let own = c.to_string();
        transitions.push(((START.to_string(), c), own.clone()));
        transitions.push(((own.clone(), c), own.clone()));
        accept.push(own);
    }

    Ok(Automaton::new(START.to_string(), transitions, accept))
}

fn single_char(literal: &str) -> Result<char, PatternError> {
    let mut chars = literal.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(PatternError::NotSingleCharacter {
            pattern: literal.to_string(),
        }),
    }
}
