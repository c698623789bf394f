//! Free-text reply parsing.
//!
//! Replies may contain reasoning before the decision. The grammar is
//! `BID <quantity> <face>` or `CHALLENGE`, upper case, as whole words. When
//! several decisions appear the last one wins.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::core::Action;

/// Why a reply could not be reduced to an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no BID or CHALLENGE found in reply")]
    NoDecision,

    #[error("number out of range in `{0}`")]
    BadNumber(String),
}

fn decision_regex() -> &'static Regex {
    static DECISION: LazyLock<Regex> = LazyLock::new(|| {
        // Literal pattern, known to compile.
        Regex::new(r"\bBID\s+(\d+)\s+(\d+)\b|\bCHALLENGE\b").unwrap()
    });
    &DECISION
}

/// Extract the last decision from a free-text reply.
///
/// ```
/// use liars_dice::core::Action;
/// use liars_dice::decision::parse_decision;
///
/// let reply = "I could BID 2 3, but they are bluffing.\nCHALLENGE";
/// assert_eq!(parse_decision(reply), Ok(Action::Challenge));
/// ```
pub fn parse_decision(reply: &str) -> Result<Action, ParseError> {
    let last = decision_regex()
        .captures_iter(reply)
        .last()
        .ok_or(ParseError::NoDecision)?;

    match (last.get(1), last.get(2)) {
        (Some(quantity), Some(face_value)) => {
            let number = |m: regex::Match<'_>| {
                m.as_str()
                    .parse::<u32>()
                    .map_err(|_| ParseError::BadNumber(last[0].to_string()))
            };
            Ok(Action::bid(number(quantity)?, number(face_value)?))
        }
        _ => Ok(Action::Challenge),
    }
}
