//! Decisions from a free-text source such as a language model.
//!
//! A [`Responder`] turns a prompt into a reply. [`TextProvider`] builds the
//! prompt from the player's view, asks the responder, and parses the reply.
//! Anything that goes wrong comes back as a [`DecisionError`], so the engine
//! falls back exactly as it would for any other failure.

use tracing::debug;

use super::parse::parse_decision;
use super::prompt::full_prompt;
use super::{DecisionError, DecisionProvider, DecisionView};
use crate::core::Action;

/// Something that answers prompts with free text.
pub trait Responder: Send + Sync {
    /// Reply to `prompt`.
    fn respond(&self, prompt: &str) -> Result<String, DecisionError>;
}

impl<F> Responder for F
where
    F: Fn(&str) -> Result<String, DecisionError> + Send + Sync,
{
    fn respond(&self, prompt: &str) -> Result<String, DecisionError> {
        self(prompt)
    }
}

/// Decision provider backed by a [`Responder`].
pub struct TextProvider<R> {
    responder: R,
    /// Prepended to every prompt (persona, strategy hints).
    prefix: String,
}

impl<R: Responder> TextProvider<R> {
    /// Wrap a responder.
    pub fn new(responder: R) -> Self {
        Self {
            responder,
            prefix: String::new(),
        }
    }

    /// Prepend `prefix` to every prompt.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The prompt sent for `view`.
    #[must_use]
    pub fn prompt_for(&self, view: &DecisionView) -> String {
        let mut prompt = self.prefix.clone();
        prompt.push_str(&full_prompt(view));
        prompt
    }
}

impl<R: Responder> DecisionProvider for TextProvider<R> {
    fn decide(&self, view: &DecisionView) -> Result<Action, DecisionError> {
        let prompt = self.prompt_for(view);
        debug!(player = %view.player_name, chars = prompt.len(), "prompting responder");

        let reply = self.responder.respond(&prompt)?;
        debug!(player = %view.player_name, %reply, "responder replied");

        Ok(parse_decision(&reply)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::decision::ParseError;
    use std::sync::Mutex;

    fn view() -> DecisionView {
        DecisionView {
            player: PlayerId::new(0),
            player_name: "Ann".into(),
            own_dice: vec![],
            total_dice: 6,
            current_bid: None,
            history: vec![],
            round: 1,
        }
    }

    #[test]
    fn test_parses_reasoned_reply() {
        let provider = TextProvider::new(|_: &str| -> Result<String, DecisionError> {
            Ok("Six dice in play, I hold two fours.\nBID 2 4".to_string())
        });

        assert_eq!(provider.decide(&view()).unwrap(), Action::bid(2, 4));
    }

    #[test]
    fn test_unparseable_reply_is_an_error() {
        let provider = TextProvider::new(|_: &str| -> Result<String, DecisionError> {
            Ok("I am not sure.".to_string())
        });

        assert!(matches!(
            provider.decide(&view()),
            Err(DecisionError::Parse(ParseError::NoDecision))
        ));
    }

    #[test]
    fn test_responder_error_passes_through() {
        let provider = TextProvider::new(|_: &str| -> Result<String, DecisionError> {
            Err(DecisionError::Unavailable("offline".into()))
        });

        assert!(matches!(
            provider.decide(&view()),
            Err(DecisionError::Unavailable(_))
        ));
    }

    #[test]
    fn test_prefix_is_sent() {
        let prompts = std::sync::Arc::new(Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&prompts);
        let provider = TextProvider::new(move |prompt: &str| -> Result<String, DecisionError> {
            sink.lock().unwrap().push(prompt.to_string());
            Ok("CHALLENGE".to_string())
        })
        .with_prefix("Play cautiously.\n");

        provider.decide(&view()).unwrap();

        let sent = prompts.lock().unwrap();
        assert!(sent[0].starts_with("Play cautiously.\nYou are Ann"));
    }
}
