//! Prompt text for free-text decision sources.
//!
//! The preamble explains the rules and the reply format; the turn prompt
//! carries what the player can see. Replies are read back with
//! [`parse_decision`](super::parse_decision).

use std::fmt::Write as _;

use super::DecisionView;

/// Rules and reply format, addressed to `player_name`.
#[must_use]
pub fn rules_preamble(player_name: &str) -> String {
    format!(
        "You are {player_name}, playing Liar's Dice.\n\
         \n\
         Rules:\n\
         1. Every player holds hidden six-sided dice. Only you can see yours.\n\
         2. On your turn either raise the bid or challenge the current bid.\n\
         3. Bids rank by quantity first, then face: 2 fives < 2 sixes < 3 ones < 3 twos.\n\
         4. A new bid must rank strictly higher than the current one.\n\
         5. Ones are wild and count toward any face.\n\
         6. On a challenge all dice are counted. If at least the bid quantity\n\
         \x20  show the face (or are wild) the challenger loses a die, otherwise\n\
         \x20  the bidder does.\n\
         7. Everyone rerolls after a challenge. A player with no dice is out.\n\
         \n\
         End your reply with the decision alone on its last line, exactly one of:\n\
         BID <quantity> <face>\n\
         CHALLENGE\n\
         You cannot challenge when there is no current bid.\n"
    )
}

/// What the player sees this turn.
#[must_use]
pub fn decision_prompt(view: &DecisionView) -> String {
    let mut prompt = String::new();

    let dice: Vec<String> = view.own_dice.iter().map(ToString::to_string).collect();
    let _ = writeln!(prompt, "Round {}.", view.round);
    let _ = writeln!(
        prompt,
        "There are {} dice in the game. Your dice: [{}].",
        view.total_dice,
        dice.join(", ")
    );

    match &view.current_bid {
        Some(bid) => {
            let _ = writeln!(prompt, "The current bid is: {bid}.");
        }
        None => prompt.push_str("The current bid is: None (you start).\n"),
    }

    prompt.push_str("\nGame history:\n");
    if view.history.is_empty() {
        prompt.push_str("Game just started\n");
    } else {
        for entry in &view.history {
            let _ = writeln!(prompt, "{entry}");
        }
    }

    prompt.push_str("\nThink it through, then give your decision on the last line.\n");
    prompt
}

/// Preamble followed by the turn prompt.
#[must_use]
pub fn full_prompt(view: &DecisionView) -> String {
    let mut prompt = rules_preamble(&view.player_name);
    prompt.push('\n');
    prompt.push_str(&decision_prompt(view));
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{dice_from_faces, Bid, HistoryEntry, PlayerId};

    fn view(current_bid: Option<Bid>, history: Vec<HistoryEntry>) -> DecisionView {
        DecisionView {
            player: PlayerId::new(1),
            player_name: "Bo".into(),
            own_dice: dice_from_faces(&[2, 5, 1]).unwrap(),
            total_dice: 9,
            current_bid,
            history,
            round: 2,
        }
    }

    #[test]
    fn test_opening_prompt() {
        let prompt = decision_prompt(&view(None, vec![]));

        assert!(prompt.contains("There are 9 dice in the game. Your dice: [2, 5, 1]."));
        assert!(prompt.contains("None (you start)"));
        assert!(prompt.contains("Game just started"));
    }

    #[test]
    fn test_prompt_with_bid_and_history() {
        let history = vec![HistoryEntry::Bid {
            player: "Ann".into(),
            quantity: 3,
            face_value: 4,
        }];
        let prompt = decision_prompt(&view(Some(Bid::new(3, 4, PlayerId::new(0))), history));

        assert!(prompt.contains("The current bid is: 3 dice show 4."));
        assert!(prompt.contains("Ann bids 3 dice show 4"));
        assert!(!prompt.contains("Game just started"));
    }

    #[test]
    fn test_full_prompt_names_player_and_format() {
        let prompt = full_prompt(&view(None, vec![]));

        assert!(prompt.starts_with("You are Bo"));
        assert!(prompt.contains("BID <quantity> <face>"));
        assert!(prompt.contains("CHALLENGE"));
    }
}
