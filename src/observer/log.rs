//! Structured logging of game events through `tracing`.

use tracing::{debug, info};

use super::{GameEvent, Observer};
use crate::core::PlayerId;

/// Forwards every event to `tracing`.
///
/// Player names are learned from the `Setup` event.
#[derive(Clone, Debug, Default)]
pub struct TracingObserver {
    names: Vec<String>,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn name(&self, player: PlayerId) -> String {
        self.names
            .get(player.index())
            .cloned()
            .unwrap_or_else(|| player.to_string())
    }
}

impl Observer for TracingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Setup {
                players,
                total_dice,
            } => {
                self.names = players.clone();
                info!(players = %players.join(", "), total_dice, "game set up");
            }
            GameEvent::TurnStarted { snapshot } => {
                debug!(
                    round = snapshot.round,
                    turn = snapshot.turn,
                    player = %self.name(snapshot.current_player),
                    bid = ?snapshot.current_bid,
                    total_dice = snapshot.total_dice,
                    "turn started"
                );
            }
            GameEvent::BidPlaced { player, bid } => {
                info!(player = %self.name(*player), %bid, "bid");
            }
            GameEvent::BidCorrected {
                player,
                requested_quantity,
                requested_face,
                placed,
            } => {
                let requested = format!("{requested_quantity} dice show {requested_face}");
                info!(
                    player = %self.name(*player),
                    %requested,
                    %placed,
                    "invalid bid auto-corrected"
                );
            }
            GameEvent::ChallengeRejected { player } => {
                debug!(player = %self.name(*player), "challenge with no bid ignored");
            }
            GameEvent::ChallengeIssued {
                challenger,
                bidder,
                bid,
            } => {
                info!(
                    challenger = %self.name(*challenger),
                    bidder = %self.name(*bidder),
                    %bid,
                    "challenge"
                );
            }
            GameEvent::ChallengeResolved { report } => {
                info!(
                    bid = %report.bid,
                    actual = report.actual,
                    bid_was_true = report.bid_was_true(),
                    winner = %self.name(report.winner),
                    loser = %self.name(report.loser),
                    loser_dice_left = report.loser_dice_left,
                    "challenge resolved"
                );
            }
            GameEvent::PlayerEliminated { player } => {
                info!(player = %self.name(*player), "player eliminated");
            }
            GameEvent::RoundStarted {
                round,
                starter,
                total_dice,
            } => {
                info!(round, starter = %self.name(*starter), total_dice, "new round");
            }
            GameEvent::DecisionFailed {
                player,
                error,
                fallback,
            } => {
                info!(player = %self.name(*player), %error, %fallback, "fallback moved");
            }
            GameEvent::GameOver { winner } => {
                info!(winner = %self.name(*winner), "game over");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learns_names_from_setup() {
        let mut observer = TracingObserver::new();
        assert_eq!(observer.name(PlayerId::new(1)), "Player 1");

        observer.on_event(&GameEvent::Setup {
            players: vec!["Ann".into(), "Bo".into()],
            total_dice: 10,
        });
        assert_eq!(observer.name(PlayerId::new(1)), "Bo");
    }
}
