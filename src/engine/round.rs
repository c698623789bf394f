//! Round engine implementation.

use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{GameOutcome, Phase, Progress, Seat, SetupError, MIN_PLAYERS};
use crate::core::{
    minimal_raise, Action, Bid, Die, EngineConfig, GameRng, GameState, HistoryEntry, PlayerId,
    PlayerMap, MAX_PLAYERS,
};
use crate::decision::{decide_guarded, decide_with_timeout, DecisionProvider, DecisionView, FallbackPolicy};
use crate::observer::{ChallengeReport, GameEvent, NullObserver, Observer};

/// Drives a game of Liar's Dice from setup to a single survivor.
///
/// Holds one decision provider per seat and never distinguishes between
/// kinds of provider. Provider failures (errors, timeouts, panics,
/// unparseable replies) are replaced by the fallback policy; illegal bids
/// are replaced by the smallest legal raise. Only [`Progress::GameOver`]
/// ends a game.
pub struct RoundEngine<O = NullObserver> {
    state: GameState,
    providers: PlayerMap<Arc<dyn DecisionProvider>>,
    fallback: FallbackPolicy,
    /// Kept apart from the dice stream so fallbacks never change rolls.
    fallback_rng: GameRng,
    config: EngineConfig,
    observer: O,
    winner: Option<PlayerId>,
}

impl<O: Observer> RoundEngine<O> {
    /// Seat the players, roll everyone's dice and announce the game.
    ///
    /// Turn order follows `seats`; the first seat moves first.
    pub fn setup(seats: Vec<Seat>, config: EngineConfig, observer: O) -> Result<Self, SetupError> {
        validate(&seats, &config)?;

        let root = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let names: Vec<String> = seats.iter().map(|seat| seat.name.clone()).collect();
        let state = GameState::new(&names, config.dice_per_player, root.for_context("dice"));
        let providers = PlayerMap::from_vec(seats.into_iter().map(|seat| seat.provider).collect());

        info!(
            players = names.len(),
            total_dice = state.total_dice(),
            seed = root.seed(),
            "engine ready"
        );

        let mut engine = Self {
            fallback_rng: root.for_context("fallback"),
            fallback: FallbackPolicy::default(),
            state,
            providers,
            config,
            observer,
            winner: None,
        };
        let total_dice = engine.state.total_dice();
        engine.emit(GameEvent::Setup {
            players: names,
            total_dice,
        });
        Ok(engine)
    }

    /// Replace the policy used when a provider fails.
    #[must_use]
    pub fn with_fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    // === Accessors ===

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::GameOver
        } else {
            Phase::AwaitingTurn
        }
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Dice on the table counting toward `face_value`, wilds included.
    #[must_use]
    pub fn count_matching(&self, face_value: u32) -> u32 {
        self.state.count_matching(face_value)
    }

    /// Would `quantity` × `face_value` be accepted as the next bid?
    #[must_use]
    pub fn is_valid_bid(&self, quantity: u32, face_value: u32) -> bool {
        self.state.is_valid_bid(quantity, face_value)
    }

    /// Fix an active player's dice (tests, replays).
    pub fn set_dice(&mut self, player: PlayerId, dice: &[Die]) {
        self.state.set_dice(player, dice);
    }

    /// What `player` may see: their own dice and public information only.
    #[must_use]
    pub fn view_for(&self, player: PlayerId) -> DecisionView {
        DecisionView {
            player,
            player_name: self.state.name(player).to_string(),
            own_dice: self.state.player(player).dice().to_vec(),
            total_dice: self.state.total_dice(),
            current_bid: self.state.current_bid().copied(),
            history: self.state.recent_history(self.config.history_window),
            round: self.state.round(),
        }
    }

    // === Turns ===

    /// Play one turn for the current player.
    ///
    /// Once the game is over this keeps returning the result without asking
    /// anyone for a move.
    pub fn advance_turn(&mut self) -> Progress {
        if let Some(winner) = self.winner {
            return Progress::GameOver { winner };
        }

        let player = self.state.current_player();
        let snapshot = self.state.snapshot();
        self.emit(GameEvent::TurnStarted { snapshot });

        let view = self.view_for(player);
        match self.consult(player, view) {
            Action::Bid {
                quantity,
                face_value,
            } => {
                if !self.accept_bid(player, quantity, face_value) {
                    return self.challenge(player);
                }
                self.state.pass_turn();
                Progress::Continue
            }
            Action::Challenge => self.challenge(player),
        }
    }

    fn challenge(&mut self, player: PlayerId) -> Progress {
        let Some(bid) = self.state.current_bid().copied() else {
            debug!(player = %self.state.name(player), "challenge with no bid; same player moves again");
            self.emit(GameEvent::ChallengeRejected { player });
            return Progress::Continue;
        };

        self.state.record(HistoryEntry::Challenge {
            challenger: self.state.name(player).to_string(),
            bidder: self.state.name(bid.bidder).to_string(),
        });
        self.emit(GameEvent::ChallengeIssued {
            challenger: player,
            bidder: bid.bidder,
            bid,
        });
        self.state.finish_turn();
        self.resolve_challenge(player)
    }

    /// Judge the current bid on behalf of `challenger`.
    ///
    /// If the dice back the bid up the challenger loses a die, otherwise the
    /// bidder does. A player left with no dice leaves the game. With one
    /// player left the game ends; otherwise everyone rerolls and the
    /// challenge winner opens the next round.
    ///
    /// Does nothing when there is no bid to judge.
    pub fn resolve_challenge(&mut self, challenger: PlayerId) -> Progress {
        if let Some(winner) = self.winner {
            return Progress::GameOver { winner };
        }
        let Some(bid) = self.state.current_bid().copied() else {
            return Progress::Continue;
        };

        let actual = self.state.count_matching(bid.face_value);
        let tally = self.state.tally(bid.face_value);
        let (loser, winner) = if actual >= bid.quantity {
            (challenger, bid.bidder)
        } else {
            (bid.bidder, challenger)
        };

        let loser_dice_left = self.state.remove_die(loser);
        self.state.record(HistoryEntry::ChallengeResult {
            challenger: self.state.name(challenger).to_string(),
            bidder: self.state.name(bid.bidder).to_string(),
            winner: self.state.name(winner).to_string(),
        });
        debug!(
            %bid,
            actual,
            winner = %self.state.name(winner),
            loser = %self.state.name(loser),
            loser_dice_left,
            "challenge resolved"
        );
        self.emit(GameEvent::ChallengeResolved {
            report: ChallengeReport {
                bid,
                challenger,
                actual,
                tally,
                loser,
                winner,
                loser_dice_left,
            },
        });

        if loser_dice_left == 0 {
            self.state.eliminate(loser);
            self.state.record(HistoryEntry::Eliminated {
                player: self.state.name(loser).to_string(),
            });
            debug!(player = %self.state.name(loser), "player eliminated");
            self.emit(GameEvent::PlayerEliminated { player: loser });

            if let Some(survivor) = self.state.sole_survivor() {
                self.state.settle_total();
                self.winner = Some(survivor);
                debug!(winner = %self.state.name(survivor), "game over");
                self.emit(GameEvent::GameOver { winner: survivor });
                return Progress::GameOver { winner: survivor };
            }
        }

        self.state.start_round(winner);
        self.emit(GameEvent::RoundStarted {
            round: self.state.round(),
            starter: winner,
            total_dice: self.state.total_dice(),
        });
        Progress::Continue
    }

    /// Play turns until someone wins or `max_turns` steps have been taken.
    pub fn run(&mut self, max_turns: u32) -> GameOutcome {
        for _ in 0..max_turns {
            if let Progress::GameOver { winner } = self.advance_turn() {
                return GameOutcome::Winner(winner);
            }
        }
        self.winner.map_or(GameOutcome::TurnLimit, GameOutcome::Winner)
    }

    // === Internals ===

    /// Ask a provider for a move, falling back locally on any failure.
    fn consult(&mut self, player: PlayerId, view: DecisionView) -> Action {
        let provider = Arc::clone(&self.providers[player]);
        let result = match self.config.decision_timeout {
            Some(limit) => decide_with_timeout(provider, view.clone(), limit),
            None => decide_guarded(provider.as_ref(), &view),
        };

        match result {
            Ok(action) => action,
            Err(err) => {
                let fallback = self
                    .fallback
                    .decide(view.current_bid.as_ref(), &mut self.fallback_rng);
                warn!(player = %view.player_name, error = %err, %fallback, "decision provider failed");
                self.emit(GameEvent::DecisionFailed {
                    player,
                    error: err.to_string(),
                    fallback,
                });
                fallback
            }
        }
    }

    /// Place a bid, substituting the smallest legal raise for an illegal one.
    ///
    /// Returns `false` without touching the table when the current bid
    /// cannot be raised at all.
    fn accept_bid(&mut self, player: PlayerId, quantity: u32, face_value: u32) -> bool {
        let name = self.state.name(player).to_string();

        if self.state.is_valid_bid(quantity, face_value) {
            let bid = Bid::new(quantity, face_value, player);
            self.state.place_bid(bid);
            self.state.record(HistoryEntry::Bid {
                player: name,
                quantity,
                face_value,
            });
            self.emit(GameEvent::BidPlaced { player, bid });
            return true;
        }

        let Some((raised_quantity, raised_face)) = minimal_raise(self.state.current_bid()) else {
            debug!(player = %name, quantity, face_value, "no legal raise left; treated as a challenge");
            return false;
        };
        let placed = Bid::new(raised_quantity, raised_face, player);
        debug!(
            player = %name,
            quantity,
            face_value,
            %placed,
            "invalid bid auto-corrected"
        );
        self.state.place_bid(placed);
        self.state.record(HistoryEntry::CorrectedBid {
            player: name,
            quantity: raised_quantity,
            face_value: raised_face,
        });
        self.emit(GameEvent::BidCorrected {
            player,
            requested_quantity: quantity,
            requested_face: face_value,
            placed,
        });
        true
    }

    fn emit(&mut self, event: GameEvent) {
        self.observer.on_event(&event);
    }
}

/// Reject games that cannot be played.
fn validate(seats: &[Seat], config: &EngineConfig) -> Result<(), SetupError> {
    if seats.len() < MIN_PLAYERS {
        return Err(SetupError::NotEnoughPlayers(seats.len()));
    }
    if seats.len() > MAX_PLAYERS {
        return Err(SetupError::TooManyPlayers(seats.len()));
    }
    if config.dice_per_player == 0 {
        return Err(SetupError::NoDice);
    }

    let mut seen = FxHashSet::default();
    for seat in seats {
        if seat.name.is_empty() {
            return Err(SetupError::EmptyName);
        }
        if !seen.insert(seat.name.as_str()) {
            return Err(SetupError::DuplicateName(seat.name.clone()));
        }
    }
    Ok(())
}
