//! Game state: players, turn order, the current bid and history.
//!
//! ## GameState
//!
//! Everything the rules need, owned in one place:
//! - Player arena (names and hidden dice) addressed by `PlayerId`
//! - Turn order of active players and the cursor into it
//! - Current bid, tracked total dice, round and turn counters
//! - History (persistent `im::Vector`, so snapshots for providers are cheap)
//! - Dice RNG
//!
//! Read access is public. Mutation is crate-private and driven by the round
//! engine, which keeps the invariants:
//! - tracked total equals the sum of active players' dice outside a
//!   challenge resolution
//! - a player is in turn order iff they hold dice
//! - the cursor always indexes a player in turn order
//!
//! ## Snapshot
//!
//! Public view of the table (no dice faces) for observers.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::bid::{is_valid_bid, Bid};
use super::die::{Die, WILD_FACE};
use super::history::HistoryEntry;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;

/// How one player's dice count toward a face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerTally {
    pub player: PlayerId,

    /// Dice showing the face itself.
    pub naturals: u32,

    /// Wild dice counted on top. Zero when the face is the wild face.
    pub wilds: u32,
}

impl PlayerTally {
    /// Dice this player contributes to the count.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.naturals + self.wilds
    }
}

/// Public summary of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSummary {
    pub player: PlayerId,
    pub name: String,
    pub dice_count: u32,
    pub active: bool,
}

/// Public view of the table at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Round number (starts at 1).
    pub round: u32,

    /// Completed turns so far.
    pub turn: u32,

    /// Whose turn it is.
    pub current_player: PlayerId,

    pub current_bid: Option<Bid>,

    pub total_dice: u32,

    /// Every seat, eliminated ones included, in seating order.
    pub seats: Vec<SeatSummary>,
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    players: PlayerMap<Player>,

    /// Name lookup, built once at setup.
    by_name: FxHashMap<String, PlayerId>,

    turn_order: Vec<PlayerId>,
    cursor: usize,

    current_bid: Option<Bid>,
    total_dice: u32,

    round: u32,
    turn: u32,

    history: Vector<HistoryEntry>,

    /// Dice RNG.
    rng: GameRng,
}

impl GameState {
    /// Seat `names` in order and roll `dice_per_player` dice for each.
    ///
    /// Names must be unique and non-empty; the engine checks this before
    /// building state.
    #[must_use]
    pub fn new(names: &[String], dice_per_player: u32, mut rng: GameRng) -> Self {
        let players = PlayerMap::from_vec(
            names
                .iter()
                .map(|name| Player::roll_new(name.clone(), dice_per_player, &mut rng))
                .collect(),
        );
        let by_name = players
            .iter()
            .map(|(id, player)| (player.name().to_string(), id))
            .collect();
        let turn_order: Vec<PlayerId> = players.player_ids().collect();

        Self {
            total_dice: turn_order.len() as u32 * dice_per_player,
            players,
            by_name,
            turn_order,
            cursor: 0,
            current_bid: None,
            round: 1,
            turn: 0,
            history: Vector::new(),
            rng,
        }
    }

    // === Players ===

    /// Number of seats, eliminated players included.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get a player record.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// All player records.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Look a player up by name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.by_name.get(name).copied()
    }

    /// A player's name.
    #[must_use]
    pub fn name(&self, id: PlayerId) -> &str {
        self.players[id].name()
    }

    /// Is the player still in turn order?
    #[must_use]
    pub fn is_active(&self, id: PlayerId) -> bool {
        self.turn_order.contains(&id)
    }

    // === Turn order ===

    /// Active players in turn order.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// Index of the current player in turn order.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turn_order[self.cursor]
    }

    /// The last player standing, once only one remains.
    #[must_use]
    pub fn sole_survivor(&self) -> Option<PlayerId> {
        match self.turn_order.as_slice() {
            [winner] => Some(*winner),
            _ => None,
        }
    }

    // === Bidding ===

    /// The bid on the table, if any.
    #[must_use]
    pub fn current_bid(&self) -> Option<&Bid> {
        self.current_bid.as_ref()
    }

    /// Would `quantity` × `face_value` be a legal next bid?
    #[must_use]
    pub fn is_valid_bid(&self, quantity: u32, face_value: u32) -> bool {
        is_valid_bid(quantity, face_value, self.current_bid.as_ref())
    }

    // === Counting ===

    /// Tracked total of dice in play.
    #[must_use]
    pub fn total_dice(&self) -> u32 {
        self.total_dice
    }

    /// Sum of active players' dice, computed fresh.
    #[must_use]
    pub fn active_dice(&self) -> u32 {
        self.turn_order
            .iter()
            .map(|&id| self.players[id].dice_count())
            .sum()
    }

    /// Dice across all active players counting toward `face_value`.
    ///
    /// Wilds count toward any face, once each.
    #[must_use]
    pub fn count_matching(&self, face_value: u32) -> u32 {
        self.turn_order
            .iter()
            .map(|&id| self.players[id].count_matching(face_value))
            .sum()
    }

    /// Per-player breakdown of [`count_matching`](Self::count_matching).
    #[must_use]
    pub fn tally(&self, face_value: u32) -> Vec<PlayerTally> {
        self.turn_order
            .iter()
            .map(|&id| {
                let dice = self.players[id].dice();
                let naturals = dice.iter().filter(|d| d.face() == face_value).count() as u32;
                let wilds = if face_value == WILD_FACE {
                    0
                } else {
                    dice.iter().filter(|d| d.is_wild()).count() as u32
                };
                PlayerTally {
                    player: id,
                    naturals,
                    wilds,
                }
            })
            .collect()
    }

    // === Progress ===

    /// Round number (starts at 1).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Completed turns so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    // === History ===

    /// Full history.
    #[must_use]
    pub fn history(&self) -> &Vector<HistoryEntry> {
        &self.history
    }

    /// The last `window` history entries, oldest first.
    #[must_use]
    pub fn recent_history(&self, window: usize) -> Vec<HistoryEntry> {
        let skip = self.history.len().saturating_sub(window);
        self.history.iter().skip(skip).cloned().collect()
    }

    /// Public view of the table.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round,
            turn: self.turn,
            current_player: self.current_player(),
            current_bid: self.current_bid,
            total_dice: self.total_dice,
            seats: self
                .players
                .iter()
                .map(|(id, player)| SeatSummary {
                    player: id,
                    name: player.name().to_string(),
                    dice_count: player.dice_count(),
                    active: self.is_active(id),
                })
                .collect(),
        }
    }

    // === Harness hooks ===

    /// Replace an active player's dice, keeping the tracked total in step.
    ///
    /// Lets tests and replays fix the table. The dice count may change but
    /// must stay positive.
    pub fn set_dice(&mut self, id: PlayerId, dice: &[Die]) {
        assert!(!dice.is_empty(), "An active player must hold dice");
        assert!(self.is_active(id), "Cannot deal dice to an eliminated player");

        self.players[id].set_dice(dice);
        self.total_dice = self.active_dice();
    }

    // === Mutation (engine only) ===

    pub(crate) fn place_bid(&mut self, bid: Bid) {
        self.current_bid = Some(bid);
    }

    pub(crate) fn record(&mut self, entry: HistoryEntry) {
        self.history.push_back(entry);
    }

    /// Hand the turn to the next player in order.
    pub(crate) fn pass_turn(&mut self) {
        self.cursor = (self.cursor + 1) % self.turn_order.len();
        self.turn += 1;
    }

    /// Count a turn that ended in a challenge.
    pub(crate) fn finish_turn(&mut self) {
        self.turn += 1;
    }

    /// Take one die from a player. Returns how many they hold now.
    pub(crate) fn remove_die(&mut self, id: PlayerId) -> u32 {
        self.players[id].lose_die()
    }

    /// Drop a player from turn order for good.
    ///
    /// The cursor keeps pointing at the same player when it can, and at a
    /// valid index otherwise.
    pub(crate) fn eliminate(&mut self, id: PlayerId) {
        if let Some(index) = self.turn_order.iter().position(|&p| p == id) {
            self.turn_order.remove(index);
            if self.cursor > index {
                self.cursor -= 1;
            }
            if self.cursor >= self.turn_order.len() {
                self.cursor = 0;
            }
        }
    }

    /// Bring the tracked total back in line after a challenge that ended
    /// the game. Dice are not rerolled and the last bid stays on the table.
    pub(crate) fn settle_total(&mut self) {
        self.total_dice = self.active_dice();
    }

    /// Start a new round led by `starter`.
    ///
    /// Rerolls every active player at their current count, clears the bid and
    /// recomputes the tracked total.
    pub(crate) fn start_round(&mut self, starter: PlayerId) {
        for &id in &self.turn_order {
            self.players[id].reroll(&mut self.rng);
        }
        self.current_bid = None;
        self.cursor = self
            .turn_order
            .iter()
            .position(|&p| p == starter)
            .unwrap_or(0);
        self.total_dice = self.active_dice();
        self.round += 1;
    }
}
