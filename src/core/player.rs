//! Player identification, per-player storage and player records.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 1-255 players. Ids are stable for
//! the whole game: eliminating a player never renumbers the others.
//!
//! ## PlayerMap
//!
//! Arena of per-player data backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! A seat's name and its hidden dice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::die::Die;
use super::rng::GameRng;

/// Most players a single game supports.
pub const MAX_PLAYERS: usize = 255;

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based and follow the seating order given at setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use liars_dice::core::{PlayerId, PlayerMap};
///
/// let mut dice: PlayerMap<u32> = PlayerMap::from_vec(vec![5, 5, 5]);
/// dice[PlayerId::new(1)] -= 1;
/// assert_eq!(dice[PlayerId::new(1)], 4);
/// assert_eq!(dice.player_ids().collect::<Vec<_>>().len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a PlayerMap from values in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= MAX_PLAYERS, "At most 255 players supported");

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seated player and their hidden dice.
///
/// The dice count is the length of the dice sequence, so the two can never
/// disagree. A player with no dice is out of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    dice: SmallVec<[Die; 6]>,
}

impl Player {
    /// Seat a player and roll `dice_count` fresh dice.
    pub fn roll_new(name: impl Into<String>, dice_count: u32, rng: &mut GameRng) -> Self {
        let dice = (0..dice_count).map(|_| rng.roll_die()).collect();
        Self {
            name: name.into(),
            dice,
        }
    }

    /// The player's unique name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's dice, in roll order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Number of dice the player still holds.
    #[must_use]
    pub fn dice_count(&self) -> u32 {
        self.dice.len() as u32
    }

    /// Does the player still hold dice?
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.dice.is_empty()
    }

    /// Dice counting toward a bid on `face` (naturals plus wilds).
    #[must_use]
    pub fn count_matching(&self, face: u32) -> u32 {
        self.dice.iter().filter(|die| die.counts_for(face)).count() as u32
    }

    /// Drop one die. Returns the number left.
    ///
    /// Which die goes is immaterial: every survivor rerolls afterwards.
    pub fn lose_die(&mut self) -> u32 {
        self.dice.pop();
        self.dice_count()
    }

    /// Reroll every die the player holds, keeping the count.
    pub fn reroll(&mut self, rng: &mut GameRng) {
        for die in &mut self.dice {
            *die = rng.roll_die();
        }
    }

    /// Replace the player's dice outright.
    pub fn set_dice(&mut self, dice: &[Die]) {
        self.dice = SmallVec::from_slice(dice);
    }
}
