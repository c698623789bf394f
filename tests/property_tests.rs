//! Property tests for bidding, counting and challenge accounting.

use proptest::prelude::*;

use liars_dice::core::{
    dice_from_faces, is_valid_bid, minimal_raise, Action, Bid, EngineConfig, PlayerId,
};
use liars_dice::decision::ScriptedProvider;
use liars_dice::engine::{Progress, RoundEngine, Seat};
use liars_dice::observer::{GameEvent, NullObserver, RecordingObserver};

fn faces() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..=6, 1..=8)
}

fn config(dice_per_player: u32, seed: u64) -> EngineConfig {
    EngineConfig::new()
        .with_dice_per_player(dice_per_player)
        .with_decision_timeout(None)
        .with_seed(seed)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Accepted bids strictly increase, whatever the providers ask for.
    #[test]
    fn prop_accepted_bids_increase(
        requests in prop::collection::vec((0u32..12, 0u32..9), 1..30),
        seed in any::<u64>(),
    ) {
        let actions: Vec<Action> = requests
            .iter()
            .map(|&(quantity, face)| Action::bid(quantity, face))
            .collect();
        let seats = vec![
            Seat::new("Ann", ScriptedProvider::new(actions.clone())),
            Seat::new("Bo", ScriptedProvider::new(actions)),
        ];
        let mut engine = RoundEngine::setup(seats, config(5, seed), RecordingObserver::new()).unwrap();

        for _ in 0..requests.len() {
            engine.advance_turn();
        }

        let mut previous: Option<Bid> = None;
        for event in engine.observer().events() {
            let placed = match event {
                GameEvent::BidPlaced { bid, .. } => *bid,
                GameEvent::BidCorrected { placed, .. } => *placed,
                GameEvent::RoundStarted { .. } => {
                    previous = None;
                    continue;
                }
                _ => continue,
            };
            prop_assert!((1..=6).contains(&placed.face_value));
            prop_assert!(placed.quantity >= 1);
            if let Some(prev) = previous {
                prop_assert!(placed.rank_cmp(&prev).is_gt(), "{placed} after {prev}");
            }
            previous = Some(placed);
        }
    }

    /// A corrected bid is always legal against the bid it follows.
    #[test]
    fn prop_minimal_raise_is_valid(quantity in 1u32.., face in 1u32..=6) {
        let current = Bid::new(quantity, face, PlayerId::new(0));
        match minimal_raise(Some(&current)) {
            Some((q, f)) => prop_assert!(is_valid_bid(q, f, Some(&current))),
            None => prop_assert_eq!((quantity, face), (u32::MAX, 6)),
        }
    }

    /// Naturals plus wilds, with ones never double-counted.
    #[test]
    fn prop_count_matching(ann in faces(), bo in faces(), face in 1u32..=6) {
        let seats = vec![
            Seat::new("Ann", ScriptedProvider::new([])),
            Seat::new("Bo", ScriptedProvider::new([])),
        ];
        let mut engine = RoundEngine::setup(seats, config(1, 0), NullObserver).unwrap();
        engine.set_dice(PlayerId::new(0), &dice_from_faces(&ann).unwrap());
        engine.set_dice(PlayerId::new(1), &dice_from_faces(&bo).unwrap());

        let all: Vec<u32> = ann.iter().chain(&bo).copied().collect();
        let naturals = all.iter().filter(|&&f| f == face).count() as u32;
        let wilds = all.iter().filter(|&&f| f == 1 && face != 1).count() as u32;

        prop_assert_eq!(engine.count_matching(face), naturals + wilds);
        prop_assert_eq!(engine.state().total_dice(), all.len() as u32);
    }

    /// A challenge costs exactly one die, from the right player.
    #[test]
    fn prop_challenge_costs_one_die(
        ann in faces(),
        bo in faces(),
        quantity in 1u32..10,
        face in 1u32..=6,
    ) {
        let seats = vec![
            Seat::new("Ann", ScriptedProvider::new([Action::bid(quantity, face)])),
            Seat::new("Bo", ScriptedProvider::new([Action::Challenge])),
        ];
        let mut engine = RoundEngine::setup(seats, config(1, 5), NullObserver).unwrap();
        engine.set_dice(PlayerId::new(0), &dice_from_faces(&ann).unwrap());
        engine.set_dice(PlayerId::new(1), &dice_from_faces(&bo).unwrap());
        let actual = engine.count_matching(face);
        let before = engine.state().total_dice();

        engine.advance_turn();
        let progress = engine.advance_turn();

        let (loser, winner) = if actual >= quantity {
            (PlayerId::new(1), PlayerId::new(0))
        } else {
            (PlayerId::new(0), PlayerId::new(1))
        };
        let loser_before = (if loser.index() == 0 { ann.len() } else { bo.len() }) as u32;
        let winner_before = (if winner.index() == 0 { ann.len() } else { bo.len() }) as u32;

        prop_assert_eq!(engine.state().player(loser).dice_count(), loser_before - 1);
        prop_assert_eq!(engine.state().player(winner).dice_count(), winner_before);
        prop_assert_eq!(engine.state().total_dice(), before - 1);
        prop_assert_eq!(engine.state().total_dice(), engine.state().active_dice());

        if loser_before == 1 {
            prop_assert_eq!(progress, Progress::GameOver { winner });
        } else {
            prop_assert_eq!(progress, Progress::Continue);
            prop_assert_eq!(engine.state().current_player(), winner);
            prop_assert!(engine.state().current_bid().is_none());
        }
    }
}
