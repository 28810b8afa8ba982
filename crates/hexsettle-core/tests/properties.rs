//! Property tests for hex adjacency and resource conservation.

use hexsettle_core::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn coord() -> impl Strategy<Value = HexCoord> {
    (-20i32..20, -20i32..20).prop_map(|(q, r)| HexCoord::new(q, r))
}

fn hand() -> impl Strategy<Value = ResourceHand> {
    (0u32..6, 0u32..6, 0u32..6, 0u32..6, 0u32..6)
        .prop_map(|(b, g, l, o, w)| ResourceHand::with_amounts(b, g, l, o, w))
}

fn total_resources(board: &Board) -> u64 {
    board.players().iter().map(|p| p.resources.total()).sum()
}

fn two_players(first: ResourceHand, second: ResourceHand) -> Board {
    let mut board = Board::new(HexCoord::default());
    board.add_player(Player::with_resources(1, first));
    board.add_player(Player::with_resources(2, second));
    board
}

proptest! {
    #[test]
    fn neighbor_relation_is_symmetric(a in coord(), b in coord()) {
        prop_assert_eq!(a.is_neighbor(&b), b.is_neighbor(&a));
        prop_assert_eq!(a.is_neighbor(&b), a.distance_to(&b) == 1);
    }

    #[test]
    fn hex_is_not_its_own_neighbor(a in coord()) {
        prop_assert!(!a.is_neighbor(&a));
        prop_assert!(!contains_neighbor(a, &[a]));
        prop_assert!(contains_neighbor(a, &a.neighbors()));
    }

    #[test]
    fn shared_neighbor_touches_both(
        a in coord(),
        b in coord(),
        candidates in prop::collection::vec(coord(), 0..12),
    ) {
        match find_shared_neighbor(a, b, &candidates) {
            Some(found) => {
                prop_assert!(a.is_neighbor(&found) && b.is_neighbor(&found));
                let first = candidates
                    .iter()
                    .find(|c| a.is_neighbor(c) && b.is_neighbor(c));
                prop_assert_eq!(first, Some(&found));
            }
            None => prop_assert!(candidates
                .iter()
                .all(|c| !(a.is_neighbor(c) && b.is_neighbor(c)))),
        }
    }

    #[test]
    fn vertices_are_valid_and_touch_their_hex(a in coord()) {
        for vertex in a.vertices() {
            prop_assert!(vertex.is_valid());
            prop_assert!(vertex.touches(&a));
        }
    }

    #[test]
    fn robbery_conserves_cards(victim in hand(), seed in any::<u64>()) {
        let board = two_players(ResourceHand::new(), victim);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let effects = Resolver::default()
            .rob(&board, &Rob { robber: 1, victim: 2 }, &mut rng)
            .expect("both players exist");

        if victim.is_empty() {
            prop_assert!(effects.is_empty());
        } else {
            let (taken, given) = match effects.as_slice() {
                [
                    Effect::RemoveResources { player: 2, resources: taken },
                    Effect::AddResources { player: 1, resources: given },
                ] => (*taken, *given),
                other => {
                    return Err(TestCaseError::fail(format!("unexpected effects {other:?}")));
                }
            };
            prop_assert_eq!(taken, given);
            prop_assert_eq!(taken.total(), 1);
            let kind = Resource::ALL
                .into_iter()
                .find(|&r| taken.get(r) == 1)
                .expect("one card was taken");
            prop_assert!(victim.get(kind) >= 1);
        }

        let mut after = board.clone();
        after.apply(&effects).expect("victim holds the stolen card");

        prop_assert_eq!(total_resources(&after), total_resources(&board));
        let robber_gain = after.player(1).map(|p| p.resources.total());
        prop_assert_eq!(robber_gain, Ok(u64::from(!victim.is_empty())));
    }

    #[test]
    fn applied_trade_conserves_cards(
        first in hand(),
        second in hand(),
        give in hand(),
        take in hand(),
    ) {
        let board = two_players(first, second);
        let trade = Trade {
            party: Offer { player: 1, resources: give },
            counterparty: Offer { player: 2, resources: take },
        };
        let effects = Resolver::default()
            .trade(&board, &trade)
            .expect("permissive trades always resolve");

        // Each side receives before it pays
        let mut party_pool = first;
        prop_assert!(party_pool.try_add_hand(&take));
        let mut counterparty_pool = second;
        prop_assert!(counterparty_pool.try_add_hand(&give));
        let payable = party_pool.can_afford(&give) && counterparty_pool.can_afford(&take);

        let mut after = board.clone();
        let result = after.apply(&effects);
        prop_assert_eq!(result.is_ok(), payable);
        if payable {
            prop_assert_eq!(total_resources(&after), total_resources(&board));
        } else {
            prop_assert_eq!(&after, &board);
        }
    }

    #[test]
    fn purchases_are_all_or_nothing(held in hand(), seed in any::<u64>()) {
        let board = two_players(held, ResourceHand::new());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let vertex = HexCoord::default().vertices()[0];
        let action: Action = BuildSettlement { player: 1, settlement: vertex }.into();

        match Resolver::default().resolve(&board, &action, &mut rng) {
            Ok(effects) => {
                prop_assert!(held.can_afford(&costs::settlement()));
                let mut after = board.clone();
                after.apply(&effects).expect("resolved effects apply");
                prop_assert_eq!(
                    total_resources(&after) + costs::settlement().total(),
                    total_resources(&board)
                );
            }
            Err(err) => {
                prop_assert!(!held.can_afford(&costs::settlement()));
                prop_assert_eq!(err, GameError::InsufficientResources { player: 1 });
            }
        }
    }
}
