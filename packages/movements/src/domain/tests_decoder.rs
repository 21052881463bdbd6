use crate::domain::{Catalog, Decoder, GameInfo, MovementShape, NsEw, Seat};

fn game(round: u32, board: u32, ns: u32, ew: u32) -> GameInfo {
    GameInfo {
        round,
        board,
        pairs: NsEw { ns, ew },
    }
}

fn decoder(name: &str) -> Decoder {
    let decoder = Decoder::from_name(&Catalog::with_builtins(), name);
    assert!(decoder.is_ok(), "{name} should be built in");
    decoder
}

#[test]
fn unbound_decoder_answers_empty() {
    let catalog = Catalog::with_builtins();
    for d in [
        Decoder::unbound(),
        Decoder::from_id(&catalog, 10_000),
        Decoder::from_name(&catalog, "no such movement"),
    ] {
        assert!(!d.is_ok());
        assert_eq!(d.id(), None);
        assert_eq!(d.name(), "???");
        assert_eq!(d.shape(), MovementShape::new(0, 0, 0));
        assert_eq!(d.board_at(1, 1), 0);
        assert_eq!(d.borrowed_from(1, 1), 0);
        assert_eq!(d.table_of(1, 1), 0);
        assert!(!d.is_north_south(1, 1));
        assert_eq!(d.seat_of(1, 1), Seat::NotScheduled);
        assert_eq!(d.pairs_at(1, 1), NsEw::default());
        assert_eq!(d.opponent_of(1, 1), 0);
        assert_eq!(d.table_round_info(1, 1), None);
        assert!(d.round_info(1, true).is_empty());
        assert!(d.board_info(1).is_empty());
    }
}

#[test]
fn binding_by_id_and_name_agree() {
    let catalog = Catalog::with_builtins();
    let by_id = Decoder::from_id(&catalog, 4);
    let by_name = Decoder::from_name(&catalog, "6multi14");
    assert_eq!(by_id.id(), Some(4));
    assert_eq!(by_name.id(), Some(4));
    assert_eq!(by_name.name(), "6multi14");
    assert_eq!(by_name.shape(), MovementShape::new(6, 7, 14));
    assert_eq!((by_id.rounds(), by_id.tables(), by_id.pairs()), (6, 7, 14));
}

#[test]
fn table_zero_has_no_board() {
    let d = decoder("6multi14");
    assert_eq!(d.board_at(0, 1), 0);
    assert_eq!(d.borrowed_from(0, 1), 0);
}

#[test]
fn borrowed_boards_resolve_to_the_lender() {
    let d = decoder("6multi14");
    // Round 1: table 7 shares table 1's boards.
    assert_eq!(d.borrowed_from(7, 1), 1);
    assert_eq!(d.board_at(7, 1), 1);
    assert_eq!(d.borrowed_from(1, 1), 0);

    // Round 5: table 1 borrows from table 4, table 7 from table 6.
    assert_eq!(d.borrowed_from(1, 5), 4);
    assert_eq!(d.board_at(1, 5), 4);
    assert_eq!(d.borrowed_from(4, 5), 0);
    assert_eq!(d.borrowed_from(7, 5), 6);
    assert_eq!(d.board_at(7, 5), 6);
}

#[test]
fn seats_and_opponents() {
    let d = decoder("6multi14");
    assert_eq!(d.seat_of(1, 1), Seat::north_south(1));
    assert_eq!(d.seat_of(2, 1), Seat::east_west(1));
    assert_eq!(d.table_of(13, 1), 7);
    assert!(d.is_north_south(13, 1));
    assert_eq!(d.pairs_at(1, 7), NsEw { ns: 13, ew: 14 });
    assert_eq!(d.opponent_of(13, 1), 14);
    assert_eq!(d.opponent_of(14, 1), 13);
}

#[test]
fn round_info_orders_by_board_or_ns() {
    let d = decoder("6multi14");
    assert_eq!(
        d.round_info(1, true),
        vec![
            game(1, 1, 1, 2),
            game(1, 1, 13, 14),
            game(1, 2, 3, 4),
            game(1, 3, 5, 6),
            game(1, 4, 7, 8),
            game(1, 5, 9, 10),
            game(1, 6, 11, 12),
        ]
    );
    let by_ns: Vec<u32> = d.round_info(1, false).iter().map(|g| g.pairs.ns).collect();
    assert_eq!(by_ns, vec![1, 3, 5, 7, 9, 11, 13]);
}

#[test]
fn board_info_collects_every_game_with_the_board() {
    let d = decoder("6multi14");
    assert_eq!(
        d.board_info(4),
        vec![
            game(4, 4, 1, 6),
            game(3, 4, 2, 11),
            game(5, 4, 3, 10),
            game(2, 4, 4, 13),
            game(5, 4, 5, 12),
            game(1, 4, 7, 8),
            game(2, 4, 14, 9),
        ]
    );
    assert!(d.board_info(99).is_empty());
}

#[test]
fn idle_lender_table_is_left_out() {
    // 5tin08: table 5 never seats anyone but lends its boards.
    let d = decoder("5tin08");
    for round in 1..=5 {
        assert_eq!(d.pairs_at(round, 5), NsEw::default());
        assert_eq!(d.table_round_info(5, round), None);
        assert_eq!(d.round_info(round, true).len(), 4);
    }
    assert_eq!(d.board_at(4, 2), 5);
    assert_eq!(
        d.board_info(5),
        vec![
            game(5, 5, 1, 7),
            game(5, 5, 2, 5),
            game(3, 5, 3, 6),
            game(2, 5, 8, 4),
        ]
    );
}

#[test]
fn sit_out_pairs_have_no_table_or_opponent() {
    let d = decoder("6stayr13");
    assert_eq!(d.seat_of(9, 1), Seat::NotScheduled);
    assert_eq!(d.table_of(9, 1), 0);
    assert_eq!(d.opponent_of(9, 1), 0);
    assert!(!d.is_north_south(9, 1));
    assert_eq!(d.board_at(d.table_of(9, 1), 1), 0);

    let round_one = d.round_info(1, false);
    assert_eq!(round_one.len(), 6);
    assert!(round_one.iter().all(|g| g.pairs.ns != 9 && g.pairs.ew != 9));
    assert_eq!(d.table_round_info(5, 1), Some(game(1, 5, 13, 10)));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of range")]
fn out_of_range_round_is_a_caller_bug() {
    let d = decoder("6multi14");
    d.table_of(1, 7);
}
