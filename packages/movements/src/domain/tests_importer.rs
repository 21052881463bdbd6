use movements_test_support::fixtures::{
    short_howell_8_rounds, two_table_movement, SHORT_HOWELL_8, SHORT_HOWELL_8_SITOUT,
};

use crate::domain::importer::{MAX_BOARDS, MAX_PAIRS, MAX_ROUNDS, MAX_TABLES};
use crate::domain::{
    export_movement, import_str, parse_movement, Catalog, Decoder, GameInfo, MovementHeader,
    NsEw, Seat, TableAssignment,
};
use crate::errors::{ErrorCode, InvalidKind};

fn kind_of(text: &str) -> InvalidKind {
    parse_movement(text)
        .expect_err("movement should be rejected")
        .kind()
        .expect("parse errors carry a kind")
}

#[test]
fn parses_header_rounds_and_name() {
    let parsed = parse_movement(SHORT_HOWELL_8).unwrap();
    assert_eq!(
        parsed.header,
        MovementHeader {
            pairs: 8,
            tables: 4,
            rounds: 5,
            boards: 5,
            schema_type: 0,
        }
    );
    assert_eq!(parsed.name, "Short Howell 8");
    assert_eq!(parsed.rounds.len(), 5);
    for (round, row) in (1u32..).zip(short_howell_8_rounds()) {
        for (table, (ns, ew, board)) in (1u32..).zip(row) {
            assert_eq!(
                parsed.assignment(round, table),
                TableAssignment { ns, ew, board }
            );
        }
    }
}

#[test]
fn record_seats_pairs_by_triplet() {
    let record = parse_movement(SHORT_HOWELL_8).unwrap().into_record();
    assert_eq!(record.name(), "Short Howell 8");
    assert_eq!((record.rounds(), record.tables(), record.pairs()), (5, 4, 8));
    assert_eq!(record.seat(6, 2), Seat::east_west(1));
    assert_eq!(record.seat(5, 2), Seat::north_south(2));
    assert_eq!(record.seat(8, 3), Seat::east_west(4));
}

#[test]
fn accepts_padded_triplets_and_crlf() {
    let text = "4 2 2 2 0\r\n 1- 2 1  3 -4 2\r\n1 - 4 2 3-2 1\r\n#<name>padded</name>\r\n";
    let parsed = parse_movement(text).unwrap();
    assert_eq!(parsed.name, "padded");
    assert_eq!(parsed.assignment(1, 1), TableAssignment { ns: 1, ew: 2, board: 1 });
    assert_eq!(parsed.assignment(1, 2), TableAssignment { ns: 3, ew: 4, board: 2 });
    assert_eq!(parsed.assignment(2, 1), TableAssignment { ns: 1, ew: 4, board: 2 });
}

#[test]
fn rejects_non_pairs_schema_type() {
    let text = SHORT_HOWELL_8.replace("8 4 5 5 0", "8 4 5 5 1");
    let err = parse_movement(&text).unwrap_err();
    assert_eq!(err.kind(), Some(InvalidKind::UnsupportedSchemaType));
    assert_eq!(err.code(), ErrorCode::UnsupportedSchemaType);
    assert!(err.line().starts_with("8 4 5 5 1"));
}

#[test]
fn rejects_header_values_out_of_bounds() {
    let cases = [
        format!("{} 4 5 5 0", MAX_PAIRS + 1),
        format!("8 {} 5 5 0", MAX_TABLES + 1),
        format!("8 4 {} 5 0", MAX_ROUNDS + 1),
        format!("8 4 5 {} 0", MAX_BOARDS + 1),
        "0 4 5 5 0".to_string(),
        "8 4 0 5 0".to_string(),
    ];
    for header in cases {
        let err = parse_movement(&format!("{header}\n")).unwrap_err();
        assert_eq!(err.kind(), Some(InvalidKind::HeaderOutOfRange), "{header}");
        assert_eq!(err.line(), header);
    }
}

#[test]
fn rejects_malformed_header() {
    assert_eq!(kind_of("8 4 5 5\n"), InvalidKind::MalformedHeader);
    assert_eq!(kind_of("eight pairs\n"), InvalidKind::MalformedHeader);
    assert_eq!(kind_of(""), InvalidKind::MalformedHeader);
    assert_eq!(kind_of("; only a comment\n\n"), InvalidKind::MalformedHeader);
}

#[test]
fn rejects_out_of_range_triplets() {
    for bad in ["9-2 1", "1-0 1", "1-2 6", "0-0 1", "0-2 0"] {
        let text = SHORT_HOWELL_8.replace("1-7 5 6-4 4", &format!("{bad} 6-4 4"));
        let err = parse_movement(&text).unwrap_err();
        assert_eq!(err.kind(), Some(InvalidKind::TripletOutOfRange), "{bad}");
        assert!(err.line().starts_with(bad), "{bad}: {}", err.line());
    }
}

#[test]
fn rejects_short_round_line() {
    let text = SHORT_HOWELL_8.replace("1-4 3 3-2 4 7-5 2 6-8 1", "1-4 3 3-2 4 7-5 2");
    let err = parse_movement(&text).unwrap_err();
    assert_eq!(err.kind(), Some(InvalidKind::MalformedRound));
    assert_eq!(err.line(), "1-4 3 3-2 4 7-5 2");
}

#[test]
fn rejects_missing_rounds_and_trailer() {
    let missing_round = "4 2 3 2 0\n1-2 1 3-4 2\n1-4 2 3-2 1\n";
    assert_eq!(kind_of(missing_round), InvalidKind::MissingRound);

    let missing_trailer = "4 2 2 2 0\n1-2 1 3-4 2\n1-4 2 3-2 1\n; no name\n";
    let err = parse_movement(missing_trailer).unwrap_err();
    assert_eq!(err.kind(), Some(InvalidKind::MissingTrailer));
    assert_eq!(err.line(), "");

    // A round line where the name should be.
    let extra_round = "4 2 2 2 0\n1-2 1 3-4 2\n1-4 2 3-2 1\n1-3 1 2-4 2\n";
    assert_eq!(kind_of(extra_round), InvalidKind::MalformedTrailer);
}

#[test]
fn rejects_malformed_trailer() {
    for trailer in ["Short Howell 8", "#<name>Short Howell 8", "<name>x</name>"] {
        let text = SHORT_HOWELL_8.replace("#<name>Short Howell 8</name>", trailer);
        let err = parse_movement(&text).unwrap_err();
        assert_eq!(err.kind(), Some(InvalidKind::MalformedTrailer), "{trailer}");
    }
}

#[test]
fn failed_import_leaves_catalog_untouched() {
    let mut catalog = Catalog::with_builtins();
    let text = SHORT_HOWELL_8.replace("8 4 5 5 0", "8 4 5 5 1");
    assert!(import_str(&mut catalog, &text, false).is_err());
    assert_eq!(catalog.len(), 161);
    assert_eq!(catalog.find_by_name("Short Howell 8"), None);
}

#[test]
fn imported_movement_answers_queries() {
    let mut catalog = Catalog::with_builtins();
    let id = import_str(&mut catalog, SHORT_HOWELL_8, false).unwrap();
    assert_eq!(id, 161);
    assert_eq!(catalog.find_by_name("Short Howell 8"), Some(id));
    assert_eq!(catalog.find_by_shape(5, 8), vec![0, id]);

    let d = Decoder::from_id(&catalog, id);
    assert_eq!(
        d.table_round_info(1, 1),
        Some(GameInfo {
            round: 1,
            board: 1,
            pairs: NsEw { ns: 1, ew: 2 },
        })
    );
    assert_eq!(d.borrowed_from(1, 1), 0);
    assert_eq!(d.opponent_of(6, 2), 1);
    let by_board: Vec<u32> = d.round_info(2, true).iter().map(|g| g.pairs.ns).collect();
    assert_eq!(by_board, vec![5, 1, 7, 8]);
    let by_ns: Vec<u32> = d.round_info(2, false).iter().map(|g| g.pairs.ns).collect();
    assert_eq!(by_ns, vec![1, 5, 7, 8]);
}

#[test]
fn idle_table_is_absent_from_round() {
    let mut catalog = Catalog::empty();
    let id = import_str(&mut catalog, SHORT_HOWELL_8_SITOUT, false).unwrap();
    let d = Decoder::from_id(&catalog, id);

    let tables: Vec<u32> = d.round_info(3, false).iter().map(|g| d.table_of(g.pairs.ns, 3)).collect();
    assert_eq!(tables, vec![1, 4, 3]);
    assert_eq!(d.table_of(3, 3), 0);
    assert_eq!(d.table_of(6, 3), 0);
    assert_eq!(d.opponent_of(3, 3), 0);
    assert_eq!(d.table_round_info(2, 3), None);
    assert_eq!(d.table_of(3, 2), 2);
}

#[test]
fn export_then_parse_reproduces_assignments() {
    let mut catalog = Catalog::empty();
    for text in [SHORT_HOWELL_8, SHORT_HOWELL_8_SITOUT] {
        let original = parse_movement(text).unwrap();
        let id = import_str(&mut catalog, text, false).unwrap();
        let exported = export_movement(&Decoder::from_id(&catalog, id)).unwrap();
        let reparsed = parse_movement(&exported).unwrap();
        assert_eq!(reparsed, original);
    }
}

#[test]
fn export_writes_header_from_shape() {
    let mut catalog = Catalog::empty();
    let id = import_str(&mut catalog, &two_table_movement("tiny"), false).unwrap();
    let exported = export_movement(&Decoder::from_id(&catalog, id)).unwrap();
    assert_eq!(
        exported,
        "4 2 2 2 0\n 1- 2 1  3- 4 2\n 1- 4 2  3- 2 1\n#<name>tiny</name>\n"
    );
    assert_eq!(export_movement(&Decoder::unbound()), None);
}
