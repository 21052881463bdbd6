//! End-to-end catalog scenarios: startup, lookup, import and replacement.

mod common;

use movements::domain::import_str;
use movements::{Catalog, Decoder, GameInfo, InvalidKind, NsEw, DEFAULT_MOVEMENT};
use movements_test_support::fixtures::{two_table_movement, SHORT_HOWELL_8};

#[test]
fn new_session_starts_on_default_movement() {
    let catalog = Catalog::with_builtins();
    let id = catalog.default_id().expect("default movement is built in");
    assert_eq!(id, 4);

    let d = Decoder::from_id(&catalog, id);
    assert!(d.is_ok());
    assert_eq!(d.name(), DEFAULT_MOVEMENT);
    assert_eq!((d.rounds(), d.tables(), d.pairs()), (6, 7, 14));
}

#[test]
fn organiser_picks_a_movement_for_the_field() {
    let catalog = Catalog::with_builtins();
    let names: Vec<&str> = catalog
        .find_by_shape_named(7, 16)
        .into_iter()
        .map(|(_, name)| name)
        .collect();
    assert_eq!(
        names,
        vec![
            "7multi16",
            "7multi16_nieuw",
            "7howel16",
            "7stayr16",
            "7stayr16.1-x",
            "7txx16",
            "7t16",
        ]
    );
    assert!(catalog.find_by_shape(4, 3).is_empty());
}

#[test]
fn imported_movement_is_queryable_by_name() {
    let mut catalog = Catalog::with_builtins();
    let id = import_str(&mut catalog, SHORT_HOWELL_8, false).unwrap();

    let d = Decoder::from_name(&catalog, "Short Howell 8");
    assert_eq!(d.id(), Some(id));
    assert_eq!(
        d.table_round_info(1, 1),
        Some(GameInfo {
            round: 1,
            board: 1,
            pairs: NsEw { ns: 1, ew: 2 },
        })
    );
    let board_one: Vec<(u32, u32)> = d
        .board_info(1)
        .iter()
        .map(|g| (g.round, g.pairs.ns))
        .collect();
    assert_eq!(board_one, vec![(1, 1), (3, 4), (2, 5), (4, 6)]);
}

#[test]
fn rejected_import_reports_line_and_keeps_catalog() {
    let mut catalog = Catalog::with_builtins();
    let before = catalog.len();
    let text = SHORT_HOWELL_8.replace("8 4 5 5 0", "8 4 5 5 2");

    let err = import_str(&mut catalog, &text, false).unwrap_err();
    assert_eq!(err.kind(), Some(InvalidKind::UnsupportedSchemaType));
    assert!(err.to_string().contains("8 4 5 5 2"));
    assert_eq!(catalog.len(), before);
}

#[test]
fn replacing_a_builtin_retires_its_id() {
    let mut catalog = Catalog::with_builtins();
    let before = catalog.len();
    let old = Decoder::from_name(&catalog, DEFAULT_MOVEMENT);

    let id = import_str(&mut catalog, &two_table_movement(DEFAULT_MOVEMENT), true).unwrap();

    assert_ne!(id, 4);
    assert_eq!(catalog.len(), before);
    assert_eq!(catalog.find_by_name(DEFAULT_MOVEMENT), Some(id));
    assert_eq!(catalog.default_id(), Some(id));
    assert!(!Decoder::from_id(&catalog, 4).is_ok());
    assert!(!catalog.find_by_shape(6, 14).contains(&4));

    // A decoder taken before the import still answers from the old data.
    assert_eq!(old.tables(), 7);
    assert_eq!(Decoder::from_id(&catalog, id).tables(), 2);
}

#[test]
fn duplicate_without_replace_keeps_first_for_name_lookup() {
    let mut catalog = Catalog::empty();
    let first = import_str(&mut catalog, &two_table_movement("dup"), false).unwrap();
    let second = import_str(&mut catalog, &two_table_movement("dup"), false).unwrap();

    assert_eq!((first, second), (0, 1));
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.find_by_name("dup"), Some(first));
    assert_eq!(catalog.find_by_shape(2, 4), vec![first, second]);
}
