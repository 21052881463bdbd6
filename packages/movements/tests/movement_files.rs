//! Loading movement files from disk.

mod common;

use std::fs;

use common::write_movement_file;
use movements::domain::{export_movement, import_dir, import_file, parse_movement, write_movement};
use movements::{Catalog, Decoder, ErrorCode, ImportError, InvalidKind};
use movements_test_support::fixtures::{two_table_movement, SHORT_HOWELL_8, SHORT_HOWELL_8_SITOUT};

#[test]
fn import_file_registers_movement() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_movement_file(dir.path(), "howell8.asc", SHORT_HOWELL_8);

    let mut catalog = Catalog::with_builtins();
    let id = import_file(&mut catalog, &path, false).unwrap();
    assert_eq!(catalog.name_of(id), Some("Short Howell 8"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.asc");

    let mut catalog = Catalog::empty();
    let err = import_file(&mut catalog, &path, false).unwrap_err();
    assert!(matches!(&err, ImportError::Io { path: p, .. } if p == &path));
    assert_eq!(err.code(), ErrorCode::MovementIo);
    assert!(catalog.is_empty());
}

#[test]
fn folder_load_skips_bad_files_and_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    write_movement_file(dir.path(), "a_howell.asc", SHORT_HOWELL_8);
    write_movement_file(dir.path(), "b_sitout.ASC", SHORT_HOWELL_8_SITOUT);
    let broken = write_movement_file(dir.path(), "c_broken.asc", "8 4 5 5 0\n1-2 1\n");
    write_movement_file(dir.path(), "notes.txt", &two_table_movement("ignored"));

    let mut catalog = Catalog::with_builtins();
    let outcome = import_dir(&mut catalog, dir.path()).unwrap();

    let names: Vec<&str> = outcome
        .imported
        .iter()
        .filter_map(|(_, id)| catalog.name_of(*id))
        .collect();
    assert_eq!(names, vec!["Short Howell 8", "Short Howell 8 sit-out"]);
    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].0, broken);
    assert_eq!(outcome.failed[0].1.kind(), Some(InvalidKind::MalformedRound));
    assert_eq!(catalog.find_by_name("ignored"), None);
}

#[test]
fn folder_load_replaces_builtins_with_saved_copies() {
    let dir = tempfile::tempdir().unwrap();
    write_movement_file(dir.path(), "default.asc", &two_table_movement("6multi14"));

    let mut catalog = Catalog::with_builtins();
    let before = catalog.len();
    let outcome = import_dir(&mut catalog, dir.path()).unwrap();

    let (_, id) = outcome.imported[0];
    assert_eq!(catalog.len(), before);
    assert_eq!(catalog.default_id(), Some(id));
    assert_eq!(Decoder::from_id(&catalog, id).pairs(), 4);
}

#[test]
fn missing_folder_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = Catalog::empty();
    let err = import_dir(&mut catalog, dir.path().join("nope")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MovementIo);
}

#[test]
fn saved_builtin_loads_back_unchanged() {
    let catalog = Catalog::with_builtins();
    let dir = tempfile::tempdir().unwrap();

    for name in ["6multi14", "5tin08", "6stayr13"] {
        let original = Decoder::from_name(&catalog, name);
        let path = dir.path().join(format!("{name}.asc"));
        write_movement(&original, fs::File::create(&path).unwrap()).unwrap();

        let mut fresh = Catalog::empty();
        let id = import_file(&mut fresh, &path, false).unwrap();
        let copy = Decoder::from_id(&fresh, id);

        assert_eq!(copy.name(), name);
        assert_eq!(copy.shape(), original.shape());
        for round in 1..=original.rounds() {
            assert_eq!(copy.round_info(round, true), original.round_info(round, true), "{name} round {round}");
        }
    }
}

#[test]
fn exported_text_parses_to_same_games() {
    let catalog = Catalog::with_builtins();
    let d = Decoder::from_name(&catalog, "7multi16");
    let text = export_movement(&d).unwrap();
    let parsed = parse_movement(&text).unwrap();

    assert_eq!(parsed.name, "7multi16");
    assert_eq!(parsed.header.tables, d.tables());
    for round in 1..=d.rounds() {
        for table in 1..=d.tables() {
            let game = d.table_round_info(table, round).unwrap();
            let assignment = parsed.assignment(round, table);
            assert_eq!(
                (assignment.ns, assignment.ew, assignment.board),
                (game.pairs.ns, game.pairs.ew, game.board)
            );
        }
    }
}
