use crate::domain::{Catalog, Decoder, DEFAULT_MOVEMENT};

#[test]
fn builtin_order_and_lookup() {
    let catalog = Catalog::with_builtins();
    assert_eq!(catalog.len(), 161);
    assert_eq!(catalog.name_of(0), Some("5tin08"));
    assert_eq!(catalog.find_by_name("6multi14"), Some(4));
    assert_eq!(catalog.find_by_name("6MULTI14"), None);
    assert_eq!(catalog.find_by_name(""), None);
    assert_eq!(catalog.name_of(161), None);
    assert_eq!(catalog.name_of(usize::MAX), None);
}

#[test]
fn default_movement_is_registered() {
    let catalog = Catalog::with_builtins();
    assert_eq!(catalog.default_id(), Some(4));
    assert_eq!(catalog.name_of(4), Some(DEFAULT_MOVEMENT));
    assert_eq!(Catalog::empty().default_id(), None);
}

#[test]
fn find_by_shape_matches_rounds_and_pairs_only() {
    let catalog = Catalog::with_builtins();
    assert_eq!(catalog.find_by_shape(6, 14), vec![4, 24, 69, 96, 97, 146]);

    let named = catalog.find_by_shape_named(7, 16);
    let names: Vec<&str> = named.iter().map(|(_, name)| *name).collect();
    assert_eq!(
        names,
        vec![
            "7multi16",
            "7multi16_nieuw",
            "7howel16",
            "7stayr16",
            "7stayr16.1-x",
            "7txx16",
            "7t16"
        ]
    );

    assert!(catalog.find_by_shape(6, 15).is_empty());
    assert!(catalog.find_by_shape(0, 0).is_empty());
}

#[test]
fn find_by_shape_agrees_with_a_full_scan() {
    let catalog = Catalog::with_builtins();
    for rounds in 0..=12 {
        for pairs in 0..=30 {
            let expected: Vec<usize> = catalog
                .iter()
                .filter(|(_, rec)| rec.rounds() == rounds && rec.pairs() == pairs)
                .map(|(id, _)| id)
                .collect();
            assert_eq!(catalog.find_by_shape(rounds, pairs), expected);
        }
    }
}

#[test]
fn max_rounds_covers_every_movement() {
    let catalog = Catalog::with_builtins();
    assert_eq!(catalog.max_rounds(), 11);
    assert_eq!(Catalog::empty().max_rounds(), 0);
}

#[test]
fn register_appends_without_replacing() {
    let mut catalog = Catalog::with_builtins();
    let copy = catalog.get(4).unwrap().renamed("my multi");
    let id = catalog.register(copy, false);
    assert_eq!(id, 161);
    assert_eq!(catalog.len(), 162);
    assert_eq!(catalog.find_by_name("my multi"), Some(161));
}

#[test]
fn duplicate_without_replace_keeps_first_match() {
    let mut catalog = Catalog::with_builtins();
    let copy = catalog.get(4).unwrap().as_ref().clone();
    let id = catalog.register(copy, false);
    assert_eq!(id, 161);
    assert_eq!(catalog.len(), 162);
    assert_eq!(catalog.find_by_name("6multi14"), Some(4));
    assert_eq!(catalog.name_of(161), Some("6multi14"));
}

#[test]
fn replace_retires_old_id_and_appends() {
    let mut catalog = Catalog::with_builtins();
    let before = catalog.len();
    let copy = catalog.get(4).unwrap().as_ref().clone();

    let id = catalog.register(copy, true);
    assert_eq!(id, 161);
    assert_eq!(catalog.len(), before);
    assert_eq!(catalog.name_of(4), None);
    assert!(catalog.get(4).is_none());
    assert_eq!(catalog.find_by_name("6multi14"), Some(161));
    assert_eq!(catalog.default_id(), Some(161));
    assert!(!catalog.find_by_shape(6, 14).contains(&4));
    assert!(catalog.find_by_shape(6, 14).contains(&161));

    // Ids of other entries do not move.
    assert_eq!(catalog.name_of(5), Some("6multi16"));
    assert!(!Decoder::from_id(&catalog, 4).is_ok());
}

#[test]
fn decoder_survives_replacement_of_its_entry() {
    let mut catalog = Catalog::with_builtins();
    let decoder = Decoder::from_name(&catalog, "6multi14");
    let copy = catalog.get(4).unwrap().as_ref().clone();
    catalog.register(copy, true);

    assert!(decoder.is_ok());
    assert_eq!(decoder.id(), Some(4));
    assert_eq!(decoder.board_at(7, 1), 1);
}

#[test]
fn catalogs_share_decoded_builtins() {
    let a = Catalog::with_builtins();
    let b = Catalog::with_builtins();
    assert!(std::sync::Arc::ptr_eq(a.get(10).unwrap(), b.get(10).unwrap()));
}
