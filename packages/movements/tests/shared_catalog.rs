//! Concurrent readers and a writer on one catalog.

mod common;

use std::thread;

use movements::{Catalog, SharedCatalog, DEFAULT_MOVEMENT};
use movements_test_support::fixtures::two_table_movement;

#[test]
fn readers_keep_working_while_movements_are_imported() {
    let shared = SharedCatalog::new(Catalog::with_builtins());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    let d = shared.decoder_by_name("7multi16");
                    assert!(d.is_ok());
                    assert_eq!(d.round_info(1, false).len(), 8);
                }
            })
        })
        .collect();

    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for i in 0..20 {
                shared
                    .import_str(&two_table_movement(&format!("tiny {i}")), false)
                    .unwrap();
            }
        })
    };

    for handle in readers {
        handle.join().unwrap();
    }
    writer.join().unwrap();

    let catalog = shared.read();
    assert_eq!(catalog.len(), 161 + 20);
    assert_eq!(catalog.find_by_shape(2, 4).len(), 20);
}

#[test]
fn decoder_outlives_replacement_through_handle() {
    let shared = SharedCatalog::new(Catalog::with_builtins());
    let before = shared.decoder_by_id(4);

    let id = shared
        .import_str(&two_table_movement(DEFAULT_MOVEMENT), true)
        .unwrap();

    assert!(!shared.decoder_by_id(4).is_ok());
    assert_eq!(shared.decoder_by_name(DEFAULT_MOVEMENT).id(), Some(id));
    assert_eq!(before.pairs(), 14);
    assert_eq!(before.round_info(1, false).len(), 7);
}
