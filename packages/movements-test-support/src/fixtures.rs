//! Canned movement files in the vendor interchange format.

/// Eight pairs, four tables, five rounds, with comments the importer skips.
pub const SHORT_HOWELL_8: &str = "\
; Short Howell for 8 pairs
8 4 5 5 0                     ; pairs tables rounds boards schema-type(0=pairs)
1-2 1 3-4 2 5-6 3 7-8 4       ; round 1: table1 table2 table3 table4
1-6 2 5-3 1 7-2 3 8-4 5       ; round 2

1-5 4 3-6 5 4-7 1 2-8 2
1-4 3 3-2 4 7-5 2 6-8 1
1-7 5 6-4 4 2-5 5 8-3 3
#<name>Short Howell 8</name>  ; movement name
";

/// [`SHORT_HOWELL_8`] with table 2 idle in round 3 (pairs 3 and 6 sit out).
pub const SHORT_HOWELL_8_SITOUT: &str = "\
8 4 5 5 0
1-2 1 3-4 2 5-6 3 7-8 4
1-6 2 5-3 1 7-2 3 8-4 5
1-5 4 0-0 0 4-7 1 2-8 2
1-4 3 3-2 4 7-5 2 6-8 1
1-7 5 6-4 4 2-5 5 8-3 3
#<name>Short Howell 8 sit-out</name>
";

/// A minimal valid movement carrying the given name.
pub fn two_table_movement(name: &str) -> String {
    format!(
        "4 2 2 2 0\n\
         1-2 1 3-4 2\n\
         1-4 2 3-2 1\n\
         #<name>{name}</name>\n"
    )
}

/// Rows of `(ns, ew, board)` per round for [`SHORT_HOWELL_8`].
pub fn short_howell_8_rounds() -> Vec<Vec<(u32, u32, u32)>> {
    vec![
        vec![(1, 2, 1), (3, 4, 2), (5, 6, 3), (7, 8, 4)],
        vec![(1, 6, 2), (5, 3, 1), (7, 2, 3), (8, 4, 5)],
        vec![(1, 5, 4), (3, 6, 5), (4, 7, 1), (2, 8, 2)],
        vec![(1, 4, 3), (3, 2, 4), (7, 5, 2), (6, 8, 1)],
        vec![(1, 7, 5), (6, 4, 4), (2, 5, 5), (8, 3, 3)],
    ]
}
