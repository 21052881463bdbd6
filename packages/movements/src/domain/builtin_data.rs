//! Built-in movement tables.
//!
//! Each entry stores the compact signed encoding: `boards` holds one row per
//! table (a negative value borrows the boards of that table), `seats` holds one
//! row per pair (a negative table number seats the pair East-West, `0` means the
//! pair sits out). Rows run over rounds `1..=rounds`.

use super::encoding::EncodedMovement;

#[rustfmt::skip]
pub(crate) static BUILTIN_MOVEMENTS: &[EncodedMovement] = &[
    EncodedMovement {
        name: "5tin08",
        rounds: 5,
        pairs: 8,
        tables: 5,
        boards: &[
              1,   1,   1,   1,  -5, // table 1
              2,   2,   2,   2,  -5, // table 2
              3,   3,  -5,   3,   3, // table 3
              4,  -5,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
        ],
        seats: &[
              1,   2,   4,   3,   1, // pair 1
             -1,  -3,   2,  -4,   2, // pair 2
              2,  -1,   3,   4,  -3, // pair 3
             -2,  -4,   1,  -3,  -4, // pair 4
              3,   1,  -4,  -2,  -2, // pair 5
             -3,  -2,  -3,   1,   4, // pair 6
              4,   3,  -1,   2,  -1, // pair 7
             -4,   4,  -2,  -1,   3, // pair 8
        ],
    },
    EncodedMovement {
        name: "6multi08",
        rounds: 6,
        pairs: 8,
        tables: 4,
        boards: &[
              1,   1,   5,   5,   5,   5, // table 1
              2,   2,   6,   6,   6,   6, // table 2
              3,   3,   3,   3,   1,   1, // table 3
              4,   4,   4,   4,   2,   2, // table 4
        ],
        seats: &[
              1,   4,  -1,  -3,   4,  -2, // pair 1
             -1,  -3,   4,  -2,   1,  -4, // pair 2
              2,   3,  -2,   4,  -3,   1, // pair 3
             -2,  -4,   3,  -1,  -2,   3, // pair 4
              3,  -2,  -4,   1,   3,   2, // pair 5
             -3,   1,   1,  -4,   2,   4, // pair 6
              4,  -1,  -3,   2,  -4,  -1, // pair 7
             -4,   2,   2,   3,  -1,  -3, // pair 8
        ],
    },
    EncodedMovement {
        name: "6multi10",
        rounds: 6,
        pairs: 10,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6, // pair 1
             -1,   3,   5,   6,  -2,  -4, // pair 2
              2,  -3,  -4,   5,   6,   1, // pair 3
             -2,   4,  -5,  -1,  -3,  -6, // pair 4
              3,   5,   1,  -4,  -6,  -2, // pair 5
             -3,  -4,   6,  -2,  -5,  -1, // pair 6
              4,  -5,  -6,   1,   2,   3, // pair 7
             -4,   6,   3,  -5,  -1,   2, // pair 8
              5,  -6,  -1,   2,   3,   4, // pair 9
             -5,   2,   4,  -6,   1,  -3, // pair 10
        ],
    },
    EncodedMovement {
        name: "6multi12",
        rounds: 6,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,  -4,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,  -1, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,  -3,  -5,   4,   2,   6, // pair 1
             -1,   6,   4,  -5,  -3,  -2, // pair 2
              2,  -6,  -1,   3,   4,   5, // pair 3
             -2,   4,   3,  -1,  -5,  -6, // pair 4
              3,  -5,  -6,   1,   1,   2, // pair 5
             -3,   1,   2,  -4,  -6,  -5, // pair 6
              4,  -2,  -3,   5,   6,   4, // pair 7
             -4,   5,   1,  -6,  -2,  -3, // pair 8
              5,  -4,  -2,   6,   3,   1, // pair 9
             -5,   3,   6,  -2,  -4,  -4, // pair 10
              6,  -1,  -4,   2,   5,   3, // pair 11
             -6,   2,   5,  -3,  -1,  -1, // pair 12
        ],
    },
    EncodedMovement {
        name: "6multi14",
        rounds: 6,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,  -4,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,  -1, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -4,  -5,  -2,  -6,  -3, // table 7
        ],
        seats: &[
              1,  -3,  -7,   4,   2,   6, // pair 1
             -1,   6,   4,  -5,  -3,  -2, // pair 2
              2,  -6,  -1,   3,   4,   5, // pair 3
             -2,   4,   3,  -1,  -5,  -6, // pair 4
              3,  -5,  -6,   1,   1,   2, // pair 5
             -3,   1,   2,  -4,  -6,  -5, // pair 6
              4,  -2,  -3,   5,   7,   4, // pair 7
             -4,   5,   1,  -6,  -2,  -3, // pair 8
              5,  -7,  -2,   6,   3,   1, // pair 9
             -5,   3,   6,   7,  -4,  -4, // pair 10
              6,  -1,  -4,   2,   5,   7, // pair 11
             -6,   2,  -5,  -3,  -1,  -1, // pair 12
              7,  -4,   5,  -2,   6,   3, // pair 13
             -7,   7,   7,  -7,  -7,  -7, // pair 14
        ],
    },
    EncodedMovement {
        name: "6multi16",
        rounds: 6,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -4,  -5,  -6,  -1,  -2,  -3, // table 8
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6, // pair 1
             -1,   6,   4,  -3,  -7,  -2, // pair 2
              2,  -6,  -5,   8,   4,   3, // pair 3
             -2,   1,   7,  -6,  -5,  -4, // pair 4
              3,  -8,  -2,   1,   6,   4, // pair 5
             -3,   2,   1,  -5,  -4,  -7, // pair 6
              4,  -3,  -1,   6,   8,   5, // pair 7
             -4,   5,   6,  -1,  -2,  -3, // pair 8
              5,  -4,  -8,   3,   2,   1, // pair 9
             -5,   3,   2,  -7,  -1,  -6, // pair 10
              6,  -5,  -4,   2,   1,   8, // pair 11
             -6,   7,   5,  -4,  -3,  -1, // pair 12
              7,  -7,  -7,   7,   7,   7, // pair 13
             -7,   4,   3,  -2,  -6,  -5, // pair 14
              8,  -1,  -6,   5,   3,   2, // pair 15
             -8,   8,   8,  -8,  -8,  -8, // pair 16
        ],
    },
    EncodedMovement {
        name: "6multi18",
        rounds: 6,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -4,  -5,  -6,  -1,  -2,  -3, // table 8
             -2,  -3,  -4,  -5,  -6,  -1, // table 9
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6, // pair 1
             -1,   6,   4,  -3,  -7,  -2, // pair 2
              2,  -6,  -5,   8,   4,   3, // pair 3
             -2,   1,   7,  -6,  -5,  -4, // pair 4
              3,  -8,  -2,   1,   9,   4, // pair 5
             -3,   2,   1,  -5,  -4,  -7, // pair 6
              4,  -9,  -1,   6,   8,   5, // pair 7
             -4,   5,   6,  -1,  -2,  -3, // pair 8
              5,  -4,  -8,   3,   2,   9, // pair 9
             -5,   3,   2,  -7,  -1,  -6, // pair 10
              6,  -5,  -9,   2,   1,   8, // pair 11
             -6,   7,   5,  -4,  -3,  -1, // pair 12
              7,  -7,  -7,   7,   7,   7, // pair 13
             -7,   4,   3,  -2,  -6,  -5, // pair 14
              8,  -1,  -6,   9,   3,   2, // pair 15
             -8,   8,   8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9, // pair 18
        ],
    },
    EncodedMovement {
        name: "6multi20",
        rounds: 6,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -4,  -5,  -6,  -1,  -2,  -3, // table 8
             -2,  -3,  -4,  -5,  -6,  -1, // table 9
             -3,  -4,  -5,  -6,  -1,  -2, // table 10
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6, // pair 1
             -1,   6,   4,  -3,  -7,  -2, // pair 2
              2,  -6, -10,   8,   4,   3, // pair 3
             -2,   1,   7,  -6,  -5,  -4, // pair 4
              3,  -8,  -2,   1,   9,   4, // pair 5
             -3,   2,   1,  -5,  -4,  -7, // pair 6
              4,  -9,  -1,  10,   8,   5, // pair 7
             -4,   5,   6,  -1,  -2,  -3, // pair 8
              5, -10,  -8,   3,   2,   9, // pair 9
             -5,   3,   2,  -7,  -1,  -6, // pair 10
              6,  -5,  -9,   2,  10,   8, // pair 11
             -6,   7,   5,  -4,  -3,  -1, // pair 12
              7,  -7,  -7,   7,   7,   7, // pair 13
             -7,   4,   3,  -2,  -6,  -5, // pair 14
              8,  -1,  -6,   9,   3,  10, // pair 15
             -8,   8,   8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, // pair 20
        ],
    },
    EncodedMovement {
        name: "6multi22",
        rounds: 6,
        pairs: 22,
        tables: 11,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -4,  -5,  -6,  -1,  -2,  -3, // table 8
             -2,  -3,  -4,  -5,  -6,  -1, // table 9
             -3,  -4,  -5,  -6,  -1,  -2, // table 10
             -5,  -6,  -1,  -2,  -3,  -4, // table 11
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6, // pair 1
             -1,   6,   4,  -3,  -7,  -2, // pair 2
              2, -11, -10,   8,   4,   3, // pair 3
             -2,   1,   7,  -6,  -5,  -4, // pair 4
              3,  -8,  -2,   1,   9,  11, // pair 5
             -3,   2,   1,  -5,  -4,  -7, // pair 6
              4,  -9, -11,  10,   8,   5, // pair 7
             -4,   5,   6,  -1,  -2,  -3, // pair 8
              5, -10,  -8,   3,   2,   9, // pair 9
             -5,   3,   2,  -7,  -1,  -6, // pair 10
              6,  -5,  -9,  11,  10,   8, // pair 11
             -6,   7,   5,  -4,  -3,  -1, // pair 12
              7,  -7,  -7,   7,   7,   7, // pair 13
             -7,   4,   3,  -2,  -6,  -5, // pair 14
              8,  -1,  -6,   9,  11,  10, // pair 15
             -8,   8,   8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, // pair 20
             11,  -6,  -1,   2,   3,   4, // pair 21
            -11,  11,  11, -11, -11, -11, // pair 22
        ],
    },
    EncodedMovement {
        name: "6multi24",
        rounds: 6,
        pairs: 24,
        tables: 12,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -4,  -5,  -6,  -1,  -2,  -3, // table 8
             -2,  -3,  -4,  -5,  -6,  -1, // table 9
             -3,  -4,  -5,  -6,  -1,  -2, // table 10
             -5,  -6,  -1,  -2,  -3,  -4, // table 11
             -6,  -1,  -2,  -3,  -4,  -5, // table 12
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6, // pair 1
             -1,   6,   4,  -3,  -7,  -2, // pair 2
              2, -11, -10,   8,  12,   3, // pair 3
             -2,   1,   7,  -6,  -5,  -4, // pair 4
              3,  -8, -12,   1,   9,  11, // pair 5
             -3,   2,   1,  -5,  -4,  -7, // pair 6
              4,  -9, -11,  10,   8,  12, // pair 7
             -4,   5,   6,  -1,  -2,  -3, // pair 8
              5, -10,  -8,  12,   2,   9, // pair 9
             -5,   3,   2,  -7,  -1,  -6, // pair 10
              6,  -5,  -9,  11,  10,   8, // pair 11
             -6,   7,   5,  -4,  -3,  -1, // pair 12
              7,  -7,  -7,   7,   7,   7, // pair 13
             -7,   4,   3,  -2,  -6,  -5, // pair 14
              8, -12,  -6,   9,  11,  10, // pair 15
             -8,   8,   8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, // pair 20
             11,  -6,  -1,   2,   3,   4, // pair 21
            -11,  11,  11, -11, -11, -11, // pair 22
             12,  -1,  -2,   3,   4,   5, // pair 23
            -12,  12,  12, -12, -12, -12, // pair 24
        ],
    },
    EncodedMovement {
        name: "7multi08",
        rounds: 7,
        pairs: 8,
        tables: 4,
        boards: &[
              1,   7,   2,   3,   4,   5,   6, // table 1
              2,   3,   4,   5,   6,   7,   7, // table 2
              3,   4,   5,   6,   1,   1,   2, // table 3
              4,   5,   6,   1,   7,   2,   3, // table 4
        ],
        seats: &[
              1,   4,  -2,  -1,   2,  -2,   3, // pair 1
             -1,   2,  -3,   3,   1,   4,  -2, // pair 2
              2,  -3,   3,   1,   4,  -3,  -1, // pair 3
             -2,  -1,   2,  -3,   3,   1,   4, // pair 4
              3,   1,   4,  -2,  -1,   3,  -3, // pair 5
             -3,   3,   1,   4,  -2,  -1,   2, // pair 6
              4,  -2,  -1,   2,  -3,   2,   1, // pair 7
             -4,  -4,  -4,  -4,  -4,  -4,  -4, // pair 8
        ],
    },
    EncodedMovement {
        name: "7multi10",
        rounds: 7,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   2,   3,   4,   5,   6,   7, // table 1
              2,   3,   4,   5,   6,   7,   1, // table 2
              3,   4,   5,   6,   7,   1,   2, // table 3
              4,   5,   6,   7,   1,   2,   3, // table 4
              5,   6,   7,   1,   2,   3,   4, // table 5
        ],
        seats: &[
              1,  -2,  -3,  -4,  -2,   4,   5, // pair 1
             -1,   1,   1,  -1,  -1,  -1,  -1, // pair 2
              2,  -3,   4,  -2,   4,   5,   1, // pair 3
             -2,  -4,  -5,   1,   2,   3,  -4, // pair 4
              3,   4,   2,   4,   5,   1,   2, // pair 5
             -3,   3,   3,  -3,  -3,  -3,  -3, // pair 6
              4,  -5,  -1,   2,   3,  -4,  -2, // pair 7
             -4,   2,  -4,   5,   1,   2,   3, // pair 8
              5,  -1,  -2,   3,  -4,  -2,   4, // pair 9
             -5,   5,   5,  -5,  -5,  -5,  -5, // pair 10
        ],
    },
    EncodedMovement {
        name: "7multi12",
        rounds: 7,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   2,   3,   4,   5,   6,   7, // table 1
              2,   3,   4,   5,   6,   7,   1, // table 2
              3,   4,   5,   6,   7,   1,   2, // table 3
              4,   5,   6,   7,   1,   2,   3, // table 4
              5,   6,   7,   1,   2,   3,   4, // table 5
             -3,  -3,  -3,  -3,  -3,  -3,  -3, // table 6
        ],
        seats: &[
              1,  -3,   3,   6,   5,   2,   4, // pair 1
             -1,   1,   1,  -1,  -1,  -1,  -1, // pair 2
              2,  -4,  -1,   3,  -3,   6,   5, // pair 3
             -2,   2,   2,  -2,  -2,  -2,  -2, // pair 4
              3,   3,  -6,   5,   2,   4,   1, // pair 5
             -3,  -6,  -5,   2,   4,   1,   3, // pair 6
              4,  -1,  -3,  -3,   6,   5,   2, // pair 7
             -4,   4,   4,  -4,  -4,  -4,  -4, // pair 8
              5,  -2,  -4,   1,   3,  -3,   6, // pair 9
             -5,   5,   5,  -5,  -5,  -5,  -5, // pair 10
              6,  -5,  -2,   4,   1,   3,  -3, // pair 11
             -6,   6,   6,  -6,  -6,  -6,  -6, // pair 12
        ],
    },
    EncodedMovement {
        name: "7multi14",
        rounds: 7,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
        ],
        seats: &[
              1,  -3,  -5,   7,   2,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2,  -4,  -6,   1,   3,   5,   7, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3,  -5,  -7,   2,   4,   6,   1, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4,  -6,  -1,   3,   5,   7,   2, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   4,   6,   1,   3, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -3,   5,   7,   2,   4, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -2,  -4,   6,   1,   3,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
        ],
    },
    EncodedMovement {
        name: "7multi16",
        rounds: 7,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
        ],
        seats: &[
              1,  -3,  -5,   7,   2,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2,  -4,  -6,   1,   3,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3,  -5,  -7,   2,   4,   8,   1, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4,  -6,  -1,   3,   8,   7,   2, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   8,   6,   1,   3, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   5,   7,   2,   4, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -4,   6,   1,   3,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
        ],
    },
    EncodedMovement {
        name: "7multi18",
        rounds: 7,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
        ],
        seats: &[
              1,  -9,  -5,   7,   2,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2,  -4,  -6,   1,   3,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3,  -5,  -7,   2,   4,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4,  -6,  -1,   3,   8,   9,   2, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   8,   9,   1,   3, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   9,   7,   2,   4, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,   6,   1,   3,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
        ],
    },
    EncodedMovement {
        name: "7multi20",
        rounds: 7,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
        ],
        seats: &[
              1,  -9, -10,   7,   2,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2, -10,  -6,   1,   3,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3,  -5,  -7,   2,   4,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4,  -6,  -1,   3,   8,   9,  10, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   8,   9,  10,   3, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   9,  10,   2,   4, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,  10,   1,   3,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   7,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, -10, // pair 20
        ],
    },
    EncodedMovement {
        name: "7multi22",
        rounds: 7,
        pairs: 22,
        tables: 11,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
             -4,  -5,  -6,  -7,  -1,  -2,  -3, // table 11
        ],
        seats: &[
              1,  -9, -10,  11,   2,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2, -10, -11,   1,   3,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3, -11,  -7,   2,   4,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4,  -6,  -1,   3,   8,   9,  10, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   8,   9,  10,  11, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   9,  10,  11,   4, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,  10,  11,   3,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   7,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, -10, // pair 20
             11,  -5,  -6,   7,   1,   2,   3, // pair 21
            -11,  11,  11, -11, -11, -11, -11, // pair 22
        ],
    },
    EncodedMovement {
        name: "7multi24",
        rounds: 7,
        pairs: 24,
        tables: 12,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
             -4,  -5,  -6,  -7,  -1,  -2,  -3, // table 11
             -5,  -6,  -7,  -1,  -2,  -3,  -4, // table 12
        ],
        seats: &[
              1,  -9, -10,  11,  12,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2, -10, -11,  12,   3,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3, -11, -12,   2,   4,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4, -12,  -1,   3,   8,   9,  10, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   8,   9,  10,  11, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   9,  10,  11,  12, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,  10,  11,  12,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   7,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, -10, // pair 20
             11,  -5,  -6,   7,   1,   2,   3, // pair 21
            -11,  11,  11, -11, -11, -11, -11, // pair 22
             12,  -6,  -7,   1,   2,   3,   4, // pair 23
            -12,  12,  12, -12, -12, -12, -12, // pair 24
        ],
    },
    EncodedMovement {
        name: "7multi26",
        rounds: 7,
        pairs: 26,
        tables: 13,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
             -4,  -5,  -6,  -7,  -1,  -2,  -3, // table 11
             -5,  -6,  -7,  -1,  -2,  -3,  -4, // table 12
             -6,  -7,  -1,  -2,  -3,  -4,  -5, // table 13
        ],
        seats: &[
              1,  -9, -10,  11,  12,  13,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2, -10, -11,  12,  13,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3, -11, -12,  13,   4,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4, -12, -13,   3,   8,   9,  10, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5, -13,  -2,   8,   9,  10,  11, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   9,  10,  11,  12, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,  10,  11,  12,  13, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   7,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, -10, // pair 20
             11,  -5,  -6,   7,   1,   2,   3, // pair 21
            -11,  11,  11, -11, -11, -11, -11, // pair 22
             12,  -6,  -7,   1,   2,   3,   4, // pair 23
            -12,  12,  12, -12, -12, -12, -12, // pair 24
             13,  -7,  -1,   2,   3,   4,   5, // pair 25
            -13,  13,  13, -13, -13, -13, -13, // pair 26
        ],
    },
    EncodedMovement {
        name: "7multi28",
        rounds: 7,
        pairs: 28,
        tables: 14,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
             -4,  -5,  -6,  -7,  -1,  -2,  -3, // table 11
             -5,  -6,  -7,  -1,  -2,  -3,  -4, // table 12
             -6,  -7,  -1,  -2,  -3,  -4,  -5, // table 13
             -7,  -1,  -2,  -3,  -4,  -5,  -6, // table 14
        ],
        seats: &[
              1,  -9, -10,  11,  12,  13,  14, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2, -10, -11,  12,  13,  14,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3, -11, -12,  13,  14,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4, -12, -13,  14,   8,   9,  10, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5, -13, -14,   8,   9,  10,  11, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6, -14,  -8,   9,  10,  11,  12, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,  10,  11,  12,  13, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   7,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, -10, // pair 20
             11,  -5,  -6,   7,   1,   2,   3, // pair 21
            -11,  11,  11, -11, -11, -11, -11, // pair 22
             12,  -6,  -7,   1,   2,   3,   4, // pair 23
            -12,  12,  12, -12, -12, -12, -12, // pair 24
             13,  -7,  -1,   2,   3,   4,   5, // pair 25
            -13,  13,  13, -13, -13, -13, -13, // pair 26
             14,  -1,  -2,   3,   4,   5,   6, // pair 27
            -14,  14,  14, -14, -14, -14, -14, // pair 28
        ],
    },
    EncodedMovement {
        name: "6multi08_nieuw",
        rounds: 6,
        pairs: 8,
        tables: 4,
        boards: &[
              1,   1,   5,   5,   5,   5, // table 1
              2,   2,   6,   6,   6,   6, // table 2
              3,   3,   3,   3,   1,   1, // table 3
              4,   4,   4,   4,   2,   2, // table 4
        ],
        seats: &[
              1,   4,  -1,  -3,  -2,   4, // pair 1
             -1,  -3,   4,  -2,  -4,   1, // pair 2
              2,   3,  -2,   4,   1,  -3, // pair 3
             -2,  -4,   3,  -1,   3,  -2, // pair 4
              3,  -2,  -4,   1,   2,   3, // pair 5
             -3,   1,   1,  -4,   4,   2, // pair 6
              4,  -1,  -3,   2,  -1,  -4, // pair 7
             -4,   2,   2,   3,  -3,  -1, // pair 8
        ],
    },
    EncodedMovement {
        name: "6multi10_nieuw",
        rounds: 6,
        pairs: 10,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,   6,  -2,   4,  -3,  -5, // pair 1
             -1,   4,  -3,  -5,  -6,  -2, // pair 2
              2,  -6,   3,  -1,   5,   4, // pair 3
             -2,   1,  -6,   5,   4,  -3, // pair 4
              3,  -4,   6,  -2,   1,   5, // pair 5
             -3,   2,  -5,   1,  -4,   6, // pair 6
              4,  -1,   5,  -6,   3,   2, // pair 7
             -4,  -3,  -1,   2,  -5,  -6, // pair 8
              5,  -2,   1,  -4,   6,   3, // pair 9
             -5,   3,   2,   6,  -1,  -4, // pair 10
        ],
    },
    EncodedMovement {
        name: "6multi12_nieuw",
        rounds: 6,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,   2,   4,   6,   3,  -5, // pair 1
             -1,   3,   5,  -2,  -6,   4, // pair 2
              2,  -4,  -5,   3,   1,  -6, // pair 3
             -2,  -5,   6,   4,  -3,   1, // pair 4
              3,   5,   1,  -6,  -2,  -4, // pair 5
             -3,   1,   2,   5,  -4,   6, // pair 6
              4,  -2,   3,  -5,   6,  -1, // pair 7
             -4,  -6,  -1,  -3,  -5,   2, // pair 8
              5,  -3,  -6,   1,   4,  -2, // pair 9
             -5,   6,  -2,  -4,  -1,  -3, // pair 10
              6,  -1,  -4,   2,   5,   3, // pair 11
             -6,   4,  -3,  -1,   2,   5, // pair 12
        ],
    },
    EncodedMovement {
        name: "6multi14_nieuw",
        rounds: 6,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
        ],
        seats: &[
              1,   2,   4,   6,   3,  -5, // pair 1
             -1,   3,   5,  -2,  -6,   4, // pair 2
              2,  -4,  -5,   3,   1,  -7, // pair 3
             -2,  -5,   6,   4,  -3,   1, // pair 4
              3,   5,   1,  -6,  -2,  -4, // pair 5
             -3,   1,   2,   5,  -4,   6, // pair 6
              4,  -7,   3,  -5,   6,  -1, // pair 7
             -4,  -6,  -1,  -3,  -7,   2, // pair 8
              5,  -3,  -6,   1,   4,  -2, // pair 9
             -5,   6,  -2,  -7,  -1,  -3, // pair 10
              6,  -1,  -4,   2,   5,   3, // pair 11
             -6,   4,  -7,  -1,   2,   5, // pair 12
              7,   7,   7,   7,   7,   7, // pair 13
             -7,  -2,  -3,  -4,  -5,  -6, // pair 14
        ],
    },
    EncodedMovement {
        name: "6multi16_nieuw",
        rounds: 6,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -4,  -5,  -6,  -1,  -2,  -3, // table 8
        ],
        seats: &[
              1,  -2,  -3,   4,  -5,   6, // pair 1
             -1,   6,  -4,   3,  -7,   2, // pair 2
              2,  -6,   5,   8,   4,   3, // pair 3
             -2,  -1,  -7,   6,   5,   4, // pair 4
              3,   8,  -2,  -1,   6,  -4, // pair 5
             -3,   2,   1,   5,  -4,   7, // pair 6
              4,  -3,  -1,  -6,  -8,  -5, // pair 7
             -4,  -5,   6,   1,  -2,  -3, // pair 8
              5,  -4,   8,  -3,   2,   1, // pair 9
             -5,   3,   2,   7,  -1,  -6, // pair 10
              6,   5,   4,   2,   1,  -8, // pair 11
             -6,   7,  -5,  -4,  -3,  -1, // pair 12
              7,  -7,   7,  -7,   7,  -7, // pair 13
             -7,   4,   3,  -2,  -6,   5, // pair 14
              8,   1,  -6,  -5,   3,  -2, // pair 15
             -8,  -8,  -8,  -8,   8,   8, // pair 16
        ],
    },
    EncodedMovement {
        name: "6multi18_nieuw",
        rounds: 6,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -4,  -5,  -6,  -1,  -2,  -3, // table 8
             -2,  -3,  -4,  -5,  -6,  -1, // table 9
        ],
        seats: &[
              1,  -2,  -3,   4,  -5,   6, // pair 1
             -1,   6,  -4,   3,  -7,   2, // pair 2
              2,  -6,   5,   8,   4,   3, // pair 3
             -2,  -1,  -7,   6,   5,   4, // pair 4
              3,   8,  -2,  -1,   9,  -4, // pair 5
             -3,   2,   1,   5,  -4,   7, // pair 6
              4,  -9,  -1,  -6,  -8,  -5, // pair 7
             -4,  -5,   6,   1,  -2,  -3, // pair 8
              5,  -4,   8,  -3,   2,   9, // pair 9
             -5,   3,   2,   7,  -1,  -6, // pair 10
              6,   5,   9,   2,   1,  -8, // pair 11
             -6,   7,  -5,  -4,  -3,  -1, // pair 12
              7,  -7,   7,  -7,   7,  -7, // pair 13
             -7,   4,   3,  -2,  -6,   5, // pair 14
              8,   1,  -6,  -9,   3,  -2, // pair 15
             -8,  -8,  -8,  -8,   8,   8, // pair 16
              9,  -3,   4,  -5,   6,   1, // pair 17
             -9,   9,  -9,   9,  -9,  -9, // pair 18
        ],
    },
    EncodedMovement {
        name: "6multi20_nieuw",
        rounds: 6,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -4,  -5,  -6,  -1,  -2,  -3, // table 8
             -2,  -3,  -4,  -5,  -6,  -1, // table 9
             -3,  -4,  -5,  -6,  -1,  -2, // table 10
        ],
        seats: &[
              1,  -2,  -3,   4,  -5,   6, // pair 1
             -1,   6,  -4,   3,  -7,   2, // pair 2
              2,  -6,  10,   8,   4,   3, // pair 3
             -2,  -1,  -7,   6,   5,   4, // pair 4
              3,   8,  -2,  -1,   9,  -4, // pair 5
             -3,   2,   1,   5,  -4,   7, // pair 6
              4,  -9,  -1, -10,  -8,  -5, // pair 7
             -4,  -5,   6,   1,  -2,  -3, // pair 8
              5, -10,   8,  -3,   2,   9, // pair 9
             -5,   3,   2,   7,  -1,  -6, // pair 10
              6,   5,   9,   2,  10,  -8, // pair 11
             -6,   7,  -5,  -4,  -3,  -1, // pair 12
              7,  -7,   7,  -7,   7,  -7, // pair 13
             -7,   4,   3,  -2,  -6,   5, // pair 14
              8,   1,  -6,  -9,   3, -10, // pair 15
             -8,  -8,  -8,  -8,   8,   8, // pair 16
              9,  -3,   4,  -5,   6,   1, // pair 17
             -9,   9,  -9,   9,  -9,  -9, // pair 18
             10,  -4,   5,  -6,   1,  -2, // pair 19
            -10,  10, -10,  10, -10,  10, // pair 20
        ],
    },
    EncodedMovement {
        name: "6multi22_nieuw",
        rounds: 6,
        pairs: 22,
        tables: 11,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -4,  -5,  -6,  -1,  -2,  -3, // table 8
             -2,  -3,  -4,  -5,  -6,  -1, // table 9
             -3,  -4,  -5,  -6,  -1,  -2, // table 10
             -5,  -6,  -1,  -2,  -3,  -4, // table 11
        ],
        seats: &[
              1,  -2,  -3,   4,  -5,   6, // pair 1
             -1,   6,  -4,   3,  -7,   2, // pair 2
              2, -11,  10,   8,   4,   3, // pair 3
             -2,  -1,  -7,   6,   5,   4, // pair 4
              3,   8,  -2,  -1,   9, -11, // pair 5
             -3,   2,   1,   5,  -4,   7, // pair 6
              4,  -9, -11, -10,  -8,  -5, // pair 7
             -4,  -5,   6,   1,  -2,  -3, // pair 8
              5, -10,   8,  -3,   2,   9, // pair 9
             -5,   3,   2,   7,  -1,  -6, // pair 10
              6,   5,   9,  11,  10,  -8, // pair 11
             -6,   7,  -5,  -4,  -3,  -1, // pair 12
              7,  -7,   7,  -7,   7,  -7, // pair 13
             -7,   4,   3,  -2,  -6,   5, // pair 14
              8,   1,  -6,  -9,  11, -10, // pair 15
             -8,  -8,  -8,  -8,   8,   8, // pair 16
              9,  -3,   4,  -5,   6,   1, // pair 17
             -9,   9,  -9,   9,  -9,  -9, // pair 18
             10,  -4,   5,  -6,   1,  -2, // pair 19
            -10,  10, -10,  10, -10,  10, // pair 20
             11,  -6,  -1,   2,   3,  -4, // pair 21
            -11,  11,  11, -11, -11,  11, // pair 22
        ],
    },
    EncodedMovement {
        name: "6multi24_nieuw",
        rounds: 6,
        pairs: 24,
        tables: 12,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -4,  -5,  -6,  -1,  -2,  -3, // table 8
             -2,  -3,  -4,  -5,  -6,  -1, // table 9
             -3,  -4,  -5,  -6,  -1,  -2, // table 10
             -5,  -6,  -1,  -2,  -3,  -4, // table 11
             -6,  -1,  -2,  -3,  -4,  -5, // table 12
        ],
        seats: &[
              1,  -2,  -3,   4,  -5,   6, // pair 1
             -1,   6,  -4,   3,  -7,   2, // pair 2
              2, -11,  10,   8,  12,   3, // pair 3
             -2,  -1,  -7,   6,   5,   4, // pair 4
              3,   8, -12,  -1,   9, -11, // pair 5
             -3,   2,   1,   5,  -4,   7, // pair 6
              4,  -9, -11, -10,  -8, -12, // pair 7
             -4,  -5,   6,   1,  -2,  -3, // pair 8
              5, -10,   8, -12,   2,   9, // pair 9
             -5,   3,   2,   7,  -1,  -6, // pair 10
              6,   5,   9,  11,  10,  -8, // pair 11
             -6,   7,  -5,  -4,  -3,  -1, // pair 12
              7,  -7,   7,  -7,   7,  -7, // pair 13
             -7,   4,   3,  -2,  -6,   5, // pair 14
              8,  12,  -6,  -9,  11, -10, // pair 15
             -8,  -8,  -8,  -8,   8,   8, // pair 16
              9,  -3,   4,  -5,   6,   1, // pair 17
             -9,   9,  -9,   9,  -9,  -9, // pair 18
             10,  -4,   5,  -6,   1,  -2, // pair 19
            -10,  10, -10,  10, -10,  10, // pair 20
             11,  -6,  -1,   2,   3,  -4, // pair 21
            -11,  11,  11, -11, -11,  11, // pair 22
             12,   1,  -2,  -3,   4,  -5, // pair 23
            -12, -12,  12,  12, -12,  12, // pair 24
        ],
    },
    EncodedMovement {
        name: "7multi08_nieuw",
        rounds: 7,
        pairs: 8,
        tables: 4,
        boards: &[
              1,   7,   6,   5,   2,   3,   4, // table 1
              2,   6,   1,   7,   4,   5,   3, // table 2
              3,   1,   5,   1,   6,   2,   7, // table 3
              4,   3,   4,   2,   7,   6,   5, // table 4
        ],
        seats: &[
              1,   1,   1,   1,   1,   1,   1, // pair 1
             -1,   4,   4,   4,  -4,  -4,  -4, // pair 2
              2,   2,  -2,  -2,  -2,  -1,   4, // pair 3
             -2,  -1,  -4,   3,   3,  -2,   2, // pair 4
              3,  -2,   3,  -3,   4,  -3,  -1, // pair 5
             -3,   3,  -1,  -4,   2,   2,  -3, // pair 6
              4,  -3,  -3,   2,  -1,   4,  -2, // pair 7
             -4,  -4,   2,  -1,  -3,   3,   3, // pair 8
        ],
    },
    EncodedMovement {
        name: "7multi10_nieuw",
        rounds: 7,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   2,   3,   4,   5,   6,   7, // table 1
              2,   3,   4,   5,   6,   7,   1, // table 2
              3,   4,   5,   6,   7,   1,   2, // table 3
              4,   5,   6,   7,   1,   2,   3, // table 4
              5,   6,   7,   1,   2,   3,   4, // table 5
        ],
        seats: &[
              1,  -2,   3,   4,  -2,   4,   5, // pair 1
             -1,   1,   1,  -1,  -1,  -1,  -1, // pair 2
              2,  -3,   4,  -2,   4,   5,   1, // pair 3
             -2,  -4,  -5,   1,   2,   3,  -4, // pair 4
              3,   4,  -2,  -4,   5,   1,   2, // pair 5
             -3,   3,  -3,  -3,  -3,  -3,   3, // pair 6
              4,   5,  -1,   2,   3,  -4,  -2, // pair 7
             -4,   2,  -4,   5,   1,   2,  -3, // pair 8
              5,  -1,   2,   3,  -4,  -2,   4, // pair 9
             -5,  -5,   5,  -5,  -5,  -5,  -5, // pair 10
        ],
    },
    EncodedMovement {
        name: "7multi12_nieuw",
        rounds: 7,
        pairs: 12,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
        ],
        seats: &[
              1,   5,   6,   7,   4,   3,   2, // pair 1
             -1,   2,   7,   3,  -6,   5,  -4, // pair 2
              2,  -7,   1,  -6,   5,  -3,   4, // pair 3
             -2,   3,  -7,  -1,  -4,  -6,   5, // pair 4
              3,  -1,   4,   6,  -7,  -5,  -2, // pair 5
             -3,   4,  -1,   2,   6,  -7,  -5, // pair 6
              4,  -2,  -3,   5,   1,   7,  -6, // pair 7
             -4,   1,  -2,  -3,  -5,   6,   7, // pair 8
              5,  -3,  -4,  -7,   2,  -1,   6, // pair 9
             -5,   7,  -6,  -2,  -1,   4,  -3, // pair 10
              6,  -5,   3,   1,  -2,  -4,  -7, // pair 11
             -6,  -4,   2,  -5,   7,   1,   3, // pair 12
        ],
    },
    EncodedMovement {
        name: "7multi14_nieuw",
        rounds: 7,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
        ],
        seats: &[
              1,  -3,  -5,   7,   2,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2,  -4,  -6,   1,   3,   5,   7, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3,  -5,  -7,   2,   4,   6,   1, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4,  -6,  -1,   3,   5,   7,   2, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   4,   6,   1,   3, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -3,   5,   7,   2,   4, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -2,  -4,   6,   1,   3,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
        ],
    },
    EncodedMovement {
        name: "7multi16_nieuw",
        rounds: 7,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
        ],
        seats: &[
              1,  -3,  -5,   7,   2,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2,  -4,  -6,   1,   3,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3,  -5,  -7,   2,   4,   8,   1, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4,  -6,  -1,   3,   8,   7,   2, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   8,   6,   1,   3, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   5,   7,   2,   4, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -4,   6,   1,   3,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
        ],
    },
    EncodedMovement {
        name: "7multi18_nieuw",
        rounds: 7,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
        ],
        seats: &[
              1,  -9,  -5,   7,   2,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2,  -4,  -6,   1,   3,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3,  -5,  -7,   2,   4,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4,  -6,  -1,   3,   8,   9,   2, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   8,   9,   1,   3, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   9,   7,   2,   4, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,   6,   1,   3,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
        ],
    },
    EncodedMovement {
        name: "7multi20_nieuw",
        rounds: 7,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
        ],
        seats: &[
              1,  -9, -10,   7,   2,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2, -10,  -6,   1,   3,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3,  -5,  -7,   2,   4,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4,  -6,  -1,   3,   8,   9,  10, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   8,   9,  10,   3, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   9,  10,   2,   4, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,  10,   1,   3,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   7,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, -10, // pair 20
        ],
    },
    EncodedMovement {
        name: "7multi22_nieuw",
        rounds: 7,
        pairs: 22,
        tables: 11,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
             -4,  -5,  -6,  -7,  -1,  -2,  -3, // table 11
        ],
        seats: &[
              1,  -9, -10,  11,   2,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2, -10, -11,   1,   3,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3, -11,  -7,   2,   4,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4,  -6,  -1,   3,   8,   9,  10, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   8,   9,  10,  11, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   9,  10,  11,   4, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,  10,  11,   3,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   7,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, -10, // pair 20
             11,  -5,  -6,   7,   1,   2,   3, // pair 21
            -11,  11,  11, -11, -11, -11, -11, // pair 22
        ],
    },
    EncodedMovement {
        name: "7multi24_nieuw",
        rounds: 7,
        pairs: 24,
        tables: 12,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
             -4,  -5,  -6,  -7,  -1,  -2,  -3, // table 11
             -5,  -6,  -7,  -1,  -2,  -3,  -4, // table 12
        ],
        seats: &[
              1,  -9, -10,  11,  12,   4,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2, -10, -11,  12,   3,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3, -11, -12,   2,   4,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4, -12,  -1,   3,   8,   9,  10, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5,  -7,  -2,   8,   9,  10,  11, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   9,  10,  11,  12, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,  10,  11,  12,   5, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   7,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, -10, // pair 20
             11,  -5,  -6,   7,   1,   2,   3, // pair 21
            -11,  11,  11, -11, -11, -11, -11, // pair 22
             12,  -6,  -7,   1,   2,   3,   4, // pair 23
            -12,  12,  12, -12, -12, -12, -12, // pair 24
        ],
    },
    EncodedMovement {
        name: "7multi26_nieuw",
        rounds: 7,
        pairs: 26,
        tables: 13,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
             -4,  -5,  -6,  -7,  -1,  -2,  -3, // table 11
             -5,  -6,  -7,  -1,  -2,  -3,  -4, // table 12
             -6,  -7,  -1,  -2,  -3,  -4,  -5, // table 13
        ],
        seats: &[
              1,  -9, -10,  11,  12,  13,   6, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2, -10, -11,  12,  13,   5,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3, -11, -12,  13,   4,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4, -12, -13,   3,   8,   9,  10, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5, -13,  -2,   8,   9,  10,  11, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6,  -1,  -8,   9,  10,  11,  12, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,  10,  11,  12,  13, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   7,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, -10, // pair 20
             11,  -5,  -6,   7,   1,   2,   3, // pair 21
            -11,  11,  11, -11, -11, -11, -11, // pair 22
             12,  -6,  -7,   1,   2,   3,   4, // pair 23
            -12,  12,  12, -12, -12, -12, -12, // pair 24
             13,  -7,  -1,   2,   3,   4,   5, // pair 25
            -13,  13,  13, -13, -13, -13, -13, // pair 26
        ],
    },
    EncodedMovement {
        name: "7multi28_nieuw",
        rounds: 7,
        pairs: 28,
        tables: 14,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
             -4,  -5,  -6,  -7,  -1,  -2,  -3, // table 11
             -5,  -6,  -7,  -1,  -2,  -3,  -4, // table 12
             -6,  -7,  -1,  -2,  -3,  -4,  -5, // table 13
             -7,  -1,  -2,  -3,  -4,  -5,  -6, // table 14
        ],
        seats: &[
              1,  -9, -10,  11,  12,  13,  14, // pair 1
             -1,   4,   7,  -3,  -6,  -2,  -5, // pair 2
              2, -10, -11,  12,  13,  14,   8, // pair 3
             -2,   5,   1,  -4,  -7,  -3,  -6, // pair 4
              3, -11, -12,  13,  14,   8,   9, // pair 5
             -3,   6,   2,  -5,  -1,  -4,  -7, // pair 6
              4, -12, -13,  14,   8,   9,  10, // pair 7
             -4,   7,   3,  -6,  -2,  -5,  -1, // pair 8
              5, -13, -14,   8,   9,  10,  11, // pair 9
             -5,   1,   4,  -7,  -3,  -6,  -2, // pair 10
              6, -14,  -8,   9,  10,  11,  12, // pair 11
             -6,   2,   5,  -1,  -4,  -7,  -3, // pair 12
              7,  -8,  -9,  10,  11,  12,  13, // pair 13
             -7,   3,   6,  -2,  -5,  -1,  -4, // pair 14
              8,  -2,  -3,   4,   5,   6,   7, // pair 15
             -8,   8,   8,  -8,  -8,  -8,  -8, // pair 16
              9,  -3,  -4,   5,   6,   7,   1, // pair 17
             -9,   9,   9,  -9,  -9,  -9,  -9, // pair 18
             10,  -4,  -5,   6,   7,   1,   2, // pair 19
            -10,  10,  10, -10, -10, -10, -10, // pair 20
             11,  -5,  -6,   7,   1,   2,   3, // pair 21
            -11,  11,  11, -11, -11, -11, -11, // pair 22
             12,  -6,  -7,   1,   2,   3,   4, // pair 23
            -12,  12,  12, -12, -12, -12, -12, // pair 24
             13,  -7,  -1,   2,   3,   4,   5, // pair 25
            -13,  13,  13, -13, -13, -13, -13, // pair 26
             14,  -1,  -2,   3,   4,   5,   6, // pair 27
            -14,  14,  14, -14, -14, -14, -14, // pair 28
        ],
    },
    EncodedMovement {
        name: "4basis8",
        rounds: 4,
        pairs: 8,
        tables: 4,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
        ],
        seats: &[
              1,  -2,   3,   4, // pair 1
             -1,   3,  -4,  -2, // pair 2
              2,  -1,   4,   3, // pair 3
             -2,   4,  -3,  -1, // pair 4
              3,  -4,   1,   2, // pair 5
             -3,   1,  -2,  -4, // pair 6
              4,  -3,   2,   1, // pair 7
             -4,   2,  -1,  -3, // pair 8
        ],
    },
    EncodedMovement {
        name: "5basis10",
        rounds: 5,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
        ],
        seats: &[
              1,  -2,   3,   4,   5, // pair 1
             -1,   5,  -4,  -3,  -2, // pair 2
              2,  -3,   4,   5,   1, // pair 3
             -2,   1,  -5,  -4,  -3, // pair 4
              3,  -4,   5,   1,   2, // pair 5
             -3,   2,  -1,  -5,  -4, // pair 6
              4,  -5,   1,   2,   3, // pair 7
             -4,   3,  -2,  -1,  -5, // pair 8
              5,  -1,   2,   3,   4, // pair 9
             -5,   4,  -3,  -2,  -1, // pair 10
        ],
    },
    EncodedMovement {
        name: "6basis12.1-5",
        rounds: 6,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,   3,  -5,   4,   2,   6, // pair 1
             -1,  -6,   4,   5,   3,  -2, // pair 2
              2,   1,  -6,  -5,  -4,   3, // pair 3
             -2,  -3,   1,   6,  -5,   4, // pair 4
              3,  -2,  -4,   1,   5,  -6, // pair 5
             -3,  -4,   6,   2,  -1,   5, // pair 6
              4,   6,  -1,   3,  -2,  -5, // pair 7
             -4,  -5,   2,  -1,  -6,  -3, // pair 8
              5,   4,  -2,  -6,  -3,   1, // pair 9
             -5,  -1,  -3,  -2,   6,  -4, // pair 10
              6,   5,   3,  -4,   1,   2, // pair 11
             -6,   2,   5,  -3,   4,  -1, // pair 12
        ],
    },
    EncodedMovement {
        name: "6basis12.2-5",
        rounds: 6,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,   6,   3,  -4,   2,   5, // pair 1
             -1,   5,   6,  -3,   4,  -2, // pair 2
              2,   3,  -6,   4,   5,   1, // pair 3
             -2,  -1,   4,   6,   3,  -5, // pair 4
              3,  -5,  -4,   2,   6,  -1, // pair 5
             -3,  -4,   1,   5,  -2,   6, // pair 6
              4,   1,  -2,   3,  -5,  -6, // pair 7
             -4,  -6,   5,  -2,  -1,  -3, // pair 8
              5,   2,  -1,  -6,  -4,   3, // pair 9
             -5,  -3,   2,   1,  -6,   4, // pair 10
              6,   4,  -5,  -1,  -3,   2, // pair 11
             -6,  -2,  -3,  -5,   1,  -4, // pair 12
        ],
    },
    EncodedMovement {
        name: "6basis12.3-5",
        rounds: 6,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              4,   6,  -1,   3,  -2,  -5, // pair 1
             -5,  -1,  -3,  -2,   6,  -4, // pair 2
              6,   5,   3,  -4,   1,   2, // pair 3
             -1,  -6,   4,   5,   3,  -2, // pair 4
              3,  -2,  -4,   1,   5,  -6, // pair 5
             -3,  -4,   6,   2,  -1,   5, // pair 6
              2,   1,  -6,  -5,  -4,   3, // pair 7
             -6,   2,   5,  -3,   4,  -1, // pair 8
              1,   3,  -5,   4,   2,   6, // pair 9
             -4,  -5,   2,  -1,  -6,  -3, // pair 10
              5,   4,  -2,  -6,  -3,   1, // pair 11
             -2,  -3,   1,   6,  -5,   4, // pair 12
        ],
    },
    EncodedMovement {
        name: "6basis12.4-5",
        rounds: 6,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              5,   4,  -2,  -6,  -3,   1, // pair 1
             -4,  -5,   2,  -1,  -6,  -3, // pair 2
              2,   1,  -6,  -5,  -4,   3, // pair 3
             -2,  -3,   1,   6,  -5,   4, // pair 4
              3,  -2,  -4,   1,   5,  -6, // pair 5
             -3,  -4,   6,   2,  -1,   5, // pair 6
              1,   3,  -5,   4,   2,   6, // pair 7
             -5,  -1,  -3,  -2,   6,  -4, // pair 8
              4,   6,  -1,   3,  -2,  -5, // pair 9
             -1,  -6,   4,   5,   3,  -2, // pair 10
              6,   5,   3,  -4,   1,   2, // pair 11
             -6,   2,   5,  -3,   4,  -1, // pair 12
        ],
    },
    EncodedMovement {
        name: "6basis12.5-5",
        rounds: 6,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              2,   1,  -6,  -5,  -4,   3, // pair 1
             -4,  -5,   2,  -1,  -6,  -3, // pair 2
              6,   5,   3,  -4,   1,   2, // pair 3
             -5,  -1,  -3,  -2,   6,  -4, // pair 4
              3,  -2,  -4,   1,   5,  -6, // pair 5
             -3,  -4,   6,   2,  -1,   5, // pair 6
              5,   4,  -2,  -6,  -3,   1, // pair 7
             -1,  -6,   4,   5,   3,  -2, // pair 8
              4,   6,  -1,   3,  -2,  -5, // pair 9
             -6,   2,   5,  -3,   4,  -1, // pair 10
              1,   3,  -5,   4,   2,   6, // pair 11
             -2,  -3,   1,   6,  -5,   4, // pair 12
        ],
    },
    EncodedMovement {
        name: "7basis14",
        rounds: 7,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -1,   7,   6,  -5,  -4,  -3,  -2, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -2,   1,   7,  -6,  -5,  -4,  -3, // pair 4
              3,  -4,  -5,   6,   7,   1,   2, // pair 5
             -3,   2,   1,  -7,  -6,  -5,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
             -4,   3,   2,  -1,  -7,  -6,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
             -5,   4,   3,  -2,  -1,  -7,  -6, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,   5,   4,  -3,  -2,  -1,  -7, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,   6,   5,  -4,  -3,  -2,  -1, // pair 14
        ],
    },
    EncodedMovement {
        name: "3drive08",
        rounds: 3,
        pairs: 8,
        tables: 4,
        boards: &[
              1,   1,   1, // table 1
              2,   2,   2, // table 2
              3,   3,   3, // table 3
              1,   2,   3, // table 4
        ],
        seats: &[
              1,   4,   3, // pair 1
             -1,  -3,  -2, // pair 2
              2,   3,  -1, // pair 3
             -2,  -1,   4, // pair 4
              3,   1,   2, // pair 5
             -3,  -2,   1, // pair 6
              4,   2,  -3, // pair 7
             -4,  -4,  -4, // pair 8
        ],
    },
    EncodedMovement {
        name: "5howel06.1-1",
        rounds: 5,
        pairs: 6,
        tables: 3,
        boards: &[
              1,   1,   1,   3,   5, // table 1
              2,   4,   4,   4,  -1, // table 2
              3,   3,   2,   2,  -1, // table 3
        ],
        seats: &[
              1,   3,   2,   3,   1, // pair 1
             -1,  -2,   3,  -1,   2, // pair 2
              2,  -3,   1,  -2,  -2, // pair 3
             -2,   1,  -2,   1,   3, // pair 4
              3,   2,  -1,  -3,  -3, // pair 5
             -3,  -1,  -3,   2,  -1, // pair 6
        ],
    },
    EncodedMovement {
        name: "7howel08.1-1",
        rounds: 7,
        pairs: 8,
        tables: 4,
        boards: &[
              1,   6,   7,   2,   5,   3,   4, // table 1
              2,   5,   3,   4,   1,   6,   7, // table 2
              3,   4,   1,   6,   7,   2,   5, // table 3
              4,   1,   6,   7,   2,   5,   3, // table 4
        ],
        seats: &[
              1,   1,   1,   1,   1,   1,   1, // pair 1
             -1,   3,   2,  -4,   4,  -2,  -3, // pair 2
              2,  -4,   4,  -2,  -3,  -1,   3, // pair 3
             -2,  -3,  -1,   3,   2,  -4,   4, // pair 4
              3,   2,  -4,   4,  -2,  -3,  -1, // pair 5
             -3,  -1,   3,   2,  -4,   4,  -2, // pair 6
              4,  -2,  -3,  -1,   3,   2,  -4, // pair 7
             -4,   4,  -2,  -3,  -1,   3,   2, // pair 8
        ],
    },
    EncodedMovement {
        name: "3howel10.1-3",
        rounds: 3,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   1,   1, // table 1
             -1,  -1,  -3, // table 2
              2,   2,   2, // table 3
             -3,  -5,  -5, // table 4
              3,   3,   3, // table 5
        ],
        seats: &[
              1,   4,   2, // pair 1
             -1,  -3,  -4, // pair 2
              2,   3,   5, // pair 3
             -2,   5,   3, // pair 4
              3,  -2,  -5, // pair 5
             -3,  -5,   1, // pair 6
              4,  -4,  -1, // pair 7
             -4,  -1,   4, // pair 8
              5,   2,  -3, // pair 9
             -5,   1,  -2, // pair 10
        ],
    },
    EncodedMovement {
        name: "3howel10.2-3",
        rounds: 3,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   1,   1, // table 1
             -1,  -1,  -3, // table 2
              2,   2,   2, // table 3
             -3,  -5,  -5, // table 4
              3,   3,   3, // table 5
        ],
        seats: &[
              1,   3,   4, // pair 1
              4,  -5,   1, // pair 2
             -5,   2,  -2, // pair 3
              3,  -1,  -5, // pair 4
              2,  -3,   5, // pair 5
             -1,   5,   3, // pair 6
             -2,  -4,   2, // pair 7
              5,   1,  -3, // pair 8
             -4,  -2,  -4, // pair 9
             -3,   4,  -1, // pair 10
        ],
    },
    EncodedMovement {
        name: "3howel10.3-3",
        rounds: 3,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   1,   1, // table 1
             -1,  -1,  -3, // table 2
              2,   2,   2, // table 3
             -3,  -5,  -5, // table 4
              3,   3,   3, // table 5
        ],
        seats: &[
              5,   1,   2, // pair 1
              3,  -2,   4, // pair 2
             -1,  -4,  -2, // pair 3
             -3,  -1,   5, // pair 4
              2,  -3,  -4, // pair 5
              1,  -5,  -3, // pair 6
              4,   2,  -5, // pair 7
             -5,   3,  -1, // pair 8
             -4,   5,   1, // pair 9
             -2,   4,   3, // pair 10
        ],
    },
    EncodedMovement {
        name: "4howel10.2-2",
        rounds: 4,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -2,  -3,  -4, // table 5
        ],
        seats: &[
             -4,   2,  -1,  -3, // pair 1
              3,  -5,  -4,  -1, // pair 2
             -2,   3,   1,   4, // pair 3
             -3,  -1,  -2,  -5, // pair 4
              5,   5,   5,   5, // pair 5
              1,  -2,   3,  -4, // pair 6
             -1,  -3,   4,  -2, // pair 7
             -5,   4,   2,   3, // pair 8
              4,   1,  -3,   2, // pair 9
              2,  -4,  -5,   1, // pair 10
        ],
    },
    EncodedMovement {
        name: "5howel10.1-2",
        rounds: 5,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
        ],
        seats: &[
              1,   5,   2,   3,   4, // pair 1
             -1,  -2,   5,  -4,   3, // pair 2
              2,   3,   1,   4,  -5, // pair 3
             -2,   1,  -3,  -5,  -4, // pair 4
              3,  -4,  -2,   1,   5, // pair 5
             -3,   2,   4,   5,  -1, // pair 6
              4,  -5,   3,  -1,  -2, // pair 7
             -4,  -3,  -5,   2,   1, // pair 8
              5,   4,  -1,  -2,  -3, // pair 9
             -5,  -1,  -4,  -3,   2, // pair 10
        ],
    },
    EncodedMovement {
        name: "9howel10.1-1",
        rounds: 9,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   2,   5,   3,   4,   6,   7,   8,   9, // table 1
              2,   5,   3,   4,   6,   7,   8,   9,   1, // table 2
              3,   4,   6,   7,   8,   9,   1,   2,   5, // table 3
              4,   6,   7,   8,   9,   1,   2,   5,   3, // table 4
              5,   3,   4,   6,   7,   8,   9,   1,   2, // table 5
        ],
        seats: &[
              1,  -4,   2,   4,  -1,  -2,   5,   3,  -3, // pair 1
             -1,  -2,   5,   3,  -3,   1,  -4,   2,   4, // pair 2
              2,   4,  -1,  -2,   5,   3,  -3,   1,  -4, // pair 3
             -2,   5,   3,  -3,   1,  -4,   2,   4,  -1, // pair 4
              3,  -3,   1,  -4,   2,   4,  -1,  -2,   5, // pair 5
             -3,   1,  -4,   2,   4,  -1,  -2,   5,   3, // pair 6
              4,  -1,  -2,   5,   3,  -3,   1,  -4,   2, // pair 7
             -4,   2,   4,  -1,  -2,   5,   3,  -3,   1, // pair 8
              5,   3,  -3,   1,  -4,   2,   4,  -1,  -2, // pair 9
             -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5,  -5, // pair 10
        ],
    },
    EncodedMovement {
        name: "9howel10.2-1",
        rounds: 9,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   1,   1,   1,   1,   6,   6,   6,   6, // table 1
              2,   2,   2,   2,   2,   7,   7,   7,   7, // table 2
              3,   3,   3,   3,   3,   8,   8,   8,   8, // table 3
              4,   4,   4,   4,   4,   9,   9,   9,   9, // table 4
              5,   5,   5,   5,   5,  -1,  -2,  -3,  -4, // table 5
        ],
        seats: &[
              1,   5,   2,   3,   4,  -4,   2,  -1,  -3, // pair 1
             -1,  -2,   5,  -4,   3,   3,  -5,  -4,  -1, // pair 2
              2,   3,   1,   4,  -5,  -2,   3,   1,   4, // pair 3
             -2,   1,  -3,  -5,  -4,  -3,  -1,  -2,  -5, // pair 4
              3,  -4,  -2,   1,   5,   5,   5,   5,   5, // pair 5
             -3,   2,   4,   5,  -1,   1,  -2,   3,  -4, // pair 6
              4,  -5,   3,  -1,  -2,  -1,  -3,   4,  -2, // pair 7
             -4,  -3,  -5,   2,   1,  -5,   4,   2,   3, // pair 8
              5,   4,  -1,  -2,  -3,   4,   1,  -3,   2, // pair 9
             -5,  -1,  -4,  -3,   2,   2,  -4,  -5,   1, // pair 10
        ],
    },
    EncodedMovement {
        name: "3howel12.3-3",
        rounds: 3,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1, // table 1
              2,   2,   2, // table 2
              3,   3,   3, // table 3
             -1,  -1,  -1, // table 4
             -2,  -2,  -2, // table 5
             -3,  -3,  -3, // table 6
        ],
        seats: &[
              1,   2,   3, // pair 1
              4,  -5,  -6, // pair 2
              5,   1,   6, // pair 3
             -2,   4,  -3, // pair 4
             -5,   6,   1, // pair 5
             -1,   3,  -2, // pair 6
             -4,  -3,   5, // pair 7
              2,  -6,   4, // pair 8
             -3,   5,  -1, // pair 9
             -6,  -2,  -4, // pair 10
              6,  -1,  -5, // pair 11
              3,  -4,   2, // pair 12
        ],
    },
    EncodedMovement {
        name: "4howel12.1-3",
        rounds: 4,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -1,  -3,  -3, // table 5
             -2,  -2,  -4,  -4, // table 6
        ],
        seats: &[
              1,  -3,   2,   6, // pair 1
             -1,  -4,  -3,   2, // pair 2
              2,   3,   4,  -1, // pair 3
             -2,   4,   1,  -5, // pair 4
              3,   5,  -6,  -2, // pair 5
             -3,  -2,  -1,   4, // pair 6
              4,  -6,   5,   1, // pair 7
             -4,  -1,  -2,   3, // pair 8
              5,   2,  -4,  -3, // pair 9
             -5,   6,   6,   5, // pair 10
              6,   1,   3,  -4, // pair 11
             -6,  -5,  -5,  -6, // pair 12
        ],
    },
    EncodedMovement {
        name: "4howel12.2-3",
        rounds: 4,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -3,  -3,  -1, // table 5
             -2,  -2,  -4,  -4, // table 6
        ],
        seats: &[
              2,   3,   1,   4, // pair 1
              5,   6,  -6,  -3, // pair 2
             -6,  -1,  -5,  -6, // pair 3
             -3,  -2,   4,  -1, // pair 4
             -1,   2,   3,  -4, // pair 5
             -4,  -6,   5,   5, // pair 6
              1,  -3,  -4,   2, // pair 7
              4,   1,  -2,   3, // pair 8
              3,  -4,  -1,  -2, // pair 9
              6,   5,   6,  -5, // pair 10
             -2,   4,  -3,   1, // pair 11
             -5,  -5,   2,   6, // pair 12
        ],
    },
    EncodedMovement {
        name: "5howel12.2-2",
        rounds: 5,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -2,  -3,  -4,  -5, // table 6
        ],
        seats: &[
              1,  -3,  -5,  -6,   2, // pair 1
             -2,   4,   1,  -3,   5, // pair 2
              5,   1,  -6,   4,  -2, // pair 3
             -4,  -6,   3,   5,  -1, // pair 4
              6,   6,   5,   3,  -4, // pair 5
             -3,  -4,  -2,   1,  -6, // pair 6
              3,  -1,  -4,  -2,  -5, // pair 7
             -1,   5,   2,  -4,  -3, // pair 8
              2,  -5,   6,   6,   1, // pair 9
             -5,   2,  -3,  -1,   4, // pair 10
              4,   3,  -1,   2,   6, // pair 11
             -6,  -2,   4,  -5,   3, // pair 12
        ],
    },
    EncodedMovement {
        name: "6howel12.1-2",
        rounds: 6,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,  -4,   3,  -2,  -6,  -5, // pair 1
             -1,  -6,   4,   3,   5,  -2, // pair 2
              2,   6,  -5,   1,  -4,  -3, // pair 3
             -2,   1,  -3,  -6,  -5,   4, // pair 4
              3,   2,  -1,  -5,   4,   6, // pair 5
             -3,   5,  -2,  -1,   6,  -4, // pair 6
              4,   3,   1,   6,   2,   5, // pair 7
             -4,  -1,  -6,   5,  -3,   2, // pair 8
              5,  -3,   2,   4,   1,  -6, // pair 9
             -5,   4,   6,  -3,  -2,  -1, // pair 10
              6,  -2,   5,  -4,   3,   1, // pair 11
             -6,  -5,  -4,   2,  -1,   3, // pair 12
        ],
    },
    EncodedMovement {
        name: "11howe12.2-1",
        rounds: 11,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1,   7,   7,   7,   7,   7, // table 1
              2,   2,   2,   2,   2,   2,   8,   8,   8,   8,   8, // table 2
              3,   3,   3,   3,   3,   3,   9,   9,   9,   9,   9, // table 3
              4,   4,   4,   4,   4,   4,  10,  10,  10,  10,  10, // table 4
              5,   5,   5,   5,   5,   5,  11,  11,  11,  11,  11, // table 5
              6,   6,   6,   6,   6,   6,  -1,  -2,  -3,  -4,  -5, // table 6
        ],
        seats: &[
              1,  -4,   3,  -2,  -6,  -5,   1,  -3,  -5,  -6,   2, // pair 1
             -1,  -6,   4,   3,   5,  -2,  -2,   4,   1,  -3,   5, // pair 2
              2,   6,  -5,   1,  -4,  -3,   5,   1,  -6,   4,  -2, // pair 3
             -2,   1,  -3,  -6,  -5,   4,  -4,  -6,   3,   5,  -1, // pair 4
              3,   2,  -1,  -5,   4,   6,   6,   6,   5,   3,  -4, // pair 5
             -3,   5,  -2,  -1,   6,  -4,  -3,  -4,  -2,   1,  -6, // pair 6
              4,   3,   1,   6,   2,   5,   3,  -1,  -4,  -2,  -5, // pair 7
             -4,  -1,  -6,   5,  -3,   2,  -1,   5,   2,  -4,  -3, // pair 8
              5,  -3,   2,   4,   1,  -6,   2,  -5,   6,   6,   1, // pair 9
             -5,   4,   6,  -3,  -2,  -1,  -5,   2,  -3,  -1,   4, // pair 10
              6,  -2,   5,  -4,   3,   1,   4,   3,  -1,   2,   6, // pair 11
             -6,  -5,  -4,   2,  -1,   3,  -6,  -2,   4,  -5,   3, // pair 12
        ],
    },
    EncodedMovement {
        name: "11howe12.3-1",
        rounds: 11,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   5,   5,   5,   5,   9,   9,   9, // table 1
              2,   2,   2,   2,   6,   6,   6,   6,  10,  10,  10, // table 2
              3,   3,   3,   3,   7,   7,   7,   7,  11,  11,  11, // table 3
              4,   4,   4,   4,   8,   8,   8,   8,  -1,  -1,  -1, // table 4
             -1,  -1,  -3,  -3,  -1,  -3,  -3,  -1,  -2,  -2,  -2, // table 5
             -2,  -2,  -4,  -4,  -2,  -2,  -4,  -4,  -3,  -3,  -3, // table 6
        ],
        seats: &[
              1,  -3,   2,   6,   2,   3,   1,   4,   1,   2,   3, // pair 1
             -1,  -4,  -3,   2,   5,   6,  -6,  -3,   4,  -5,  -6, // pair 2
              2,   3,   4,  -1,  -6,  -1,  -5,  -6,   5,   1,   6, // pair 3
             -2,   4,   1,  -5,  -3,  -2,   4,  -1,  -2,   4,  -3, // pair 4
              3,   5,  -6,  -2,  -1,   2,   3,  -4,  -5,   6,   1, // pair 5
             -3,  -2,  -1,   4,  -4,  -6,   5,   5,  -1,   3,  -2, // pair 6
              4,  -6,   5,   1,   1,  -3,  -4,   2,  -4,  -3,   5, // pair 7
             -4,  -1,  -2,   3,   4,   1,  -2,   3,   2,  -6,   4, // pair 8
              5,   2,  -4,  -3,   3,  -4,  -1,  -2,  -3,   5,  -1, // pair 9
             -5,   6,   6,   5,   6,   5,   6,  -5,  -6,  -2,  -4, // pair 10
              6,   1,   3,  -4,  -2,   4,  -3,   1,   6,  -1,  -5, // pair 11
             -6,  -5,  -5,  -6,  -5,  -5,   2,   6,   3,  -4,   2, // pair 12
        ],
    },
    EncodedMovement {
        name: "4howel14.1-3",
        rounds: 4,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -1,  -1,  -2, // table 5
             -2,  -3,  -2,  -3, // table 6
             -3,  -4,  -4,  -4, // table 7
        ],
        seats: &[
              1,   2,   3,   4, // pair 1
             -1,   6,  -4,   5, // pair 2
              2,   7,  -3,  -1, // pair 3
             -2,  -1,   4,   6, // pair 4
              3,   1,   6,  -4, // pair 5
             -3,  -4,   1,  -5, // pair 6
              4,  -3,  -2,   1, // pair 7
             -4,  -2,  -1,  -3, // pair 8
              5,  -6,  -7,   2, // pair 9
             -5,   4,  -6,   3, // pair 10
              6,  -5,   7,  -6, // pair 11
             -6,   3,   5,  -7, // pair 12
              7,  -7,  -5,  -2, // pair 13
             -7,   5,   2,   7, // pair 14
        ],
    },
    EncodedMovement {
        name: "4howel14.2-3",
        rounds: 4,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -1,  -2,  -1, // table 5
             -2,  -2,  -3,  -3, // table 6
             -3,  -4,  -4,  -4, // table 7
        ],
        seats: &[
              1,   2,   6,   7, // pair 1
              7,   7,  -5,   5, // pair 2
             -6,  -4,  -1,  -3, // pair 3
             -1,   6,   4,  -6, // pair 4
             -4,  -5,   3,  -2, // pair 5
              5,  -2,   7,   6, // pair 6
             -2,   1,  -3,  -4, // pair 7
              4,   3,  -2,  -5, // pair 8
              2,   4,  -6,  -1, // pair 9
             -7,  -6,   1,  -7, // pair 10
             -3,   5,   5,   4, // pair 11
              6,  -3,  -7,   1, // pair 12
              3,  -1,  -4,   2, // pair 13
             -5,  -7,   2,   3, // pair 14
        ],
    },
    EncodedMovement {
        name: "5howel14.3-3",
        rounds: 5,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -3,  -3,  -1,  -2,  -1, // table 6
             -4,  -4,  -5,  -5,  -2, // table 7
        ],
        seats: &[
              1,   2,   3,   4,   5, // pair 1
             -4,  -5,  -1,   6,   3, // pair 2
              6,   4,   1,   5,  -7, // pair 3
              2,  -3,  -4,  -7,   1, // pair 4
             -6,   7,  -7,  -6,   6, // pair 5
              3,  -4,  -5,   1,  -2, // pair 6
             -1,   5,   4,  -3,   2, // pair 7
              7,  -6,   6,   7,   7, // pair 8
             -7,   3,   5,  -2,  -6, // pair 9
              5,  -1,  -2,   3,  -4, // pair 10
             -3,  -2,  -6,  -5,   4, // pair 11
             -2,   1,   7,  -4,  -3, // pair 12
              4,   6,   2,  -1,  -5, // pair 13
             -5,  -7,  -3,   2,  -1, // pair 14
        ],
    },
    EncodedMovement {
        name: "6howel14.2-2",
        rounds: 6,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
        ],
        seats: &[
             -1,   6,  -2,  -4,  -7,  -3, // pair 1
              6,   2,   4,  -3,   5,  -1, // pair 2
             -7,  -4,   5,   3,   6,   2, // pair 3
             -4,  -2,  -7,  -6,  -1,   5, // pair 4
              2,  -1,   3,  -7,  -5,   6, // pair 5
             -5,  -3,  -6,  -2,  -4,   1, // pair 6
              1,   5,  -3,   6,   4,  -2, // pair 7
             -2,   3,  -1,   4,  -6,  -5, // pair 8
              3,  -5,  -4,   1,   2,  -7, // pair 9
             -6,  -7,   1,   5,   3,  -4, // pair 10
              7,   7,   7,   7,   7,   7, // pair 11
             -3,  -6,  -5,   2,   1,   4, // pair 12
              5,   4,   2,  -1,  -3,  -6, // pair 13
              4,   1,   6,  -5,  -2,   3, // pair 14
        ],
    },
    EncodedMovement {
        name: "7howel14.1-2",
        rounds: 7,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
        ],
        seats: &[
              1,   4,   7,   5,   6,   3,   2, // pair 1
             -1,  -7,   6,   3,  -4,  -2,   5, // pair 2
              2,  -3,  -7,   6,  -5,   1,  -4, // pair 3
             -2,  -6,   5,  -4,   7,  -3,  -1, // pair 4
              3,  -2,  -5,  -1,  -6,  -7,   4, // pair 5
             -3,   6,  -4,  -5,   2,  -1,  -7, // pair 6
              4,   1,  -2,   7,  -3,  -6,  -5, // pair 7
             -4,   7,  -3,  -2,   1,  -5,   6, // pair 8
              5,  -4,   3,  -6,  -2,   7,   1, // pair 9
             -5,   3,   4,   1,  -7,   6,  -2, // pair 10
              6,   5,   2,  -3,  -1,   4,   7, // pair 11
             -6,   2,   1,  -7,   4,   5,  -3, // pair 12
              7,  -5,  -1,   4,   3,   2,  -6, // pair 13
             -7,  -1,  -6,   2,   5,  -4,   3, // pair 14
        ],
    },
    EncodedMovement {
        name: "5howel16.1-3",
        rounds: 5,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -1,  -5, // table 6
             -2,  -2,  -4,  -2,  -4, // table 7
             -3,  -5,  -5,  -3,  -3, // table 8
        ],
        seats: &[
              1,   5,  -3,   2,   4, // pair 1
             -1,   2,   5,  -3,  -7, // pair 2
              2,  -1,   3,   5,   7, // pair 3
             -2,  -5,   4,   1,   3, // pair 4
              3,  -2,   1,  -5,  -4, // pair 5
             -3,   4,  -5,  -1,  -2, // pair 6
              4,  -7,   6,  -8,   5, // pair 7
             -4,  -3,   2,  -6,  -6, // pair 8
              5,   1,  -4,   3,   2, // pair 9
             -5,  -4,  -1,  -2,  -3, // pair 10
              6,   3,  -7,  -7,  -5, // pair 11
             -6,  -8,  -2,  -4,  -8, // pair 12
              7,   6,  -8,   6,   8, // pair 13
             -7,   8,   7,   8,  -1, // pair 14
              8,  -6,  -6,   7,   6, // pair 15
             -8,   7,   8,   4,   1, // pair 16
        ],
    },
    EncodedMovement {
        name: "5howel16.2-3",
        rounds: 5,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -4,  -1, // table 6
             -3,  -3,  -3,  -5,  -4, // table 7
             -5,  -5,  -2,  -2,  -2, // table 8
        ],
        seats: &[
              1,   2,   3,   4,  -5, // pair 1
              3,   8,  -1,   6,  -8, // pair 2
              4,   3,  -5,   2,  -6, // pair 3
             -6,  -8,   2,   3,  -7, // pair 4
             -2,  -7,   6,  -7,   7, // pair 5
             -5,  -3,  -8,  -4,   1, // pair 6
              8,   7,   4,   8,  -1, // pair 7
              7,   6,   8,   7,   6, // pair 8
              2,   4,   7,   1,   5, // pair 9
             -3,   1,   5,  -8,  -4, // pair 10
             -4,  -1,  -2,  -5,   3, // pair 11
             -8,  -4,  -6,  -3,   2, // pair 12
              5,  -2,  -4,  -1,  -3, // pair 13
             -7,   5,   1,  -2,   4, // pair 14
              6,  -5,  -3,  -6,  -2, // pair 15
             -1,  -6,  -7,   5,   8, // pair 16
        ],
    },
    EncodedMovement {
        name: "5howel16.3-3",
        rounds: 5,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -1,  -5,  -5,  -5, // table 6
             -2,  -2,  -4,  -4,  -4, // table 7
             -3,  -3,  -3,  -2,  -1, // table 8
        ],
        seats: &[
             -1,   2,   4,   5,   3, // pair 1
              1,  -5,  -3,  -4,  -2, // pair 2
             -6,   4,   5,   3,   2, // pair 3
              6,  -2,  -8,  -7,  -5, // pair 4
             -2,   1,   3,   7,   6, // pair 5
              3,  -7,  -5,  -1,  -4, // pair 6
             -4,   3,   2,   1,   5, // pair 7
              5,  -1,  -7,  -2,  -3, // pair 8
             -8,   5,   1,   8,   4, // pair 9
              2,  -3,  -1,  -6,  -7, // pair 10
             -5,   7,   8,   4,   1, // pair 11
              4,  -8,  -6,  -8,  -1, // pair 12
             -3,   6,   6,   2,   7, // pair 13
              7,  -6,  -4,  -3,  -6, // pair 14
             -7,   8,   7,   6,   8, // pair 15
              8,  -4,  -2,  -5,  -8, // pair 16
        ],
    },
    EncodedMovement {
        name: "5howel18.3-3",
        rounds: 5,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -1,  -1,  -1,  -2, // table 6
             -2,  -2,  -2,  -3,  -3, // table 7
             -3,  -3,  -4,  -4,  -4, // table 8
             -4,  -5,  -5,  -5,  -5, // table 9
        ],
        seats: &[
              1,   5,  -4,   3,  -2, // pair 1
              6,   7,  -3,   5,  -4, // pair 2
              3,   4,  -1,   9,  -6, // pair 3
              5,   1,  -2,   8,  -3, // pair 4
             -6,   9,   2,   4,  -7, // pair 5
             -1,   8,  -9,   2,   4, // pair 6
              2,  -9,   3,   6,  -8, // pair 7
              9,   6,  -5,   7,   2, // pair 8
             -9,  -1,  -7,  -3,  -5, // pair 9
              4,  -7,   1,  -7,   9, // pair 10
              8,  -6,  -8,  -5,   6, // pair 11
             -2,   3,  -6,  -8,   5, // pair 12
             -5,  -8,   7,  -4,  -1, // pair 13
              7,  -4,   9,   1,   7, // pair 14
             -7,  -3,   4,  -6,  -9, // pair 15
             -8,   2,   5,  -1,   8, // pair 16
             -3,  -5,   8,  -2,   1, // pair 17
             -4,  -2,   6,  -9,   3, // pair 18
        ],
    },
    EncodedMovement {
        name: "7howel16",
        rounds: 7,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
        ],
        seats: &[
              1,   2,   3,  -4,   5,   6,  -7, // pair 1
             -1,  -4,  -7,   3,  -6,  -2,   5, // pair 2
              2,   4,   6,  -1,   3,   5,   8, // pair 3
             -2,  -5,  -1,   4,  -7,  -3,   6, // pair 4
              3,   5,   7,  -2,   4,  -8,  -1, // pair 5
             -3,  -6,  -2,   5,  -1,  -4,   7, // pair 6
              4,   6,   1,  -3,   8,   7,  -2, // pair 7
             -4,  -7,  -3,   6,  -2,  -5,   1, // pair 8
              5,   7,   2,   8,   6,   1,  -3, // pair 9
             -5,  -1,  -4,   7,  -3,  -6,   2, // pair 10
              6,   1,  -8,  -5,   7,   2,  -4, // pair 11
             -6,  -2,  -5,   1,  -4,  -7,   3, // pair 12
              7,   8,   4,  -6,   1,   3,  -5, // pair 13
             -7,  -3,  -6,   2,  -5,  -1,   4, // pair 14
              8,   3,   5,  -7,   2,   4,  -6, // pair 15
             -8,  -8,   8,  -8,  -8,   8,  -8, // pair 16
        ],
    },
    EncodedMovement {
        name: "6howel18.1-3",
        rounds: 6,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -4,  -4,  -4,  -3,  -3, // table 7
             -2,  -2,  -5,  -5,  -5,  -1, // table 8
             -3,  -6,  -6,  -1,  -2,  -6, // table 9
        ],
        seats: &[
              1,   9,  -3,   4,   8,  -2, // pair 1
             -1,  -3,   6,  -5,   9,   4, // pair 2
              2,   6,  -4,   5,   3,  -8, // pair 3
             -2,  -5,   3,  -1,  -4,   6, // pair 4
              3,   4,  -2,   8,   1,  -9, // pair 5
             -3,  -2,   4,  -6,  -5,   1, // pair 6
              4,   5,  -1,   6,  -2,  -7, // pair 7
             -4,  -6,   5,  -2,  -1,   3, // pair 8
              5,   2,  -9,   9,   7,  -4, // pair 9
             -5,  -4,   1,  -3,  -6,   2, // pair 10
              6,   8,  -8,   3,   4,  -1, // pair 11
             -6,  -1,   2,  -4,  -3,   5, // pair 12
              7,   3,  -7,   2,   6,  -5, // pair 13
             -7,  -8,   9,  -7,  -8,   7, // pair 14
              8,   7,  -6,   1,   5,  -3, // pair 15
             -8,  -9,   7,  -8,  -7,   8, // pair 16
              9,   1,  -5,   7,   2,  -6, // pair 17
             -9,  -7,   8,  -9,  -9,   9, // pair 18
        ],
    },
    EncodedMovement {
        name: "6howel18.2-3",
        rounds: 6,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -1,  -2,  -2,  -1,  -3, // table 7
             -2,  -4,  -4,  -4,  -5,  -5, // table 8
             -3,  -3,  -5,  -6,  -6,  -6, // table 9
        ],
        seats: &[
              1,  -6,   5,   2,  -3,   4, // pair 1
              6,  -1,   2,   5,   4,   7, // pair 2
             -1,  -9,   7,   4,   8,   9, // pair 3
              9,   1,   8,   7,   9,   5, // pair 4
              8,  -5,   4,   1,   3,  -9, // pair 5
              5,  -2,   1,   8,  -9,   3, // pair 6
              2,  -7,   6,   3,  -8,  -4, // pair 7
              7,   2,   3,   9,  -4,  -5, // pair 8
              3,   5,  -6,  -4,   7,   2, // pair 9
             -5,  -3,  -8,   6,  -2,   1, // pair 10
             -3,   7,  -4,  -2,   6,   8, // pair 11
             -7,   3,  -2,  -8,   5,   6, // pair 12
              4,   6,  -7,  -3,  -1,  -8, // pair 13
             -6,  -8,  -3,  -7,  -5,  -1, // pair 14
             -4,   9,   9,  -1,  -6,  -2, // pair 15
             -9,  -4,  -1,  -5,   2,  -6, // pair 16
             -8,   4,  -9,  -6,  -7,  -7, // pair 17
             -2,   8,  -5,  -9,   1,  -3, // pair 18
        ],
    },
    EncodedMovement {
        name: "4stayr10",
        rounds: 4,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -4,  -2,  -3, // table 5
        ],
        seats: &[
              1,  -2,   3,   4, // pair 1
             -5,   3,  -4,  -2, // pair 2
              2,  -1,   4,   3, // pair 3
             -2,   4,  -3,  -1, // pair 4
              3,  -5,   1,   2, // pair 5
             -3,   1,  -5,  -4, // pair 6
              4,  -3,   2,   1, // pair 7
             -4,   2,  -1,  -5, // pair 8
              5,  -4,   5,   5, // pair 9
             -1,   5,  -2,  -3, // pair 10
        ],
    },
    EncodedMovement {
        name: "4stayr10.1-x",
        rounds: 4,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -4,  -2,  -3, // table 5
        ],
        seats: &[
              1,  -2,   3,   4, // pair 1
             -1,   3,  -4,  -2, // pair 2
              2,  -1,   4,   3, // pair 3
             -2,   4,  -3,  -1, // pair 4
              3,  -5,   1,   2, // pair 5
             -3,   1,  -5,  -4, // pair 6
              4,  -3,   2,   1, // pair 7
             -4,   2,  -1,  -5, // pair 8
              5,  -4,   5,   5, // pair 9
             -5,   5,  -2,  -3, // pair 10
        ],
    },
    EncodedMovement {
        name: "4stayr12",
        rounds: 4,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -3,  -1,  -3, // table 5
             -2,  -4,  -2,  -4, // table 6
        ],
        seats: &[
              1,  -2,   3,   4, // pair 1
             -5,   3,  -4,  -2, // pair 2
              2,  -1,   4,   3, // pair 3
             -6,   4,  -3,  -1, // pair 4
              3,  -6,   1,   2, // pair 5
             -3,   1,  -6,  -6, // pair 6
              4,  -5,   2,   1, // pair 7
             -4,   2,  -5,  -5, // pair 8
              5,  -4,   6,   5, // pair 9
             -1,   6,  -2,  -3, // pair 10
              6,  -3,   5,   6, // pair 11
             -2,   5,  -1,  -4, // pair 12
        ],
    },
    EncodedMovement {
        name: "4stayr12.1-x",
        rounds: 4,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -3,  -1,  -3, // table 5
             -2,  -4,  -2,  -4, // table 6
        ],
        seats: &[
              1,  -2,   3,   4, // pair 1
             -1,   3,  -4,  -2, // pair 2
              2,  -1,   4,   3, // pair 3
             -2,   4,  -3,  -1, // pair 4
              3,  -6,   1,   2, // pair 5
             -3,   1,  -6,  -6, // pair 6
              4,  -5,   2,   1, // pair 7
             -4,   2,  -5,  -5, // pair 8
              5,  -4,   6,   5, // pair 9
             -5,   6,  -2,  -3, // pair 10
              6,  -3,   5,   6, // pair 11
             -6,   5,  -1,  -4, // pair 12
        ],
    },
    EncodedMovement {
        name: "5stayr12",
        rounds: 5,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -3,  -5,  -2,  -4, // table 6
        ],
        seats: &[
              1,  -2,   3,   4,   5, // pair 1
             -6,   5,  -4,  -3,  -2, // pair 2
              2,  -3,   4,   5,   1, // pair 3
             -2,   1,  -6,  -4,  -3, // pair 4
              3,  -4,   5,   1,   2, // pair 5
             -3,   2,  -1,  -5,  -6, // pair 6
              4,  -5,   1,   2,   3, // pair 7
             -4,   6,  -2,  -1,  -5, // pair 8
              5,  -1,   2,   3,   4, // pair 9
             -5,   4,  -3,  -6,  -1, // pair 10
              6,  -6,   6,   6,   6, // pair 11
             -1,   3,  -5,  -2,  -4, // pair 12
        ],
    },
    EncodedMovement {
        name: "5stayr12.1-x",
        rounds: 5,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -3,  -5,  -2,  -4, // table 6
        ],
        seats: &[
              1,  -2,   3,   4,   5, // pair 1
             -1,   5,  -4,  -3,  -2, // pair 2
              2,  -3,   4,   5,   1, // pair 3
             -2,   1,  -6,  -4,  -3, // pair 4
              3,  -4,   5,   1,   2, // pair 5
             -3,   2,  -1,  -5,  -6, // pair 6
              4,  -5,   1,   2,   3, // pair 7
             -4,   6,  -2,  -1,  -5, // pair 8
              5,  -1,   2,   3,   4, // pair 9
             -5,   4,  -3,  -6,  -1, // pair 10
              6,  -6,   6,   6,   6, // pair 11
             -6,   3,  -5,  -2,  -4, // pair 12
        ],
    },
    EncodedMovement {
        name: "6stayr13",
        rounds: 6,
        pairs: 13,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,  -6,   2,  -4,   0,   3, // pair 1
             -1,   5,  -3,   6,  -4,  -2, // pair 2
              2,  -1,   3,   0,   5,   6, // pair 3
             -2,   3,  -1,   4,  -6,  -5, // pair 4
              3,  -5,   4,  -1,   2,   0, // pair 5
             -3,   6,  -5,   2,  -1,  -4, // pair 6
              4,  -2,   0,  -6,   1,   5, // pair 7
             -4,   1,  -6,   5,  -2,  -3, // pair 8
              0,  -4,   5,  -3,   6,   2, // pair 9
             -5,   4,  -2,   1,  -3,  -6, // pair 10
              6,   0,   1,  -5,   3,   4, // pair 11
             -6,   2,  -4,   3,  -5,   1, // pair 12
              5,  -3,   6,  -2,   4,  -1, // pair 13
        ],
    },
    EncodedMovement {
        name: "6stayr13.1-5",
        rounds: 6,
        pairs: 13,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,  -6,   2,  -4,   0,   3, // pair 1
             -1,   5,  -3,   6,  -4,  -2, // pair 2
              2,  -1,   3,   0,   5,   6, // pair 3
             -2,   3,  -1,   4,  -6,  -5, // pair 4
              3,  -5,   4,  -1,   2,   0, // pair 5
             -3,   6,  -5,   2,  -1,  -4, // pair 6
              4,  -2,   0,  -6,   1,   5, // pair 7
             -4,   1,  -6,   5,  -2,  -3, // pair 8
              5,  -3,   6,  -2,   4,  -1, // pair 9
             -5,   4,  -2,   1,  -3,  -6, // pair 10
              6,   0,   1,  -5,   3,   4, // pair 11
             -6,   2,  -4,   3,  -5,   1, // pair 12
              0,  -4,   5,  -3,   6,   2, // pair 13
        ],
    },
    EncodedMovement {
        name: "4stayr14",
        rounds: 4,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -2,  -1,  -1, // table 5
             -2,  -3,  -2,  -3, // table 6
             -3,  -4,  -4,  -4, // table 7
        ],
        seats: &[
              1,  -5,   3,   4, // pair 1
             -5,   3,  -7,  -2, // pair 2
              2,  -1,   4,   3, // pair 3
             -6,   4,  -3,  -5, // pair 4
              3,  -7,   1,   2, // pair 5
             -7,   1,  -6,  -7, // pair 6
              4,  -6,   2,   1, // pair 7
             -4,   2,  -5,  -6, // pair 8
              5,  -4,   6,   6, // pair 9
             -1,   7,  -2,  -3, // pair 10
              6,  -3,   5,   7, // pair 11
             -2,   6,  -1,  -4, // pair 12
              7,  -2,   7,   5, // pair 13
             -3,   5,  -4,  -1, // pair 14
        ],
    },
    EncodedMovement {
        name: "4stayr14.1-x",
        rounds: 4,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -2,  -1,  -1, // table 5
             -2,  -3,  -2,  -3, // table 6
             -3,  -4,  -4,  -4, // table 7
        ],
        seats: &[
              1,  -5,   3,   4, // pair 1
             -1,   3,  -7,  -2, // pair 2
              2,  -1,   4,   3, // pair 3
             -2,   4,  -3,  -5, // pair 4
              3,  -7,   1,   2, // pair 5
             -3,   1,  -6,  -7, // pair 6
              4,  -6,   2,   1, // pair 7
             -4,   2,  -5,  -6, // pair 8
              5,  -4,   6,   6, // pair 9
             -5,   7,  -2,  -3, // pair 10
              6,  -3,   5,   7, // pair 11
             -6,   6,  -1,  -4, // pair 12
              7,  -2,   7,   5, // pair 13
             -7,   5,  -4,  -1, // pair 14
        ],
    },
    EncodedMovement {
        name: "5stayr14",
        rounds: 5,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -3,  -4, // table 6
             -2,  -3,  -5,  -2,  -5, // table 7
        ],
        seats: &[
              1,  -2,   3,   4,   5, // pair 1
             -6,   5,  -4,  -6,  -2, // pair 2
              2,  -3,   4,   5,   1, // pair 3
             -7,   1,  -7,  -4,  -3, // pair 4
              3,  -4,   5,   1,   2, // pair 5
             -3,   2,  -6,  -5,  -6, // pair 6
              4,  -5,   1,   2,   3, // pair 7
             -4,   7,  -2,  -1,  -7, // pair 8
              5,  -1,   2,   3,   4, // pair 9
             -5,   6,  -3,  -7,  -1, // pair 10
              6,  -7,   7,   7,   6, // pair 11
             -1,   3,  -5,  -2,  -4, // pair 12
              7,  -6,   6,   6,   7, // pair 13
             -2,   4,  -1,  -3,  -5, // pair 14
        ],
    },
    EncodedMovement {
        name: "5stayr14.1-x",
        rounds: 5,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -3,  -4, // table 6
             -2,  -3,  -5,  -2,  -5, // table 7
        ],
        seats: &[
              1,  -2,   3,   4,   5, // pair 1
             -1,   5,  -4,  -6,  -2, // pair 2
              2,  -3,   4,   5,   1, // pair 3
             -2,   1,  -7,  -4,  -3, // pair 4
              3,  -4,   5,   1,   2, // pair 5
             -3,   2,  -6,  -5,  -6, // pair 6
              4,  -5,   1,   2,   3, // pair 7
             -4,   7,  -2,  -1,  -7, // pair 8
              5,  -1,   2,   3,   4, // pair 9
             -5,   6,  -3,  -7,  -1, // pair 10
              6,  -7,   7,   7,   6, // pair 11
             -6,   3,  -5,  -2,  -4, // pair 12
              7,  -6,   6,   6,   7, // pair 13
             -7,   4,  -1,  -3,  -5, // pair 14
        ],
    },
    EncodedMovement {
        name: "5stayr14.1-x_bl",
        rounds: 5,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -3,  -4, // table 6
             -2,  -3,  -5,  -2,  -5, // table 7
        ],
        seats: &[
              1,  -2,  -3,   4,   5, // pair 1
             -1,   5,   4,  -6,  -2, // pair 2
              2,  -3,  -4,   5,   1, // pair 3
             -2,   1,   7,  -4,  -3, // pair 4
              3,  -4,  -5,   1,   2, // pair 5
             -3,   2,   6,  -5,  -6, // pair 6
              4,  -5,  -1,   2,   3, // pair 7
             -4,   7,   2,  -1,  -7, // pair 8
              5,  -1,  -2,   3,   4, // pair 9
             -5,   6,   3,  -7,  -1, // pair 10
              6,  -7,  -7,   7,   6, // pair 11
             -6,   3,   5,  -2,  -4, // pair 12
              7,  -6,  -6,   6,   7, // pair 13
             -7,   4,   1,  -3,  -5, // pair 14
        ],
    },
    EncodedMovement {
        name: "5stayr14.1-x_br",
        rounds: 5,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -3,  -4, // table 6
             -2,  -3,  -5,  -2,  -5, // table 7
        ],
        seats: &[
              1,  -2,   3,  -4,   5, // pair 1
             -1,   5,  -4,   6,  -2, // pair 2
              2,  -3,   4,  -5,   1, // pair 3
             -2,   1,  -7,   4,  -3, // pair 4
              3,  -4,   5,  -1,   2, // pair 5
             -3,   2,  -6,   5,  -6, // pair 6
              4,  -5,   1,  -2,   3, // pair 7
             -4,   7,  -2,   1,  -7, // pair 8
              5,  -1,   2,  -3,   4, // pair 9
             -5,   6,  -3,   7,  -1, // pair 10
              6,  -7,   7,  -7,   6, // pair 11
             -6,   3,  -5,   2,  -4, // pair 12
              7,  -6,   6,  -6,   7, // pair 13
             -7,   4,  -1,   3,  -5, // pair 14
        ],
    },
    EncodedMovement {
        name: "5stayr14.1-x_ge",
        rounds: 5,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -3,  -4, // table 6
             -2,  -3,  -5,  -2,  -5, // table 7
        ],
        seats: &[
              1,  -2,   3,   4,  -5, // pair 1
             -1,   5,  -4,  -6,   2, // pair 2
              2,  -3,   4,   5,  -1, // pair 3
             -2,   1,  -7,  -4,   3, // pair 4
              3,  -4,   5,   1,  -2, // pair 5
             -3,   2,  -6,  -5,   6, // pair 6
              4,  -5,   1,   2,  -3, // pair 7
             -4,   7,  -2,  -1,   7, // pair 8
              5,  -1,   2,   3,  -4, // pair 9
             -5,   6,  -3,  -7,   1, // pair 10
              6,  -7,   7,   7,  -6, // pair 11
             -6,   3,  -5,  -2,   4, // pair 12
              7,  -6,   6,   6,  -7, // pair 13
             -7,   4,  -1,  -3,   5, // pair 14
        ],
    },
    EncodedMovement {
        name: "5stayr14.1-x_gr",
        rounds: 5,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -3,  -4, // table 6
             -2,  -3,  -5,  -2,  -5, // table 7
        ],
        seats: &[
              1,  -2,  -3,  -4,   5, // pair 1
             -1,   5,   4,   6,  -2, // pair 2
              2,  -3,  -4,  -5,   1, // pair 3
             -2,   1,   7,   4,  -3, // pair 4
              3,  -4,  -5,  -1,   2, // pair 5
             -3,   2,   6,   5,  -6, // pair 6
              4,  -5,  -1,  -2,   3, // pair 7
             -4,   7,   2,   1,  -7, // pair 8
              5,  -1,  -2,  -3,   4, // pair 9
             -5,   6,   3,   7,  -1, // pair 10
              6,  -7,  -7,  -7,   6, // pair 11
             -6,   3,   5,   2,  -4, // pair 12
              7,  -6,  -6,  -6,   7, // pair 13
             -7,   4,   1,   3,  -5, // pair 14
        ],
    },
    EncodedMovement {
        name: "5stayr14.1-x_ro",
        rounds: 5,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -3,  -4, // table 6
             -2,  -3,  -5,  -2,  -5, // table 7
        ],
        seats: &[
              1,  -2,  -3,   4,  -5, // pair 1
             -1,   5,   4,  -6,   2, // pair 2
              2,  -3,  -4,   5,  -1, // pair 3
             -2,   1,   7,  -4,   3, // pair 4
              3,  -4,  -5,   1,  -2, // pair 5
             -3,   2,   6,  -5,   6, // pair 6
              4,  -5,  -1,   2,  -3, // pair 7
             -4,   7,   2,  -1,   7, // pair 8
              5,  -1,  -2,   3,  -4, // pair 9
             -5,   6,   3,  -7,   1, // pair 10
              6,  -7,  -7,   7,  -6, // pair 11
             -6,   3,   5,  -2,   4, // pair 12
              7,  -6,  -6,   6,  -7, // pair 13
             -7,   4,   1,  -3,   5, // pair 14
        ],
    },
    EncodedMovement {
        name: "5stayr14.1-x_zw",
        rounds: 5,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -3,  -4, // table 6
             -2,  -3,  -5,  -2,  -5, // table 7
        ],
        seats: &[
              1,  -2,   3,  -4,  -5, // pair 1
             -1,   5,  -4,   6,   2, // pair 2
              2,  -3,   4,  -5,  -1, // pair 3
             -2,   1,  -7,   4,   3, // pair 4
              3,  -4,   5,  -1,  -2, // pair 5
             -3,   2,  -6,   5,   6, // pair 6
              4,  -5,   1,  -2,  -3, // pair 7
             -4,   7,  -2,   1,   7, // pair 8
              5,  -1,   2,  -3,  -4, // pair 9
             -5,   6,  -3,   7,   1, // pair 10
              6,  -7,   7,  -7,  -6, // pair 11
             -6,   3,  -5,   2,   4, // pair 12
              7,  -6,   6,  -6,  -7, // pair 13
             -7,   4,  -1,   3,   5, // pair 14
        ],
    },
    EncodedMovement {
        name: "6stayr14",
        rounds: 6,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
        ],
        seats: &[
              1,  -6,   2,  -4,   7,   3, // pair 1
             -1,   5,  -3,   6,  -4,  -2, // pair 2
              2,  -1,   3,  -7,   5,   6, // pair 3
             -2,   3,  -1,   4,  -6,  -5, // pair 4
              3,  -5,   4,  -1,   2,   7, // pair 5
             -3,   6,  -5,   2,  -1,  -4, // pair 6
              4,  -2,   7,  -6,   1,   5, // pair 7
             -4,   1,  -6,   5,  -2,  -3, // pair 8
              7,  -4,   5,  -3,   6,   2, // pair 9
             -5,   4,  -2,   1,  -3,  -6, // pair 10
              6,  -7,   1,  -5,   3,   4, // pair 11
             -6,   2,  -4,   3,  -5,  -1, // pair 12
              5,  -3,   6,  -2,   4,   1, // pair 13
             -7,   7,  -7,   7,  -7,  -7, // pair 14
        ],
    },
    EncodedMovement {
        name: "6stayr14.1-5",
        rounds: 6,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
        ],
        seats: &[
              1,  -6,   2,  -4,   7,   3, // pair 1
             -1,   5,  -3,   6,  -4,  -2, // pair 2
              2,  -1,   3,  -7,   5,   6, // pair 3
             -2,   3,  -1,   4,  -6,  -5, // pair 4
              3,  -5,   4,  -1,   2,   7, // pair 5
             -3,   6,  -5,   2,  -1,  -4, // pair 6
              4,  -2,   7,  -6,   1,   5, // pair 7
             -4,   1,  -6,   5,  -2,  -3, // pair 8
              5,  -3,   6,  -2,   4,   1, // pair 9
             -5,   4,  -2,   1,  -3,  -6, // pair 10
              6,  -7,   1,  -5,   3,   4, // pair 11
             -6,   2,  -4,   3,  -5,  -1, // pair 12
              7,  -4,   5,  -3,   6,   2, // pair 13
             -7,   7,  -7,   7,  -7,  -7, // pair 14
        ],
    },
    EncodedMovement {
        name: "5stayr16",
        rounds: 5,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -4,  -4, // table 6
             -2,  -5,  -5,  -2,  -5, // table 7
             -3,  -3,  -2,  -3,  -1, // table 8
        ],
        seats: &[
              1,  -2,   3,   4,   5, // pair 1
             -6,   7,  -4,  -8,  -2, // pair 2
              2,  -3,   4,   5,   1, // pair 3
             -7,   1,  -7,  -6,  -3, // pair 4
              3,  -4,   5,   1,   2, // pair 5
             -8,   2,  -6,  -5,  -6, // pair 6
              4,  -5,   1,   2,   3, // pair 7
             -4,   8,  -8,  -1,  -7, // pair 8
              5,  -1,   2,   3,   4, // pair 9
             -5,   6,  -3,  -7,  -8, // pair 10
              6,  -8,   7,   7,   6, // pair 11
             -1,   3,  -5,  -2,  -4, // pair 12
              7,  -6,   6,   8,   7, // pair 13
             -2,   4,  -1,  -3,  -5, // pair 14
              8,  -7,   8,   6,   8, // pair 15
             -3,   5,  -2,  -4,  -1, // pair 16
        ],
    },
    EncodedMovement {
        name: "5stayr16.1-x",
        rounds: 5,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -4,  -1,  -4,  -4, // table 6
             -2,  -5,  -5,  -2,  -5, // table 7
             -3,  -3,  -2,  -3,  -1, // table 8
        ],
        seats: &[
              1,  -2,   3,   4,   5, // pair 1
             -1,   7,  -4,  -8,  -2, // pair 2
              2,  -3,   4,   5,   1, // pair 3
             -2,   1,  -7,  -6,  -3, // pair 4
              3,  -4,   5,   1,   2, // pair 5
             -3,   2,  -6,  -5,  -6, // pair 6
              4,  -5,   1,   2,   3, // pair 7
             -4,   8,  -8,  -1,  -7, // pair 8
              5,  -1,   2,   3,   4, // pair 9
             -5,   6,  -3,  -7,  -8, // pair 10
              6,  -8,   7,   7,   6, // pair 11
             -6,   3,  -5,  -2,  -4, // pair 12
              7,  -6,   6,   8,   7, // pair 13
             -7,   4,  -1,  -3,  -5, // pair 14
              8,  -7,   8,   6,   8, // pair 15
             -8,   5,  -2,  -4,  -1, // pair 16
        ],
    },
    EncodedMovement {
        name: "5stayr16.1-x_n",
        rounds: 5,
        pairs: 16,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
              1,   1,   1,   1,   1, // table 6
              2,   2,   2,   2,   2, // table 7
              3,   3,   3,   3,   3, // table 8
              4,   4,   4,   4,   4, // table 9
              5,   5,   5,   5,   5, // table 10
        ],
        seats: &[
              1,  -2,   3,   4,   5, // pair 1
             -1,  10,  -4,  -8,  -2, // pair 2
              2,  -3,   4,   5,   1, // pair 3
             -2,   1, -10,  -9,  -3, // pair 4
              3,  -4,   5,   1,   2, // pair 5
             -3,   2,  -6,  -5,  -9, // pair 6
              4,  -5,   1,   2,   3, // pair 7
             -4,   8,  -7,  -1, -10, // pair 8
              5,  -1,   2,   3,   4, // pair 9
             -5,   9,  -3,  -7,  -6, // pair 10
              6,  -8,  10,   7,   9, // pair 11
             -6,   3,  -5,  -2,  -4, // pair 12
              7,  -9,   6,   8,  10, // pair 13
             -7,   4,  -1,  -3,  -5, // pair 14
              8, -10,   7,   9,   6, // pair 15
             -8,   5,  -2,  -4,  -1, // pair 16
        ],
    },
    EncodedMovement {
        name: "5stayr16.1-x_n_bl",
        rounds: 5,
        pairs: 16,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
              1,   1,   1,   1,   1, // table 6
              2,   2,   2,   2,   2, // table 7
              3,   3,   3,   3,   3, // table 8
              4,   4,   4,   4,   4, // table 9
              5,   5,   5,   5,   5, // table 10
        ],
        seats: &[
              1,  -2,  -3,   4,   5, // pair 1
             -1,  10,   4,  -8,  -2, // pair 2
              2,  -3,  -4,   5,   1, // pair 3
             -2,   1,  10,  -9,  -3, // pair 4
              3,  -4,  -5,   1,   2, // pair 5
             -3,   2,   6,  -5,  -9, // pair 6
              4,  -5,  -1,   2,   3, // pair 7
             -4,   8,   7,  -1, -10, // pair 8
              5,  -1,  -2,   3,   4, // pair 9
             -5,   9,   3,  -7,  -6, // pair 10
              6,  -8, -10,   7,   9, // pair 11
             -6,   3,   5,  -2,  -4, // pair 12
              7,  -9,  -6,   8,  10, // pair 13
             -7,   4,   1,  -3,  -5, // pair 14
              8, -10,  -7,   9,   6, // pair 15
             -8,   5,   2,  -4,  -1, // pair 16
        ],
    },
    EncodedMovement {
        name: "5stayr16.1-x_n_br",
        rounds: 5,
        pairs: 16,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
              1,   1,   1,   1,   1, // table 6
              2,   2,   2,   2,   2, // table 7
              3,   3,   3,   3,   3, // table 8
              4,   4,   4,   4,   4, // table 9
              5,   5,   5,   5,   5, // table 10
        ],
        seats: &[
              1,  -2,   3,  -4,   5, // pair 1
             -1,  10,  -4,   8,  -2, // pair 2
              2,  -3,   4,  -5,   1, // pair 3
             -2,   1, -10,   9,  -3, // pair 4
              3,  -4,   5,  -1,   2, // pair 5
             -3,   2,  -6,   5,  -9, // pair 6
              4,  -5,   1,  -2,   3, // pair 7
             -4,   8,  -7,   1, -10, // pair 8
              5,  -1,   2,  -3,   4, // pair 9
             -5,   9,  -3,   7,  -6, // pair 10
              6,  -8,  10,  -7,   9, // pair 11
             -6,   3,  -5,   2,  -4, // pair 12
              7,  -9,   6,  -8,  10, // pair 13
             -7,   4,  -1,   3,  -5, // pair 14
              8, -10,   7,  -9,   6, // pair 15
             -8,   5,  -2,   4,  -1, // pair 16
        ],
    },
    EncodedMovement {
        name: "5stayr16.1-x_n_ge",
        rounds: 5,
        pairs: 16,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
              1,   1,   1,   1,   1, // table 6
              2,   2,   2,   2,   2, // table 7
              3,   3,   3,   3,   3, // table 8
              4,   4,   4,   4,   4, // table 9
              5,   5,   5,   5,   5, // table 10
        ],
        seats: &[
              1,  -2,   3,   4,  -5, // pair 1
             -1,  10,  -4,  -8,   2, // pair 2
              2,  -3,   4,   5,  -1, // pair 3
             -2,   1, -10,  -9,   3, // pair 4
              3,  -4,   5,   1,  -2, // pair 5
             -3,   2,  -6,  -5,   9, // pair 6
              4,  -5,   1,   2,  -3, // pair 7
             -4,   8,  -7,  -1,  10, // pair 8
              5,  -1,   2,   3,  -4, // pair 9
             -5,   9,  -3,  -7,   6, // pair 10
              6,  -8,  10,   7,  -9, // pair 11
             -6,   3,  -5,  -2,   4, // pair 12
              7,  -9,   6,   8, -10, // pair 13
             -7,   4,  -1,  -3,   5, // pair 14
              8, -10,   7,   9,  -6, // pair 15
             -8,   5,  -2,  -4,   1, // pair 16
        ],
    },
    EncodedMovement {
        name: "5stayr16.1-x_n_gr",
        rounds: 5,
        pairs: 16,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
              1,   1,   1,   1,   1, // table 6
              2,   2,   2,   2,   2, // table 7
              3,   3,   3,   3,   3, // table 8
              4,   4,   4,   4,   4, // table 9
              5,   5,   5,   5,   5, // table 10
        ],
        seats: &[
              1,  -2,  -3,  -4,   5, // pair 1
             -1,  10,   4,   8,  -2, // pair 2
              2,  -3,  -4,  -5,   1, // pair 3
             -2,   1,  10,   9,  -3, // pair 4
              3,  -4,  -5,  -1,   2, // pair 5
             -3,   2,   6,   5,  -9, // pair 6
              4,  -5,  -1,  -2,   3, // pair 7
             -4,   8,   7,   1, -10, // pair 8
              5,  -1,  -2,  -3,   4, // pair 9
             -5,   9,   3,   7,  -6, // pair 10
              6,  -8, -10,  -7,   9, // pair 11
             -6,   3,   5,   2,  -4, // pair 12
              7,  -9,  -6,  -8,  10, // pair 13
             -7,   4,   1,   3,  -5, // pair 14
              8, -10,  -7,  -9,   6, // pair 15
             -8,   5,   2,   4,  -1, // pair 16
        ],
    },
    EncodedMovement {
        name: "5stayr16.1-x_n_ro",
        rounds: 5,
        pairs: 16,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
              1,   1,   1,   1,   1, // table 6
              2,   2,   2,   2,   2, // table 7
              3,   3,   3,   3,   3, // table 8
              4,   4,   4,   4,   4, // table 9
              5,   5,   5,   5,   5, // table 10
        ],
        seats: &[
              1,  -2,  -3,   4,  -5, // pair 1
             -1,  10,   4,  -8,   2, // pair 2
              2,  -3,  -4,   5,  -1, // pair 3
             -2,   1,  10,  -9,   3, // pair 4
              3,  -4,  -5,   1,  -2, // pair 5
             -3,   2,   6,  -5,   9, // pair 6
              4,  -5,  -1,   2,  -3, // pair 7
             -4,   8,   7,  -1,  10, // pair 8
              5,  -1,  -2,   3,  -4, // pair 9
             -5,   9,   3,  -7,   6, // pair 10
              6,  -8, -10,   7,  -9, // pair 11
             -6,   3,   5,  -2,   4, // pair 12
              7,  -9,  -6,   8, -10, // pair 13
             -7,   4,   1,  -3,   5, // pair 14
              8, -10,  -7,   9,  -6, // pair 15
             -8,   5,   2,  -4,   1, // pair 16
        ],
    },
    EncodedMovement {
        name: "5stayr16.1-x_n_zw",
        rounds: 5,
        pairs: 16,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
              1,   1,   1,   1,   1, // table 6
              2,   2,   2,   2,   2, // table 7
              3,   3,   3,   3,   3, // table 8
              4,   4,   4,   4,   4, // table 9
              5,   5,   5,   5,   5, // table 10
        ],
        seats: &[
              1,  -2,   3,  -4,  -5, // pair 1
             -1,  10,  -4,   8,   2, // pair 2
              2,  -3,   4,  -5,  -1, // pair 3
             -2,   1, -10,   9,   3, // pair 4
              3,  -4,   5,  -1,  -2, // pair 5
             -3,   2,  -6,   5,   9, // pair 6
              4,  -5,   1,  -2,  -3, // pair 7
             -4,   8,  -7,   1,  10, // pair 8
              5,  -1,   2,  -3,  -4, // pair 9
             -5,   9,  -3,   7,   6, // pair 10
              6,  -8,  10,  -7,  -9, // pair 11
             -6,   3,  -5,   2,   4, // pair 12
              7,  -9,   6,  -8, -10, // pair 13
             -7,   4,  -1,   3,   5, // pair 14
              8, -10,   7,  -9,  -6, // pair 15
             -8,   5,  -2,   4,   1, // pair 16
        ],
    },
    EncodedMovement {
        name: "6stayr16",
        rounds: 6,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -2,  -3,  -4,  -5,  -6,  -1, // table 8
        ],
        seats: &[
              7,  -6,   3,  -8,   4,   2, // pair 1
             -1,   2,  -3,   6,  -5,  -4, // pair 2
              8,  -1,   6,  -7,   5,   3, // pair 3
             -2,   1,  -5,   3,  -4,  -6, // pair 4
              3,  -7,   1,  -5,   8,   4, // pair 5
             -3,   5,  -4,   1,  -6,  -2, // pair 6
              4,  -8,   5,  -1,   2,   7, // pair 7
             -4,   6,  -1,   2,  -3,  -5, // pair 8
              5,  -4,   7,  -2,   6,   8, // pair 9
             -5,   3,  -6,   4,  -2,  -1, // pair 10
              6,  -2,   8,  -3,   7,   1, // pair 11
             -6,   4,  -2,   5,  -1,  -3, // pair 12
              1,  -5,   2,  -4,   3,   6, // pair 13
             -7,   7,  -7,   7,  -7,  -7, // pair 14
              2,  -3,   4,  -6,   1,   5, // pair 15
             -8,   8,  -8,   8,  -8,  -8, // pair 16
        ],
    },
    EncodedMovement {
        name: "6stayr16.1-5",
        rounds: 6,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -2,  -3,  -4,  -5,  -6,  -1, // table 8
        ],
        seats: &[
              1,  -5,   2,  -4,   3,   6, // pair 1
             -1,   2,  -3,   6,  -5,  -4, // pair 2
              2,  -3,   4,  -6,   1,   5, // pair 3
             -2,   1,  -5,   3,  -4,  -6, // pair 4
              3,  -7,   1,  -5,   8,   4, // pair 5
             -3,   5,  -4,   1,  -6,  -2, // pair 6
              4,  -8,   5,  -1,   2,   7, // pair 7
             -4,   6,  -1,   2,  -3,  -5, // pair 8
              5,  -4,   7,  -2,   6,   8, // pair 9
             -5,   3,  -6,   4,  -2,  -1, // pair 10
              6,  -2,   8,  -3,   7,   1, // pair 11
             -6,   4,  -2,   5,  -1,  -3, // pair 12
              7,  -6,   3,  -8,   4,   2, // pair 13
             -7,   7,  -7,   7,  -7,  -7, // pair 14
              8,  -1,   6,  -7,   5,   3, // pair 15
             -8,   8,  -8,   8,  -8,  -8, // pair 16
        ],
    },
    EncodedMovement {
        name: "7stayr16",
        rounds: 7,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -3,  -5,  -7,  -2,  -4,  -6, // table 8
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -8,   7,   6,  -5,  -4,  -3,  -2, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -2,   1,   7,  -6,  -5,  -8,  -3, // pair 4
              3,  -4,  -8,   6,   7,   1,   2, // pair 5
             -3,   2,   1,  -8,  -6,  -5,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
             -4,   8,   2,  -1,  -7,  -6,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
             -5,   4,   3,  -2,  -1,  -7,  -8, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,   5,   4,  -3,  -8,  -1,  -7, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,   6,   5,  -4,  -3,  -2,  -1, // pair 14
              8,  -8,  -5,   8,   8,   8,   8, // pair 15
             -1,   3,   8,  -7,  -2,  -4,  -6, // pair 16
        ],
    },
    EncodedMovement {
        name: "7stayr16.1-x",
        rounds: 7,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -3,  -5,  -7,  -2,  -4,  -6, // table 8
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -1,   7,   6,  -5,  -4,  -3,  -2, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -2,   1,   7,  -6,  -5,  -8,  -3, // pair 4
              3,  -4,  -8,   6,   7,   1,   2, // pair 5
             -3,   2,   1,  -8,  -6,  -5,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
             -4,   8,   2,  -1,  -7,  -6,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
             -5,   4,   3,  -2,  -1,  -7,  -8, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,   5,   4,  -3,  -8,  -1,  -7, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,   6,   5,  -4,  -3,  -2,  -1, // pair 14
              8,  -8,  -5,   8,   8,   8,   8, // pair 15
             -8,   3,   8,  -7,  -2,  -4,  -6, // pair 16
        ],
    },
    EncodedMovement {
        name: "5stayr18",
        rounds: 5,
        pairs: 18,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
              1,   1,   1,   1,   1, // table 6
              2,   2,   2,   2,   2, // table 7
              3,   3,   3,   3,   3, // table 8
              4,   4,   4,   4,   4, // table 9
              5,   5,   5,   5,   5, // table 10
        ],
        seats: &[
              1,  -2,   3,   4,   5, // pair 1
             -6,  10,  -4,  -8,  -7, // pair 2
              2,  -3,   4,   5,   1, // pair 3
             -7,   6, -10,  -9,  -3, // pair 4
              3,  -4,   5,   1,   2, // pair 5
             -8,   2,  -6, -10,  -9, // pair 6
              4,  -5,   1,   2,   3, // pair 7
             -9,   8,  -7,  -1, -10, // pair 8
              5,  -1,   2,   3,   4, // pair 9
             -5,   9,  -8,  -7,  -6, // pair 10
              6,  -8,  10,   7,   9, // pair 11
             -1,   3,  -5,  -2,  -4, // pair 12
              7,  -9,   6,   8,  10, // pair 13
             -2,   4,  -1,  -3,  -5, // pair 14
              8, -10,   7,   9,   6, // pair 15
             -3,   5,  -2,  -4,  -1, // pair 16
              9,  -6,   8,  10,   7, // pair 17
             -4,   1,  -3,  -5,  -2, // pair 18
        ],
    },
    EncodedMovement {
        name: "5stayr18.1-x",
        rounds: 5,
        pairs: 18,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -1,  -1,  -1,  -1, // table 6
             -2,  -2,  -2,  -2,  -2, // table 7
             -3,  -3,  -3,  -3,  -3, // table 8
             -4,  -4,  -4,  -4,  -4, // table 9
             -5,  -5,  -5,  -5,  -5, // table 10
        ],
        seats: &[
              1,  -2,   3,   4,   5, // pair 1
             -1,   3,  -5,  -2,  -4, // pair 2
              2,  -3,   4,   5,   1, // pair 3
             -2,   4,  -1,  -3,  -5, // pair 4
              3,  -4,   5,   1,   2, // pair 5
             -3,   5,  -2,  -4,  -1, // pair 6
              4,  -5,   1,   2,   3, // pair 7
             -4,   1,  -3,  -5,  -2, // pair 8
              5,  -1,   2,   3,   4, // pair 9
             -5,   9,  -8,  -7,  -6, // pair 10
              6,  -8,  10,   7,   9, // pair 11
             -6,  10,  -4,  -8,  -7, // pair 12
              7,  -9,   6,   8,  10, // pair 13
             -7,   6, -10,  -9,  -3, // pair 14
              8, -10,   7,   9,   6, // pair 15
             -8,   2,  -6, -10,  -9, // pair 16
              9,  -6,   8,  10,   7, // pair 17
             -9,   8,  -7,  -1, -10, // pair 18
        ],
    },
    EncodedMovement {
        name: "6stayr18",
        rounds: 6,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -1,  -1,  -4,  -4,  -4, // table 7
             -2,  -5,  -5,  -5,  -6,  -6, // table 8
             -3,  -3,  -6,  -2,  -2,  -3, // table 9
        ],
        seats: &[
              7,  -4,   5,  -6,   9,   9, // pair 1
             -1,   6,  -5,   3,  -2,  -7, // pair 2
              2,  -3,   9,  -7,   1,   5, // pair 3
             -2,   7,  -8,   4,  -8,  -9, // pair 4
              3,  -8,   1,  -9,   4,   6, // pair 5
             -3,   4,  -2,   8,  -6,  -1, // pair 6
              9,  -5,   6,  -2,   7,   1, // pair 7
             -4,   2,  -6,   5,  -1,  -3, // pair 8
              5,  -9,   4,  -1,   2,   8, // pair 9
             -5,   1,  -9,   9,  -3,  -4, // pair 10
              8,  -6,   7,  -4,   5,   3, // pair 11
             -6,   5,  -3,   1,  -4,  -2, // pair 12
              1,  -2,   3,  -8,   8,   4, // pair 13
             -7,   3,  -4,   2,  -5,  -6, // pair 14
              6,  -7,   2,  -5,   3,   7, // pair 15
             -8,   9,  -1,   6,  -7,  -5, // pair 16
              4,  -1,   8,  -3,   6,   2, // pair 17
             -9,   8,  -7,   7,  -9,  -8, // pair 18
        ],
    },
    EncodedMovement {
        name: "6stayr18.1-5",
        rounds: 6,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -1,  -1,  -4,  -4,  -4, // table 7
             -2,  -5,  -5,  -5,  -6,  -6, // table 8
             -3,  -3,  -6,  -2,  -2,  -3, // table 9
        ],
        seats: &[
              1,  -2,   3,  -8,   8,   4, // pair 1
             -1,   6,  -5,   3,  -2,  -7, // pair 2
              2,  -3,   9,  -7,   1,   5, // pair 3
             -2,   7,  -8,   4,  -8,  -9, // pair 4
              3,  -8,   1,  -9,   4,   6, // pair 5
             -3,   4,  -2,   8,  -6,  -1, // pair 6
              4,  -1,   8,  -3,   6,   2, // pair 7
             -4,   2,  -6,   5,  -1,  -3, // pair 8
              5,  -9,   4,  -1,   2,   8, // pair 9
             -5,   1,  -9,   9,  -3,  -4, // pair 10
              6,  -7,   2,  -5,   3,   7, // pair 11
             -6,   5,  -3,   1,  -4,  -2, // pair 12
              7,  -4,   5,  -6,   9,   9, // pair 13
             -7,   3,  -4,   2,  -5,  -6, // pair 14
              8,  -6,   7,  -4,   5,   3, // pair 15
             -8,   9,  -1,   6,  -7,  -5, // pair 16
              9,  -5,   6,  -2,   7,   1, // pair 17
             -9,   8,  -7,   7,  -9,  -8, // pair 18
        ],
    },
    EncodedMovement {
        name: "7stayr18",
        rounds: 7,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -3,  -5,  -7,  -2,  -4,  -6, // table 8
             -2,  -4,  -6,  -1,  -3,  -5,  -7, // table 9
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -8,   7,   9,  -5,  -4,  -3,  -2, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -9,   1,   7,  -6,  -5,  -8,  -3, // pair 4
              3,  -4,  -8,   6,   7,   1,   2, // pair 5
             -3,   2,   1,  -8,  -6,  -9,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
             -4,   8,   2,  -9,  -7,  -6,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
             -5,   9,   3,  -2,  -1,  -7,  -8, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,   5,   4,  -3,  -8,  -1,  -9, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,   6,   5,  -4,  -9,  -2,  -1, // pair 14
              8,  -8,  -5,   8,   8,   8,   8, // pair 15
             -1,   3,   8,  -7,  -2,  -4,  -6, // pair 16
              9,  -9,  -9,   9,   9,   9,   9, // pair 17
             -2,   4,   6,  -1,  -3,  -5,  -7, // pair 18
        ],
    },
    EncodedMovement {
        name: "7stayr18.1-x",
        rounds: 7,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -3,  -5,  -7,  -2,  -4,  -6, // table 8
             -2,  -4,  -6,  -1,  -3,  -5,  -7, // table 9
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -1,   7,   9,  -5,  -4,  -3,  -2, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -2,   1,   7,  -6,  -5,  -8,  -3, // pair 4
              3,  -4,  -8,   6,   7,   1,   2, // pair 5
             -3,   2,   1,  -8,  -6,  -9,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
             -4,   8,   2,  -9,  -7,  -6,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
             -5,   9,   3,  -2,  -1,  -7,  -8, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,   5,   4,  -3,  -8,  -1,  -9, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,   6,   5,  -4,  -9,  -2,  -1, // pair 14
              8,  -8,  -5,   8,   8,   8,   8, // pair 15
             -8,   3,   8,  -7,  -2,  -4,  -6, // pair 16
              9,  -9,  -9,   9,   9,   9,   9, // pair 17
             -9,   4,   6,  -1,  -3,  -5,  -7, // pair 18
        ],
    },
    EncodedMovement {
        name: "6stayr20",
        rounds: 6,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -1,  -1,  -1,  -4,  -4, // table 7
             -2,  -2,  -2,  -3,  -3,  -2, // table 8
             -3,  -3,  -5,  -5,  -5,  -5, // table 9
             -4,  -4,  -6,  -6,  -6,  -6, // table 10
        ],
        seats: &[
              1,  -9,   6,   9,   2,  -7, // pair 1
             -1,   2,  -9,  -4,  -3,   6, // pair 2
              7,  -3,   8,   6,   9,  -4, // pair 3
             -2,   1,  -5,  -6,  -4,   3, // pair 4
              3,  -5,   4,   1,  10,  -8, // pair 5
             -3,  10,  -1,  -2,  -6,   9, // pair 6
              9,  -8,   9,   7,   7, -10, // pair 7
             -4,   7,  -2,  -3, -10,   5, // pair 8
             10,  -6,   5,   3,   1,  -2, // pair 9
             -5,   8,  -7, -10,  -8,   4, // pair 10
              8, -10,  10,   8,   5,  -1, // pair 11
             -6,   4,  -3,  -5,  -2,   1, // pair 12
              2,  -4,   1,  10,   3,  -5, // pair 13
             -7,   5,  -6,  -8,  -7,   2, // pair 14
              6,  -1,   2,   4,   8,  -9, // pair 15
             -8,   3,  -4,  -9,  -1,  10, // pair 16
              4,  -2,   7,   5,   6,  -3, // pair 17
             -9,   6,  -8,  -1,  -5,   7, // pair 18
              5,  -7,   3,   2,   4,  -6, // pair 19
            -10,   9, -10,  -7,  -9,   8, // pair 20
        ],
    },
    EncodedMovement {
        name: "6stayr20.1-5",
        rounds: 6,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -1,  -1,  -1,  -4,  -4, // table 7
             -2,  -2,  -2,  -3,  -3,  -2, // table 8
             -3,  -3,  -5,  -5,  -5,  -5, // table 9
             -4,  -4,  -6,  -6,  -6,  -6, // table 10
        ],
        seats: &[
              1,  -9,   6,   9,   2,  -7, // pair 1
             -1,   2,  -9,  -4,  -3,   6, // pair 2
              2,  -4,   1,  10,   3,  -5, // pair 3
             -2,   1,  -5,  -6,  -4,   3, // pair 4
              3,  -5,   4,   1,  10,  -8, // pair 5
             -3,  10,  -1,  -2,  -6,   9, // pair 6
              4,  -2,   7,   5,   6,  -3, // pair 7
             -4,   7,  -2,  -3, -10,   5, // pair 8
              5,  -7,   3,   2,   4,  -6, // pair 9
             -5,   8,  -7, -10,  -8,   4, // pair 10
              6,  -1,   2,   4,   8,  -9, // pair 11
             -6,   4,  -3,  -5,  -2,   1, // pair 12
              7,  -3,   8,   6,   9,  -4, // pair 13
             -7,   5,  -6,  -8,  -7,   2, // pair 14
              8, -10,  10,   8,   5,  -1, // pair 15
             -8,   3,  -4,  -9,  -1,  10, // pair 16
              9,  -8,   9,   7,   7, -10, // pair 17
             -9,   6,  -8,  -1,  -5,   7, // pair 18
             10,  -6,   5,   3,   1,  -2, // pair 19
            -10,   9, -10,  -7,  -9,   8, // pair 20
        ],
    },
    EncodedMovement {
        name: "7stayr20",
        rounds: 7,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -3,  -5,  -7,  -2,  -4,  -6, // table 8
             -2,  -4,  -6,  -1,  -3,  -5,  -7, // table 9
             -3,  -5,  -7,  -2,  -4,  -6,  -1, // table 10
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -8,   7,   9,  -5, -10,  -3,  -2, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -9,   1,  10,  -6,  -5,  -8,  -3, // pair 4
              3,  -4,  -8,   6,   7,   1,   2, // pair 5
            -10,   2,   1,  -8,  -6,  -9,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
             -4,   8,   2,  -9,  -7, -10,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
             -5,   9,   3, -10,  -1,  -7,  -8, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,  10,   4,  -3,  -8,  -1,  -9, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,   6,   5,  -4,  -9,  -2, -10, // pair 14
              8,  -8,  -5,   8,   8,   8,   8, // pair 15
             -1,   3,   8,  -7,  -2,  -4,  -6, // pair 16
              9,  -9,  -9,   9,   9,   9,   9, // pair 17
             -2,   4,   6,  -1,  -3,  -5,  -7, // pair 18
             10, -10, -10,  10,  10,  10,  10, // pair 19
             -3,   5,   7,  -2,  -4,  -6,  -1, // pair 20
        ],
    },
    EncodedMovement {
        name: "7stayr20.1-x",
        rounds: 7,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -3,  -5,  -7,  -2,  -4,  -6, // table 8
             -2,  -4,  -6,  -1,  -3,  -5,  -7, // table 9
             -3,  -5,  -7,  -2,  -4,  -6,  -1, // table 10
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -1,   7,   9,  -5, -10,  -3,  -2, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -2,   1,  10,  -6,  -5,  -8,  -3, // pair 4
              3,  -4,  -8,   6,   7,   1,   2, // pair 5
             -3,   2,   1,  -8,  -6,  -9,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
             -4,   8,   2,  -9,  -7, -10,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
             -5,   9,   3, -10,  -1,  -7,  -8, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,  10,   4,  -3,  -8,  -1,  -9, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,   6,   5,  -4,  -9,  -2, -10, // pair 14
              8,  -8,  -5,   8,   8,   8,   8, // pair 15
             -8,   3,   8,  -7,  -2,  -4,  -6, // pair 16
              9,  -9,  -9,   9,   9,   9,   9, // pair 17
             -9,   4,   6,  -1,  -3,  -5,  -7, // pair 18
             10, -10, -10,  10,  10,  10,  10, // pair 19
            -10,   5,   7,  -2,  -4,  -6,  -1, // pair 20
        ],
    },
    EncodedMovement {
        name: "6stayr22",
        rounds: 6,
        pairs: 22,
        tables: 12,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -1,  -1,  -1,  -1,  -1, // table 7
             -2,  -2,  -2,  -2,  -2,  -2, // table 8
             -3,  -3,  -3,  -3,  -3,  -3, // table 9
             -4,  -4,  -2,  -4,  -4,  -4, // table 10
             -5,  -5,  -5,  -5,  -5,  -5, // table 11
             -6,  -6,  -6,  -6,  -6,  -6, // table 12
        ],
        seats: &[
             11,  -2,   3, -10,  12,   1, // pair 1
             -1,   9,  -4,  11,  -6,  -2, // pair 2
              7,  -8,   4, -12,  11,   9, // pair 3
             -2,   5,  -7,   6,  -3, -10, // pair 4
              8,  -1,   6,  -3,  10,  11, // pair 5
             -3,   6,  -5,   2,  -4,  -1, // pair 6
              9,  -7,  11,  -4,   2,  12, // pair 7
             -4,  12,  -1,   5,  -2,  -3, // pair 8
             10,  -5,  12,  -7,   9,   8, // pair 9
             -5,   4,  -2,   3,  -1,  -6, // pair 10
              6, -10,   9,  -8,   7,   5, // pair 11
             -6,   3, -10,   1,  -5,  -4, // pair 12
              2,  -4,   5,  -1,   6,   3, // pair 13
             -7,   2,  -6,   4,  -9,  -5, // pair 14
              3, -12,  10, -11,   1,  10, // pair 15
             -8,  10, -11,   7, -12,  -9, // pair 16
              4,  -9,   7,  -2,   5,   6, // pair 17
             -9,   8, -12,  10,  -7, -11, // pair 18
              5,  -3,   1,  -6,   4,   2, // pair 19
            -10,   1,  -3,   8, -11, -12, // pair 20
              1,  -6,   2,  -5,   3,   4, // pair 21
            -11,   7,  -9,  12, -10,  -8, // pair 22
        ],
    },
    EncodedMovement {
        name: "6stayr22.1-5",
        rounds: 6,
        pairs: 22,
        tables: 12,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -1,  -1,  -1,  -1,  -1, // table 7
             -2,  -2,  -2,  -2,  -2,  -2, // table 8
             -3,  -3,  -3,  -3,  -3,  -3, // table 9
             -4,  -4,  -2,  -4,  -4,  -4, // table 10
             -5,  -5,  -5,  -5,  -5,  -5, // table 11
             -6,  -6,  -6,  -6,  -6,  -6, // table 12
        ],
        seats: &[
              1,  -6,   2,  -5,   3,   4, // pair 1
             -1,   9,  -4,  11,  -6,  -2, // pair 2
              2,  -4,   5,  -1,   6,   3, // pair 3
             -2,   5,  -7,   6,  -3, -10, // pair 4
              3, -12,  10, -11,   1,  10, // pair 5
             -3,   6,  -5,   2,  -4,  -1, // pair 6
              4,  -9,   7,  -2,   5,   6, // pair 7
             -4,  12,  -1,   5,  -2,  -3, // pair 8
              5,  -3,   1,  -6,   4,   2, // pair 9
             -5,   4,  -2,   3,  -1,  -6, // pair 10
              6, -10,   9,  -8,   7,   5, // pair 11
             -6,   3, -10,   1,  -5,  -4, // pair 12
              7,  -8,   4, -12,  11,   9, // pair 13
             -7,   2,  -6,   4,  -9,  -5, // pair 14
              8,  -1,   6,  -3,  10,  11, // pair 15
             -8,  10, -11,   7, -12,  -9, // pair 16
              9,  -7,  11,  -4,   2,  12, // pair 17
             -9,   8, -12,  10,  -7, -11, // pair 18
             10,  -5,  12,  -7,   9,   8, // pair 19
            -10,   1,  -3,   8, -11, -12, // pair 20
             11,  -2,   3, -10,  12,   1, // pair 21
            -11,   7,  -9,  12, -10,  -8, // pair 22
        ],
    },
    EncodedMovement {
        name: "7stayr22",
        rounds: 7,
        pairs: 22,
        tables: 11,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -3,  -5,  -7,  -2,  -4,  -6, // table 8
             -2,  -4,  -6,  -1,  -3,  -5,  -7, // table 9
             -3,  -5,  -7,  -2,  -4,  -6,  -1, // table 10
             -4,  -6,  -1,  -3,  -5,  -7,  -2, // table 11
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -8,   7,   9,  -5, -10,  -3, -11, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -9,   1,  10,  -6, -11,  -8,  -3, // pair 4
              3,  -4,  -8,   6,   7,   1,   2, // pair 5
            -10,   2,  11,  -8,  -6,  -9,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
            -11,   8,   2,  -9,  -7, -10,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
             -5,   9,   3, -10,  -1, -11,  -8, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,  10,   4, -11,  -8,  -1,  -9, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,  11,   5,  -4,  -9,  -2, -10, // pair 14
              8,  -8,  -5,   8,   8,   8,   8, // pair 15
             -1,   3,   8,  -7,  -2,  -4,  -6, // pair 16
              9,  -9,  -9,   9,   9,   9,   9, // pair 17
             -2,   4,   6,  -1,  -3,  -5,  -7, // pair 18
             10, -10, -10,  10,  10,  10,  10, // pair 19
             -3,   5,   7,  -2,  -4,  -6,  -1, // pair 20
             11, -11, -11,  11,  11,  11,  11, // pair 21
             -4,   6,   1,  -3,  -5,  -7,  -2, // pair 22
        ],
    },
    EncodedMovement {
        name: "7stayr22.1-x",
        rounds: 7,
        pairs: 22,
        tables: 11,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -3,  -5,  -7,  -2,  -4,  -6, // table 8
             -2,  -4,  -6,  -1,  -3,  -5,  -7, // table 9
             -3,  -5,  -7,  -2,  -4,  -6,  -1, // table 10
             -4,  -6,  -1,  -3,  -5,  -7,  -2, // table 11
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -1,   7,   9,  -5, -10,  -3, -11, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -2,   1,  10,  -6, -11,  -8,  -3, // pair 4
              3,  -4,  -8,   6,   7,   1,   2, // pair 5
             -3,   2,  11,  -8,  -6,  -9,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
             -4,   8,   2,  -9,  -7, -10,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
             -5,   9,   3, -10,  -1, -11,  -8, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,  10,   4, -11,  -8,  -1,  -9, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,  11,   5,  -4,  -9,  -2, -10, // pair 14
              8,  -8,  -5,   8,   8,   8,   8, // pair 15
             -8,   3,   8,  -7,  -2,  -4,  -6, // pair 16
              9,  -9,  -9,   9,   9,   9,   9, // pair 17
             -9,   4,   6,  -1,  -3,  -5,  -7, // pair 18
             10, -10, -10,  10,  10,  10,  10, // pair 19
            -10,   5,   7,  -2,  -4,  -6,  -1, // pair 20
             11, -11, -11,  11,  11,  11,  11, // pair 21
            -11,   6,   1,  -3,  -5,  -7,  -2, // pair 22
        ],
    },
    EncodedMovement {
        name: "7stayr24",
        rounds: 7,
        pairs: 24,
        tables: 12,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -3,  -5,  -7,  -2,  -4,  -6, // table 8
             -2,  -4,  -6,  -1,  -3,  -5,  -7, // table 9
             -3,  -5,  -7,  -2,  -4,  -6,  -1, // table 10
             -4,  -6,  -1,  -3,  -5,  -7,  -2, // table 11
             -5,  -7,  -2,  -4,  -6,  -1,  -3, // table 12
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -8,  12,   9,  -5, -10,  -3, -11, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -9,   1,  10,  -6, -11,  -8, -12, // pair 4
              3,  -4,  -8,   6,   7,   1,   2, // pair 5
            -10,   2,  11,  -8, -12,  -9,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
            -11,   8,  12,  -9,  -7, -10,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
            -12,   9,   3, -10,  -1, -11,  -8, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,  10,   4, -11,  -8, -12,  -9, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,  11,   5, -12,  -9,  -2, -10, // pair 14
              8,  -8,  -5,   8,   8,   8,   8, // pair 15
             -1,   3,   8,  -7,  -2,  -4,  -6, // pair 16
              9,  -9,  -9,   9,   9,   9,   9, // pair 17
             -2,   4,   6,  -1,  -3,  -5,  -7, // pair 18
             10, -10, -10,  10,  10,  10,  10, // pair 19
             -3,   5,   7,  -2,  -4,  -6,  -1, // pair 20
             11, -11, -11,  11,  11,  11,  11, // pair 21
             -4,   6,   1,  -3,  -5,  -7,  -2, // pair 22
             12, -12, -12,  12,  12,  12,  12, // pair 23
             -5,   7,   2,  -4,  -6,  -1,  -3, // pair 24
        ],
    },
    EncodedMovement {
        name: "7stayr24.1-x",
        rounds: 7,
        pairs: 24,
        tables: 12,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -3,  -5,  -7,  -2,  -4,  -6, // table 8
             -2,  -4,  -6,  -1,  -3,  -5,  -7, // table 9
             -3,  -5,  -7,  -2,  -4,  -6,  -1, // table 10
             -4,  -6,  -1,  -3,  -5,  -7,  -2, // table 11
             -5,  -7,  -2,  -4,  -6,  -1,  -3, // table 12
        ],
        seats: &[
              1,  -2,  -3,   4,   5,   6,   7, // pair 1
             -1,  12,   9,  -5, -10,  -3, -11, // pair 2
              2,  -3,  -4,   5,   6,   7,   1, // pair 3
             -2,   1,  10,  -6, -11,  -8, -12, // pair 4
              3,  -4,  -8,   6,   7,   1,   2, // pair 5
             -3,   2,  11,  -8, -12,  -9,  -4, // pair 6
              4,  -5,  -6,   7,   1,   2,   3, // pair 7
             -4,   8,  12,  -9,  -7, -10,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,   4, // pair 9
             -5,   9,   3, -10,  -1, -11,  -8, // pair 10
              6,  -7,  -1,   2,   3,   4,   5, // pair 11
             -6,  10,   4, -11,  -8, -12,  -9, // pair 12
              7,  -1,  -2,   3,   4,   5,   6, // pair 13
             -7,  11,   5, -12,  -9,  -2, -10, // pair 14
              8,  -8,  -5,   8,   8,   8,   8, // pair 15
             -8,   3,   8,  -7,  -2,  -4,  -6, // pair 16
              9,  -9,  -9,   9,   9,   9,   9, // pair 17
             -9,   4,   6,  -1,  -3,  -5,  -7, // pair 18
             10, -10, -10,  10,  10,  10,  10, // pair 19
            -10,   5,   7,  -2,  -4,  -6,  -1, // pair 20
             11, -11, -11,  11,  11,  11,  11, // pair 21
            -11,   6,   1,  -3,  -5,  -7,  -2, // pair 22
             12, -12, -12,  12,  12,  12,  12, // pair 23
            -12,   7,   2,  -4,  -6,  -1,  -3, // pair 24
        ],
    },
    EncodedMovement {
        name: "7stayr26",
        rounds: 7,
        pairs: 26,
        tables: 14,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
              1,   1,   1,   1,   1,   1,   1, // table 8
              2,   2,   2,   2,   2,   2,   2, // table 9
              3,   3,   3,   3,   3,   3,   3, // table 10
              4,   4,   4,   4,   4,   4,   4, // table 11
              5,   5,   5,   5,   5,   5,   5, // table 12
              6,   6,   6,   6,   6,   6,   6, // table 13
              7,   7,   7,   7,   7,   7,   7, // table 14
        ],
        seats: &[
              8,  -2,  -3,  11,  12,  13,  14, // pair 1
             -1,  14,  13,  -5,  -4,  -3,  -2, // pair 2
              9,  -3,  -4,  12,  13,  14,   8, // pair 3
             -2,   8,  14,  -6,  -5,  -4,  -3, // pair 4
             10,  -4,  -5,   6,  14,   8,   9, // pair 5
             -3,   2,   8,  -7,  -6,  -5,  -4, // pair 6
             11,  -5,  -6,  14,   1,   9,  10, // pair 7
             -4,  10,   9,  -1,  -7,  -6,  -5, // pair 8
             12,  -6,  -7,   8,   9,   3,  11, // pair 9
             -5,  11,  10,  -2,  -1,  -7,  -6, // pair 10
             13,  -7,  -1,   9,  10,  11,   5, // pair 11
             -6,  12,   4,  -3,  -2,  -1,  -7, // pair 12
              7,  -1,  -2,  10,  11,  12,  13, // pair 13
             -7,  13,  12,  -4,  -3,  -2,  -1, // pair 14
              1, -10, -12,   7,   2,   4,   6, // pair 15
             -8,   3,   5, -14,  -9, -11, -13, // pair 16
              2, -11, -13,   1,   3,   5,   7, // pair 17
             -9,   4,   6,  -8, -10, -12, -14, // pair 18
              3, -12, -14,   2,   4,   6,   1, // pair 19
            -10,   5,   7,  -9, -11, -13,  -8, // pair 20
              4, -13,  -8,   3,   5,   7,   2, // pair 21
            -11,   6,   1, -10, -12, -14,  -9, // pair 22
              5, -14,  -9,   4,   6,   1,   3, // pair 23
            -12,   7,   2, -11, -13,  -8, -10, // pair 24
              6,  -8, -10,   5,   7,   2,   4, // pair 25
            -13,   1,   3, -12, -14,  -9, -11, // pair 26
        ],
    },
    EncodedMovement {
        name: "7stayr26.1-x",
        rounds: 7,
        pairs: 26,
        tables: 14,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
              1,   1,   1,   1,   1,   1,   1, // table 8
              2,   2,   2,   2,   2,   2,   2, // table 9
              3,   3,   3,   3,   3,   3,   3, // table 10
              4,   4,   4,   4,   4,   4,   4, // table 11
              5,   5,   5,   5,   5,   5,   5, // table 12
              6,   6,   6,   6,   6,   6,   6, // table 13
              7,   7,   7,   7,   7,   7,   7, // table 14
        ],
        seats: &[
              1,  -2,  -3,  11,  12,  13,  14, // pair 1
             -1,  14,  13,  -5,  -4,  -3,  -2, // pair 2
              2,  -3,  -4,  12,  13,  14,   8, // pair 3
             -2,   8,  14,  -6,  -5,  -4,  -3, // pair 4
              3,  -4,  -5,   6,  14,   8,   9, // pair 5
             -3,   2,   8,  -7,  -6,  -5,  -4, // pair 6
              4,  -5,  -6,  14,   1,   9,  10, // pair 7
             -4,  10,   9,  -1,  -7,  -6,  -5, // pair 8
              5,  -6,  -7,   8,   9,   3,  11, // pair 9
             -5,  11,  10,  -2,  -1,  -7,  -6, // pair 10
              6,  -7,  -1,   9,  10,  11,   5, // pair 11
             -6,  12,   4,  -3,  -2,  -1,  -7, // pair 12
              7,  -1,  -2,  10,  11,  12,  13, // pair 13
             -7,  13,  12,  -4,  -3,  -2,  -1, // pair 14
              8, -10, -12,   7,   2,   4,   6, // pair 15
             -8,   3,   5, -14,  -9, -11, -13, // pair 16
              9, -11, -13,   1,   3,   5,   7, // pair 17
             -9,   4,   6,  -8, -10, -12, -14, // pair 18
             10, -12, -14,   2,   4,   6,   1, // pair 19
            -10,   5,   7,  -9, -11, -13,  -8, // pair 20
             11, -13,  -8,   3,   5,   7,   2, // pair 21
            -11,   6,   1, -10, -12, -14,  -9, // pair 22
             12, -14,  -9,   4,   6,   1,   3, // pair 23
            -12,   7,   2, -11, -13,  -8, -10, // pair 24
             13,  -8, -10,   5,   7,   2,   4, // pair 25
            -13,   1,   3, -12, -14,  -9, -11, // pair 26
        ],
    },
    EncodedMovement {
        name: "7txx8",
        rounds: 7,
        pairs: 8,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
        ],
        seats: &[
              1,   6,   7,   2,   5,   3,   4, // pair 1
             -1,   4,   3,  -7,   2,  -6,  -5, // pair 2
              2,  -1,   6,  -4,  -7,  -3,   5, // pair 3
             -2,  -4,  -7,   6,   1,  -5,   3, // pair 4
              3,   5,  -6,   7,  -1,  -2,  -4, // pair 5
             -3,  -6,   1,   4,  -2,   5,  -7, // pair 6
              4,  -5,  -1,  -2,   7,   6,  -3, // pair 7
             -4,   1,  -3,  -6,  -5,   2,   7, // pair 8
        ],
    },
    EncodedMovement {
        name: "7txx10",
        rounds: 7,
        pairs: 10,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
        ],
        seats: &[
              1,   5,  -2,  -3,   4,  -6,   7, // pair 1
             -1,  -4,   3,  -2,  -7,  -5,   6, // pair 2
              2,  -7,   5,   4,  -1,  -3,  -6, // pair 3
             -2,   1,  -3,  -6,   5,  -7,  -4, // pair 4
              3,   7,   6,  -1,  -4,   5,  -2, // pair 5
             -3,   4,  -5,   6,  -2,   1,  -7, // pair 6
              4,  -6,  -7,   3,  -5,  -1,   2, // pair 7
             -4,  -5,  -6,   2,   1,   7,   3, // pair 8
              5,   6,   2,   1,   7,   3,   4, // pair 9
             -5,  -1,   7,  -4,   2,   6,  -3, // pair 10
        ],
    },
    EncodedMovement {
        name: "7txx12",
        rounds: 7,
        pairs: 12,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
        ],
        seats: &[
              1,   3,   2,  -5,  -7,  -6,   4, // pair 1
             -1,   5,  -6,   7,   4,  -3,  -2, // pair 2
              2,   1,  -3,  -6,  -4,  -7,  -5, // pair 3
             -2,  -4,  -1,   5,  -6,   3,   7, // pair 4
              3,  -2,  -7,   1,   6,   4,   5, // pair 5
             -3,  -5,   4,   2,   7,  -1,   6, // pair 6
              4,  -3,   6,  -2,  -1,   5,  -7, // pair 7
             -4,   2,   1,  -3,   5,   7,  -6, // pair 8
              5,   7,  -4,   3,   1,   6,   2, // pair 9
             -5,   4,   7,   6,   2,   1,   3, // pair 10
              6,  -1,  -2,  -7,  -5,  -4,  -3, // pair 11
             -6,  -7,   3,  -1,  -2,  -5,  -4, // pair 12
        ],
    },
    EncodedMovement {
        name: "7txx14",
        rounds: 7,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
        ],
        seats: &[
              1,   2,   3,   4,  -5,  -6,  -7, // pair 1
             -1,   7,   6,   5,  -4,  -3,  -2, // pair 2
              2,  -3,  -4,  -5,   6,   7,  -1, // pair 3
             -2,   1,   7,   6,   5,  -4,  -3, // pair 4
              3,   4,   5,  -6,  -7,   1,   2, // pair 5
             -3,  -2,   1,  -7,  -6,  -5,   4, // pair 6
              4,  -5,  -6,   7,  -1,  -2,   3, // pair 7
             -4,   3,   2,  -1,   7,   6,  -5, // pair 8
              5,  -6,  -7,   1,   2,   3,  -4, // pair 9
             -5,  -4,  -3,   2,   1,  -7,  -6, // pair 10
              6,  -7,  -1,  -2,   3,   4,   5, // pair 11
             -6,   5,   4,   3,  -2,  -1,   7, // pair 12
              7,  -1,  -2,  -3,   4,   5,   6, // pair 13
             -7,   6,  -5,  -4,  -3,   2,   1, // pair 14
        ],
    },
    EncodedMovement {
        name: "7txx16",
        rounds: 7,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
        ],
        seats: &[
              1,   2,   3,   4,  -5,  -6,  -7, // pair 1
             -1,  -4,  -7,   3,   6,   2,   5, // pair 2
              2,   4,  -6,  -1,  -3,  -5,  -8, // pair 3
             -2,  -5,   1,  -4,   7,  -3,  -6, // pair 4
              3,   5,   7,  -2,   4,  -8,  -1, // pair 5
             -3,  -6,   2,  -5,  -1,   4,   7, // pair 6
              4,   6,  -1,  -3,  -8,   7,   2, // pair 7
             -4,  -7,  -3,   6,  -2,   5,   1, // pair 8
              5,   7,  -2,   8,  -6,  -1,  -3, // pair 9
             -5,  -1,   4,   7,   3,   6,  -2, // pair 10
              6,   1,   8,   5,  -7,  -2,  -4, // pair 11
             -6,  -2,   5,   1,  -4,  -7,   3, // pair 12
              7,   8,  -4,  -6,   1,   3,  -5, // pair 13
             -7,  -3,   6,   2,   5,   1,   4, // pair 14
              8,   3,  -5,  -7,   2,  -4,   6, // pair 15
             -8,  -8,  -8,  -8,   8,   8,   8, // pair 16
        ],
    },
    EncodedMovement {
        name: "7txx18",
        rounds: 7,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
        ],
        seats: &[
              1,   2,   3,   4,  -5,  -6,  -7, // pair 1
             -1,  -4,  -7,   3,  -6,   2,   5, // pair 2
              2,   3,  -4,   5,   6,  -7,  -1, // pair 3
             -2,  -5,  -1,  -4,  -7,   3,   6, // pair 4
              3,   5,   7,  -2,   4,  -8,  -9, // pair 5
             -3,  -6,   2,  -5,  -1,   4,   7, // pair 6
              4,   6,   1,  -3,  -8,  -9,   2, // pair 7
             -4,  -7,  -3,   6,  -2,  -5,   1, // pair 8
              5,   7,  -2,   8,  -9,  -1,  -3, // pair 9
             -5,  -1,   4,   7,  -3,   6,  -2, // pair 10
              6,   1,   8,  -9,   7,  -2,  -4, // pair 11
             -6,  -2,  -5,   1,  -4,   7,   3, // pair 12
              7,   8,   9,  -6,   1,  -3,  -5, // pair 13
             -7,  -3,   6,   2,   5,   1,   4, // pair 14
              8,   9,   5,  -7,   2,  -4,  -6, // pair 15
             -8,  -8,  -8,  -8,   8,   8,   8, // pair 16
              9,   4,  -6,  -1,   3,   5,  -8, // pair 17
             -9,  -9,  -9,   9,   9,   9,   9, // pair 18
        ],
    },
    EncodedMovement {
        name: "7t8",
        rounds: 7,
        pairs: 8,
        tables: 4,
        boards: &[
              1,   6,   7,   2,   5,   3,   4, // table 1
              2,   5,   3,   4,   1,   6,   7, // table 2
              3,   4,   1,   6,   7,   2,   5, // table 3
              4,   1,   6,   7,   2,   5,   3, // table 4
        ],
        seats: &[
              1,   1,   1,   1,   1,   1,   1, // pair 1
             -1,   3,   2,  -4,   4,  -2,  -3, // pair 2
              2,  -4,   4,  -2,  -3,  -1,   3, // pair 3
             -2,  -3,  -1,   3,   2,  -4,   4, // pair 4
              3,   2,  -4,   4,  -2,  -3,  -1, // pair 5
             -3,  -1,   3,   2,  -4,   4,  -2, // pair 6
              4,  -2,  -3,  -1,   3,   2,  -4, // pair 7
             -4,   4,  -2,  -3,  -1,   3,   2, // pair 8
        ],
    },
    EncodedMovement {
        name: "7t10",
        rounds: 7,
        pairs: 10,
        tables: 5,
        boards: &[
              1,   2,   5,   3,   6,   7,   4, // table 1
              2,   1,   6,   7,   5,   3,   7, // table 2
              3,   6,   7,   5,   3,   4,   1, // table 3
              4,   5,   1,   6,   4,   2,   2, // table 4
              5,   4,   2,   1,   7,   6,   3, // table 5
        ],
        seats: &[
              1,   4,  -5,  -4,  -4,  -2,   2, // pair 1
             -1,   1,  -1,   1,  -1,  -1,  -1, // pair 2
              2,   3,   1,  -5,   3,  -3,  -2, // pair 3
             -2,   2,   2,  -2,   2,   2,   1, // pair 4
              3,  -1,  -2,   3,   5,   3,   3, // pair 5
             -3,  -5,   4,   4,  -2,   1,   4, // pair 6
              4,  -4,  -4,   2,   1,  -4,   5, // pair 7
             -4,  -2,   3,  -3,  -3,   5,  -4, // pair 8
              5,  -3,  -3,  -1,   4,   4,  -3, // pair 9
             -5,   5,   5,   5,  -5,  -5,  -5, // pair 10
        ],
    },
    EncodedMovement {
        name: "7t14",
        rounds: 7,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
        ],
        seats: &[
              1,   6,  -7,  -2,  -3,  -4,  -5, // pair 1
             -1,  -4,   6,   5,  -2,  -7,  -3, // pair 2
              2,   4,   5,  -3,  -1,  -6,   7, // pair 3
             -2,   3,   1,  -6,   5,   7,  -4, // pair 4
              3,   2,  -5,  -1,  -7,   4,   6, // pair 5
             -3,  -5,  -6,  -7,  -4,  -2,  -1, // pair 6
              4,  -1,   2,   6,   7,   5,   3, // pair 7
             -4,  -7,  -1,   3,   6,   2,   5, // pair 8
              5,   1,  -4,   7,   3,   6,   2, // pair 9
             -5,  -2,   7,  -4,  -6,  -3,   1, // pair 10
              6,   7,  -3,   1,   2,  -5,   4, // pair 11
             -6,  -3,  -2,  -5,   4,   1,  -7, // pair 12
              7,   5,   4,   2,   1,   3,  -6, // pair 13
             -7,  -6,   3,   4,  -5,  -1,  -2, // pair 14
        ],
    },
    EncodedMovement {
        name: "7t16",
        rounds: 7,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
        ],
        seats: &[
              1,  -6,   7,  -5,  -4,  -3,  -2, // pair 1
             -1,  -7,  -8,  -8,  -6,  -2,  -5, // pair 2
              2,   6,  -5,   7,   3,   4,   1, // pair 3
             -2,   3,   4,  -1,   6,   5,  -7, // pair 4
              3,   7,   1,  -2,   8,  -6,   4, // pair 5
             -3,   8,  -4,   5,  -1,   7,   6, // pair 6
              4,  -3,  -7,   2,   5,   8,  -1, // pair 7
             -4,   1,  -2,  -6,  -3,  -7,   5, // pair 8
              5,  -1,   3,   4,   2,   6,   7, // pair 9
             -5,  -8,  -6,   8,   7,  -1,   3, // pair 10
              6,  -2,   8,  -4,  -8,   1,   8, // pair 11
             -6,  -5,  -3,   1,  -7,   2,  -4, // pair 12
              7,   2,  -1,   6,   4,  -5,  -3, // pair 13
             -7,  -4,   5,   3,   1,  -8,   2, // pair 14
              8,   4,   2,  -7,  -5,   3,  -6, // pair 15
             -8,   5,   6,  -3,  -2,  -4,  -8, // pair 16
        ],
    },
    EncodedMovement {
        name: "7t18",
        rounds: 7,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
        ],
        seats: &[
              1,  -7,  -2,   4,   5,   6,   3, // pair 1
             -1,   9,   9,   2,  -9,  -5,  -7, // pair 2
              2,   4,  -5,  -3,   9,   1,   8, // pair 3
             -2,   3,  -1,  -5,   6,   9,  -4, // pair 4
              3,   5,   2,  -6,   1,   4,  -8, // pair 5
             -3,   8,  -9,  -7,  -8,  -8,   9, // pair 6
              4,   6,  -7,   1,   8,   2,  -3, // pair 7
             -4,   1,  -6,   7,  -5,   3,   2, // pair 8
              5,  -6,   8,  -2,  -7,  -4,   1, // pair 9
             -5,  -2,  -4,   3,  -6,  -7,  -9, // pair 10
              6,  -3,   4,   9,   2,  -1,   7, // pair 11
             -6,  -8,   5,   8,  -3,  -9,  -1, // pair 12
              7,  -5,  -3,  -1,   4,  -6,  -2, // pair 13
             -7,  -9,   6,  -8,  -1,  -2,  -5, // pair 14
              8,   2,   7,   6,   3,   5,   4, // pair 15
             -8,  -4,  -8,   5,  -2,   7,   6, // pair 16
              9,  -1,   3,  -4,   7,   8,   5, // pair 17
             -9,   7,   1,  -9,  -4,  -3,  -6, // pair 18
        ],
    },
    EncodedMovement {
        name: "7t20",
        rounds: 7,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
        ],
        seats: &[
              1,  -7,  -8,  10,   2,   5,   4, // pair 1
             -1,  -9,  -5,  -4,  10,   2,   6, // pair 2
              2,   6,  -1,   7,   4,  -5,   3, // pair 3
             -2,  -3,  10,   4,   6,   7,  -9, // pair 4
              3,  -4,  -2,   6,   5,   1,   7, // pair 5
             -3,  -1,  -9,   2, -10,   6,   5, // pair 6
              4,   9,   1,  -5,  -6,   9,   2, // pair 7
             -4,   7,  -3,   9,   1,  -6, -10, // pair 8
              5,  10,   3,  -7,   9,  -2,   9, // pair 9
             -5,   3,   4, -10,   7, -10,  -2, // pair 10
              6, -10,  -7,   1,  -2,   3,  -5, // pair 11
             -6,   5,   2,   3,  -1,   4,  -8, // pair 12
              7,  -5,   6,  -2,   3,  -1,  -4, // pair 13
             -7,   8,   9,  -3,  -5,  -8,   1, // pair 14
              8,  -6,   5,  -8,  -7,  -3,  10, // pair 15
             -8,  -2,  -4,   5,  -9,  -7,  -3, // pair 16
              9,   1,   8,   8,   8,   8,   8, // pair 17
             -9,   4,   7,  -9,  -3,  10,  -6, // pair 18
             10,  -8,  -6,  -1,  -8,  -4,  -7, // pair 19
            -10,   2, -10,  -6,  -4,  -9,  -1, // pair 20
        ],
    },
    EncodedMovement {
        name: "7t22",
        rounds: 7,
        pairs: 22,
        tables: 11,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,  -2,  -3,  -4,  -5,  -6,  -7, // table 8
             -2,  -3,  -4,  -5,  -6,  -7,  -1, // table 9
             -3,  -4,  -5,  -6,  -7,  -1,  -2, // table 10
             -4,  -5,  -6,  -7,  -1,  -2,  -3, // table 11
        ],
        seats: &[
              1, -10,   3, -10,   2,  -7,  -5, // pair 1
             -1,   7,  -8,   5,  -4,  -2,  -6, // pair 2
              2,   1,  -5,   4,   3,   6,   7, // pair 3
             -2,  -3,  -9, -11,  -6,  -5,   1, // pair 4
              3,  -7,   4,  10,   8,   1,   2, // pair 5
             -3,  11,   2,  -7,  -1,   8,   4, // pair 6
              4,  -6,   5,  11,  11,  11,  11, // pair 7
             -4, -11,   6,   2,  -7,  -3,  -1, // pair 8
              5,   9,   9,  -1,   7,  -6,  10, // pair 9
             -5,  -8,  -1,  -8, -10,  -8, -11, // pair 10
              6,  -5,   8,   7, -11,  -4, -10, // pair 11
             -6,   2,  -7,   8,  -5,  -1,  -3, // pair 12
              7,  -2, -11,  -3,   4,  10,   5, // pair 13
             -7,   4,  -3,   6,  -8,   2,   9, // pair 14
              8,   8,  10,  -4,   6,   3,   8, // pair 15
             -8,  -9,   7,  -9,   9, -11,  -4, // pair 16
              9,  -4,  11,  -5,   1,   7,   3, // pair 17
             -9,   5,  -4,   3,  -9,  -9,  -9, // pair 18
             10,  10,  -2,   1,   5,   9,   6, // pair 19
            -10,  -1,  -6,   9,  10,   4,  -2, // pair 20
             11,   6,   1,  -2,  -3,   5,  -8, // pair 21
            -11,   3, -10,  -6,  -2, -10,  -7, // pair 22
        ],
    },
    EncodedMovement {
        name: "7t24",
        rounds: 7,
        pairs: 24,
        tables: 14,
        boards: &[
              1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7, // table 7
             -1,   0,   0,  -1,  -1,  -1,  -1, // table 8
             -2,  -2,   0,   0,  -2,  -2,  -2, // table 9
             -3,  -3,  -3,   0,   0,  -3,  -3, // table 10
             -4,  -4,  -4,  -4,   0,   0,  -4, // table 11
             -5,  -5,  -5,  -5,  -5,   0,   0, // table 12
              0,  -6,  -6,  -6,  -6,  -6,   0, // table 13
              0,   0,  -7,  -7,  -7,  -7,  -7, // table 14
        ],
        seats: &[
             -5,   2,  -6,  -4,  -3,  -1,   7, // pair 1
             -4,  -5,  -7,  -2,  -6,  -8,   3, // pair 2
              2,   4, -13, -12,   3,  -7,  -8, // pair 3
              4,  -1,   3, -13,   7,  -2,  -5, // pair 4
             12,  -7,  13,   4,  -1,  -3,   2, // pair 5
              3,   1,   2, -14,   6,  -5,   4, // pair 6
              5,   9,  10,  -6,   1,   7,  11, // pair 7
              6,  10,   4,  14,   2,   8,   5, // pair 8
              9,   7,   6,  -5,   4, -10,   8, // pair 9
              1,  11,   7,  13,   5,  -9,  10, // pair 10
             11,   3,   1,  12,   9, -13,  -7, // pair 11
             10,   5,  11,  -7,   8,  -6,   9, // pair 12
            -10,  -2,   5,  -1,  14,  -4,   6, // pair 13
              8,   6,  12,  -3,  -9,   4,  14, // pair 14
              7,  13, -11,   3,  12,   9,   1, // pair 15
             -9,  -3,  -5, -11,  13, -14,  -1, // pair 16
             -8,  12,  14,  11,  -2,   6, -10, // pair 17
            -11,  -9, -14,  -8, -12,  10,  -6, // pair 18
             -3,  -6,  -4,   8,  -5,  14,  -9, // pair 19
             -7, -12, -10,   1,  -4,  13,  -2, // pair 20
             -1, -10, -12,   7, -13,   2,  -4, // pair 21
             -2, -13,  -1,   5, -14,   3, -11, // pair 22
             -6, -11,  -3,   2,  -8,   5, -14, // pair 23
            -12,  -4,  -2,   6,  -7,   1,  -3, // pair 24
        ],
    },
    EncodedMovement {
        name: "6t8",
        rounds: 6,
        pairs: 8,
        tables: 4,
        boards: &[
              1,   5,   4,   5,   1,   3, // table 1
              2,   6,   5,   4,   3,   4, // table 2
              3,   1,   6,   2,   6,   2, // table 3
              4,   3,   2,   6,   5,   1, // table 4
        ],
        seats: &[
              1,   4,  -1,   1,  -3,   3, // pair 1
             -1,  -1,   3,   3,   2,  -2, // pair 2
              2,   1,   1,   4,  -1,  -1, // pair 3
             -2,   2,   2,  -2,  -2,   4, // pair 4
              3,  -3,  -3,   2,   4,  -3, // pair 5
             -3,  -2,   4,  -1,   1,   2, // pair 6
              4,   3,  -2,  -3,   3,   1, // pair 7
             -4,  -4,  -4,  -4,  -4,  -4, // pair 8
        ],
    },
    EncodedMovement {
        name: "6t10",
        rounds: 6,
        pairs: 10,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,   6,  -3,  -5,   4,  -2, // pair 1
             -1,   2,  -6,   4,   5,  -3, // pair 2
              2,   1,   3,  -4,  -6,  -5, // pair 3
             -2,   4,   5,  -6,  -1,   3, // pair 4
              3,  -1,  -5,  -2,  -4,  -6, // pair 5
             -3,  -6,   2,   1,  -5,   4, // pair 6
              4,  -2,   1,   6,   3,   5, // pair 7
             -4,  -3,  -2,   5,   1,   6, // pair 8
              5,  -4,   6,  -1,  -3,   2, // pair 9
             -5,   3,  -1,   2,   6,  -4, // pair 10
        ],
    },
    EncodedMovement {
        name: "6t12",
        rounds: 6,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
        ],
        seats: &[
              1,   5,  -2,  -6,   4,   3, // pair 1
             -1,  -6,   4,  -5,   3,   2, // pair 2
              2,   6,  -1,  -3,  -4,   5, // pair 3
             -2,  -3,  -4,   6,  -5,   1, // pair 4
              3,  -5,  -6,  -4,   2,  -1, // pair 5
             -3,   4,   5,   2,  -1,   6, // pair 6
              4,  -2,  -5,   1,   6,  -3, // pair 7
             -4,   1,   6,   3,   5,  -2, // pair 8
              5,  -1,  -3,  -2,  -6,   4, // pair 9
             -5,   2,   1,   4,  -3,  -6, // pair 10
              6,  -4,   3,  -1,  -2,  -5, // pair 11
             -6,   3,   2,   5,   1,  -4, // pair 12
        ],
    },
    EncodedMovement {
        name: "6t14",
        rounds: 6,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
        ],
        seats: &[
              1,  -7,   7,   6,   7,   4, // pair 1
             -1,   4,   3,  -5,  -6,  -2, // pair 2
              2,  -6,   5,  -1,  -4,  -3, // pair 3
             -2,   3,   1,  -7,   6,  -5, // pair 4
              3,   5,  -1,   2,   4,   7, // pair 5
             -3,   1,  -4,   5,  -2,   6, // pair 6
              4,  -2,  -3,  -6,   5,  -1, // pair 7
             -4,  -1,   6,   3,  -7,   2, // pair 8
              5,  -4,  -6,  -2,   3,   1, // pair 9
             -5,   2,  -7,   7,  -1,  -6, // pair 10
              6,  -5,   2,   4,   1,   3, // pair 11
             -6,   7,   4,   1,  -3,   5, // pair 12
              7,  -3,  -5,  -4,   2,  -7, // pair 13
             -7,   6,  -2,  -3,  -5,  -4, // pair 14
        ],
    },
    EncodedMovement {
        name: "6t16",
        rounds: 6,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -2,  -3,  -4,  -5,  -6,  -1, // table 8
        ],
        seats: &[
              1,  -2,  -6,   3,   4,   5, // pair 1
             -1,  -8,   2,  -8,   6,   4, // pair 2
              2,   5,  -8,  -3,  -1,  -6, // pair 3
             -2,   1,  -4,  -6,   3,  -5, // pair 4
              3,  -5,   4,   1,  -6,   2, // pair 5
             -3,  -1,  -2,  -5,  -4,   6, // pair 6
              4,   2,   3,  -1,   7,  -7, // pair 7
             -4,   8,   5,   6,  -2,  -8, // pair 8
              5,  -6,   1,  -7,   2,   3, // pair 9
             -5,   4,  -7,  -2,  -8,  -1, // pair 10
              6,   7,   7,   7,   5,   8, // pair 11
             -6,   3,  -1,   2,  -7,  -4, // pair 12
              7,  -3,  -5,   4,   8,  -2, // pair 13
             -7,  -7,   8,   8,  -3,   7, // pair 14
              8,   6,  -3,  -4,  -5,   1, // pair 15
             -8,  -4,   6,   5,   1,  -3, // pair 16
        ],
    },
    EncodedMovement {
        name: "6t18",
        rounds: 6,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6, // table 6
             -1,  -2,  -3,  -4,  -5,  -6, // table 7
             -2,  -3,  -4,  -5,  -6,  -1, // table 8
             -3,  -4,  -5,  -6,  -1,  -2, // table 9
        ],
        seats: &[
              1,   7,   7,   9,   7,   4, // pair 1
             -1,  -9,  -9,   3,  -8,  -2, // pair 2
              2,   6,  -4,   8,   1,   3, // pair 3
             -2,   1,   9,  -7,  -3,  -6, // pair 4
              3,   5,  -8,  -9,   2,  -8, // pair 5
             -3,   2,  -1,   5,  -6,  -4, // pair 6
              4,  -5,   3,   1,   6,   2, // pair 7
             -4,  -2,  -6,  -3,  -7,   8, // pair 8
              5,  -1,  -7,   6,  -4,  -9, // pair 9
             -5,   3,   2,   4,  -1,  -7, // pair 10
              6,   4,  -2,  -8,   3,  -1, // pair 11
             -6,  -3,   4,   2,  -9,   5, // pair 12
              7,  -8,   8,  -5,   8,   9, // pair 13
             -7,  -7,  -3,   7,  -5,   7, // pair 14
              8,   8,  -5,  -4,   9,   6, // pair 15
             -8,   9,   1,  -6,   5,  -3, // pair 16
              9,  -6,   5,  -2,   4,   1, // pair 17
             -9,  -4,   6,  -1,  -2,  -5, // pair 18
        ],
    },
    EncodedMovement {
        name: "8sche_a16",
        rounds: 8,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7,   7, // table 7
              8,   8,   8,   8,   8,   8,   8,   8, // table 8
        ],
        seats: &[
              1,   4,   6,   7,   5,  -8,   2,  -3, // pair 1
             -1,  -8,  -4,  -5,  -2,   7,  -3,   6, // pair 2
              5,   8,   2,   3,   1,  -4,   6,  -7, // pair 3
             -5,  -4,  -8,  -1,  -6,   3,  -7,   2, // pair 4
              2,   3,   5,   8,   6,  -7,   1,  -4, // pair 5
             -2,  -7,  -3,  -6,  -1,   8,  -4,   5, // pair 6
              6,   7,   1,   4,   2,  -3,   5,  -8, // pair 7
             -6,  -3,  -7,  -2,  -5,   4,  -8,   1, // pair 8
              3,   2,   8,   5,   7,  -6,   4,  -1, // pair 9
             -3,  -6,  -2,  -7,  -4,   5,  -1,   8, // pair 10
              7,   6,   4,   1,   3,  -2,   8,  -5, // pair 11
             -7,  -2,  -6,  -3,  -8,   1,  -5,   4, // pair 12
              4,   1,   7,   6,   8,  -5,   3,  -2, // pair 13
             -4,  -5,  -1,  -8,  -3,   6,  -2,   7, // pair 14
              8,   5,   3,   2,   4,  -1,   7,  -6, // pair 15
             -8,  -1,  -5,  -4,  -7,   2,  -6,   3, // pair 16
        ],
    },
    EncodedMovement {
        name: "8sche_bc16",
        rounds: 8,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7,   7, // table 7
              8,   8,   8,   8,   8,   8,   8,   8, // table 8
        ],
        seats: &[
              1,   7,   4,   6,   2,  -8,   3,  -5, // pair 1
             -1,  -8,  -7,  -2,  -3,   6,  -5,   4, // pair 2
              2,   8,   3,   5,   1,  -7,   4,  -6, // pair 3
             -2,  -7,  -8,  -1,  -4,   5,  -6,   3, // pair 4
              3,   5,   2,   8,   4,  -6,   1,  -7, // pair 5
             -3,  -6,  -5,  -4,  -1,   8,  -7,   2, // pair 6
              4,   6,   1,   7,   3,  -5,   2,  -8, // pair 7
             -4,  -5,  -6,  -3,  -2,   7,  -8,   1, // pair 8
              5,   3,   8,   2,   6,  -4,   7,  -1, // pair 9
             -5,  -4,  -3,  -6,  -7,   2,  -1,   8, // pair 10
              6,   4,   7,   1,   5,  -3,   8,  -2, // pair 11
             -6,  -3,  -4,  -5,  -8,   1,  -2,   7, // pair 12
              7,   1,   6,   4,   8,  -2,   5,  -3, // pair 13
             -7,  -2,  -1,  -8,  -5,   4,  -3,   6, // pair 14
              8,   2,   5,   3,   7,  -1,   6,  -4, // pair 15
             -8,  -1,  -2,  -7,  -6,   3,  -4,   5, // pair 16
        ],
    },
    EncodedMovement {
        name: "4mitchel14_horne",
        rounds: 4,
        pairs: 14,
        tables: 8,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -1,  -1,  -1, // table 5
             -2,  -2,  -2,  -2, // table 6
             -3,  -3,  -3,  -3, // table 7
             -4,  -4,  -4,  -4, // table 8
        ],
        seats: &[
              1,  -6,   3,  -8, // pair 1
             -1,   3,  -4,   2, // pair 2
              2,  -1,   8,  -7, // pair 3
             -2,   4,  -3,   1, // pair 4
              3,  -8,   5,  -2, // pair 5
             -3,   1,  -2,   4, // pair 6
              4,  -7,   6,  -5, // pair 7
             -4,   2,  -1,   3, // pair 8
              5,  -4,   2,  -3, // pair 9
             -5,   8,  -6,   7, // pair 10
              6,  -3,   1,  -4, // pair 11
             -6,   7,  -5,   8, // pair 12
              7,  -2,   4,  -1, // pair 13
             -7,   6,  -8,   5, // pair 14
        ],
    },
    EncodedMovement {
        name: "4mitchel16_horne",
        rounds: 4,
        pairs: 16,
        tables: 8,
        boards: &[
              1,   1,   1,   1, // table 1
              2,   2,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -1,  -1,  -1, // table 5
             -2,  -2,  -2,  -2, // table 6
             -3,  -3,  -3,  -3, // table 7
             -4,  -4,  -4,  -4, // table 8
        ],
        seats: &[
              1,  -6,   7,  -8, // pair 1
             -1,   3,  -4,   2, // pair 2
              2,  -5,   8,  -7, // pair 3
             -2,   4,  -3,   1, // pair 4
              3,  -8,   5,  -6, // pair 5
             -3,   1,  -2,   4, // pair 6
              4,  -7,   6,  -5, // pair 7
             -4,   2,  -1,   3, // pair 8
              5,  -4,   2,  -3, // pair 9
             -5,   8,  -6,   7, // pair 10
              6,  -3,   1,  -4, // pair 11
             -6,   7,  -5,   8, // pair 12
              7,  -2,   4,  -1, // pair 13
             -7,   6,  -8,   5, // pair 14
              8,  -1,   3,  -2, // pair 15
             -8,   5,  -7,   6, // pair 16
        ],
    },
    EncodedMovement {
        name: "5mitchell10_10",
        rounds: 5,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5, // table 5
             -1,  -2,  -3,  -4,  -5, // table 6
             -2,  -3,  -4,  -5,  -1, // table 7
             -3,  -4,  -5,  -1,  -2, // table 8
             -4,  -5,  -1,  -2,  -3, // table 9
             -5,  -1,  -2,  -3,  -4, // table 10
        ],
        seats: &[
              1,   2,   3,   4,   5, // pair 1
             -1,  -4,  -2,  -5,  -3, // pair 2
              2,   8,   9,  10,   6, // pair 3
             -2,  -5,  -3,  -1,  -4, // pair 4
              3,   9,  10,   6,   7, // pair 5
             -3,  -1,  -4,  -2,  -5, // pair 6
              4,  10,   6,   7,   8, // pair 7
             -4,  -2,  -5,  -3,  -1, // pair 8
              5,   6,   7,   8,   9, // pair 9
             -5,  -3,  -1,  -4,  -2, // pair 10
              6,   7,   8,   9,  10, // pair 11
             -6,  -6,  -6,  -6,  -6, // pair 12
              7,   3,   4,   5,   1, // pair 13
             -7,  -7,  -7,  -7,  -7, // pair 14
              8,   4,   5,   1,   2, // pair 15
             -8,  -8,  -8,  -8,  -8, // pair 16
              9,   5,   1,   2,   3, // pair 17
             -9,  -9,  -9,  -9,  -9, // pair 18
             10,   1,   2,   3,   4, // pair 19
            -10, -10, -10, -10, -10, // pair 20
        ],
    },
    EncodedMovement {
        name: "4stayr14_sp",
        rounds: 4,
        pairs: 14,
        tables: 7,
        boards: &[
              1,   1,   1,   1, // table 1
              2,  -4,   2,   2, // table 2
              3,   3,   3,   3, // table 3
              4,   4,   4,   4, // table 4
             -1,  -7,  -1,  -4, // table 5
             -2,  -3,  -2,  -3, // table 6
             -3,   2,  -4,  -1, // table 7
        ],
        seats: &[
              1,  -5,   3,   4, // pair 1
             -5,   3,  -7,  -2, // pair 2
              2,  -1,   4,   3, // pair 3
             -6,   4,  -3,  -7, // pair 4
              3,  -2,   1,   2, // pair 5
             -7,   1,  -6,  -5, // pair 6
              4,  -6,   2,   1, // pair 7
             -4,   7,  -5,  -6, // pair 8
              5,  -4,   6,   6, // pair 9
             -1,   2,  -2,  -3, // pair 10
              6,  -3,   5,   5, // pair 11
             -2,   6,  -1,  -4, // pair 12
              7,  -7,   7,   7, // pair 13
             -3,   5,  -4,  -1, // pair 14
        ],
    },
    EncodedMovement {
        name: "3howel12nz.3-3",
        rounds: 3,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1, // table 1
              2,   2,   2, // table 2
              3,   3,   3, // table 3
             -1,  -1,  -1, // table 4
             -2,  -2,  -2, // table 5
             -3,  -3,  -3, // table 6
        ],
        seats: &[
              1,   2,   3, // pair 1
              4,   5,  -6, // pair 2
              5,   1,   6, // pair 3
             -2,  -4,  -3, // pair 4
             -5,  -6,   1, // pair 5
             -1,   3,  -2, // pair 6
             -4,  -3,  -5, // pair 7
              2,   6,   4, // pair 8
             -3,  -5,  -1, // pair 9
             -6,  -2,  -4, // pair 10
              6,  -1,   5, // pair 11
              3,   4,   2, // pair 12
        ],
    },
    EncodedMovement {
        name: "3harrie_nzow",
        rounds: 3,
        pairs: 12,
        tables: 6,
        boards: &[
              1,   1,   1, // table 1
              2,   2,   2, // table 2
              3,   3,   3, // table 3
             -1,  -1,  -1, // table 4
             -2,  -2,  -2, // table 5
             -3,  -3,  -3, // table 6
        ],
        seats: &[
              1,   2,   3, // pair 1
             -1,  -3,  -2, // pair 2
              2,   3,   1, // pair 3
             -2,  -1,  -3, // pair 4
              3,   1,   2, // pair 5
             -3,  -2,  -1, // pair 6
              4,   5,   6, // pair 7
             -4,  -6,  -5, // pair 8
              5,   6,   4, // pair 9
             -5,  -4,  -6, // pair 10
              6,   4,   5, // pair 11
             -6,  -5,  -4, // pair 12
        ],
    },
    EncodedMovement {
        name: "8special14_08",
        rounds: 8,
        pairs: 14,
        tables: 8,
        boards: &[
              1,   1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7,   7, // table 7
              8,   8,   8,   8,   8,   8,   8,   8, // table 8
        ],
        seats: &[
              1,   5,  -4,   2,   6,  -8,  -3,  -7, // pair 1
             -1,   6,  -8,  -3,   7,  -5,  -4,  -2, // pair 2
              2,  -8,   4,   3,  -1,   7,   6,   5, // pair 3
             -2,   1,  -5,  -4,  -7,  -6,  -8,  -3, // pair 4
              3,  -5,   8,   4,  -2,   1,   7,   6, // pair 5
             -3,   2,  -7,  -8,   1,   6,  -5,  -4, // pair 6
              4,  -6,   5,   8,  -3,   2,   1,   7, // pair 7
             -4,   3,  -1,  -6,   2,  -7,   5,  -8, // pair 8
              5,  -1,   7,   6,  -8,   4,   3,   2, // pair 9
             -5,   4,  -2,  -7,   3,  -1,  -6,   8, // pair 10
              6,  -2,   1,   7,  -5,   8,   4,   3, // pair 11
             -6,  -4,  -3,  -1,   8,  -2,  -7,  -5, // pair 12
              7,  -3,   2,   1,  -6,   5,   8,   4, // pair 13
             -7,   8,   3,  -2,   5,  -4,  -1,  -6, // pair 14
        ],
    },
    EncodedMovement {
        name: "8mitchel18_09",
        rounds: 8,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7,   7, // table 7
              8,   8,   8,   8,   8,   8,   8,   8, // table 8
             -1,  -2,  -3,  -4,  -5,  -6,  -7,  -8, // table 9
        ],
        seats: &[
              1,   2,   3,   4,   5,   6,   7,   8, // pair 1
             -1,  -6,  -8,  -3,  -7,  -4,  -2,  -5, // pair 2
              2,   7,   8,   1,   3,   9,   5,   4, // pair 3
             -2,  -5,  -7,  -4,  -8,  -3,  -1,  -6, // pair 4
              3,   6,   5,   9,   2,   7,   8,   1, // pair 5
             -3,  -8,  -6,  -1,  -5,  -2,  -4,  -7, // pair 6
              4,   5,   6,   3,   1,   8,   9,   2, // pair 7
             -4,  -7,  -5,  -2,  -6,  -1,  -3,  -8, // pair 8
              5,   4,   9,   6,   8,   1,   2,   7, // pair 9
             -5,  -2,  -4,  -7,  -3,  -8,  -6,  -1, // pair 10
              6,   3,   4,   5,   7,   2,   1,   9, // pair 11
             -6,  -1,  -3,  -8,  -4,  -7,  -5,  -2, // pair 12
              7,   9,   1,   8,   6,   3,   4,   5, // pair 13
             -7,  -4,  -2,  -5,  -1,  -6,  -8,  -3, // pair 14
              8,   1,   2,   7,   9,   4,   3,   6, // pair 15
             -8,  -3,  -1,  -6,  -2,  -5,  -7,  -4, // pair 16
              9,   8,   7,   2,   4,   5,   6,   3, // pair 17
             -9,  -9,  -9,  -9,  -9,  -9,  -9,  -9, // pair 18
        ],
    },
    EncodedMovement {
        name: "8mitchel20_10",
        rounds: 8,
        pairs: 20,
        tables: 10,
        boards: &[
              1,   1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7,   7, // table 7
              8,   8,   8,   8,   8,   8,   8,   8, // table 8
             -1,  -2,  -3,  -4,  -5,  -6,  -7,  -8, // table 9
             -2,  -1,  -4,  -3,  -6,  -5,  -8,  -7, // table 10
        ],
        seats: &[
              1,   2,   3,   4,   5,   6,   7,   8, // pair 1
             -1,  -6,  -8,  -3,  -7,  -4,  -2,  -5, // pair 2
              2,   1,   4,   3,   6,   5,   8,   7, // pair 3
             -2,  -5,  -7,  -4,  -8,  -3,  -1,  -6, // pair 4
              3,   6,   5,   9,   2,   7,  10,   1, // pair 5
             -3,  -8,  -6,  -1,  -5,  -2,  -4,  -7, // pair 6
              4,   5,   6,  10,   1,   8,   9,   2, // pair 7
             -4,  -7,  -5,  -2,  -6,  -1,  -3,  -8, // pair 8
              5,   4,   9,   6,   8,   1,   2,  10, // pair 9
             -5,  -2,  -4,  -7,  -3,  -8,  -6,  -1, // pair 10
              6,   3,  10,   5,   7,   2,   1,   9, // pair 11
             -6,  -1,  -3,  -8,  -4,  -7,  -5,  -2, // pair 12
              7,   9,   1,   8,  10,   3,   4,   5, // pair 13
             -7,  -4,  -2,  -5,  -1,  -6,  -8,  -3, // pair 14
              8,  10,   2,   7,   9,   4,   3,   6, // pair 15
             -8,  -3,  -1,  -6,  -2,  -5,  -7,  -4, // pair 16
              9,   8,   7,   2,   4,  10,   6,   3, // pair 17
             -9,  -9,  -9,  -9,  -9,  -9,  -9,  -9, // pair 18
             10,   7,   8,   1,   3,   9,   5,   4, // pair 19
            -10, -10, -10, -10, -10, -10, -10, -10, // pair 20
        ],
    },
    EncodedMovement {
        name: "8BridgeBoost18_09",
        rounds: 8,
        pairs: 18,
        tables: 9,
        boards: &[
              1,   1,   1,   1,   1,   1,   1,   1, // table 1
              2,   2,   2,   2,   2,   2,   2,   2, // table 2
              3,   3,   3,   3,   3,   3,   3,   3, // table 3
              4,   4,   4,   4,   4,   4,   4,   4, // table 4
              5,   5,   5,   5,   5,   5,   5,   5, // table 5
              6,   6,   6,   6,   6,   6,   6,   6, // table 6
              7,   7,   7,   7,   7,   7,   7,   7, // table 7
              8,   8,   8,   8,   8,   8,   8,   8, // table 8
             -8,  -7,  -6,  -5,  -4,  -3,  -2,  -1, // table 9
        ],
        seats: &[
              1,   2,   8,   7,   3,   4,   5,   6, // pair 1
             -1,  -3,  -7,  -6,  -5,  -8,  -4,  -2, // pair 2
              2,  -1,   7,   8,   9,   3,   6,  -5, // pair 3
             -2,   4,  -8,   9,  -6,  -7,  -3,   1, // pair 4
              3,  -4,   5,   6,  -1,   2,   8,   7, // pair 5
             -3,   1,  -6,  -7,   8,  -5,   9,  -4, // pair 6
              4,   3,   9,   5,   2,  -1,  -7,   8, // pair 7
             -4,  -2,  -5,  -8,  -7,   6,   1,  -3, // pair 8
              5,   6,   3,   4,  -8,   7,  -1,   2, // pair 9
             -5,  -8,  -4,  -2,   1,   9,   7,  -6, // pair 10
              6,   5,   4,  -3,   7,   8,   2,   9, // pair 11
             -6,  -7,  -3,   1,  -2,  -4,  -8,   5, // pair 12
              7,   8,  -2,  -1,   6,   5,   4,   3, // pair 13
             -7,  -6,   1,   3,  -4,  -2,  -5,  -8, // pair 14
              8,  -9,  -1,   2,   5,  -6,   3,   4, // pair 15
             -8,  -5,   2,  -4,  -3,   1,  -6,  -7, // pair 16
              9,   7,   6,  -5,   4,  -3,  -2,  -1, // pair 17
             -9,   9,  -9,  -9,  -9,  -9,  -9,  -9, // pair 18
        ],
    },
];
