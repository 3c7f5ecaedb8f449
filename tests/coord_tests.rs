use shipgame::{Coord, CoordError};

#[test]
fn parses_corners() {
    let a1: Coord = "A1".parse().unwrap();
    assert_eq!((a1.row(), a1.col()), (0, 0));
    let j10: Coord = "J10".parse().unwrap();
    assert_eq!((j10.row(), j10.col()), (9, 9));
    let b7: Coord = "B7".parse().unwrap();
    assert_eq!((b7.row(), b7.col()), (1, 6));
}

#[test]
fn lowercase_row_letter_is_folded() {
    let c: Coord = "c3".parse().unwrap();
    assert_eq!(c, Coord::new(2, 2).unwrap());
    assert_eq!(c.to_string(), "C3");
}

#[test]
fn display_matches_input_format() {
    for s in ["A1", "B7", "E10", "J10"] {
        assert_eq!(s.parse::<Coord>().unwrap().to_string(), s);
    }
}

#[test]
fn rejects_malformed_input() {
    assert_eq!("".parse::<Coord>(), Err(CoordError::Empty));
    assert_eq!("K1".parse::<Coord>(), Err(CoordError::InvalidRow('K')));
    assert_eq!("11".parse::<Coord>(), Err(CoordError::InvalidRow('1')));
    assert_eq!("A".parse::<Coord>(), Err(CoordError::MalformedColumn));
    assert_eq!("A 1".parse::<Coord>(), Err(CoordError::MalformedColumn));
    assert_eq!("A+1".parse::<Coord>(), Err(CoordError::MalformedColumn));
    assert_eq!("A01".parse::<Coord>(), Err(CoordError::MalformedColumn));
    assert_eq!("B7x".parse::<Coord>(), Err(CoordError::MalformedColumn));
}

#[test]
fn rejects_out_of_range_columns() {
    assert_eq!("A0".parse::<Coord>(), Err(CoordError::ColumnOutOfRange(0)));
    assert_eq!("A11".parse::<Coord>(), Err(CoordError::ColumnOutOfRange(11)));
    assert_eq!("J100".parse::<Coord>(), Err(CoordError::ColumnOutOfRange(100)));
}

#[test]
fn new_checks_bounds() {
    assert!(Coord::new(9, 9).is_ok());
    assert_eq!(
        Coord::new(10, 0),
        Err(CoordError::IndexOutOfBounds { row: 10, col: 0 })
    );
    assert_eq!(
        Coord::new(0, 10),
        Err(CoordError::IndexOutOfBounds { row: 0, col: 10 })
    );
}

#[test]
fn all_covers_grid_in_row_major_order() {
    let cells: Vec<Coord> = Coord::all().collect();
    assert_eq!(cells.len(), 100);
    assert_eq!(cells[0].to_string(), "A1");
    assert_eq!(cells[9].to_string(), "A10");
    assert_eq!(cells[10].to_string(), "B1");
    assert_eq!(cells[99].to_string(), "J10");
}

#[test]
fn try_from_str_matches_parse() {
    assert_eq!(Coord::try_from("D4"), "D4".parse::<Coord>());
    assert_eq!(Coord::try_from("D"), Err(CoordError::MalformedColumn));
    let d4 = Coord::try_from("D4").unwrap();
    assert_eq!((d4.row_letter(), d4.column_number()), ('D', 4));
}
