// Native tests for the tile-grid model: layout math, tilt table, hover gate.
// These exercise pure logic without any wasm or DOM involvement.

use flip_wall::wall::grid::{COLS, COOLDOWN_MS, HoverGate, ROWS, TilePos, tilt_for};

#[test]
fn background_percent_steps_by_twenty() {
    for row in 0..ROWS {
        for col in 0..COLS {
            let pos = TilePos { row, col };
            assert_eq!(
                pos.background_percent(),
                ((col * 20) as u32, (row * 20) as u32)
            );
        }
    }
}

#[test]
fn last_row_and_column_reach_one_hundred_percent() {
    let corner = TilePos { row: 5, col: 5 };
    assert_eq!(corner.background_percent(), (100, 100));
}

#[test]
fn linear_index_is_row_major() {
    let mut expected = 0;
    for row in 0..ROWS {
        for col in 0..COLS {
            let pos = TilePos { row, col };
            assert_eq!(pos.index(), expected);
            assert_eq!(pos.index(), row * COLS + col);
            expected += 1;
        }
    }
}

#[test]
fn tilt_table_matches_column_layout() {
    let expected = [-40.0, -20.0, -10.0, 10.0, 20.0, 40.0];
    for (col, &tilt) in expected.iter().enumerate() {
        assert_eq!(tilt_for(col), tilt, "tilt for column {col}");
    }
}

#[test]
fn tilt_is_periodic_in_the_column() {
    for index in 0..(ROWS * COLS) {
        assert_eq!(tilt_for(index), tilt_for(index % 6));
    }
}

#[test]
fn first_hover_always_activates() {
    let mut gate = HoverGate::new(36);
    assert!(gate.try_activate(0, 0.0), "fresh tile should fire at t=0");
}

#[test]
fn cooldown_blocks_until_strictly_past_one_second() {
    let mut gate = HoverGate::new(36);
    assert!(gate.try_activate(7, 5000.0));
    assert!(!gate.try_activate(7, 5999.0));
    assert!(
        !gate.try_activate(7, 5000.0 + COOLDOWN_MS),
        "the boundary itself is still inside the cooldown"
    );
    assert!(gate.try_activate(7, 6001.0));
    assert_eq!(gate.last_activation(7), Some(6001.0));
}

#[test]
fn cooldown_is_per_tile() {
    let mut gate = HoverGate::new(36);
    assert!(gate.try_activate(0, 1000.0));
    assert!(gate.try_activate(1, 1000.0), "a neighbour has its own timer");
}

#[test]
fn rejected_hover_keeps_the_old_stamp() {
    let mut gate = HoverGate::new(36);
    assert!(gate.try_activate(3, 2000.0));
    assert!(!gate.try_activate(3, 2500.0));
    assert_eq!(
        gate.last_activation(3),
        Some(2000.0),
        "a rejected hover must not extend the cooldown"
    );
}

#[test]
fn out_of_range_tile_never_activates() {
    let mut gate = HoverGate::new(4);
    assert!(!gate.try_activate(9, 1000.0));
    assert_eq!(gate.last_activation(9), None);
}
