//! Integration tests for adding, picking, and re-rating fruits

use orchard_foundation::{Conflict, ErrorKind, FruitId};
use orchard_storage::Orchard;

fn ids(orchard: &Orchard, row: i32, col: i32) -> Vec<i32> {
    orchard
        .fruits_by_rate(row, col)
        .unwrap()
        .into_iter()
        .map(FruitId::raw)
        .collect()
}

fn planted(extent: i32, cells: &[(i32, i32)]) -> Orchard {
    let mut orchard = Orchard::new(extent).unwrap();
    for &(row, col) in cells {
        orchard.plant_tree(row, col).unwrap();
    }
    orchard
}

// =============================================================================
// Adding
// =============================================================================

#[test]
fn add_keeps_ripeness_then_id_order() {
    let mut orchard = planted(3, &[(0, 0)]);
    for (id, ripeness) in [(7, 3), (2, 9), (4, 3), (1, 5)] {
        orchard.add_fruit(0, 0, id, ripeness).unwrap();
    }
    assert_eq!(ids(&orchard, 0, 0), vec![4, 7, 1, 2]);
    assert_eq!(orchard.best_fruit(0, 0).unwrap().map(FruitId::raw), Some(4));
}

#[test]
fn add_to_unplanted_position_is_conflict_and_leaves_no_trace() {
    let mut orchard = planted(3, &[(0, 0)]);
    let err = orchard.add_fruit(1, 1, 5, 10).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Conflict(Conflict::NotPlanted(_))
    ));

    assert_eq!(orchard.fruit_count(), 0);
    // The id was never claimed.
    orchard.add_fruit(0, 0, 5, 10).unwrap();
    assert!(orchard.is_consistent());
}

#[test]
fn add_rejects_bad_arguments() {
    let mut orchard = planted(3, &[(0, 0)]);
    assert!(orchard.add_fruit(3, 0, 1, 1).unwrap_err().is_invalid_argument());
    assert!(orchard.add_fruit(0, 0, 0, 1).unwrap_err().is_invalid_argument());
    assert!(orchard.add_fruit(0, 0, 1, 0).unwrap_err().is_invalid_argument());
    assert!(orchard.add_fruit(0, 0, -3, -3).unwrap_err().is_invalid_argument());
    assert_eq!(orchard.fruit_count(), 0);
}

#[test]
fn invalid_argument_wins_over_conflict() {
    let mut orchard = Orchard::new(3).unwrap();
    // Unplanted and non-positive id: validation comes first.
    assert!(orchard.add_fruit(1, 1, 0, 4).unwrap_err().is_invalid_argument());
}

#[test]
fn ids_are_unique_across_trees() {
    let mut orchard = planted(3, &[(0, 0), (2, 2)]);
    orchard.add_fruit(0, 0, 9, 1).unwrap();

    let err = orchard.add_fruit(2, 2, 9, 1).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Conflict(Conflict::DuplicateFruit(_))
    ));
    assert!(ids(&orchard, 2, 2).is_empty());
}

// =============================================================================
// Picking
// =============================================================================

#[test]
fn pick_returns_the_fruit() {
    let mut orchard = planted(2, &[(1, 0)]);
    orchard.add_fruit(1, 0, 3, 8).unwrap();

    let fruit = orchard.pick_fruit(3).unwrap();
    assert_eq!(fruit.id().raw(), 3);
    assert_eq!(fruit.ripeness().get(), 8);
    assert!(ids(&orchard, 1, 0).is_empty());
    assert!(orchard.fruit(fruit.id()).is_none());
}

#[test]
fn picked_id_can_be_reused_anywhere() {
    let mut orchard = planted(2, &[(0, 0), (1, 1)]);
    orchard.add_fruit(0, 0, 6, 2).unwrap();
    orchard.pick_fruit(6).unwrap();

    orchard.add_fruit(1, 1, 6, 4).unwrap();
    assert_eq!(ids(&orchard, 1, 1), vec![6]);
    assert!(orchard.is_consistent());
}

#[test]
fn pick_unknown_or_invalid() {
    let mut orchard = planted(2, &[(0, 0)]);
    assert!(orchard.pick_fruit(1).unwrap_err().is_conflict());
    assert!(orchard.pick_fruit(0).unwrap_err().is_invalid_argument());

    orchard.add_fruit(0, 0, 1, 1).unwrap();
    orchard.pick_fruit(1).unwrap();
    assert!(orchard.pick_fruit(1).unwrap_err().is_conflict());
}

// =============================================================================
// Re-rating
// =============================================================================

#[test]
fn rate_moves_fruit() {
    let mut orchard = planted(3, &[(0, 0)]);
    for (id, ripeness) in [(1, 10), (2, 20), (3, 30)] {
        orchard.add_fruit(0, 0, id, ripeness).unwrap();
    }

    orchard.rate_fruit(3, 5).unwrap();
    assert_eq!(ids(&orchard, 0, 0), vec![3, 1, 2]);

    orchard.rate_fruit(3, 25).unwrap();
    assert_eq!(ids(&orchard, 0, 0), vec![1, 2, 3]);

    // Equal ripeness falls back to id order.
    orchard.rate_fruit(3, 20).unwrap();
    assert_eq!(ids(&orchard, 0, 0), vec![1, 2, 3]);
    orchard.rate_fruit(1, 20).unwrap();
    assert_eq!(ids(&orchard, 0, 0), vec![1, 2, 3]);
}

#[test]
fn rate_keeps_tree() {
    let mut orchard = planted(3, &[(0, 0), (0, 1)]);
    orchard.add_fruit(0, 1, 4, 4).unwrap();
    orchard.rate_fruit(4, 1).unwrap();

    assert!(ids(&orchard, 0, 0).is_empty());
    assert_eq!(ids(&orchard, 0, 1), vec![4]);
    assert_eq!(
        orchard.fruit(FruitId::new(4).unwrap()).unwrap().ripeness().get(),
        1
    );
}

#[test]
fn rate_rejects_bad_arguments() {
    let mut orchard = planted(3, &[(0, 0)]);
    orchard.add_fruit(0, 0, 1, 1).unwrap();
    assert!(orchard.rate_fruit(1, 0).unwrap_err().is_invalid_argument());
    assert!(orchard.rate_fruit(0, 1).unwrap_err().is_invalid_argument());
    assert!(orchard.rate_fruit(2, 1).unwrap_err().is_conflict());
    assert_eq!(orchard.fruit(FruitId::new(1).unwrap()).unwrap().ripeness().get(), 1);
}

// =============================================================================
// Returned Sequences
// =============================================================================

#[test]
fn returned_ids_are_a_snapshot() {
    let mut orchard = planted(2, &[(0, 0)]);
    orchard.add_fruit(0, 0, 1, 1).unwrap();
    let before = orchard.fruits_by_rate(0, 0).unwrap();

    orchard.add_fruit(0, 0, 2, 2).unwrap();
    assert_eq!(before.len(), 1);
    assert_eq!(orchard.fruits_by_rate(0, 0).unwrap().len(), 2);
}
