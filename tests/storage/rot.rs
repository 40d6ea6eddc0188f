//! Integration tests for bulk ripeness rewrites

use orchard_foundation::{FruitId, Ripeness};
use orchard_storage::Orchard;

fn ids(orchard: &Orchard, row: i32, col: i32) -> Vec<i32> {
    orchard
        .fruits_by_rate(row, col)
        .unwrap()
        .into_iter()
        .map(FruitId::raw)
        .collect()
}

fn ripeness(orchard: &Orchard, id: i32) -> u64 {
    orchard
        .fruit(FruitId::new(id).unwrap())
        .map(|f| f.ripeness().get())
        .unwrap()
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn three_by_three_scenario() {
    let mut orchard = Orchard::new(3).unwrap();
    orchard.plant_tree(0, 0).unwrap();
    orchard.add_fruit(0, 0, 5, 10).unwrap();
    orchard.add_fruit(0, 0, 3, 10).unwrap();
    assert_eq!(ids(&orchard, 0, 0), vec![3, 5]);

    orchard.rate_fruit(5, 2).unwrap();
    assert_eq!(ids(&orchard, 0, 0), vec![5, 3]);

    orchard.update_rotten_fruits(5, 10).unwrap();
    assert_eq!(ids(&orchard, 0, 0), vec![3, 5]);
    assert_eq!(ripeness(&orchard, 5), 20);
    assert_eq!(ripeness(&orchard, 3), 10);
}

// =============================================================================
// Rot Semantics
// =============================================================================

#[test]
fn only_multiples_of_base_change() {
    let mut orchard = Orchard::new(2).unwrap();
    orchard.plant_tree(0, 0).unwrap();
    orchard.plant_tree(1, 1).unwrap();
    for id in 1..=6 {
        let (row, col) = if id % 2 == 0 { (0, 0) } else { (1, 1) };
        orchard.add_fruit(row, col, id, 7).unwrap();
    }

    let changed = orchard.update_rotten_fruits(3, 2).unwrap();
    assert_eq!(changed, 2);
    for id in 1..=6 {
        let expected = if id % 3 == 0 { 14 } else { 7 };
        assert_eq!(ripeness(&orchard, id), expected, "fruit {id}");
    }
    assert_eq!(ids(&orchard, 0, 0), vec![2, 4, 6]);
    assert_eq!(ids(&orchard, 1, 1), vec![1, 5, 3]);
    assert!(orchard.is_consistent());
}

#[test]
fn factor_one_changes_nothing_visible() {
    let mut orchard = Orchard::new(2).unwrap();
    orchard.plant_tree(0, 0).unwrap();
    orchard.add_fruit(0, 0, 2, 3).unwrap();
    orchard.add_fruit(0, 0, 4, 1).unwrap();

    orchard.update_rotten_fruits(2, 1).unwrap();
    assert_eq!(ids(&orchard, 0, 0), vec![4, 2]);
}

#[test]
fn rot_rejects_bad_arguments_without_change() {
    let mut orchard = Orchard::new(2).unwrap();
    orchard.plant_tree(0, 0).unwrap();
    orchard.add_fruit(0, 0, 2, 3).unwrap();

    assert!(orchard.update_rotten_fruits(0, 2).unwrap_err().is_invalid_argument());
    assert!(orchard.update_rotten_fruits(2, 0).unwrap_err().is_invalid_argument());
    assert!(orchard.update_rotten_fruits(-2, 2).unwrap_err().is_invalid_argument());
    assert_eq!(ripeness(&orchard, 2), 3);
}

#[test]
fn rot_on_empty_orchard() {
    let mut orchard = Orchard::new(5).unwrap();
    assert_eq!(orchard.update_rotten_fruits(1, 9).unwrap(), 0);
}

#[test]
fn repeated_rot_saturates() {
    let mut orchard = Orchard::new(1).unwrap();
    orchard.plant_tree(0, 0).unwrap();
    orchard.add_fruit(0, 0, 2, i32::MAX).unwrap();
    orchard.add_fruit(0, 0, 1, 1).unwrap();

    for _ in 0..4 {
        orchard.update_rotten_fruits(2, i32::MAX).unwrap();
    }
    assert_eq!(ripeness(&orchard, 2), Ripeness::MAX.get());
    assert_eq!(ids(&orchard, 0, 0), vec![1, 2]);
    assert!(orchard.is_consistent());
}
