//! Integration tests for validated value types

use orchard_foundation::{ErrorKind, FruitId, InvalidArgument, Position, Ripeness, RotRule};
use proptest::prelude::*;

// =============================================================================
// FruitId
// =============================================================================

#[test]
fn fruit_id_accepts_positive() {
    let id = FruitId::new(42).unwrap();
    assert_eq!(id.get(), 42);
    assert_eq!(id.raw(), 42);
    assert_eq!(id.to_string(), "42");
}

#[test]
fn fruit_id_rejects_zero_and_negative() {
    for raw in [0, -1, i32::MIN] {
        let err = FruitId::new(raw).unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::InvalidArgument(InvalidArgument::FruitId(r)) if r == raw
        ));
    }
}

#[test]
fn fruit_ids_order_numerically() {
    let small = FruitId::new(3).unwrap();
    let large = FruitId::new(20).unwrap();
    assert!(small < large);
}

// =============================================================================
// Ripeness
// =============================================================================

#[test]
fn ripeness_rejects_non_positive() {
    assert!(Ripeness::new(0).is_err());
    assert!(Ripeness::new(-10).is_err());
    assert_eq!(Ripeness::new(10).unwrap().get(), 10);
}

#[test]
fn ripeness_scale_detects_overflow() {
    let r = Ripeness::new(i32::MAX).unwrap();
    // i32::MAX * u32::MAX still fits in u64.
    assert!(r.checked_scale(u32::MAX).is_some());
    assert!(Ripeness::MAX.checked_scale(2).is_none());
    assert_eq!(Ripeness::MAX.checked_scale(1), Some(Ripeness::MAX));
}

// =============================================================================
// Position
// =============================================================================

#[test]
fn position_checked_bounds() {
    assert_eq!(
        Position::checked(2, 0, 3).unwrap(),
        Position { row: 2, col: 0 }
    );
    assert!(Position::checked(3, 0, 3).is_err());
    assert!(Position::checked(0, 3, 3).is_err());
    assert!(Position::checked(-1, 0, 3).is_err());
}

#[test]
fn position_out_of_range_reports_inputs() {
    let err = Position::checked(5, -2, 4).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InvalidArgument(InvalidArgument::Coordinates {
            row: 5,
            col: -2,
            extent: 4
        })
    ));
}

#[test]
fn position_display() {
    assert_eq!(Position { row: 1, col: 2 }.to_string(), "(1, 2)");
}

// =============================================================================
// RotRule
// =============================================================================

#[test]
fn rot_rule_validates_both_arguments() {
    assert!(matches!(
        RotRule::new(0, 2).unwrap_err().kind,
        ErrorKind::InvalidArgument(InvalidArgument::RotBase(0))
    ));
    assert!(matches!(
        RotRule::new(2, 0).unwrap_err().kind,
        ErrorKind::InvalidArgument(InvalidArgument::RotFactor(0))
    ));
}

#[test]
fn rot_rule_base_one_matches_everything() {
    let rule = RotRule::new(1, 2).unwrap();
    for raw in [1, 2, 17, i32::MAX] {
        assert!(rule.matches(FruitId::new(raw).unwrap()));
    }
}

#[test]
fn rot_rule_scales() {
    let rule = RotRule::new(5, 10).unwrap();
    assert!(rule.matches(FruitId::new(15).unwrap()));
    assert!(!rule.matches(FruitId::new(16).unwrap()));
    assert_eq!(rule.scale(Ripeness::new(2).unwrap()).unwrap().get(), 20);
}

// =============================================================================
// Properties
// =============================================================================

/// A grid extent and two cells inside it.
fn grid_and_two_cells() -> impl Strategy<Value = (u32, (u32, u32), (u32, u32))> {
    (1u32..64).prop_flat_map(|n| (Just(n), (0..n, 0..n), (0..n, 0..n)))
}

#[test]
fn linear_encoding_separates_rows() {
    // Row-major: the last cell of a row and the first of the next are adjacent.
    let end_of_row = Position { row: 0, col: 2 };
    let next_row = Position { row: 1, col: 0 };
    assert_eq!(end_of_row.linear(3), 2);
    assert_eq!(next_row.linear(3), 3);
}

proptest! {
    #[test]
    fn linear_positions_are_unique((extent, a, b) in grid_and_two_cells()) {
        let pa = Position { row: a.0, col: a.1 };
        let pb = Position { row: b.0, col: b.1 };
        prop_assert_eq!(pa == pb, pa.linear(extent) == pb.linear(extent));
    }

    #[test]
    fn rot_matches_is_divisibility(base in 1i32..100, id in 1i32..10_000) {
        let rule = RotRule::new(base, 2).unwrap();
        prop_assert_eq!(rule.matches(FruitId::new(id).unwrap()), id % base == 0);
    }
}
