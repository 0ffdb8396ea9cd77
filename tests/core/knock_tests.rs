//! Knock aggregation tests

use pullview::analysis::knock::{worst_cylinder, worst_knock};
use pullview::analysis::window::{extract, Strategy};

use crate::common::{self, expected};

#[test]
fn test_worst_knock_over_synthetic_pull() {
    let table = common::pull_table();
    let window = extract(&table, Strategy::Intersecting).unwrap();
    let trimmed = window.apply(&table);

    let vector = worst_knock(&trimmed).unwrap();
    assert_eq!(
        vector,
        [0.0, 0.0, expected::WORST_KNOCK, 0.0, 0.0, 0.0]
    );

    let (cylinder, value) = worst_cylinder(&vector);
    assert_eq!(cylinder, expected::WORST_KNOCK_CYLINDER);
    assert_eq!(value, expected::WORST_KNOCK);
}

#[test]
fn test_worst_cylinder_picks_global_minimum() {
    let vector = [-2.0, -1.0, -3.5, 0.0, -0.5, -4.0];
    assert_eq!(worst_cylinder(&vector), (5, -4.0));
}

#[test]
fn test_worst_cylinder_tie_resolves_to_lowest_index() {
    let vector = [0.0, -2.25, 0.0, -2.25, 0.0, 0.0];
    assert_eq!(worst_cylinder(&vector), (1, -2.25));
}

#[test]
fn test_vector_rounded_to_two_decimals() {
    let table = common::table_of(
        &pullview::schema::signal::KNOCK,
        vec![vec![-1.504, -0.996, 0.0, 0.0, 0.0, 0.0]],
    );
    let vector = worst_knock(&table).unwrap();
    assert_eq!(vector[0], -1.5);
    assert_eq!(vector[1], -1.0);
}
