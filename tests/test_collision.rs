use space_invaders::collision::point_in_rect;

// Rectangle used throughout: [10, 20] × [30, 40]

#[test]
fn point_inside_hits() {
    assert!(point_in_rect(15.0, 35.0, 10.0, 20.0, 30.0, 40.0));
}

#[test]
fn bounds_are_inclusive_on_every_edge() {
    assert!(point_in_rect(10.0, 35.0, 10.0, 20.0, 30.0, 40.0)); // left
    assert!(point_in_rect(20.0, 35.0, 10.0, 20.0, 30.0, 40.0)); // right
    assert!(point_in_rect(15.0, 30.0, 10.0, 20.0, 30.0, 40.0)); // top
    assert!(point_in_rect(15.0, 40.0, 10.0, 20.0, 30.0, 40.0)); // bottom
}

#[test]
fn corners_hit() {
    assert!(point_in_rect(10.0, 30.0, 10.0, 20.0, 30.0, 40.0));
    assert!(point_in_rect(20.0, 40.0, 10.0, 20.0, 30.0, 40.0));
}

#[test]
fn point_outside_misses_on_each_side() {
    assert!(!point_in_rect(9.9, 35.0, 10.0, 20.0, 30.0, 40.0));
    assert!(!point_in_rect(20.1, 35.0, 10.0, 20.0, 30.0, 40.0));
    assert!(!point_in_rect(15.0, 29.9, 10.0, 20.0, 30.0, 40.0));
    assert!(!point_in_rect(15.0, 40.1, 10.0, 20.0, 30.0, 40.0));
}

#[test]
fn far_away_point_misses() {
    assert!(!point_in_rect(-100.0, 500.0, 10.0, 20.0, 30.0, 40.0));
}
