#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_is_inactive_and_zeroed() {
    let ds = DragState::default();
    assert!(!ds.active);
    assert_eq!(ds.translate_x, 0.0);
    assert_eq!(ds.translate_y, 0.0);
}

#[test]
fn start_drag_records_reference_point() {
    let mut ds = DragState::default();
    ds.start_drag(12.0, -7.5);
    assert!(ds.active);
    assert_eq!(ds.start_x, 12.0);
    assert_eq!(ds.start_y, -7.5);
}

#[test]
fn move_accumulates_consecutive_deltas() {
    let mut ds = DragState::default();
    ds.start_drag(0.0, 0.0);
    ds.on_drag_move(10.0, 0.0);
    ds.on_drag_move(15.0, 5.0);
    assert_eq!(ds.translate_x, 15.0);
    assert_eq!(ds.translate_y, 5.0);
}

#[test]
fn translation_is_independent_of_intermediate_points() {
    let mut direct = DragState::default();
    direct.start_drag(0.0, 0.0);
    direct.on_drag_move(100.0, 40.0);

    let mut stepped = DragState::default();
    stepped.start_drag(0.0, 0.0);
    for i in 1..=10 {
        stepped.on_drag_move(10.0 * f64::from(i), 4.0 * f64::from(i));
    }

    assert_eq!(direct.translate_x, stepped.translate_x);
    assert_eq!(direct.translate_y, stepped.translate_y);
}

#[test]
fn move_before_start_is_a_no_op() {
    let mut ds = DragState::default();
    ds.on_drag_move(50.0, 50.0);
    assert_eq!(ds.translate_x, 0.0);
    assert_eq!(ds.translate_y, 0.0);
}

#[test]
fn move_after_end_is_a_no_op() {
    let mut ds = DragState::default();
    ds.start_drag(0.0, 0.0);
    ds.on_drag_move(10.0, 10.0);
    ds.end_drag();
    ds.on_drag_move(500.0, 500.0);
    assert_eq!(ds.translate_x, 10.0);
    assert_eq!(ds.translate_y, 10.0);
}

#[test]
fn end_drag_keeps_translation() {
    let mut ds = DragState::default();
    ds.start_drag(0.0, 0.0);
    ds.on_drag_move(-30.0, 8.0);
    ds.end_drag();
    assert!(!ds.active);
    assert_eq!(ds.translate_x, -30.0);
    assert_eq!(ds.translate_y, 8.0);
}

#[test]
fn reset_zeroes_translation_and_leaves_active_alone() {
    let mut ds = DragState::default();
    ds.start_drag(0.0, 0.0);
    ds.on_drag_move(30.0, -20.0);
    ds.reset_position();
    assert_eq!(ds.translate_x, 0.0);
    assert_eq!(ds.translate_y, 0.0);
    assert!(ds.active);
}

#[test]
fn reset_while_inactive_does_not_activate() {
    let mut ds = DragState {
        translate_x: 14.0,
        translate_y: -3.0,
        ..DragState::default()
    };
    ds.reset_position();
    assert_eq!(ds.translate_x, 0.0);
    assert_eq!(ds.translate_y, 0.0);
    assert!(!ds.active);
}

#[test]
fn second_gesture_continues_from_kept_offset() {
    let mut ds = DragState::default();
    ds.start_drag(0.0, 0.0);
    ds.on_drag_move(10.0, 10.0);
    ds.end_drag();
    ds.start_drag(100.0, 100.0);
    ds.on_drag_move(105.0, 95.0);
    assert_eq!(ds.translate_x, 15.0);
    assert_eq!(ds.translate_y, 5.0);
}
