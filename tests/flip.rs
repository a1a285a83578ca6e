// Native tests for the flip flag and its scroll trigger.

use flip_wall::wall::flip::{FlipState, SCROLL_THRESHOLD_PX};

#[test]
fn toggle_twice_returns_to_the_start() {
    let mut flip = FlipState::new();
    assert!(!flip.is_flipped());
    assert_eq!(flip.toggle(), 180.0);
    assert!(flip.is_flipped());
    assert_eq!(flip.toggle(), 0.0);
    assert!(!flip.is_flipped());
}

#[test]
fn target_angle_follows_the_flag() {
    let mut flip = FlipState::new();
    assert_eq!(flip.target_angle(), 0.0);
    flip.toggle();
    assert_eq!(flip.target_angle(), 180.0);
}

#[test]
fn scroll_fires_only_strictly_past_the_threshold() {
    let mut flip = FlipState::new();
    assert!(!flip.scrolled_past_threshold(199.0));
    assert!(
        !flip.scrolled_past_threshold(SCROLL_THRESHOLD_PX),
        "the threshold itself is not past it"
    );
    assert!(flip.scrolled_past_threshold(201.0));
}

#[test]
fn scroll_baseline_moves_only_on_trigger() {
    let mut flip = FlipState::new();
    assert!(flip.scrolled_past_threshold(201.0));
    assert!(
        !flip.scrolled_past_threshold(201.0),
        "the gate rearmed at the new baseline"
    );
    assert!(!flip.scrolled_past_threshold(390.0));
    assert!(flip.scrolled_past_threshold(402.0));
}

#[test]
fn upward_scroll_neither_fires_nor_rearms() {
    let mut flip = FlipState::new();
    assert!(!flip.scrolled_past_threshold(-500.0));
    // The baseline stayed at 0, so a later downward pass still fires.
    assert!(flip.scrolled_past_threshold(201.0));
}
