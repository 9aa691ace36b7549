// Navigation tests for the slide controller

use quinn_deck::deck::{self, PROMPT_SLIDE};
use quinn_deck::nav::{Direction, NavigationState, SlideController};

fn controller() -> SlideController {
    SlideController::new(deck::slides()).expect("deck is well formed")
}

#[test]
fn test_deck_order_and_labels() {
    let nav = controller();
    let labels: Vec<&str> = nav.slides().iter().map(|s| s.label).collect();
    assert_eq!(
        labels,
        ["Hero", "Friction", "Prompt", "Logic", "Escalation", "Impact"]
    );
    assert_eq!(nav.slides()[PROMPT_SLIDE].label, "Prompt");
    for (position, slide) in nav.slides().iter().enumerate() {
        assert_eq!(slide.id, position);
    }
}

#[test]
fn test_initial_state() {
    let nav = controller();
    assert_eq!(
        nav.state(),
        NavigationState {
            current_index: 0,
            direction: Direction::None,
        }
    );
    assert!(nav.is_first());
    assert!(!nav.is_last());
}

#[test]
fn test_rejects_empty_or_misnumbered_deck() {
    assert!(SlideController::new(Vec::new()).is_none());

    let mut slides = deck::slides();
    slides.swap(0, 1);
    assert!(SlideController::new(slides).is_none());
}

#[test]
fn test_go_next_stops_at_last_slide() {
    let mut nav = controller();
    let mut previous = nav.progress_fraction();
    for expected in 1..6 {
        assert!(nav.go_next());
        assert_eq!(nav.current_index(), expected);
        assert_eq!(nav.direction(), Direction::Forward);
        assert!(nav.progress_fraction() >= previous);
        previous = nav.progress_fraction();
    }
    assert!(nav.is_last());
    assert_eq!(nav.progress_fraction(), 1.0);

    let before = nav.state();
    assert!(!nav.go_next());
    assert_eq!(nav.state(), before);
    assert_eq!(nav.progress_fraction(), 1.0);
}

#[test]
fn test_go_prev_is_noop_on_first_slide() {
    let mut nav = controller();
    assert!(!nav.go_prev());
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.direction(), Direction::None);
}

#[test]
fn test_go_to_sets_direction_from_relative_position() {
    let mut nav = controller();
    assert!(nav.go_to(4));
    assert_eq!(nav.current_index(), 4);
    assert_eq!(nav.direction(), Direction::Forward);

    assert!(nav.go_to(1));
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.direction(), Direction::Backward);
}

#[test]
fn test_go_to_out_of_range_leaves_state_unchanged() {
    let mut nav = controller();
    nav.go_to(3);
    let before = nav.state();

    assert!(!nav.go_to(6));
    assert!(!nav.go_to(usize::MAX));
    assert_eq!(nav.state(), before);
}

#[test]
fn test_go_to_current_slide_is_noop() {
    let mut nav = controller();
    nav.go_to(2);
    nav.go_prev();
    assert_eq!(nav.direction(), Direction::Backward);

    assert!(!nav.go_to(1));
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.direction(), Direction::Backward);
}

#[test]
fn test_progress_fraction() {
    let mut nav = controller();
    assert!((nav.progress_fraction() - 1.0 / 6.0).abs() < 1e-9);
    nav.go_to(5);
    assert!((nav.progress_fraction() - 1.0).abs() < 1e-9);
}

#[test]
fn test_walkthrough_forward_then_jump_back() {
    let mut nav = controller();
    let mut visited = vec![nav.current_index()];
    while nav.go_next() {
        visited.push(nav.current_index());
    }
    assert_eq!(visited, [0, 1, 2, 3, 4, 5]);

    // A burst of requests is applied in order, one at a time
    nav.go_prev();
    nav.go_prev();
    nav.go_to(0);
    nav.go_next();
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.direction(), Direction::Forward);
}
