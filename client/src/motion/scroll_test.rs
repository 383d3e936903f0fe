use super::*;

#[test]
fn progress_starts_when_section_enters_from_below() {
    assert_eq!(scroll_progress(800.0, 600.0, 800.0), 0.0);
    assert_eq!(scroll_progress(1200.0, 600.0, 800.0), 0.0);
}

#[test]
fn progress_ends_when_section_leaves_through_top() {
    assert_eq!(scroll_progress(-600.0, 600.0, 800.0), 1.0);
    assert_eq!(scroll_progress(-2000.0, 600.0, 800.0), 1.0);
}

#[test]
fn progress_is_linear_in_between() {
    // Halfway through 1400px of travel.
    assert!((scroll_progress(100.0, 600.0, 800.0) - 0.5).abs() < 1e-9);
}

#[test]
fn degenerate_viewport_reports_zero() {
    assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
}

#[test]
fn hue_spans_blue_to_violet() {
    assert_eq!(hue_for_progress(0.0), HUE_START);
    assert_eq!(hue_for_progress(1.0), HUE_END);
    assert_eq!(hue_for_progress(0.5), 230.0);
    assert_eq!(hue_for_progress(7.0), HUE_END);
}

#[test]
fn gradient_offsets_second_stop() {
    assert_eq!(
        contact_gradient(200.0),
        "linear-gradient(135deg, hsl(200.0, 100%, 97%), hsl(240.0, 100%, 95%))"
    );
}
