use super::*;

#[test]
fn easing_curves_render_as_css() {
    assert_eq!(Easing::Linear.css(), "linear");
    assert_eq!(Easing::EaseOut.css(), "cubic-bezier(0, 0, 0.58, 1)");
    assert_eq!(Easing::EaseInOut.css(), "cubic-bezier(0.42, 0, 0.58, 1)");
    assert_eq!(Easing::default(), Easing::EaseOut);
}

#[test]
fn transition_builder_clamps_negative_values() {
    let t = Transition::new(-1.0).delay(-0.5).easing(Easing::Linear);
    assert_eq!(t.duration_s, 0.0);
    assert_eq!(t.delay_s, 0.0);
    assert_eq!(t.easing, Easing::Linear);
}

#[test]
fn transition_css_rounds_to_milliseconds() {
    let t = Transition::new(0.7).delay(stagger(3, 0.1));
    assert_eq!(t.css_for("opacity"), "opacity 0.700s cubic-bezier(0, 0, 0.58, 1) 0.300s");
}

#[test]
fn fade_up_hides_below_and_shows_in_place() {
    let motion = RevealMotion::fade_up(16.0);
    assert_eq!(motion.pose(false).opacity, 0.0);
    assert_eq!(motion.pose(false).y, 16.0);
    assert_eq!(motion.pose(true), Pose::default());
}

#[test]
fn style_switches_target_pose_but_keeps_transition() {
    let motion = RevealMotion::fade_up(12.0).with_transition(Transition::new(0.5).delay(0.05));
    let hidden = motion.style(false);
    let shown = motion.style(true);

    assert!(hidden.starts_with("opacity:0;transform:translate3d(0px,12px,0) scale(1);"));
    assert!(shown.starts_with("opacity:1;transform:translate3d(0px,0px,0) scale(1);"));
    let transition = "transition:opacity 0.500s cubic-bezier(0, 0, 0.58, 1) 0.050s,\
                      transform 0.500s cubic-bezier(0, 0, 0.58, 1) 0.050s;";
    assert!(hidden.ends_with(transition));
    assert!(shown.ends_with(transition));
    assert!(!hidden.contains("clip-path"));
}

#[test]
fn wipe_in_animates_clip_path() {
    let motion = RevealMotion::wipe_in();
    assert!(motion.style(false).contains("clip-path:inset(0 100% 0 0);"));
    assert!(motion.style(true).contains("clip-path:inset(0 0% 0 0);"));
    assert!(motion.style(true).contains("clip-path 0.900s cubic-bezier(0.42, 0, 0.58, 1) 0.000s"));
}

#[test]
fn settle_zoom_starts_enlarged() {
    let motion = RevealMotion::settle_zoom(1.12);
    assert_eq!(motion.pose(false).scale, 1.12);
    assert_eq!(motion.pose(false).opacity, 1.0);
    assert_eq!(motion.pose(true).scale, 1.0);
    assert_eq!(motion.transition.duration_s, 1.2);
}

#[test]
fn stagger_scales_with_index() {
    assert_eq!(stagger(0, 0.04), 0.0);
    assert!((stagger(5, 0.04) - 0.2).abs() < 1e-9);
}
