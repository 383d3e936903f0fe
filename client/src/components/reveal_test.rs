use super::*;

fn render(build: impl FnOnce() -> AnyView) -> String {
    Owner::new().with(|| build().to_html())
}

#[test]
fn reveal_item_renders_hidden_pose_on_first_paint() {
    let motion = RevealMotion::fade_up(16.0).with_transition(Transition::new(0.7));
    let html = render(|| {
        view! {
            <RevealItem motion=motion class="copy">
                "Hello"
            </RevealItem>
        }
        .into_any()
    });

    let hidden = motion.style(false);
    assert!(hidden.starts_with("opacity:0;"));
    assert!(hidden.contains("transition:opacity 0.700s"));
    assert!(html.contains(&hidden), "{html}");
    assert!(!html.contains(&motion.style(true)));
    assert!(html.contains("Hello"));
}

#[test]
fn reveal_wrapper_uses_section_fade_with_delay() {
    let html = render(|| {
        view! {
            <Reveal delay=0.2>
                <p>"Copy"</p>
            </Reveal>
        }
        .into_any()
    });

    let expected = RevealMotion::fade_up(16.0).with_transition(Transition::new(0.7).delay(0.2)).style(false);
    assert!(html.contains(&expected), "{html}");
}
