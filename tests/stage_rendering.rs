//! Behavior-driven tests for stage rendering semantics.

use std::sync::Arc;

use dais_core::{DeckError, RevealMode, Slide, Stage, StageRenderFn, Text};

fn lettered_slide(mode: RevealMode) -> Slide {
    Slide::new("letters")
        .expect("title must be valid")
        .with_base("base")
        .with_stage(Stage::text("A").with_mode(mode))
        .with_stage(Stage::text("B").with_mode(mode))
        .with_stage(Stage::text("C").with_mode(mode))
}

#[tokio::test]
async fn slide_without_stages_renders_the_same_body_for_any_index() {
    // Given: a slide with base content and no stages
    let slide = Slide::new("plain")
        .expect("title must be valid")
        .with_base(["first line", "second line"]);

    // When: wildly different stage indices are requested
    let at_zero = slide.render_stage(0).await.expect("must render");
    let at_seven = slide.render_stage(7).await.expect("must render");
    let far_out = slide.render_stage(usize::MAX).await.expect("must render");

    // Then: the body never changes
    assert_eq!(at_zero, "first line\nsecond line");
    assert_eq!(at_zero, at_seven);
    assert_eq!(at_zero, far_out);
}

#[tokio::test]
async fn accumulate_stacks_every_stage_up_to_the_current_one() {
    let slide = lettered_slide(RevealMode::Accumulate);

    assert_eq!(slide.render_stage(0).await.expect("must render"), "base\nA");
    assert_eq!(
        slide.render_stage(2).await.expect("must render"),
        "base\nA\nB\nC"
    );
}

#[tokio::test]
async fn replace_and_append_show_only_the_selected_stage() {
    for mode in [RevealMode::Replace, RevealMode::Append] {
        let slide = lettered_slide(mode);

        let body = slide.render_stage(1).await.expect("must render");
        assert_eq!(body, "base\nB", "mode {mode} must show base + B only");
        assert!(!body.contains('A'));
        assert!(!body.contains('C'));
    }
}

#[tokio::test]
async fn out_of_range_indices_clamp_to_the_last_stage() {
    let slide = lettered_slide(RevealMode::Accumulate);

    let last = slide.render_stage(2).await.expect("must render");
    let beyond = slide.render_stage(100).await.expect("must render");
    assert_eq!(last, beyond);
}

#[tokio::test]
async fn deferred_stages_render_through_their_context() {
    // Given: a slide whose stages report the viewer's position
    let echo: StageRenderFn = Arc::new(|ctx| {
        Box::pin(async move {
            Ok(Text::Raw(format!(
                "step {}/{} of {}",
                ctx.stage_index + 1,
                ctx.total_stages,
                ctx.slide.title()
            )))
        })
    });
    let slide = Slide::new("live")
        .expect("title must be valid")
        .with_stage(Stage::deferred(echo.clone()))
        .with_stage(Stage::deferred(echo));

    // When: the second stage is selected with accumulate in effect
    let body = slide.render_stage(1).await.expect("must render");

    // Then: both realized stages see the selected index, not their own
    assert_eq!(body, "step 2/2 of live\nstep 2/2 of live");
}

#[tokio::test]
async fn a_failing_renderer_surfaces_instead_of_being_swallowed() {
    let failing: StageRenderFn = Arc::new(|_ctx| {
        Box::pin(async { Err(DeckError::renderer("simulated model outage")) })
    });
    let slide = Slide::new("fragile")
        .expect("title must be valid")
        .with_stage(Stage::deferred(failing));

    let err = slide.render_stage(0).await.expect_err("must fail");
    assert!(err.to_string().contains("simulated model outage"));
}
