// Shared helpers for the behavior tests.
pub use dais_core::{
    Presenter, PresenterConfig, RevealMode, Slide, Stage, StageExpansion, StageRenderFn, Text,
};

/// Config that keeps frames assertable: no clear sequences, no legend.
pub fn quiet_config() -> PresenterConfig {
    PresenterConfig::default()
        .with_clear_on_render(false)
        .with_show_controls(false)
}

/// Slide titled `title` with `stages` plain text stages.
pub fn staged_slide(title: &str, stages: usize) -> Slide {
    let mut slide = Slide::new(title).expect("title must be valid");
    for index in 0..stages {
        slide = slide.with_stage(Stage::text(format!("{title} point {index}")));
    }
    slide
}
