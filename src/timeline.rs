// Declarative description of the letter reveal timeline.
//
// `anim.rs` turns a [`Timeline`] into anime.js parameter objects; keeping the
// values here lets the host tests check them without a browser.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tween {
    /// Animate from the current value to this one.
    To(f64),
    FromTo(f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Delay {
    None,
    Fixed(f64),
    /// `start + step * i` for the i-th target.
    Stagger { start: f64, step: f64 },
}

impl Delay {
    pub fn for_index(&self, i: usize) -> f64 {
        match *self {
            Delay::None => 0.0,
            Delay::Fixed(ms) => ms,
            Delay::Stagger { start, step } => start + step * i as f64,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    InOutExpo,
    OutExpo,
}

impl Easing {
    pub fn as_str(self) -> &'static str {
        match self {
            Easing::InOutExpo => "easeInOutExpo",
            Easing::OutExpo => "easeOutExpo",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    pub targets: &'static str,
    pub props: Vec<(&'static str, Tween)>,
    pub easing: Easing,
    pub duration_ms: u32,
    /// Relative start such as `"-=600"`; `None` starts after the previous stage.
    pub offset: Option<&'static str>,
    pub delay: Delay,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    pub looped: bool,
    pub stages: Vec<Stage>,
}

/// Underline sweep, staggered letters, then fade the whole block in.
pub fn letter_reveal() -> Timeline {
    Timeline {
        looped: false,
        stages: vec![
            Stage {
                targets: LINE_SELECTOR,
                props: vec![
                    ("scaleX", Tween::FromTo(0.0, 1.0)),
                    ("opacity", Tween::FromTo(REVEAL_LINE_OPACITY_FROM, 1.0)),
                ],
                easing: Easing::InOutExpo,
                duration_ms: REVEAL_STAGE_MS,
                offset: None,
                delay: Delay::None,
            },
            Stage {
                targets: REVEAL_LETTER_TARGETS,
                props: vec![
                    ("opacity", Tween::FromTo(0.0, 1.0)),
                    ("translateX", Tween::FromTo(REVEAL_LETTER_SHIFT_PX, 0.0)),
                    ("translateZ", Tween::To(0.0)),
                    ("scaleX", Tween::FromTo(REVEAL_LETTER_SCALE_FROM, 1.0)),
                ],
                easing: Easing::OutExpo,
                duration_ms: REVEAL_STAGE_MS,
                offset: Some(REVEAL_LETTERS_OFFSET),
                delay: Delay::Stagger {
                    start: REVEAL_LETTER_DELAY_START_MS,
                    step: REVEAL_LETTER_DELAY_STEP_MS,
                },
            },
            Stage {
                targets: REVEAL_ROOT_SELECTOR,
                props: vec![("opacity", Tween::To(1.0))],
                easing: Easing::OutExpo,
                duration_ms: REVEAL_STAGE_MS,
                offset: None,
                delay: Delay::Fixed(REVEAL_FADE_DELAY_MS),
            },
        ],
    }
}
