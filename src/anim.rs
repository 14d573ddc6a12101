//! Plays a [`Timeline`] through the page's anime.js global.

use crate::timeline::{Delay, Stage, Timeline, Tween};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    type AnimeTimeline;

    #[wasm_bindgen(catch, js_namespace = anime, js_name = timeline)]
    fn anime_timeline(params: &JsValue) -> Result<AnimeTimeline, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn add(this: &AnimeTimeline, params: &JsValue, offset: &JsValue) -> Result<AnimeTimeline, JsValue>;
}

type DelayFn = Closure<dyn FnMut(JsValue, f64) -> f64>;

/// Reusable player for one timeline. Stagger callbacks are created once and
/// kept alive here rather than leaked per run.
pub struct Reveal {
    timeline: Timeline,
    delays: Vec<Option<DelayFn>>,
}

impl Reveal {
    pub fn new(timeline: Timeline) -> Self {
        let delays = timeline
            .stages
            .iter()
            .map(|stage| match stage.delay {
                Delay::Stagger { .. } => {
                    let delay = stage.delay;
                    let f: DelayFn = Closure::wrap(Box::new(move |_el: JsValue, i: f64| {
                        delay.for_index(i.max(0.0) as usize)
                    }) as Box<dyn FnMut(JsValue, f64) -> f64>);
                    Some(f)
                }
                _ => None,
            })
            .collect();
        Self { timeline, delays }
    }

    /// Run the timeline once. A missing anime.js leaves the text as rendered.
    pub fn play(&self) {
        if let Err(e) = self.try_play() {
            log::warn!("[anim] reveal skipped: {:?}", e);
        }
    }

    fn try_play(&self) -> Result<(), JsValue> {
        let opts = Object::new();
        Reflect::set(&opts, &"loop".into(), &self.timeline.looped.into())?;
        let mut tl = anime_timeline(&opts)?;
        for (stage, delay_fn) in self.timeline.stages.iter().zip(&self.delays) {
            let params = stage_params(stage, delay_fn.as_ref())?;
            let offset = stage.offset.map(JsValue::from).unwrap_or(JsValue::UNDEFINED);
            tl = tl.add(&params, &offset)?;
        }
        Ok(())
    }
}

fn stage_params(stage: &Stage, delay_fn: Option<&DelayFn>) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &"targets".into(), &stage.targets.into())?;
    for (name, tween) in &stage.props {
        let value = match *tween {
            Tween::To(v) => JsValue::from_f64(v),
            Tween::FromTo(a, b) => Array::of2(&a.into(), &b.into()).into(),
        };
        Reflect::set(&obj, &(*name).into(), &value)?;
    }
    Reflect::set(&obj, &"easing".into(), &stage.easing.as_str().into())?;
    Reflect::set(&obj, &"duration".into(), &stage.duration_ms.into())?;
    let delay = match (stage.delay, delay_fn) {
        (Delay::Stagger { .. }, Some(f)) => f.as_ref().clone(),
        (d, _) => JsValue::from_f64(d.for_index(0)),
    };
    Reflect::set(&obj, &"delay".into(), &delay)?;
    Ok(obj.into())
}
