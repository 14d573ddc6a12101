#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub mod anim;
pub mod clock;
pub mod constants;
pub mod dom;
pub mod error;
pub mod events;
pub mod frame;
pub mod keys;
pub mod letter;
pub mod modal;
pub mod pager;
pub mod render;
pub mod shader;
pub mod star;
pub mod starfield;
pub mod text;
pub mod timeline;

use error::SetupError;
use frame::FrameContext;
use modal::LetterModal;
use render::HeartRenderer;
use starfield::StarField;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-letter starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or(SetupError::NoDocument)?;

    // The heart is decoration; the letter still works without WebGL.
    match start_renderer(&document) {
        Ok(frame_ctx) => {
            events::wire_canvas_resize(&frame_ctx);
            frame::start_loop(frame_ctx);
        }
        Err(e) => log::error!("renderer disabled: {}", e),
    }

    let els = dom::PageElements::resolve(&document)?;
    let modal = Rc::new(LetterModal::new(els));
    events::wire_modal_controls(&modal);
    events::wire_modal_keys(&modal);

    let stars = StarField::new(document, modal)?;
    stars.start()?;
    events::wire_teardown(&stars);
    Ok(())
}

fn start_renderer(document: &web::Document) -> Result<Rc<RefCell<FrameContext>>, SetupError> {
    let canvas = dom::canvas(document)?;
    let renderer = HeartRenderer::new(canvas, dom::viewport())?;
    Ok(Rc::new(RefCell::new(FrameContext::new(renderer))))
}
