use crate::dom;
use crate::frame::FrameContext;
use crate::keys::modal_action_for_key;
use crate::modal::LetterModal;
use crate::starfield::StarField;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Close, previous and next controls. Bound once for the page's lifetime.
pub fn wire_modal_controls(modal: &Rc<LetterModal>) {
    let els = modal.elements();

    let m = modal.clone();
    dom::add_click_listener(&els.close_icon, move || m.close());

    let m = modal.clone();
    dom::add_click_listener(&els.prev_btn, move || m.prev());

    let m = modal.clone();
    dom::add_click_listener(&els.next_btn, move || m.next());
}

pub fn wire_modal_keys(modal: &Rc<LetterModal>) {
    let modal = modal.clone();
    dom::add_window_listener("keydown", move |ev: web::KeyboardEvent| {
        if let Some(action) = modal_action_for_key(&ev.key()) {
            modal.apply(action);
        }
    });
}

pub fn wire_canvas_resize(frame_ctx: &Rc<RefCell<FrameContext>>) {
    let frame_ctx = frame_ctx.clone();
    dom::add_window_listener("resize", move |_: web::Event| {
        frame_ctx.borrow_mut().renderer.resize(dom::viewport());
    });
}

/// Cancel outstanding star timers when the page is really being unloaded.
///
/// A `persisted` page-hide goes into the back/forward cache and keeps its
/// timers; `pageshow` restarts the spawner in case it was stopped anyway.
pub fn wire_teardown(stars: &Rc<StarField>) {
    let on_hide = stars.clone();
    dom::add_window_listener("pagehide", move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            return;
        }
        log::info!("[stars] teardown, {} live", on_hide.live_count());
        on_hide.stop();
    });

    let on_show = stars.clone();
    dom::add_window_listener("pageshow", move |ev: web::PageTransitionEvent| {
        if !ev.persisted() {
            return;
        }
        if let Err(e) = on_show.start() {
            log::error!("[stars] restart failed: {:?}", e);
        }
    });
}
