//! Spawns clickable falling stars on a fixed period and removes each one
//! after a fixed lifetime.

use crate::constants::*;
use crate::dom::js_err;
use crate::modal::LetterModal;
use crate::star::{PendingStars, StarId, StarParams};
use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LiveStar {
    element: web::HtmlElement,
    timeout: i32,
    _on_click: Closure<dyn FnMut()>,
}

pub struct StarField {
    window: web::Window,
    document: web::Document,
    body: web::HtmlElement,
    modal: Rc<LetterModal>,
    pending: RefCell<PendingStars<LiveStar>>,
    interval: Cell<Option<i32>>,
    spawn_tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl StarField {
    pub fn new(document: web::Document, modal: Rc<LetterModal>) -> anyhow::Result<Rc<Self>> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        Ok(Rc::new(Self {
            window,
            document,
            body,
            modal,
            pending: RefCell::new(PendingStars::new()),
            interval: Cell::new(None),
            spawn_tick: RefCell::new(None),
        }))
    }

    /// Begin spawning. Calling again while running is a no-op.
    pub fn start(self: &Rc<Self>) -> anyhow::Result<()> {
        if self.is_running() {
            return Ok(());
        }
        let field = Rc::downgrade(self);
        let tick = Closure::wrap(Box::new(move || {
            if let Some(field) = field.upgrade() {
                if let Err(e) = field.spawn() {
                    log::warn!("[stars] spawn failed: {:?}", e);
                }
            }
        }) as Box<dyn FnMut()>);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                STAR_SPAWN_INTERVAL_MS,
            )
            .map_err(js_err)?;
        self.interval.set(Some(id));
        *self.spawn_tick.borrow_mut() = Some(tick);
        log::info!("[stars] spawning every {}ms", STAR_SPAWN_INTERVAL_MS);
        Ok(())
    }

    /// Stop spawning, cancel pending removals and take every star off the page.
    pub fn stop(&self) {
        if let Some(id) = self.interval.take() {
            self.window.clear_interval_with_handle(id);
        }
        self.spawn_tick.borrow_mut().take();
        let live = self.pending.borrow_mut().drain();
        for (_, star) in live {
            self.window.clear_timeout_with_handle(star.timeout);
            star.element.remove();
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.get().is_some()
    }

    pub fn live_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Put one star on the page and arm its removal timer.
    pub fn spawn(self: &Rc<Self>) -> anyhow::Result<StarId> {
        let params = StarParams::random(&mut rand::thread_rng());
        let element = self
            .document
            .create_element("div")
            .map_err(js_err)?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow!("div is not an HtmlElement"))?;
        element.set_class_name(STAR_CLASS);
        let style = element.style();
        for (name, value) in params.style() {
            _ = style.set_property(name, &value);
        }

        let modal = self.modal.clone();
        let on_click = Closure::wrap(Box::new(move || modal.open()) as Box<dyn FnMut()>);
        element.set_onclick(Some(on_click.as_ref().unchecked_ref()));
        self.body.append_child(&element).map_err(js_err)?;

        let id = self.pending.borrow_mut().reserve();
        let field = Rc::downgrade(self);
        // Frees itself after running; a cancelled timer leaks only this shim.
        let expire = Closure::once_into_js(move || {
            if let Some(field) = field.upgrade() {
                field.expire(id);
            }
        });
        let timeout = match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                expire.unchecked_ref(),
                STAR_LIFETIME_MS,
            ) {
            Ok(t) => t,
            Err(e) => {
                element.remove();
                return Err(js_err(e));
            }
        };
        self.pending.borrow_mut().insert(
            id,
            LiveStar {
                element,
                timeout,
                _on_click: on_click,
            },
        );
        Ok(id)
    }

    /// Remove a star whose lifetime is over. Unknown ids are ignored.
    pub fn expire(&self, id: StarId) {
        let star = self.pending.borrow_mut().take(id);
        if let Some(star) = star {
            // no-op when called from the timer itself
            self.window.clear_timeout_with_handle(star.timeout);
            star.element.remove();
        }
    }
}
