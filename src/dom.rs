use crate::clock::Viewport;
use crate::constants::*;
use crate::error::SetupError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Convert a thrown JS value into an `anyhow` error.
#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Current `window.innerWidth/innerHeight`, or zero if unavailable.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::from_inner(dim(w.inner_width()), dim(w.inner_height()))
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Register a listener on `window` for the page's lifetime.
pub fn add_window_listener<E>(event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: JsCast + 'static,
{
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Elements of the letter modal, looked up once at startup.
#[derive(Clone, Debug)]
pub struct PageElements {
    pub modal: web::Element,
    pub close_icon: web::Element,
    pub letter: web::Element,
    pub num_page: web::Element,
    pub total_page: web::Element,
    pub prev_btn: web::Element,
    pub next_btn: web::Element,
    pub letters: web::Element,
    pub line: web::Element,
}

impl PageElements {
    pub fn resolve(document: &web::Document) -> Result<Self, SetupError> {
        Ok(Self {
            modal: query(document, MODAL_SELECTOR)?,
            close_icon: query(document, CLOSE_ICON_SELECTOR)?,
            letter: by_id(document, LETTER_ID)?,
            num_page: by_id(document, NUM_PAGE_ID)?,
            total_page: by_id(document, TOTAL_PAGE_ID)?,
            prev_btn: query(document, PREV_BTN_SELECTOR)?,
            next_btn: query(document, NEXT_BTN_SELECTOR)?,
            letters: query(document, LETTERS_SELECTOR)?,
            line: query(document, LINE_SELECTOR)?,
        })
    }
}

fn query(document: &web::Document, selector: &str) -> Result<web::Element, SetupError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| SetupError::MissingElement(selector.to_string()))
}

fn by_id(document: &web::Document, id: &str) -> Result<web::Element, SetupError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| SetupError::MissingElement(format!("#{id}")))
}

pub fn canvas(document: &web::Document) -> Result<web::HtmlCanvasElement, SetupError> {
    by_id(document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| SetupError::MissingElement(format!("canvas#{CANVAS_ID}")))
}
