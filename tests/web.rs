#![cfg(target_arch = "wasm32")]

use heart_letter::clock::{FrameUniforms, Viewport};
use heart_letter::constants::{MODAL_SHOW_CLASS, STAR_CLASS, STAR_LIFETIME_MS};
use heart_letter::dom::PageElements;
use heart_letter::error::SetupError;
use heart_letter::events;
use heart_letter::keys::ModalAction;
use heart_letter::modal::LetterModal;
use heart_letter::render::HeartRenderer;
use heart_letter::starfield::StarField;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const FIXTURE: &str = r#"
<div class="modal">
  <i class="close_modal_icon"></i>
  <h1 class="ml14"><span class="letters" id="letter"></span><span class="line"></span></h1>
  <button class="prev_btn"></button>
  <span id="num_page"></span>/<span id="total_page"></span>
  <button class="next_btn"></button>
</div>
"#;

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn modal() -> LetterModal {
    let document = document();
    if document.get_element_by_id("letter").is_none() {
        let host = document.create_element("div").unwrap();
        host.set_inner_html(FIXTURE);
        document.body().unwrap().append_child(&host).unwrap();
    }
    let els = PageElements::resolve(&document).expect("fixture elements");
    LetterModal::new(els)
}

fn counter(modal: &LetterModal) -> String {
    modal.elements().num_page.text_content().unwrap_or_default()
}

fn star_field() -> (Rc<LetterModal>, Rc<StarField>) {
    let modal = Rc::new(modal());
    let field = StarField::new(document(), modal.clone()).unwrap();
    (modal, field)
}

fn last_body_child() -> web_sys::HtmlElement {
    document()
        .body()
        .unwrap()
        .last_element_child()
        .unwrap()
        .dyn_into()
        .unwrap()
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

fn dispatch_page_transition(kind: &str, persisted: bool) {
    let init = web_sys::PageTransitionEventInit::new();
    init.set_persisted(persisted);
    let ev = web_sys::PageTransitionEvent::new_with_event_init_dict(kind, &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&ev).unwrap();
}

#[wasm_bindgen_test]
fn open_shows_first_page() {
    let modal = modal();
    modal.open();
    assert!(modal.is_visible());
    assert!(modal.elements().modal.class_list().contains(MODAL_SHOW_CLASS));
    assert_eq!(counter(&modal), "1");
    assert_eq!(
        modal.elements().total_page.text_content().as_deref(),
        Some("7")
    );
    assert!(modal.elements().letters.query_selector(".letter").unwrap().is_some());
}

#[wasm_bindgen_test]
fn paging_clamps_at_both_ends() {
    let modal = modal();
    modal.open();
    for _ in 0..10 {
        modal.next();
    }
    assert_eq!(modal.index(), 6);
    assert_eq!(counter(&modal), "7");
    for _ in 0..10 {
        modal.prev();
    }
    assert_eq!(modal.index(), 0);
    assert_eq!(counter(&modal), "1");
}

#[wasm_bindgen_test]
fn close_hides_and_keys_are_ignored_while_hidden() {
    let modal = modal();
    modal.open();
    modal.apply(ModalAction::Close);
    assert!(!modal.is_visible());
    assert!(!modal.elements().modal.class_list().contains(MODAL_SHOW_CLASS));
    modal.apply(ModalAction::Next);
    assert_eq!(modal.index(), 0);
}

#[wasm_bindgen_test]
fn resize_and_draw_upload_viewport_and_time() {
    let canvas: web_sys::HtmlCanvasElement = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    let mut renderer = match HeartRenderer::new(canvas.clone(), Viewport::new(64, 48)) {
        Ok(r) => r,
        // headless runners without a GL context
        Err(SetupError::ContextUnavailable) => return,
        Err(e) => panic!("setup failed: {}", e),
    };

    renderer.resize(Viewport::new(300, 200));
    renderer.resize(Viewport::new(300, 200));
    assert_eq!((canvas.width(), canvas.height()), (300, 200));

    let uploaded = renderer.draw(2.5);
    assert_eq!(
        uploaded,
        FrameUniforms {
            time: 2.5,
            width: 300.0,
            height: 200.0,
        }
    );

    let (gl, program) = renderer.context();
    let read = |name: &str| {
        let loc = gl.get_uniform_location(program, name).unwrap();
        gl.get_uniform(program, &loc).as_f64().unwrap()
    };
    assert_eq!(read("width"), 300.0);
    assert_eq!(read("height"), 200.0);
    assert_eq!(read("time"), 2.5);
}

#[wasm_bindgen_test]
fn clicked_star_opens_the_letter_and_expires() {
    let (modal, field) = star_field();
    modal.close();

    let id = field.spawn().unwrap();
    let star = last_body_child();
    assert_eq!(star.class_name(), STAR_CLASS);
    let style = star.style();
    assert!(style.get_property_value("left").unwrap().ends_with('%'));
    assert!(style.get_property_value("top").unwrap().ends_with('%'));
    assert!(style.get_property_value("font-size").unwrap().ends_with("px"));
    assert!(style
        .get_property_value("animation-duration")
        .unwrap()
        .ends_with('s'));
    assert_eq!(field.live_count(), 1);

    star.click();
    assert!(modal.is_visible());
    assert_eq!(modal.index(), 0);
    assert_eq!(counter(&modal), "1");

    field.expire(id);
    assert!(!star.is_connected());
    assert_eq!(field.live_count(), 0);
    field.expire(id);
    assert_eq!(field.live_count(), 0);
}

#[wasm_bindgen_test]
fn stop_removes_every_live_star() {
    let (_modal, field) = star_field();
    let stars: Vec<_> = (0..3)
        .map(|_| {
            field.spawn().unwrap();
            last_body_child()
        })
        .collect();
    assert_eq!(field.live_count(), 3);

    field.stop();
    assert_eq!(field.live_count(), 0);
    assert!(!field.is_running());
    assert!(stars.iter().all(|s| !s.is_connected()));
}

#[wasm_bindgen_test]
async fn star_is_removed_when_its_lifetime_ends() {
    let (_modal, field) = star_field();
    field.spawn().unwrap();
    let star = last_body_child();

    sleep_ms(STAR_LIFETIME_MS - 300).await;
    assert!(star.is_connected());
    assert_eq!(field.live_count(), 1);

    sleep_ms(600).await;
    assert!(!star.is_connected());
    assert_eq!(field.live_count(), 0);
}

#[wasm_bindgen_test]
async fn spawner_starts_again_after_stop() {
    let (_modal, field) = star_field();
    field.start().unwrap();
    assert!(field.is_running());
    sleep_ms(1200).await;
    assert!(field.live_count() >= 1);

    field.stop();
    assert!(!field.is_running());
    assert_eq!(field.live_count(), 0);

    field.start().unwrap();
    sleep_ms(700).await;
    assert!(field.live_count() >= 1);
    field.stop();
}

#[wasm_bindgen_test]
fn cached_page_hide_keeps_the_spawner_running() {
    let (_modal, field) = star_field();
    field.start().unwrap();
    events::wire_teardown(&field);

    dispatch_page_transition("pagehide", true);
    assert!(field.is_running());

    dispatch_page_transition("pagehide", false);
    assert!(!field.is_running());

    dispatch_page_transition("pageshow", true);
    assert!(field.is_running());
    field.stop();
}
