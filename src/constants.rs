/// Page tuning constants and DOM names.
///
/// Timing values are in milliseconds unless the name says otherwise. Every
/// element the page manipulates is named here so the markup contract lives in
/// one place.

// Star spawner
pub const STAR_SPAWN_INTERVAL_MS: i32 = 500;
pub const STAR_LIFETIME_MS: i32 = 5000;

// Star look (font size drives the glyph size of the CSS star)
pub const STAR_BASE_SIZE_PX: f64 = 20.0;
pub const STAR_SIZE_JITTER_PX: f64 = 12.0;
pub const STAR_BASE_DURATION_S: f64 = 4.0;
pub const STAR_DURATION_JITTER_S: f64 = 2.0;
pub const STAR_LEFT_MAX_PCT: f64 = 55.0;
pub const STAR_TOP_MAX_PCT: f64 = 100.0;

// Canvas and DOM contract
pub const CANVAS_ID: &str = "canvas";
pub const MODAL_SELECTOR: &str = ".modal";
pub const MODAL_SHOW_CLASS: &str = "modal_show";
pub const CLOSE_ICON_SELECTOR: &str = ".close_modal_icon";
pub const LETTER_ID: &str = "letter";
pub const NUM_PAGE_ID: &str = "num_page";
pub const TOTAL_PAGE_ID: &str = "total_page";
pub const PREV_BTN_SELECTOR: &str = ".prev_btn";
pub const NEXT_BTN_SELECTOR: &str = ".next_btn";
pub const LETTERS_SELECTOR: &str = ".ml14 .letters";
pub const LINE_SELECTOR: &str = ".ml14 .line";
pub const REVEAL_ROOT_SELECTOR: &str = ".ml14";
pub const STAR_CLASS: &str = "star";
pub const LETTER_CLASS: &str = "letter";
pub const REVEAL_LETTER_TARGETS: &str = ".ml14 .letter, .icon_heart";

// Text reveal timeline
pub const REVEAL_STAGE_MS: u32 = 500;
pub const REVEAL_LETTERS_OFFSET: &str = "-=600";
pub const REVEAL_LETTER_DELAY_START_MS: f64 = 150.0;
pub const REVEAL_LETTER_DELAY_STEP_MS: f64 = 25.0;
pub const REVEAL_FADE_DELAY_MS: f64 = 500.0;
pub const REVEAL_LETTER_SHIFT_PX: f64 = 40.0;
pub const REVEAL_LETTER_SCALE_FROM: f64 = 0.3;
pub const REVEAL_LINE_OPACITY_FROM: f64 = 0.5;
