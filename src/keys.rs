/// What a key press does to the letter modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Next,
    Prev,
    Close,
}

/// Map a `KeyboardEvent.key` value to a modal action.
#[inline]
pub fn modal_action_for_key(key: &str) -> Option<ModalAction> {
    match key {
        "ArrowRight" | "PageDown" => Some(ModalAction::Next),
        "ArrowLeft" | "PageUp" => Some(ModalAction::Prev),
        "Escape" | "Esc" => Some(ModalAction::Close),
        _ => None,
    }
}
