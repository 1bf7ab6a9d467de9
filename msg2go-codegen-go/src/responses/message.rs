use msg2go_core::go_string_literal;

use super::ResponseSpec;

/// Name of the state slot holding the last action's message.
pub const ACTION_MESSAGE: &str = "actionMessage";

fn assign(message: &str) -> String {
    format!("{ACTION_MESSAGE} = {}", go_string_literal(message))
}

/// `actionMessage = "<free text>"`; an empty message when there is none.
pub fn show_text(spec: &ResponseSpec) -> Option<String> {
    Some(assign(spec.free_text().unwrap_or_default()))
}

/// Popups are surfaced through the same message slot as `show_text`.
pub fn pop_msg(spec: &ResponseSpec) -> Option<String> {
    show_text(spec)
}

/// `actionMessage = "navigate:<page_id>"`.
///
/// Only one page is generated, so the target is reported instead of followed.
pub fn navigate(spec: &ResponseSpec) -> Option<String> {
    let target = spec
        .text("page_id")
        .or_else(|| spec.text("page"))
        .or_else(|| spec.free_text())?;
    Some(assign(&format!("navigate:{target}")))
}
