//! Step canonicalizer
//!
//! Turns a step into the string that identifies it when tests are merged.
//! Two steps merge into one tree node exactly when their keys are equal, so
//! the mapping must be injective over action + payload:
//!
//! | Step | Key |
//! |------|-----|
//! | wait 2 | `Wait 2s` |
//! | wait `#app` | `Wait for #app` |
//! | select `input` | `Select input` |
//! | click | `Click` |
//! | hover | `Hover` |
//! | type `Hello` | `Type Hello` |
//! | goto `https://a.b` | `Go to https://a.b` |
//! | viewport `800x600` | `Viewport 800x600` |
//! | media `prefers-color-scheme: dark` | `Media prefers-color-scheme: dark` |
//! | keyboard `Ctrl+A` | `Press Ctrl+A` |
//! | drag `["0,0", "5,5"]` | `Drag ["0,0", "5,5"]` |
//! | swipe `["0,0", "5,5"]` | `Swipe ["0,0", "5,5"]` |
//!
//! Every key starts with a word owned by one action, and list elements are
//! debug-quoted so element boundaries cannot be forged from inside a string.

use crate::action::Action;
use crate::error::Result;
use crate::step::{Step, StepValue, WaitFor};

/// Canonical key of a step
pub fn canonical_key(step: &Step) -> String {
    match step {
        Step::Wait(WaitFor::Seconds(n)) => format!("Wait {}s", n),
        Step::Wait(WaitFor::Selector(selector)) => format!("Wait for {}", selector),
        Step::Select(selector) => format!("Select {}", selector),
        Step::Click => "Click".to_string(),
        Step::Hover => "Hover".to_string(),
        Step::Type(text) => format!("Type {}", text),
        Step::Goto(url) => format!("Go to {}", url),
        Step::Viewport(dimensions) => format!("Viewport {}", dimensions),
        Step::Media(feature) => format!("Media {}", feature),
        Step::Keyboard(combination) => format!("Press {}", combination),
        Step::Drag(points) => format!("Drag {:?}", points),
        Step::Swipe(points) => format!("Swipe {:?}", points),
    }
}

/// Canonical key of an untyped action/payload pair
///
/// # Errors
///
/// Returns `UnknownAction` if `action` is outside the vocabulary and
/// `InvalidValue` if the payload does not fit it.
pub fn canonicalize(action: &str, value: &StepValue) -> Result<String> {
    let action: Action = action.parse()?;
    let step = Step::from_parts(action, value.clone())?;
    Ok(canonical_key(&step))
}
