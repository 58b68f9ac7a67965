//! Action vocabulary
//!
//! Every step performs exactly one action from a fixed vocabulary.
//!
//! | Action | Payload |
//! |--------|---------|
//! | wait | seconds (number) or selector (string) |
//! | select | selector |
//! | click | none |
//! | hover | none |
//! | type | text |
//! | goto | URL |
//! | viewport | dimensions, `WxH` |
//! | media | media feature, `feature: value` |
//! | keyboard | key combination, `Ctrl+A` |
//! | drag | coordinate list |
//! | swipe | coordinate list |

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of step a browser test can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Wait for a number of seconds or for a selector to appear
    Wait,
    /// Select the element(s) later actions apply to
    Select,
    /// Click the selected element
    Click,
    /// Hover over the selected element
    Hover,
    /// Type text into the selected element
    Type,
    /// Navigate to a URL
    Goto,
    /// Resize the viewport
    Viewport,
    /// Emulate a CSS media feature
    Media,
    /// Press a key combination
    Keyboard,
    /// Drag between coordinates
    Drag,
    /// Swipe between coordinates
    Swipe,
}

impl Action {
    /// All actions, in the order the editor lists them
    pub const ALL: [Action; 11] = [
        Action::Wait,
        Action::Viewport,
        Action::Media,
        Action::Goto,
        Action::Select,
        Action::Hover,
        Action::Click,
        Action::Drag,
        Action::Swipe,
        Action::Keyboard,
        Action::Type,
    ];

    /// Wire identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Action::Wait => "wait",
            Action::Select => "select",
            Action::Click => "click",
            Action::Hover => "hover",
            Action::Type => "type",
            Action::Goto => "goto",
            Action::Viewport => "viewport",
            Action::Media => "media",
            Action::Keyboard => "keyboard",
            Action::Drag => "drag",
            Action::Swipe => "swipe",
        }
    }

    /// Parse from wire identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == id)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Action::from_id(s).ok_or_else(|| Error::UnknownAction {
            action: s.to_string(),
        })
    }
}
