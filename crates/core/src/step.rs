//! Steps and their payloads
//!
//! A [`Step`] is a tagged union keyed by [`Action`]: each variant carries the
//! payload type its action needs, so no runtime type inspection happens after
//! a step has been built.
//!
//! On the wire a step is `{ "action": string, "value": number | string | [string] }`.
//! [`RawStep`] is that shape; [`Step::from_parts`] validates it.

use crate::action::Action;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Loose step payload as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepValue {
    /// No payload (`null` or absent)
    #[default]
    None,
    /// Whole number
    Number(u64),
    /// Text
    Text(String),
    /// Ordered list of strings
    List(Vec<String>),
}

impl StepValue {
    /// Short name of the payload shape, for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            StepValue::None => "nothing",
            StepValue::Number(_) => "a number",
            StepValue::Text(_) => "a string",
            StepValue::List(_) => "a list",
        }
    }
}

impl From<u64> for StepValue {
    fn from(n: u64) -> Self {
        StepValue::Number(n)
    }
}

impl From<&str> for StepValue {
    fn from(s: &str) -> Self {
        StepValue::Text(s.to_string())
    }
}

impl From<String> for StepValue {
    fn from(s: String) -> Self {
        StepValue::Text(s)
    }
}

impl From<Vec<String>> for StepValue {
    fn from(v: Vec<String>) -> Self {
        StepValue::List(v)
    }
}

/// What a `wait` step waits for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WaitFor {
    /// A fixed number of seconds
    Seconds(u64),
    /// An element matching a selector
    Selector(String),
}

/// One action of a browser test together with its payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStep", into = "RawStep")]
pub enum Step {
    /// `wait`
    Wait(WaitFor),
    /// `select` a selector
    Select(String),
    /// `click`
    Click,
    /// `hover`
    Hover,
    /// `type` text
    Type(String),
    /// `goto` a URL
    Goto(String),
    /// `viewport` dimensions
    Viewport(String),
    /// `media` feature
    Media(String),
    /// `keyboard` combination
    Keyboard(String),
    /// `drag` coordinates
    Drag(Vec<String>),
    /// `swipe` coordinates
    Swipe(Vec<String>),
}

impl Step {
    /// Build a step from an action and a loose payload
    ///
    /// `click` and `hover` ignore whatever payload they are given, so an
    /// action change that leaves an old value behind still yields a valid step.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the payload shape does not fit the action.
    pub fn from_parts(action: Action, value: StepValue) -> Result<Self> {
        let invalid = |expected: &str, value: &StepValue| Error::InvalidValue {
            action,
            reason: format!("expected {}, got {}", expected, value.kind()),
        };

        match action {
            Action::Click => Ok(Step::Click),
            Action::Hover => Ok(Step::Hover),
            Action::Wait => match value {
                StepValue::Number(n) => Ok(Step::Wait(WaitFor::Seconds(n))),
                StepValue::Text(s) if !s.is_empty() => Ok(Step::Wait(WaitFor::Selector(s))),
                StepValue::Text(_) => Err(Error::InvalidValue {
                    action,
                    reason: "selector must not be empty".to_string(),
                }),
                other => Err(invalid("a duration or a selector", &other)),
            },
            Action::Drag | Action::Swipe => match value {
                StepValue::List(points) if action == Action::Drag => Ok(Step::Drag(points)),
                StepValue::List(points) => Ok(Step::Swipe(points)),
                other => Err(invalid("a list of coordinates", &other)),
            },
            _ => match value {
                StepValue::Text(s) => Ok(match action {
                    Action::Select => Step::Select(s),
                    Action::Type => Step::Type(s),
                    Action::Goto => Step::Goto(s),
                    Action::Viewport => Step::Viewport(s),
                    Action::Media => Step::Media(s),
                    _ => Step::Keyboard(s),
                }),
                other => Err(invalid("a string", &other)),
            },
        }
    }

    /// Convenience constructor for `wait <seconds>`
    pub fn wait(seconds: u64) -> Self {
        Step::Wait(WaitFor::Seconds(seconds))
    }

    /// Convenience constructor for `type <text>`
    pub fn type_text(text: impl Into<String>) -> Self {
        Step::Type(text.into())
    }

    /// Convenience constructor for `select <selector>`
    pub fn select(selector: impl Into<String>) -> Self {
        Step::Select(selector.into())
    }

    /// The action this step performs
    pub fn action(&self) -> Action {
        match self {
            Step::Wait(_) => Action::Wait,
            Step::Select(_) => Action::Select,
            Step::Click => Action::Click,
            Step::Hover => Action::Hover,
            Step::Type(_) => Action::Type,
            Step::Goto(_) => Action::Goto,
            Step::Viewport(_) => Action::Viewport,
            Step::Media(_) => Action::Media,
            Step::Keyboard(_) => Action::Keyboard,
            Step::Drag(_) => Action::Drag,
            Step::Swipe(_) => Action::Swipe,
        }
    }

    /// The payload in its loose wire shape
    pub fn value(&self) -> StepValue {
        match self {
            Step::Wait(WaitFor::Seconds(n)) => StepValue::Number(*n),
            Step::Wait(WaitFor::Selector(s))
            | Step::Select(s)
            | Step::Type(s)
            | Step::Goto(s)
            | Step::Viewport(s)
            | Step::Media(s)
            | Step::Keyboard(s) => StepValue::Text(s.clone()),
            Step::Click | Step::Hover => StepValue::None,
            Step::Drag(points) | Step::Swipe(points) => StepValue::List(points.clone()),
        }
    }

    /// Canonical key of this step
    pub fn key(&self) -> String {
        crate::canonical::canonical_key(self)
    }

    /// Apply a partial update, returning the resulting step
    ///
    /// Fields left `None` in the update keep their current value.
    pub fn updated(&self, update: &StepUpdate) -> Result<Step> {
        let action = update.action.unwrap_or_else(|| self.action());
        let value = match &update.value {
            Some(value) => value.clone(),
            None => self.value(),
        };
        Step::from_parts(action, value)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Wire shape of a step, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStep {
    /// Action identifier
    pub action: String,
    /// Payload; absent for valueless actions
    #[serde(default, skip_serializing_if = "is_none_value")]
    pub value: StepValue,
}

fn is_none_value(value: &StepValue) -> bool {
    matches!(value, StepValue::None)
}

impl TryFrom<RawStep> for Step {
    type Error = Error;

    fn try_from(raw: RawStep) -> Result<Self> {
        let action: Action = raw.action.parse()?;
        Step::from_parts(action, raw.value)
    }
}

impl From<Step> for RawStep {
    fn from(step: Step) -> Self {
        RawStep {
            action: step.action().as_str().to_string(),
            value: step.value(),
        }
    }
}

/// Partial update of a step, as committed by the step editor
///
/// `None` means "leave unchanged", never "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepUpdate {
    /// Replacement action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    /// Replacement payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<StepValue>,
}

impl StepUpdate {
    /// Update that changes nothing
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// Update that replaces only the payload
    pub fn value(value: impl Into<StepValue>) -> Self {
        StepUpdate {
            action: None,
            value: Some(value.into()),
        }
    }

    /// Update that replaces both action and payload
    pub fn replace(action: Action, value: impl Into<StepValue>) -> Self {
        StepUpdate {
            action: Some(action),
            value: Some(value.into()),
        }
    }

    /// Update that replaces the whole step
    pub fn from_step(step: &Step) -> Self {
        StepUpdate {
            action: Some(step.action()),
            value: Some(step.value()),
        }
    }

    /// Whether this update leaves a step as it is
    pub fn is_empty(&self) -> bool {
        self.action.is_none() && self.value.is_none()
    }
}
