//! Events accepted by the transition engine.
//!
//! An event is a tagged value with exactly three variants. The closed enum
//! makes unknown tags unrepresentable inside the crate; where tags re-enter
//! as data (a serialized log, configuration), [`EventKind::from_str`] rejects
//! anything unrecognized with [`UnrecognizedEventError`] instead of ignoring
//! it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A lifecycle event for one asynchronous operation.
///
/// # Example
///
/// ```rust
/// use inflight::core::{Event, EventKind};
///
/// let event: Event<u32, String> = Event::Succeeded(42);
/// assert_eq!(event.kind(), EventKind::Succeeded);
/// assert_eq!(event.kind().tag(), "succeeded");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "lowercase",
    bound(
        serialize = "T: Serialize, E: Serialize",
        deserialize = "T: Deserialize<'de>, E: Deserialize<'de>"
    )
)]
pub enum Event<T, E> {
    /// An operation was issued.
    Started,
    /// The operation settled with a success value.
    Succeeded(T),
    /// The operation settled with a failure.
    Failed(E),
}

impl<T, E> Event<T, E> {
    /// Payload-free classification of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Started => EventKind::Started,
            Self::Succeeded(_) => EventKind::Succeeded,
            Self::Failed(_) => EventKind::Failed,
        }
    }
}

/// Event classification without the payload.
///
/// Used wherever an event needs to be named but not carried: transition log
/// entries, display, and parsing of external tags.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Started,
    Succeeded,
    Failed,
}

impl EventKind {
    /// The wire tag for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EventKind {
    type Err = UnrecognizedEventError;

    /// Parse an event tag, failing loudly on anything unrecognized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inflight::core::EventKind;
    ///
    /// assert_eq!("failed".parse::<EventKind>().unwrap(), EventKind::Failed);
    /// assert!("bogus".parse::<EventKind>().is_err());
    /// ```
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "started" => Ok(Self::Started),
            "succeeded" => Ok(Self::Succeeded),
            "failed" => Ok(Self::Failed),
            other => Err(UnrecognizedEventError {
                tag: other.to_string(),
            }),
        }
    }
}

/// An event tag outside the recognized set reached the transition engine's
/// boundary.
///
/// This indicates a programming defect in the caller, not a runtime
/// condition: it is never recovered from automatically.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized event tag '{tag}'")]
pub struct UnrecognizedEventError {
    /// The offending tag.
    pub tag: String,
}
