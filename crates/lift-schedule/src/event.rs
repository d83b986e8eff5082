//! Scripted inputs.

use std::fmt;

use lift_core::Call;

/// One input applied to the system at a scheduled tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScriptEvent {
    /// A hall button press.
    Call(Call),
    /// A floor button pressed inside lift `lift`.
    Panel { lift: String, floor: i32 },
}

impl ScriptEvent {
    pub fn panel(lift: impl Into<String>, floor: i32) -> Self {
        ScriptEvent::Panel { lift: lift.into(), floor }
    }

    /// The floor this event refers to.
    pub fn floor(&self) -> i32 {
        match self {
            ScriptEvent::Call(call)          => call.floor,
            ScriptEvent::Panel { floor, .. } => *floor,
        }
    }
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptEvent::Call(call)              => write!(f, "call {call}"),
            ScriptEvent::Panel { lift, floor }   => write!(f, "panel {lift}->{floor}"),
        }
    }
}
