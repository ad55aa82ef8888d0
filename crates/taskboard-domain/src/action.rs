//! Board actions.
//!
//! An [`Action`] is the only way board data changes. Actions also have a JSON
//! form, `{"type": "ADD_TASK", "payload": {...}}`, so they can be replayed
//! from scripts or typed into the shell. Unrecognised `type` values decode to
//! [`Action::Unknown`], which the reducer ignores.

use serde::{Deserialize, Deserializer, Serialize};

use crate::board_state::BoardState;
use crate::task::{TaskDraft, TaskId, TaskStatus, TaskUpdate};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the whole board, used when hydrating from storage.
    SetState(BoardState),
    /// Drop every task and the whole activity log.
    ResetBoard,
    AddTask(TaskDraft),
    UpdateTask {
        id: TaskId,
        updates: TaskUpdate,
    },
    MoveTask {
        id: TaskId,
        #[serde(rename = "newStatus")]
        new_status: TaskStatus,
    },
    DeleteTask(TaskId),
    #[serde(skip_serializing)]
    Unknown(String),
}

impl Action {
    pub fn kind(&self) -> &str {
        match self {
            Action::SetState(_) => "SET_STATE",
            Action::ResetBoard => "RESET_BOARD",
            Action::AddTask(_) => "ADD_TASK",
            Action::UpdateTask { .. } => "UPDATE_TASK",
            Action::MoveTask { .. } => "MOVE_TASK",
            Action::DeleteTask(_) => "DELETE_TASK",
            Action::Unknown(kind) => kind,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Deserialize)]
struct RawAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

#[derive(Deserialize)]
struct UpdatePayload {
    id: TaskId,
    #[serde(default)]
    updates: TaskUpdate,
}

#[derive(Deserialize)]
struct MovePayload {
    id: TaskId,
    #[serde(rename = "newStatus")]
    new_status: TaskStatus,
}

impl TryFrom<RawAction> for Action {
    type Error = serde_json::Error;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let payload = raw.payload;
        let action = match raw.kind.as_str() {
            "SET_STATE" => Action::SetState(serde_json::from_value(payload)?),
            "RESET_BOARD" => Action::ResetBoard,
            "ADD_TASK" => Action::AddTask(serde_json::from_value(payload)?),
            "UPDATE_TASK" => {
                let p: UpdatePayload = serde_json::from_value(payload)?;
                Action::UpdateTask {
                    id: p.id,
                    updates: p.updates,
                }
            }
            "MOVE_TASK" => {
                let p: MovePayload = serde_json::from_value(payload)?;
                Action::MoveTask {
                    id: p.id,
                    new_status: p.new_status,
                }
            }
            "DELETE_TASK" => Action::DeleteTask(serde_json::from_value(payload)?),
            _ => Action::Unknown(raw.kind),
        };
        Ok(action)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawAction::deserialize(deserializer)?;
        Action::try_from(raw).map_err(serde::de::Error::custom)
    }
}
