//! Hook event JSON from Claude Code.
//!
//! The wire format carries an open `tool_input` object. It is narrowed here
//! to a typed request per known tool; anything unrecognised keeps only its
//! name.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Result;

/// Which notification the automation system sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventKind {
    Stop,
    PermissionRequest,
    #[default]
    Unknown,
}

impl EventKind {
    fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("Stop") => Self::Stop,
            Some("PermissionRequest") => Self::PermissionRequest,
            _ => Self::Unknown,
        }
    }
}

/// The tool a permission request is about, with only the fields we speak about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    Shell { command: String },
    Write { file_path: String },
    Edit { file_path: String },
    Other { name: String },
}

impl ToolRequest {
    fn from_parts(name: &str, input: &Map<String, Value>) -> Self {
        match name {
            "Bash" => Self::Shell {
                command: string_arg(input, &["command"]),
            },
            "Write" => Self::Write {
                file_path: string_arg(input, &["file_path", "filePath"]),
            },
            "Edit" => Self::Edit {
                file_path: string_arg(input, &["file_path", "filePath"]),
            },
            other => Self::Other {
                name: other.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookEvent {
    pub kind: EventKind,
    /// None when the input names no tool (or an empty one).
    pub tool: Option<ToolRequest>,
}

// --- Raw event JSON ---

#[derive(Deserialize, Default)]
struct RawHookEvent {
    #[serde(alias = "hook_event_name")]
    hook_type: Option<Value>,
    tool_name: Option<Value>,
    tool_input: Option<Value>,
}

impl From<RawHookEvent> for HookEvent {
    fn from(raw: RawHookEvent) -> Self {
        let empty = Map::new();
        let input = raw
            .tool_input
            .as_ref()
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let tool = match raw.tool_name {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::String(name)) if name.is_empty() => None,
            Some(Value::String(name)) => Some(ToolRequest::from_parts(&name, input)),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
            // Some other value names a tool we cannot know anything about
            Some(other) => Some(ToolRequest::Other {
                name: other.to_string(),
            }),
        };

        Self {
            kind: EventKind::from_name(raw.hook_type.as_ref().and_then(Value::as_str)),
            tool,
        }
    }
}

impl HookEvent {
    /// Parse one JSON document. Blank input is the default event.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawHookEvent = serde_json::from_str(input)?;
        Ok(raw.into())
    }

    /// Like [`HookEvent::parse`], but malformed input becomes the default event.
    pub fn parse_or_default(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|e| {
            warn!("{e}; treating input as an empty event");
            Self::default()
        })
    }

    /// Read all of stdin and parse it, never failing.
    pub async fn from_stdin() -> Self {
        use tokio::io::AsyncReadExt;

        let mut input = String::new();
        if let Err(e) = tokio::io::stdin().read_to_string(&mut input).await {
            warn!("Failed to read stdin: {e}; treating input as an empty event");
            return Self::default();
        }
        debug!("Read {} bytes of hook input", input.len());
        Self::parse_or_default(&input)
    }
}

/// First present key as a string; missing or non-string values become "".
fn string_arg(input: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| input.get(*key))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
