use std::time::{SystemTime, UNIX_EPOCH};

/// Outcome of the most recent query, shown in the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Waiting,
    Ok,
    Failed,
}

impl RequestStatus {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Waiting => "waiting",
            Self::Ok => "ok",
            Self::Failed => "failed",
        }
    }
}

pub fn now_unix_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}
