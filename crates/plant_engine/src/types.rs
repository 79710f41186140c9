use std::fmt;

/// Terminal failure of a single client call. `message` is meant for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn network(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Network, message)
    }

    pub(crate) fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::new(FailureKind::Upstream { status }, message)
    }

    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Protocol, message)
    }

    pub(crate) fn parse() -> Self {
        Self::new(FailureKind::Parse, "failed to parse API response")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Transport failure: unreachable host, connection reset, timeout.
    Network,
    /// Non-2xx status from the upstream service.
    Upstream { status: u16 },
    /// Well-formed response with an unexpected shape.
    Protocol,
    /// Body or embedded content is not valid JSON.
    Parse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Upstream { status } => write!(f, "upstream error (http status {status})"),
            FailureKind::Protocol => write!(f, "protocol error"),
            FailureKind::Parse => write!(f, "parse error"),
        }
    }
}
