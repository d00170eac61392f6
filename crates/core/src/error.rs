use thiserror::Error;

/// Every failure is fatal to the run; nothing here is retried.
#[derive(Error, Debug)]
pub enum SurfError {
    /// Missing or rejected credential
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Network or HTTP failure reported by the provider
    #[error("Transport error{}: {message}", status_suffix(.status))]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// A raw item lacks a required field or carries an unusable value
    #[error("Malformed item: {field}")]
    MalformedItem { field: String },

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SurfError {
    pub fn authentication(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn transport(status: Option<u16>, msg: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: msg.into(),
        }
    }

    pub fn malformed(field: impl Into<String>) -> Self {
        Self::MalformedItem {
            field: field.into(),
        }
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    }
}
