use crate::config::LibmanConfig;
use std::path::PathBuf;

pub mod books;
pub mod config;
pub mod doctor;
pub mod helpers;
pub mod init;
pub mod loans;
pub mod members;

#[derive(Debug, Clone)]
pub struct LibmanPaths {
    pub config_dir: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Outcome of the housekeeping commands (`config`, `doctor`, `init`).
///
/// Catalog operations return their entities directly instead.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub config: Option<LibmanConfig>,
    pub doctor: Option<doctor::DoctorReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_config(mut self, config: LibmanConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_doctor(mut self, report: doctor::DoctorReport) -> Self {
        self.doctor = Some(report);
        self
    }
}
