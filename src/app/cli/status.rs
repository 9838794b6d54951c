//! Status command implementation.

use std::path::PathBuf;

use colored::Colorize;

use crate::domain::{AppError, ArtifactState};

pub fn run_status(root: Option<PathBuf>) -> Result<(), AppError> {
    let report = match root {
        Some(root) => crate::app::api::status_at(root)?,
        None => crate::app::api::status()?,
    };

    for status in report {
        let state = match status.state {
            ArtifactState::Present => "present".green(),
            ArtifactState::Absent => "absent".dimmed(),
        };
        println!("{:<12} {:<8} {}", status.module.name(), state, status.artifact_path);
    }
    Ok(())
}
