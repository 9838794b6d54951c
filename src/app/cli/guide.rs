//! Guide command implementation.

use std::path::PathBuf;

use colored::Colorize;

use crate::domain::AppError;

pub fn run_guide(root: Option<PathBuf>) -> Result<(), AppError> {
    let summary = match root {
        Some(root) => crate::app::api::guide_at(root)?,
        None => crate::app::api::guide()?,
    };

    println!();
    println!("{}", "Module summary".bold());
    for report in &summary.modules {
        let label = report.state.label();
        let label = if report.state.is_active() { label.green() } else { label.dimmed() };
        println!("  {:<12} {}", report.module.name(), label);
    }
    println!("  {:<12} {}", "manifest", summary.manifest_path);
    Ok(())
}
