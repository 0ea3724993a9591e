//! Boards command implementation - List the board registry

use anyhow::Result;

use crate::boards::BoardRegistry;
use crate::models::{BoardRecord, BoardSummary};

/// Execute the boards command to list known board manifests
pub fn execute_boards_command(filter: Option<&str>, json_output: bool) -> Result<()> {
    let registry = BoardRegistry::bundled();
    let records: Vec<&BoardRecord> = match filter {
        Some(filter) => registry.search(filter),
        None => registry.iter().collect(),
    };

    if json_output {
        let summaries: Vec<BoardSummary> = records.iter().map(|r| BoardSummary::from(*r)).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("⚠️  No boards match the filter");
        return Ok(());
    }

    println!("🔍 Known Boards:");
    println!("================\n");
    for record in &records {
        println!("{}", record.name);
        println!("  Id:        {}", record.id);
        println!("  Platform:  {}", record.platform);
        println!("  MCU:       {} ({})", record.mcu, record.f_cpu);
        println!("  Frameworks: {}", record.frameworks.join(", "));
        println!();
    }
    println!("Total boards: {}", records.len());

    Ok(())
}
