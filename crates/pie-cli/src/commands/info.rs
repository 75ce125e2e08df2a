//! `pie info` — Display a container header summary.

use anyhow::Context;
use pie_bytecode::{layout, BytecodeImage};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct InfoSummary {
    file: String,
    size: usize,
    header_size: usize,
    entry_offset: Option<u32>,
}

fn summarize(file: &Path) -> anyhow::Result<InfoSummary> {
    let image = BytecodeImage::from_file(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;

    // A container shorter than the full header loads fine but has no
    // entry-point field; report that as a missing value
    Ok(InfoSummary {
        file: file.display().to_string(),
        size: image.len(),
        header_size: layout::SIZE,
        entry_offset: image.entry_offset().ok(),
    })
}

pub fn execute(file: &Path, json: bool) -> anyhow::Result<()> {
    let summary = summarize(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("File:         {}", summary.file);
    println!("Size:         {} bytes", summary.size);
    println!("Header:       {} bytes", summary.header_size);
    match summary.entry_offset {
        Some(offset) => println!("Entry offset: {} ({:#x})", offset, offset),
        None => println!("Entry offset: missing (container ends before the field)"),
    }

    Ok(())
}
