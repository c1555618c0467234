//! Scan command - show the output plan without writing

use anyhow::Result;
use brres::{LengthSource, PlannedChunk};
use std::path::Path;

use crate::input::Container;

pub fn handle(input: &Path, classify: bool, json: bool) -> Result<()> {
    let container = Container::open(input, false)?;
    let planned = brres::plan(&container, classify);

    if json {
        println!("{}", serde_json::to_string_pretty(&planned)?);
        return Ok(());
    }

    if planned.is_empty() {
        match brres::find_magic(&container).len() {
            0 => println!("No occurrences of 'bres' found in {}", input.display()),
            magics => println!(
                "Found {magics} 'bres' magic(s) in {} but none starts a complete archive",
                input.display()
            ),
        }
        return Ok(());
    }

    println!("{}", format_table(&planned, classify));
    Ok(())
}

fn format_table(planned: &[PlannedChunk], classify: bool) -> String {
    let mut lines = vec![format!(
        "{:<20} {:>10} {:>10}  {:<8}{}",
        "File",
        "Offset",
        "Length",
        "Source",
        if classify { "  Categories" } else { "" }
    )];

    for entry in planned {
        let source = match entry.length_source {
            LengthSource::Declared => "header",
            LengthSource::Fallback => "fallback",
        };
        let mut line = format!(
            "{:<20} {:>#10x} {:>10}  {:<8}",
            brres::output::file_name(entry.index),
            entry.chunk.start,
            entry.chunk.length,
            source
        );
        if classify {
            let names: Vec<&str> = entry.categories.iter().map(|c| c.name()).collect();
            line.push_str("  ");
            line.push_str(if names.is_empty() { "-" } else { "" });
            line.push_str(&names.join(", "));
        }
        lines.push(line);
    }

    let total: usize = planned.iter().map(|p| p.chunk.length).sum();
    lines.push(format!("\n{} archive(s), {} byte(s)", planned.len(), total));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use brres::{Category, Chunk};

    fn entry(index: usize, start: usize, categories: &[Category]) -> PlannedChunk {
        PlannedChunk {
            index,
            chunk: Chunk { start, length: 32 },
            length_source: LengthSource::Declared,
            categories: categories.iter().copied().collect(),
        }
    }

    #[test]
    fn test_table_lists_every_chunk() {
        let planned = vec![entry(0, 0, &[]), entry(1, 32, &[])];
        let table = format_table(&planned, false);
        assert!(table.contains("output_0.brres"));
        assert!(table.contains("output_1.brres"));
        assert!(table.contains("0x20"));
        assert!(table.contains("2 archive(s), 64 byte(s)"));
        assert!(!table.contains("Categories"));
    }

    #[test]
    fn test_table_categories() {
        let planned = vec![
            entry(0, 0, &[Category::Textures, Category::Models3D]),
            entry(1, 32, &[]),
        ];
        let table = format_table(&planned, true);
        assert!(table.contains("Textures, 3DModels"));
        assert!(table.lines().nth(2).unwrap().ends_with('-'));
    }

    #[test]
    fn test_plan_json_shape() {
        let planned = vec![entry(3, 64, &[Category::Models3D])];
        let value = serde_json::to_value(&planned).unwrap();
        assert_eq!(value[0]["index"], 3);
        assert_eq!(value[0]["start"], 64);
        assert_eq!(value[0]["length"], 32);
        assert_eq!(value[0]["length_source"], "declared");
        assert_eq!(value[0]["categories"][0], "3DModels");
    }
}
