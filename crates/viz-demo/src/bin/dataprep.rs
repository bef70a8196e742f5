// File: crates/viz-demo/src/bin/dataprep.rs
// Summary: Converts a census CSV table into the economic-census JSON asset shape.

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct Row {
    municipality: String,
    closed: f64,
    established: f64,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        anyhow::bail!("usage: dataprep <input.csv> <output.json>");
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(&args[1])
        .with_context(|| format!("opening {}", args[1]))?;

    // Inspect headers (log them)
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |name: &str| headers.iter().position(|h| h == name);
    let municipality_idx = idx("municipality").or_else(|| idx("name"));
    let closed_idx = idx("closed").context("missing 'closed' column")?;
    let established_idx = idx("established").context("missing 'established' column")?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in rdr.records() {
        let record = record?;
        let field = |i: usize| record.get(i).unwrap_or("").to_string();
        let closed: f64 = match field(closed_idx).parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let established: f64 = match field(established_idx).parse() {
            Ok(v) => v,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        rows.push(Row {
            municipality: municipality_idx.map(field).unwrap_or_default(),
            closed,
            established,
        });
    }
    if skipped > 0 {
        println!("Skipped {} unparsable rows", skipped);
    }

    let out = std::fs::File::create(&args[2]).with_context(|| format!("creating {}", args[2]))?;
    serde_json::to_writer_pretty(out, &rows)?;
    println!("Wrote {} records to {}", rows.len(), args[2]);
    Ok(())
}
