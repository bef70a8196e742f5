// File: crates/viz-demo/src/main.rs
// Summary: Demo loads the bundled JSON assets and renders every gallery chart to SVG files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use viz_core::dataset::{
    self, CensusRecord, CityRecord, FlowMatrix, NetworkData, PopulationRecord, RainfallRecord,
    TreeNode, TrendRecord,
};
use viz_core::geo::FeatureCollection;
use viz_core::{Element, Frame, Theme};

fn main() -> Result<()> {
    // Accept paths from CLI or fall back to the repo layout.
    let data_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "data".to_string()));
    let out_dir = PathBuf::from(std::env::args().nth(2).unwrap_or_else(|| "target/out".to_string()));
    std::fs::create_dir_all(&out_dir)?;
    println!("Reading assets from {}", data_dir.display());

    let frame = Frame::default();
    let theme = Theme::light();

    let population: Vec<PopulationRecord> = load(&data_dir, "prefecture-population.json")?;
    write_svg(&out_dir, "bar-chart.svg", viz_charts::bar_chart(&population, &frame, &theme))?;

    let flows: FlowMatrix = load(&data_dir, "migration-flows.json")?;
    write_svg(&out_dir, "chord-diagram.svg", viz_charts::chord_diagram(&flows, &frame, &theme))?;

    let regions: FeatureCollection = load(&data_dir, "region-map.json")?;
    write_svg(&out_dir, "choropleth-map.svg", viz_charts::choropleth_map(&regions, &frame, &theme))?;

    let rainfall: Vec<RainfallRecord> = load(&data_dir, "monthly-rainfall.json")?;
    write_svg(&out_dir, "density-plot.svg", viz_charts::density_plot(&rainfall, &frame, &theme))?;

    let trend: Vec<TrendRecord> = load(&data_dir, "tourism-trend.json")?;
    write_svg(&out_dir, "line-chart.svg", viz_charts::line_chart(&trend, &frame, &theme))?;

    let network: NetworkData = load(&data_dir, "collaboration-network.json")?;
    write_svg(&out_dir, "node-link-diagram.svg", viz_charts::node_link_diagram(&network, &frame, &theme))?;

    let cities: Vec<CityRecord> = load(&data_dir, "city-stats.json")?;
    write_svg(&out_dir, "scatter-plot.svg", viz_charts::scatter_plot(&cities, &frame, &theme))?;

    let industry: TreeNode = load(&data_dir, "industry-share.json")?;
    write_svg(&out_dir, "treemap.svg", viz_charts::treemap_chart(&industry, &frame, &theme))?;

    let census: Vec<CensusRecord> = load(&data_dir, "economic-census.json")?;
    let census = dataset::annotate_census(census);
    println!("Kept {} census records after the positivity filter", census.len());
    write_svg(&out_dir, "hexbin-plot.svg", viz_charts::hexbin_plot(&census, &frame, &theme))?;

    Ok(())
}

fn load<T: serde::de::DeserializeOwned>(data_dir: &Path, name: &str) -> Result<T> {
    let path = data_dir.join(name);
    dataset::load_json(&path).with_context(|| format!("failed to load '{}'", path.display()))
}

fn write_svg(out_dir: &Path, name: &str, svg: Element) -> Result<()> {
    let path = out_dir.join(name);
    std::fs::write(&path, svg.to_svg_string())?;
    println!("Wrote {}", path.display());
    Ok(())
}
