// File: crates/viz-server/src/pages/mod.rs
// Summary: Page handlers, one module per routed chart page.

pub mod bar_chart;
pub mod chord_diagram;
pub mod choropleth_map;
pub mod density_plot;
pub mod hexbin_plot;
pub mod line_chart;
pub mod node_link_diagram;
pub mod scatter_plot;
pub mod top;
pub mod treemap;
