// File: crates/viz-server/src/state.rs
// Summary: Shared application state: theme plus the once-per-process dataset cache.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use viz_core::dataset::{
    annotate_census, load_json, CensusRecord, CityRecord, FlowMatrix, NetworkData,
    PopulationRecord, RainfallRecord, TreeNode, TrendRecord,
};
use viz_core::geo::FeatureCollection;
use viz_core::Theme;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub theme: Theme,
    cache: Cache<&'static str, Dataset>,
}

/// Cached dataset, one variant per page.
#[derive(Clone)]
enum Dataset {
    Population(Arc<Vec<PopulationRecord>>),
    Flows(Arc<FlowMatrix>),
    Regions(Arc<FeatureCollection>),
    Rainfall(Arc<Vec<RainfallRecord>>),
    Trend(Arc<Vec<TrendRecord>>),
    Network(Arc<NetworkData>),
    Cities(Arc<Vec<CityRecord>>),
    Industry(Arc<TreeNode>),
    Census(Arc<Vec<CensusRecord>>),
}

/// Load a JSON asset; a failure is logged once and the page degrades to an
/// empty chart instead of an error response.
fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json(path) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, path = %path.display(), "dataset load failed; rendering empty chart");
            T::default()
        }
    }
}

macro_rules! dataset_accessor {
    ($fn_name:ident, $file:literal, $variant:ident, $ty:ty) => {
        pub async fn $fn_name(&self) -> Arc<$ty> {
            let path = self.data_dir.join($file);
            let entry = self
                .cache
                .get_with($file, async move { Dataset::$variant(Arc::new(load_or_default(&path))) })
                .await;
            match entry {
                Dataset::$variant(value) => value,
                _ => Arc::new(<$ty>::default()),
            }
        }
    };
}

impl AppState {
    pub fn new(data_dir: PathBuf, theme: Theme) -> Self {
        Self { data_dir, theme, cache: Cache::builder().max_capacity(32).build() }
    }

    dataset_accessor!(population, "prefecture-population.json", Population, Vec<PopulationRecord>);
    dataset_accessor!(flows, "migration-flows.json", Flows, FlowMatrix);
    dataset_accessor!(regions, "region-map.json", Regions, FeatureCollection);
    dataset_accessor!(rainfall, "monthly-rainfall.json", Rainfall, Vec<RainfallRecord>);
    dataset_accessor!(trend, "tourism-trend.json", Trend, Vec<TrendRecord>);
    dataset_accessor!(network, "collaboration-network.json", Network, NetworkData);
    dataset_accessor!(cities, "city-stats.json", Cities, Vec<CityRecord>);
    dataset_accessor!(industry, "industry-share.json", Industry, TreeNode);

    /// The census asset also gets ids assigned and non-positive records
    /// dropped before caching.
    pub async fn census(&self) -> Arc<Vec<CensusRecord>> {
        let path = self.data_dir.join("economic-census.json");
        let entry = self
            .cache
            .get_with("economic-census.json", async move {
                Dataset::Census(Arc::new(annotate_census(load_or_default(&path))))
            })
            .await;
        match entry {
            Dataset::Census(value) => value,
            _ => Arc::new(Vec::new()),
        }
    }
}
