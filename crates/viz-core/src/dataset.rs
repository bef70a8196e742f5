// File: crates/viz-core/src/dataset.rs
// Summary: Per-page dataset records and JSON loading.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::VizError;

/// Bar chart: population per prefecture.
#[derive(Clone, Debug, Deserialize)]
pub struct PopulationRecord {
    pub name: String,
    pub population: f64,
}

/// Chord diagram: named groups and a square flow matrix between them.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FlowMatrix {
    pub names: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Density plot: one sample per record.
#[derive(Clone, Debug, Deserialize)]
pub struct RainfallRecord {
    pub value: f64,
}

/// Line chart: a dated measurement.
#[derive(Clone, Debug, Deserialize)]
pub struct TrendRecord {
    pub date: NaiveDate,
    pub value: f64,
}

/// Node-link diagram: nodes grouped into communities, weighted links.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NetworkData {
    pub nodes: Vec<NetworkNode>,
    pub links: Vec<NetworkLink>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub group: u32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NetworkLink {
    pub source: String,
    pub target: String,
    pub value: f64,
}

/// Scatter plot: one point per city.
#[derive(Clone, Debug, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub income: f64,
    pub consumption: f64,
}

/// Treemap: a value hierarchy. Leaves carry `value`; branches carry children.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

/// Hexbin plot: business closures/establishments per municipality.
/// `id` is synthetic, assigned after parsing.
#[derive(Clone, Debug, Deserialize)]
pub struct CensusRecord {
    #[serde(default)]
    pub municipality: String,
    pub closed: f64,
    pub established: f64,
    #[serde(default)]
    pub id: usize,
}

/// Read and parse one JSON asset.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, VizError> {
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Assign sequential ids to every parsed record, then drop the records the
/// hexbin page cannot place (non-positive on either log-scaled field).
pub fn annotate_census(mut records: Vec<CensusRecord>) -> Vec<CensusRecord> {
    for (i, record) in records.iter_mut().enumerate() {
        record.id = i;
    }
    records.retain(|r| r.closed > 0.0 && r.established > 0.0);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn census_ids_assigned_before_filtering() {
        let records = vec![
            CensusRecord { municipality: "a".into(), closed: 1.0, established: 1.0, id: 0 },
            CensusRecord { municipality: "b".into(), closed: 0.0, established: 5.0, id: 0 },
            CensusRecord { municipality: "c".into(), closed: 10.0, established: 100.0, id: 0 },
        ];
        let kept = annotate_census(records);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, 0);
        // the filtered-out record still consumed an id
        assert_eq!(kept[1].id, 2);
    }

    #[test]
    fn census_json_shape() {
        let json = r#"[{"municipality":"North Port","closed":4,"established":9}]"#;
        let records: Vec<CensusRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].closed, 4.0);
        assert_eq!(records[0].id, 0);
    }

    #[test]
    fn tree_node_leaf_and_branch_shapes() {
        let json = r#"{"name":"root","children":[{"name":"a","value":3},{"name":"b","children":[{"name":"c","value":1}]}]}"#;
        let root: TreeNode = serde_json::from_str(json).unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].value, Some(3.0));
        assert!(root.children[1].value.is_none());
    }

    #[test]
    fn trend_record_parses_iso_dates() {
        let json = r#"[{"date":"2019-04-01","value":12.5}]"#;
        let records: Vec<TrendRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2019, 4, 1).unwrap());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_json::<Vec<CensusRecord>>(Path::new("no-such-file.json")).unwrap_err();
        assert!(matches!(err, VizError::Io(_)));
    }
}
