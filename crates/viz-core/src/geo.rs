// File: crates/viz-core/src/geo.rs
// Summary: GeoJSON feature records, fitted equirectangular projection and path emission.

use serde::Deserialize;

use crate::svg::fmt_num;

/// GeoJSON feature collection; only the members the map page needs.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Feature {
    pub properties: RegionProps,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RegionProps {
    pub name: String,
    pub value: f64,
}

/// Polygonal geometry in lon/lat coordinates.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(Vec<Vec<[f64; 2]>>),
    MultiPolygon(Vec<Vec<Vec<[f64; 2]>>>),
}

impl Geometry {
    fn rings(&self) -> Vec<&Vec<[f64; 2]>> {
        match self {
            Geometry::Polygon(rings) => rings.iter().collect(),
            Geometry::MultiPolygon(polys) => polys.iter().flat_map(|p| p.iter()).collect(),
        }
    }
}

/// Equirectangular projection scaled and translated so the collection's
/// bounding box fits a content box, preserving aspect ratio.
#[derive(Clone, Copy, Debug)]
pub struct Equirectangular {
    k: f64,
    lon_min: f64,
    lat_max: f64,
    tx: f64,
    ty: f64,
}

impl Equirectangular {
    pub fn fit(fc: &FeatureCollection, width: f64, height: f64) -> Self {
        let mut lon_min = f64::INFINITY;
        let mut lon_max = f64::NEG_INFINITY;
        let mut lat_min = f64::INFINITY;
        let mut lat_max = f64::NEG_INFINITY;
        for feature in &fc.features {
            for ring in feature.geometry.rings() {
                for &[lon, lat] in ring {
                    lon_min = lon_min.min(lon);
                    lon_max = lon_max.max(lon);
                    lat_min = lat_min.min(lat);
                    lat_max = lat_max.max(lat);
                }
            }
        }
        if !lon_min.is_finite() || !lat_min.is_finite() {
            return Self { k: 1.0, lon_min: 0.0, lat_max: 0.0, tx: 0.0, ty: 0.0 };
        }
        let lon_span = (lon_max - lon_min).max(1e-9);
        let lat_span = (lat_max - lat_min).max(1e-9);
        let k = (width / lon_span).min(height / lat_span);
        let tx = (width - k * lon_span) / 2.0;
        let ty = (height - k * lat_span) / 2.0;
        Self { k, lon_min, lat_max, tx, ty }
    }

    /// Project (lon, lat) to pixel coordinates; north is up.
    #[inline]
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        (
            (lon - self.lon_min) * self.k + self.tx,
            (self.lat_max - lat) * self.k + self.ty,
        )
    }
}

/// SVG path data for a feature's rings under `proj`.
pub fn feature_path(geometry: &Geometry, proj: &Equirectangular) -> String {
    let mut d = String::new();
    for ring in geometry.rings() {
        for (i, &[lon, lat]) in ring.iter().enumerate() {
            let (x, y) = proj.project(lon, lat);
            d.push(if i == 0 { 'M' } else { 'L' });
            d.push_str(&fmt_num(x));
            d.push(',');
            d.push_str(&fmt_num(y));
        }
        if !ring.is_empty() {
            d.push('Z');
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(name: &str, value: f64, x: f64, y: f64) -> Feature {
        Feature {
            properties: RegionProps { name: name.to_string(), value },
            geometry: Geometry::Polygon(vec![vec![
                [x, y],
                [x + 1.0, y],
                [x + 1.0, y + 1.0],
                [x, y + 1.0],
                [x, y],
            ]]),
        }
    }

    #[test]
    fn fit_maps_bbox_into_content_box() {
        let fc = FeatureCollection { features: vec![square("a", 1.0, 130.0, 30.0), square("b", 2.0, 139.0, 40.0)] };
        let proj = Equirectangular::fit(&fc, 800.0, 500.0);
        let (x0, y0) = proj.project(130.0, 41.0); // top-left corner of bbox
        let (x1, y1) = proj.project(140.0, 30.0); // bottom-right corner
        assert!(x0 >= -1e-9 && y0 >= -1e-9);
        assert!(x1 <= 800.0 + 1e-9 && y1 <= 500.0 + 1e-9);
        assert!(x1 > x0 && y1 > y0);
    }

    #[test]
    fn north_is_up() {
        let fc = FeatureCollection { features: vec![square("a", 1.0, 0.0, 0.0)] };
        let proj = Equirectangular::fit(&fc, 100.0, 100.0);
        let (_, y_north) = proj.project(0.5, 1.0);
        let (_, y_south) = proj.project(0.5, 0.0);
        assert!(y_north < y_south);
    }

    #[test]
    fn path_closes_each_ring() {
        let fc = FeatureCollection { features: vec![square("a", 1.0, 0.0, 0.0)] };
        let proj = Equirectangular::fit(&fc, 100.0, 100.0);
        let d = feature_path(&fc.features[0].geometry, &proj);
        assert!(d.starts_with('M'));
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn geometry_json_round_trips() {
        let json = r#"{"type":"Polygon","coordinates":[[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,0.0]]]}"#;
        let g: Geometry = serde_json::from_str(json).unwrap();
        assert!(matches!(g, Geometry::Polygon(_)));
    }

    #[test]
    fn empty_collection_fit_is_inert() {
        let proj = Equirectangular::fit(&FeatureCollection::default(), 100.0, 100.0);
        let (x, y) = proj.project(5.0, 5.0);
        assert!(x.is_finite() && y.is_finite());
    }
}
