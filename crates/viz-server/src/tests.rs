// File: crates/viz-server/src/tests.rs
// Purpose: Route-level tests over the full router with the bundled data assets.

#[cfg(test)]
mod integration_tests {
    use std::path::PathBuf;

    use axum_test::TestServer;

    use crate::chrome::PAGES;
    use crate::routes::create_router;
    use crate::state::AppState;
    use viz_core::Theme;

    fn data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data")
    }

    fn server_with(data_dir: PathBuf) -> TestServer {
        let state = AppState::new(data_dir, Theme::light());
        TestServer::new(create_router(state)).expect("test server")
    }

    #[tokio::test]
    async fn index_lists_every_chart_page() {
        let server = server_with(data_dir());
        let response = server.get("/").await;
        response.assert_status_ok();
        let body = response.text();
        for (path, _) in PAGES {
            assert!(body.contains(path), "index missing link to {path}");
        }
    }

    #[tokio::test]
    async fn every_chart_page_renders_svg() {
        let server = server_with(data_dir());
        for (path, _) in PAGES {
            let response = server.get(path).await;
            response.assert_status_ok();
            let body = response.text();
            assert!(body.contains("<svg"), "{path} did not embed an svg");
            assert!(body.contains("</html>"), "{path} is not a full page");
        }
    }

    #[tokio::test]
    async fn hexbin_page_draws_marks_from_the_census_asset() {
        let server = server_with(data_dir());
        let response = server.get("/hexbin-plot").await;
        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("clip-path=\"url(#content-region)\""));
        assert!(body.contains("<path d=\"m"), "no hexagon marks rendered");
    }

    #[tokio::test]
    async fn health_reports_version() {
        let server = server_with(data_dir());
        let response = server.get("/health").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn data_assets_are_served_as_json() {
        let server = server_with(data_dir());
        let response = server.get("/data/economic-census.json").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert!(body.as_array().map(|a| !a.is_empty()).unwrap_or(false));
    }

    #[tokio::test]
    async fn missing_datasets_degrade_to_empty_charts() {
        let server = server_with(PathBuf::from("definitely-not-a-data-dir"));
        for (path, _) in PAGES {
            let response = server.get(path).await;
            response.assert_status_ok();
            assert!(response.text().contains("<svg"), "{path} should render an empty chart");
        }
    }
}
