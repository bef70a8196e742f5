// File: crates/viz-server/src/chrome.rs
// Summary: Shared page chrome: navigation bar, content container, footer.

/// Route table: path and page title, in navigation order.
pub const PAGES: [(&str, &str); 9] = [
    ("/bar-chart", "Bar chart"),
    ("/chord-diagram", "Chord diagram"),
    ("/choropleth-map", "Choropleth map"),
    ("/density-plot", "Density plot"),
    ("/line-chart", "Line chart"),
    ("/node-link-diagram", "Node-link diagram"),
    ("/scatter-plot", "Scatter plot"),
    ("/treemap", "Treemap"),
    ("/hexbin-plot", "Hexbin plot"),
];

const SITE_TITLE: &str = "Data Visualization Gallery";

const GLOBAL_CSS: &str = r#"
body { margin: 0; font-family: "Helvetica Neue", Arial, sans-serif; color: #363636; }
nav.navbar { background: #3298dc; padding: 0.75rem 1.5rem; }
nav.navbar a { color: #fff; text-decoration: none; font-size: 1.25rem; font-weight: 600; }
section.section { padding: 1.5rem; }
.container { max-width: 960px; margin: 0 auto; }
h1.title { font-size: 1.5rem; margin: 0 0 1rem; }
figure.chart { margin: 0; }
figure.chart svg { width: 100%; height: auto; }
ul.gallery { line-height: 1.9; }
footer.footer { padding: 2rem 1.5rem; background: #fafafa; text-align: center; color: #7a7a7a; }
"#;

fn shell(content: &str) -> String {
    format!(
        "<!DOCTYPE html>\
<html lang=\"en\">\
<head><meta charset=\"utf-8\"><title>{SITE_TITLE}</title><style>{GLOBAL_CSS}</style></head>\
<body>\
<nav class=\"navbar\"><a href=\"/\">{SITE_TITLE}</a></nav>\
<section class=\"section\"><div class=\"container\">{content}</div></section>\
<footer class=\"footer\"><p>&#169; 2020 Viz Gallery</p></footer>\
</body></html>"
    )
}

/// One chart page: title, figure wrapper, inline SVG.
pub fn page(title: &str, figure_svg: &str) -> String {
    shell(&format!(
        "<h1 class=\"title\">{title}</h1><figure class=\"chart\">{figure_svg}</figure>"
    ))
}

/// The index page: a link per chart page.
pub fn index() -> String {
    let mut items = String::new();
    for (path, title) in PAGES {
        items.push_str(&format!("<li><a href=\"{path}\">{title}</a></li>"));
    }
    shell(&format!("<h1 class=\"title\">Charts</h1><ul class=\"gallery\">{items}</ul>"))
}
