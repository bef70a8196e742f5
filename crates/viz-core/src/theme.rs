// File: crates/viz-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub axis_line: &'static str,
    pub axis_title: &'static str,
    pub tick_label: &'static str,
    pub grid: &'static str,
    pub mark: &'static str,
    pub mark_stroke: &'static str,
    pub label: &'static str,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#ffffff",
            axis_line: "#444444",
            axis_title: "#222222",
            tick_label: "#444444",
            grid: "#dddddd",
            mark: "#3690c0",
            mark_stroke: "#045a8d",
            label: "#333333",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            axis_line: "#b4b4be",
            axis_title: "#ebebf5",
            tick_label: "#96969f",
            grid: "#28282d",
            mark: "#40a0ff",
            mark_stroke: "#74c0ff",
            label: "#d2d2dc",
        }
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("unknown").name, "light");
    }
}
