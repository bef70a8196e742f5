// File: crates/viz-charts/src/line.rs
// Summary: Line chart of a dated measurement series.

use chrono::{Duration, NaiveDate};
use viz_core::dataset::TrendRecord;
use viz_core::svg::{fmt_num, translate};
use viz_core::{Element, Frame, LinearScale, Theme};

use crate::axis::{bottom_axis, left_axis, ticks_from, Tick};

pub fn line_chart(records: &[TrendRecord], frame: &Frame, theme: &Theme) -> Element {
    let mut ordered: Vec<&TrendRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.date);

    let origin: NaiveDate = ordered.first().map(|r| r.date).unwrap_or_default();
    let day_offset = |d: NaiveDate| (d - origin).num_days() as f64;

    let span = ordered.last().map(|r| day_offset(r.date)).unwrap_or(1.0);
    let max = ordered.iter().map(|r| r.value).fold(0.0f64, f64::max);

    let x = LinearScale::new((0.0, span), (0.0, frame.content_width));
    let y = LinearScale::new((0.0, max), (frame.content_height, 0.0));

    let points = ordered
        .iter()
        .map(|r| format!("{},{}", fmt_num(x.scale(day_offset(r.date))), fmt_num(y.scale(r.value))))
        .collect::<Vec<_>>()
        .join(" ");

    let mut plot = Element::new("g").attr("transform", translate(frame.margin.left, frame.margin.top));
    if !ordered.is_empty() {
        plot = plot.child(
            Element::new("polyline")
                .attr("points", points)
                .attr("fill", "none")
                .attr("stroke", theme.mark)
                .attr("stroke-width", "2"),
        );
    }

    // Date ticks at round day offsets, labelled with the calendar date.
    let x_ticks: Vec<Tick> = x
        .ticks(6)
        .into_iter()
        .map(|offset| Tick {
            position: x.scale(offset),
            label: (origin + Duration::days(offset.round() as i64)).format("%Y-%m-%d").to_string(),
        })
        .collect();

    Element::svg(frame.width(), frame.height())
        .child(plot)
        .child(bottom_axis(frame, theme, "Date", &x_ticks, true))
        .child(left_axis(frame, theme, "Visitors", &ticks_from(&y.ticks(10), |v| y.scale(v))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, value: f64) -> TrendRecord {
        TrendRecord { date: date.parse().expect("iso date"), value }
    }

    #[test]
    fn polyline_covers_all_records_in_date_order() {
        let records = vec![
            record("2019-03-01", 20.0),
            record("2019-01-01", 10.0),
            record("2019-02-01", 30.0),
        ];
        let svg = line_chart(&records, &Frame::default(), &Theme::light()).to_svg_string();
        assert_eq!(svg.matches("<polyline").count(), 1);
        // first record by date sits at x=0; the max value record at y=0
        assert!(svg.contains(r#"points="0,"#));
        assert!(svg.contains(" 800,"));
    }

    #[test]
    fn date_labels_are_calendar_dates() {
        let records = vec![record("2019-01-01", 10.0), record("2019-12-31", 20.0)];
        let svg = line_chart(&records, &Frame::default(), &Theme::light()).to_svg_string();
        assert!(svg.contains("2019-01-01"));
    }

    #[test]
    fn empty_series_renders_no_polyline() {
        let svg = line_chart(&[], &Frame::default(), &Theme::light()).to_svg_string();
        assert_eq!(svg.matches("<polyline").count(), 0);
    }
}
