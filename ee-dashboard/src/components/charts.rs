//! Chart components rendered as inline SVG

use async_trait::async_trait;
use chrono::NaiveDate;
use ee_common::db::EventCount;
use ee_common::model::recruitment_risk;
use ee_common::Result;
use serde::Serialize;
use tracing::debug;

use super::{Component, ReportContext};
use crate::html::escape;

const POSITIVE_COLOR: &str = "#1f77b4";
const NEGATIVE_COLOR: &str = "#ff7f0e";
const AXIS_COLOR: &str = "#000000";

/// Running totals up to and including `date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CumulativePoint {
    pub date: String,
    pub positive: i64,
    pub negative: i64,
}

/// Sort by date and accumulate positive and negative counts
pub fn cumulative_counts(counts: &[EventCount]) -> Vec<CumulativePoint> {
    let mut sorted: Vec<&EventCount> = counts.iter().collect();
    sorted.sort_by(|a, b| a.event_date.cmp(&b.event_date));

    let mut positive = 0;
    let mut negative = 0;

    sorted
        .into_iter()
        .map(|c| {
            positive += c.positive_events;
            negative += c.negative_events;
            CumulativePoint {
                date: c.event_date.clone(),
                positive,
                negative,
            }
        })
        .collect()
}

/// Horizontal position of each point in `[0, 1]`
///
/// Uses calendar distance when every date parses, even spacing otherwise.
fn x_fractions(points: &[CumulativePoint]) -> Vec<f64> {
    let dates: Option<Vec<NaiveDate>> = points
        .iter()
        .map(|p| NaiveDate::parse_from_str(&p.date, "%Y-%m-%d").ok())
        .collect();

    if let Some(dates) = dates {
        if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
            let span = (*last - *first).num_days();
            if span > 0 {
                return dates
                    .iter()
                    .map(|d| (*d - *first).num_days() as f64 / span as f64)
                    .collect();
            }
        }
    }

    match points.len() {
        0 => Vec::new(),
        1 => vec![0.5],
        n => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

/// Cumulative positive/negative events over time
pub struct LineChart {
    pub width: f64,
    pub height: f64,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 320.0,
        }
    }
}

impl LineChart {
    const LEFT: f64 = 60.0;
    const RIGHT: f64 = 20.0;
    const TOP: f64 = 40.0;
    const BOTTOM: f64 = 50.0;

    /// Render the SVG for already-accumulated points
    pub fn svg(&self, points: &[CumulativePoint]) -> String {
        let plot_w = self.width - Self::LEFT - Self::RIGHT;
        let plot_h = self.height - Self::TOP - Self::BOTTOM;
        let bottom = Self::TOP + plot_h;

        let y_max = points
            .iter()
            .map(|p| p.positive.max(p.negative))
            .max()
            .unwrap_or(0)
            .max(1) as f64;

        let xs: Vec<f64> = x_fractions(points)
            .into_iter()
            .map(|f| Self::LEFT + f * plot_w)
            .collect();
        let y = |v: i64| bottom - (v as f64 / y_max) * plot_h;

        let mut svg = format!(
            "<svg class=\"line-chart\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" \
             xmlns=\"http://www.w3.org/2000/svg\" role=\"img\">\n\
             <text x=\"{cx:.1}\" y=\"24\" text-anchor=\"middle\" class=\"chart-title\">Cumulative Event Counts</text>\n",
            w = self.width,
            h = self.height,
            cx = self.width / 2.0,
        );

        // Axes
        svg.push_str(&format!(
            "<line x1=\"{l}\" y1=\"{t}\" x2=\"{l}\" y2=\"{b:.1}\" stroke=\"{c}\"/>\n\
             <line x1=\"{l}\" y1=\"{b:.1}\" x2=\"{r:.1}\" y2=\"{b:.1}\" stroke=\"{c}\"/>\n",
            l = Self::LEFT,
            t = Self::TOP,
            b = bottom,
            r = Self::LEFT + plot_w,
            c = AXIS_COLOR,
        ));

        // Y ticks at 0, half and max
        for value in [0.0, y_max / 2.0, y_max] {
            let ty = bottom - (value / y_max) * plot_h;
            svg.push_str(&format!(
                "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"end\" class=\"tick\">{v}</text>\n",
                x = Self::LEFT - 6.0,
                y = ty + 4.0,
                v = format_tick(value),
            ));
        }

        // First and last date under the x axis
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            svg.push_str(&format!(
                "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"start\" class=\"tick\">{d}</text>\n",
                x = Self::LEFT,
                y = bottom + 16.0,
                d = escape(&first.date),
            ));
            if points.len() > 1 {
                svg.push_str(&format!(
                    "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"end\" class=\"tick\">{d}</text>\n",
                    x = Self::LEFT + plot_w,
                    y = bottom + 16.0,
                    d = escape(&last.date),
                ));
            }
        } else {
            svg.push_str(&format!(
                "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" class=\"empty\">No events recorded</text>\n",
                x = Self::LEFT + plot_w / 2.0,
                y = Self::TOP + plot_h / 2.0,
            ));
        }

        // Series
        for (label, color, values) in [
            ("Positive", POSITIVE_COLOR, points.iter().map(|p| p.positive).collect::<Vec<_>>()),
            ("Negative", NEGATIVE_COLOR, points.iter().map(|p| p.negative).collect::<Vec<_>>()),
        ] {
            if values.is_empty() {
                continue;
            }
            let coords: Vec<String> = xs
                .iter()
                .zip(values.iter())
                .map(|(x, v)| format!("{:.1},{:.1}", x, y(*v)))
                .collect();
            svg.push_str(&format!(
                "<polyline class=\"series-{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>\n",
                label.to_lowercase(),
                color,
                coords.join(" ")
            ));
        }

        // Legend
        for (i, (label, color)) in [("Positive", POSITIVE_COLOR), ("Negative", NEGATIVE_COLOR)]
            .into_iter()
            .enumerate()
        {
            let ly = Self::TOP + 8.0 + i as f64 * 16.0;
            svg.push_str(&format!(
                "<rect x=\"{x:.1}\" y=\"{ry:.1}\" width=\"12\" height=\"3\" fill=\"{c}\"/>\
                 <text x=\"{tx:.1}\" y=\"{ty:.1}\" class=\"legend\">{label}</text>\n",
                x = Self::LEFT + 10.0,
                ry = ly - 3.0,
                c = color,
                tx = Self::LEFT + 26.0,
                ty = ly + 1.0,
                label = label,
            ));
        }

        // Axis labels
        svg.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" class=\"axis-label\">Date</text>\n\
             <text x=\"16\" y=\"{my:.1}\" text-anchor=\"middle\" class=\"axis-label\" \
             transform=\"rotate(-90 16 {my:.1})\">Cumulative Count</text>\n",
            x = Self::LEFT + plot_w / 2.0,
            y = self.height - 10.0,
            my = Self::TOP + plot_h / 2.0,
        ));

        svg.push_str("</svg>");
        svg
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[async_trait]
impl Component for LineChart {
    async fn render(&self, ctx: &ReportContext) -> Result<String> {
        let counts = match ctx.entity_id {
            Some(id) => ctx.queries.event_counts(id).await?,
            None => Vec::new(),
        };

        let points = cumulative_counts(&counts);
        Ok(format!(
            "<figure class=\"chart\">\n{}\n</figure>",
            self.svg(&points)
        ))
    }
}

/// Predicted recruitment risk as a single horizontal bar on `[0, 1]`
pub struct BarChart {
    pub width: f64,
    pub height: f64,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 160.0,
        }
    }
}

impl BarChart {
    const SIDE: f64 = 20.0;
    const TOP: f64 = 50.0;
    const BAR_HEIGHT: f64 = 50.0;

    /// Render the SVG for a risk value; `None` draws an empty axis with a notice
    pub fn svg(&self, risk: Option<f64>, notice: &str) -> String {
        let plot_w = self.width - 2.0 * Self::SIDE;
        let axis_y = Self::TOP + Self::BAR_HEIGHT;

        let mut svg = format!(
            "<svg class=\"bar-chart\" viewBox=\"0 0 {w} {h}\" width=\"{w}\" height=\"{h}\" \
             xmlns=\"http://www.w3.org/2000/svg\" role=\"img\">\n\
             <text x=\"{cx:.1}\" y=\"30\" text-anchor=\"middle\" class=\"chart-title\">Predicted Recruitment Risk</text>\n",
            w = self.width,
            h = self.height,
            cx = self.width / 2.0,
        );

        match risk {
            Some(risk) => {
                let risk = risk.clamp(0.0, 1.0);
                svg.push_str(&format!(
                    "<rect class=\"risk-bar\" x=\"{x}\" y=\"{y}\" width=\"{bw:.1}\" height=\"{bh}\" fill=\"{c}\"/>\n\
                     <text class=\"risk-value\" x=\"{tx:.1}\" y=\"{ty:.1}\">{risk:.2}</text>\n",
                    x = Self::SIDE,
                    y = Self::TOP,
                    bw = risk * plot_w,
                    bh = Self::BAR_HEIGHT,
                    c = POSITIVE_COLOR,
                    tx = Self::SIDE + risk * plot_w + 6.0,
                    ty = Self::TOP + Self::BAR_HEIGHT / 2.0 + 5.0,
                    risk = risk,
                ));
            }
            None => {
                svg.push_str(&format!(
                    "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" class=\"empty\">{n}</text>\n",
                    x = self.width / 2.0,
                    y = Self::TOP + Self::BAR_HEIGHT / 2.0 + 5.0,
                    n = escape(notice),
                ));
            }
        }

        svg.push_str(&format!(
            "<line x1=\"{l}\" y1=\"{a}\" x2=\"{r:.1}\" y2=\"{a}\" stroke=\"{c}\"/>\n",
            l = Self::SIDE,
            a = axis_y,
            r = Self::SIDE + plot_w,
            c = AXIS_COLOR,
        ));

        for tick in [0.0, 0.5, 1.0] {
            svg.push_str(&format!(
                "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" class=\"tick\">{t:.1}</text>\n",
                x = Self::SIDE + tick * plot_w,
                y = axis_y + 16.0,
                t = tick,
            ));
        }

        svg.push_str("</svg>");
        svg
    }
}

#[async_trait]
impl Component for BarChart {
    async fn render(&self, ctx: &ReportContext) -> Result<String> {
        let svg = match (&ctx.model, ctx.entity_id) {
            (None, _) => self.svg(None, "Risk model not loaded"),
            (Some(_), None) => self.svg(None, "No selection"),
            (Some(model), Some(id)) => {
                let features = ctx.queries.model_data(id).await?;
                let risk = recruitment_risk(model.as_ref(), &features);
                debug!(kind = %ctx.kind(), id, ?risk, "recruitment risk");
                self.svg(risk, "No event data to score")
            }
        };

        Ok(format!("<figure class=\"chart\">\n{}\n</figure>", svg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(date: &str, positive: i64, negative: i64) -> EventCount {
        EventCount {
            event_date: date.to_string(),
            positive_events: positive,
            negative_events: negative,
        }
    }

    #[test]
    fn test_cumulative_counts_sorts_and_accumulates() {
        let points = cumulative_counts(&[
            count("2023-01-03", 2, 1),
            count("2023-01-01", 5, 1),
            count("2023-01-02", 1, 2),
        ]);

        let triples: Vec<(&str, i64, i64)> = points
            .iter()
            .map(|p| (p.date.as_str(), p.positive, p.negative))
            .collect();
        assert_eq!(
            triples,
            vec![("2023-01-01", 5, 1), ("2023-01-02", 6, 3), ("2023-01-03", 8, 4)]
        );
    }

    #[test]
    fn test_cumulative_counts_monotone_and_totals() {
        let counts = vec![
            count("2023-02-01", 0, 4),
            count("2023-02-05", 7, 0),
            count("2023-02-09", 3, 3),
            count("2023-02-10", 0, 0),
        ];
        let points = cumulative_counts(&counts);

        for pair in points.windows(2) {
            assert!(pair[1].positive >= pair[0].positive);
            assert!(pair[1].negative >= pair[0].negative);
        }
        let last = points.last().unwrap();
        assert_eq!(last.positive, counts.iter().map(|c| c.positive_events).sum::<i64>());
        assert_eq!(last.negative, counts.iter().map(|c| c.negative_events).sum::<i64>());
    }

    #[test]
    fn test_cumulative_counts_empty() {
        assert!(cumulative_counts(&[]).is_empty());
    }

    #[test]
    fn test_x_fractions_use_calendar_distance() {
        let points = cumulative_counts(&[
            count("2023-01-01", 1, 0),
            count("2023-01-02", 1, 0),
            count("2023-01-05", 1, 0),
        ]);
        assert_eq!(x_fractions(&points), vec![0.0, 0.25, 1.0]);
    }

    #[test]
    fn test_x_fractions_fall_back_to_even_spacing() {
        let points = cumulative_counts(&[
            count("week 1", 1, 0),
            count("week 2", 1, 0),
            count("week 3", 1, 0),
        ]);
        assert_eq!(x_fractions(&points), vec![0.0, 0.5, 1.0]);

        let single = cumulative_counts(&[count("2023-01-01", 1, 0)]);
        assert_eq!(x_fractions(&single), vec![0.5]);
    }

    #[test]
    fn test_line_chart_svg() {
        let points = cumulative_counts(&[count("2023-01-01", 5, 1), count("2023-01-03", 3, 3)]);
        let svg = LineChart::default().svg(&points);

        assert!(svg.contains("Cumulative Event Counts"));
        assert!(svg.contains(">Date</text>"));
        assert!(svg.contains(">Cumulative Count</text>"));
        assert!(svg.contains("class=\"series-positive\""));
        assert!(svg.contains("class=\"series-negative\""));
        assert!(svg.contains(">2023-01-01</text>"));
        assert!(svg.contains(">2023-01-03</text>"));
    }

    #[test]
    fn test_line_chart_empty() {
        let svg = LineChart::default().svg(&[]);
        assert!(svg.contains("No events recorded"));
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn test_bar_chart_svg() {
        let chart = BarChart::default();

        let svg = chart.svg(Some(0.25), "unused");
        assert!(svg.contains("Predicted Recruitment Risk"));
        assert!(svg.contains(">0.25</text>"));
        // 0.25 of the 460px plot width
        assert!(svg.contains("width=\"115.0\""));

        let clamped = chart.svg(Some(1.7), "unused");
        assert!(clamped.contains(">1.00</text>"));

        let empty = chart.svg(None, "Risk model not loaded");
        assert!(empty.contains("Risk model not loaded"));
        assert!(!empty.contains("risk-bar"));
    }
}
