use dioxus::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 300.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 48.0;
const Y_TICKS: usize = 5;

/// One categorical value: a bar, or a point on an ordinal line.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartDatum {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterDatum {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Min/max of the finite values, optionally stretched to include zero. A flat
/// or empty series gets a unit-wide domain so it still renders.
pub fn value_domain(values: impl IntoIterator<Item = f64>, include_zero: bool) -> (f64, f64) {
    let (mut min, mut max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return (0.0, 1.0);
    }
    if include_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }
    if max - min < f64::EPSILON {
        let pad = (min.abs() * 0.1).max(1.0);
        return (min - pad, max + pad);
    }
    (min, max)
}

pub fn ticks(domain: (f64, f64), count: usize) -> Vec<f64> {
    let count = count.max(1);
    let step = (domain.1 - domain.0) / count as f64;
    (0..=count).map(|i| domain.0 + step * i as f64).collect()
}

/// Centre x of each of `n` equal bands spanning `range`, plus the band width.
pub fn bands(n: usize, range: (f64, f64)) -> (Vec<f64>, f64) {
    if n == 0 {
        return (Vec::new(), 0.0);
    }
    let width = (range.1 - range.0) / n as f64;
    let centres = (0..n).map(|i| range.0 + width * (i as f64 + 0.5)).collect();
    (centres, width)
}

fn tick_label(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[derive(Clone, PartialEq)]
struct GridLine {
    y: f64,
    label: String,
}

fn y_grid(scale: &LinearScale, domain: (f64, f64)) -> Vec<GridLine> {
    ticks(domain, Y_TICKS)
        .into_iter()
        .map(|value| GridLine {
            y: scale.map(value),
            label: tick_label(value),
        })
        .collect()
}

fn y_scale(domain: (f64, f64)) -> LinearScale {
    LinearScale::new(domain, (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP))
}

const X_RANGE: (f64, f64) = (MARGIN_LEFT, WIDTH - MARGIN_RIGHT);

#[component]
fn ChartFrame(title: String, y_label: String, grid: Vec<GridLine>, children: Element) -> Element {
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let axis_y = HEIGHT - MARGIN_BOTTOM;
    let label_x = MARGIN_LEFT / 4.0;
    let label_y = HEIGHT / 2.0;
    let label_transform = format!("rotate(-90 {label_x} {label_y})");

    rsx! {
        div { class: "chart",
            h3 { class: "chart-title", "{title}" }
            svg {
                view_box: view_box,
                for tick in grid {
                    line { class: "gridline", x1: MARGIN_LEFT, x2: WIDTH - MARGIN_RIGHT, y1: tick.y, y2: tick.y }
                    text { class: "tick", x: MARGIN_LEFT - 6.0, y: tick.y + 3.0, text_anchor: "end", "{tick.label}" }
                }
                line { class: "axis", x1: MARGIN_LEFT, x2: MARGIN_LEFT, y1: MARGIN_TOP, y2: axis_y }
                line { class: "axis", x1: MARGIN_LEFT, x2: WIDTH - MARGIN_RIGHT, y1: axis_y, y2: axis_y }
                text { class: "tick", x: label_x, y: label_y, text_anchor: "middle", transform: label_transform, "{y_label}" }
                {children}
            }
        }
    }
}

#[component]
fn EmptyChart(title: String) -> Element {
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    rsx! {
        div { class: "chart",
            h3 { class: "chart-title", "{title}" }
            svg {
                view_box: view_box,
                text { class: "empty", x: WIDTH / 2.0, y: HEIGHT / 2.0, text_anchor: "middle", "No data to display" }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct BarGeometry {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    color: &'static str,
    label: String,
    label_x: f64,
}

#[component]
pub fn BarChart(title: String, y_label: String, data: Vec<ChartDatum>) -> Element {
    if data.is_empty() {
        return rsx! { EmptyChart { title } };
    }

    let domain = value_domain(data.iter().map(|d| d.value), true);
    let scale = y_scale(domain);
    let baseline = scale.map(0.0);
    let (centres, band) = bands(data.len(), X_RANGE);
    let bar_width = band * 0.7;
    let bars: Vec<BarGeometry> = data
        .into_iter()
        .zip(centres)
        .map(|(datum, centre)| {
            let top = scale.map(datum.value);
            BarGeometry {
                x: centre - bar_width / 2.0,
                y: top.min(baseline),
                width: bar_width,
                height: (top - baseline).abs(),
                color: datum.color,
                label: datum.label,
                label_x: centre,
            }
        })
        .collect();
    let label_y = HEIGHT - MARGIN_BOTTOM + 16.0;

    rsx! {
        ChartFrame { title, y_label, grid: y_grid(&scale, domain),
            for bar in bars {
                rect { x: bar.x, y: bar.y, width: bar.width, height: bar.height, fill: bar.color, rx: 2.0 }
                text { class: "tick", x: bar.label_x, y: label_y, text_anchor: "middle", "{bar.label}" }
            }
        }
    }
}

#[derive(Clone, PartialEq)]
struct PointGeometry {
    x: f64,
    y: f64,
    label: String,
}

#[component]
pub fn LineChart(title: String, y_label: String, data: Vec<ChartDatum>, color: &'static str) -> Element {
    if data.is_empty() {
        return rsx! { EmptyChart { title } };
    }

    let domain = value_domain(data.iter().map(|d| d.value), false);
    let scale = y_scale(domain);
    let (centres, _) = bands(data.len(), X_RANGE);
    let points: Vec<PointGeometry> = data
        .into_iter()
        .zip(centres)
        .map(|(datum, x)| PointGeometry {
            x,
            y: scale.map(datum.value),
            label: datum.label,
        })
        .collect();
    let path = points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ");
    let label_y = HEIGHT - MARGIN_BOTTOM + 16.0;

    rsx! {
        ChartFrame { title, y_label, grid: y_grid(&scale, domain),
            polyline { points: path, fill: "none", stroke: color, stroke_width: 2.5 }
            for point in points {
                circle { cx: point.x, cy: point.y, r: 4.0, fill: color }
                text { class: "tick", x: point.x, y: label_y, text_anchor: "middle", "{point.label}" }
            }
        }
    }
}

#[component]
pub fn ScatterChart(
    title: String,
    x_label: String,
    y_label: String,
    data: Vec<ScatterDatum>,
    color: &'static str,
) -> Element {
    if data.is_empty() {
        return rsx! { EmptyChart { title } };
    }

    let y_domain = value_domain(data.iter().map(|d| d.y), false);
    let x_domain = value_domain(data.iter().map(|d| d.x), false);
    let y = y_scale(y_domain);
    let x = LinearScale::new(x_domain, X_RANGE);
    let dots: Vec<(f64, f64)> = data.iter().map(|d| (x.map(d.x), y.map(d.y))).collect();
    let x_ticks: Vec<(f64, String)> = ticks(x_domain, 4)
        .into_iter()
        .map(|value| (x.map(value), tick_label(value)))
        .collect();
    let label_y = HEIGHT - MARGIN_BOTTOM + 16.0;
    let title_y = HEIGHT - 8.0;
    let title_x = (X_RANGE.0 + X_RANGE.1) / 2.0;

    rsx! {
        ChartFrame { title, y_label, grid: y_grid(&y, y_domain),
            for (cx, cy) in dots {
                circle { cx: cx, cy: cy, r: 6.0, fill: color, fill_opacity: 0.8 }
            }
            for (tx, label) in x_ticks {
                text { class: "tick", x: tx, y: label_y, text_anchor: "middle", "{label}" }
            }
            text { class: "tick", x: title_x, y: title_y, text_anchor: "middle", "{x_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_domain_onto_range() {
        let scale = LinearScale::new((0.0, 100.0), (250.0, 50.0));
        assert_eq!(scale.map(0.0), 250.0);
        assert_eq!(scale.map(100.0), 50.0);
        assert_eq!(scale.map(50.0), 150.0);
    }

    #[test]
    fn bar_domain_includes_zero() {
        assert_eq!(value_domain([5.0, 20.0], true), (0.0, 20.0));
        assert_eq!(value_domain([-5.0, -1.0], true), (-5.0, 0.0));
        assert_eq!(value_domain([5.0, 20.0], false), (5.0, 20.0));
    }

    #[test]
    fn flat_and_empty_series_still_have_a_domain() {
        assert_eq!(value_domain(Vec::<f64>::new(), false), (0.0, 1.0));
        assert_eq!(value_domain([0.0, 0.0], true), (-1.0, 1.0));
        assert_eq!(value_domain([f64::NAN, 50.0], false), (45.0, 55.0));
    }

    #[test]
    fn bands_split_range_evenly() {
        let (centres, width) = bands(4, (0.0, 400.0));
        assert_eq!(width, 100.0);
        assert_eq!(centres, vec![50.0, 150.0, 250.0, 350.0]);
        assert!(bands(0, (0.0, 1.0)).0.is_empty());
    }

    #[test]
    fn ticks_include_both_ends() {
        assert_eq!(ticks((0.0, 10.0), 5), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn tick_labels_are_compact() {
        assert_eq!(tick_label(2500.0), "2.5k");
        assert_eq!(tick_label(40.0), "40");
        assert_eq!(tick_label(12.26), "12.3");
    }
}
