use leptos::prelude::*;

const VIEW_WIDTH: f64 = 360.0;
const VIEW_HEIGHT: f64 = 200.0;
const PAD: f64 = 24.0;

/// Map a series onto evenly spaced polyline points, y inverted so larger
/// values sit higher. The y scale runs from zero to the series maximum.
pub fn polyline_points(values: &[f64], width: f64, height: f64, pad: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = values.iter().cloned().fold(f64::MIN, f64::max).max(1.0);
    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;
    let step = if values.len() > 1 {
        inner_w / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = pad + step * i as f64;
            let y = height - pad - (v / max) * inner_h;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// X position of the i-th of n labels, matching `polyline_points`.
pub fn label_x(i: usize, n: usize, width: f64, pad: f64) -> f64 {
    if n <= 1 {
        return pad;
    }
    pad + (width - 2.0 * pad) / (n - 1) as f64 * i as f64
}

#[component]
pub fn LineChart(labels: Vec<String>, values: Vec<f64>, #[prop(into)] color: String) -> impl IntoView {
    let points = polyline_points(&values, VIEW_WIDTH, VIEW_HEIGHT, PAD);
    let n = labels.len();
    let view_box = format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT);

    let label_views: Vec<_> = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let x = label_x(i, n, VIEW_WIDTH, PAD);
            view! {
                <text
                    x=format!("{:.1}", x)
                    y=format!("{:.1}", VIEW_HEIGHT - 6.0)
                    class="chart__axis-label"
                    text-anchor="middle"
                >
                    {label}
                </text>
            }
        })
        .collect();

    view! {
        <svg class="chart chart--line" viewBox=view_box preserveAspectRatio="none" role="img">
            <line
                x1=format!("{}", PAD)
                y1=format!("{}", VIEW_HEIGHT - PAD)
                x2=format!("{}", VIEW_WIDTH - PAD)
                y2=format!("{}", VIEW_HEIGHT - PAD)
                class="chart__axis"
            />
            <polyline points=points fill="none" stroke=color stroke-width="2"/>
            {label_views}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_span_the_padded_width() {
        let points = polyline_points(&[1.0, 2.0, 3.0], 360.0, 200.0, 24.0);
        let coords: Vec<&str> = points.split(' ').collect();
        assert_eq!(coords.len(), 3);
        assert!(coords[0].starts_with("24.0,"));
        assert!(coords[2].starts_with("336.0,"));
    }

    #[test]
    fn max_value_touches_the_top_padding() {
        let points = polyline_points(&[5.0, 10.0], 360.0, 200.0, 24.0);
        let last = points.split(' ').next_back().unwrap_or_default();
        assert_eq!(last, "336.0,24.0");
    }

    #[test]
    fn empty_series_draws_nothing() {
        assert_eq!(polyline_points(&[], 360.0, 200.0, 24.0), "");
    }

    #[test]
    fn labels_line_up_with_points() {
        assert!((label_x(0, 7, 360.0, 24.0) - 24.0).abs() < 1e-9);
        assert!((label_x(6, 7, 360.0, 24.0) - 336.0).abs() < 1e-9);
    }
}
