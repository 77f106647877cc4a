use leptos::prelude::*;

const VIEW_WIDTH: f64 = 360.0;
const VIEW_HEIGHT: f64 = 200.0;
const PAD: f64 = 24.0;
const BAR_GAP: f64 = 10.0;

/// One bar rectangle in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay the series out as equal-width bars. Heights scale against the
/// series maximum, zero draws a zero-height bar on the baseline.
pub fn bar_rects(values: &[f64], width: f64, height: f64, pad: f64, gap: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().cloned().fold(f64::MIN, f64::max).max(1.0);
    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;
    let slot = inner_w / values.len() as f64;
    let bar_w = (slot - gap).max(1.0);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let bar_h = (v / max) * inner_h;
            BarRect {
                x: pad + slot * i as f64 + gap / 2.0,
                y: height - pad - bar_h,
                width: bar_w,
                height: bar_h,
            }
        })
        .collect()
}

#[component]
pub fn BarChart(labels: Vec<String>, values: Vec<f64>, #[prop(into)] color: String) -> impl IntoView {
    let rects = bar_rects(&values, VIEW_WIDTH, VIEW_HEIGHT, PAD, BAR_GAP);
    let view_box = format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT);

    let bars: Vec<_> = rects
        .iter()
        .zip(labels)
        .map(|(rect, label)| {
            let cx = rect.x + rect.width / 2.0;
            view! {
                <g>
                    <rect
                        x=format!("{:.1}", rect.x)
                        y=format!("{:.1}", rect.y)
                        width=format!("{:.1}", rect.width)
                        height=format!("{:.1}", rect.height)
                        fill=color.clone()
                        rx="2"
                    />
                    <text
                        x=format!("{:.1}", cx)
                        y=format!("{:.1}", VIEW_HEIGHT - 6.0)
                        class="chart__axis-label"
                        text-anchor="middle"
                    >
                        {label}
                    </text>
                </g>
            }
        })
        .collect();

    view! {
        <svg class="chart chart--bar" viewBox=view_box preserveAspectRatio="none" role="img">
            <line
                x1=format!("{}", PAD)
                y1=format!("{}", VIEW_HEIGHT - PAD)
                x2=format!("{}", VIEW_WIDTH - PAD)
                y2=format!("{}", VIEW_HEIGHT - PAD)
                class="chart__axis"
            />
            {bars}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_share_the_inner_width() {
        let rects = bar_rects(&[1.0, 2.0, 3.0, 4.0], 360.0, 200.0, 24.0, 10.0);
        assert_eq!(rects.len(), 4);
        let slot = (360.0 - 48.0) / 4.0;
        assert!((rects[1].x - rects[0].x - slot).abs() < 1e-9);
        assert!((rects[0].width - (slot - 10.0)).abs() < 1e-9);
    }

    #[test]
    fn tallest_bar_fills_the_inner_height() {
        let rects = bar_rects(&[2.0, 4.0], 360.0, 200.0, 24.0, 10.0);
        assert!((rects[1].height - 152.0).abs() < 1e-9);
        assert!((rects[1].y - 24.0).abs() < 1e-9);
        assert!((rects[0].height - 76.0).abs() < 1e-9);
    }

    #[test]
    fn bars_sit_on_the_baseline() {
        let rects = bar_rects(&[3.0], 360.0, 200.0, 24.0, 10.0);
        assert!((rects[0].y + rects[0].height - 176.0).abs() < 1e-9);
    }
}
