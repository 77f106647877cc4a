use contracts::domain::reports::CategoryShare;
use leptos::prelude::*;

const VIEW_SIZE: f64 = 200.0;
const RADIUS: f64 = 60.0;
const RING_WIDTH: f64 = 28.0;

/// Dash geometry of one donut segment: the visible arc length and the
/// dash offset that rotates it into place, starting from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    pub dash: f64,
    pub offset: f64,
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * std::f64::consts::PI * radius
}

/// Segment geometry for a list of percentages. Percentages are taken as
/// given; anything short of 100 leaves a gap after the last segment.
pub fn donut_segments(percents: &[u8], radius: f64) -> Vec<DonutSegment> {
    let total = circumference(radius);
    let mut start = 0.0;
    percents
        .iter()
        .map(|p| {
            let dash = (*p as f64 / 100.0) * total;
            let segment = DonutSegment {
                dash,
                offset: total / 4.0 - start,
            };
            start += dash;
            segment
        })
        .collect()
}

#[component]
pub fn DonutChart(shares: Vec<CategoryShare>) -> impl IntoView {
    let percents: Vec<u8> = shares.iter().map(|s| s.percent).collect();
    let segments = donut_segments(&percents, RADIUS);
    let total = circumference(RADIUS);
    let center = VIEW_SIZE / 2.0;
    let view_box = format!("0 0 {} {}", VIEW_SIZE, VIEW_SIZE);

    let rings: Vec<_> = segments
        .iter()
        .zip(shares.iter())
        .map(|(segment, share)| {
            view! {
                <circle
                    cx=format!("{}", center)
                    cy=format!("{}", center)
                    r=format!("{}", RADIUS)
                    fill="none"
                    stroke=share.color.clone()
                    stroke-width=format!("{}", RING_WIDTH)
                    stroke-dasharray=format!("{:.2} {:.2}", segment.dash, total - segment.dash)
                    stroke-dashoffset=format!("{:.2}", segment.offset)
                />
            }
        })
        .collect();

    let legend: Vec<_> = shares
        .iter()
        .map(|share| {
            view! {
                <li class="chart-legend__item">
                    <span
                        class="chart-legend__dot"
                        style=format!("background-color: {}", share.color)
                    ></span>
                    <span class="chart-legend__name">{share.name.clone()}</span>
                    <span class="chart-legend__value">{format!("{}%", share.percent)}</span>
                </li>
            }
        })
        .collect();

    view! {
        <div class="chart chart--donut">
            <svg viewBox=view_box role="img">{rings}</svg>
            <ul class="chart-legend">{legend}</ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_circle_splits_into_the_whole_ring() {
        let segments = donut_segments(&[28, 22, 18, 15, 12, 5], 60.0);
        let total: f64 = segments.iter().map(|s| s.dash).sum();
        assert!((total - circumference(60.0)).abs() < 1e-6);
    }

    #[test]
    fn first_segment_starts_at_twelve_oclock() {
        let segments = donut_segments(&[50, 50], 60.0);
        assert!((segments[0].offset - circumference(60.0) / 4.0).abs() < 1e-9);
    }

    #[test]
    fn offsets_walk_clockwise() {
        let segments = donut_segments(&[25, 25, 50], 60.0);
        let quarter = circumference(60.0) / 4.0;
        assert!((segments[1].offset - (quarter - segments[0].dash)).abs() < 1e-9);
        assert!(segments[1].offset < segments[0].offset);
    }
}
