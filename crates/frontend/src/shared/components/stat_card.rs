use crate::shared::format::format_metric;
use crate::shared::icons::icon;
use contracts::domain::reports::{PerformanceMetric, Trend};
use leptos::prelude::*;

/// Summary card showing one performance metric with its
/// period-over-period change.
#[component]
pub fn StatCard(metric: PerformanceMetric) -> impl IntoView {
    let value = format_metric(metric.value, metric.format);
    let (change_class, arrow) = match metric.trend {
        Trend::Up => ("stat-card__change stat-card__change--up", "trending-up"),
        Trend::Down => ("stat-card__change stat-card__change--down", "trending-down"),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&metric.icon)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{metric.label}</div>
                <div class="stat-card__value">{value}</div>
                <div class=change_class>
                    {icon(arrow)}
                    <span>{metric.change}</span>
                </div>
            </div>
        </div>
    }
}
