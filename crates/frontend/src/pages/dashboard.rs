use crate::shared::components::ui::{Badge, Button};
use crate::shared::data::dashboard as data;
use crate::shared::date_utils::{format_time_12h, relative_time};
use crate::shared::format::{format_gbp, format_thousands};
use crate::shared::icons::icon;
use chrono::Utc;
use contracts::domain::dashboard::DeliveryStatus;
use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let now = Utc::now();
    let overview = data::stock_overview();
    let total = overview.total().max(1);
    let alerts = data::stock_alerts(now);
    let inbound = data::inbound_deliveries();
    let outbound = data::outbound_lines();

    let overview_cards: Vec<_> = overview
        .entries()
        .into_iter()
        .map(|(status, count)| {
            let percent = (count as f64 / total as f64) * 100.0;
            view! {
                <div class=format!("overview-card overview-card--{}", status.code())>
                    <div class="overview-card__header">
                        <span class="overview-card__label">{status.label()}</span>
                        <span class="overview-card__dot"></span>
                    </div>
                    <div class="overview-card__count">{format_thousands(count as i64)}</div>
                    <div class="overview-card__track">
                        <div
                            class="overview-card__fill"
                            style=format!("width: {:.1}%", percent)
                        ></div>
                    </div>
                </div>
            }
        })
        .collect();

    let alert_count = alerts.len();
    let alert_rows: Vec<_> = alerts
        .into_iter()
        .map(|alert| {
            let when = relative_time(alert.raised_at, now);
            view! {
                <div class=format!("alert alert--{}", alert.kind.code())>
                    <span class="alert__icon">{icon(&alert.icon)}</span>
                    <div class="alert__body">
                        <p class="alert__message">{alert.message}</p>
                        <p class="alert__time">{when}</p>
                    </div>
                    <button type="button" class="alert__view">"View"</button>
                </div>
            }
        })
        .collect();

    let quick_actions = [
        ("Add New Stock", "plus", "primary"),
        ("Generate Pick List", "clipboard-list", "success"),
        ("Create Report", "file-text", "accent"),
        ("View Orders", "shopping-cart", "warning"),
    ];
    let action_buttons: Vec<_> = quick_actions
        .iter()
        .map(|&(label, icon_name, variant)| {
            view! {
                <Button variant=variant class="quick-action">
                    {icon(icon_name)}
                    <span>{label}</span>
                </Button>
            }
        })
        .collect();

    let inbound_total: u32 = inbound.iter().map(|d| d.items).sum();
    let inbound_rows: Vec<_> = inbound
        .into_iter()
        .map(|delivery| {
            let meta = format!(
                "{} items • {}",
                delivery.items,
                format_time_12h(delivery.expected_at)
            );
            let badge_variant = match delivery.status {
                DeliveryStatus::Arriving => "success",
                DeliveryStatus::Scheduled => "primary",
            };
            view! {
                <div class="delivery-row">
                    <div>
                        <p class="delivery-row__supplier">{delivery.supplier}</p>
                        <p class="delivery-row__meta">{meta}</p>
                    </div>
                    <Badge variant=badge_variant>{delivery.status.label()}</Badge>
                </div>
            }
        })
        .collect();

    let outbound_items: u32 = outbound.iter().map(|l| l.count).sum();
    let outbound_value: i64 = outbound.iter().map(|l| l.value_pence).sum();
    let outbound_total = format!("{} items • {}", outbound_items, format_gbp(outbound_value));
    let outbound_rows: Vec<_> = outbound
        .iter()
        .map(|line| {
            view! {
                <div class="outbound-row">
                    <div>
                        <p class="outbound-row__kind">{line.kind.label()}</p>
                        <p class="outbound-row__value">{format_gbp(line.value_pence)}</p>
                    </div>
                    <div class="outbound-row__count">
                        <p>{line.count}</p>
                        <p class="outbound-row__unit">"items"</p>
                    </div>
                </div>
            }
        })
        .collect();

    view! {
        <div class="page page--dashboard">
            <section class="dashboard-section">
                <h2 class="section-title">"Stock Overview"</h2>
                <div class="overview-grid">{overview_cards}</div>
            </section>

            <div class="dashboard-columns">
                <section class="card card--wide">
                    <div class="card__header">
                        <h3 class="card__title">"Alerts & Notifications"</h3>
                        <Badge variant="error">{format!("{} Active", alert_count)}</Badge>
                    </div>
                    <div class="alert-list">{alert_rows}</div>
                </section>

                <section class="card">
                    <h3 class="card__title">"Quick Actions"</h3>
                    <div class="quick-actions">{action_buttons}</div>
                </section>
            </div>

            <div class="dashboard-columns dashboard-columns--split">
                <section class="card">
                    <div class="card__header">
                        <span class="card__header-icon">{icon("trending-down")}</span>
                        <h3 class="card__title">"Today's Inbound Deliveries"</h3>
                    </div>
                    <div class="delivery-list">{inbound_rows}</div>
                    <div class="card__footer">
                        <span>"Total Items Expected"</span>
                        <span class="card__footer-value">{format!("{} items", inbound_total)}</span>
                    </div>
                </section>

                <section class="card">
                    <div class="card__header">
                        <span class="card__header-icon">{icon("trending-up")}</span>
                        <h3 class="card__title">"Today's Outbound Summary"</h3>
                    </div>
                    <div class="outbound-list">{outbound_rows}</div>
                    <div class="card__footer">
                        <span>"Total Outbound"</span>
                        <span class="card__footer-value">{outbound_total}</span>
                    </div>
                </section>
            </div>
        </div>
    }
}
