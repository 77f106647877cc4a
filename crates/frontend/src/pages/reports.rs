use crate::shared::components::charts::{BarChart, DonutChart, LineChart};
use crate::shared::components::ui::{Button, Select};
use crate::shared::components::StatCard;
use crate::shared::data::reports as data;
use crate::shared::export::export_csv;
use crate::shared::format::format_gbp;
use crate::shared::forms::{
    Form, FormControl, FormField, FormItem, FormLabel, FormManager, FormMessage, Rule,
};
use crate::shared::icons::icon;
use contracts::domain::reports::{
    ExportFormat, ReportKind, ReportPeriod, ReportRequest, ScoreBand, TimeWindow, Trend,
};
use leptos::logging::log;
use leptos::prelude::*;

fn score_badge(percent: u8) -> impl IntoView {
    let band = ScoreBand::classify(percent);
    view! {
        <span class=format!("badge badge--score badge--score-{}", band.code())>
            {format!("{}%", percent)}
        </span>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let (period, set_period) = signal(ReportPeriod::Daily);

    let period_options: Vec<(String, String)> = ReportPeriod::all()
        .iter()
        .map(|p| (p.code().to_string(), p.label().to_string()))
        .collect();

    let handle_period_change = Callback::new(move |code: String| {
        if let Some(p) = ReportPeriod::from_code(&code) {
            set_period.set(p);
        }
    });

    let handle_export = Callback::new(move |_: leptos::ev::MouseEvent| {
        let rows = data::weekly_sales();
        let filename = format!("{}_sales.csv", period.get().code());
        if let Err(err) = export_csv(&rows, &filename) {
            log!("CSV export failed: {}", err);
        }
    });

    let metric_cards: Vec<_> = data::performance_metrics()
        .into_iter()
        .map(|metric| view! { <StatCard metric=metric /> })
        .collect();

    let sales = data::weekly_sales();
    let sales_labels: Vec<String> = sales.iter().map(|s| s.day.clone()).collect();
    let sales_values: Vec<f64> = sales.iter().map(|s| (s.sales_pence / 100) as f64).collect();

    let turnover = data::turnover_series();
    let turnover_labels: Vec<String> = turnover.iter().map(|t| t.month.clone()).collect();
    let turnover_values: Vec<f64> = turnover.iter().map(|t| t.rate).collect();

    let top_rows: Vec<_> = data::top_products()
        .into_iter()
        .enumerate()
        .map(|(i, product)| {
            let trend_icon = match product.trend {
                Trend::Up => "trending-up",
                Trend::Down => "trending-down",
            };
            let trend_class = format!("top-product__trend top-product__trend--{}", product.trend.code());
            view! {
                <div class="top-product">
                    <div class="top-product__rank">{i + 1}</div>
                    <div class="top-product__info">
                        <p class="top-product__name">{product.name}</p>
                        <p class="top-product__units">
                            {format!("{} units sold", product.units_sold)}
                        </p>
                    </div>
                    <div class="top-product__revenue">
                        <span>{format_gbp(product.revenue_pence)}</span>
                        <span class=trend_class>{icon(trend_icon)}</span>
                    </div>
                </div>
            }
        })
        .collect();

    let supplier_rows: Vec<_> = data::supplier_scores()
        .into_iter()
        .map(|supplier| {
            view! {
                <tr>
                    <td>{supplier.name}</td>
                    <td class="table__cell--center">{supplier.deliveries}</td>
                    <td class="table__cell--center">{score_badge(supplier.on_time_pct)}</td>
                    <td class="table__cell--center">{score_badge(supplier.quality_pct)}</td>
                </tr>
            }
        })
        .collect();

    // Custom report builder. Selects always hold a value, so validation
    // is a formality here; the bindings still wire labels and messages.
    let manager = FormManager::new()
        .with_field("report-kind", ReportKind::SalesAnalysis.code(), vec![Rule::Required])
        .with_field("time-window", TimeWindow::Last7Days.code(), vec![Rule::Required])
        .with_field("format", ExportFormat::Pdf.code(), vec![Rule::Required]);

    let handle_generate = Callback::new(move |_| {
        let kind = ReportKind::from_code(&manager.value("report-kind"));
        let window = TimeWindow::from_code(&manager.value("time-window"));
        let format = ExportFormat::from_code(&manager.value("format"));
        if let (Some(kind), Some(window), Some(format)) = (kind, window, format) {
            let request = ReportRequest { kind, window, format };
            match serde_json::to_string(&request) {
                Ok(json) => log!("report requested: {}", json),
                Err(err) => log!("report request not serializable: {}", err),
            }
        }
    });

    let handle_save_template = Callback::new(move |_: leptos::ev::MouseEvent| {
        log!(
            "report template saved: kind={} window={} format={}",
            manager.value("report-kind"),
            manager.value("time-window"),
            manager.value("format")
        );
    });

    let kind_options: Vec<(String, String)> = ReportKind::all()
        .iter()
        .map(|k| (k.code().to_string(), k.label().to_string()))
        .collect();
    let window_options: Vec<(String, String)> = TimeWindow::all()
        .iter()
        .map(|w| (w.code().to_string(), w.label().to_string()))
        .collect();
    let format_options: Vec<(String, String)> = ExportFormat::all()
        .iter()
        .map(|f| (f.code().to_string(), f.label().to_string()))
        .collect();

    let kind_value = Signal::derive(move || manager.value("report-kind"));
    let window_value = Signal::derive(move || manager.value("time-window"));
    let format_value = Signal::derive(move || manager.value("format"));

    view! {
        <div class="page page--reports">
            <section class="card reports-header">
                <div>
                    <h2 class="section-title">"Performance Reports"</h2>
                    <p class="section-subtitle">
                        "Analyze store performance and make data-driven decisions"
                    </p>
                </div>
                <div class="reports-header__controls">
                    <Select
                        value=Signal::derive(move || period.get().code().to_string())
                        on_change=handle_period_change
                        options=period_options
                    />
                    <Button variant="secondary">
                        {icon("calendar")}
                        <span>"Date Range"</span>
                    </Button>
                    <Button on_click=handle_export>
                        {icon("download")}
                        <span>"Export"</span>
                    </Button>
                </div>
            </section>

            <div class="metric-grid">{metric_cards}</div>

            <div class="reports-columns">
                <section class="card">
                    <h3 class="card__title">"Weekly Sales Trend"</h3>
                    <LineChart labels=sales_labels values=sales_values color="#3b82f6" />
                </section>

                <section class="card">
                    <h3 class="card__title">"Sales by Category"</h3>
                    <DonutChart shares=data::category_shares() />
                </section>
            </div>

            <section class="card">
                <h3 class="card__title">"Stock Turnover Rate (Last 6 Months)"</h3>
                <BarChart labels=turnover_labels values=turnover_values color="#10b981" />
            </section>

            <div class="reports-columns">
                <section class="card">
                    <h3 class="card__title">"Top Selling Products"</h3>
                    <div class="top-product-list">{top_rows}</div>
                </section>

                <section class="card">
                    <h3 class="card__title">"Supplier Performance"</h3>
                    <div class="table-scroll">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Supplier"</th>
                                    <th class="table__cell--center">"Deliveries"</th>
                                    <th class="table__cell--center">"On-Time %"</th>
                                    <th class="table__cell--center">"Quality %"</th>
                                </tr>
                            </thead>
                            <tbody>{supplier_rows}</tbody>
                        </table>
                    </div>
                </section>
            </div>

            <section class="card">
                <h3 class="card__title">"Custom Report Builder"</h3>
                <Form manager=manager on_submit=handle_generate class="report-builder">
                    <div class="report-builder__grid">
                        <FormField name="report-kind">
                            <FormItem>
                                <FormLabel>"Report Type"</FormLabel>
                                <FormControl>
                                    <Select
                                        value=kind_value
                                        on_change=Callback::new(move |v: String| {
                                            manager.set_value("report-kind", v);
                                        })
                                        options=kind_options
                                    />
                                </FormControl>
                                <FormMessage />
                            </FormItem>
                        </FormField>

                        <FormField name="time-window">
                            <FormItem>
                                <FormLabel>"Time Period"</FormLabel>
                                <FormControl>
                                    <Select
                                        value=window_value
                                        on_change=Callback::new(move |v: String| {
                                            manager.set_value("time-window", v);
                                        })
                                        options=window_options
                                    />
                                </FormControl>
                                <FormMessage />
                            </FormItem>
                        </FormField>

                        <FormField name="format">
                            <FormItem>
                                <FormLabel>"Format"</FormLabel>
                                <FormControl>
                                    <Select
                                        value=format_value
                                        on_change=Callback::new(move |v: String| {
                                            manager.set_value("format", v);
                                        })
                                        options=format_options
                                    />
                                </FormControl>
                                <FormMessage />
                            </FormItem>
                        </FormField>
                    </div>
                    <div class="report-builder__actions">
                        <Button button_type="submit">"Generate Report"</Button>
                        <Button variant="secondary" on_click=handle_save_template>
                            "Save Template"
                        </Button>
                    </div>
                </Form>
            </section>
        </div>
    }
}
