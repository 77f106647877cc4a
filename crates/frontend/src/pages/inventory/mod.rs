use chrono::Utc;
use contracts::domain::product::{Product, RestockReason, RestockRequest, StockStatus};
use contracts::enums::category::Category;
use gloo_timers::future::TimeoutFuture;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input, Select, StatusBadge, Textarea};
use crate::shared::components::FilterPanel;
use crate::shared::data::inventory as data;
use crate::shared::date_utils::format_date_iso;
use crate::shared::forms::{
    Form, FormControl, FormDescription, FormField, FormItem, FormLabel, FormManager, FormMessage,
    Rule,
};
use crate::shared::icons::icon;

pub mod state;

use self::state::{supplier_options, ExpiryWindow, InventoryFilter};

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Product register with filters, details panel and restock form.
#[component]
pub fn InventoryPage() -> impl IntoView {
    let today = Utc::now().date_naive();

    let (products, set_products) = signal(data::all_products());
    let (filter, set_filter) = signal(InventoryFilter::default());
    let (search_term, set_search_term) = signal(String::new());
    let (selected_sku, set_selected_sku) = signal(None::<String>);
    let (show_restock, set_show_restock) = signal(false);
    let filter_expanded = RwSignal::new(false);

    let filtered = Signal::derive(move || filter.get().apply(&products.get(), today));
    let active_count = Signal::derive(move || filter.get().active_count());
    let selected = Signal::derive(move || {
        let sku = selected_sku.get()?;
        products.get().into_iter().find(|p| p.sku == sku)
    });

    // The filter only picks the term up once typing pauses; the input
    // itself stays live through `search_term`.
    let handle_search = Callback::new(move |term: String| {
        set_search_term.set(term.clone());
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if search_term.get_untracked() == term {
                set_filter.update(|f| f.search = term);
            }
        });
    });

    let handle_category = Callback::new(move |code: String| {
        set_filter.update(|f| f.category = Category::from_code(&code));
    });
    let handle_status = Callback::new(move |code: String| {
        set_filter.update(|f| f.status = StockStatus::from_code(&code));
    });
    let handle_supplier = Callback::new(move |name: String| {
        set_filter.update(|f| f.supplier = if name.is_empty() { None } else { Some(name) });
    });
    let handle_expiry = Callback::new(move |code: String| {
        set_filter.update(|f| f.expiry = ExpiryWindow::from_code(&code));
    });

    let category_value = Signal::derive(move || {
        filter
            .get()
            .category
            .map(|c| c.code().to_string())
            .unwrap_or_default()
    });
    let status_value = Signal::derive(move || {
        filter
            .get()
            .status
            .map(|s| s.code().to_string())
            .unwrap_or_default()
    });
    let supplier_value = Signal::derive(move || filter.get().supplier.unwrap_or_default());
    let expiry_value = Signal::derive(move || {
        filter
            .get()
            .expiry
            .map(|w| w.code().to_string())
            .unwrap_or_default()
    });

    let mut category_options = vec![(String::new(), "All Categories".to_string())];
    category_options.extend(
        Category::all()
            .iter()
            .map(|c| (c.code().to_string(), c.display_name().to_string())),
    );
    let mut status_options = vec![(String::new(), "All Stock Levels".to_string())];
    status_options.extend(
        StockStatus::all()
            .iter()
            .map(|s| (s.code().to_string(), s.label().to_string())),
    );
    let mut supplier_select_options = vec![(String::new(), "All Suppliers".to_string())];
    supplier_select_options.extend(
        supplier_options(&products.get_untracked())
            .into_iter()
            .map(|name| (name.clone(), name)),
    );
    let mut expiry_options = vec![(String::new(), "Expiry: All".to_string())];
    expiry_options.extend(
        ExpiryWindow::all()
            .iter()
            .map(|w| (w.code().to_string(), w.label().to_string())),
    );

    let handle_select = move |sku: String| {
        set_selected_sku.set(Some(sku));
        set_show_restock.set(false);
    };

    let handle_restock = Callback::new(move |request: RestockRequest| {
        set_products.update(|list| {
            if let Some(product) = list.iter_mut().find(|p| p.sku == request.sku) {
                product.quantity += request.quantity;
            }
        });
        set_show_restock.set(false);
    });

    view! {
        <div class="inventory">
            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=active_count
                search_slot=move || {
                    view! {
                        <div class="search-box">
                            {icon("search")}
                            <Input
                                value=search_term
                                on_input=handle_search
                                placeholder="Search by product name, SKU, category, or supplier..."
                                class="search-box__input"
                            />
                        </div>
                    }
                }
                filter_content={
                    let category_options = category_options.clone();
                    let status_options = status_options.clone();
                    let supplier_select_options = supplier_select_options.clone();
                    let expiry_options = expiry_options.clone();
                    move || {
                        view! {
                            <div class="filter-grid">
                                <Select
                                    value=category_value
                                    on_change=handle_category
                                    options=category_options.clone()
                                />
                                <Select
                                    value=status_value
                                    on_change=handle_status
                                    options=status_options.clone()
                                />
                                <Select
                                    value=supplier_value
                                    on_change=handle_supplier
                                    options=supplier_select_options.clone()
                                />
                                <Select
                                    value=expiry_value
                                    on_change=handle_expiry
                                    options=expiry_options.clone()
                                />
                            </div>
                        }
                    }
                }
            />

            <div class="inventory__grid">
                <section class="card inventory-table">
                    <div class="inventory-table__header">
                        <h3 class="card__title">
                            {move || format!("Product Inventory ({})", filtered.get().len())}
                        </h3>
                    </div>
                    <div class="table-scroll">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Product"</th>
                                    <th>"SKU"</th>
                                    <th>"Quantity"</th>
                                    <th>"Location"</th>
                                    <th>"Status"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || filtered.get()
                                    key=|product| (product.sku.clone(), product.quantity)
                                    children=move |product: Product| {
                                        let sku = product.sku.clone();
                                        let row_sku = product.sku.clone();
                                        let row_class = move || {
                                            if selected_sku.get().as_deref() == Some(row_sku.as_str()) {
                                                "table__row table__row--selected"
                                            } else {
                                                "table__row"
                                            }
                                        };
                                        let status = product.status();
                                        let location_text = product.location.to_string();
                                        let min_text = format!("Min: {}", product.reorder_level);
                                        view! {
                                            <tr class=row_class on:click=move |_| handle_select(sku.clone())>
                                                <td>
                                                    <p class="table__primary">{product.name.clone()}</p>
                                                    <p class="table__secondary">
                                                        {product.category.display_name()}
                                                    </p>
                                                </td>
                                                <td>{product.sku.clone()}</td>
                                                <td>
                                                    <p class="table__primary">{product.quantity}</p>
                                                    <p class="table__secondary">{min_text}</p>
                                                </td>
                                                <td>
                                                    <span class="table__location">
                                                        {icon("map-pin")}
                                                        {location_text}
                                                    </span>
                                                </td>
                                                <td>
                                                    <StatusBadge status=status />
                                                </td>
                                                <td>
                                                    <button class="table__action" aria-label="Edit">
                                                        {icon("edit")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </section>

                <div class="inventory-side">
                    {move || match selected.get() {
                        Some(product) => {
                            view! {
                                <ProductDetails
                                    product=product
                                    show_restock=show_restock
                                    set_show_restock=set_show_restock
                                    on_restock=handle_restock
                                />
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <section class="card inventory-side__empty">
                                    {icon("alert-circle")}
                                    <p>"Select a product to view details"</p>
                                </section>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

/// Details, store-location map and stock history for one product.
#[component]
fn ProductDetails(
    product: Product,
    show_restock: ReadSignal<bool>,
    set_show_restock: WriteSignal<bool>,
    on_restock: Callback<RestockRequest>,
) -> impl IntoView {
    let section = product.location.section().to_string();
    let map_cells: Vec<_> = data::store_sections()
        .into_iter()
        .map(|cell| {
            let cell_class = if cell == section {
                "store-map__cell store-map__cell--active"
            } else {
                "store-map__cell"
            };
            view! { <div class=cell_class>{cell}</div> }
        })
        .collect();

    let history_rows: Vec<_> = data::stock_history()
        .into_iter()
        .map(|entry| {
            let delta_class = if entry.delta > 0 {
                "history__delta history__delta--in"
            } else {
                "history__delta history__delta--out"
            };
            let meta = format!(
                "{} • {}",
                format_date_iso(entry.occurred_on),
                entry.recorded_by
            );
            view! {
                <div class="history__row">
                    <span class="history__dot"></span>
                    <div class="history__body">
                        <div class="history__line">
                            <span class=delta_class>{format!("{:+}", entry.delta)}</span>
                            <span class="history__action">{entry.action.label()}</span>
                        </div>
                        <p class="history__note">{entry.note}</p>
                        <p class="history__meta">{meta}</p>
                    </div>
                </div>
            }
        })
        .collect();

    let open_restock = Callback::new(move |_: leptos::ev::MouseEvent| {
        set_show_restock.set(true);
    });

    view! {
        <section class="card">
            <h3 class="card__title">"Product Details"</h3>
            <dl class="details">
                <div class="details__field">
                    <dt>"Product Name"</dt>
                    <dd>{product.name.clone()}</dd>
                </div>
                <div class="details__field">
                    <dt>"SKU"</dt>
                    <dd>{product.sku.clone()}</dd>
                </div>
                <div class="details__pair">
                    <div class="details__field">
                        <dt>"Current Stock"</dt>
                        <dd>{product.quantity}</dd>
                    </div>
                    <div class="details__field">
                        <dt>"Reorder Level"</dt>
                        <dd>{product.reorder_level}</dd>
                    </div>
                </div>
                <div class="details__field">
                    <dt>"Category"</dt>
                    <dd>{product.category.display_name()}</dd>
                </div>
                <div class="details__field">
                    <dt>"Supplier"</dt>
                    <dd>{product.supplier.clone()}</dd>
                </div>
                <div class="details__field">
                    <dt>"Expiry Date"</dt>
                    <dd>{format_date_iso(product.expiry_date)}</dd>
                </div>
                <div class="details__field">
                    <dt>"Location"</dt>
                    <dd class="details__location">
                        {icon("map-pin")}
                        {product.location.to_string()}
                    </dd>
                </div>
            </dl>
            <div class="details__actions">
                <Button variant="primary" class="details__action" on_click=open_restock>
                    "Update Quantity"
                </Button>
                <Button variant="success" class="details__action" on_click=open_restock>
                    "Restock Request"
                </Button>
            </div>
            {move || {
                show_restock
                    .get()
                    .then(|| {
                        view! { <RestockForm sku=product.sku.clone() on_submitted=on_restock /> }
                    })
            }}
        </section>

        <section class="card">
            <h3 class="card__title">"Store Location"</h3>
            <div class="store-map">{map_cells}</div>
        </section>

        <section class="card">
            <div class="card__heading">
                {icon("history")}
                <h3 class="card__title">"Stock History"</h3>
            </div>
            <div class="history">{history_rows}</div>
        </section>
    }
}

/// Restock request form. Validation runs on submit, then per keystroke
/// for fields that already failed once.
#[component]
fn RestockForm(sku: String, on_submitted: Callback<RestockRequest>) -> impl IntoView {
    let manager = FormManager::new()
        .with_field("quantity", "", vec![Rule::Required, Rule::MinNumber(1)])
        .with_field("reason", RestockReason::Delivery.code(), vec![Rule::Required])
        .with_field("note", "", vec![Rule::MaxLen(200)]);

    let reason_options: Vec<(String, String)> = RestockReason::all()
        .iter()
        .map(|r| (r.code().to_string(), r.label().to_string()))
        .collect();
    let quantity_value = Signal::derive(move || manager.value("quantity"));
    let reason_value = Signal::derive(move || manager.value("reason"));
    let note_value = Signal::derive(move || manager.value("note"));

    let handle_submit = Callback::new(move |_: ()| {
        let quantity = manager.value("quantity").trim().parse::<u32>().unwrap_or(0);
        let reason = RestockReason::from_code(&manager.value("reason"))
            .unwrap_or(RestockReason::Delivery);
        let request = RestockRequest {
            sku: sku.clone(),
            quantity,
            reason,
            note: manager.value("note").trim().to_string(),
        };
        match serde_json::to_string(&request) {
            Ok(json) => log!("Restock requested: {}", json),
            Err(err) => log!("Restock serialization failed: {}", err),
        }
        manager.reset();
        on_submitted.run(request);
    });

    view! {
        <Form manager=manager on_submit=handle_submit class="restock">
            <h4 class="restock__title">"Restock Request"</h4>

            <FormField name="quantity">
                <FormItem>
                    <FormLabel>"Quantity"</FormLabel>
                    <FormControl>
                        <Input
                            value=quantity_value
                            on_input=Callback::new(move |v: String| {
                                manager.set_value("quantity", v);
                            })
                            on_blur=Callback::new(move |_| manager.touch("quantity"))
                            input_type="number"
                            placeholder="0"
                        />
                    </FormControl>
                    <FormMessage />
                </FormItem>
            </FormField>

            <FormField name="reason">
                <FormItem>
                    <FormLabel>"Reason"</FormLabel>
                    <FormControl>
                        <Select
                            value=reason_value
                            on_change=Callback::new(move |v: String| {
                                manager.set_value("reason", v);
                            })
                            options=reason_options
                        />
                    </FormControl>
                    <FormMessage />
                </FormItem>
            </FormField>

            <FormField name="note">
                <FormItem>
                    <FormLabel>"Note"</FormLabel>
                    <FormControl>
                        <Textarea
                            value=note_value
                            on_input=Callback::new(move |v: String| {
                                manager.set_value("note", v);
                            })
                            on_blur=Callback::new(move |_| manager.touch("note"))
                            rows=3
                        />
                    </FormControl>
                    <FormDescription>"Optional note for the stockroom team."</FormDescription>
                    <FormMessage />
                </FormItem>
            </FormField>

            <Button button_type="submit" variant="success" class="restock__submit">
                "Submit Request"
            </Button>
        </Form>
    }
}
