use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::ProductDetails;
use crate::domain::a002_product::api;
use crate::shared::date_utils::format_timestamp;

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub sku: String,
    pub unit_price: f64,
    pub commission_rate: f64,
    pub sample_available: bool,
    pub created_at: String,
}

impl From<Product> for ProductRow {
    fn from(m: Product) -> Self {
        Self {
            id: m.base.id.as_string(),
            code: m.base.code,
            name: m.base.description,
            sku: m.sku,
            unit_price: m.unit_price,
            commission_rate: m.commission_rate,
            sample_available: m.sample_available,
            created_at: format_timestamp(m.base.metadata.created_at),
        }
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ProductRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(Option::<Option<String>>::None);

    let fetch = move || {
        spawn_local(async move {
            match api::list_all().await {
                Ok(v) => {
                    set_items.set(v.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("确认删除该商品？").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"商品列表"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                        "新建商品"
                    </button>
                    <button class="button button--primary" on:click=move |_| {
                        spawn_local(async move {
                            match api::insert_test_data().await {
                                Ok(()) => fetch(),
                                Err(e) => set_error.set(Some(e)),
                            }
                        });
                    }>
                        "填充测试数据"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "刷新"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || editing.get().is_some()>
                <ProductDetails
                    id=Signal::derive(move || editing.get().flatten())
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            </Show>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"编号"</th>
                            <th class="table__header-cell">"名称"</th>
                            <th class="table__header-cell">"SKU"</th>
                            <th class="table__header-cell">"单价"</th>
                            <th class="table__header-cell">"佣金率 %"</th>
                            <th class="table__header-cell">"可寄样"</th>
                            <th class="table__header-cell">"创建时间"</th>
                            <th class="table__header-cell">"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id_for_edit = row.id.clone();
                            let id_for_delete = row.id.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.sku}</td>
                                    <td class="table__cell">{format!("{:.2}", row.unit_price)}</td>
                                    <td class="table__cell">{format!("{:.1}", row.commission_rate)}</td>
                                    <td class="table__cell">{if row.sample_available { "是" } else { "否" }}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--small"
                                            on:click=move |_| editing.set(Some(Some(id_for_edit.clone())))
                                        >
                                            "编辑"
                                        </button>
                                        <button
                                            class="button button--small button--danger"
                                            on:click=move |_| handle_delete(id_for_delete.clone())
                                        >
                                            "删除"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
