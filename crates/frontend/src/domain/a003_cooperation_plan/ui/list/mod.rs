use contracts::domain::a003_cooperation_plan::aggregate::CooperationPlan;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::CooperationPlanDetails;
use crate::domain::a003_cooperation_plan::api;
use crate::shared::date_utils::format_timestamp;

#[derive(Clone, Debug)]
pub struct CooperationPlanRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub cooperation_type: String,
    pub fee_amount: f64,
    pub deliverable: String,
    pub created_at: String,
}

impl From<CooperationPlan> for CooperationPlanRow {
    fn from(m: CooperationPlan) -> Self {
        Self {
            id: m.base.id.as_string(),
            code: m.base.code,
            name: m.base.description,
            cooperation_type: m
                .cooperation_type
                .map(|t| t.display_name().to_string())
                .unwrap_or_else(|| "-".to_string()),
            fee_amount: m.fee_amount,
            deliverable: m.deliverable.unwrap_or_else(|| "-".to_string()),
            created_at: format_timestamp(m.base.metadata.created_at),
        }
    }
}

#[component]
pub fn CooperationPlanList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CooperationPlanRow>>(Vec::new());
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
            .map(|w| w.confirm_with_message("确认删除该合作方案？").unwrap_or(false))
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
                <h2>"合作方案"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                        "新建方案"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "刷新"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || editing.get().is_some()>
                <CooperationPlanDetails
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
                            <th class="table__header-cell">"合作类型"</th>
                            <th class="table__header-cell">"合作费用"</th>
                            <th class="table__header-cell">"交付物"</th>
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
                                    <td class="table__cell">{row.cooperation_type}</td>
                                    <td class="table__cell">{format!("{:.2}", row.fee_amount)}</td>
                                    <td class="table__cell">{row.deliverable}</td>
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
