use contracts::domain::a004_fulfillment_record::aggregate::FulfillmentRecord;
use contracts::domain::common::AggregateId;
use contracts::enums::fulfillment_stage::FulfillmentStage;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::advance_dialog::AdvanceDialog;
use super::details::FulfillmentRecordDetails;
use crate::domain::a004_fulfillment_record::api;
use crate::shared::date_utils::format_timestamp;

#[derive(Clone, Debug)]
pub struct FulfillmentRecordRow {
    pub id: String,
    pub code: String,
    pub title: String,
    pub stage_code: String,
    pub stage_name: String,
    pub priority: String,
    pub tracking_number: String,
    pub video_url: String,
    pub ad_roi: String,
    pub created_at: String,
}

impl From<FulfillmentRecord> for FulfillmentRecordRow {
    fn from(m: FulfillmentRecord) -> Self {
        Self {
            id: m.base.id.as_string(),
            code: m.base.code,
            title: m.base.description,
            stage_name: FulfillmentStage::display_name_of(&m.stage),
            stage_code: m.stage,
            priority: m.priority.display_name().to_string(),
            tracking_number: m.tracking_number.unwrap_or_else(|| "-".to_string()),
            video_url: m.video_url.unwrap_or_else(|| "-".to_string()),
            ad_roi: m
                .ad_roi
                .map(|r| format!("{:.2}", r))
                .unwrap_or_else(|| "-".to_string()),
            created_at: format_timestamp(m.base.metadata.created_at),
        }
    }
}

#[component]
pub fn FulfillmentRecordList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<FulfillmentRecordRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let editing = RwSignal::new(Option::<Option<String>>::None);
    // (id, отображаемое имя текущего этапа)
    let advancing = RwSignal::new(Option::<(String, String)>::None);

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
            .map(|w| w.confirm_with_message("确认删除该履约记录？").unwrap_or(false))
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
                <h2>"履约记录"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                        "新建记录"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "刷新"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <Show when=move || editing.get().is_some()>
                <FulfillmentRecordDetails
                    id=Signal::derive(move || editing.get().flatten())
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            </Show>

            {move || advancing.get().map(|(record_id, stage_name)| view! {
                <AdvanceDialog
                    record_id=record_id
                    current_stage=stage_name
                    on_done=Callback::new(move |_| {
                        advancing.set(None);
                        fetch();
                    })
                    on_cancel=Callback::new(move |_| advancing.set(None))
                />
            })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"编号"</th>
                            <th class="table__header-cell">"标题"</th>
                            <th class="table__header-cell">"状态"</th>
                            <th class="table__header-cell">"优先级"</th>
                            <th class="table__header-cell">"快递单号"</th>
                            <th class="table__header-cell">"视频链接"</th>
                            <th class="table__header-cell">"ROI"</th>
                            <th class="table__header-cell">"创建时间"</th>
                            <th class="table__header-cell">"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id_for_edit = row.id.clone();
                            let id_for_delete = row.id.clone();
                            let id_for_advance = row.id.clone();
                            let stage_for_advance = row.stage_name.clone();
                            let stage_class = format!("stage-badge stage-badge--{}", row.stage_code);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.title}</td>
                                    <td class="table__cell">
                                        <span class=stage_class>{row.stage_name.clone()}</span>
                                    </td>
                                    <td class="table__cell">{row.priority}</td>
                                    <td class="table__cell">{row.tracking_number}</td>
                                    <td class="table__cell">{row.video_url}</td>
                                    <td class="table__cell">{row.ad_roi}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell">
                                        <button
                                            class="button button--small button--primary"
                                            on:click=move |_| advancing.set(Some((
                                                id_for_advance.clone(),
                                                stage_for_advance.clone(),
                                            )))
                                        >
                                            "流转"
                                        </button>
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
