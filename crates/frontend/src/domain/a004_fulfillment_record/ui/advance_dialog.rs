use chrono::NaiveDateTime;
use contracts::domain::a004_fulfillment_record::aggregate::{
    AdvancePayload, AdvanceRequest, AdvanceTargetInfo,
};
use contracts::enums::fulfillment_stage::StageField;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_fulfillment_record::api;

/// Диалог перевода этапа. Список целей приходит с бэкенда, набор полей
/// формы зависит от выбранной цели.
#[component]
pub fn AdvanceDialog(
    record_id: String,
    current_stage: String,
    on_done: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (targets, set_targets) = signal::<Vec<AdvanceTargetInfo>>(Vec::new());
    let (selected, set_selected) = signal(Option::<AdvanceTargetInfo>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let (tracking_number, set_tracking_number) = signal(String::new());
    let (received_at, set_received_at) = signal(String::new());
    let (video_url, set_video_url) = signal(String::new());
    let (video_id, set_video_id) = signal(String::new());
    let (ad_code, set_ad_code) = signal(String::new());
    let (ad_roi, set_ad_roi) = signal(String::new());

    {
        let record_id = record_id.clone();
        spawn_local(async move {
            match api::advance_targets(&record_id).await {
                Ok(list) => {
                    set_selected.set(list.first().cloned());
                    set_targets.set(list);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    }

    let has_field = move |field: StageField| {
        selected
            .get()
            .map(|t| t.extra_fields.contains(&field))
            .unwrap_or(false)
    };

    let on_submit = {
        let record_id = record_id.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let Some(target) = selected.get() else {
                return;
            };

            let opt = |s: String| {
                let s = s.trim().to_string();
                if s.is_empty() {
                    None
                } else {
                    Some(s)
                }
            };

            let payload = AdvancePayload {
                tracking_number: opt(tracking_number.get()),
                received_at: NaiveDateTime::parse_from_str(
                    received_at.get().trim(),
                    "%Y-%m-%dT%H:%M",
                )
                .ok()
                .map(|dt| dt.and_utc()),
                video_url: opt(video_url.get()),
                video_id: opt(video_id.get()),
                ad_code: opt(ad_code.get()),
                ad_roi: ad_roi.get().trim().parse().ok(),
            };

            let request = AdvanceRequest {
                target: target.stage.clone(),
                payload,
            };

            set_is_saving.set(true);
            set_error.set(None);
            let record_id = record_id.clone();
            spawn_local(async move {
                match api::advance(&record_id, &request).await {
                    Ok(_) => {
                        set_is_saving.set(false);
                        on_done.run(());
                    }
                    Err(e) => {
                        set_error.set(Some(e));
                        set_is_saving.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h3>"状态流转"</h3>
                <p class="modal__subtitle">{format!("当前状态：{}", current_stage)}</p>

                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <Show
                    when=move || !targets.get().is_empty()
                    fallback=move || view! { <p>"当前状态不可流转"</p> }
                >
                    <form on:submit=on_submit.clone()>
                        <div class="form-group">
                            <label>"目标状态"</label>
                            <select on:change=move |ev| {
                                let code = event_target_value(&ev);
                                set_selected.set(
                                    targets.get().into_iter().find(|t| t.stage == code),
                                );
                            }>
                                {move || targets.get().into_iter().map(|t| {
                                    let code = t.stage.clone();
                                    let is_selected = selected
                                        .get()
                                        .map(|s| s.stage == code)
                                        .unwrap_or(false);
                                    view! {
                                        <option value=t.stage.clone() selected=is_selected>
                                            {t.display_name.clone()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>

                        <Show when=move || has_field(StageField::TrackingNumber)>
                            <div class="form-group">
                                <label>"快递单号"</label>
                                <input
                                    type="text"
                                    prop:value=move || tracking_number.get()
                                    on:input=move |ev| set_tracking_number.set(event_target_value(&ev))
                                />
                            </div>
                        </Show>

                        <Show when=move || has_field(StageField::ReceivedAt)>
                            <div class="form-group">
                                <label>"签收时间"</label>
                                <input
                                    type="datetime-local"
                                    prop:value=move || received_at.get()
                                    on:input=move |ev| set_received_at.set(event_target_value(&ev))
                                />
                            </div>
                        </Show>

                        <Show when=move || has_field(StageField::VideoUrl)>
                            <div class="form-group">
                                <label>"视频链接"</label>
                                <input
                                    type="text"
                                    prop:value=move || video_url.get()
                                    on:input=move |ev| set_video_url.set(event_target_value(&ev))
                                />
                            </div>
                        </Show>

                        <Show when=move || has_field(StageField::VideoId)>
                            <div class="form-group">
                                <label>"视频ID"</label>
                                <input
                                    type="text"
                                    prop:value=move || video_id.get()
                                    on:input=move |ev| set_video_id.set(event_target_value(&ev))
                                />
                            </div>
                        </Show>

                        <Show when=move || has_field(StageField::AdCode)>
                            <div class="form-group">
                                <label>"广告码"</label>
                                <input
                                    type="text"
                                    prop:value=move || ad_code.get()
                                    on:input=move |ev| set_ad_code.set(event_target_value(&ev))
                                />
                            </div>
                        </Show>

                        <Show when=move || has_field(StageField::AdRoi)>
                            <div class="form-group">
                                <label>"广告ROI"</label>
                                <input
                                    type="number"
                                    step="0.01"
                                    prop:value=move || ad_roi.get()
                                    on:input=move |ev| set_ad_roi.set(event_target_value(&ev))
                                />
                            </div>
                        </Show>

                        <div class="form-actions">
                            <button
                                type="submit"
                                class="button button--primary"
                                disabled=move || is_saving.get()
                            >
                                {move || if is_saving.get() { "提交中..." } else { "确认流转" }}
                            </button>
                            <button
                                type="button"
                                class="button button--secondary"
                                on:click=move |_| on_cancel.run(())
                            >
                                "取消"
                            </button>
                        </div>
                    </form>
                </Show>
            </div>
        </div>
    }
}
