use contracts::domain::a001_influencer::aggregate::InfluencerDto;
use contracts::enums::platform::Platform;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_influencer::api;

/// Форма «шапки» достаточно плоская, поэтому одним DTO-сигналом
#[component]
pub fn InfluencerDetails(
    id: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let dto = RwSignal::new(InfluencerDto::default());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    // Загрузка записи при открытии формы на существующем ID
    Effect::new(move |_| {
        if let Some(record_id) = id.get() {
            spawn_local(async move {
                match api::get_by_id(&record_id).await {
                    Ok(rec) => {
                        dto.set(InfluencerDto {
                            id: Some(record_id),
                            code: Some(rec.base.code),
                            nickname: rec.base.description,
                            platform: rec.platform,
                            platform_account_id: rec.platform_account_id,
                            follower_count: rec.follower_count,
                            contact: rec.contact,
                            region: rec.region,
                            bd_owner: rec.bd_owner,
                            tags: rec.tags,
                            comment: rec.base.comment,
                        });
                    }
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_is_saving.set(true);
        set_error.set(None);
        let current = dto.get();
        spawn_local(async move {
            match api::save(&current).await {
                Ok(()) => {
                    set_is_saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    set_error.set(Some(e));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="details-panel">
            <h3>{move || if id.get().is_some() { "编辑达人" } else { "新建达人" }}</h3>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form on:submit=on_submit>
                <div class="form-group">
                    <label>"编号"</label>
                    <input
                        type="text"
                        prop:value=move || dto.get().code.unwrap_or_default()
                        on:input=move |ev| dto.update(|d| d.code = Some(event_target_value(&ev)))
                    />
                </div>
                <div class="form-group">
                    <label>"昵称"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || dto.get().nickname
                        on:input=move |ev| dto.update(|d| d.nickname = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"平台"</label>
                    <select on:change=move |ev| {
                        dto.update(|d| d.platform = Platform::from_code(&event_target_value(&ev)))
                    }>
                        <option value="" selected=move || dto.get().platform.is_none()>
                            "未选择"
                        </option>
                        {Platform::all()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <option
                                        value=p.code()
                                        selected=move || dto.get().platform == Some(p)
                                    >
                                        {p.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"平台账号ID"</label>
                    <input
                        type="text"
                        prop:value=move || dto.get().platform_account_id
                        on:input=move |ev| {
                            dto.update(|d| d.platform_account_id = event_target_value(&ev))
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"粉丝数"</label>
                    <input
                        type="number"
                        prop:value=move || dto.get().follower_count.to_string()
                        on:input=move |ev| {
                            let parsed = event_target_value(&ev).parse().unwrap_or(0);
                            dto.update(|d| d.follower_count = parsed)
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"联系方式"</label>
                    <input
                        type="text"
                        prop:value=move || dto.get().contact.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            dto.update(|d| d.contact = if v.is_empty() { None } else { Some(v) })
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"地区"</label>
                    <input
                        type="text"
                        prop:value=move || dto.get().region.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            dto.update(|d| d.region = if v.is_empty() { None } else { Some(v) })
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"BD负责人"</label>
                    <input
                        type="text"
                        prop:value=move || dto.get().bd_owner.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            dto.update(|d| d.bd_owner = if v.is_empty() { None } else { Some(v) })
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"标签（逗号分隔）"</label>
                    <input
                        type="text"
                        prop:value=move || dto.get().tags.join(",")
                        on:input=move |ev| {
                            let tags: Vec<String> = event_target_value(&ev)
                                .split(',')
                                .map(|s| s.trim().to_string())
                                .filter(|s| !s.is_empty())
                                .collect();
                            dto.update(|d| d.tags = tags)
                        }
                    />
                </div>
                <div class="form-actions">
                    <button type="submit" class="button button--primary" disabled=move || is_saving.get()>
                        {move || if is_saving.get() { "保存中..." } else { "保存" }}
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
        </div>
    }
}
