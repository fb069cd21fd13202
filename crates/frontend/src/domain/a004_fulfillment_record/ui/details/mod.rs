use contracts::domain::a004_fulfillment_record::aggregate::FulfillmentRecordDto;
use contracts::domain::common::AggregateId;
use contracts::enums::priority_level::PriorityLevel;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_influencer;
use crate::domain::a002_product;
use crate::domain::a003_cooperation_plan;
use crate::domain::a004_fulfillment_record::api;

#[derive(Clone, Debug)]
struct PickerOption {
    id: String,
    label: String,
}

/// Форма «шапки»履约单. Этап здесь не редактируется — только через
/// диалог состояния.
#[component]
pub fn FulfillmentRecordDetails(
    id: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let dto = RwSignal::new(FulfillmentRecordDto::default());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let (influencers, set_influencers) = signal::<Vec<PickerOption>>(Vec::new());
    let (products, set_products) = signal::<Vec<PickerOption>>(Vec::new());
    let (plans, set_plans) = signal::<Vec<PickerOption>>(Vec::new());

    // Справочники для выпадающих списков
    spawn_local(async move {
        if let Ok(list) = a001_influencer::api::list_all().await {
            set_influencers.set(
                list.into_iter()
                    .map(|m| PickerOption {
                        id: m.base.id.as_string(),
                        label: m.base.description,
                    })
                    .collect(),
            );
        }
        if let Ok(list) = a002_product::api::list_all().await {
            set_products.set(
                list.into_iter()
                    .map(|m| PickerOption {
                        id: m.base.id.as_string(),
                        label: m.base.description,
                    })
                    .collect(),
            );
        }
        if let Ok(list) = a003_cooperation_plan::api::list_all().await {
            set_plans.set(
                list.into_iter()
                    .map(|m| PickerOption {
                        id: m.base.id.as_string(),
                        label: m.base.description,
                    })
                    .collect(),
            );
        }
    });

    Effect::new(move |_| {
        if let Some(record_id) = id.get() {
            spawn_local(async move {
                match api::get_by_id(&record_id).await {
                    Ok(rec) => {
                        dto.set(FulfillmentRecordDto {
                            id: Some(record_id),
                            code: Some(rec.base.code),
                            description: rec.base.description,
                            influencer_id: rec.influencer_id.map(|u| u.to_string()),
                            product_id: rec.product_id.map(|u| u.to_string()),
                            plan_id: rec.plan_id.map(|u| u.to_string()),
                            priority: Some(rec.priority),
                            remark: rec.remark,
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

    let opt = |v: String| if v.is_empty() { None } else { Some(v) };

    view! {
        <div class="details-panel">
            <h3>{move || if id.get().is_some() { "编辑履约记录" } else { "新建履约记录" }}</h3>

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
                    <label>"标题"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || dto.get().description
                        on:input=move |ev| dto.update(|d| d.description = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"达人"</label>
                    <select on:change=move |ev| {
                        let v = opt(event_target_value(&ev));
                        dto.update(|d| d.influencer_id = v)
                    }>
                        <option value="" selected=move || dto.get().influencer_id.is_none()>
                            "未选择"
                        </option>
                        {move || influencers.get().into_iter().map(|o| {
                            let oid = o.id.clone();
                            view! {
                                <option
                                    value=o.id.clone()
                                    selected=move || dto.get().influencer_id.as_deref() == Some(oid.as_str())
                                >
                                    {o.label.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"商品"</label>
                    <select on:change=move |ev| {
                        let v = opt(event_target_value(&ev));
                        dto.update(|d| d.product_id = v)
                    }>
                        <option value="" selected=move || dto.get().product_id.is_none()>
                            "未选择"
                        </option>
                        {move || products.get().into_iter().map(|o| {
                            let oid = o.id.clone();
                            view! {
                                <option
                                    value=o.id.clone()
                                    selected=move || dto.get().product_id.as_deref() == Some(oid.as_str())
                                >
                                    {o.label.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"合作方案"</label>
                    <select on:change=move |ev| {
                        let v = opt(event_target_value(&ev));
                        dto.update(|d| d.plan_id = v)
                    }>
                        <option value="" selected=move || dto.get().plan_id.is_none()>
                            "未选择"
                        </option>
                        {move || plans.get().into_iter().map(|o| {
                            let oid = o.id.clone();
                            view! {
                                <option
                                    value=o.id.clone()
                                    selected=move || dto.get().plan_id.as_deref() == Some(oid.as_str())
                                >
                                    {o.label.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"优先级"</label>
                    <select on:change=move |ev| {
                        dto.update(|d| d.priority = PriorityLevel::from_code(&event_target_value(&ev)))
                    }>
                        {PriorityLevel::all()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <option
                                        value=p.code()
                                        selected=move || {
                                            dto.get().priority.unwrap_or(PriorityLevel::Medium) == p
                                        }
                                    >
                                        {p.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"备注"</label>
                    <input
                        type="text"
                        prop:value=move || dto.get().remark.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            dto.update(|d| d.remark = if v.is_empty() { None } else { Some(v) })
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
