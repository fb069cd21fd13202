use contracts::domain::a003_cooperation_plan::aggregate::CooperationPlanDto;
use contracts::enums::cooperation_type::CooperationType;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_cooperation_plan::api;

#[component]
pub fn CooperationPlanDetails(
    id: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let dto = RwSignal::new(CooperationPlanDto::default());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    Effect::new(move |_| {
        if let Some(record_id) = id.get() {
            spawn_local(async move {
                match api::get_by_id(&record_id).await {
                    Ok(rec) => {
                        dto.set(CooperationPlanDto {
                            id: Some(record_id),
                            code: Some(rec.base.code),
                            name: rec.base.description,
                            product_id: rec.product_id.map(|u| u.to_string()),
                            cooperation_type: rec.cooperation_type,
                            fee_amount: rec.fee_amount,
                            deliverable: rec.deliverable,
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
            <h3>{move || if id.get().is_some() { "编辑合作方案" } else { "新建合作方案" }}</h3>

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
                    <label>"名称"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || dto.get().name
                        on:input=move |ev| dto.update(|d| d.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"合作类型"</label>
                    <select on:change=move |ev| {
                        dto.update(|d| {
                            d.cooperation_type = CooperationType::from_code(&event_target_value(&ev))
                        })
                    }>
                        <option value="" selected=move || dto.get().cooperation_type.is_none()>
                            "未选择"
                        </option>
                        {CooperationType::all()
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <option
                                        value=t.code()
                                        selected=move || dto.get().cooperation_type == Some(t)
                                    >
                                        {t.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"合作费用"</label>
                    <input
                        type="number"
                        step="0.01"
                        prop:value=move || dto.get().fee_amount.to_string()
                        on:input=move |ev| {
                            let parsed = event_target_value(&ev).parse().unwrap_or(0.0);
                            dto.update(|d| d.fee_amount = parsed)
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"交付物"</label>
                    <input
                        type="text"
                        prop:value=move || dto.get().deliverable.unwrap_or_default()
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            dto.update(|d| d.deliverable = if v.is_empty() { None } else { Some(v) })
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
