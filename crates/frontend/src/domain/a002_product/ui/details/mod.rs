use contracts::domain::a002_product::aggregate::ProductDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_product::api;

#[component]
pub fn ProductDetails(
    id: Signal<Option<String>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let dto = RwSignal::new(ProductDto::default());
    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    Effect::new(move |_| {
        if let Some(record_id) = id.get() {
            spawn_local(async move {
                match api::get_by_id(&record_id).await {
                    Ok(rec) => {
                        dto.set(ProductDto {
                            id: Some(record_id),
                            code: Some(rec.base.code),
                            name: rec.base.description,
                            sku: rec.sku,
                            unit_price: rec.unit_price,
                            commission_rate: rec.commission_rate,
                            sample_available: rec.sample_available,
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
            <h3>{move || if id.get().is_some() { "编辑商品" } else { "新建商品" }}</h3>

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
                    <label>"SKU"</label>
                    <input
                        type="text"
                        prop:value=move || dto.get().sku
                        on:input=move |ev| dto.update(|d| d.sku = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"单价"</label>
                    <input
                        type="number"
                        step="0.01"
                        prop:value=move || dto.get().unit_price.to_string()
                        on:input=move |ev| {
                            let parsed = event_target_value(&ev).parse().unwrap_or(0.0);
                            dto.update(|d| d.unit_price = parsed)
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"佣金率 %"</label>
                    <input
                        type="number"
                        step="0.1"
                        prop:value=move || dto.get().commission_rate.to_string()
                        on:input=move |ev| {
                            let parsed = event_target_value(&ev).parse().unwrap_or(0.0);
                            dto.update(|d| d.commission_rate = parsed)
                        }
                    />
                </div>
                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || dto.get().sample_available
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                dto.update(|d| d.sample_available = checked)
                            }
                        />
                        "可寄样"
                    </label>
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
