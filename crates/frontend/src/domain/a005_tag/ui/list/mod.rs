use contracts::domain::a005_tag::aggregate::{Tag, TagDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_tag::api;
use crate::shared::date_utils::format_timestamp;

#[derive(Clone, Debug)]
pub struct TagRow {
    pub id: String,
    pub code: String,
    pub name: String,
    pub created_at: String,
}

impl From<Tag> for TagRow {
    fn from(m: Tag) -> Self {
        Self {
            id: m.base.id.as_string(),
            code: m.base.code,
            name: m.base.description,
            created_at: format_timestamp(m.base.metadata.created_at),
        }
    }
}

/// Справочник настолько плоский, что форма создания встроена в список
#[component]
pub fn TagList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<TagRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (new_name, set_new_name) = signal(String::new());

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

    let handle_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        spawn_local(async move {
            let dto = TagDto {
                id: None,
                code: None,
                name,
                comment: None,
            };
            match api::save(&dto).await {
                Ok(()) => {
                    set_new_name.set(String::new());
                    fetch();
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("确认删除该标签？").unwrap_or(false))
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
                <h2>"标签管理"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "刷新"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form class="inline-form" on:submit=handle_create>
                <input
                    type="text"
                    placeholder="新标签名称"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit" class="button button--primary">"添加"</button>
            </form>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"编号"</th>
                            <th class="table__header-cell">"名称"</th>
                            <th class="table__header-cell">"创建时间"</th>
                            <th class="table__header-cell">"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let id_for_delete = row.id.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.code}</td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell">{row.created_at}</td>
                                    <td class="table__cell">
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
