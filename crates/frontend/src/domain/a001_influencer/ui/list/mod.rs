use contracts::domain::a001_influencer::aggregate::Influencer;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::details::InfluencerDetails;
use crate::domain::a001_influencer::api;
use crate::shared::date_utils::format_timestamp;

#[derive(Clone, Debug)]
pub struct InfluencerRow {
    pub id: String,
    pub code: String,
    pub nickname: String,
    pub platform: String,
    pub follower_count: i64,
    pub region: String,
    pub bd_owner: String,
    pub tags: String,
    pub created_at: String,
}

impl From<Influencer> for InfluencerRow {
    fn from(m: Influencer) -> Self {
        Self {
            id: m.base.id.as_string(),
            code: m.base.code,
            nickname: m.base.description,
            platform: m
                .platform
                .map(|p| p.display_name().to_string())
                .unwrap_or_else(|| "-".to_string()),
            follower_count: m.follower_count,
            region: m.region.unwrap_or_else(|| "-".to_string()),
            bd_owner: m.bd_owner.unwrap_or_else(|| "-".to_string()),
            tags: if m.tags.is_empty() {
                "-".to_string()
            } else {
                m.tags.join(", ")
            },
            created_at: format_timestamp(m.base.metadata.created_at),
        }
    }
}

#[component]
pub fn InfluencerList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<InfluencerRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    // None — панель закрыта, Some(None) — новая запись, Some(Some(id)) — правка
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
            .map(|w| w.confirm_with_message("确认删除该达人？").unwrap_or(false))
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
                <h2>"达人列表"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                        "新建达人"
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
                <InfluencerDetails
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
                            <th class="table__header-cell">"昵称"</th>
                            <th class="table__header-cell">"平台"</th>
                            <th class="table__header-cell">"粉丝数"</th>
                            <th class="table__header-cell">"地区"</th>
                            <th class="table__header-cell">"BD负责人"</th>
                            <th class="table__header-cell">"标签"</th>
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
                                    <td class="table__cell">{row.nickname}</td>
                                    <td class="table__cell">{row.platform}</td>
                                    <td class="table__cell">{row.follower_count}</td>
                                    <td class="table__cell">{row.region}</td>
                                    <td class="table__cell">{row.bd_owner}</td>
                                    <td class="table__cell">{row.tags}</td>
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
