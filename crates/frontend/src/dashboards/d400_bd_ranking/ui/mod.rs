use contracts::dashboards::d400_bd_ranking::dto::BdRankingRow;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Рейтинг BD-менеджеров: строки приходят уже отсортированными,
/// место присвоено бэкендом
#[component]
pub fn BdRankingDashboard() -> impl IntoView {
    let (rows, set_rows) = signal::<Vec<BdRankingRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        spawn_local(async move {
            match api::get_ranking().await {
                Ok(response) => {
                    set_rows.set(response.rows);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"BD业绩排行"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        "刷新"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"排名"</th>
                            <th class="table__header-cell">"BD负责人"</th>
                            <th class="table__header-cell">"记录总数"</th>
                            <th class="table__header-cell">"已完成"</th>
                            <th class="table__header-cell">"已发布"</th>
                            <th class="table__header-cell">"已取消"</th>
                            <th class="table__header-cell">"ROI合计"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.rank}</td>
                                    <td class="table__cell">{row.bd_name}</td>
                                    <td class="table__cell">{row.total_records}</td>
                                    <td class="table__cell">{row.completed_count}</td>
                                    <td class="table__cell">{row.published_count}</td>
                                    <td class="table__cell">{row.canceled_count}</td>
                                    <td class="table__cell">{format!("{:.2}", row.total_roi)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
