use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_bd_ranking::ui::BdRankingDashboard;
use crate::domain::a001_influencer::ui::list::InfluencerList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_cooperation_plan::ui::list::CooperationPlanList;
use crate::domain::a004_fulfillment_record::ui::list::FulfillmentRecordList;
use crate::domain::a005_tag::ui::list::TagList;
use crate::system::auth::context::{do_logout, use_auth, AuthState};

/// Страницы приложения, переключаются сигналом без роутера
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Influencers,
    Products,
    CooperationPlans,
    FulfillmentRecords,
    Tags,
    BdRanking,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Influencers => "达人管理",
            Page::Products => "商品管理",
            Page::CooperationPlans => "合作方案",
            Page::FulfillmentRecords => "履约记录",
            Page::Tags => "标签管理",
            Page::BdRanking => "BD业绩排行",
        }
    }
}

const NAV_ITEMS: [Page; 6] = [
    Page::Influencers,
    Page::Products,
    Page::CooperationPlans,
    Page::FulfillmentRecords,
    Page::Tags,
    Page::BdRanking,
];

#[component]
pub fn AppShell() -> impl IntoView {
    let current_page = RwSignal::new(Page::default());
    let (auth_state, set_auth_state) = use_auth();

    let username = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        spawn_local(async move {
            do_logout().await;
            set_auth_state.set(AuthState::default());
        });
    };

    view! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="sidebar__brand">"达人合作管理"</div>
                <nav class="sidebar__nav">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|page| {
                            view! {
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || current_page.get() == page
                                    on:click=move |_| current_page.set(page)
                                >
                                    {page.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="sidebar__footer">
                    <span class="sidebar__user">{username}</span>
                    <button class="sidebar__logout" on:click=on_logout>
                        "退出登录"
                    </button>
                </div>
            </aside>
            <main class="main-content">
                {move || match current_page.get() {
                    Page::Influencers => view! { <InfluencerList /> }.into_any(),
                    Page::Products => view! { <ProductList /> }.into_any(),
                    Page::CooperationPlans => view! { <CooperationPlanList /> }.into_any(),
                    Page::FulfillmentRecords => view! { <FulfillmentRecordList /> }.into_any(),
                    Page::Tags => view! { <TagList /> }.into_any(),
                    Page::BdRanking => view! { <BdRankingDashboard /> }.into_any(),
                }}
            </main>
        </div>
    }
}
