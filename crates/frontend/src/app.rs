use leptos::prelude::*;

use crate::layout::AppShell;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AuthGate />
        </AuthProvider>
    }
}

/// Показывает либо форму входа, либо приложение
#[component]
fn AuthGate() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <AppShell />
        </Show>
    }
}
