use std::cell::RefCell;

use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::api;

/// Токены живут только в памяти вкладки: перезагрузка страницы означает
/// новый вход. Ячейка нужна, чтобы HTTP-хелперы могли подставить
/// Bearer-токен, не таская сигнал через все слои.
#[derive(Default)]
struct SessionTokens {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

thread_local! {
    static SESSION: RefCell<SessionTokens> = RefCell::new(SessionTokens::default());
}

pub fn set_session_tokens(access_token: &str, refresh_token: &str) {
    SESSION.with(|s| {
        let mut s = s.borrow_mut();
        s.access_token = Some(access_token.to_string());
        s.refresh_token = Some(refresh_token.to_string());
    });
}

pub fn access_token() -> Option<String> {
    SESSION.with(|s| s.borrow().access_token.clone())
}

fn clear_session_tokens() -> Option<String> {
    SESSION.with(|s| {
        let mut s = s.borrow_mut();
        s.access_token = None;
        s.refresh_token.take()
    })
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub async fn do_logout() {
    if let Some(refresh_token) = clear_session_tokens() {
        let _ = api::logout(refresh_token).await;
    }
}
