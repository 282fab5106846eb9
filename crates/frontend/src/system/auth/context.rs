use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage::BrowserStorage;

pub type AppSession = Session<BrowserStorage>;

/// Session context provider component
///
/// Токен читается из localStorage один раз при монтировании.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(Session::init(BrowserStorage));
    provide_context(session);

    children()
}

/// Hook to access the session
pub fn use_session() -> RwSignal<AppSession> {
    use_context::<RwSignal<AppSession>>().expect("SessionProvider not found in component tree")
}
