use contracts::system::auth::SignupRequest;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::use_session;

#[component]
pub fn SignupPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let session = use_session();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        session.update(|s| s.signup(&request));
        navigate("/", Default::default());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__logo">"T"</div>
                <h1>"Create your account"</h1>
                <p class="login-box__subtitle">"Join us today and unlock amazing features"</p>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="username">"Username (Optional)"</label>
                        <input
                            type="text"
                            id="username"
                            class="form__input"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="email">"Email address"</label>
                        <input
                            type="email"
                            id="email"
                            class="form__input"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            class="form__input"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="button button--primary button--block">
                        "Sign up"
                    </button>
                </form>

                <div class="login-info">
                    <A href="/login">"Already have an account? Sign in"</A>
                </div>
            </div>
        </div>
    }
}
