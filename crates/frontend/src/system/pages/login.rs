use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::use_session;

/// Имитация входа: любые данные принимаются, токен пишется в localStorage
#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let session = use_session();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        session.update(|s| s.login(&request));
        navigate("/", Default::default());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__logo">"T"</div>
                <h1>"Sign in to your account"</h1>
                <p class="login-box__subtitle">"Welcome back! Please sign in to continue"</p>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="email">"Email address"</label>
                        <input
                            type="email"
                            id="email"
                            class="form__input"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
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
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="login-box__options">
                        <label class="form__checkbox-wrapper">
                            <input type="checkbox" class="form__checkbox" id="remember-me"/>
                            "Remember me"
                        </label>
                        <a href="#" class="link">"Forgot password?"</a>
                    </div>

                    <button type="submit" class="button button--primary button--block">
                        "Sign in"
                    </button>
                </form>

                <div class="login-info">
                    <A href="/signup">"Don't have an account? Sign up"</A>
                </div>
            </div>
        </div>
    }
}
