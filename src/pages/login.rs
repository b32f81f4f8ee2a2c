//! Login page: hero copy plus the email/password sign-in card.
//!
//! The page keeps a `LoginState` signal and feeds it through the state
//! transitions; the only async step is the `AuthClient` submission.

use leptos::prelude::*;

use crate::components::field::{TextField, TextInput};
use crate::net::auth::AuthClient;
use crate::state::login::{Field, LoginState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<AuthClient>();
    let state = RwSignal::new(LoginState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (next, request) = state.get_untracked().begin_submit();
        state.set(next);
        let Some(request) = request else {
            return;
        };

        let client = client.clone();
        leptos::task::spawn_local(async move {
            let result = client.submit(&request).await;
            state.update(|s| *s = s.settle(result));
        });
    };

    let email = Signal::derive(move || state.with(|s| s.form.email.clone()));
    let email_error = Signal::derive(move || state.with(|s| s.error(Field::Email)));
    let on_email = Callback::new(move |value: String| state.update(|s| *s = s.with_email(value)));

    let password = Signal::derive(move || state.with(|s| s.form.password.clone()));
    let password_error = Signal::derive(move || state.with(|s| s.error(Field::Password)));
    let on_password = Callback::new(move |value: String| state.update(|s| *s = s.with_password(value)));

    let busy = move || state.with(LoginState::submit_disabled);

    view! {
        <main class="hero" role="main">
            <div class="hero__bg hero__bg--top-left" aria-hidden="true"></div>
            <div class="hero__bg hero__bg--top-right" aria-hidden="true"></div>
            <div class="hero__overlay" aria-hidden="true"></div>

            <div class="hero__container">
                <div class="hero__copy">
                    <h1 class="hero__title">"Your New AI Assistant"</h1>
                    <p class="hero__subtitle">"Get AI-Generated Data Solutions in Seconds."</p>
                    <a class="cta" href="#login">"Get Started →"</a>
                </div>

                <section id="login" class="modal" role="region" aria-label="Login">
                    <header class="modal__header">
                        <h2 class="modal__title">"Welcome back"</h2>
                        <p class="modal__subtitle">"Sign in to continue to your courses"</p>
                    </header>

                    <form class="form" on:submit=on_submit novalidate>
                        <TextField
                            input=TextInput::Email
                            label="Email"
                            placeholder="you@example.com"
                            value=email
                            error=email_error
                            on_input=on_email
                        />
                        <TextField
                            input=TextInput::Password
                            label="Password"
                            placeholder="••••••••"
                            value=password
                            error=password_error
                            on_input=on_password
                        />

                        <div class="form__row">
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    name=Field::Remember.name()
                                    prop:checked=move || state.with(|s| s.form.remember)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        state.update(|s| *s = s.with_remember(checked));
                                    }
                                />
                                <span>"Remember me"</span>
                            </label>
                            <a class="ec-link" href="#forgot">"Forgot password?"</a>
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=busy
                            aria-busy=move || busy().to_string()
                        >
                            {move || state.with(LoginState::submit_label)}
                        </button>

                        <Show when=move || state.with(|s| !s.status.message.is_empty())>
                            <div class="form__status" role="status">
                                {move || state.with(|s| s.status.message.clone())}
                            </div>
                        </Show>

                        <div class="form__divider" role="separator" aria-label="Or continue with"></div>
                        <div class="social">
                            <button type="button" class="social__btn" aria-label="Sign in with Google">
                                "Google"
                            </button>
                            <button type="button" class="social__btn" aria-label="Sign in with GitHub">
                                "GitHub"
                            </button>
                        </div>

                        <p class="form__alt">
                            "Don't have an account? "
                            <a class="ec-link" href="#create">"Create account"</a>
                        </p>
                    </form>
                </section>
            </div>
        </main>
    }
}
