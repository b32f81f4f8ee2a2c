//! Site header rendered above every route.

use leptos::prelude::*;
use leptos_router::components::A;

const NAV_ITEMS: [&str; 4] = ["Features", "Pricing", "Docs", "Blog"];

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="ec-header" role="banner">
            <div class="ec-header__inner">
                <div class="ec-brand">
                    <div class="ec-logo" aria-hidden="true"></div>
                    <span class="ec-brand__name" aria-label="EduConnect">"EduConnect"</span>
                </div>
                <nav class="ec-nav" aria-label="Primary">
                    <ul class="ec-nav__list">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|label| {
                                view! {
                                    <li>
                                        <button class="pill" type="button">{label}</button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </nav>
                <div class="ec-actions">
                    <A href="/login" attr:class="ec-link">"Log in"</A>
                    <a class="cta cta--nav" href="#get-started">"Get Started"</a>
                </div>
            </div>
        </header>
    }
}
