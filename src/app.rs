//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::header::Header;
use crate::net::auth::AuthClient;
use crate::pages::login::LoginPage;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Where `/` and unknown paths end up.
pub const LOGIN_ROUTE: &str = "/login";

/// Redirects replace the current history entry so Back skips them.
fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Replacing redirect to the login route.
#[component]
fn ToLogin() -> impl IntoView {
    view! { <Redirect path=LOGIN_ROUTE options=redirect_options()/> }
}

/// Root application component.
///
/// Provides the auth client to every page and sets up client-side routing.
/// `/` and unknown paths land on `/login`.
#[component]
pub fn App(client: AuthClient) -> impl IntoView {
    provide_meta_context();

    if client.config().is_stub() {
        log::info!("no API base configured, login runs in stub mode");
    }
    provide_context(client);

    view! {
        <Title text="EduConnect"/>

        <Router>
            <Header/>
            <Routes fallback=ToLogin>
                <Route path=StaticSegment("") view=ToLogin/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
