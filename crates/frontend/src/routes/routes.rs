use crate::layout::SiteShell;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::services::ServicesPage;
use crate::pages::work::WorkPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <SiteShell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/services") view=ServicesPage />
                    <Route path=path!("/work") view=WorkPage />
                </Routes>
            </SiteShell>
        </Router>
    }
}
