use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <PageHeader
                title="Page not found"
                subtitle="The page you were looking for does not exist.".to_string()
            />
            <p class="not-found__hint">
                <A href="/">"Back to the start"</A>
            </p>
        </div>
    }
}
