use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation bar. Active link styling comes from the router's
/// `aria-current` attribute, see styles.css.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__brand">
                    <A href="/">"Northlight Studio"</A>
                </div>
                <nav class="site-nav">
                    <A href="/services">"Services"</A>
                    <A href="/work">"Work"</A>
                </nav>
            </div>
        </header>
    }
}
