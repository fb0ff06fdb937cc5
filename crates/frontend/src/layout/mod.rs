pub mod footer;
pub mod header;

use footer::SiteFooter;
use header::SiteHeader;
use leptos::prelude::*;

/// Site shell: header with navigation, main content region, footer.
///
/// ```text
/// +------------------------------------------+
/// |              SiteHeader                   |
/// +------------------------------------------+
/// |              routed page                  |
/// +------------------------------------------+
/// |              SiteFooter                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn SiteShell(children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <SiteHeader />
            <main class="site-main">
                {children()}
            </main>
            <SiteFooter />
        </div>
    }
}
