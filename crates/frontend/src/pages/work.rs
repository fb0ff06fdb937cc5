use crate::shared::categories::{category_labels, filter_projects, is_known_category, ALL_CATEGORY};
use crate::shared::components::category_filter::CategoryFilter;
use crate::shared::components::loading::LoadingIndicator;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::project_card::ProjectCard;
use crate::shared::meta::use_page_meta;
use crate::shared::url_state;
use content::ProjectRecord;
use leptos::prelude::*;

/// Work gallery: category filter row plus the project grid.
///
/// This page owns the selected-category state. The filter gets the writable
/// signal; the grid gets a read-only view of it.
#[component]
pub fn WorkPage() -> impl IntoView {
    use_page_meta(
        "Work — Northlight Studio",
        "Selected projects across web, branding, and mobile.",
    );

    let initial = url_state::category_from_url()
        .filter(|c| is_known_category(content::projects::all(), c))
        .unwrap_or_else(|| ALL_CATEGORY.to_string());
    let selected = RwSignal::new(initial);

    // Keep ?category= in sync so a filtered view can be shared as a link.
    Effect::new(move |_| {
        url_state::sync_category_to_url(&selected.get());
    });

    let projects = Resource::new(|| (), |_| async { content::projects::all().to_vec() });

    view! {
        <div class="page page--work">
            <PageHeader
                title="Our Work"
                subtitle="Selected projects from the past few years.".to_string()
            />
            <Suspense fallback=|| view! { <LoadingIndicator section="projects".to_string() /> }>
                {move || {
                    projects.get().map(|records| view! {
                        <section class="work">
                            <CategoryFilter
                                categories=category_labels(&records)
                                selected=selected
                            />
                            <ProjectGrid records=records selected=selected.read_only() />
                        </section>
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Read-only consumer of the selected category: re-filters whenever the
/// selection changes, never writes it.
#[component]
fn ProjectGrid(
    records: Vec<ProjectRecord>,
    #[prop(into)] selected: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="project-grid">
            {move || {
                filter_projects(&records, &selected.get())
                    .into_iter()
                    .cloned()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect_view()
            }}
        </div>
    }
}
