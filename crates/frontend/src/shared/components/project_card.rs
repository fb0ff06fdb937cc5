use crate::shared::assets::asset_url;
use crate::shared::components::ui::Badge;
use content::ProjectRecord;
use leptos::prelude::*;

/// Card for one portfolio project.
#[component]
pub fn ProjectCard(project: ProjectRecord) -> impl IntoView {
    let category = project.category.to_lowercase();

    view! {
        <article class="project-card">
            <div class="project-card__media">
                <img
                    src=asset_url(&project.image)
                    alt=project.title.clone()
                    loading="lazy"
                />
            </div>
            <div class="project-card__body">
                <div class="project-card__meta">
                    <Badge variant="primary">{category}</Badge>
                    <span class="project-card__year">{project.year.to_string()}</span>
                </div>
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
            </div>
        </article>
    }
}
