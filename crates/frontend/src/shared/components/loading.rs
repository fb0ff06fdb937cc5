use leptos::prelude::*;

/// Busy indicator labeled with the section being loaded.
///
/// Stateless: the output is purely a function of the label.
#[component]
pub fn LoadingIndicator(
    /// Name of the section being loaded, defaults to "content"
    #[prop(optional, into)]
    section: MaybeProp<String>,
) -> impl IntoView {
    let label = move || {
        format!(
            "Loading {}...",
            section.get().unwrap_or_else(|| "content".to_string())
        )
    };

    view! {
        <div class="loading" role="status">
            <div class="loading__spinner" aria-hidden="true"></div>
            <span class="loading__label">{label}</span>
        </div>
    }
}
