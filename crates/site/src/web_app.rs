use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use sdg_badge::GoalBadge;
use sdg_goals::{goals, label_for, GoalSelector, ALL_SELECTOR, CIRCLE_SELECTOR, DEFAULT_GOAL};

/// Selectors shown in the gallery, composites first.
pub fn gallery_selectors() -> Vec<String> {
    let mut selectors = vec![ALL_SELECTOR.to_string(), CIRCLE_SELECTOR.to_string()];
    selectors.extend(goals().iter().map(|entry| entry.number.to_string()));
    selectors
}

fn selector_caption(selector: &str) -> String {
    GoalSelector::parse(selector)
        .map(label_for)
        .unwrap_or_else(|_| selector.to_string())
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sustainable Development Goals" />
        <Meta name="description" content="United Nations Sustainable Development Goal badges." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=GoalGallery />
                    <Route path="/goals/:goal" view=GoalRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn GoalGallery() -> impl IntoView {
    view! {
        <section class="sdg-gallery">
            <h1>"Sustainable Development Goals"</h1>
            <GoalBadge color_only=true />
            <ul class="sdg-gallery-list">
                {gallery_selectors()
                    .into_iter()
                    .map(|selector| {
                        let caption = selector_caption(&selector);
                        let href = format!("/goals/{selector}");
                        view! {
                            <li>
                                <A href=href>
                                    <GoalBadge goal=selector height="127px" width="122px" />
                                    <span class="sdg-caption">{caption}</span>
                                </A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
pub fn GoalRoute() -> impl IntoView {
    let params = use_params_map();
    let goal = Signal::derive(move || {
        params
            .with(|map| map.get("goal").cloned())
            .unwrap_or_else(|| DEFAULT_GOAL.to_string())
    });

    view! {
        <section class="sdg-goal-page">
            <GoalBadge goal=goal fetch_priority="high" loading="eager" />
            <A href="/">"All goals"</A>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn gallery_lists_composites_then_every_goal() {
        let selectors = gallery_selectors();
        assert_eq!(selectors.len(), 19);
        assert_eq!(&selectors[..3], ["all", "circle", "1"]);
        assert_eq!(selectors.last().map(String::as_str), Some("17"));
    }

    #[test]
    fn captions_use_resolved_labels() {
        assert_eq!(selector_caption("4"), "Goal 4: Quality Education");
        assert_eq!(selector_caption("circle"), "Sustainable Development Goals Circle");
        assert_eq!(selector_caption("99"), "99");
    }
}
