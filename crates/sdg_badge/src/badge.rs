//! The goal badge component.

use leptos::*;
use sdg_goals::{
    AssetBase, BadgeState, BadgeView, DisplayRequest, GoalUpdate, Resolver,
    DEFAULT_FETCH_PRIORITY, DEFAULT_GOAL, DEFAULT_HEIGHT, DEFAULT_LOADING, DEFAULT_WIDTH,
};

use crate::attributes::{BadgeAttributes, HostAttributes};

/// Reactive badge state shared by [`GoalBadge`] and its host adapter.
#[derive(Debug, Clone, Copy)]
pub struct GoalBadgeModel {
    state: RwSignal<BadgeState>,
    request: Memo<DisplayRequest>,
}

impl GoalBadgeModel {
    /// Wires selector, label, and display inputs into a badge state.
    ///
    /// The label is applied before the selector so that the first resolution
    /// replaces any initial label, and later label writes override it.
    pub fn new(
        goal: MaybeSignal<String>,
        label: MaybeSignal<String>,
        request: Signal<DisplayRequest>,
        assets: AssetBase,
        on_update: Option<Callback<GoalUpdate>>,
    ) -> Self {
        let state = create_rw_signal(BadgeState::new(Resolver::new(assets)));

        create_render_effect(move |_| {
            let label = label.get();
            state.update(|state| state.set_label(label));
        });

        create_render_effect(move |_| {
            let goal = goal.get();
            let Some(update) = state.try_update(|state| state.set_goal(&goal)) else {
                return;
            };
            if let GoalUpdate::Ignored(err) = &update {
                logging::debug_warn!("un-sdg kept its previous goal: {err}");
            }
            if let Some(on_update) = on_update.as_ref() {
                on_update.call(update);
            }
        });

        Self {
            state,
            request: create_memo(move |_| request.get()),
        }
    }

    /// Wires a host element's live attributes into a badge state.
    ///
    /// The selector and label each get their own memo so that a write to an
    /// unrelated attribute neither re-resolves nor resets the label.
    pub fn from_host(host: ReadSignal<HostAttributes>) -> Self {
        let attrs = create_memo(move |_| host.with(BadgeAttributes::from_host));
        let goal = create_memo(move |_| attrs.with(|attrs| attrs.goal.clone()));
        let label = create_memo(move |_| attrs.with(|attrs| attrs.label.clone()));
        let request = Signal::derive(move || attrs.with(BadgeAttributes::display_request));
        let assets = host
            .with_untracked(|host| host.get("asset-base").cloned())
            .map(AssetBase::new)
            .unwrap_or_default();
        Self::new(goal.into(), label.into(), request, assets, None)
    }

    /// Render plan for the current state and display request.
    pub fn view(&self) -> BadgeView {
        let request = self.request.get();
        self.state.with(|state| state.view(&request))
    }

    /// Whether the badge is in color-only mode.
    pub fn color_only(&self) -> bool {
        self.request.with(|request| request.color_only)
    }

    /// Current accessible label.
    pub fn label(&self) -> String {
        self.state.with(|state| state.label().to_string())
    }

    /// Current image source.
    pub fn asset_ref(&self) -> String {
        self.state.with(|state| state.asset_ref().to_string())
    }

    /// Number of selector changes that triggered resolution.
    pub fn recomputations(&self) -> u64 {
        self.state.with(BadgeState::recomputations)
    }
}

fn badge_view(plan: BadgeView) -> View {
    match plan {
        BadgeView::ColorGrid(grid) => view! {
            <div class="sdg-colors" data-sdg-slot="colors" style=grid.style()>
                {grid
                    .swatches
                    .into_iter()
                    .map(|swatch| {
                        let style = swatch.style();
                        view! {
                            <div
                                class="sdg-color"
                                data-sdg-slot="color"
                                role="img"
                                aria-label=swatch.aria_label
                                style=style
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
        BadgeView::Image(image) => {
            let style = image.style();
            view! {
                <img
                    class="sdg-image"
                    data-sdg-slot="image"
                    src=image.src
                    alt=image.alt
                    loading=image.loading
                    fetchpriority=image.fetch_priority
                    style=style
                />
            }
            .into_view()
        }
    }
}

#[component]
/// Sustainable Development Goal badge.
///
/// Shows the artwork for `goal` (`"all"`, `"circle"`, or `"1"`..`"17"`), or
/// the 17 goal colors when `color_only` is set. Selectors that name nothing
/// leave the previous artwork on screen.
pub fn GoalBadge(
    /// Goal selector.
    #[prop(into, default = MaybeSignal::Static(DEFAULT_GOAL.to_string()))]
    goal: MaybeSignal<String>,
    /// Accessible label override; replaced whenever the goal resolves.
    #[prop(into, default = MaybeSignal::Static(String::new()))]
    label: MaybeSignal<String>,
    /// Show every goal color instead of an image.
    #[prop(into, default = MaybeSignal::Static(false))]
    color_only: MaybeSignal<bool>,
    /// Image `fetchpriority` hint.
    #[prop(into, default = MaybeSignal::Static(DEFAULT_FETCH_PRIORITY.to_string()))]
    fetch_priority: MaybeSignal<String>,
    /// Image `loading` hint.
    #[prop(into, default = MaybeSignal::Static(DEFAULT_LOADING.to_string()))]
    loading: MaybeSignal<String>,
    /// CSS image height.
    #[prop(into, default = MaybeSignal::Static(DEFAULT_HEIGHT.to_string()))]
    height: MaybeSignal<String>,
    /// CSS image width.
    #[prop(into, default = MaybeSignal::Static(DEFAULT_WIDTH.to_string()))]
    width: MaybeSignal<String>,
    /// Base path for goal artwork.
    #[prop(optional, into)]
    asset_base: Option<String>,
    /// Observer for every selector change.
    #[prop(optional)]
    on_update: Option<Callback<GoalUpdate>>,
) -> impl IntoView {
    let request = Signal::derive(move || DisplayRequest {
        color_only: color_only.get(),
        height: height.get(),
        width: width.get(),
        loading: loading.get(),
        fetch_priority: fetch_priority.get(),
    });
    let assets = asset_base.map(AssetBase::new).unwrap_or_default();
    badge_markup(GoalBadgeModel::new(goal, label, request, assets, on_update))
}

fn badge_markup(model: GoalBadgeModel) -> impl IntoView {
    view! {
        <span
            class="sdg-badge"
            data-sdg-kind="badge"
            data-sdg-mode=move || if model.color_only() { "color-only" } else { "image" }
        >
            {move || badge_view(model.view())}
        </span>
    }
}

/// Element factory used for `<un-sdg>` host elements.
pub fn goal_badge_element(host: ReadSignal<HostAttributes>) -> View {
    badge_markup(GoalBadgeModel::from_host(host)).into_view()
}
