use yew::prelude::*;
use yew_router::components::Link;

use crate::components::icons::{Icon, SvgIcon};
use crate::data::features::FEATURE_CARDS;
use crate::utils::reveal::{use_staggered_reveal, FEATURES_STAGGER, FEATURES_THRESHOLD};
use crate::Route;

#[function_component(FeaturesGrid)]
pub fn features_grid() -> Html {
    let section_ref = use_node_ref();
    let visible = use_staggered_reveal(
        section_ref.clone(),
        FEATURE_CARDS.len(),
        FEATURES_THRESHOLD,
        FEATURES_STAGGER,
    );

    let grid_css = r#"
        .features-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 2rem;
        }
        .feature-card {
            display: block;
            text-decoration: none;
            background: #fff;
            border-radius: 1.5rem;
            padding: 2rem;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.05);
            transition: all 0.5s ease;
        }
        .feature-card:hover {
            box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
            transform: translateY(-4px);
        }
        .feature-card-icon {
            width: 3.5rem;
            height: 3.5rem;
            border-radius: 1rem;
            background: rgba(34, 164, 93, 0.1);
            color: #22a45d;
            display: flex;
            align-items: center;
            justify-content: center;
            margin-bottom: 1.25rem;
            transition: all 0.3s ease;
        }
        .feature-card-icon svg { width: 2rem; height: 2rem; }
        .feature-card:hover .feature-card-icon {
            background: #22a45d;
            color: #fff;
        }
        .feature-card h3 {
            font-size: 1.25rem;
            color: #121212;
            margin-bottom: 0.75rem;
            transition: color 0.3s ease;
        }
        .feature-card:hover h3 { color: #22a45d; }
        .feature-card p {
            color: #6b7280;
            line-height: 1.6;
            margin-bottom: 1rem;
        }
        .feature-card-more {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            color: #22a45d;
            font-size: 0.875rem;
            font-weight: 500;
            opacity: 0;
            transition: opacity 0.3s ease;
        }
        .feature-card-more svg { width: 1rem; height: 1rem; }
        .feature-card:hover .feature-card-more { opacity: 1; }
        @media (max-width: 1024px) {
            .features-grid { grid-template-columns: repeat(2, 1fr); }
        }
        @media (max-width: 768px) {
            .features-grid { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <section id="features" ref={section_ref} class="section section-muted">
            <style>{grid_css}</style>
            <div class="container">
                <div class="section-header">
                    <span class="section-badge">{"Features"}</span>
                    <h2 class="section-title">{"Everything you need to make an impact"}</h2>
                    <p class="section-subtitle">
                        {"Powerful tools to discover opportunities, verify contributions, and build your volunteer resume."}
                    </p>
                </div>

                <div class="features-grid">
                    { for FEATURE_CARDS.iter().enumerate().map(|(index, card)| {
                        let shown = visible.get(index).copied().unwrap_or(true);
                        html! {
                            <div
                                key={card.slug}
                                class={classes!("reveal", "reveal-up", shown.then_some("revealed"))}
                                style={format!("transition-delay: {}ms;", index * 50)}
                            >
                                <Link<Route>
                                    to={Route::FeatureDetail { slug: card.slug.to_string() }}
                                    classes="feature-card"
                                >
                                    <div class="feature-card-icon">
                                        <SvgIcon icon={card.icon} />
                                    </div>
                                    <h3>{card.title}</h3>
                                    <p>{card.description}</p>
                                    <div class="feature-card-more">
                                        {"Learn more"}
                                        <SvgIcon icon={Icon::ArrowRight} />
                                    </div>
                                </Link<Route>>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
