use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::{copyright_line, current_year};
use crate::components::icons::{Icon, SvgIcon};
use crate::config;
use crate::data::features::{feature_by_slug, Feature};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FeatureDetailProps {
    pub slug: String,
}

fn steps_intro(feature: &Feature) -> String {
    format!("Simple steps to get started with {}.", feature.title.to_lowercase())
}

fn cta_copy(feature: &Feature) -> String {
    format!(
        "Download {} now and experience {} firsthand.",
        config::SITE_NAME,
        feature.title.to_lowercase()
    )
}

/// The last step has nothing to connect to.
fn has_connector(index: usize, total: usize) -> bool {
    index + 1 < total
}

#[function_component(FeatureDetail)]
pub fn feature_detail(props: &FeatureDetailProps) -> Html {
    // Route changes between features reuse this component, so scroll on every slug.
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.slug.clone(),
    );

    let Some(feature) = feature_by_slug(&props.slug) else {
        log::warn!("Unknown feature slug {:?}, redirecting home", props.slug);
        return html! { <Redirect<Route> to={Route::Home} /> };
    };

    let detail_css = r#"
        .detail-hero {
            position: relative;
            overflow: hidden;
            background: linear-gradient(135deg, #121212 0%, #1a2e22 100%);
            color: #fff;
            padding: 6rem 0 5rem;
        }
        .detail-hero-glow {
            position: absolute;
            width: 24rem;
            height: 24rem;
            border-radius: 9999px;
            background: rgba(34, 164, 93, 0.2);
            filter: blur(64px);
            pointer-events: none;
        }
        .detail-hero-glow.top { top: -6rem; right: -6rem; }
        .detail-hero-glow.bottom { bottom: -8rem; left: -8rem; }
        .detail-back {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            color: rgba(255, 255, 255, 0.7);
            text-decoration: none;
            margin-bottom: 2.5rem;
            transition: color 0.3s ease;
        }
        .detail-back:hover { color: #22a45d; }
        .detail-back svg { width: 1.25rem; height: 1.25rem; }
        .detail-hero-grid {
            position: relative;
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 3rem;
            align-items: center;
        }
        .detail-hero h1 {
            font-size: 3.5rem;
            font-weight: 700;
            margin-bottom: 1rem;
        }
        .detail-tagline {
            font-size: 1.5rem;
            color: rgba(255, 255, 255, 0.8);
            margin-bottom: 1.5rem;
        }
        .detail-description {
            font-size: 1.125rem;
            color: rgba(255, 255, 255, 0.7);
            line-height: 1.7;
        }
        .detail-image { position: relative; }
        .detail-image-tilt {
            position: absolute;
            inset: 0;
            border-radius: 1.5rem;
            background: rgba(34, 164, 93, 0.3);
            transform: rotate(3deg);
        }
        .detail-image img {
            position: relative;
            width: 100%;
            height: 20rem;
            object-fit: cover;
            border-radius: 1.5rem;
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
        }
        .detail-steps {
            max-width: 48rem;
            margin: 0 auto;
        }
        .detail-step {
            position: relative;
            display: flex;
            gap: 1.5rem;
            padding-bottom: 3rem;
        }
        .detail-step:last-child { padding-bottom: 0; }
        .detail-step-line {
            position: absolute;
            left: 1.5rem;
            top: 3.5rem;
            bottom: 0.5rem;
            width: 2px;
            background: linear-gradient(to bottom, #22a45d, rgba(34, 164, 93, 0.2));
        }
        .detail-step-number {
            flex-shrink: 0;
            width: 3rem;
            height: 3rem;
            border-radius: 9999px;
            background: #22a45d;
            color: #fff;
            font-weight: 700;
            font-size: 1.25rem;
            display: flex;
            align-items: center;
            justify-content: center;
            box-shadow: 0 10px 15px -3px rgba(34, 164, 93, 0.3);
        }
        .detail-step h3 { font-size: 1.25rem; color: #121212; margin-bottom: 0.5rem; }
        .detail-step p { color: #6b7280; line-height: 1.7; }
        .detail-advantages {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1.5rem;
            max-width: 64rem;
            margin: 0 auto;
        }
        .detail-advantage {
            display: flex;
            gap: 1rem;
            background: #fff;
            border-radius: 1rem;
            padding: 1.5rem;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.05);
            transition: box-shadow 0.3s ease;
        }
        .detail-advantage:hover { box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
        .detail-advantage-icon {
            flex-shrink: 0;
            width: 3rem;
            height: 3rem;
            border-radius: 0.75rem;
            background: rgba(34, 164, 93, 0.1);
            color: #22a45d;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .detail-advantage-icon svg { width: 1.5rem; height: 1.5rem; }
        .detail-advantage h4 { font-size: 1.125rem; color: #121212; margin-bottom: 0.5rem; }
        .detail-advantage p { color: #6b7280; line-height: 1.6; }
        .detail-impact {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 2rem;
            max-width: 64rem;
            margin: 0 auto;
        }
        .detail-impact-card {
            text-align: center;
            background: rgba(255, 255, 255, 0.05);
            border-radius: 1rem;
            padding: 2rem;
            transition: background 0.3s ease;
        }
        .detail-impact-card:hover { background: rgba(255, 255, 255, 0.1); }
        .detail-impact-stat {
            font-size: 3.5rem;
            font-weight: 700;
            color: #22a45d;
            margin-bottom: 0.75rem;
        }
        .detail-impact-card p { color: #9ca3af; }
        .detail-cta { text-align: center; }
        .detail-cta p {
            font-size: 1.125rem;
            color: #6b7280;
            max-width: 36rem;
            margin: 0 auto 2rem;
        }
        .detail-cta-actions {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 1rem;
        }
        .detail-footer {
            background: #121212;
            color: #fff;
            text-align: center;
            padding: 2rem 0;
        }
        .detail-footer a {
            color: #fff;
            font-size: 1.25rem;
            font-weight: 700;
            text-decoration: none;
        }
        .detail-footer a:hover { color: #22a45d; }
        .detail-footer p { color: #6b7280; font-size: 0.875rem; margin-top: 0.5rem; }
        @media (max-width: 1024px) {
            .detail-hero-grid { grid-template-columns: 1fr; }
            .detail-hero h1 { font-size: 2.5rem; }
        }
        @media (max-width: 768px) {
            .detail-advantages { grid-template-columns: 1fr; }
            .detail-impact { grid-template-columns: 1fr; }
        }
    "#;

    let step_count = feature.steps.len();

    html! {
        <div class="feature-detail">
            <style>{detail_css}</style>

            <section class="detail-hero">
                <div class="detail-hero-glow top"></div>
                <div class="detail-hero-glow bottom"></div>
                <div class="container">
                    <a href="/#features" class="detail-back">
                        <SvgIcon icon={Icon::ArrowLeft} />
                        {"Back to Features"}
                    </a>
                    <div class="detail-hero-grid">
                        <div class="fade-in-up">
                            <span class="section-badge dark">{"Feature"}</span>
                            <h1>{feature.title}</h1>
                            <p class="detail-tagline">{feature.tagline}</p>
                            <p class="detail-description">{feature.description}</p>
                        </div>
                        <div class="detail-image fade-in delay-200">
                            <div class="detail-image-tilt"></div>
                            <img src={feature.image} alt={feature.title} />
                        </div>
                    </div>
                </div>
            </section>

            <section class="section section-light">
                <div class="container">
                    <div class="section-header">
                        <span class="section-badge">{"Step by Step"}</span>
                        <h2 class="section-title">{"How It Works"}</h2>
                        <p class="section-subtitle">{steps_intro(feature)}</p>
                    </div>
                    <div class="detail-steps">
                        { for feature.steps.iter().enumerate().map(|(index, step)| html! {
                            <div key={step.title} class="detail-step">
                                if has_connector(index, step_count) {
                                    <div class="detail-step-line"></div>
                                }
                                <div class="detail-step-number">{index + 1}</div>
                                <div>
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-muted">
                <div class="container">
                    <div class="section-header">
                        <span class="section-badge">{"Benefits"}</span>
                        <h2 class="section-title">{"Why You'll Love It"}</h2>
                        <p class="section-subtitle">{"Key advantages that make this feature stand out."}</p>
                    </div>
                    <div class="detail-advantages">
                        { for feature.advantages.iter().map(|advantage| html! {
                            <div key={advantage.title} class="detail-advantage">
                                <div class="detail-advantage-icon">
                                    <SvgIcon icon={Icon::from_name(advantage.icon)} />
                                </div>
                                <div>
                                    <h4>{advantage.title}</h4>
                                    <p>{advantage.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <div class="section-header">
                        <span class="section-badge dark">{"Impact"}</span>
                        <h2 class="section-title light">{"The Real Impact"}</h2>
                        <p class="section-subtitle light">{"Numbers that show the difference this feature makes."}</p>
                    </div>
                    <div class="detail-impact">
                        { for feature.impact.iter().map(|item| html! {
                            <div key={item.description} class="detail-impact-card">
                                <div class="detail-impact-stat">{item.stat}</div>
                                <p>{item.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section class="section section-light detail-cta">
                <div class="container">
                    <h2 class="section-title">{"Ready to Get Started?"}</h2>
                    <p>{cta_copy(feature)}</p>
                    <div class="detail-cta-actions">
                        <a href="/#download" class="btn-primary btn-large">{"Download APK"}</a>
                        <a href="/#features" class="btn-secondary btn-large">{"Explore More Features"}</a>
                    </div>
                </div>
            </section>

            <footer class="detail-footer">
                <Link<Route> to={Route::Home}>{config::SITE_NAME}</Link<Route>>
                <p>{copyright_line(current_year())}</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_lowercases_the_feature_title() {
        let feature = feature_by_slug("local-discovery").unwrap();
        assert_eq!(
            steps_intro(feature),
            "Simple steps to get started with smart local discovery."
        );
        assert_eq!(
            cta_copy(feature),
            "Download Daanveer now and experience smart local discovery firsthand."
        );
    }

    #[test]
    fn only_inner_steps_draw_a_connector() {
        assert!(has_connector(0, 3));
        assert!(has_connector(1, 3));
        assert!(!has_connector(2, 3));
        assert!(!has_connector(0, 1));
    }
}
