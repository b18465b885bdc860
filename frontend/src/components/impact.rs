use yew::prelude::*;

use crate::components::icons::SvgIcon;
use crate::data::landing::{IMPACT_FIGURES, IMPACT_HEADLINE, IMPACT_METRICS};
use crate::utils::reveal::{use_reveal, SECTION_THRESHOLD};

#[function_component(Impact)]
pub fn impact() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), SECTION_THRESHOLD);
    let revealed = visible.then_some("revealed");

    let impact_css = r#"
        .impact-layout {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 3rem;
            align-items: center;
        }
        .impact-lead {
            font-size: 1.125rem;
            color: #6b7280;
            line-height: 1.7;
            margin-bottom: 2rem;
        }
        .impact-metric {
            display: flex;
            align-items: flex-start;
            gap: 1rem;
            padding: 1rem;
            border-radius: 1rem;
        }
        .impact-metric:hover { background: #f5f7f6; }
        .impact-metric-icon {
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
        .impact-metric-icon svg { width: 2rem; height: 2rem; }
        .impact-metric h4 { color: #121212; margin-bottom: 0.25rem; }
        .impact-metric p { font-size: 0.875rem; color: #6b7280; }
        .impact-visual { position: relative; }
        .impact-visual-tilt {
            position: absolute;
            inset: 0;
            border-radius: 1.5rem;
            background: linear-gradient(135deg, rgba(34, 164, 93, 0.1), rgba(34, 164, 93, 0.05));
            transform: rotate(3deg);
        }
        .impact-card {
            position: relative;
            background: #fff;
            border-radius: 1.5rem;
            padding: 2rem;
            box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
        }
        .impact-headline {
            text-align: center;
            margin-bottom: 2rem;
        }
        .impact-headline-value {
            font-size: 3.75rem;
            font-weight: 700;
            color: #22a45d;
        }
        .impact-headline-label { color: #6b7280; }
        .impact-figures {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1rem;
        }
        .impact-figure {
            background: #f5f7f6;
            border-radius: 1rem;
            padding: 1rem;
            text-align: center;
        }
        .impact-figure-value {
            font-size: 1.5rem;
            font-weight: 700;
            color: #121212;
        }
        .impact-figure-label { font-size: 0.875rem; color: #6b7280; }
        @media (max-width: 1024px) {
            .impact-layout { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <section id="impact" ref={section_ref} class="section section-light">
            <style>{impact_css}</style>
            <div class="container impact-layout">
                <div>
                    <span class="section-badge">{"Impact"}</span>
                    <h2 class="section-title">{"Making a real difference"}</h2>
                    <p class="impact-lead">
                        {"Increase local participation, increase trust through verified reporting, reduce NGO admin overhead, and strengthen community bonds."}
                    </p>
                    <div>
                        { for IMPACT_METRICS.iter().enumerate().map(|(index, metric)| html! {
                            <div
                                key={metric.label}
                                class={classes!("impact-metric", "reveal", "reveal-left", revealed)}
                                style={format!("transition-delay: {}ms;", index * 100)}
                            >
                                <div class="impact-metric-icon">
                                    <SvgIcon icon={metric.icon} />
                                </div>
                                <div>
                                    <h4>{metric.label}</h4>
                                    <p>{metric.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("impact-visual", "reveal", "reveal-scale", revealed)}>
                    <div class="impact-visual-tilt"></div>
                    <div class="impact-card">
                        <div class="impact-headline">
                            <div class="impact-headline-value">{IMPACT_HEADLINE.value}</div>
                            <div class="impact-headline-label">{IMPACT_HEADLINE.label}</div>
                        </div>
                        <div class="impact-figures">
                            { for IMPACT_FIGURES.iter().map(|figure| html! {
                                <div key={figure.label} class="impact-figure">
                                    <div class="impact-figure-value">{figure.value}</div>
                                    <div class="impact-figure-label">{figure.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
