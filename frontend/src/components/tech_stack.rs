use yew::prelude::*;

use crate::components::icons::SvgIcon;
use crate::data::landing::{TECH_STACK, TRUST_BADGES};
use crate::utils::reveal::{use_reveal, SECTION_THRESHOLD};

#[function_component(TechStack)]
pub fn tech_stack() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), SECTION_THRESHOLD);
    let revealed = visible.then_some("revealed");

    let tech_css = r#"
        .tech-grid {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 1.5rem;
            max-width: 56rem;
            margin: 0 auto;
        }
        .tech-card {
            background: #fff;
            border-radius: 1rem;
            padding: 1.5rem;
            text-align: center;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        }
        .tech-card:hover {
            box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
        }
        .tech-icon {
            width: 3.5rem;
            height: 3.5rem;
            margin: 0 auto 1rem;
            border-radius: 0.75rem;
            background: rgba(34, 164, 93, 0.1);
            color: #22a45d;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .tech-icon svg { width: 2rem; height: 2rem; }
        .tech-card h4 { color: #121212; margin-bottom: 0.25rem; }
        .tech-card p { font-size: 0.875rem; color: #6b7280; }
        .trust-badges {
            margin-top: 3rem;
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 1.5rem;
        }
        .trust-badge {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            color: #6b7280;
            font-size: 0.875rem;
            font-weight: 500;
        }
        .trust-badge svg { width: 1.25rem; height: 1.25rem; color: #22a45d; }
        @media (max-width: 768px) {
            .tech-grid { grid-template-columns: repeat(2, 1fr); gap: 1rem; }
        }
    "#;

    html! {
        <section ref={section_ref} class="section section-muted">
            <style>{tech_css}</style>
            <div class="container">
                <div class="section-header">
                    <span class="section-badge">{"Technology"}</span>
                    <h2 class="section-title">{"Built with modern tech"}</h2>
                    <p class="section-subtitle">
                        {"Frontend: React + Tailwind. Backend: Django REST / FastAPI. Mapping: OpenStreetMap."}
                    </p>
                </div>

                <div class="tech-grid">
                    { for TECH_STACK.iter().enumerate().map(|(index, tech)| html! {
                        <div
                            key={tech.name}
                            class={classes!("tech-card", "reveal", "reveal-up", revealed)}
                            style={format!("transition-delay: {}ms;", index * 100)}
                        >
                            <div class="tech-icon">
                                <SvgIcon icon={tech.icon} />
                            </div>
                            <h4>{tech.name}</h4>
                            <p>{tech.description}</p>
                        </div>
                    }) }
                </div>

                <div class={classes!("trust-badges", "reveal", revealed)}>
                    { for TRUST_BADGES.iter().map(|(icon, label)| html! {
                        <div key={*label} class="trust-badge">
                            <SvgIcon icon={*icon} />
                            <span>{*label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
