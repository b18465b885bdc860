use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::config;
use crate::data::landing::ROADMAP;
use crate::utils::reveal::{use_reveal, SECTION_THRESHOLD};

#[function_component(Roadmap)]
pub fn roadmap() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), SECTION_THRESHOLD);
    let revealed = visible.then_some("revealed");

    let roadmap_css = r#"
        .roadmap-grid {
            display: grid;
            grid-template-columns: repeat(4, 1fr);
            gap: 1.5rem;
            max-width: 72rem;
            margin: 0 auto;
        }
        .roadmap-card {
            background: rgba(255, 255, 255, 0.05);
            border: 1px solid rgba(255, 255, 255, 0.1);
            border-radius: 1rem;
            padding: 1.5rem;
        }
        .roadmap-card:hover {
            border-color: rgba(34, 164, 93, 0.5);
            background: rgba(255, 255, 255, 0.1);
        }
        .roadmap-card-top {
            display: flex;
            align-items: center;
            justify-content: space-between;
            margin-bottom: 1rem;
        }
        .roadmap-icon {
            width: 2.5rem;
            height: 2.5rem;
            border-radius: 0.75rem;
            background: rgba(34, 164, 93, 0.2);
            color: #22a45d;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .roadmap-icon svg { width: 1.5rem; height: 1.5rem; }
        .roadmap-status {
            font-size: 0.75rem;
            font-weight: 500;
            padding: 0.25rem 0.5rem;
            border-radius: 9999px;
        }
        .status-done { background: #22a45d; color: #fff; }
        .status-building { background: rgba(234, 179, 8, 0.2); color: #facc15; }
        .status-planned { background: rgba(255, 255, 255, 0.1); color: #9ca3af; }
        .roadmap-card h4 { color: #fff; margin-bottom: 0.5rem; }
        .roadmap-card p { font-size: 0.875rem; color: #9ca3af; }
        .roadmap-cta {
            text-align: center;
            margin-top: 3rem;
            color: #9ca3af;
        }
        .roadmap-cta a {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            margin-top: 1rem;
            color: #22a45d;
            font-weight: 500;
            text-decoration: none;
        }
        .roadmap-cta a:hover { text-decoration: underline; }
        .roadmap-cta svg { width: 1rem; height: 1rem; }
        @media (max-width: 1024px) {
            .roadmap-grid { grid-template-columns: repeat(2, 1fr); }
        }
        @media (max-width: 768px) {
            .roadmap-grid { grid-template-columns: 1fr; }
        }
    "#;

    html! {
        <section ref={section_ref} class="section section-dark">
            <style>{roadmap_css}</style>
            <div class="container">
                <div class="section-header">
                    <span class="section-badge dark">{"Roadmap"}</span>
                    <h2 class="section-title light">{"What's coming next"}</h2>
                    <p class="section-subtitle light">
                        {"Exciting features on the horizon to make volunteering even more impactful."}
                    </p>
                </div>

                <div class="roadmap-grid">
                    { for ROADMAP.iter().enumerate().map(|(index, item)| html! {
                        <div
                            key={item.title}
                            class={classes!("roadmap-card", "reveal", "reveal-up", revealed)}
                            style={format!("transition-delay: {}ms;", index * 100)}
                        >
                            <div class="roadmap-card-top">
                                <div class="roadmap-icon">
                                    <SvgIcon icon={item.icon} />
                                </div>
                                <span class={classes!("roadmap-status", item.status.css_class())}>
                                    {item.status.label()}
                                </span>
                            </div>
                            <h4>{item.title}</h4>
                            <p>{item.description}</p>
                        </div>
                    }) }
                </div>

                <div class={classes!("roadmap-cta", "reveal", revealed)}>
                    <p>{format!("Want to help shape the future of {}?", config::SITE_NAME)}</p>
                    <a href="#contact">
                        {"Get in touch"}
                        <SvgIcon icon={Icon::ArrowRight} />
                    </a>
                </div>
            </div>
        </section>
    }
}
