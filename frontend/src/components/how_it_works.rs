use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::data::landing::PROCESS_STEPS;
use crate::utils::reveal::{use_reveal, SECTION_THRESHOLD};

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), SECTION_THRESHOLD);

    let steps_css = r#"
        .process-glow {
            position: absolute;
            top: 0;
            left: 50%;
            transform: translateX(-50%);
            width: 800px;
            height: 800px;
            border-radius: 9999px;
            background: rgba(34, 164, 93, 0.05);
            filter: blur(64px);
            pointer-events: none;
        }
        .process-track {
            position: relative;
        }
        .process-line {
            position: absolute;
            top: 6rem;
            left: 50%;
            transform: translateX(-50%);
            width: 66%;
            height: 2px;
        }
        .process-line-fill {
            height: 100%;
            width: 0;
            opacity: 0;
            background: linear-gradient(to right, transparent, #22a45d, transparent);
            transition: all 1s ease 0.3s;
        }
        .process-line-fill.revealed {
            width: 100%;
            opacity: 1;
        }
        .process-steps {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 3rem;
        }
        .process-step {
            text-align: center;
        }
        .process-badge {
            position: relative;
            display: inline-flex;
            align-items: center;
            justify-content: center;
            margin-bottom: 1.5rem;
        }
        .process-ring {
            position: absolute;
            width: 6rem;
            height: 6rem;
            border-radius: 9999px;
            border: 2px solid rgba(34, 164, 93, 0.2);
        }
        .process-icon {
            width: 5rem;
            height: 5rem;
            border-radius: 9999px;
            background: #fff;
            color: #22a45d;
            box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .process-icon svg { width: 2.5rem; height: 2.5rem; }
        .process-number {
            position: absolute;
            top: -0.5rem;
            right: -0.5rem;
            width: 2rem;
            height: 2rem;
            border-radius: 9999px;
            background: #22a45d;
            color: #fff;
            font-size: 0.875rem;
            font-weight: 700;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .process-step h3 {
            font-size: 1.5rem;
            color: #121212;
            margin-bottom: 0.75rem;
        }
        .process-step p {
            color: #6b7280;
            max-width: 20rem;
            margin: 0 auto;
        }
        .process-arrow {
            display: none;
            color: rgba(34, 164, 93, 0.4);
            margin: 1rem 0;
        }
        .process-arrow svg { width: 1.5rem; height: 1.5rem; }
        @media (max-width: 1024px) {
            .process-line { display: none; }
            .process-steps { grid-template-columns: 1fr; gap: 2rem; }
            .process-arrow { display: flex; justify-content: center; }
        }
    "#;

    let revealed = visible.then_some("revealed");

    html! {
        <section ref={section_ref} class="section section-light section-clip">
            <style>{steps_css}</style>
            <div class="process-glow"></div>
            <div class="container section-raised">
                <div class="section-header">
                    <span class="section-badge">{"Process"}</span>
                    <h2 class="section-title">{"How it works"}</h2>
                    <p class="section-subtitle">
                        {"Three simple steps to start making a difference in your community."}
                    </p>
                </div>

                <div class="process-track">
                    <div class="process-line">
                        <div class={classes!("process-line-fill", revealed)}></div>
                    </div>
                    <div class="process-steps">
                        { for PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                            <div
                                key={step.number}
                                class={classes!("process-step", "reveal", "reveal-up", revealed)}
                                style={format!("transition-delay: {}ms;", index * 200)}
                            >
                                <div class="process-badge">
                                    <div class="process-ring"></div>
                                    <div class="process-icon">
                                        <SvgIcon icon={step.icon} />
                                    </div>
                                    <div class="process-number">{step.number}</div>
                                </div>
                                if index + 1 < PROCESS_STEPS.len() {
                                    <div class="process-arrow">
                                        <SvgIcon icon={Icon::ArrowDown} />
                                    </div>
                                }
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
