pub mod engine;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::data::slides::Slide;
use crate::intro::{content_interactive, IntroOverlay};
use crate::utils::listener::on_window_key;
use engine::{ArrowKey, CarouselAction, CarouselEngine, AUTOPLAY_INTERVAL, MANUAL_COOLDOWN};

#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub slides: &'static [Slide],
}

#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let len = props.slides.len();
    let engine = use_reducer(move || CarouselEngine::new(len));

    // Autoplay interval lives while autoplay is enabled. Hover only makes
    // the engine ignore ticks, so the phase survives a hover.
    {
        let dispatcher = engine.dispatcher();
        use_effect_with_deps(
            move |enabled| {
                let interval = enabled.then(|| {
                    Interval::new(AUTOPLAY_INTERVAL.as_millis() as u32, move || {
                        dispatcher.dispatch(CarouselAction::Tick)
                    })
                });
                move || drop(interval)
            },
            engine.autoplay_enabled() && !engine.is_empty(),
        );
    }

    // One cooldown per manual epoch; a newer epoch drops the older timer.
    {
        let dispatcher = engine.dispatcher();
        use_effect_with_deps(
            move |cooldown| {
                let timer = cooldown.map(|epoch| {
                    Timeout::new(MANUAL_COOLDOWN.as_millis() as u32, move || {
                        dispatcher.dispatch(CarouselAction::CooldownElapsed(epoch))
                    })
                });
                move || drop(timer)
            },
            engine.cooldown(),
        );
    }

    // Arrow keys only once the intro overlays are gone.
    let interactive = content_interactive(use_context::<IntroOverlay>());
    {
        let dispatcher = engine.dispatcher();
        use_effect_with_deps(
            move |interactive| {
                let listener = interactive
                    .then(|| {
                        on_window_key(move |key| {
                            if let Some(arrow) = ArrowKey::from_key(key) {
                                dispatcher.dispatch(CarouselAction::Key(arrow));
                            }
                            false
                        })
                    })
                    .flatten();
                move || drop(listener)
            },
            interactive,
        );
    }

    if engine.is_empty() {
        return html! {};
    }

    let dispatch = |action: CarouselAction| {
        let dispatcher = engine.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };
    let current = engine.index();
    let show_progress = engine.is_advancing();

    let carousel_css = r#"
        .carousel-section {
            position: relative;
            width: 100%;
            background: #121212;
            overflow: hidden;
        }
        .carousel-header {
            padding: 4rem 1rem 2rem;
            text-align: center;
        }
        .carousel-header h2 {
            color: #fff;
            font-size: 2.25rem;
            margin-bottom: 1rem;
        }
        .carousel-header p {
            color: #9ca3af;
            font-size: 1.125rem;
            max-width: 42rem;
            margin: 0 auto;
        }
        .carousel-frame-wrap {
            max-width: 72rem;
            margin: 0 auto;
            padding: 0 1rem 4rem;
        }
        .carousel-frame {
            position: relative;
            aspect-ratio: 21 / 9;
            border-radius: 1.5rem;
            overflow: hidden;
            box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
        }
        .carousel-slide {
            position: absolute;
            inset: 0;
            opacity: 0;
            transform: scale(1.05);
            transition: all 0.7s ease-in-out;
            z-index: 0;
        }
        .carousel-slide.active {
            opacity: 1;
            transform: scale(1);
            z-index: 10;
        }
        .carousel-slide img {
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .carousel-shade {
            position: absolute;
            inset: 0;
            background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.2), transparent);
        }
        .carousel-caption {
            position: absolute;
            left: 0;
            right: 0;
            bottom: 0;
            padding: 2.5rem;
        }
        .carousel-caption h3,
        .carousel-caption p {
            opacity: 0;
            transform: translateY(1rem);
            transition: all 0.5s ease 0.2s;
        }
        .carousel-slide.active .carousel-caption h3,
        .carousel-slide.active .carousel-caption p {
            opacity: 1;
            transform: translateY(0);
        }
        .carousel-caption h3 {
            color: #fff;
            font-size: 2.25rem;
            margin-bottom: 0.5rem;
        }
        .carousel-caption p {
            color: #d1d5db;
            font-size: 1.25rem;
            max-width: 42rem;
        }
        .carousel-arrow {
            position: absolute;
            top: 50%;
            transform: translateY(-50%);
            z-index: 20;
            width: 3rem;
            height: 3rem;
            border: none;
            border-radius: 9999px;
            background: rgba(255, 255, 255, 0.2);
            color: #fff;
            display: flex;
            align-items: center;
            justify-content: center;
            cursor: pointer;
            transition: all 0.3s ease;
        }
        .carousel-arrow:hover {
            background: rgba(255, 255, 255, 0.4);
            transform: translateY(-50%) scale(1.1);
        }
        .carousel-arrow.prev { left: 1rem; }
        .carousel-arrow.next { right: 1rem; }
        .carousel-arrow svg { width: 1.5rem; height: 1.5rem; }
        .carousel-dots {
            display: flex;
            justify-content: center;
            gap: 0.75rem;
            margin-top: 1.5rem;
        }
        .carousel-dot {
            position: relative;
            height: 0.75rem;
            width: 0.75rem;
            border: none;
            border-radius: 9999px;
            background: rgba(255, 255, 255, 0.3);
            cursor: pointer;
            overflow: hidden;
            transition: all 0.3s ease;
        }
        .carousel-dot.active {
            width: 2.5rem;
            background: #22a45d;
        }
        .carousel-dot-progress {
            position: absolute;
            inset: 0;
            border-radius: 9999px;
            background: #4ade80;
            transform-origin: left;
            animation: progressFill 4s linear forwards;
        }
        @keyframes progressFill {
            from { transform: scaleX(0); }
            to { transform: scaleX(1); }
        }
        @media (max-width: 768px) {
            .carousel-frame { aspect-ratio: 16 / 9; }
            .carousel-caption { padding: 1.5rem; }
            .carousel-caption h3 { font-size: 1.5rem; }
            .carousel-caption p { font-size: 1rem; }
        }
    "#;

    html! {
        <section
            class="carousel-section"
            onmouseenter={dispatch(CarouselAction::PointerEnter)}
            onmouseleave={dispatch(CarouselAction::PointerLeave)}
        >
            <style>{carousel_css}</style>
            <div class="carousel-header">
                <span class="section-badge dark">{"Our Impact"}</span>
                <h2>{"Volunteers in Action"}</h2>
                <p>{"See how Daanveer connects passionate volunteers with meaningful opportunities."}</p>
            </div>

            <div class="carousel-frame-wrap">
                <div class="carousel-frame" aria-live={if engine.is_paused() { "polite" } else { "off" }}>
                    {
                        props.slides.iter().enumerate().map(|(index, slide)| {
                            html! {
                                <div
                                    key={index}
                                    class={classes!("carousel-slide", (index == current).then_some("active"))}
                                    aria-label={format!("Slide {} of {}", index + 1, engine.len())}
                                >
                                    <img src={slide.image} alt={slide.title} />
                                    <div class="carousel-shade"></div>
                                    <div class="carousel-caption">
                                        <h3>{slide.title}</h3>
                                        <p>{slide.description}</p>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }

                    <button
                        class="carousel-arrow prev"
                        onclick={dispatch(CarouselAction::Previous)}
                        aria-label="Previous slide"
                    >
                        <SvgIcon icon={Icon::ChevronLeft} />
                    </button>
                    <button
                        class="carousel-arrow next"
                        onclick={dispatch(CarouselAction::Next)}
                        aria-label="Next slide"
                    >
                        <SvgIcon icon={Icon::ChevronRight} />
                    </button>
                </div>

                <div class="carousel-dots">
                    {
                        (0..engine.len()).map(|index| {
                            let active = index == current;
                            html! {
                                <button
                                    key={index}
                                    class={classes!("carousel-dot", active.then_some("active"))}
                                    onclick={dispatch(CarouselAction::Select(index))}
                                    aria-label={format!("Go to slide {}", index + 1)}
                                >
                                    if active && show_progress {
                                        // keyed on the index so the fill restarts per slide
                                        <span key={format!("progress-{}", index)} class="carousel-dot-progress"></span>
                                    }
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
