use yew::prelude::*;

use super::sequencer::IntroStage;
use crate::config;
use crate::utils::listener::on_window_key;

#[derive(Properties, PartialEq)]
pub struct SplashProps {
    pub exiting: bool,
    pub on_continue: Callback<()>,
}

/// Full-screen logo splash shown once per session after the intro video.
#[function_component(Splash)]
pub fn splash(props: &SplashProps) -> Html {
    {
        let on_continue = props.on_continue.clone();
        use_effect_with_deps(
            move |_| {
                let listener = on_window_key(move |key| {
                    let claimed = IntroStage::SplashPlaying.accepts_key(key);
                    if claimed {
                        on_continue.emit(());
                    }
                    claimed
                });
                move || drop(listener)
            },
            (),
        );
    }

    let onclick = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| on_continue.emit(()))
    };
    let ontouchstart = {
        let on_continue = props.on_continue.clone();
        Callback::from(move |_: TouchEvent| on_continue.emit(()))
    };

    html! {
        <div
            class={classes!("splash", props.exiting.then_some("splash-exit"))}
            onclick={onclick}
            ontouchstart={ontouchstart}
            role="button"
            tabindex="0"
            aria-label={format!("Click or press Enter to continue to {}", config::SITE_NAME)}
        >
            <div class="splash-backdrop"></div>
            <div class="splash-body">
                <div class="splash-rings">
                    <div class="pulse-ring"></div>
                    <div class="pulse-ring delayed"></div>
                </div>
                <div class="splash-logo logo-animate">
                    <img src={config::LOGO_PLACEHOLDER_PATH} alt={format!("{} Logo", config::SITE_NAME)} />
                </div>
                <h1 class="splash-title fade-in">{config::SITE_NAME}</h1>
                <p class="splash-tagline fade-in delay-200">
                    {"Connecting volunteers, NGOs, and local communities."}
                </p>
                <p class="splash-prompt fade-in delay-500">
                    {"Click anywhere or press Enter to continue"}
                </p>
            </div>
        </div>
    }
}
