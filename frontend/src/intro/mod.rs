pub mod sequencer;
pub mod splash;
pub mod video_splash;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::session_flags::SessionStore;
use crate::Route;
use sequencer::{IntroInput, IntroSequencer, IntroStage};
use splash::Splash;
use video_splash::VideoSplash;

/// Whether an intro overlay currently covers the page content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntroOverlay(pub bool);

/// Content under an overlay ignores page-wide keys. Pages rendered outside
/// a gate are always interactive.
pub fn content_interactive(overlay: Option<IntroOverlay>) -> bool {
    !matches!(overlay, Some(IntroOverlay(true)))
}

struct IntroState {
    sequencer: IntroSequencer,
    store: SessionStore,
}

impl Reducible for IntroState {
    type Action = IntroInput;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut sequencer = self.sequencer;
        match sequencer.handle(action, &*self.store) {
            sequencer::Transition::Ignored => self,
            _ => Rc::new(IntroState {
                sequencer,
                store: self.store.clone(),
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IntroGateProps {
    pub route: Route,
    pub store: SessionStore,
    pub children: Children,
}

/// Wraps page content with the intro overlays. The content stays mounted
/// underneath and fades in once the sequence reaches `Content`.
#[function_component(IntroGate)]
pub fn intro_gate(props: &IntroGateProps) -> Html {
    let state = {
        let route = props.route.clone();
        let store = props.store.clone();
        use_reducer(move || IntroState {
            sequencer: IntroSequencer::start(&route, &*store),
            store,
        })
    };

    // Fade/exit timer, keyed on the stage it belongs to. Dropping the
    // Timeout on cleanup cancels it.
    {
        let dispatcher = state.dispatcher();
        let pending = state
            .sequencer
            .pending_delay()
            .map(|delay| (state.sequencer.stage(), delay));
        use_effect_with_deps(
            move |pending| {
                let timer = pending.map(|(_, delay)| {
                    Timeout::new(delay.as_millis() as u32, move || {
                        dispatcher.dispatch(IntroInput::TransitionElapsed);
                    })
                });
                move || drop(timer)
            },
            pending,
        );
    }

    let on_skip = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(IntroInput::Skip))
    };
    let on_video_end = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(IntroInput::VideoEnded))
    };

    let leaving = state.sequencer.is_leaving();
    let overlay = IntroOverlay(state.sequencer.overlay_visible());
    let content_class = if overlay.0 {
        "intro-content hidden"
    } else {
        "intro-content shown"
    };

    html! {
        <>
            {
                match state.sequencer.stage() {
                    IntroStage::VideoPlaying => html! {
                        <VideoSplash fading={leaving} on_skip={on_skip} on_ended={on_video_end} />
                    },
                    IntroStage::SplashPlaying => html! {
                        <Splash exiting={leaving} on_continue={on_skip} />
                    },
                    IntroStage::Content => html! {},
                }
            }
            <ContextProvider<IntroOverlay> context={overlay}>
                <div class={content_class}>
                    { for props.children.iter() }
                </div>
            </ContextProvider<IntroOverlay>>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_inert_while_an_overlay_is_up() {
        assert!(!content_interactive(Some(IntroOverlay(true))));
        assert!(content_interactive(Some(IntroOverlay(false))));
    }

    #[test]
    fn content_outside_a_gate_is_interactive() {
        assert!(content_interactive(None));
    }
}
