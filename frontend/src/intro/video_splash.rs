use web_sys::HtmlVideoElement;
use yew::prelude::*;

use super::sequencer::IntroStage;
use crate::config;
use crate::utils::listener::on_window_key;

#[derive(Properties, PartialEq)]
pub struct VideoSplashProps {
    pub fading: bool,
    pub on_skip: Callback<()>,
    pub on_ended: Callback<()>,
}

#[function_component(VideoSplash)]
pub fn video_splash(props: &VideoSplashProps) -> Html {
    let video_ref = use_node_ref();

    // Space, Enter or Escape skips the intro
    {
        let on_skip = props.on_skip.clone();
        use_effect_with_deps(
            move |_| {
                let listener = on_window_key(move |key| {
                    let claimed = IntroStage::VideoPlaying.accepts_key(key);
                    if claimed {
                        on_skip.emit(());
                    }
                    claimed
                });
                move || drop(listener)
            },
            (),
        );
    }

    // Stop playback as soon as the fade starts
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |fading| {
                if *fading {
                    if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                        if let Err(e) = video.pause() {
                            log::debug!("Could not pause intro video: {:?}", e);
                        }
                    }
                }
                || ()
            },
            props.fading,
        );
    }

    let onclick = {
        let on_skip = props.on_skip.clone();
        Callback::from(move |_: MouseEvent| on_skip.emit(()))
    };
    let onended = {
        let on_ended = props.on_ended.clone();
        Callback::from(move |_: Event| on_ended.emit(()))
    };

    let overlay_class = classes!("video-splash", props.fading.then_some("fading"));
    let hint_class = classes!("video-splash-hint", (!props.fading).then_some("pulse"));

    html! {
        <div
            class={overlay_class}
            onclick={onclick}
            role="button"
            tabindex="0"
            aria-label="Click or press any key to skip intro video"
        >
            <video
                ref={video_ref}
                class="video-splash-media"
                autoplay=true
                muted=true
                playsinline=true
                onended={onended}
            >
                <source src={config::INTRO_VIDEO_PATH} type="video/mp4" />
                {"Your browser does not support the video tag."}
            </video>
            <div class={hint_class}>
                {"Click or press any key to skip"}
            </div>
        </div>
    }
}
