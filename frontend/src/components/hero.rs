use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::download_modal::DownloadModal;
use crate::components::icons::{Icon, SvgIcon};
use crate::config;
use crate::data::landing::HERO_FIGURES;

pub fn is_android_user_agent(user_agent: &str) -> bool {
    user_agent.to_ascii_lowercase().contains("android")
}

fn running_on_android() -> bool {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| is_android_user_agent(&ua))
        .unwrap_or(false)
}

pub(crate) fn scroll_to_section(id: &str) {
    let Some(section) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("No #{} section to scroll to", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let show_modal = use_state(|| false);

    let on_download = {
        let show_modal = show_modal.clone();
        Callback::from(move |_: MouseEvent| {
            if running_on_android() {
                let url = config::apk_download_url();
                log::info!("Android visitor, downloading {}", url);
                if let Some(window) = window() {
                    if let Err(e) = window.location().set_href(url) {
                        log::warn!("Could not start APK download: {:?}", e);
                    }
                }
            } else {
                show_modal.set(true);
            }
        })
    };
    let on_view_features = Callback::from(|_: MouseEvent| scroll_to_section("features"));
    let on_close = {
        let show_modal = show_modal.clone();
        Callback::from(move |_| show_modal.set(false))
    };

    let hero_css = r#"
        .hero {
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            padding: 5rem 1rem 4rem;
            position: relative;
            overflow: hidden;
        }
        .hero-blob {
            position: absolute;
            width: 24rem;
            height: 24rem;
            border-radius: 9999px;
            filter: blur(64px);
            pointer-events: none;
        }
        .hero-blob.left { top: 25%; left: -8rem; background: rgba(34, 164, 93, 0.1); }
        .hero-blob.right { bottom: 25%; right: -8rem; background: rgba(34, 164, 93, 0.05); }
        .hero-dots {
            position: absolute;
            inset: 0;
            opacity: 0.02;
            background-image: radial-gradient(#121212 1px, transparent 1px);
            background-size: 30px 30px;
            pointer-events: none;
        }
        .hero-body {
            position: relative;
            z-index: 10;
            max-width: 56rem;
            margin: 0 auto;
            text-align: center;
        }
        .hero-badge {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            background: rgba(34, 164, 93, 0.1);
            color: #22a45d;
            padding: 0.5rem 1rem;
            border-radius: 9999px;
            font-size: 0.875rem;
            font-weight: 500;
            margin-bottom: 2rem;
        }
        .hero-badge-dot {
            width: 0.5rem;
            height: 0.5rem;
            border-radius: 9999px;
            background: #22a45d;
            animation: pulse 2s infinite;
        }
        .hero h1 {
            font-size: 4.5rem;
            line-height: 1.1;
            color: #121212;
            margin-bottom: 1.5rem;
        }
        .hero-sub {
            font-size: 1.5rem;
            color: #6b7280;
            max-width: 42rem;
            margin: 0 auto 2.5rem;
        }
        .hero-sub strong {
            color: #121212;
            font-weight: 500;
        }
        .hero-actions {
            display: flex;
            justify-content: center;
            gap: 1rem;
            flex-wrap: wrap;
        }
        .hero-actions button {
            min-width: 200px;
        }
        .hero-note {
            margin-top: 1.5rem;
            font-size: 0.875rem;
            color: rgba(107, 114, 128, 0.6);
        }
        .hero-figures {
            margin: 4rem auto 0;
            max-width: 32rem;
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 2rem;
        }
        .hero-figure-value {
            font-size: 2.25rem;
            font-weight: 700;
            color: #22a45d;
        }
        .hero-figure-label {
            font-size: 0.875rem;
            color: #6b7280;
        }
        .hero-scroll {
            position: absolute;
            bottom: 2rem;
            left: 50%;
            transform: translateX(-50%);
            color: rgba(107, 114, 128, 0.4);
            animation: bounceSlow 2s infinite;
        }
        .hero-scroll svg { width: 1.5rem; height: 1.5rem; }
        @media (max-width: 768px) {
            .hero h1 { font-size: 2.5rem; }
            .hero-sub { font-size: 1.125rem; }
            .hero-actions { flex-direction: column; align-items: center; }
        }
    "#;

    html! {
        <>
            <section id="home" class="hero">
                <style>{hero_css}</style>
                <div class="hero-blob left"></div>
                <div class="hero-blob right"></div>
                <div class="hero-dots"></div>

                <div class="hero-body">
                    <div class="hero-badge fade-in">
                        <span class="hero-badge-dot"></span>
                        {"Open for Beta Testing"}
                    </div>

                    <h1 class="fade-in-up">
                        {format!("{}: Local", config::SITE_NAME)}
                        <br/>
                        <span class="text-gradient">{"volunteering made simple"}</span>
                    </h1>

                    <p class="hero-sub fade-in-up delay-100">
                        {"A location-first platform that connects volunteers, NGOs and local communities with "}
                        <strong>{"verified impact"}</strong>
                        {"."}
                    </p>

                    <div id="download" class="hero-actions fade-in-up delay-200">
                        <button
                            class="btn-primary btn-large"
                            onclick={on_download}
                            aria-label={format!("Download {} APK for Android", config::SITE_NAME)}
                        >
                            <SvgIcon icon={Icon::Phone} class={classes!("btn-icon")} />
                            {"Download APK"}
                        </button>
                        <button
                            class="btn-secondary btn-large"
                            onclick={on_view_features}
                            aria-label={format!("View {} features", config::SITE_NAME)}
                        >
                            <SvgIcon icon={Icon::ChevronDown} class={classes!("btn-icon")} />
                            {"View Features"}
                        </button>
                    </div>

                    <p class="hero-note fade-in delay-300">
                        {format!("🔒 Only install from official {} site. Verify signatures.", config::SITE_NAME)}
                    </p>

                    <div class="hero-figures fade-in-up delay-400">
                        { for HERO_FIGURES.iter().map(|figure| html! {
                            <div key={figure.label}>
                                <div class="hero-figure-value">{figure.value}</div>
                                <div class="hero-figure-label">{figure.label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-scroll">
                    <SvgIcon icon={Icon::ArrowDown} />
                </div>
            </section>

            <DownloadModal open={*show_modal} on_close={on_close} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_detection_is_case_insensitive() {
        assert!(is_android_user_agent(
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 Mobile"
        ));
        assert!(is_android_user_agent("something ANDROID something"));
    }

    #[test]
    fn desktop_agents_are_not_android() {
        assert!(!is_android_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
        ));
        assert!(!is_android_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
    }
}
