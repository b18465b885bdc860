use web_sys::window;
use yew::prelude::*;

use crate::config;
use crate::data::landing::NAV_ITEMS;
use crate::utils::listener::ListenerHandle;

const SOLID_AFTER_PX: f64 = 20.0;

fn solid_at(scroll_y: f64) -> bool {
    scroll_y > SOLID_AFTER_PX
}

fn page_scrolled() -> bool {
    window()
        .and_then(|w| w.scroll_y().ok())
        .map(solid_at)
        .unwrap_or(false)
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(page_scrolled);

    // Solid background once the page has scrolled; only a threshold crossing re-renders
    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ListenerHandle::on_window("scroll", move |_| {
                    scrolled.set(page_scrolled());
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let navbar_css = r#"
        .navbar {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 40;
            background: transparent;
            transition: all 0.3s ease;
        }
        .navbar.scrolled {
            background: rgba(255, 255, 255, 0.95);
            backdrop-filter: blur(12px);
            box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        }
        .navbar-inner {
            display: flex;
            align-items: center;
            justify-content: space-between;
            height: 5rem;
        }
        .navbar-brand {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            text-decoration: none;
            color: #121212;
            font-size: 1.25rem;
            font-weight: 700;
        }
        .navbar-brand img {
            width: 2.5rem;
            height: 2.5rem;
            transition: transform 0.3s ease;
        }
        .navbar-brand:hover img {
            transform: scale(1.1);
        }
        .navbar-links {
            display: flex;
            align-items: center;
            gap: 2rem;
        }
        .navbar-link {
            color: rgba(18, 18, 18, 0.8);
            font-weight: 500;
            text-decoration: none;
            transition: color 0.3s ease;
        }
        .navbar-link:hover {
            color: #22a45d;
        }
        .navbar-toggle {
            display: none;
            background: none;
            border: none;
            padding: 0.5rem;
            cursor: pointer;
        }
        .navbar-toggle span {
            display: block;
            width: 1.5rem;
            height: 2px;
            margin: 5px 0;
            background: #121212;
            transition: all 0.3s ease;
        }
        .navbar-toggle.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
        .navbar-toggle.open span:nth-child(2) { opacity: 0; }
        .navbar-toggle.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
        .mobile-menu {
            display: none;
        }
        @media (max-width: 768px) {
            .navbar-inner { height: 4rem; }
            .navbar-links { display: none; }
            .navbar-toggle { display: block; }
            .mobile-menu {
                display: flex;
                flex-direction: column;
                gap: 0.5rem;
                position: absolute;
                top: 100%;
                left: 0;
                right: 0;
                background: #fff;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                overflow: hidden;
                max-height: 0;
                opacity: 0;
                padding: 0 1rem;
                transition: all 0.3s ease;
            }
            .mobile-menu.open {
                max-height: 24rem;
                opacity: 1;
                padding: 1rem;
            }
            .mobile-menu .navbar-link {
                padding: 0.75rem 1rem;
                border-radius: 0.5rem;
            }
        }
    "#;

    html! {
        <nav
            class={classes!("navbar", (*scrolled).then_some("scrolled"))}
            role="navigation"
            aria-label="Main navigation"
        >
            <style>{navbar_css}</style>
            <div class="container">
                <div class="navbar-inner">
                    <a
                        href="#home"
                        class="navbar-brand"
                        title={config::SITE_TAGLINE}
                        aria-label={format!("{} Home", config::SITE_NAME)}
                    >
                        <img src={config::LOGO_PATH} alt={format!("{} Logo", config::SITE_NAME)} />
                        <span>{config::SITE_NAME}</span>
                    </a>

                    <div class="navbar-links">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <a key={item.label} href={item.href} class="navbar-link">{item.label}</a>
                        }) }
                        <a
                            href={config::apk_download_url()}
                            download={config::APK_FILE_NAME}
                            class="btn-primary btn-small"
                            aria-label={format!("Download {} APK", config::SITE_NAME)}
                        >
                            {"Download APK"}
                        </a>
                    </div>

                    <button
                        class={classes!("navbar-toggle", (*menu_open).then_some("open"))}
                        onclick={toggle_menu}
                        aria-expanded={menu_open.to_string()}
                        aria-controls="mobile-menu"
                        aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>

            <div id="mobile-menu" class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                { for NAV_ITEMS.iter().map(|item| html! {
                    <a key={item.label} href={item.href} class="navbar-link" onclick={close_menu.clone()}>
                        {item.label}
                    </a>
                }) }
                <a href="#download" class="btn-primary" onclick={close_menu.clone()}>
                    {"Download APK"}
                </a>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_flips_only_past_the_threshold() {
        assert!(!solid_at(0.0));
        assert!(!solid_at(SOLID_AFTER_PX));
        assert!(solid_at(SOLID_AFTER_PX + 1.0));
    }

    #[test]
    fn scrolling_within_one_side_keeps_the_same_state() {
        // The navbar state is compared by value, so equal results skip a render.
        assert_eq!(solid_at(2.0), solid_at(19.0));
        assert_eq!(solid_at(21.0), solid_at(900.0));
    }
}
