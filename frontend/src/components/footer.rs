use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::config;

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

pub fn copyright_line(year: u32) -> String {
    format!("© {} {}. All rights reserved.", year, config::SITE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = current_year();

    let footer_css = r#"
        .site-footer {
            background: #121212;
            color: #fff;
            padding: 4rem 0;
        }
        .footer-grid {
            display: grid;
            grid-template-columns: 2fr 1fr 1fr;
            gap: 3rem;
            margin-bottom: 3rem;
        }
        .footer-brand {
            display: flex;
            align-items: center;
            gap: 0.75rem;
            margin-bottom: 1rem;
            font-size: 1.5rem;
            font-weight: 700;
        }
        .footer-brand img { width: 2.5rem; height: 2.5rem; }
        .footer-about {
            color: #9ca3af;
            max-width: 28rem;
            margin-bottom: 1.5rem;
        }
        .footer-download {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            background: #22a45d;
            color: #fff;
            font-weight: 500;
            padding: 0.625rem 1.25rem;
            border-radius: 0.75rem;
            text-decoration: none;
            transition: background 0.3s ease;
        }
        .footer-download:hover { background: #1b8a4d; }
        .footer-download svg { width: 1.25rem; height: 1.25rem; }
        .site-footer h4 {
            font-size: 1.125rem;
            margin-bottom: 1rem;
        }
        .footer-links {
            list-style: none;
            padding: 0;
        }
        .footer-links li { margin-bottom: 0.75rem; }
        .footer-links a {
            color: #9ca3af;
            text-decoration: none;
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            transition: color 0.3s ease;
        }
        .footer-links a:hover { color: #22a45d; }
        .footer-links svg { width: 1rem; height: 1rem; }
        .footer-bottom {
            border-top: 1px solid rgba(255, 255, 255, 0.1);
            padding-top: 2rem;
            display: flex;
            justify-content: space-between;
            gap: 1rem;
            color: #6b7280;
            font-size: 0.875rem;
        }
        @media (max-width: 768px) {
            .footer-grid { grid-template-columns: 1fr; }
            .footer-bottom { flex-direction: column; align-items: center; }
        }
    "#;

    html! {
        <footer id="contact" class="site-footer">
            <style>{footer_css}</style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand">
                            <img src={config::LOGO_PLACEHOLDER_PATH} alt={format!("{} Logo", config::SITE_NAME)} />
                            <span>{config::SITE_NAME}</span>
                        </div>
                        <p class="footer-about">{config::SITE_DESCRIPTION}</p>
                        <a
                            href={config::apk_download_url()}
                            download={config::APK_FILE_NAME}
                            class="footer-download"
                            aria-label={format!("Download {} APK", config::SITE_NAME)}
                        >
                            <SvgIcon icon={Icon::Download} />
                            {"Download APK"}
                        </a>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul class="footer-links">
                            <li><a href="#home">{"Home"}</a></li>
                            <li><a href="#features">{"Features"}</a></li>
                            <li><a href="#impact">{"Impact"}</a></li>
                            <li><a href={config::PRIVACY_POLICY_URL}>{"Privacy Policy"}</a></li>
                        </ul>
                    </div>

                    <div>
                        <h4>{"Contact"}</h4>
                        <ul class="footer-links">
                            <li>
                                <a href={config::mailto_contact()}>
                                    <SvgIcon icon={Icon::Mail} />
                                    {config::CONTACT_EMAIL}
                                </a>
                            </li>
                            <li>
                                <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer">
                                    <SvgIcon icon={Icon::Github} />
                                    {"GitHub"}
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright_line(year)}</p>
                    <p>{"Made with 💚 for communities everywhere"}</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_site_and_year() {
        assert_eq!(copyright_line(2025), "© 2025 Daanveer. All rights reserved.");
    }
}
