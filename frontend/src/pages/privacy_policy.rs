use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::{copyright_line, current_year};
use crate::components::icons::{Icon, SvgIcon};
use crate::config;
use crate::Route;

pub const LAST_UPDATED: &str = "12 December 2024";

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let privacy_css = r#"
        .legal-page {
            min-height: 100vh;
            background: #f5f7f6;
        }
        .legal-header {
            background: #fff;
            border-bottom: 1px solid #e5e7eb;
            padding: 1.25rem 0;
        }
        .legal-header .container {
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .legal-brand {
            display: flex;
            align-items: center;
            gap: 0.5rem;
            font-weight: 700;
            font-size: 1.25rem;
            color: #121212;
            text-decoration: none;
        }
        .legal-brand img { width: 2rem; height: 2rem; }
        .legal-back {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            color: #22a45d;
            font-weight: 500;
            text-decoration: none;
        }
        .legal-back:hover { text-decoration: underline; }
        .legal-back svg { width: 1rem; height: 1rem; }
        .legal-body {
            max-width: 48rem;
            margin: 0 auto;
            padding: 3rem 1.5rem 4rem;
        }
        .legal-body h1 {
            font-size: 2.5rem;
            color: #121212;
            margin-bottom: 0.5rem;
        }
        .legal-updated {
            color: #6b7280;
            margin-bottom: 2.5rem;
        }
        .legal-card {
            background: #fff;
            border-radius: 1rem;
            padding: 2rem;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.05);
        }
        .legal-card section + section { margin-top: 2rem; }
        .legal-card h2 {
            font-size: 1.5rem;
            color: #121212;
            margin-bottom: 1rem;
        }
        .legal-card h3 {
            font-size: 1.125rem;
            color: #121212;
            margin: 1.25rem 0 0.5rem;
        }
        .legal-card p,
        .legal-card li {
            color: #4b5563;
            line-height: 1.7;
        }
        .legal-card p + p { margin-top: 0.75rem; }
        .legal-card ul {
            padding-left: 1.5rem;
            margin: 0.5rem 0;
        }
        .legal-card li { margin-bottom: 0.375rem; }
        .legal-card a { color: #22a45d; }
        .legal-note {
            background: rgba(34, 164, 93, 0.08);
            border-left: 4px solid #22a45d;
            padding: 0.75rem 1rem;
            border-radius: 0.5rem;
            margin-top: 0.75rem;
        }
        .legal-footer-nav {
            margin-top: 2.5rem;
            text-align: center;
        }
        .legal-footer {
            background: #121212;
            color: #9ca3af;
            text-align: center;
            padding: 2rem 0;
            font-size: 0.875rem;
        }
        @media (max-width: 768px) {
            .legal-body h1 { font-size: 2rem; }
            .legal-card { padding: 1.5rem; }
        }
    "#;

    html! {
        <div class="legal-page">
            <style>{privacy_css}</style>
            <header class="legal-header">
                <div class="container">
                    <Link<Route> to={Route::Home} classes="legal-brand">
                        <img src={config::LOGO_PLACEHOLDER_PATH} alt={format!("{} Logo", config::SITE_NAME)} />
                        <span>{config::SITE_NAME}</span>
                    </Link<Route>>
                    <Link<Route> to={Route::Home} classes="legal-back">
                        <SvgIcon icon={Icon::ArrowLeft} />
                        {"Back to Home"}
                    </Link<Route>>
                </div>
            </header>

            <main class="legal-body">
                <h1>{"Privacy Policy"}</h1>
                <p class="legal-updated">{format!("Last updated: {}", LAST_UPDATED)}</p>

                <div class="legal-card">
                    <section>
                        <h2>{"Introduction"}</h2>
                        <p>
                            {format!("Welcome to {}. We are committed to protecting your privacy and ensuring the security of your personal information. \
                              This Privacy Policy explains how we collect, use, disclose, and safeguard your information when you use our mobile application and website.", config::SITE_NAME)}
                        </p>
                        <p>
                            {"By using our services, you agree to the collection and use of information in accordance with this policy."}
                        </p>
                    </section>

                    <section>
                        <h2>{"Information We Collect"}</h2>
                        <h3>{"Personal Information"}</h3>
                        <ul>
                            <li>{"Name and email address"}</li>
                            <li>{"Phone number (optional)"}</li>
                            <li>{"Profile photo (optional)"}</li>
                            <li>{"Skills and interests you choose to share"}</li>
                        </ul>
                        <h3>{"Location Data"}</h3>
                        <ul>
                            <li>{"Approximate location to show nearby volunteering opportunities"}</li>
                            <li>{"Precise location for event check-ins (only when you check in)"}</li>
                            <li>{"Location preferences you set in the app"}</li>
                        </ul>
                        <p class="legal-note">
                            {"You can disable location access at any time from your device settings. Some features, such as nearby discovery and check-ins, will not work without it."}
                        </p>
                        <h3>{"Activity Data"}</h3>
                        <ul>
                            <li>{"Events you register for and attend"}</li>
                            <li>{"Volunteer hours and verified contributions"}</li>
                            <li>{"Photos uploaded as proof of participation"}</li>
                            <li>{"Karma points and badges earned"}</li>
                        </ul>
                    </section>

                    <section>
                        <h2>{"How We Use Your Information"}</h2>
                        <ul>
                            <li>{"To match you with relevant volunteering opportunities near you"}</li>
                            <li>{"To verify your participation and log your impact hours"}</li>
                            <li>{"To generate your Impact Resume and award Karma Points"}</li>
                            <li>{"To send event reminders and important updates"}</li>
                            <li>{"To help NGOs coordinate volunteers for their events"}</li>
                            <li>{"To improve our app and develop new features"}</li>
                            <li>{"To keep the community safe and prevent misuse"}</li>
                        </ul>
                    </section>

                    <section>
                        <h2>{"Information Sharing"}</h2>
                        <h3>{"With NGOs and Organizations"}</h3>
                        <p>
                            {"When you register for an event, the organizing NGO receives your name and contact details so they can coordinate with you."}
                        </p>
                        <h3>{"Public Profile"}</h3>
                        <p>
                            {"Your name, profile photo, badges and verified impact hours may be visible to other users if you choose to keep your profile public."}
                        </p>
                        <h3>{"We Do NOT Sell Your Data"}</h3>
                        <p>
                            {"We never sell, rent, or trade your personal information to third parties for marketing purposes."}
                        </p>
                    </section>

                    <section>
                        <h2>{"Data Security"}</h2>
                        <ul>
                            <li>{"Encrypted data transmission over HTTPS"}</li>
                            <li>{"Secure storage of passwords and credentials"}</li>
                            <li>{"Restricted access to personal data within our team"}</li>
                            <li>{"Regular reviews of our security practices"}</li>
                        </ul>
                        <p>
                            {"No method of transmission over the internet or electronic storage is completely secure. We strive to protect your data but cannot guarantee absolute security."}
                        </p>
                    </section>

                    <section>
                        <h2>{"Data Retention"}</h2>
                        <p>
                            {"We keep your information for as long as your account is active or as needed to provide our services. \
                              When you delete your account, we remove your personal data within 30 days, except where we are required to keep it by law."}
                        </p>
                    </section>

                    <section>
                        <h2>{"Your Rights"}</h2>
                        <ul>
                            <li><strong>{"Access: "}</strong>{"Request a copy of the personal data we hold about you"}</li>
                            <li><strong>{"Correction: "}</strong>{"Update or correct inaccurate information"}</li>
                            <li><strong>{"Deletion: "}</strong>{"Ask us to delete your account and associated data"}</li>
                            <li><strong>{"Portability: "}</strong>{"Receive your data in a portable format"}</li>
                            <li><strong>{"Opt-out: "}</strong>{"Unsubscribe from non-essential notifications"}</li>
                        </ul>
                        <p>
                            {"To exercise any of these rights, contact us at "}
                            <a href={config::mailto_contact()}>{config::CONTACT_EMAIL}</a>
                            {"."}
                        </p>
                    </section>

                    <section>
                        <h2>{"Children's Privacy"}</h2>
                        <p>
                            {format!("{} is not intended for children under 13. We do not knowingly collect personal information from children under 13. \
                              If you believe a child has provided us with personal data, please contact us and we will delete it.", config::SITE_NAME)}
                        </p>
                    </section>

                    <section>
                        <h2>{"Changes to This Policy"}</h2>
                        <p>
                            {"We may update this Privacy Policy from time to time. We will notify you of any significant changes through the app or by email. \
                              The date at the top of this page shows when it was last revised."}
                        </p>
                    </section>

                    <section>
                        <h2>{"Contact Us"}</h2>
                        <p>{"If you have any questions about this Privacy Policy, please reach out:"}</p>
                        <ul>
                            <li>
                                <strong>{"Email: "}</strong>
                                <a href={config::mailto_contact()}>{config::CONTACT_EMAIL}</a>
                            </li>
                            <li>
                                <strong>{"GitHub: "}</strong>
                                <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer">{config::GITHUB_URL}</a>
                            </li>
                        </ul>
                    </section>
                </div>

                <div class="legal-footer-nav">
                    <Link<Route> to={Route::Home} classes="legal-back">
                        <SvgIcon icon={Icon::ArrowLeft} />
                        {"Back to Home"}
                    </Link<Route>>
                </div>
            </main>

            <footer class="legal-footer">
                <p>{copyright_line(current_year())}</p>
            </footer>
        </div>
    }
}
