// Static site configuration. Values are baked in at compile time; the
// download URL can be overridden with DAANVEER_APK_URL when building.

pub const SITE_NAME: &str = "Daanveer";
pub const SITE_TAGLINE: &str = "Local volunteering made simple";
pub const SITE_DESCRIPTION: &str =
    "A location-first platform that connects volunteers, NGOs and local communities with verified impact.";

pub const CONTACT_EMAIL: &str = "daanveer.co.tc@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/danveer-co";
pub const PRIVACY_POLICY_URL: &str = "/privacy";

const DEFAULT_APK_DOWNLOAD_URL: &str = "/downloads/daanveer.apk";
pub const APK_FILE_NAME: &str = "daanveer.apk";

pub const INTRO_VIDEO_PATH: &str = "/splash_video.mp4";
pub const LOGO_PATH: &str = "/daanveer_logo.png";
pub const LOGO_PLACEHOLDER_PATH: &str = "/assets/logo.svg";

// Session storage keys
pub const VIDEO_SHOWN_KEY: &str = "daanveer_video_shown";
pub const SPLASH_SHOWN_KEY: &str = "daanveer_splash_shown";

// Feature flags
pub const SHOW_ROADMAP: bool = true;
pub const SHOW_TECH_STACK: bool = true;

pub fn apk_download_url() -> &'static str {
    option_env!("DAANVEER_APK_URL").unwrap_or(DEFAULT_APK_DOWNLOAD_URL)
}

pub fn mailto_contact() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
