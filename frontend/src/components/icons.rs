use yew::prelude::*;

/// Every SVG glyph the site draws. Outline glyphs use a 24x24 box with a
/// stroke; the solid ones are filled and some use a 20x20 box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    // advantages
    Clock,
    Car,
    Community,
    Refresh,
    Badge,
    Shield,
    Chart,
    Database,
    Star,
    Home,
    Growth,
    Heart,
    Users,
    Money,
    Share,
    Direct,
    Recycle,
    Verified,
    Receipt,
    Game,
    Trophy,
    Briefcase,
    Gift,
    // landing sections
    Location,
    Lightning,
    Exchange,
    Capsule,
    Search,
    Group,
    Bulb,
    Bell,
    Report,
    Map,
    Atom,
    Layers,
    ShieldSolid,
    CodeSolid,
    BoltSolid,
    // controls
    ChevronLeft,
    ChevronRight,
    ChevronDown,
    ArrowRight,
    ArrowLeft,
    ArrowDown,
    Download,
    Close,
    Mail,
    Github,
    Android,
    Phone,
    Warning,
}

pub struct Glyph {
    pub view_box: &'static str,
    pub solid: bool,
    pub stroke_width: &'static str,
    pub paths: &'static [&'static str],
}

const CHECK_CIRCLE: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";
const SHIELD_CHECK: &str = "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z";
const ARROWS_SWAP: &str = "M8 7h12m0 0l-4-4m4 4l-4 4m0 6H4m0 0l4 4m-4-4l4-4";
const CYCLE: &str = "M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15";
const STAR: &str = "M11.049 2.927c.3-.921 1.603-.921 1.902 0l1.519 4.674a1 1 0 00.95.69h4.915c.969 0 1.371 1.24.588 1.81l-3.976 2.888a1 1 0 00-.363 1.118l1.518 4.674c.3.922-.755 1.688-1.538 1.118l-3.976-2.888a1 1 0 00-1.176 0l-3.976 2.888c-.783.57-1.838-.197-1.538-1.118l1.518-4.674a1 1 0 00-.363-1.118l-3.976-2.888c-.784-.57-.38-1.81.588-1.81h4.914a1 1 0 00.951-.69l1.519-4.674z";
const HEART: &str = "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z";
const COIN: &str = "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z";
const CYLINDER: &str = "M4 7v10c0 2.21 3.582 4 8 4s8-1.79 8-4V7M4 7c0 2.21 3.582 4 8 4s8-1.79 8-4M4 7c0-2.21 3.582-4 8-4s8 1.79 8 4m0 5c0 2.21-3.582 4-8 4s-8-1.79-8-4";
const BOLT: &str = "M13 10V3L4 14h7v7l9-11h-7z";
const TRAY_DOWN: &str = "M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-4l-4 4m0 0l-4-4m4 4V4";

fn outline(paths: &'static [&'static str]) -> Glyph {
    Glyph {
        view_box: "0 0 24 24",
        solid: false,
        stroke_width: "1.5",
        paths,
    }
}

fn control(paths: &'static [&'static str]) -> Glyph {
    Glyph {
        view_box: "0 0 24 24",
        solid: false,
        stroke_width: "2",
        paths,
    }
}

fn solid(view_box: &'static str, paths: &'static [&'static str]) -> Glyph {
    Glyph {
        view_box,
        solid: true,
        stroke_width: "0",
        paths,
    }
}

impl Icon {
    /// Resolves the icon names used by the feature data. Unknown names draw
    /// a star.
    pub fn from_name(name: &str) -> Icon {
        match name {
            "clock" => Icon::Clock,
            "car" => Icon::Car,
            "community" => Icon::Community,
            "refresh" => Icon::Refresh,
            "badge" => Icon::Badge,
            "shield" => Icon::Shield,
            "chart" => Icon::Chart,
            "database" => Icon::Database,
            "star" => Icon::Star,
            "home" => Icon::Home,
            "growth" => Icon::Growth,
            "heart" => Icon::Heart,
            "users" => Icon::Users,
            "money" => Icon::Money,
            "share" => Icon::Share,
            "direct" => Icon::Direct,
            "recycle" => Icon::Recycle,
            "verified" => Icon::Verified,
            "receipt" => Icon::Receipt,
            "game" => Icon::Game,
            "trophy" => Icon::Trophy,
            "briefcase" => Icon::Briefcase,
            "gift" => Icon::Gift,
            "location" => Icon::Location,
            "lightning" => Icon::Lightning,
            "exchange" => Icon::Exchange,
            _ => Icon::Star,
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            Icon::Clock => outline(&["M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z"]),
            Icon::Car | Icon::Exchange => outline(&[ARROWS_SWAP]),
            Icon::Community => outline(&["M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0z"]),
            Icon::Refresh | Icon::Recycle => outline(&[CYCLE]),
            Icon::Badge => outline(&["M9 12l2 2 4-4M7.835 4.697a3.42 3.42 0 001.946-.806 3.42 3.42 0 014.438 0 3.42 3.42 0 001.946.806 3.42 3.42 0 013.138 3.138 3.42 3.42 0 00.806 1.946 3.42 3.42 0 010 4.438 3.42 3.42 0 00-.806 1.946 3.42 3.42 0 01-3.138 3.138 3.42 3.42 0 00-1.946.806 3.42 3.42 0 01-4.438 0 3.42 3.42 0 00-1.946-.806 3.42 3.42 0 01-3.138-3.138 3.42 3.42 0 00-.806-1.946 3.42 3.42 0 010-4.438 3.42 3.42 0 00.806-1.946 3.42 3.42 0 013.138-3.138z"]),
            Icon::Shield => outline(&[SHIELD_CHECK]),
            Icon::Chart => outline(&["M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z"]),
            Icon::Database => outline(&[CYLINDER]),
            Icon::Star => outline(&[STAR]),
            Icon::Home => outline(&["M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6"]),
            Icon::Growth => outline(&["M13 7h8m0 0v8m0-8l-8 8-4-4-6 6"]),
            Icon::Heart => outline(&[HEART]),
            Icon::Users => outline(&["M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z"]),
            Icon::Money => outline(&[COIN]),
            Icon::Share => outline(&["M8.684 13.342C8.886 12.938 9 12.482 9 12c0-.482-.114-.938-.316-1.342m0 2.684a3 3 0 110-2.684m0 2.684l6.632 3.316m-6.632-6l6.632-3.316m0 0a3 3 0 105.367-2.684 3 3 0 00-5.367 2.684zm0 9.316a3 3 0 105.368 2.684 3 3 0 00-5.368-2.684z"]),
            Icon::Direct => outline(&["M13 9l3 3m0 0l-3 3m3-3H8m13 0a9 9 0 11-18 0 9 9 0 0118 0z"]),
            Icon::Verified => outline(&[CHECK_CIRCLE]),
            Icon::Receipt => outline(&["M9 14l6-6m-5.5.5h.01m4.99 5h.01M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16l3.5-2 3.5 2 3.5-2 3.5 2zM10 8.5a.5.5 0 11-1 0 .5.5 0 011 0zm5 5a.5.5 0 11-1 0 .5.5 0 011 0z"]),
            Icon::Game => outline(&[
                "M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 1 0 000-1.664z",
                "M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            ]),
            Icon::Trophy => outline(&["M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z"]),
            Icon::Briefcase => outline(&["M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"]),
            Icon::Gift => outline(&["M12 8v13m0-13V6a2 2 0 112 2h-2zm0 0V5.5A2.5 2.5 0 109.5 8H12zm-7 4h14M5 12a2 2 0 110-4h14a2 2 0 110 4M5 12v7a2 2 0 002 2h10a2 2 0 002-2v-7"]),
            Icon::Location => outline(&[
                "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
                "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
            ]),
            Icon::Lightning => outline(&[BOLT]),
            Icon::Capsule => outline(&["M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10"]),
            Icon::Search => outline(&["M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"]),
            Icon::Group => outline(&["M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z"]),
            Icon::Bulb => outline(&["M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z"]),
            Icon::Bell => outline(&["M15 17h5l-1.405-1.405A2.032 2.032 0 0118 14.158V11a6.002 6.002 0 00-4-5.659V5a2 2 0 10-4 0v.341C7.67 6.165 6 8.388 6 11v3.159c0 .538-.214 1.055-.595 1.436L4 17h5m6 0v1a3 3 0 11-6 0v-1m6 0H9"]),
            Icon::Report => outline(&["M9 17v-2m3 2v-4m3 4v-6m2 10H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"]),
            Icon::Map => outline(&["M9 20l-5.447-2.724A1 1 0 013 16.382V5.618a1 1 0 011.447-.894L9 7m0 13l6-3m-6 3V7m6 10l5.447 2.724A1 1 0 0021 18.382V7.618a1 1 0 00-.553-.894L15 4m0 13V4m0 0L9 7"]),
            Icon::Atom => solid("0 0 24 24", &[
                "M12 12.75a.75.75 0 100-1.5.75.75 0 000 1.5zM12 9.25a2.75 2.75 0 100 5.5 2.75 2.75 0 000-5.5z",
                "M12 2C6.477 2 2 6.477 2 12s4.477 10 10 10 10-4.477 10-10S17.523 2 12 2zM4 12a8 8 0 1116 0 8 8 0 01-16 0z",
            ]),
            Icon::Layers => solid("0 0 24 24", &["M12 2L2 7l10 5 10-5-10-5zM2 17l10 5 10-5M2 12l10 5 10-5"]),
            Icon::ShieldSolid => solid("0 0 20 20", &["M2.166 4.999A11.954 11.954 0 0010 1.944 11.954 11.954 0 0017.834 5c.11.65.166 1.32.166 2.001 0 5.225-3.34 9.67-8 11.317C5.34 16.67 2 12.225 2 7c0-.682.057-1.35.166-2.001zm11.541 3.708a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z"]),
            Icon::CodeSolid => solid("0 0 20 20", &["M5 2a2 2 0 00-2 2v14l3.5-2 3.5 2 3.5-2 3.5 2V4a2 2 0 00-2-2H5zm4.707 5.707a1 1 0 00-1.414-1.414l-3 3a1 1 0 000 1.414l3 3a1 1 0 001.414-1.414L7.414 10l2.293-2.293z"]),
            Icon::BoltSolid => solid("0 0 20 20", &["M11.3 1.046A1 1 0 0112 2v5h4a1 1 0 01.82 1.573l-7 10A1 1 0 018 18v-5H4a1 1 0 01-.82-1.573l7-10a1 1 0 011.12-.38z"]),
            Icon::ChevronLeft => control(&["M15 19l-7-7 7-7"]),
            Icon::ChevronRight => control(&["M9 5l7 7-7 7"]),
            Icon::ChevronDown => control(&["M19 9l-7 7-7-7"]),
            Icon::ArrowRight => control(&["M17 8l4 4m0 0l-4 4m4-4H3"]),
            Icon::ArrowLeft => control(&["M10 19l-7-7m0 0l7-7m-7 7h18"]),
            Icon::ArrowDown => control(&["M19 14l-7 7m0 0l-7-7m7 7V3"]),
            Icon::Download => control(&[TRAY_DOWN]),
            Icon::Close => control(&["M6 18L18 6M6 6l12 12"]),
            Icon::Mail => control(&["M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"]),
            Icon::Github => solid("0 0 24 24", &["M12 2C6.477 2 2 6.484 2 12.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0112 6.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.202 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.943.359.309.678.92.678 1.855 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0022 12.017C22 6.484 17.522 2 12 2z"]),
            Icon::Android => solid("0 0 24 24", &["M17.6 9.48l1.84-3.18c.16-.31.04-.69-.26-.85a.637.637 0 00-.83.22l-1.88 3.24a11.463 11.463 0 00-8.94 0L5.65 5.67a.643.643 0 00-.87-.2c-.28.18-.37.54-.22.83L6.4 9.48A10.78 10.78 0 001 18h22a10.78 10.78 0 00-5.4-8.52zM7 15.25a1.25 1.25 0 110-2.5 1.25 1.25 0 010 2.5zm10 0a1.25 1.25 0 110-2.5 1.25 1.25 0 010 2.5z"]),
            Icon::Phone => solid("0 0 24 24", &["M17 1.01L7 1c-1.1 0-2 .9-2 2v18c0 1.1.9 2 2 2h10c1.1 0 2-.9 2-2V3c0-1.1-.9-1.99-2-1.99zM17 19H7V5h10v14z"]),
            Icon::Warning => solid("0 0 20 20", &["M8.257 3.099c.765-1.36 2.722-1.36 3.486 0l5.58 9.92c.75 1.334-.213 2.98-1.742 2.98H4.42c-1.53 0-2.493-1.646-1.743-2.98l5.58-9.92zM11 13a1 1 0 11-2 0 1 1 0 012 0zm-1-8a1 1 0 00-1 1v3a1 1 0 002 0V6a1 1 0 00-1-1z"]),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SvgIconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(SvgIcon)]
pub fn svg_icon(props: &SvgIconProps) -> Html {
    let glyph = props.icon.glyph();
    let paths = glyph.paths.iter().map(|d| {
        if glyph.solid {
            html! { <path fill-rule="evenodd" clip-rule="evenodd" d={*d} /> }
        } else {
            html! {
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width={glyph.stroke_width}
                    d={*d}
                />
            }
        }
    });

    if glyph.solid {
        html! {
            <svg class={props.class.clone()} fill="currentColor" viewBox={glyph.view_box} aria-hidden="true">
                { for paths }
            </svg>
        }
    } else {
        html! {
            <svg class={props.class.clone()} fill="none" stroke="currentColor" viewBox={glyph.view_box} aria-hidden="true">
                { for paths }
            </svg>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_star() {
        assert_eq!(Icon::from_name("unicorn"), Icon::Star);
        assert_eq!(Icon::from_name(""), Icon::Star);
    }

    #[test]
    fn known_names_resolve() {
        assert_eq!(Icon::from_name("gift"), Icon::Gift);
        assert_eq!(Icon::from_name("recycle"), Icon::Recycle);
    }

    #[test]
    fn every_advantage_icon_in_the_feature_table_is_known() {
        for feature in crate::data::features::FEATURES {
            for advantage in feature.advantages {
                let icon = Icon::from_name(advantage.icon);
                assert!(
                    icon != Icon::Star || advantage.icon == "star",
                    "{} has an unknown icon {}",
                    feature.id,
                    advantage.icon
                );
            }
        }
    }
}
