use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::carousel::ImageCarousel;
use crate::components::features_grid::FeaturesGrid;
use crate::components::footer::Footer;
use crate::components::hero::{scroll_to_section, Hero};
use crate::components::how_it_works::HowItWorks;
use crate::components::impact::Impact;
use crate::components::navbar::Navbar;
use crate::components::roadmap::Roadmap;
use crate::components::tech_stack::TechStack;
use crate::config;
use crate::data::slides::SLIDES;

/// Delay before following a `#section` fragment, so the sections exist.
const HASH_SCROLL_DELAY_MS: u32 = 100;

fn section_from_hash(hash: &str) -> Option<&str> {
    hash.strip_prefix('#').filter(|id| !id.is_empty())
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Links such as "/#features" from the detail pages land here with a fragment.
    use_effect_with_deps(
        |_| {
            let mut pending = None;
            if let Some(window) = web_sys::window() {
                let hash = window.location().hash().unwrap_or_default();
                match section_from_hash(&hash) {
                    Some(id) => {
                        let id = id.to_string();
                        pending = Some(Timeout::new(HASH_SCROLL_DELAY_MS, move || {
                            scroll_to_section(&id);
                        }));
                    }
                    None => window.scroll_to_with_x_and_y(0.0, 0.0),
                }
            }
            move || drop(pending)
        },
        (),
    );

    html! {
        <div class="landing">
            <Navbar />
            <main>
                <Hero />
                <ImageCarousel slides={SLIDES} />
                <FeaturesGrid />
                <HowItWorks />
                <Impact />
                if config::SHOW_ROADMAP {
                    <Roadmap />
                }
                if config::SHOW_TECH_STACK {
                    <TechStack />
                }
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_names_the_section() {
        assert_eq!(section_from_hash("#features"), Some("features"));
        assert_eq!(section_from_hash("#"), None);
        assert_eq!(section_from_hash(""), None);
    }
}
