use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod components;
mod config;
mod data;
mod intro;
mod pages;
mod utils;

use intro::sequencer::gate_key;
use intro::IntroGate;
use pages::feature_detail::FeatureDetail;
use pages::landing::Landing;
use pages::privacy_policy::PrivacyPolicy;
use utils::session_flags::SessionStore;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/features/:slug")]
    FeatureDetail { slug: String },
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Home => html! { <Landing /> },
        Route::FeatureDetail { slug } => html! { <FeatureDetail slug={slug.clone()} /> },
        Route::Privacy => html! { <PrivacyPolicy /> },
        Route::NotFound => {
            log::info!("No page at this path, redirecting home");
            return html! { <Redirect<Route> to={Route::Home} /> };
        }
    };

    // The intro only plays on the landing page; other routes pass straight through.
    html! {
        <IntroGate key={gate_key(&route)} route={route.clone()} store={SessionStore::browser()}>
            { page }
        </IntroGate>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    log::info!("Starting {}", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
