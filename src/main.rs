use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod styles;
mod components {
    pub mod axis;
    pub mod cards;
    pub mod counter;
    pub mod reveal;
    pub mod scroll_indicator;
    pub mod viewport;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{
    home::Home,
    not_found::NotFound,
};
use styles::RevealAnimations;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/v/:version")]
    Version { version: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home version={config::DEFAULT_VERSION} /> }
        },
        Route::Version { version } => {
            info!("Rendering Home page, version {}", version);
            html! { <Home version={version} /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <RevealAnimations />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!(
        "Starting application, versions: {}",
        content::versions().collect::<Vec<_>>().join(", ")
    );
    yew::Renderer::<App>::new().render();
}
