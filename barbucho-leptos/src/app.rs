use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use global_state::GlobalState;
use pages::home::HomePage;
use pages::not_found::NotFound;

pub mod components;
pub mod delivery;
pub mod global_state;
pub mod pages;
pub mod utils;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(GlobalState::new());

    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");

    view! {
        <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
        <meta name="description" content="Bar do Bucho - cerveja gelada e porções incomparáveis"/>
        <meta name="keywords" content="bar,porções,petiscos,cerveja,bar do bucho"/>
        <meta name="twitter:title" content="Bar do Bucho"/>
        <meta name="twitter:description" content="Cerveja gelada e porções incomparáveis!"/>
        <meta name="twitter:card" content="summary"/>

        <Title text="Bar do Bucho"/>
        <Body class=move || format!("bg-dark-night text-warm-white bg-fixed bg-cover bg-no-repeat overflow-x-hidden {}", if global_state.nav_open.get() { "overflow-hidden w-screen h-[dvh]" } else { "" })/>
        <Router>
            <Routes>
                <Route path="" view=HomePage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}
