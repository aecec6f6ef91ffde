use leptos::html::Main;
use leptos::*;
use web_sys::Event;

use crate::app::components::about::AboutSection;
use crate::app::components::contact::ContactSection;
use crate::app::components::drinks::DrinksSection;
use crate::app::components::footer::SiteFooter;
use crate::app::components::hero::HeroSection;
use crate::app::components::menu::MenuSection;
use crate::app::components::navbar::shrink_nav;
use crate::app::components::navbar::Navbar;
use crate::app::components::specialties::SpecialtiesSection;
use crate::app::components::toast::Toast;
use crate::app::global_state::GlobalState;

#[component]
pub fn HomePage() -> impl IntoView {
    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");
    let scroll_el = create_node_ref::<Main>();
    let nav_tran = global_state.nav_tran;

    let on_scroll = move |_: Event| {
        let Some(scroll_el) = scroll_el.get() else {
            return;
        };
        let y = scroll_el.scroll_top();
        shrink_nav(nav_tran, y as u32);
    };

    view! {
        <main on:scroll=on_scroll _ref=scroll_el class="relative flex flex-col h-[100dvh] overflow-y-auto overflow-x-hidden scroll-smooth">
            <Navbar/>
            <HeroSection/>
            <AboutSection/>
            <SpecialtiesSection/>
            <DrinksSection/>
            <MenuSection/>
            <ContactSection/>
            <SiteFooter/>
            <Toast/>
        </main>
    }
}
