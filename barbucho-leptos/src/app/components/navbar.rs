use leptos::*;
use web_sys::MouseEvent;

use crate::app::global_state::GlobalState;
use crate::app::utils::scroll_to;
use crate::app::utils::SectionUrl;

pub fn shrink_nav(nav_tran: RwSignal<bool>, y: u32) {
    if y > 100 {
        if nav_tran.with_untracked(|&s| s) {
            nav_tran.set(false);
        }
    } else {
        if nav_tran.with_untracked(|&s| !s) {
            nav_tran.set(true);
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let global_state = use_context::<GlobalState>().expect("Failed to provide global state");
    let nav_tran = global_state.nav_tran;
    let nav_open = global_state.nav_open;

    let on_nav_click = move |_: MouseEvent| {
        nav_open.update(|open: &mut bool| *open = !*open);
    };

    let goto_section = move |section: SectionUrl| {
        move |_: MouseEvent| {
            nav_open.set(false);
            scroll_to(section);
        }
    };

    view! {
        <nav class=move || format!(
            "fixed backdrop-blur w-full top-0 z-[100] px-6 2xl:px-[6rem] flex duration-500 bg-gradient-to-r from-dark-night/90 to-dark-night/60 {} {}",
            if nav_tran.get() && !nav_open.get() { " py-2 " } else { "" },
            if nav_open.get() { "w-[100vw] h-[100vh] flex-col gap-6" } else { "items-center justify-between transition-all gap-2" },
        )>
            <div class=move || format!("flex gap-6 items-center {}", if nav_open.get() { " flex-col w-full " } else { " " })>
                {move || {
                    if nav_open.get() {
                        view! {
                            <div class="w-full flex justify-between font-display font-bold text-[2rem]">
                                <div>"Bar do Bucho"</div>
                                <button on:click=on_nav_click>"X"</button>
                            </div>
                        }
                    } else {
                        view! {
                            <div>
                                <a href="/" class="font-display font-bold text-[2rem] text-neon-cyan text-glow-cyan">"Bar do Bucho"</a>
                            </div>
                        }
                    }
                }}
                <ul class=move || format!(
                    " gap-2 text-center {}",
                    if nav_open.get() { " flex-col text-[2rem] flex h-full" } else { "hidden md:flex text-[1rem] " },
                )>
                    {SectionUrl::NAV
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <a
                                        href=section.to_string()
                                        on:click=goto_section(section)
                                        class="cursor-pointer border-b-[0.2rem] border-transparent hover:border-neon-cyan/40 text-warm-white/60 hover:text-warm-white transition duration-300 font-bold"
                                    >
                                        {section.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class=move || format!(" flex gap-2 {}", if nav_open.get() { " flex-col justify-center items-center " } else { " " })>
                <a
                    href=SectionUrl::Contato.to_string()
                    on:click=goto_section(SectionUrl::Contato)
                    class=move || format!(
                        " h-12 gap-2 items-center text-[1rem] font-black neon-button-magenta rounded-3xl px-4 py-[0.15rem] transition-colors duration-300 {}",
                        if nav_open.get() { "flex" } else { "hidden md:flex" },
                    )
                >
                    "Reservar"
                </a>

                <button
                    class=move || format!(" md:hidden h-[48px] text-[2rem] {}", if nav_open.get() { "hidden" } else { "block" })
                    on:click=on_nav_click
                >
                    "☰"
                </button>
            </div>
        </nav>
    }
}
