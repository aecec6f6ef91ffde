use leptos::*;

use crate::app::components::navbar::Navbar;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="grid place-items-center min-h-[100dvh]">
            <Navbar/>
            <div class="text-center">
                <h1 class="font-display text-6xl font-bold mb-4">"404"</h1>
                <p class="text-warm-white/60 mb-8">"Essa página não existe."</p>
                <a href="/" class="neon-button">"Voltar ao início"</a>
            </div>
        </main>
    }
}
