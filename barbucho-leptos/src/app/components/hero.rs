use leptos::*;
use web_sys::MouseEvent;

use crate::app::utils::scroll_to;
use crate::app::utils::SectionUrl;

#[component]
pub fn HeroSection() -> impl IntoView {
    let goto = move |section: SectionUrl| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            scroll_to(section);
        }
    };

    view! {
        <section id=SectionUrl::Hero.id() class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center max-w-4xl mx-auto">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full border border-neon-cyan/30 bg-neon-cyan/5 mb-8">
                        <span class="text-sm font-medium text-neon-cyan">"O melhor bar da região"</span>
                    </div>

                    <h1 class="font-display text-5xl md:text-7xl lg:text-8xl font-bold mb-6">
                        <span>"Bar do "</span>
                        <span class="text-neon-cyan text-glow-cyan animate-neon-flicker">"Bucho"</span>
                    </h1>

                    <p class="text-xl md:text-2xl lg:text-3xl text-warm-white/60 mb-4">
                        <span class="text-neon-amber text-glow-amber">"Cerveja gelada"</span>
                        " e "
                        <span class="text-neon-magenta text-glow-magenta">"porções incomparáveis"</span>
                    </p>

                    <p class="text-lg text-warm-white/50 mb-12 max-w-2xl mx-auto">
                        "Tradição, sabor e ambiente aconchegante. Venha conhecer o sabor único das nossas especialidades."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <a href=SectionUrl::Cardapio.to_string() on:click=goto(SectionUrl::Cardapio) class="neon-button">
                            "Ver Cardápio"
                        </a>
                        <a href=SectionUrl::Contato.to_string() on:click=goto(SectionUrl::Contato) class="neon-button neon-button-magenta">
                            "Fale Conosco"
                        </a>
                    </div>
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 -translate-x-1/2">
                <a href=SectionUrl::Sobre.to_string() on:click=goto(SectionUrl::Sobre) class="flex flex-col items-center gap-2 text-warm-white/40">
                    <span class="text-xs uppercase tracking-widest">"Scroll"</span>
                    <span class="animate-bounce">"▾"</span>
                </a>
            </div>
        </section>
    }
}
