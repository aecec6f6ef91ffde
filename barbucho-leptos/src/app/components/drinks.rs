use barbucho_state::menu::DRINK_GROUPS;
use leptos::*;

use crate::app::utils::accent_bg;
use crate::app::utils::accent_text;
use crate::app::utils::SectionUrl;

#[component]
pub fn DrinksSection() -> impl IntoView {
    view! {
        <section id=SectionUrl::Bebidas.id() class="py-24 relative overflow-hidden">
            <div class="neon-line absolute top-0 left-0 right-0"></div>

            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <span class="text-neon-cyan font-display text-sm uppercase tracking-widest mb-4 block">"Bebidas"</span>
                    <h2 class="font-display text-4xl md:text-5xl font-bold mb-4">
                        <span class="text-neon-amber text-glow-amber">"Extremamente"</span>
                        " "
                        <span class="gradient-text">"Geladas"</span>
                    </h2>
                    <p class="text-warm-white/60 text-lg max-w-2xl mx-auto">
                        "Nada melhor que uma bebida gelada para acompanhar nossas porções"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    {DRINK_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="glass-card p-8 group hover:border-neon-cyan/50 transition-all duration-500 relative overflow-hidden">
                                    <div class="flex items-center gap-4 mb-6">
                                        <div class=format!("p-4 rounded-xl {}", accent_bg(group.color))>
                                            <span class=format!("text-2xl font-bold {}", accent_text(group.color))>"❆"</span>
                                        </div>
                                        <div>
                                            <h3 class="font-display text-2xl font-bold">{group.title}</h3>
                                            <p class="text-sm text-warm-white/60">{group.description}</p>
                                        </div>
                                    </div>

                                    <div class="flex flex-wrap gap-2">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <span class="px-3 py-1.5 rounded-full bg-warm-white/5 text-sm text-warm-white/60 hover:bg-neon-cyan/10 hover:text-neon-cyan transition-colors cursor-default">
                                                        {*item}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>

                                    <div class="mt-6 inline-flex items-center gap-2 px-4 py-2 rounded-full border border-neon-cyan/30 bg-neon-cyan/5">
                                        <span class="text-xs font-medium text-neon-cyan">"Super Gelada"</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
