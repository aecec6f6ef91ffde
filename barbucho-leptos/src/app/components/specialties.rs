use barbucho_state::menu::SPECIALTIES;
use leptos::*;

use crate::app::utils::accent_bg;
use crate::app::utils::accent_text;
use crate::app::utils::SectionUrl;

#[component]
pub fn SpecialtiesSection() -> impl IntoView {
    view! {
        <section id=SectionUrl::Especialidades.id() class="py-24 relative overflow-hidden">
            <div class="neon-line absolute top-0 left-0 right-0"></div>

            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <span class="text-neon-cyan font-display text-sm uppercase tracking-widest mb-4 block">"Nossas Especialidades"</span>
                    <h2 class="font-display text-4xl md:text-5xl font-bold mb-4">
                        "Porções que fazem " <span class="gradient-text">"história"</span>
                    </h2>
                    <p class="text-warm-white/60 text-lg max-w-2xl mx-auto">
                        "Cada prato é preparado com ingredientes selecionados e muito carinho"
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {SPECIALTIES
                        .iter()
                        .map(|specialty| {
                            view! {
                                <div class="glass-card p-8 group hover:border-neon-cyan/50 transition-all duration-500">
                                    <div class="flex items-start justify-between mb-4">
                                        <div class=format!("flex items-center gap-1 px-3 py-1 rounded-full {}", accent_bg(specialty.color))>
                                            <span class=format!("text-xs font-medium {}", accent_text(specialty.color))>
                                                {specialty.badge}
                                            </span>
                                        </div>
                                    </div>

                                    <h3 class="font-display text-2xl font-bold mb-3 group-hover:text-neon-cyan transition-colors">
                                        {specialty.name}
                                    </h3>

                                    <p class="text-warm-white/60 leading-relaxed">{specialty.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
