use leptos::*;

use crate::app::utils::SectionUrl;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Cerveja Gelada",
        description: "Sempre na temperatura perfeita",
    },
    Feature {
        title: "Ambiente Acolhedor",
        description: "Para reunir amigos e família",
    },
    Feature {
        title: "Anos de Tradição",
        description: "Receitas passadas por gerações",
    },
    Feature {
        title: "Feito com Amor",
        description: "Cada prato é especial",
    },
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=SectionUrl::Sobre.id() class="py-24 relative overflow-hidden">
            <div class="neon-line absolute top-0 left-0 right-0"></div>

            <div class="container mx-auto px-4">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <span class="text-neon-cyan font-display text-sm uppercase tracking-widest mb-4 block">"Sobre Nós"</span>
                        <h2 class="font-display text-4xl md:text-5xl font-bold mb-6">
                            "Tradição que você " <span class="gradient-text">"pode saborear"</span>
                        </h2>
                        <p class="text-warm-white/60 text-lg mb-6 leading-relaxed">
                            "O " <strong>"Bar do Bucho"</strong> " é mais do que um bar — é um ponto de encontro \
                             onde a tradição se mistura com sabores únicos. Conhecido pelas porções generosas e \
                             bem servidas, nosso espaço aconchegante é o lugar perfeito para relaxar com os amigos \
                             após um longo dia."
                        </p>
                        <p class="text-warm-white/60 text-lg leading-relaxed">
                            "Nossas especialidades como a famosa " <span class="text-neon-amber">"Dobradinha com Mocotó"</span>
                            ", o saboroso " <span class="text-neon-magenta">"Fígado"</span>
                            ", o suculento " <span class="text-neon-cyan">"Contra Filé"</span>
                            " e o autêntico " <span class="text-neon-amber">"Feijão Tropeiro"</span>
                            " são preparados com receitas que atravessam gerações."
                        </p>
                    </div>

                    <div class="grid grid-cols-2 gap-6">
                        {FEATURES
                            .iter()
                            .map(|feature| {
                                view! {
                                    <div class="glass-card p-6 group hover:border-neon-cyan/50 transition-all duration-300">
                                        <h3 class="font-display font-semibold mb-2">{feature.title}</h3>
                                        <p class="text-sm text-warm-white/60">{feature.description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
