use chrono::Datelike;
use chrono::Utc;
use leptos::*;

struct SocialLink {
    label: &'static str,
    href: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        href: "#",
    },
    SocialLink {
        label: "Facebook",
        href: "#",
    },
    SocialLink {
        label: "WhatsApp",
        href: "#",
    },
];

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="relative pt-24 pb-8 overflow-hidden">
            <div class="neon-line absolute top-0 left-0 right-0"></div>

            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-3 gap-12 mb-16">
                    <div>
                        <div class="flex items-center gap-3 mb-6">
                            <span class="font-display font-bold text-2xl">"Bar do Bucho"</span>
                        </div>
                        <p class="text-warm-white/60 leading-relaxed">
                            "Tradição, sabor e ambiente aconchegante. O melhor lugar para encontrar os amigos \
                             e saborear porções incomparáveis com cerveja sempre gelada."
                        </p>
                    </div>

                    <div>
                        <h3 class="font-display font-semibold text-lg mb-6">"Localização & Horário"</h3>
                        <div class="space-y-4">
                            <div>
                                <p class="font-medium">"Endereço"</p>
                                <p class="text-warm-white/60 text-sm">"Rua das Porções, 123" <br/> "Centro - São Paulo, SP"</p>
                            </div>
                            <div>
                                <p class="font-medium">"Horário de Funcionamento"</p>
                                <p class="text-warm-white/60 text-sm">"Terça a Domingo" <br/> "17h às 00h"</p>
                            </div>
                            <div>
                                <p class="font-medium">"Telefone"</p>
                                <p class="text-warm-white/60 text-sm">"(11) 99999-9999"</p>
                            </div>
                        </div>
                    </div>

                    <div>
                        <h3 class="font-display font-semibold text-lg mb-6">"Redes Sociais"</h3>
                        <p class="text-warm-white/60 mb-6">
                            "Siga-nos e fique por dentro das novidades e promoções especiais."
                        </p>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            aria-label=social.label
                                            class="px-4 py-2 rounded-full border border-warm-white/20 bg-warm-white/5 text-warm-white/60 hover:text-neon-cyan hover:border-neon-cyan/50 hover:bg-neon-cyan/10 transition-all duration-300"
                                        >
                                            {social.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="pt-8 border-t border-warm-white/10">
                    <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                        <p class="text-sm text-warm-white/60">
                            {format!("© {} Bar do Bucho. Todos os direitos reservados.", year)}
                        </p>
                        <p class="text-sm text-warm-white/60">
                            "Feito com " <span class="text-neon-magenta">"♥"</span> " e muita cerveja gelada"
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
