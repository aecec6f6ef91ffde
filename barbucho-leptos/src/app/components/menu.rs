use barbucho_state::menu::MENU_CATEGORIES;
use leptos::*;

use crate::app::utils::accent_tab;
use crate::app::utils::SectionUrl;

/// Full menu with one tab per category. Switching tabs is purely local
/// state, the data itself is static.
#[component]
pub fn MenuSection() -> impl IntoView {
    let active_category = create_rw_signal(0usize);

    view! {
        <section id=SectionUrl::Cardapio.id() class="py-24 relative overflow-hidden">
            <div class="neon-line absolute top-0 left-0 right-0"></div>

            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <span class="text-neon-cyan font-display text-sm uppercase tracking-widest mb-4 block">"Cardápio Completo"</span>
                    <h2 class="font-display text-4xl md:text-5xl font-bold mb-4">
                        "Tudo que você " <span class="gradient-text">"precisa"</span>
                    </h2>
                    <p class="text-warm-white/60 text-lg max-w-2xl mx-auto">
                        "Navegue pelo nosso cardápio e descubra todas as delícias que preparamos para você"
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    {MENU_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! {
                                <button
                                    on:click=move |_| active_category.set(index)
                                    class=move || format!(
                                        "flex items-center gap-2 px-6 py-3 rounded-full border font-medium transition-all duration-300 hover:scale-105 {}",
                                        accent_tab(category.color, active_category.get() == index),
                                    )
                                >
                                    <span>{category.title}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="max-w-3xl mx-auto">
                    <div class="glass-card p-8">
                        {move || {
                            let category = &MENU_CATEGORIES[active_category.get().min(MENU_CATEGORIES.len() - 1)];
                            view! {
                                <h3 class="font-display text-2xl font-bold mb-8">{category.title}</h3>

                                <div class="space-y-4">
                                    {category
                                        .items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <div class=format!(
                                                    "flex items-center justify-between p-4 rounded-lg transition-all duration-300 hover:bg-warm-white/5 group {}",
                                                    if item.highlight { "border-l-2 border-neon-amber" } else { "" },
                                                )>
                                                    <div class="flex-1">
                                                        <h4 class=format!(
                                                            "font-semibold group-hover:text-neon-cyan transition-colors {}",
                                                            if item.highlight { "text-neon-amber" } else { "" },
                                                        )>{item.name}</h4>
                                                        {item
                                                            .detail
                                                            .map(|detail| {
                                                                view! { <p class="text-sm text-warm-white/60 mt-1">{detail}</p> }
                                                            })}
                                                    </div>
                                                    {item
                                                        .highlight
                                                        .then(|| {
                                                            view! {
                                                                <span class="ml-4 px-2 py-1 rounded text-xs font-medium bg-neon-amber/10 text-neon-amber">
                                                                    "Destaque"
                                                                </span>
                                                            }
                                                        })}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
