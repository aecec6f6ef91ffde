//! Static catalog shown by the menu, specialties and drinks sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentColor {
    Cyan,
    Magenta,
    Amber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub detail: Option<&'static str>,
    pub highlight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCategory {
    pub title: &'static str,
    pub color: AccentColor,
    pub items: &'static [MenuItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialty {
    pub name: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
    pub color: AccentColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrinkGroup {
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
    pub color: AccentColor,
}

const fn item(name: &'static str, detail: &'static str) -> MenuItem {
    MenuItem {
        name,
        detail: Some(detail),
        highlight: false,
    }
}

const fn star_item(name: &'static str, detail: &'static str) -> MenuItem {
    MenuItem {
        name,
        detail: Some(detail),
        highlight: true,
    }
}

pub const MENU_CATEGORIES: &[MenuCategory] = &[
    MenuCategory {
        title: "Porções Especiais",
        color: AccentColor::Amber,
        items: &[
            star_item("Dobradinha com Mocotó", "Porção generosa"),
            star_item("Fígado Acebolado", "Com cebolas caramelizadas"),
            star_item("Contra Filé na Chapa", "Corte nobre, 400g"),
            star_item("Feijão Tropeiro", "Receita tradicional mineira"),
            item("Torresmo", "Crocante e sequinho"),
            item("Linguiça Acebolada", "Na chapa"),
        ],
    },
    MenuCategory {
        title: "Petiscos",
        color: AccentColor::Cyan,
        items: &[
            item("Batata Frita", "Porção grande"),
            item("Mandioca Frita", "Com carne seca"),
            item("Calabresa Acebolada", "Defumada"),
            item("Frango à Passarinho", "Crocante"),
            item("Porção Mista", "Um pouco de tudo"),
        ],
    },
    MenuCategory {
        title: "Cervejas",
        color: AccentColor::Amber,
        items: &[
            item("Brahma Chopp", "600ml"),
            item("Skol", "600ml"),
            item("Antarctica", "600ml"),
            item("Heineken", "Long Neck"),
            item("Budweiser", "Long Neck"),
            item("Corona", "Long Neck"),
        ],
    },
    MenuCategory {
        title: "Bebidas",
        color: AccentColor::Magenta,
        items: &[
            item("Coca-Cola", "Lata ou 2L"),
            item("Guaraná Antarctica", "Lata ou 2L"),
            item("Fanta", "Laranja ou Uva"),
            item("Água Mineral", "Com ou sem gás"),
            item("Suco Natural", "Laranja ou Limão"),
        ],
    },
];

pub const SPECIALTIES: &[Specialty] = &[
    Specialty {
        name: "Dobradinha com Mocotó",
        description: "A combinação perfeita de sabores. Dobradinha macia e mocotó \
            suculento, cozidos lentamente com temperos especiais.",
        badge: "Mais Pedido",
        color: AccentColor::Amber,
    },
    Specialty {
        name: "Fígado Acebolado",
        description: "Fígado bovino grelhado no ponto, acompanhado de cebolas \
            caramelizadas e temperos da casa.",
        badge: "Clássico",
        color: AccentColor::Magenta,
    },
    Specialty {
        name: "Contra Filé",
        description: "Corte nobre, suculento e macio. Grelhado no ponto que você \
            preferir, acompanhado de farofa especial.",
        badge: "Premium",
        color: AccentColor::Cyan,
    },
    Specialty {
        name: "Feijão Tropeiro",
        description: "Receita tradicional mineira com feijão, farinha, bacon, \
            linguiça, ovos e temperos especiais.",
        badge: "Tradicional",
        color: AccentColor::Amber,
    },
];

pub const DRINK_GROUPS: &[DrinkGroup] = &[
    DrinkGroup {
        title: "Cervejas Geladas",
        description: "Pilsen, Lager, Weiss e muito mais. Sempre na temperatura \
            ideal para você.",
        items: &["Brahma", "Skol", "Antarctica", "Heineken", "Budweiser", "Corona"],
        color: AccentColor::Amber,
    },
    DrinkGroup {
        title: "Refrigerantes",
        description: "Opções para toda a família, sempre gelados e refrescantes.",
        items: &["Coca-Cola", "Guaraná", "Fanta", "Sprite", "Água", "Suco Natural"],
        color: AccentColor::Cyan,
    },
];

#[cfg(test)]
mod menu_tests {
    use super::*;

    #[test]
    fn every_category_has_items() {
        assert_eq!(MENU_CATEGORIES.len(), 4);
        for category in MENU_CATEGORIES {
            assert!(!category.items.is_empty(), "{} is empty", category.title);
        }
    }

    #[test]
    fn house_specialties_are_highlighted_on_the_menu() {
        let portions = &MENU_CATEGORIES[0];
        for specialty in SPECIALTIES {
            let on_menu = portions
                .items
                .iter()
                .any(|i| i.highlight && i.name.starts_with(specialty.name));
            assert!(on_menu, "{} missing from portions", specialty.name);
        }
    }
}
