use std::fmt::Display;

use barbucho_state::menu::AccentColor;
use leptos::document;
use tracing::warn;
use web_sys::ScrollBehavior;
use web_sys::ScrollIntoViewOptions;

/// Anchors of the single page, in the order they are stacked.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionUrl {
    Hero,
    Sobre,
    Especialidades,
    Bebidas,
    Cardapio,
    Contato,
}

impl Display for SectionUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.id())
    }
}

impl SectionUrl {
    pub const NAV: [SectionUrl; 6] = [
        SectionUrl::Hero,
        SectionUrl::Sobre,
        SectionUrl::Especialidades,
        SectionUrl::Bebidas,
        SectionUrl::Cardapio,
        SectionUrl::Contato,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionUrl::Hero => "hero",
            SectionUrl::Sobre => "sobre",
            SectionUrl::Especialidades => "especialidades",
            SectionUrl::Bebidas => "bebidas",
            SectionUrl::Cardapio => "cardapio",
            SectionUrl::Contato => "contato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionUrl::Hero => "Início",
            SectionUrl::Sobre => "Sobre",
            SectionUrl::Especialidades => "Especialidades",
            SectionUrl::Bebidas => "Bebidas",
            SectionUrl::Cardapio => "Cardápio",
            SectionUrl::Contato => "Contato",
        }
    }
}

/// Smooth-scrolls the section into view. Missing targets are logged and
/// skipped, never fatal.
pub fn scroll_to(section: SectionUrl) {
    let Ok(Some(el)) = document().query_selector(&section.to_string()) else {
        warn!("scroll target {} not found", section);
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn accent_text(color: AccentColor) -> &'static str {
    match color {
        AccentColor::Cyan => "text-neon-cyan",
        AccentColor::Magenta => "text-neon-magenta",
        AccentColor::Amber => "text-neon-amber",
    }
}

pub fn accent_bg(color: AccentColor) -> &'static str {
    match color {
        AccentColor::Cyan => "bg-neon-cyan/10",
        AccentColor::Magenta => "bg-neon-magenta/10",
        AccentColor::Amber => "bg-neon-amber/10",
    }
}

pub fn accent_border(color: AccentColor) -> &'static str {
    match color {
        AccentColor::Cyan => "border-neon-cyan/30",
        AccentColor::Magenta => "border-neon-magenta/30",
        AccentColor::Amber => "border-neon-amber/30",
    }
}

/// Tab pill classes for the menu category switcher.
pub fn accent_tab(color: AccentColor, active: bool) -> String {
    let (bg, text) = match (color, active) {
        (AccentColor::Cyan, true) => ("bg-neon-cyan", "text-dark-night"),
        (AccentColor::Cyan, false) => ("bg-neon-cyan/10", "text-neon-cyan"),
        (AccentColor::Magenta, true) => ("bg-neon-magenta", "text-dark-night"),
        (AccentColor::Magenta, false) => ("bg-neon-magenta/10", "text-neon-magenta"),
        (AccentColor::Amber, true) => ("bg-neon-amber", "text-dark-night"),
        (AccentColor::Amber, false) => ("bg-neon-amber/10", "text-neon-amber"),
    };
    format!("{} {} {}", bg, text, accent_border(color))
}

#[cfg(test)]
mod section_url_tests {
    use super::*;

    #[test]
    fn anchors_match_section_ids() {
        assert_eq!(SectionUrl::Hero.to_string(), "#hero");
        assert_eq!(SectionUrl::Sobre.to_string(), "#sobre");
        assert_eq!(SectionUrl::Cardapio.to_string(), "#cardapio");
        assert_eq!(SectionUrl::Contato.to_string(), "#contato");
        for section in SectionUrl::NAV {
            assert_eq!(section.to_string(), format!("#{}", section.id()));
        }
    }
}
