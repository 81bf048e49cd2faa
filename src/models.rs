//! Frontend Models
//!
//! UI-only data structures. Catalog entities live in `techstore_domain`.

/// Top-level page section selected in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    Catalog,
    About,
    Contacts,
}

impl Section {
    /// Navigation order
    pub const ALL: [Section; 4] = [Section::Home, Section::Catalog, Section::About, Section::Contacts];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::About => "О магазине",
            Section::Contacts => "Контакты",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_defaults_to_home() {
        assert_eq!(Section::default(), Section::Home);
        assert_eq!(Section::ALL[0], Section::Home);
        assert_eq!(Section::Catalog.label(), "Каталог");
    }
}
