//! UI Components
//!
//! Storefront sections and the reusable pieces they are built from.

mod header;
mod cart_sheet;
mod product_card;
mod filter_panel;
mod empty_results;
mod home_section;
mod catalog_section;
mod about_section;
mod contacts_section;
mod footer;
mod log_panel;

pub use header::Header;
pub use cart_sheet::CartSheet;
pub use product_card::ProductCard;
pub use filter_panel::FilterPanel;
pub use empty_results::EmptyResults;
pub use home_section::HomeSection;
pub use catalog_section::CatalogSection;
pub use about_section::AboutSection;
pub use contacts_section::ContactsSection;
pub use footer::Footer;
pub use log_panel::LogPanel;
