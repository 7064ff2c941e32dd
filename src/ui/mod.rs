//! UI components for the Flowdeck marketing site

pub mod accordion;
pub mod back_to_top;
pub mod carousel;
pub mod common;
pub mod header;
pub mod icon;
pub mod login_modal;
pub mod pages;
pub mod theme;

pub use accordion::{Accordion, AccordionPanel, AccordionState};
pub use back_to_top::BackToTop;
pub use carousel::ScreenCarousel;
pub use header::{Header, ThemeToggle};
pub use icon::{Icon, icons};
pub use login_modal::LoginModal;
pub use pages::LandingPage;
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
