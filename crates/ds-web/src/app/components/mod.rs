pub mod back_to_top;
pub mod error_banner;
pub mod footer;
pub mod layout;
pub mod navbar;

pub use back_to_top::BackToTop;
pub use error_banner::ErrorBanner;
pub use footer::Footer;
pub use layout::Layout;
pub use navbar::NavBar;
