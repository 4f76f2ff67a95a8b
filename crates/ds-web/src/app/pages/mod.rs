pub mod dashboard;
pub mod not_found;

pub use dashboard::DashboardPage;
pub use not_found::NotFoundPage;
