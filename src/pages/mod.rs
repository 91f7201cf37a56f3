//! Views
//!
//! One component per route.

mod auth;
mod contact_detail;
mod contacts;
mod dashboard;
mod deals;
mod form_detail;
mod forms;
mod websites;

pub use auth::AuthPage;
pub use contact_detail::ContactDetailPage;
pub use contacts::ContactsPage;
pub use dashboard::DashboardPage;
pub use deals::DealsPage;
pub use form_detail::FormDetailPage;
pub use forms::FormsPage;
pub use websites::WebsitesPage;
