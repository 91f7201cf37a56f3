//! UI Components
//!
//! Reusable Leptos components.

mod copy_button;
mod delete_confirm_button;
mod layout;
mod modal;
mod protected;
mod remote_view;
mod stat_card;

pub use copy_button::CopyButton;
pub use delete_confirm_button::DeleteConfirmButton;
pub use layout::Layout;
pub use modal::Modal;
pub use protected::{Protected, RouteFallback};
pub use remote_view::RemoteView;
pub use stat_card::StatCard;
