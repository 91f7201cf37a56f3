//! CRM Client Core
//!
//! Framework-free layer of the CRM web client:
//! - models: wire types for the REST API
//! - session / routes: authenticated session and route guard
//! - mutation: server-confirmed local updates
//! - remote / draft: view state shared by every page
//! - error / feedback: error taxonomy and user-facing messages

pub mod config;
pub mod draft;
pub mod embed;
pub mod error;
pub mod feedback;
pub mod models;
pub mod mutation;
pub mod remote;
pub mod routes;
pub mod session;
pub mod validation;

pub use config::ApiConfig;
pub use draft::Draft;
pub use error::{ApiError, ApiResult, CrmError, ErrorDetail};
pub use remote::Remote;
pub use session::{Session, TokenStorage};
