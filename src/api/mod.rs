// ==========================================
// Victor Repuestos - Capa de API
// ==========================================
// Rol: interfaz de negocio que consume la aplicación embebedora
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod export_api;
pub mod import_api;
pub mod inventory_api;

pub use dashboard_api::{DashboardApi, DashboardSummary};
pub use error::{ApiError, ApiResult};
pub use export_api::ExportApi;
pub use import_api::{ImportApi, ImportApiResponse};
pub use inventory_api::InventoryApi;
