// ==========================================
// Victor Repuestos - Capa de aplicación
// ==========================================

pub mod paths;
pub mod state;

pub use paths::{get_default_cart_path, get_default_config_path, get_default_db_path};
pub use state::AppState;
