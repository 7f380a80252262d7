// ==========================================
// Victor Repuestos - Capa de servicios
// ==========================================
// Reglas de negocio sobre los repositorios
// ==========================================

pub mod stock_mutation;

pub use stock_mutation::{StockChange, StockMutationError, StockMutationService};
