// ==========================================
// Victor Repuestos - Núcleo de inventario
// ==========================================
// Stack: Rust + SQLite
// Rol: catálogo, lista de precios, stock y auditoría
// ==========================================

// Inicializa el sistema de internacionalización
rust_i18n::i18n!("locales", fallback = "es-AR");

// ==========================================
// Declaración de módulos
// ==========================================

// Capa de dominio - entidades y tipos
pub mod domain;

// Capa de repositorios - acceso a datos
pub mod repository;

// Capa de importación - listas de precios externas
pub mod importer;

// Capa de exportación - proyección inversa del catálogo
pub mod exporter;

// Capa de servicios - mutación de stock + auditoría
pub mod engine;

// Carrito / presupuesto - estado local del cliente
pub mod cart;

// Capa de configuración
pub mod config;

// Infraestructura de base de datos (apertura / PRAGMA unificados)
pub mod db;

// Sistema de logs
pub mod logging;

// Internacionalización
pub mod i18n;

// Capa de API - interfaz de negocio
pub mod api;

// Capa de aplicación - raíz de composición
pub mod app;

// ==========================================
// Reexportación de tipos centrales
// ==========================================

// Dominio
pub use domain::{
    derive_doc_key, Cart, CartItem, Movement, MovementKind, Product, ProductField, ProductUpsert,
};

// Repositorios
pub use repository::{
    MemoryStore, MovementRepository, ProductRepository, RepositoryError, RepositoryResult,
    SqliteStore, MAX_BATCH_WRITES,
};

// Importador
pub use importer::{CatalogImporter, CatalogImporterImpl, ImportError, ImportOutcome};

// Exportador
pub use exporter::{CatalogExporter, ExportError, ExportFile};

// Servicios
pub use engine::{StockChange, StockMutationError, StockMutationService};

// Carrito
pub use cart::{CartService, CartStore, FileCartStore, MemoryCartStore};

// Configuración
pub use config::{ConfigManager, InventoryConfig, InventoryConfigReader};

// API
pub use api::{ApiError, DashboardApi, ExportApi, ImportApi, InventoryApi};

// Aplicación
pub use app::AppState;

// ==========================================
// Constantes del sistema
// ==========================================

// Versión del sistema
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nombre del sistema
pub const APP_NAME: &str = "Victor Repuestos - Inventario";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
