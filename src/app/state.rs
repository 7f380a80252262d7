// ==========================================
// Victor Repuestos - Estado de la aplicación
// ==========================================
// Rol: raíz de composición. Arma repositorios, servicios y APIs
// sobre el backing elegido (memoria o SQLite).
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::{DashboardApi, ExportApi, ImportApi, InventoryApi};
use crate::app::paths;
use crate::cart::{CartService, CartStore, FileCartStore, MemoryCartStore};
use crate::config::ConfigManager;
use crate::i18n;
use crate::repository::{
    MemoryStore, MovementRepository, ProductRepository, RepositoryError, RepositoryResult,
    SqliteStore,
};

/// Estado de la aplicación
///
/// Contiene las APIs y los recursos compartidos. La aplicación
/// embebedora (interfaz web o de escritorio) lo usa como estado global.
pub struct AppState<S>
where
    S: ProductRepository + MovementRepository + Send + Sync + 'static,
{
    /// Almacén de documentos compartido
    pub store: Arc<S>,

    /// Configuración cargada
    pub config: ConfigManager,

    /// API de importación de listas de precios
    pub import_api: Arc<ImportApi<S, ConfigManager>>,

    /// API de exportación del catálogo
    pub export_api: Arc<ExportApi<S>>,

    /// API de inventario (catálogo, stock, ubicación)
    pub inventory_api: Arc<InventoryApi<S, S>>,

    /// API del panel de control
    pub dashboard_api: Arc<DashboardApi<S, S>>,

    /// Presupuesto local del cliente
    pub cart: Mutex<CartService>,
}

impl<S> AppState<S>
where
    S: ProductRepository + MovementRepository + Send + Sync + 'static,
{
    /// Arma el estado sobre un almacén y un backing de carrito dados
    pub fn assemble(store: Arc<S>, config: ConfigManager, cart_store: Box<dyn CartStore>) -> Self {
        // Idioma por defecto de los mensajes al usuario
        i18n::init();

        let settings = config.settings().clone();

        let import_api = Arc::new(ImportApi::new(Arc::clone(&store), config.clone()));
        let export_api = Arc::new(ExportApi::new(Arc::clone(&store)));
        let inventory_api = Arc::new(InventoryApi::new(
            Arc::clone(&store),
            Arc::clone(&store),
            settings.low_stock_threshold,
        ));
        let dashboard_api = Arc::new(DashboardApi::new(
            Arc::clone(&store),
            Arc::clone(&store),
            settings.low_stock_threshold,
        ));
        let cart = Mutex::new(CartService::new(cart_store, settings.quote_header));

        Self {
            store,
            config,
            import_api,
            export_api,
            inventory_api,
            dashboard_api,
            cart,
        }
    }
}

impl AppState<MemoryStore> {
    /// Estado completo en memoria (tests y demos)
    pub fn in_memory() -> Self {
        Self::in_memory_with_config(ConfigManager::new())
    }

    pub fn in_memory_with_config(config: ConfigManager) -> Self {
        Self::assemble(
            Arc::new(MemoryStore::new()),
            config,
            Box::new(MemoryCartStore::new()),
        )
    }
}

impl AppState<SqliteStore> {
    /// Estado persistente sobre la base por defecto del usuario
    pub fn open_default() -> RepositoryResult<Self> {
        let db_path = paths::get_default_db_path();
        let config = ConfigManager::from_file(&paths::get_default_config_path())
            .map_err(|e| RepositoryError::InternalError(e.to_string()))?;
        Self::open(&db_path, config)
    }

    /// Estado persistente sobre una base SQLite dada
    pub fn open(db_path: &str, config: ConfigManager) -> RepositoryResult<Self> {
        let store = Arc::new(SqliteStore::new(db_path)?);
        let cart_store = Box::new(FileCartStore::new(paths::get_default_cart_path()));
        Ok(Self::assemble(store, config, cart_store))
    }
}
