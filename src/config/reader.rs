// ==========================================
// Victor Repuestos - Lectura de configuración (Trait)
// ==========================================
// Rol: interfaz de solo lectura que consumen el importador
// y las APIs (sin escritura, sin lógica de negocio)
// ==========================================

use async_trait::async_trait;
use thiserror::Error;

/// Errores de configuración
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no se pudo leer el archivo de configuración: {0}")]
    ReadError(String),

    #[error("el archivo de configuración no es válido: {0}")]
    ParseError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// InventoryConfigReader Trait
// ==========================================
// Implementado por: ConfigManager
#[async_trait]
pub trait InventoryConfigReader: Send + Sync {
    /// Tamaño de lote del importador.
    ///
    /// # Default
    /// - 450 (margen de seguridad contra el tope duro de 500
    ///   escrituras por lote del backend)
    async fn get_import_batch_size(&self) -> ConfigResult<usize>;

    /// Umbral de stock crítico.
    ///
    /// # Default
    /// - 2
    async fn get_low_stock_threshold(&self) -> ConfigResult<i64>;

    /// Descripción por defecto para filas sin DESCRIPCION.
    ///
    /// # Default
    /// - "Sin descripción"
    async fn get_default_description(&self) -> ConfigResult<String>;

    /// Título del presupuesto compartible.
    ///
    /// # Default
    /// - "PRESUPUESTO - VICTOR REPUESTOS"
    async fn get_quote_header(&self) -> ConfigResult<String>;
}
