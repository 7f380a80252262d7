// ==========================================
// Victor Repuestos - Errores de la capa de API
// ==========================================
// Rol: traducir errores de las capas internas a mensajes
// aptos para el banner de la interfaz
// ==========================================

use crate::cart::CartStoreError;
use crate::config::ConfigError;
use crate::engine::StockMutationError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use crate::repository::RepositoryError;
use thiserror::Error;

/// Errores de la capa de API
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Archivo de entrada =====
    /// Archivo inválido: se detecta antes de escribir nada; se
    /// recupera subiendo un archivo corregido
    #[error("error de formato: {0}")]
    InvalidFile(String),

    // ===== Almacén =====
    /// Falla de lectura/escritura contra el almacén; en una
    /// importación puede haber quedado efecto parcial
    #[error("ocurrió un error al procesar los datos en la base: {0}")]
    StoreError(String),

    #[error("recurso no encontrado: {0}")]
    NotFound(String),

    // ===== Stock =====
    /// Lleva el stock previo para que la interfaz revierta el
    /// cambio optimista
    #[error("no se pudo actualizar el stock: {reason}")]
    StockUpdateFailed { reason: String, previous_stock: i64 },

    // ===== Carrito =====
    #[error("problema con el presupuesto: {0}")]
    CartError(String),

    // ===== Configuración =====
    #[error("configuración inválida: {0}")]
    ConfigError(String),

    // ===== Generales =====
    #[error("error interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// Conversión desde ImportError
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::StoreWriteError(e) => ApiError::StoreError(e.to_string()),
            ImportError::ConfigError(msg) => ApiError::ConfigError(msg),
            ImportError::Other(e) => ApiError::Other(e),
            // Todo lo demás es un problema del archivo de entrada
            other => ApiError::InvalidFile(other.to_string()),
        }
    }
}

// ==========================================
// Conversión desde RepositoryError
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, key } => {
                ApiError::NotFound(format!("{} (clave={})", entity, key))
            }
            RepositoryError::Other(e) => ApiError::Other(e),
            other => ApiError::StoreError(other.to_string()),
        }
    }
}

// ==========================================
// Conversión desde ExportError
// ==========================================
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::StoreReadError(e) => e.into(),
            ExportError::SerializeError(msg) => ApiError::InternalError(msg),
        }
    }
}

// ==========================================
// Conversión desde StockMutationError
// ==========================================
impl From<StockMutationError> for ApiError {
    fn from(err: StockMutationError) -> Self {
        ApiError::StockUpdateFailed {
            reason: err.source.to_string(),
            previous_stock: err.previous_stock,
        }
    }
}

impl From<CartStoreError> for ApiError {
    fn from(err: CartStoreError) -> Self {
        ApiError::CartError(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Alias de Result para la capa de API
pub type ApiResult<T> = Result<T, ApiError>;
