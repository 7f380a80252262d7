// ==========================================
// Victor Repuestos - Errores de la capa de repositorios
// ==========================================
// Herramienta: macro derive de thiserror
// ==========================================

use thiserror::Error;

/// Errores de acceso al almacén de documentos
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Contrato de lotes =====
    #[error("el lote de escritura excede el máximo del backend: {got} > {max}")]
    BatchTooLarge { got: usize, max: usize },

    // ===== Errores de datos =====
    #[error("registro no encontrado: {entity} con clave={key}")]
    NotFound { entity: String, key: String },

    #[error("no se pudo abrir la base de datos: {0}")]
    DatabaseConnectionError(String),

    #[error("no se pudo obtener el lock de la base de datos: {0}")]
    LockError(String),

    #[error("falló la transacción: {0}")]
    DatabaseTransactionError(String),

    #[error("falló la consulta: {0}")]
    DatabaseQueryError(String),

    #[error("violación de restricción única: {0}")]
    UniqueConstraintViolation(String),

    // ===== Errores generales =====
    #[error("error interno: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Conversión desde rusqlite::Error
impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) if msg.contains("UNIQUE") => {
                RepositoryError::UniqueConstraintViolation(msg)
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "desconocido".to_string(),
                key: "desconocida".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Alias de Result para la capa de repositorios
pub type RepositoryResult<T> = Result<T, RepositoryError>;
