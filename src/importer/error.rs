// ==========================================
// Victor Repuestos - Errores del módulo de importación
// ==========================================
// Herramienta: macro derive de thiserror
// ==========================================

use crate::repository::RepositoryError;
use thiserror::Error;

/// Errores de importación de listas de precios
///
/// Los errores de formato se detectan ANTES de cualquier escritura;
/// un error de escritura puede dejar lotes previos ya persistidos.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Errores de archivo =====
    #[error("el archivo no existe: {0}")]
    FileNotFound(String),

    #[error("formato de archivo no soportado: {0} (solo .csv / .txt)")]
    UnsupportedFormat(String),

    #[error("no se pudo leer el archivo: {0}")]
    FileReadError(String),

    #[error("no se pudo interpretar el archivo CSV: {0}")]
    CsvParseError(String),

    // ===== Errores de formato =====
    #[error("no se encuentra la columna \"{0}\"; la fila 1 del archivo debe tener los títulos CODIGO,DESCRIPCION,PRECIO S/IVA")]
    MissingColumn(String),

    #[error("el archivo parece estar vacío o no se pudo leer")]
    EmptyFile,

    // ===== Errores de configuración =====
    #[error("configuración de importación inválida: {0}")]
    ConfigError(String),

    // ===== Errores de escritura =====
    #[error("ocurrió un error al escribir en la base de datos: {0}")]
    StoreWriteError(#[from] RepositoryError),

    // ===== Errores generales =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Conversión desde std::io::Error
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// Conversión desde csv::Error
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Alias de Result para el módulo de importación
pub type ImportResult<T> = Result<T, ImportError>;
