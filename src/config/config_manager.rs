// ==========================================
// Victor Repuestos - Gestor de configuración
// ==========================================
// Rol: carga de configuración desde archivo JSON con defaults
// Almacenamiento: config.json en el directorio de datos
// ==========================================

use crate::config::reader::{ConfigError, ConfigResult, InventoryConfigReader};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_batch_size() -> usize {
    450
}

fn default_low_stock_threshold() -> i64 {
    2
}

fn default_description() -> String {
    "Sin descripción".to_string()
}

fn default_quote_header() -> String {
    "PRESUPUESTO - VICTOR REPUESTOS".to_string()
}

// ==========================================
// InventoryConfig - valores de configuración
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Tamaño de lote del importador (por debajo del tope del backend)
    #[serde(default = "default_batch_size")]
    pub import_batch_size: usize,

    /// Umbral de stock crítico
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,

    /// Descripción para filas sin DESCRIPCION
    #[serde(default = "default_description")]
    pub default_description: String,

    /// Título del presupuesto compartible
    #[serde(default = "default_quote_header")]
    pub quote_header: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            import_batch_size: default_batch_size(),
            low_stock_threshold: default_low_stock_threshold(),
            default_description: default_description(),
            quote_header: default_quote_header(),
        }
    }
}

// ==========================================
// ConfigManager
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: InventoryConfig,
}

impl ConfigManager {
    /// Gestor con los valores por defecto
    pub fn new() -> Self {
        Self::default()
    }

    /// Gestor con valores explícitos
    pub fn from_config(config: InventoryConfig) -> Self {
        Self { config }
    }

    /// Carga la configuración desde un archivo JSON.
    /// Si el archivo no existe se usan los defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw =
            std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError(e.to_string()))?;
        let config: InventoryConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(Self { config })
    }

    /// Valores actuales (acceso sincrónico para la raíz de composición)
    pub fn settings(&self) -> &InventoryConfig {
        &self.config
    }
}

#[async_trait]
impl InventoryConfigReader for ConfigManager {
    async fn get_import_batch_size(&self) -> ConfigResult<usize> {
        Ok(self.config.import_batch_size)
    }

    async fn get_low_stock_threshold(&self) -> ConfigResult<i64> {
        Ok(self.config.low_stock_threshold)
    }

    async fn get_default_description(&self) -> ConfigResult<String> {
        Ok(self.config.default_description.clone())
    }

    async fn get_quote_header(&self) -> ConfigResult<String> {
        Ok(self.config.quote_header.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_defaults() {
        let manager = ConfigManager::new();
        assert_eq!(manager.get_import_batch_size().await.expect("batch"), 450);
        assert_eq!(manager.get_low_stock_threshold().await.expect("umbral"), 2);
        assert_eq!(
            manager.get_default_description().await.expect("desc"),
            "Sin descripción"
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let manager =
            ConfigManager::from_file(Path::new("/no/existe/config.json")).expect("defaults");
        assert_eq!(manager.settings().import_batch_size, 450);
    }

    #[test]
    fn test_partial_file_fills_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().expect("archivo temporal");
        write!(file, r#"{{"import_batch_size": 100}}"#).expect("escribir");

        let manager = ConfigManager::from_file(file.path()).expect("cargar");
        assert_eq!(manager.settings().import_batch_size, 100);
        assert_eq!(manager.settings().low_stock_threshold, 2);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("archivo temporal");
        write!(file, "esto no es json").expect("escribir");

        let err = ConfigManager::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
