// ==========================================
// Victor Repuestos - API de importación
// ==========================================
// Rol: envolver la corrida del importador en una respuesta
// lista para el banner de la interfaz
// ==========================================

use crate::api::error::ApiResult;
use crate::config::InventoryConfigReader;
use crate::i18n;
use crate::importer::{CatalogImporter, CatalogImporterImpl, ImportOutcome};
use crate::repository::ProductRepository;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Respuesta de la API de importación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportApiResponse {
    /// Productos procesados (el número del banner de éxito)
    pub total: usize,
    /// Filas salteadas por código vacío
    pub skipped: usize,
    /// Precios ilegibles que quedaron en 0
    pub price_warnings: usize,
    /// Lotes confirmados
    pub batches: usize,
    /// Duración de la importación (milisegundos)
    pub elapsed_ms: i64,
    /// Mensaje para mostrar al usuario
    pub message: String,
}

impl ImportApiResponse {
    fn from_outcome(outcome: ImportOutcome, elapsed_ms: i64) -> Self {
        let total = outcome.imported.to_string();
        let message = i18n::t_with_args("import.success", &[("total", total.as_str())]);
        Self {
            total: outcome.imported,
            skipped: outcome.skipped,
            price_warnings: outcome.price_warnings,
            batches: outcome.batches,
            elapsed_ms,
            message,
        }
    }
}

// ==========================================
// ImportApi
// ==========================================
pub struct ImportApi<R, C>
where
    R: ProductRepository,
    C: InventoryConfigReader,
{
    importer: CatalogImporterImpl<R, C>,
}

impl<R, C> ImportApi<R, C>
where
    R: ProductRepository + Send + Sync + 'static,
    C: InventoryConfigReader + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: C) -> Self {
        Self {
            importer: CatalogImporterImpl::with_default_stages(repo, config),
        }
    }

    /// Importa una lista de precios desde un archivo
    pub async fn import_price_list(&self, file_path: &Path) -> ApiResult<ImportApiResponse> {
        let start = Instant::now();
        let outcome = self.importer.import_from_path(file_path).await?;
        Ok(ImportApiResponse::from_outcome(
            outcome,
            start.elapsed().as_millis() as i64,
        ))
    }

    /// Importa una lista de precios desde los bytes del archivo subido
    pub async fn import_price_list_bytes(&self, bytes: &[u8]) -> ApiResult<ImportApiResponse> {
        let start = Instant::now();
        let outcome = self.importer.import_from_bytes(bytes).await?;
        Ok(ImportApiResponse::from_outcome(
            outcome,
            start.elapsed().as_millis() as i64,
        ))
    }
}
