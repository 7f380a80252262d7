// ==========================================
// Victor Repuestos - API de exportación
// ==========================================
// Rol: exponer la descarga del catálogo completo
// ==========================================

use crate::api::error::ApiResult;
use crate::exporter::{CatalogExporter, ExportFile};
use crate::repository::ProductRepository;
use std::sync::Arc;

// ==========================================
// ExportApi
// ==========================================
pub struct ExportApi<R>
where
    R: ProductRepository,
{
    exporter: CatalogExporter<R>,
}

impl<R> ExportApi<R>
where
    R: ProductRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            exporter: CatalogExporter::new(repo),
        }
    }

    /// Exporta el catálogo completo como archivo descargable
    /// (nombre con la fecha del día)
    pub async fn export_catalog(&self) -> ApiResult<ExportFile> {
        Ok(self.exporter.export().await?)
    }
}
