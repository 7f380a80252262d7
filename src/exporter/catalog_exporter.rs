// ==========================================
// Victor Repuestos - Exportador de catálogo
// ==========================================
// Rol: proyección inversa del importador. Lee el catálogo completo
// en una sola pasada y lo serializa al mismo formato de lista.
// Sin paginado ni streaming: todo el catálogo en memoria (alcanza
// para algunos miles de registros).
// ==========================================

use crate::domain::Product;
use crate::importer::catalog_importer::DataCleaner;
use crate::repository::{ProductRepository, RepositoryError};
use chrono::Local;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

/// Columnas del archivo exportado: las del importador más los dos
/// campos de inventario que el importador no maneja
pub const EXPORT_COLUMNS: [&str; 5] =
    ["CODIGO", "DESCRIPCION", "PRECIO S/IVA", "STOCK", "UBICACION"];

/// Prefijo del nombre de archivo (la fecha ISO se agrega al exportar)
pub const EXPORT_FILENAME_PREFIX: &str = "inventario_victor";

/// Errores de exportación
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("ocurrió un error al leer el catálogo: {0}")]
    StoreReadError(#[from] RepositoryError),

    #[error("no se pudo serializar el catálogo: {0}")]
    SerializeError(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

// ==========================================
// ExportFile - archivo listo para descargar
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
    pub rows: usize,
}

// ==========================================
// CatalogExporter
// ==========================================
pub struct CatalogExporter<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
    data_cleaner: Box<dyn DataCleaner>,
}

impl<R> CatalogExporter<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            data_cleaner: Box::new(crate::importer::data_cleaner::DataCleaner),
        }
    }

    /// Exporta el catálogo completo a un archivo delimitado por comas.
    ///
    /// El precio se escribe en el formato de lista ("1218,62") para
    /// que una re-importación del archivo lea los mismos valores.
    /// STOCK ausente sale como 0 y UBICACION ausente como vacío; el
    /// importador los ignora en la vuelta.
    #[instrument(skip(self))]
    pub async fn export(&self) -> ExportResult<ExportFile> {
        let products = self.repo.list_products().await?;
        info!(productos = products.len(), "exportando catálogo");

        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
        writer
            .write_record(EXPORT_COLUMNS)
            .map_err(|e| ExportError::SerializeError(e.to_string()))?;

        for product in &products {
            writer
                .write_record(self.project(product))
                .map_err(|e| ExportError::SerializeError(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::SerializeError(e.to_string()))?;
        let content =
            String::from_utf8(bytes).map_err(|e| ExportError::SerializeError(e.to_string()))?;

        let filename = format!(
            "{}_{}.csv",
            EXPORT_FILENAME_PREFIX,
            Local::now().format("%Y-%m-%d")
        );

        Ok(ExportFile {
            filename,
            content,
            rows: products.len(),
        })
    }

    /// Proyecta un producto a las cinco columnas del archivo
    fn project(&self, product: &Product) -> [String; 5] {
        [
            product.codigo.clone(),
            product.descripcion.clone(),
            self.data_cleaner.format_precio(product.precio),
            product.stock_disponible().to_string(),
            product.ubicacion().to_string(),
        ]
    }
}
