// ==========================================
// Victor Repuestos - Importador de catálogo
// ==========================================
// Rol: integrar el pipeline completo, del archivo al almacén
// Flujo: parseo -> validación -> mapeo -> normalización -> lotes
// ==========================================

use crate::config::InventoryConfigReader;
use crate::domain::ProductUpsert;
use crate::importer::catalog_importer::{
    CatalogImporter, DataCleaner, FieldMapper, FileParser, ImportOutcome,
};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::COL_CODIGO;
use crate::repository::{ProductRepository, MAX_BATCH_WRITES};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// ==========================================
// CatalogImporterImpl
// ==========================================
pub struct CatalogImporterImpl<R, C>
where
    R: ProductRepository,
    C: InventoryConfigReader,
{
    // Acceso a datos
    repo: Arc<R>,

    // Configuración
    config: C,

    // Componentes del pipeline
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    data_cleaner: Box<dyn DataCleaner>,
}

impl<R, C> CatalogImporterImpl<R, C>
where
    R: ProductRepository,
    C: InventoryConfigReader,
{
    /// Crea un importador con componentes explícitos
    pub fn new(
        repo: Arc<R>,
        config: C,
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        data_cleaner: Box<dyn DataCleaner>,
    ) -> Self {
        Self {
            repo,
            config,
            file_parser,
            field_mapper,
            data_cleaner,
        }
    }

    /// Crea un importador con las etapas estándar del pipeline
    pub fn with_default_stages(repo: Arc<R>, config: C) -> Self {
        Self::new(
            repo,
            config,
            Box::new(crate::importer::file_parser::CsvParser),
            Box::new(crate::importer::field_mapper::PriceListFieldMapper),
            Box::new(crate::importer::data_cleaner::DataCleaner),
        )
    }

    /// Corre el pipeline sobre las filas ya parseadas
    async fn run(&self, rows: Vec<HashMap<String, String>>) -> ImportResult<ImportOutcome> {
        // === Validación: archivo con datos ===
        if rows.is_empty() {
            return Err(ImportError::EmptyFile);
        }

        // === Validación: columna CODIGO presente ===
        if !rows[0].contains_key(COL_CODIGO) {
            let encabezados: Vec<&String> = rows[0].keys().collect();
            warn!(?encabezados, "encabezado sin columna CODIGO");
            return Err(ImportError::MissingColumn(COL_CODIGO.to_string()));
        }

        let total_rows = rows.len();
        info!(total_rows, "archivo validado, comenzando la carga");

        // Tamaño de lote: siempre estrictamente por debajo del tope duro
        let configured = self
            .config
            .get_import_batch_size()
            .await
            .map_err(|e| ImportError::ConfigError(e.to_string()))?;
        let batch_size = configured.clamp(1, MAX_BATCH_WRITES - 1);
        if batch_size != configured {
            warn!(configured, batch_size, "tamaño de lote ajustado al tope");
        }

        let default_description = self
            .config
            .get_default_description()
            .await
            .map_err(|e| ImportError::ConfigError(e.to_string()))?;

        let mut batch: Vec<ProductUpsert> = Vec::with_capacity(batch_size);
        let mut imported = 0usize;
        let mut skipped = 0usize;
        let mut price_warnings = 0usize;
        let mut batches = 0usize;

        for (idx, row) in rows.into_iter().enumerate() {
            let raw = self.field_mapper.map_row(row, idx + 1);

            // Filas sin código se saltan en silencio (no cuentan)
            let codigo = match raw.codigo {
                Some(c) => c,
                None => {
                    skipped += 1;
                    continue;
                }
            };

            // Precio: "PRECIO S/IVA" o "PRECIO", si no el literal "0"
            let precio_raw = raw.precio_raw.unwrap_or_else(|| "0".to_string());
            let precio = match self.data_cleaner.try_parse_precio(&precio_raw) {
                Some(p) => p,
                None => {
                    // Celda presente pero ilegible: queda en 0, con aviso
                    warn!(
                        fila = raw.row_number,
                        codigo = %codigo,
                        precio = %precio_raw,
                        "precio ilegible, se importa en 0"
                    );
                    price_warnings += 1;
                    0.0
                }
            };

            let descripcion = raw
                .descripcion
                .unwrap_or_else(|| default_description.clone());

            // El payload lleva SOLO los cuatro campos del importador;
            // el merge del almacén preserva stock y location
            batch.push(ProductUpsert {
                codigo,
                descripcion,
                precio,
                updated_at: Utc::now(),
            });
            imported += 1;

            // Lote lleno: se confirma y se arranca uno nuevo.
            // Los lotes van en serie: no se arma el siguiente hasta
            // que el anterior resolvió.
            if batch.len() >= batch_size {
                self.repo
                    .upsert_product_batch(std::mem::take(&mut batch))
                    .await?;
                batches += 1;
                debug!(batches, imported, "lote confirmado");
            }
        }

        // Resto que no completó un lote
        if !batch.is_empty() {
            self.repo.upsert_product_batch(batch).await?;
            batches += 1;
        }

        info!(imported, skipped, batches, "importación completada");

        Ok(ImportOutcome {
            total_rows,
            imported,
            skipped,
            price_warnings,
            batches,
        })
    }
}

#[async_trait]
impl<R, C> CatalogImporter for CatalogImporterImpl<R, C>
where
    R: ProductRepository + Send + Sync,
    C: InventoryConfigReader + Send + Sync,
{
    #[instrument(skip(self, file_path))]
    async fn import_from_path(&self, file_path: &Path) -> ImportResult<ImportOutcome> {
        info!(archivo = %file_path.display(), "importando lista de precios");
        let rows = self.file_parser.parse_path(file_path)?;
        self.run(rows).await
    }

    #[instrument(skip(self, bytes))]
    async fn import_from_bytes(&self, bytes: &[u8]) -> ImportResult<ImportOutcome> {
        debug!(bytes = bytes.len(), "importando lista desde memoria");
        let rows = self.file_parser.parse_bytes(bytes)?;
        self.run(rows).await
    }
}
