// ==========================================
// Victor Repuestos - Importación de catálogo (Traits)
// ==========================================
// Rol: definir las interfaces del pipeline de importación
// (sin implementaciones)
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::field_mapper::RawPriceRow;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// ImportOutcome - resultado de una corrida de importación
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOutcome {
    /// Filas parseadas del archivo (descartadas las líneas en blanco)
    pub total_rows: usize,
    /// Filas efectivamente enviadas a escritura (el número que se
    /// informa como éxito)
    pub imported: usize,
    /// Filas salteadas por código vacío
    pub skipped: usize,
    /// Celdas de precio no interpretables que quedaron en 0
    pub price_warnings: usize,
    /// Lotes confirmados contra el almacén
    pub batches: usize,
}

// ==========================================
// CatalogImporter Trait
// ==========================================
// Implementado por: CatalogImporterImpl
//
// Flujo de importación:
// 1. Parseo del archivo a filas clave-valor
// 2. Validación de encabezado (CODIGO obligatorio)
// 3. Mapeo y normalización por fila (precio, descripción)
// 4. Acumulación en lotes acotados y commit secuencial
#[async_trait]
pub trait CatalogImporter: Send + Sync {
    /// Importa una lista de precios desde un archivo .csv / .txt
    async fn import_from_path(&self, file_path: &Path) -> ImportResult<ImportOutcome>;

    /// Importa una lista de precios desde los bytes crudos del archivo
    async fn import_from_bytes(&self, bytes: &[u8]) -> ImportResult<ImportOutcome>;
}

// ==========================================
// FileParser Trait
// ==========================================
// Implementado por: CsvParser
pub trait FileParser: Send + Sync {
    /// Parsea un archivo a registros crudos (mapa columna -> valor)
    fn parse_path(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>>;

    /// Parsea los bytes crudos de un archivo
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<HashMap<String, String>>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// Implementado por: PriceListFieldMapper
pub trait FieldMapper: Send + Sync {
    /// Mapea un registro crudo a la fila intermedia de lista de precios
    ///
    /// # Parámetros
    /// - row: registro crudo (mapa columna -> valor)
    /// - row_number: número de fila (para logs)
    fn map_row(&self, row: HashMap<String, String>, row_number: usize) -> RawPriceRow;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// Implementado por: DataCleaner (impl del módulo data_cleaner)
pub trait DataCleaner: Send + Sync {
    /// Limpia texto (TRIM)
    fn clean_text(&self, value: &str) -> String;

    /// Normaliza valores nulos (cadena vacía / espacios -> None)
    fn normalize_null(&self, value: Option<String>) -> Option<String>;

    /// Interpreta un precio en formato rioplatense ("1.218,62").
    ///
    /// # Retorna
    /// - Some(f64): valor interpretado
    /// - None: celda vacía o no interpretable
    fn try_parse_precio(&self, value: &str) -> Option<f64>;

    /// Igual que try_parse_precio pero con default 0 en vez de None
    fn parse_precio(&self, value: &str) -> f64 {
        self.try_parse_precio(value).unwrap_or(0.0)
    }

    /// Serializa un precio al formato de lista ("1218,62"):
    /// coma decimal, dos decimales, sin puntos de miles, de modo que
    /// el normalizador lo vuelva a leer igual
    fn format_precio(&self, value: f64) -> String;
}
