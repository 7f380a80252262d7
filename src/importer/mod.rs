// ==========================================
// Victor Repuestos - Capa de importación
// ==========================================
// Rol: carga de listas de precios externas al catálogo
// Soporta: CSV (coma o punto y coma)
// ==========================================

// Declaración de módulos
pub mod catalog_importer;
pub mod catalog_importer_impl;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// Reexportación de tipos centrales
pub use catalog_importer_impl::CatalogImporterImpl;
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{PriceListFieldMapper, RawPriceRow};
pub use file_parser::CsvParser;

// Reexportación de interfaces
pub use catalog_importer::{
    CatalogImporter, DataCleaner, FieldMapper, FileParser, ImportOutcome,
};
