// ==========================================
// Victor Repuestos - Capa de exportación
// ==========================================
// Rol: serializar el catálogo al formato de lista de precios
// ==========================================

pub mod catalog_exporter;

pub use catalog_exporter::{
    CatalogExporter, ExportError, ExportFile, ExportResult, EXPORT_COLUMNS,
    EXPORT_FILENAME_PREFIX,
};
