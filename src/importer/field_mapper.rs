// ==========================================
// Victor Repuestos - Mapeo de columnas de la lista
// ==========================================
// Rol: columna del archivo -> campo intermedio
// Columnas reconocidas: CODIGO (obligatoria),
// DESCRIPCION, PRECIO S/IVA o PRECIO. El resto se ignora.
// ==========================================

use crate::importer::catalog_importer::FieldMapper;
use std::collections::HashMap;

/// Columna obligatoria que identifica el repuesto
pub const COL_CODIGO: &str = "CODIGO";
/// Columna de descripción (opcional)
pub const COL_DESCRIPCION: &str = "DESCRIPCION";
/// Columna de precio preferida
pub const COL_PRECIO_SIN_IVA: &str = "PRECIO S/IVA";
/// Columna de precio alternativa
pub const COL_PRECIO: &str = "PRECIO";

// ==========================================
// RawPriceRow - fila intermedia de la lista
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPriceRow {
    pub codigo: Option<String>,
    pub descripcion: Option<String>,
    pub precio_raw: Option<String>,
    pub row_number: usize,
}

// ==========================================
// PriceListFieldMapper
// ==========================================
pub struct PriceListFieldMapper;

impl FieldMapper for PriceListFieldMapper {
    fn map_row(&self, row: HashMap<String, String>, row_number: usize) -> RawPriceRow {
        RawPriceRow {
            codigo: self.get_string(&row, COL_CODIGO),
            descripcion: self.get_string(&row, COL_DESCRIPCION),
            // El precio puede venir como "PRECIO S/IVA" o "PRECIO"
            precio_raw: self.get_string(&row, COL_PRECIO_SIN_IVA),
            row_number,
        }
    }
}

impl PriceListFieldMapper {
    /// Lee una columna (con alias), devolviendo el primer valor no
    /// vacío después de TRIM
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> Option<String> {
        // Alias de columnas por nombre canónico
        let aliases: Vec<&str> = match key {
            COL_PRECIO_SIN_IVA => vec![COL_PRECIO_SIN_IVA, COL_PRECIO],
            _ => vec![key],
        };

        for alias in aliases {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }
}
