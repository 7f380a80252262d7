// ==========================================
// Victor Repuestos - Limpieza y normalización de datos
// ==========================================
// Rol: TRIM / normalización de nulos / precios rioplatenses
// ==========================================

use crate::importer::catalog_importer::DataCleaner as DataCleanerTrait;

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    fn normalize_null(&self, value: Option<String>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    /// Convierte un precio rioplatense a número.
    ///
    /// Secuencia exacta, el orden importa:
    /// 1. saca comillas simples y dobles
    /// 2. elimina TODOS los puntos (separador de miles, nunca decimal)
    /// 3. reemplaza la PRIMERA coma por punto (separador decimal)
    /// 4. parsea como flotante
    ///
    /// "1.218,62" -> 1218.62 ; "45,00" -> 45.0
    fn try_parse_precio(&self, value: &str) -> Option<f64> {
        let sin_comillas: String = value.chars().filter(|c| *c != '\'' && *c != '"').collect();
        let sin_miles = sin_comillas.replace('.', "");
        let con_punto_decimal = sin_miles.replacen(',', ".", 1);
        con_punto_decimal.trim().parse::<f64>().ok()
    }

    fn format_precio(&self, value: f64) -> String {
        format!("{:.2}", value).replace('.', ",")
    }
}
