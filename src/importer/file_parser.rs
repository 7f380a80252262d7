// ==========================================
// Victor Repuestos - Parser de listas de precios
// ==========================================
// Soporta: CSV (.csv / .txt), separado por coma o punto y coma
// ==========================================

use crate::importer::catalog_importer::FileParser;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::path::Path;

/// BOM UTF-8 que Windows suele anteponer a los CSV exportados
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

// ==========================================
// CsvParser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// Elige el separador mirando la primera línea del archivo:
    /// gana el que más aparece entre "," y ";" (coma en empate)
    fn detect_delimiter(bytes: &[u8]) -> u8 {
        let first_line = bytes.split(|b| *b == b'\n').next().unwrap_or(&[]);
        let commas = first_line.iter().filter(|b| **b == b',').count();
        let semicolons = first_line.iter().filter(|b| **b == b';').count();
        if semicolons > commas {
            b';'
        } else {
            b','
        }
    }

    /// Normaliza un nombre de columna: saca espacios y el carácter
    /// invisible BOM que deja Windows en el primer título
    fn normalize_header(raw: &str) -> String {
        raw.trim_start_matches('\u{feff}').trim().to_string()
    }
}

impl FileParser for CsvParser {
    fn parse_path(&self, file_path: &Path) -> ImportResult<Vec<HashMap<String, String>>> {
        // El archivo tiene que existir
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // Solo .csv / .txt
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        if ext != "csv" && ext != "txt" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let bytes = std::fs::read(file_path)?;
        self.parse_bytes(&bytes)
    }

    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<Vec<HashMap<String, String>>> {
        // BOM al inicio del stream
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

        let delimiter = Self::detect_delimiter(bytes);
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolera filas de largo desparejo
            .delimiter(delimiter)
            .from_reader(bytes);

        // Encabezados normalizados
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(Self::normalize_header)
            .collect();

        // Filas: siempre con TODAS las columnas del encabezado,
        // completando con vacío si la fila vino corta
        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::with_capacity(headers.len());

            for (col_idx, header) in headers.iter().enumerate() {
                let value = record.get(col_idx).unwrap_or("").trim().to_string();
                row_map.insert(header.clone(), value);
            }

            // Salta las líneas totalmente en blanco
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_csv() {
        let parser = CsvParser;
        let data = b"CODIGO,DESCRIPCION,PRECIO S/IVA\nD129/C,JUNTA TAPA,\"1.218,62\"\n";
        let rows = parser.parse_bytes(data).expect("parsear");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["CODIGO"], "D129/C");
        assert_eq!(rows[0]["PRECIO S/IVA"], "1.218,62");
    }

    #[test]
    fn test_parse_strips_bom_from_first_header() {
        let parser = CsvParser;
        let data = b"\xef\xbb\xbfCODIGO,DESCRIPCION\nA1,BUJIA\n";
        let rows = parser.parse_bytes(data).expect("parsear");
        assert!(rows[0].contains_key("CODIGO"));
    }

    #[test]
    fn test_parse_trims_header_whitespace() {
        let parser = CsvParser;
        let data = b" CODIGO , DESCRIPCION \nA1,BUJIA\n";
        let rows = parser.parse_bytes(data).expect("parsear");
        assert_eq!(rows[0]["CODIGO"], "A1");
        assert_eq!(rows[0]["DESCRIPCION"], "BUJIA");
    }

    #[test]
    fn test_parse_semicolon_delimiter() {
        let parser = CsvParser;
        let data = b"CODIGO;DESCRIPCION;PRECIO S/IVA\nA1;BUJIA NGK;45,00\n";
        let rows = parser.parse_bytes(data).expect("parsear");
        assert_eq!(rows[0]["CODIGO"], "A1");
        assert_eq!(rows[0]["PRECIO S/IVA"], "45,00");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let parser = CsvParser;
        let data = b"CODIGO,DESCRIPCION\nA1,BUJIA\n,\n\nB2,CORREA\n";
        let rows = parser.parse_bytes(data).expect("parsear");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_parse_short_row_fills_missing_columns() {
        let parser = CsvParser;
        let data = b"CODIGO,DESCRIPCION,PRECIO S/IVA\nA1,BUJIA\n";
        let rows = parser.parse_bytes(data).expect("parsear");
        assert_eq!(rows[0]["PRECIO S/IVA"], "");
    }

    #[test]
    fn test_parse_trims_cell_values() {
        let parser = CsvParser;
        let data = b"CODIGO,DESCRIPCION\n  A1  ,  BUJIA NGK  \n";
        let rows = parser.parse_bytes(data).expect("parsear");
        assert_eq!(rows[0]["CODIGO"], "A1");
        assert_eq!(rows[0]["DESCRIPCION"], "BUJIA NGK");
    }

    #[test]
    fn test_parse_path_missing_file() {
        let parser = CsvParser;
        let err = parser
            .parse_path(Path::new("/no/existe/lista_precios.csv"))
            .unwrap_err();
        assert!(matches!(err, ImportError::FileNotFound(_)));
    }

    #[test]
    fn test_parse_path_rejects_unknown_extension() {
        let parser = CsvParser;
        let file = tempfile::Builder::new()
            .suffix(".xlsx")
            .tempfile()
            .expect("archivo temporal");
        let err = parser.parse_path(file.path()).unwrap_err();
        assert!(matches!(err, ImportError::UnsupportedFormat(_)));
    }
}
