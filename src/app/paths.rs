// ==========================================
// Victor Repuestos - Rutas por defecto
// ==========================================
// Rol: ubicar los datos de la aplicación en el directorio
// de datos del usuario
// ==========================================

use std::path::PathBuf;

/// Subdirectorio de datos de la aplicación
const APP_DIR: &str = "victor-inventario";

/// Directorio de datos: <data_dir>/victor-inventario
/// (directorio actual como último recurso)
pub fn get_default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Ruta por defecto de la base de datos
pub fn get_default_db_path() -> String {
    get_default_data_dir()
        .join("inventario.db")
        .to_string_lossy()
        .to_string()
}

/// Ruta por defecto del carrito persistido
pub fn get_default_cart_path() -> PathBuf {
    get_default_data_dir().join("carrito.json")
}

/// Ruta por defecto del archivo de configuración
pub fn get_default_config_path() -> PathBuf {
    get_default_data_dir().join("config.json")
}
