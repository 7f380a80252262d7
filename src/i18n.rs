// ==========================================
// Módulo de internacionalización (i18n)
// ==========================================
// Usa la librería rust-i18n
// Soporta español rioplatense (default) e inglés
// ==========================================
// Nota: la macro rust_i18n::i18n! se inicializa en lib.rs
// ==========================================

/// Idioma por defecto de la aplicación
pub const DEFAULT_LOCALE: &str = "es-AR";

/// Fija el idioma por defecto (se llama al crear el AppState)
pub fn init() {
    set_locale(DEFAULT_LOCALE);
}

/// Devuelve el idioma actual
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Cambia el idioma
///
/// # Parámetros
/// - locale: código de idioma ("es-AR" o "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Traduce un mensaje (sin parámetros)
///
/// # Ejemplo
/// ```no_run
/// use victor_inventario::i18n::t;
/// let msg = t("import.success_title");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Traduce un mensaje (con parámetros)
///
/// # Ejemplo
/// ```no_run
/// use victor_inventario::i18n::t_with_args;
/// let msg = t_with_args("import.success", &[("total", "120")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
