// ==========================================
// Victor Repuestos - Formato de moneda
// ==========================================
// Renderiza números al formato rioplatense:
// punto de miles, coma decimal ("$ 1.218,62")
// ==========================================

/// Formatea un número con separador de miles "." y coma decimal,
/// siempre con dos decimales: 1218.62 -> "1.218,62"
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    // Redondeo a centavos antes de separar parte entera y decimal
    let cents = (value.abs() * 100.0).round() as i64;
    let entero = cents / 100;
    let decimales = cents % 100;

    let digits = entero.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!(
        "{}{},{:02}",
        if negative { "-" } else { "" },
        grouped,
        decimales
    )
}

/// Formatea un importe como moneda: 1218.62 -> "$ 1.218,62"
pub fn format_currency(value: f64) -> String {
    format!("$ {}", format_number(value))
}
