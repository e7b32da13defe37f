//! Downloadable CSV files: the import template and a catalog export.

use motordesk_catalog::Motor;

/// Suggested file name for the template download.
pub const TEMPLATE_FILE_NAME: &str = "modelo_importacao.csv";

pub const TEMPLATE_HEADER: &str = "codigo,modelo,descricao,estoque,precoBase";

const TEMPLATE_EXAMPLE: &str = "MTR-EX01,Exemplo Motor V8,Motor potente para testes,10,1500.00";

/// Header plus one example row, comma separated.
pub fn template() -> String {
    format!("{TEMPLATE_HEADER}\n{TEMPLATE_EXAMPLE}")
}

/// Write `motors` in import column order, `;` separated, `.` decimals.
///
/// Separator characters inside text fields are replaced by spaces so that the
/// file imports back row for row.
pub fn export(motors: &[Motor]) -> String {
    let mut out = TEMPLATE_HEADER.replace(',', ";");
    out.push('\n');
    for motor in motors {
        let row = [
            clean(motor.code.as_str()),
            clean(&motor.model),
            clean(&motor.description),
            motor.stock.to_string(),
            format!("{:.2}", motor.base_price),
        ];
        out.push_str(&row.join(";"));
        out.push('\n');
    }
    out
}

fn clean(field: &str) -> String {
    field.replace([';', '\r', '\n'], " ")
}
