//! Built-in catalog used when no catalog has ever been persisted.

use motordesk_core::MotorCode;

use crate::motor::Motor;

const SEED: &[(&str, &str, &str, u64, f64)] = &[
    (
        "MTR-001",
        "Motor Padrão V8",
        "Motor de combustão interna V8, ideal para veículos de passeio de médio porte. Alta durabilidade e manutenção simplificada.",
        15,
        1200.00,
    ),
    (
        "MTR-05910-A",
        "Motor Especial 059 (Tipo A)",
        "Unidade de alta performance para maquinário industrial leve. Possui sistema de arrefecimento reforçado.",
        8,
        3100.00,
    ),
    (
        "MTR-05923-B",
        "Motor Especial 059 (Tipo B)",
        "Variação do Tipo A com torque ampliado para operações de carga. Revestimento anticorrosivo incluído.",
        12,
        3350.00,
    ),
    (
        "MTR-05980-C",
        "Motor Turbo 059 (Tipo C)",
        "Versão turboalimentada da série 059. Entrega potência máxima instantânea. Requer lubrificantes sintéticos.",
        3,
        3900.00,
    ),
    (
        "MTR-003",
        "Motor Elétrico 100kW",
        "Propulsor 100% elétrico de alta eficiência energética (98%). Silencioso e zero emissões.",
        22,
        4950.00,
    ),
];

/// The five motors a fresh installation starts with.
pub fn initial_motors() -> Vec<Motor> {
    SEED.iter()
        .filter_map(|&(code, model, description, stock, price)| {
            let code = MotorCode::new(code).ok()?;
            Some(Motor::new(code, model, description, stock, price))
        })
        .collect()
}
