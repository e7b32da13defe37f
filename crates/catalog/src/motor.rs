use serde::{Deserialize, Serialize};

use motordesk_core::{DomainError, DomainResult, Entity, MotorCode};

/// A sellable catalog entry.
///
/// The serialized field names are the persisted `app_motors` format and must
/// not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Motor {
    #[serde(rename = "codigo")]
    pub code: MotorCode,
    #[serde(rename = "modelo")]
    pub model: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "estoque")]
    pub stock: u64,
    /// Net price before tax.
    #[serde(rename = "precoBase")]
    pub base_price: f64,
    #[serde(rename = "imagem", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Motor {
    pub fn new(
        code: MotorCode,
        model: impl Into<String>,
        description: impl Into<String>,
        stock: u64,
        base_price: f64,
    ) -> Self {
        Self {
            code,
            model: model.into(),
            description: description.into(),
            stock,
            base_price,
            image: None,
        }
    }

    pub fn code(&self) -> &MotorCode {
        &self.code
    }

    /// Check the record before it enters the catalog.
    ///
    /// Code and model are required; the price must be a finite, non-negative
    /// number.
    pub fn validate(&self) -> DomainResult<()> {
        if self.code.as_str().trim().is_empty() {
            return Err(DomainError::validation("code is required"));
        }
        if self.model.trim().is_empty() {
            return Err(DomainError::validation("model is required"));
        }
        if !self.base_price.is_finite() || self.base_price < 0.0 {
            return Err(DomainError::validation(
                "base price must be a non-negative number",
            ));
        }
        Ok(())
    }
}

impl Entity for Motor {
    type Id = MotorCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}
