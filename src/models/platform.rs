//! Políticas por plataforma
//!
//! Cada plataforma declara su comportamiento en un registro de política en
//! lugar de comparar strings por toda la lógica: agregar una plataforma
//! nueva no toca el motor de ciclo de vida.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Política declarativa de una plataforma
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PlatformPolicy {
    /// El pago del bloque se fija al iniciarlo (no al finalizarlo)
    pub requires_prepayment: bool,
    /// El bloque debe indicar el barracón de salida
    pub requires_warehouse: bool,
}

impl Default for PlatformPolicy {
    fn default() -> Self {
        Self {
            requires_prepayment: false,
            requires_warehouse: false,
        }
    }
}

/// Plataformas conocidas, en el orden que muestra el formulario
pub const KNOWN_PLATFORMS: [&str; 5] = ["Amazon Flex", "UberEats", "PickGo", "Rappi", "Particular"];

lazy_static! {
    static ref PLATFORM_POLICIES: HashMap<&'static str, PlatformPolicy> = {
        let mut m = HashMap::new();
        // Amazon Flex paga el bloque por adelantado y sale de un barracón
        m.insert(
            "Amazon Flex",
            PlatformPolicy {
                requires_prepayment: true,
                requires_warehouse: true,
            },
        );
        m
    };
}

/// Obtener la política de una plataforma (default para las no listadas)
pub fn platform_policy(platform: &str) -> PlatformPolicy {
    PLATFORM_POLICIES
        .get(platform)
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amazon_flex_is_prepaid_with_warehouse() {
        let policy = platform_policy("Amazon Flex");
        assert!(policy.requires_prepayment);
        assert!(policy.requires_warehouse);
    }

    #[test]
    fn test_other_platforms_pay_on_finish() {
        for platform in ["UberEats", "PickGo", "Rappi", "Particular", "Desconocida"] {
            let policy = platform_policy(platform);
            assert!(!policy.requires_prepayment);
            assert!(!policy.requires_warehouse);
        }
    }
}
