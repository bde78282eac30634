//! DTOs de la API
//!
//! Responses serializables y el envelope genérico de la API. Los requests
//! viven junto a sus modelos.

pub mod dashboard_dto;
pub mod delivery_dto;
pub mod expense_dto;
pub mod report_dto;
pub mod vehicle_dto;

use serde::Serialize;

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_no_message() {
        let response = ApiResponse::success(42);
        assert!(response.success);
        assert_eq!(response.message, None);
        assert_eq!(response.data, Some(42));
    }
}
