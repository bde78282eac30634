//! Identidad del repartidor
//!
//! La autenticación real queda fuera de este backend; el frontend envía el
//! id del repartidor en el header X-Driver-Id.

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::utils::errors::{AppError, AppResult};

// TODO: Extraer driver_id del JWT cuando implementemos middleware de auth
/// Obtener el id del repartidor desde los headers del request
pub fn driver_id_from_headers(headers: &HeaderMap) -> AppResult<Uuid> {
    let raw = headers
        .get("X-Driver-Id")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing X-Driver-Id header".to_string()))?;

    Uuid::parse_str(raw)
        .map_err(|_| AppError::Unauthorized("X-Driver-Id must be a valid UUID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_valid_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Driver-Id",
            HeaderValue::from_static("550e8400-e29b-41d4-a716-446655440000"),
        );
        assert!(driver_id_from_headers(&headers).is_ok());
    }

    #[test]
    fn test_missing_or_invalid_header() {
        let headers = HeaderMap::new();
        assert!(matches!(
            driver_id_from_headers(&headers),
            Err(AppError::Unauthorized(_))
        ));

        let mut headers = HeaderMap::new();
        headers.insert("X-Driver-Id", HeaderValue::from_static("not-a-uuid"));
        assert!(matches!(
            driver_id_from_headers(&headers),
            Err(AppError::Unauthorized(_))
        ));
    }
}
