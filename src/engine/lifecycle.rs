//! Motor de ciclo de vida de entregas
//!
//! Máquina de estados iniciar/finalizar de los bloques de un repartidor.
//! Funciones puras sobre el snapshot en memoria: reciben las colecciones,
//! validan las precondiciones y devuelven el registro nuevo/actualizado.
//! La persistencia la hace el caller; si el guardado falla no hubo
//! transición, porque el store es la única fuente de estado.

use chrono::{NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::delivery::{Delivery, DeliveryStatus};
use crate::models::platform::platform_policy;
use crate::utils::errors::{conflict_error, validation_error, AppError, AppResult};

/// Comando para iniciar un bloque de entrega
#[derive(Debug, Clone)]
pub struct StartDeliveryCommand {
    pub driver_id: Uuid,
    pub date: NaiveDate,
    pub platform: String,
    pub warehouse: Option<String>,
    pub start_time: NaiveTime,
    pub start_km: i64,
    pub prepaid_value: Option<Decimal>,
}

/// Comando para finalizar un bloque de entrega
#[derive(Debug, Clone)]
pub struct FinishDeliveryCommand {
    pub end_time: NaiveTime,
    pub end_km: i64,
    pub earned_value: Option<Decimal>,
}

/// Iniciar un bloque de entrega
///
/// Precondición: el repartidor no puede tener otro bloque en curso. Para
/// plataformas prepagas el valor se fija aquí y el barracón es obligatorio;
/// para el resto el valor queda sin asignar hasta finalizar.
pub fn start_delivery(existing: &[Delivery], cmd: StartDeliveryCommand) -> AppResult<Delivery> {
    let already_ongoing = existing
        .iter()
        .any(|d| d.driver_id == cmd.driver_id && d.is_ongoing());
    if already_ongoing {
        return Err(conflict_error("delivery already in progress"));
    }

    if cmd.start_km < 0 {
        return Err(validation_error("start odometer must be non-negative"));
    }

    let policy = platform_policy(&cmd.platform);

    let value = if policy.requires_prepayment {
        match cmd.prepaid_value {
            Some(v) if v >= Decimal::ZERO => Some(v),
            Some(_) => {
                return Err(AppError::Validation(
                    "prepaid value must be non-negative".to_string(),
                ))
            }
            None => {
                return Err(AppError::Validation(format!(
                    "platform '{}' requires a prepaid value at block start",
                    cmd.platform
                )))
            }
        }
    } else {
        // El valor llega al finalizar; uno prepago enviado por error no se guarda
        None
    };

    let warehouse = if policy.requires_warehouse {
        match cmd.warehouse {
            Some(w) if !w.trim().is_empty() => Some(w),
            _ => {
                return Err(AppError::Validation(format!(
                    "platform '{}' requires a warehouse",
                    cmd.platform
                )))
            }
        }
    } else {
        None
    };

    Ok(Delivery {
        id: Uuid::new_v4(),
        driver_id: cmd.driver_id,
        date: cmd.date,
        platform: cmd.platform,
        warehouse,
        start_time: cmd.start_time,
        end_time: None,
        start_km: cmd.start_km,
        end_km: None,
        value,
        status: DeliveryStatus::Ongoing,
        created_at: Utc::now(),
    })
}

/// Finalizar un bloque de entrega
///
/// Solo un bloque Ongoing puede finalizarse, y una única vez. El odómetro
/// final no puede retroceder. En plataformas prepagas se conserva el valor
/// fijado al inicio; en el resto el valor ganado es obligatorio aquí.
pub fn finish_delivery(delivery: &Delivery, cmd: FinishDeliveryCommand) -> AppResult<Delivery> {
    if !delivery.is_ongoing() {
        return Err(conflict_error("delivery already completed"));
    }

    if cmd.end_km < delivery.start_km {
        return Err(validation_error("end odometer precedes start odometer"));
    }

    let policy = platform_policy(&delivery.platform);

    let value = if policy.requires_prepayment {
        // El pago quedó fijado al iniciar el bloque
        delivery.value
    } else {
        match cmd.earned_value {
            Some(v) if v >= Decimal::ZERO => Some(v),
            Some(_) => {
                return Err(AppError::Validation(
                    "earned value must be non-negative".to_string(),
                ))
            }
            None => {
                return Err(AppError::Validation(format!(
                    "platform '{}' requires the earned value when finishing",
                    delivery.platform
                )))
            }
        }
    };

    Ok(Delivery {
        end_time: Some(cmd.end_time),
        end_km: Some(cmd.end_km),
        value,
        status: DeliveryStatus::Completed,
        ..delivery.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_cmd(driver_id: Uuid, platform: &str) -> StartDeliveryCommand {
        StartDeliveryCommand {
            driver_id,
            date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            platform: platform.to_string(),
            warehouse: None,
            start_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            start_km: 54200,
            prepaid_value: None,
        }
    }

    fn finish_cmd(end_km: i64, earned_value: Option<Decimal>) -> FinishDeliveryCommand {
        FinishDeliveryCommand {
            end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            end_km,
            earned_value,
        }
    }

    #[test]
    fn test_start_non_prepaid_leaves_value_unset() {
        let driver_id = Uuid::new_v4();
        let delivery = start_delivery(&[], start_cmd(driver_id, "UberEats")).unwrap();

        assert_eq!(delivery.status, DeliveryStatus::Ongoing);
        assert_eq!(delivery.value, None);
        assert_eq!(delivery.warehouse, None);
        assert_eq!(delivery.start_km, 54200);
        assert_eq!(delivery.end_km, None);
    }

    #[test]
    fn test_start_prepaid_requires_value() {
        let driver_id = Uuid::new_v4();
        let mut cmd = start_cmd(driver_id, "Amazon Flex");
        cmd.warehouse = Some("DPR1 - Ibaraki".to_string());

        let err = start_delivery(&[], cmd).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_start_prepaid_stores_value_and_warehouse() {
        let driver_id = Uuid::new_v4();
        let mut cmd = start_cmd(driver_id, "Amazon Flex");
        cmd.warehouse = Some("DPR1 - Ibaraki".to_string());
        cmd.prepaid_value = Some(Decimal::from(12000));

        let delivery = start_delivery(&[], cmd).unwrap();
        assert_eq!(delivery.value, Some(Decimal::from(12000)));
        assert_eq!(delivery.warehouse.as_deref(), Some("DPR1 - Ibaraki"));
    }

    #[test]
    fn test_start_prepaid_requires_warehouse() {
        let driver_id = Uuid::new_v4();
        let mut cmd = start_cmd(driver_id, "Amazon Flex");
        cmd.prepaid_value = Some(Decimal::from(12000));

        let err = start_delivery(&[], cmd).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_start_ignores_prepaid_value_for_other_platforms() {
        let driver_id = Uuid::new_v4();
        let mut cmd = start_cmd(driver_id, "Rappi");
        cmd.prepaid_value = Some(Decimal::from(5000));

        let delivery = start_delivery(&[], cmd).unwrap();
        assert_eq!(delivery.value, None);
    }

    #[test]
    fn test_second_ongoing_delivery_is_rejected() {
        let driver_id = Uuid::new_v4();
        let first = start_delivery(&[], start_cmd(driver_id, "UberEats")).unwrap();

        let err = start_delivery(&[first.clone()], start_cmd(driver_id, "PickGo")).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // Otro repartidor sí puede iniciar
        let other = Uuid::new_v4();
        assert!(start_delivery(&[first], start_cmd(other, "PickGo")).is_ok());
    }

    #[test]
    fn test_start_allowed_after_previous_completed() {
        let driver_id = Uuid::new_v4();
        let first = start_delivery(&[], start_cmd(driver_id, "UberEats")).unwrap();
        let finished = finish_delivery(&first, finish_cmd(54350, Some(Decimal::from(9000)))).unwrap();

        assert!(start_delivery(&[finished], start_cmd(driver_id, "UberEats")).is_ok());
    }

    #[test]
    fn test_start_rejects_negative_odometer() {
        let driver_id = Uuid::new_v4();
        let mut cmd = start_cmd(driver_id, "UberEats");
        cmd.start_km = -1;

        let err = start_delivery(&[], cmd).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_finish_completes_the_block() {
        let driver_id = Uuid::new_v4();
        let delivery = start_delivery(&[], start_cmd(driver_id, "UberEats")).unwrap();
        let finished =
            finish_delivery(&delivery, finish_cmd(54350, Some(Decimal::from(9000)))).unwrap();

        assert_eq!(finished.status, DeliveryStatus::Completed);
        assert_eq!(finished.end_km, Some(54350));
        assert_eq!(finished.value, Some(Decimal::from(9000)));
        assert_eq!(finished.distance(), 150);
        // Ningún otro campo cambia
        assert_eq!(finished.id, delivery.id);
        assert_eq!(finished.start_km, delivery.start_km);
        assert_eq!(finished.platform, delivery.platform);
        assert_eq!(finished.date, delivery.date);
    }

    #[test]
    fn test_finish_rejects_end_before_start() {
        let driver_id = Uuid::new_v4();
        let delivery = start_delivery(&[], start_cmd(driver_id, "UberEats")).unwrap();
        let before = delivery.clone();

        let err =
            finish_delivery(&delivery, finish_cmd(54100, Some(Decimal::from(9000)))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        // El registro de entrada no se muta
        assert_eq!(delivery, before);
    }

    #[test]
    fn test_finish_rejects_already_completed() {
        let driver_id = Uuid::new_v4();
        let delivery = start_delivery(&[], start_cmd(driver_id, "UberEats")).unwrap();
        let finished =
            finish_delivery(&delivery, finish_cmd(54350, Some(Decimal::from(9000)))).unwrap();

        let err =
            finish_delivery(&finished, finish_cmd(54400, Some(Decimal::from(1000)))).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_finish_prepaid_keeps_stored_value() {
        let driver_id = Uuid::new_v4();
        let mut cmd = start_cmd(driver_id, "Amazon Flex");
        cmd.warehouse = Some("DPR2 - Saitama".to_string());
        cmd.prepaid_value = Some(Decimal::from(12000));
        let delivery = start_delivery(&[], cmd).unwrap();

        // El valor enviado al finalizar se ignora en plataformas prepagas
        let finished =
            finish_delivery(&delivery, finish_cmd(54350, Some(Decimal::from(999)))).unwrap();
        assert_eq!(finished.value, Some(Decimal::from(12000)));
    }

    #[test]
    fn test_finish_non_prepaid_requires_value() {
        let driver_id = Uuid::new_v4();
        let delivery = start_delivery(&[], start_cmd(driver_id, "UberEats")).unwrap();

        let err = finish_delivery(&delivery, finish_cmd(54350, None)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_finish_allows_zero_distance() {
        let driver_id = Uuid::new_v4();
        let delivery = start_delivery(&[], start_cmd(driver_id, "UberEats")).unwrap();

        let finished =
            finish_delivery(&delivery, finish_cmd(54200, Some(Decimal::from(500)))).unwrap();
        assert_eq!(finished.distance(), 0);
    }
}
