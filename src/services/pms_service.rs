//! Evaluación de mantenimiento preventivo (PMS)
//!
//! Este módulo clasifica el estado de mantenimiento de un vehículo en
//! OK / DUE_SOON / OVERDUE a partir de su odómetro actual y de los campos
//! de vencimiento de su último registro de mantenimiento. La evaluación es
//! pura: no toca base de datos y la fecha "hoy" entra como parámetro.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Días de anticipación para marcar un vencimiento como DUE_SOON (inclusive)
pub const DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Margen de odómetro (km) para marcar un vencimiento como DUE_SOON (inclusive)
pub const DUE_SOON_ODOMETER_MARGIN_KM: i64 = 500;

/// Meses por defecto hasta el próximo mantenimiento al crear un registro
pub const DEFAULT_NEXT_DUE_MONTHS: u32 = 6;

/// Kilómetros por defecto hasta el próximo mantenimiento al crear un registro
pub const DEFAULT_NEXT_DUE_ODOMETER_DELTA_KM: i64 = 5000;

/// Estado de mantenimiento preventivo de un vehículo.
///
/// El orden de severidad es total: Ok < DueSoon < Overdue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PmsStatus {
    Ok,
    DueSoon,
    Overdue,
}

impl PmsStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PmsStatus::Ok => "OK",
            PmsStatus::DueSoon => "DUE_SOON",
            PmsStatus::Overdue => "OVERDUE",
        }
    }
}

/// Campos de vencimiento del último registro de mantenimiento de un vehículo
#[derive(Debug, Clone, Default)]
pub struct PmsDueInfo {
    pub next_due_date: Option<NaiveDate>,
    pub next_due_odometer: Option<Decimal>,
}

/// Clasifica el estado PMS de un vehículo.
///
/// Evaluación por niveles: primero se agotan las condiciones OVERDUE
/// (fecha vencida, o umbral de odómetro alcanzado) y recién después las
/// DUE_SOON (fecha a ≤ 7 días, o a ≤ 500 km del umbral). Dentro de cada
/// nivel las dos condiciones son OR: cualquiera sola basta.
///
/// Sin registro, o con ambos campos de vencimiento nulos, el estado es OK.
/// La función es total: nunca falla.
pub fn evaluate(
    current_odometer: Decimal,
    latest: Option<&PmsDueInfo>,
    today: NaiveDate,
) -> PmsStatus {
    let due = match latest {
        Some(due) => due,
        None => return PmsStatus::Ok,
    };

    if due.next_due_date.is_none() && due.next_due_odometer.is_none() {
        return PmsStatus::Ok;
    }

    // Nivel OVERDUE
    if let Some(due_date) = due.next_due_date {
        if due_date < today {
            return PmsStatus::Overdue;
        }
    }
    if let Some(due_odometer) = due.next_due_odometer {
        if current_odometer >= due_odometer {
            return PmsStatus::Overdue;
        }
    }

    // Nivel DUE_SOON
    if let Some(due_date) = due.next_due_date {
        let days_until = (due_date - today).num_days();
        if days_until <= DUE_SOON_WINDOW_DAYS {
            return PmsStatus::DueSoon;
        }
    }
    if let Some(due_odometer) = due.next_due_odometer {
        if due_odometer - current_odometer <= Decimal::from(DUE_SOON_ODOMETER_MARGIN_KM) {
            return PmsStatus::DueSoon;
        }
    }

    PmsStatus::Ok
}

/// Un estado amerita recordatorio cuando supera OK
pub fn is_reminder(status: PmsStatus) -> bool {
    status > PmsStatus::Ok
}

/// Sustitución permisiva de lecturas de odómetro: valores ausentes o no
/// numéricos colapsan a 0 en lugar de fallar. Ojo: un valor mal tipeado se
/// vuelve 0, que nunca dispara OVERDUE por odómetro.
pub fn odometer_or_zero(raw: &serde_json::Value) -> Decimal {
    match raw {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else {
                n.as_f64()
                    .and_then(Decimal::from_f64_retain)
                    .unwrap_or(Decimal::ZERO)
            }
        }
        serde_json::Value::String(s) => s.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Próxima fecha de vencimiento por defecto: service_date + 6 meses
pub fn default_next_due_date(service_date: NaiveDate) -> NaiveDate {
    service_date
        .checked_add_months(Months::new(DEFAULT_NEXT_DUE_MONTHS))
        .unwrap_or(service_date)
}

/// Próximo umbral de odómetro por defecto: odómetro del servicio + 5000 km
pub fn default_next_due_odometer(odometer_at_service: Decimal) -> Decimal {
    odometer_at_service + Decimal::from(DEFAULT_NEXT_DUE_ODOMETER_DELTA_KM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn due(next_due_date: Option<NaiveDate>, next_due_odometer: Option<i64>) -> PmsDueInfo {
        PmsDueInfo {
            next_due_date,
            next_due_odometer: next_due_odometer.map(Decimal::from),
        }
    }

    #[test]
    fn test_no_maintenance_record_is_ok() {
        assert_eq!(evaluate(Decimal::from(10000), None, today()), PmsStatus::Ok);
    }

    #[test]
    fn test_record_without_due_fields_is_ok() {
        let info = due(None, None);
        assert_eq!(evaluate(Decimal::from(10000), Some(&info), today()), PmsStatus::Ok);
    }

    #[test]
    fn test_past_due_date_is_overdue() {
        let info = due(Some(date(2025, 5, 15)), None);
        assert_eq!(
            evaluate(Decimal::from(10000), Some(&info), today()),
            PmsStatus::Overdue
        );
    }

    #[test]
    fn test_odometer_at_threshold_is_overdue() {
        let info = due(None, Some(9500));
        assert_eq!(
            evaluate(Decimal::from(10000), Some(&info), today()),
            PmsStatus::Overdue
        );
        // igualdad exacta también es OVERDUE
        let info = due(None, Some(10000));
        assert_eq!(
            evaluate(Decimal::from(10000), Some(&info), today()),
            PmsStatus::Overdue
        );
    }

    #[test]
    fn test_date_within_window_is_due_soon() {
        let info = due(Some(date(2025, 6, 5)), None);
        assert_eq!(
            evaluate(Decimal::from(10000), Some(&info), today()),
            PmsStatus::DueSoon
        );
    }

    #[test]
    fn test_date_window_boundaries() {
        // hoy mismo: 0 días, dentro de la ventana
        let info = due(Some(today()), None);
        assert_eq!(
            evaluate(Decimal::from(10000), Some(&info), today()),
            PmsStatus::DueSoon
        );
        // exactamente 7 días: inclusive
        let info = due(Some(date(2025, 6, 8)), None);
        assert_eq!(
            evaluate(Decimal::ZERO, Some(&info), today()),
            PmsStatus::DueSoon
        );
        // 8 días: fuera de la ventana
        let info = due(Some(date(2025, 6, 9)), None);
        assert_eq!(evaluate(Decimal::ZERO, Some(&info), today()), PmsStatus::Ok);
    }

    #[test]
    fn test_odometer_within_margin_is_due_soon() {
        let info = due(None, Some(10000));
        assert_eq!(
            evaluate(Decimal::from(9600), Some(&info), today()),
            PmsStatus::DueSoon
        );
        // margen exacto de 500 km: inclusive
        assert_eq!(
            evaluate(Decimal::from(9500), Some(&info), today()),
            PmsStatus::DueSoon
        );
        // 501 km de distancia: OK
        assert_eq!(
            evaluate(Decimal::from(9499), Some(&info), today()),
            PmsStatus::Ok
        );
    }

    #[test]
    fn test_both_thresholds_far_is_ok() {
        let info = due(Some(date(2025, 8, 1)), Some(15000));
        assert_eq!(
            evaluate(Decimal::from(9000), Some(&info), today()),
            PmsStatus::Ok
        );
    }

    #[test]
    fn test_overdue_takes_precedence_over_due_soon() {
        // fecha vencida pero odómetro lejos del umbral
        let info = due(Some(date(2025, 5, 15)), Some(15000));
        assert_eq!(
            evaluate(Decimal::from(9000), Some(&info), today()),
            PmsStatus::Overdue
        );
        // odómetro vencido pero fecha lejana
        let info = due(Some(date(2025, 12, 1)), Some(9000));
        assert_eq!(
            evaluate(Decimal::from(9000), Some(&info), today()),
            PmsStatus::Overdue
        );
    }

    #[test]
    fn test_or_semantics_within_due_soon_tier() {
        // solo la condición de fecha aplica
        let info = due(Some(date(2025, 6, 3)), Some(20000));
        assert_eq!(
            evaluate(Decimal::from(10000), Some(&info), today()),
            PmsStatus::DueSoon
        );
        // solo la condición de odómetro aplica
        let info = due(Some(date(2025, 12, 1)), Some(10300));
        assert_eq!(
            evaluate(Decimal::from(10000), Some(&info), today()),
            PmsStatus::DueSoon
        );
    }

    #[test]
    fn test_idempotent_within_same_day() {
        let info = due(Some(date(2025, 6, 4)), Some(10400));
        let first = evaluate(Decimal::from(10000), Some(&info), today());
        let second = evaluate(Decimal::from(10000), Some(&info), today());
        assert_eq!(first, second);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(PmsStatus::Ok < PmsStatus::DueSoon);
        assert!(PmsStatus::DueSoon < PmsStatus::Overdue);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&PmsStatus::Ok).unwrap(), "\"OK\"");
        assert_eq!(serde_json::to_string(&PmsStatus::DueSoon).unwrap(), "\"DUE_SOON\"");
        assert_eq!(serde_json::to_string(&PmsStatus::Overdue).unwrap(), "\"OVERDUE\"");
    }

    #[test]
    fn test_is_reminder() {
        assert!(!is_reminder(PmsStatus::Ok));
        assert!(is_reminder(PmsStatus::DueSoon));
        assert!(is_reminder(PmsStatus::Overdue));
    }

    #[test]
    fn test_odometer_or_zero_accepts_numbers_and_numeric_strings() {
        assert_eq!(odometer_or_zero(&json!(10000)), Decimal::from(10000));
        assert_eq!(
            odometer_or_zero(&json!("10250.5")),
            "10250.5".parse::<Decimal>().unwrap()
        );
        assert_eq!(odometer_or_zero(&json!("  9800 ")), Decimal::from(9800));
    }

    #[test]
    fn test_odometer_or_zero_collapses_garbage_to_zero() {
        assert_eq!(odometer_or_zero(&json!("12O00")), Decimal::ZERO); // typo: letra O
        assert_eq!(odometer_or_zero(&json!(null)), Decimal::ZERO);
        assert_eq!(odometer_or_zero(&json!({})), Decimal::ZERO);
    }

    #[test]
    fn test_garbage_reading_can_mask_an_overdue_vehicle() {
        // Un odómetro mal tipeado colapsa a 0 y deja de disparar OVERDUE
        // por odómetro: el vehículo queda OK aunque en realidad ya pasó
        // el umbral. Comportamiento heredado, documentado a propósito.
        let info = due(None, Some(9500));
        let typoed = odometer_or_zero(&json!("1O000"));
        assert_eq!(evaluate(typoed, Some(&info), today()), PmsStatus::Ok);
        let real = odometer_or_zero(&json!(10000));
        assert_eq!(evaluate(real, Some(&info), today()), PmsStatus::Overdue);
    }

    #[test]
    fn test_default_next_due_date_adds_six_months() {
        assert_eq!(default_next_due_date(date(2025, 1, 15)), date(2025, 7, 15));
        // fin de mes: chrono recorta al último día válido
        assert_eq!(default_next_due_date(date(2024, 8, 31)), date(2025, 2, 28));
    }

    #[test]
    fn test_default_next_due_odometer_adds_5000() {
        assert_eq!(
            default_next_due_odometer(Decimal::from(12500)),
            Decimal::from(17500)
        );
    }
}
