//! Разбор ответа списка работ.
//!
//! Внешняя таблица отдаёт значения без строгих типов: серийный номер может
//! прийти числом или строкой, телефон часто приходит числом. Каждое поле
//! приводится к ожидаемому типу, а не десериализуется строго.

use serde_json::{Map, Number, Value};
use thiserror::Error;

use super::aggregate::Job;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobListError {
    #[error("response is not valid JSON: {0}")]
    Json(String),
    #[error("expected a JSON array of jobs, got {0}")]
    NotAnArray(&'static str),
}

/// Разобрать тело ответа GET в список работ.
///
/// Тело, которое не является JSON-массивом, считается ошибкой целиком:
/// частичного результата не бывает.
pub fn parse_job_list(body: &str) -> Result<Vec<Job>, JobListError> {
    let value: Value = serde_json::from_str(body).map_err(|e| JobListError::Json(e.to_string()))?;
    match value {
        Value::Array(items) => Ok(items.iter().map(coerce_job).collect()),
        other => Err(JobListError::NotAnArray(kind_of(&other))),
    }
}

fn coerce_job(item: &Value) -> Job {
    let empty = Map::new();
    let fields = item.as_object().unwrap_or(&empty);

    Job {
        serial: fields.get("serial").and_then(coerce_serial),
        customer: coerce_text(fields.get("customer")),
        plate: coerce_text(fields.get("plate")),
        phone: coerce_text(fields.get("phone")),
        status: coerce_text(fields.get("status")),
        service_type: match fields.get("serviceType") {
            None | Some(Value::Null) => None,
            Some(v) => Some(coerce_text(Some(v))),
        },
    }
}

fn coerce_serial(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => number_to_i64(n),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn number_to_i64(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if let Some(u) = n.as_u64() {
        return i64::try_from(u).ok();
    }
    n.as_f64().and_then(integral)
}

fn integral(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up, so the upper bound is exclusive
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn coerce_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_to_text(n),
        Some(other) => other.to_string(),
    }
}

fn number_to_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
