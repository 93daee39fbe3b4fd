// Diagnostic alert domain model
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    Critical,
}

/// A diagnostic event raised against a device. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticAlert {
    pub id: String,
    pub device_id: String,
    pub severity: Severity,
    pub component: String,
    pub confidence: u8,
    pub message: String,
    pub timestamp: String,
    pub code: String,
}

impl DiagnosticAlert {
    pub fn new(
        id: &str,
        device_id: &str,
        severity: Severity,
        component: &str,
        confidence: u8,
        message: &str,
        timestamp: &str,
        code: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            device_id: device_id.to_string(),
            severity,
            component: component.to_string(),
            confidence: confidence.min(100),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
            code: code.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_capped() {
        let alert = DiagnosticAlert::new(
            "a", "dev", Severity::Low, "Filter", 140, "msg", "now", "ERR-1",
        );
        assert_eq!(alert.confidence, 100);
    }

    #[test]
    fn test_serializes_camel_case_with_lowercase_severity() {
        let alert = DiagnosticAlert::new(
            "alert_09", "dev_01", Severity::Critical, "Blower Motor", 94, "msg", "Today", "ERR-309",
        );
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["deviceId"], "dev_01");
        assert_eq!(json["severity"], "critical");
        assert_eq!(json["code"], "ERR-309");
    }
}
