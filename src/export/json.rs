//! JSON Export functionality
//!
//! Exports the profile together with its computed budget as a single
//! versioned document.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BudgeterError, BudgeterResult};
use crate::models::{BudgetResult, UserProfile};
use crate::reports::BudgetSummaryReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A profile and the budget computed from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// When this export was created
    pub exported_at: DateTime<Utc>,

    /// Application version that created this export
    #[serde(default)]
    pub app_version: String,

    pub profile: UserProfile,

    pub result: BudgetResult,
}

impl BudgetExport {
    /// Snapshot a generated report
    pub fn from_report(report: &BudgetSummaryReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            profile: report.profile.clone(),
            result: report.result.clone(),
        }
    }

    /// Check that this export can be read by this version
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }
        Ok(())
    }
}

/// Export a report to JSON
pub fn export_json<W: Write>(
    report: &BudgetSummaryReport,
    writer: &mut W,
    pretty: bool,
) -> BudgeterResult<()> {
    let export = BudgetExport::from_report(report);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| BudgeterError::Export(e.to_string()))?;
    writeln!(writer)?;

    Ok(())
}

/// Read an export back (for verification)
pub fn import_from_json(json_str: &str) -> BudgeterResult<BudgetExport> {
    let export: BudgetExport = serde_json::from_str(json_str)?;
    export.validate().map_err(BudgeterError::Validation)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BillEntry, Cadence};
    use crate::services::ProfileSource;
    use crate::storage::ReferenceData;

    fn report() -> BudgetSummaryReport {
        let mut profile = UserProfile::new("US", Cadence::Annual);
        profile.income = 60000.0;
        profile.housing_cost = 1500.0;
        profile.add_bill(BillEntry::new("Gym", 40.0, Cadence::Monthly));
        BudgetSummaryReport::generate(
            profile,
            ProfileSource::Remembered,
            &ReferenceData::bundled().unwrap(),
        )
    }

    #[test]
    fn test_json_export_fields() {
        let mut output = Vec::new();
        export_json(&report(), &mut output, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["profile"]["income"], 60000.0);
        assert_eq!(value["result"]["income"]["gross_monthly"], 5000.0);
        assert!(value["exported_at"].is_string());
    }

    #[test]
    fn test_json_roundtrip() {
        let report = report();
        let mut output = Vec::new();
        export_json(&report, &mut output, false).unwrap();

        let imported = import_from_json(std::str::from_utf8(&output).unwrap()).unwrap();
        assert_eq!(imported.profile, report.profile);
        assert_eq!(imported.result.income.gross_monthly, 5000.0);
        assert_eq!(imported.result.spending.breakdown.len(), 1);
    }

    #[test]
    fn test_schema_mismatch_rejected() {
        let mut export = BudgetExport::from_report(&report());
        export.schema_version = "0.1.0".into();
        let json = serde_json::to_string(&export).unwrap();

        let err = import_from_json(&json).unwrap_err();
        assert!(err.is_validation());
    }
}
