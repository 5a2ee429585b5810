//! QuickScan intake submission

use serde::{Deserialize, Serialize};

use super::validation::{check_range, Validate, ValidationErrors};

/// Smallest accepted company size
pub const MIN_EMPLOYEES: i64 = 1;

/// Largest accepted company size
pub const MAX_EMPLOYEES: i64 = 500;

/// A prospective client's description of their company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickScan {
    /// Links the scan to a company; free text
    pub company_name: String,
    pub sector: String,
    pub employees: i64,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub goals: Option<Vec<String>>,
}

impl Validate for QuickScan {
    fn violations(&self) -> ValidationErrors {
        let mut errors = Vec::new();
        check_range(
            &mut errors,
            "employees",
            self.employees,
            MIN_EMPLOYEES,
            MAX_EMPLOYEES,
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_lists_default() {
        let scan: QuickScan = serde_json::from_value(json!({
            "company_name": "Bakkerij Bol",
            "sector": "Horeca",
            "employees": 3
        }))
        .unwrap();

        assert!(scan.challenges.is_empty());
        assert_eq!(scan.goals, None);
        assert!(scan.validate().is_ok());
    }

    #[test]
    fn test_employee_bounds() {
        let mut scan: QuickScan = serde_json::from_value(json!({
            "company_name": "X",
            "sector": "bouw",
            "employees": 0,
            "challenges": ["administratie"]
        }))
        .unwrap();
        let errors = scan.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "employees");

        scan.employees = 501;
        assert!(scan.validate().is_err());

        scan.employees = 500;
        assert!(scan.validate().is_ok());
    }

    #[test]
    fn test_missing_required_field_fails_to_parse() {
        let result: Result<QuickScan, _> = serde_json::from_value(json!({
            "company_name": "X",
            "employees": 10
        }));
        assert!(result.is_err());
    }
}
