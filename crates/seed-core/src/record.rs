//! The synthetic employee record and its enumerated fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Insertable columns of the employees table, in bind order.
///
/// The auto-increment `id` column is assigned by the store.
pub const EMPLOYEE_COLUMNS: [&str; 8] = [
    "full_name",
    "phone_number",
    "email_address",
    "gender",
    "job_role_id",
    "employment_date",
    "termination_date",
    "emp_status_code",
];

/// Default name of the employees table.
pub const DEFAULT_TABLE_NAME: &str = "employees";

/// Employment status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmpStatus {
    New,
    Active,
    Leaving,
    Terminated,
}

impl EmpStatus {
    /// All status codes, in the order they are drawn from.
    pub const ALL: [EmpStatus; 4] = [
        EmpStatus::New,
        EmpStatus::Active,
        EmpStatus::Leaving,
        EmpStatus::Terminated,
    ];

    /// Code stored in the `emp_status_code` column.
    pub fn code(&self) -> &'static str {
        match self {
            EmpStatus::New => "NEW",
            EmpStatus::Active => "ACTIVE",
            EmpStatus::Leaving => "LEAVING",
            EmpStatus::Terminated => "TERMINATED",
        }
    }

    /// Whether a record with this status carries a termination date.
    pub fn has_termination_date(&self) -> bool {
        matches!(self, EmpStatus::Leaving | EmpStatus::Terminated)
    }
}

impl fmt::Display for EmpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for EmpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(EmpStatus::New),
            "ACTIVE" => Ok(EmpStatus::Active),
            "LEAVING" => Ok(EmpStatus::Leaving),
            "TERMINATED" => Ok(EmpStatus::Terminated),
            other => Err(format!("unknown employee status code: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated employee, ready to be inserted.
///
/// Records are produced by the generator, handed to a store transaction and
/// dropped once inserted. Use [`EmployeeRecord::check_consistency`] to verify
/// the status/termination-date relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub full_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub gender: Gender,
    pub job_role_id: i32,
    pub employment_date: DateTime<Utc>,
    pub termination_date: Option<DateTime<Utc>>,
    pub emp_status_code: EmpStatus,
}

impl EmployeeRecord {
    /// Check the termination-date invariant against the window upper bound.
    ///
    /// Returns a description of the first violation found.
    pub fn check_consistency(&self, window_end: DateTime<Utc>) -> Result<(), String> {
        match (self.emp_status_code.has_termination_date(), self.termination_date) {
            (true, None) => Err(format!(
                "status {} requires a termination date",
                self.emp_status_code
            )),
            (false, Some(_)) => Err(format!(
                "status {} must not have a termination date",
                self.emp_status_code
            )),
            (true, Some(terminated)) => {
                if terminated < self.employment_date {
                    Err(format!(
                        "termination date {terminated} precedes employment date {}",
                        self.employment_date
                    ))
                } else if terminated > window_end {
                    Err(format!(
                        "termination date {terminated} is after window end {window_end}"
                    ))
                } else {
                    Ok(())
                }
            }
            (false, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(status: EmpStatus, termination: Option<DateTime<Utc>>) -> EmployeeRecord {
        EmployeeRecord {
            full_name: "Employee 42".to_string(),
            phone_number: "0123456789".to_string(),
            email_address: "Employee42@company.com".to_string(),
            gender: Gender::Female,
            job_role_id: 3,
            employment_date: Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap(),
            termination_date: termination,
            emp_status_code: status,
        }
    }

    #[test]
    fn test_status_codes_round_trip_through_str() {
        for status in EmpStatus::ALL {
            assert_eq!(status.code().parse::<EmpStatus>().unwrap(), status);
        }
        assert!("RETIRED".parse::<EmpStatus>().is_err());
    }

    #[test]
    fn test_termination_date_statuses() {
        assert!(!EmpStatus::New.has_termination_date());
        assert!(!EmpStatus::Active.has_termination_date());
        assert!(EmpStatus::Leaving.has_termination_date());
        assert!(EmpStatus::Terminated.has_termination_date());
    }

    #[test]
    fn test_check_consistency() {
        let window_end = Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap();
        let inside = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        assert!(record(EmpStatus::New, None).check_consistency(window_end).is_ok());
        assert!(record(EmpStatus::New, Some(inside))
            .check_consistency(window_end)
            .is_err());
        assert!(record(EmpStatus::Leaving, None)
            .check_consistency(window_end)
            .is_err());
        assert!(record(EmpStatus::Terminated, Some(inside))
            .check_consistency(window_end)
            .is_ok());
        assert!(record(EmpStatus::Terminated, Some(before))
            .check_consistency(window_end)
            .is_err());
        assert!(record(EmpStatus::Leaving, Some(after))
            .check_consistency(window_end)
            .is_err());
    }

    #[test]
    fn test_serialized_status_uses_codes() {
        let json = serde_json::to_string(&record(EmpStatus::Active, None)).unwrap();
        assert!(json.contains("\"emp_status_code\":\"ACTIVE\""));
        assert!(json.contains("\"gender\":\"Female\""));
    }
}
