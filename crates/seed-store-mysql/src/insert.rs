//! SQL statements and parameter binding for the employees table.

use chrono::{DateTime, Utc};
use mysql_async::{Params, Value};
use seed_core::{EmployeeRecord, EMPLOYEE_COLUMNS};

/// Format used for DATETIME(3) columns. Values are stored in UTC.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Generate the parameterized INSERT statement for one employee row.
pub fn generate_insert(table_name: &str) -> String {
    let columns = EMPLOYEE_COLUMNS
        .iter()
        .map(|c| format!("`{c}`"))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = EMPLOYEE_COLUMNS
        .iter()
        .map(|_| "?")
        .collect::<Vec<_>>()
        .join(", ");

    format!("INSERT INTO `{table_name}` ({columns}) VALUES ({placeholders})")
}

/// Bind a record's fields in [`EMPLOYEE_COLUMNS`] order.
pub fn record_params(record: &EmployeeRecord) -> Params {
    Params::Positional(vec![
        Value::from(record.full_name.as_str()),
        Value::from(record.phone_number.as_str()),
        Value::from(record.email_address.as_str()),
        Value::from(record.gender.as_str()),
        Value::from(record.job_role_id),
        Value::from(format_datetime(&record.employment_date)),
        Value::from(record.termination_date.as_ref().map(format_datetime)),
        Value::from(record.emp_status_code.code()),
    ])
}

fn format_datetime(instant: &DateTime<Utc>) -> String {
    instant.format(DATETIME_FORMAT).to_string()
}

/// Generate CREATE TABLE statement for the employees table.
pub fn generate_create_table(table_name: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS `{table_name}` (\
         `id` INT NOT NULL AUTO_INCREMENT, \
         `full_name` VARCHAR(255) NOT NULL, \
         `phone_number` VARCHAR(255), \
         `email_address` VARCHAR(255), \
         `gender` VARCHAR(255), \
         `job_role_id` INT NOT NULL, \
         `employment_date` DATETIME(3), \
         `termination_date` DATETIME(3), \
         `emp_status_code` VARCHAR(255) NOT NULL, \
         PRIMARY KEY (`id`))"
    )
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(table_name: &str) -> String {
    format!("DROP TABLE IF EXISTS `{table_name}`")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use seed_core::{EmpStatus, Gender};

    fn record(termination_date: Option<DateTime<Utc>>) -> EmployeeRecord {
        EmployeeRecord {
            full_name: "Employee 7".to_string(),
            phone_number: "0000000007".to_string(),
            email_address: "Employee7@company.com".to_string(),
            gender: Gender::Male,
            job_role_id: 4,
            employment_date: Utc.with_ymd_and_hms(2021, 2, 3, 4, 5, 6).unwrap(),
            termination_date,
            emp_status_code: if termination_date.is_some() {
                EmpStatus::Leaving
            } else {
                EmpStatus::New
            },
        }
    }

    #[test]
    fn test_generate_insert() {
        assert_eq!(
            generate_insert("employees"),
            "INSERT INTO `employees` (`full_name`, `phone_number`, `email_address`, `gender`, \
             `job_role_id`, `employment_date`, `termination_date`, `emp_status_code`) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        );
    }

    #[test]
    fn test_record_params_order() {
        let terminated = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let Params::Positional(values) = record_params(&record(Some(terminated))) else {
            panic!("expected positional params");
        };

        assert_eq!(values.len(), EMPLOYEE_COLUMNS.len());
        assert_eq!(values[0], Value::from("Employee 7"));
        assert_eq!(values[3], Value::from("Male"));
        assert_eq!(values[4], Value::from(4i32));
        assert_eq!(values[5], Value::from("2021-02-03 04:05:06.000"));
        assert_eq!(values[6], Value::from("2023-01-01 00:00:00.000"));
        assert_eq!(values[7], Value::from("LEAVING"));
    }

    #[test]
    fn test_absent_termination_date_is_null() {
        let Params::Positional(values) = record_params(&record(None)) else {
            panic!("expected positional params");
        };
        assert_eq!(values[6], Value::NULL);
        assert_eq!(values[7], Value::from("NEW"));
    }

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table("employees");
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS `employees`"));
        assert!(sql.contains("`id` INT NOT NULL AUTO_INCREMENT"));
        assert!(sql.contains("`employment_date` DATETIME(3)"));
        assert!(sql.contains("PRIMARY KEY (`id`)"));
    }

    #[test]
    fn test_generate_drop_table() {
        assert_eq!(
            generate_drop_table("employees"),
            "DROP TABLE IF EXISTS `employees`"
        );
    }
}
