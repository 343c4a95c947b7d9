//! SQL statements for the employees table.

use seed_core::EMPLOYEE_COLUMNS;

/// Generate the parameterized INSERT statement for one employee row.
pub fn generate_insert(table_name: &str) -> String {
    let columns = EMPLOYEE_COLUMNS
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=EMPLOYEE_COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!("INSERT INTO \"{table_name}\" ({columns}) VALUES ({placeholders})")
}

/// Generate CREATE TABLE statement for the employees table.
pub fn generate_create_table(table_name: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS \"{table_name}\" (\
         \"id\" SERIAL PRIMARY KEY, \
         \"full_name\" VARCHAR(255) NOT NULL, \
         \"phone_number\" VARCHAR(255), \
         \"email_address\" VARCHAR(255), \
         \"gender\" VARCHAR(255), \
         \"job_role_id\" INTEGER NOT NULL, \
         \"employment_date\" TIMESTAMPTZ, \
         \"termination_date\" TIMESTAMPTZ, \
         \"emp_status_code\" VARCHAR(255) NOT NULL)"
    )
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(table_name: &str) -> String {
    format!("DROP TABLE IF EXISTS \"{table_name}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_insert() {
        let sql = generate_insert("employees");
        assert_eq!(
            sql,
            "INSERT INTO \"employees\" (\"full_name\", \"phone_number\", \"email_address\", \
             \"gender\", \"job_role_id\", \"employment_date\", \"termination_date\", \
             \"emp_status_code\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8)"
        );
    }

    #[test]
    fn test_generate_create_table() {
        let sql = generate_create_table("employees");

        assert!(sql.contains("CREATE TABLE IF NOT EXISTS \"employees\""));
        assert!(sql.contains("\"id\" SERIAL PRIMARY KEY"));
        assert!(sql.contains("\"full_name\" VARCHAR(255) NOT NULL"));
        assert!(sql.contains("\"job_role_id\" INTEGER NOT NULL"));
        assert!(sql.contains("\"termination_date\" TIMESTAMPTZ,"));
        assert!(sql.contains("\"emp_status_code\" VARCHAR(255) NOT NULL)"));
    }

    #[test]
    fn test_generate_drop_table() {
        let sql = generate_drop_table("employees");
        assert_eq!(sql, "DROP TABLE IF EXISTS \"employees\"");
    }
}
