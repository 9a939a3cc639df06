//! Schema reduction ahead of the engine-facing stages.

use tessera_core::ApplicationContent;
use tracing::instrument;

/// Deep-copy the supplied applications and drop every column whose primary
/// key the database generates itself.
///
/// The engine-facing stages run against the reduced copy so the engine never
/// writes to generated keys; the caller's originals stay untouched for the
/// restoration pass.
///
/// # Examples
///
/// ```
/// use tessera_pipeline::reduce_applications;
/// use tessera_core::ApplicationContent;
///
/// let apps: Vec<ApplicationContent> = vec![serde_json::from_value(serde_json::json!({
///     "name": "crm",
///     "tables": [{
///         "name": "users",
///         "primary_key": "auto_increment",
///         "columns": [
///             {"name": "id", "data_type": "integer", "primary_key": "auto_increment"},
///             {"name": "name", "data_type": "string"},
///         ],
///     }],
/// }))
/// .unwrap()];
///
/// let reduced = reduce_applications(&apps);
/// assert!(reduced[0].tables[0].column("id").is_none());
/// assert!(apps[0].tables[0].column("id").is_some());
/// ```
#[instrument(skip(applications), fields(applications = applications.len()))]
pub fn reduce_applications(applications: &[ApplicationContent]) -> Vec<ApplicationContent> {
    let mut reduced = applications.to_vec();
    for application in &mut reduced {
        for table in &mut application.tables {
            table.columns.retain(|column| {
                let keep = !column.primary_key.is_generated();
                if !keep {
                    tracing::debug!(
                        column = %column.name,
                        table = %table.name,
                        application = %application.name,
                        "Dropped generated key column from engine-facing schema"
                    );
                }
                keep
            });
        }
    }
    reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uuid_keys_are_dropped_too() {
        let apps: Vec<ApplicationContent> = vec![
            serde_json::from_value(json!({
                "name": "crm",
                "tables": [{
                    "name": "sessions",
                    "primary_key": "uuid",
                    "columns": [
                        {"name": "token", "data_type": "uuid", "primary_key": "uuid"},
                        {"name": "user", "data_type": "string"},
                    ],
                }],
            }))
            .unwrap(),
        ];
        let reduced = reduce_applications(&apps);
        let columns: Vec<&str> = reduced[0].tables[0]
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(columns, vec!["user"]);
    }

    #[test]
    fn plain_columns_survive() {
        let apps: Vec<ApplicationContent> = vec![
            serde_json::from_value(json!({
                "name": "crm",
                "tables": [{
                    "name": "users",
                    "columns": [
                        {"name": "name", "data_type": "string"},
                        {"name": "age", "data_type": "integer"},
                    ],
                }],
            }))
            .unwrap(),
        ];
        let reduced = reduce_applications(&apps);
        assert_eq!(reduced, apps);
    }
}
