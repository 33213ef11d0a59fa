use crate::config::StorageConfig;
use crate::pipeline::stage::Statement;

// The IAM role referenced here is resolved by the warehouse itself; no object
// storage credential ever passes through this process.

fn copy_events_request(storage: &StorageConfig) -> String {
    format!(
        r#"COPY staging_events
FROM '{}'
IAM_ROLE '{}'
REGION '{}'
FORMAT AS JSON '{}';"#,
        storage.log_data, storage.iam_role, storage.region, storage.log_jsonpath
    )
}

fn copy_songs_request(storage: &StorageConfig) -> String {
    format!(
        r#"COPY staging_songs
FROM '{}'
IAM_ROLE '{}'
REGION '{}'
FORMAT AS JSON 'auto';"#,
        storage.song_data, storage.iam_role, storage.region
    )
}

pub fn statements(storage: &StorageConfig) -> Vec<Statement> {
    vec![
        Statement {
            name: "staging_events",
            sql: copy_events_request(storage),
            requires: &[],
        },
        Statement {
            name: "staging_songs",
            sql: copy_songs_request(storage),
            requires: &[],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn create_mock_storage() -> StorageConfig {
        StorageConfig {
            log_data: "s3://bucket/log_data".to_string(),
            log_jsonpath: "s3://bucket/log_json_path.json".to_string(),
            song_data: "s3://bucket/song_data".to_string(),
            iam_role: "arn:aws:iam::000000000000:role/dwhRole".to_string(),
            region: "us-west-2".to_string(),
        }
    }

    #[test]
    fn test_copy_events_request() {
        let request = copy_events_request(&create_mock_storage());
        let expected = r#"COPY staging_events
FROM 's3://bucket/log_data'
IAM_ROLE 'arn:aws:iam::000000000000:role/dwhRole'
REGION 'us-west-2'
FORMAT AS JSON 's3://bucket/log_json_path.json';"#;
        assert_eq!(request, expected);
    }

    #[test]
    fn test_copy_songs_request() {
        let request = copy_songs_request(&create_mock_storage());
        let expected = r#"COPY staging_songs
FROM 's3://bucket/song_data'
IAM_ROLE 'arn:aws:iam::000000000000:role/dwhRole'
REGION 'us-west-2'
FORMAT AS JSON 'auto';"#;
        assert_eq!(request, expected);
    }

    #[test]
    fn test_statements_load_events_then_songs() {
        let statements = statements(&create_mock_storage());
        let names: Vec<&str> = statements.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["staging_events", "staging_songs"]);
    }
}
