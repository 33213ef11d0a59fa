//! Tests that run against a live cluster. Ignored by default; set the
//! STARLOAD_TEST_* environment variables and run with `cargo test -- --ignored`.

use starload::config::{ClusterConfig, StorageConfig};
use starload::pipeline::database::connect;
use starload::pipeline::execute_step;
use starload::pipeline::stage::{copy, insert, schema};
use tokio_postgres::Client;

fn cluster_from_env() -> ClusterConfig {
    ClusterConfig {
        host: std::env::var("STARLOAD_TEST_HOST").expect("STARLOAD_TEST_HOST must be set"),
        dbname: std::env::var("STARLOAD_TEST_DBNAME").expect("STARLOAD_TEST_DBNAME must be set"),
        user: std::env::var("STARLOAD_TEST_USER").expect("STARLOAD_TEST_USER must be set"),
        password: std::env::var("STARLOAD_TEST_PASSWORD")
            .expect("STARLOAD_TEST_PASSWORD must be set"),
        port: std::env::var("STARLOAD_TEST_PORT")
            .map(|port| port.parse().expect("STARLOAD_TEST_PORT must be a port"))
            .unwrap_or(5439),
        statement_timeout: None,
    }
}

fn storage_from_env() -> StorageConfig {
    StorageConfig {
        log_data: std::env::var("STARLOAD_TEST_LOG_DATA")
            .expect("STARLOAD_TEST_LOG_DATA must be set"),
        log_jsonpath: std::env::var("STARLOAD_TEST_LOG_JSONPATH")
            .expect("STARLOAD_TEST_LOG_JSONPATH must be set"),
        song_data: std::env::var("STARLOAD_TEST_SONG_DATA")
            .expect("STARLOAD_TEST_SONG_DATA must be set"),
        iam_role: std::env::var("STARLOAD_TEST_IAM_ROLE")
            .expect("STARLOAD_TEST_IAM_ROLE must be set"),
        region: std::env::var("STARLOAD_TEST_REGION").unwrap_or("us-west-2".to_string()),
    }
}

async fn count(client: &Client, request: &str) -> i64 {
    let row = client.query_one(request, &[]).await.unwrap();
    row.get(0)
}

async fn count_tables(client: &Client) -> i64 {
    let row = client
        .query_one(
            r#"SELECT COUNT(*)
               FROM information_schema.tables
               WHERE table_schema = 'public'
               AND table_name IN ('staging_events', 'staging_songs', 'users',
                                  'songs', 'artists', 'time', 'songplays');"#,
            &[],
        )
        .await
        .unwrap();
    row.get(0)
}

#[tokio::test]
#[ignore = "requires a reachable cluster"]
async fn test_drop_then_create_builds_the_full_schema() {
    let client = connect(&cluster_from_env()).await.unwrap();

    execute_step(&client, "drop", &schema::drop_statements(), None)
        .await
        .unwrap();
    assert_eq!(count_tables(&client).await, 0);

    execute_step(&client, "create", &schema::create_statements(), None)
        .await
        .unwrap();
    assert_eq!(count_tables(&client).await, 7);
}

#[tokio::test]
#[ignore = "requires a reachable cluster"]
async fn test_drop_then_create_twice_is_idempotent() {
    let client = connect(&cluster_from_env()).await.unwrap();

    for _ in 0..2 {
        execute_step(&client, "drop", &schema::drop_statements(), None)
            .await
            .unwrap();
        execute_step(&client, "create", &schema::create_statements(), None)
            .await
            .unwrap();
    }

    assert_eq!(count_tables(&client).await, 7);
}

// Row counts in every analytics table must match counts recomputed from the
// staged fixture data, so the insert step can neither drop nor duplicate rows.
#[tokio::test]
#[ignore = "requires a reachable cluster and fixture data in object storage"]
async fn test_copy_then_insert_row_counts_match_staging() {
    let client = connect(&cluster_from_env()).await.unwrap();

    execute_step(&client, "drop", &schema::drop_statements(), None)
        .await
        .unwrap();
    execute_step(&client, "create", &schema::create_statements(), None)
        .await
        .unwrap();
    execute_step(&client, "copy", &copy::statements(&storage_from_env()), None)
        .await
        .unwrap();
    execute_step(&client, "insert", &insert::statements(), None)
        .await
        .unwrap();

    let expectations = [
        (
            "users",
            r#"SELECT COUNT(DISTINCT user_id) FROM staging_events
               WHERE page = 'NextSong' AND user_id IS NOT NULL;"#,
        ),
        (
            "songs",
            "SELECT COUNT(DISTINCT song_id) FROM staging_songs WHERE song_id IS NOT NULL;",
        ),
        (
            "artists",
            "SELECT COUNT(DISTINCT artist_id) FROM staging_songs WHERE artist_id IS NOT NULL;",
        ),
        (
            "time",
            r#"SELECT COUNT(DISTINCT TIMESTAMP 'epoch' + ts / 1000 * INTERVAL '1 second')
               FROM staging_events WHERE page = 'NextSong';"#,
        ),
        (
            "songplays",
            r#"SELECT COUNT(*)
               FROM staging_events se
               LEFT JOIN staging_songs ss
                   ON se.song = ss.title
                   AND se.artist = ss.artist_name
                   AND se.length = ss.duration
               WHERE se.page = 'NextSong';"#,
        ),
    ];

    for (table, expected_request) in expectations {
        let expected = count(&client, expected_request).await;
        let loaded = count(&client, &format!("SELECT COUNT(*) FROM {table};")).await;
        assert!(expected > 0, "fixture staged no rows for {table}");
        assert_eq!(loaded, expected, "row count mismatch in {table}");
    }
}
