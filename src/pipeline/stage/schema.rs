use crate::pipeline::stage::Statement;

// STAGING

const STAGING_EVENTS: &str = r#"
CREATE TABLE IF NOT EXISTS staging_events (
    artist TEXT,
    auth TEXT,
    first_name TEXT,
    gender TEXT,
    item_in_session INTEGER,
    last_name TEXT,
    length FLOAT,
    level TEXT,
    location TEXT,
    method TEXT,
    page TEXT,
    registration BIGINT,
    session_id INTEGER,
    song TEXT,
    status INTEGER,
    ts BIGINT,
    user_agent TEXT,
    user_id INTEGER
);
"#;

const STAGING_SONGS: &str = r#"
CREATE TABLE IF NOT EXISTS staging_songs (
    num_songs INTEGER,
    artist_id TEXT,
    artist_latitude FLOAT,
    artist_longitude FLOAT,
    artist_location TEXT,
    artist_name TEXT,
    song_id TEXT,
    title TEXT,
    duration FLOAT,
    year INTEGER
);
"#;

// DIMENSIONS

const USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY SORTKEY,
    first_name TEXT,
    last_name TEXT,
    gender TEXT,
    level TEXT
) DISTSTYLE ALL;
"#;

const SONGS: &str = r#"
CREATE TABLE IF NOT EXISTS songs (
    song_id TEXT PRIMARY KEY SORTKEY,
    title TEXT NOT NULL,
    artist_id TEXT,
    year INTEGER,
    duration FLOAT
);
"#;

const ARTISTS: &str = r#"
CREATE TABLE IF NOT EXISTS artists (
    artist_id TEXT PRIMARY KEY SORTKEY,
    name TEXT NOT NULL,
    location TEXT,
    latitude FLOAT,
    longitude FLOAT
) DISTSTYLE ALL;
"#;

const TIME: &str = r#"
CREATE TABLE IF NOT EXISTS time (
    start_time TIMESTAMP PRIMARY KEY SORTKEY,
    hour SMALLINT NOT NULL,
    day SMALLINT NOT NULL,
    week SMALLINT NOT NULL,
    month SMALLINT NOT NULL,
    year SMALLINT NOT NULL,
    weekday SMALLINT NOT NULL
) DISTSTYLE ALL;
"#;

// FACT

const SONGPLAYS: &str = r#"
CREATE TABLE IF NOT EXISTS songplays (
    songplay_id INTEGER IDENTITY(0,1) PRIMARY KEY,
    start_time TIMESTAMP NOT NULL REFERENCES time (start_time) SORTKEY,
    user_id INTEGER REFERENCES users (user_id),
    level TEXT,
    song_id TEXT REFERENCES songs (song_id) DISTKEY,
    artist_id TEXT REFERENCES artists (artist_id),
    session_id INTEGER,
    location TEXT,
    user_agent TEXT
);
"#;

pub fn create_statements() -> Vec<Statement> {
    vec![
        Statement {
            name: "staging_events",
            sql: STAGING_EVENTS.to_string(),
            requires: &[],
        },
        Statement {
            name: "staging_songs",
            sql: STAGING_SONGS.to_string(),
            requires: &[],
        },
        Statement {
            name: "users",
            sql: USERS.to_string(),
            requires: &[],
        },
        Statement {
            name: "songs",
            sql: SONGS.to_string(),
            requires: &[],
        },
        Statement {
            name: "artists",
            sql: ARTISTS.to_string(),
            requires: &[],
        },
        Statement {
            name: "time",
            sql: TIME.to_string(),
            requires: &[],
        },
        Statement {
            name: "songplays",
            sql: SONGPLAYS.to_string(),
            requires: &["users", "songs", "artists", "time"],
        },
    ]
}

// Drops are derived from the create list, reversed so the fact table goes
// before the dimensions it references.
pub fn drop_statements() -> Vec<Statement> {
    create_statements()
        .iter()
        .rev()
        .map(|statement| Statement {
            name: statement.name,
            sql: format!("DROP TABLE IF EXISTS {};", statement.name),
            requires: &[],
        })
        .collect()
}
