use crate::pipeline::stage::Statement;

// DIMENSIONS

// Staging holds one event row per song play, so a user appears many times;
// the most recent row wins to capture the current subscription level.
const USERS: &str = r#"
INSERT INTO users (user_id, first_name, last_name, gender, level)
SELECT user_id, first_name, last_name, gender, level
FROM
(
    SELECT
        user_id,
        first_name,
        last_name,
        gender,
        level,
        ROW_NUMBER() OVER (PARTITION BY user_id ORDER BY ts DESC) AS row_num
    FROM staging_events
    WHERE page = 'NextSong' AND user_id IS NOT NULL
) ranked
WHERE row_num = 1;
"#;

const SONGS: &str = r#"
INSERT INTO songs (song_id, title, artist_id, year, duration)
SELECT DISTINCT song_id, title, artist_id, year, duration
FROM staging_songs
WHERE song_id IS NOT NULL;
"#;

const ARTISTS: &str = r#"
INSERT INTO artists (artist_id, name, location, latitude, longitude)
SELECT artist_id, artist_name, artist_location, artist_latitude, artist_longitude
FROM
(
    SELECT
        artist_id,
        artist_name,
        artist_location,
        artist_latitude,
        artist_longitude,
        ROW_NUMBER() OVER (PARTITION BY artist_id ORDER BY num_songs DESC) AS row_num
    FROM staging_songs
    WHERE artist_id IS NOT NULL
) ranked
WHERE row_num = 1;
"#;

const TIME: &str = r#"
INSERT INTO time (start_time, hour, day, week, month, year, weekday)
SELECT DISTINCT
    start_time,
    EXTRACT(hour FROM start_time),
    EXTRACT(day FROM start_time),
    EXTRACT(week FROM start_time),
    EXTRACT(month FROM start_time),
    EXTRACT(year FROM start_time),
    EXTRACT(dow FROM start_time)
FROM
(
    SELECT TIMESTAMP 'epoch' + ts / 1000 * INTERVAL '1 second' AS start_time
    FROM staging_events
    WHERE page = 'NextSong'
) events;
"#;

// FACT

const SONGPLAYS: &str = r#"
INSERT INTO songplays (start_time, user_id, level, song_id, artist_id, session_id, location, user_agent)
SELECT
    TIMESTAMP 'epoch' + se.ts / 1000 * INTERVAL '1 second' AS start_time,
    se.user_id,
    se.level,
    ss.song_id,
    ss.artist_id,
    se.session_id,
    se.location,
    se.user_agent
FROM staging_events se
LEFT JOIN staging_songs ss
    ON se.song = ss.title
    AND se.artist = ss.artist_name
    AND se.length = ss.duration
WHERE se.page = 'NextSong';
"#;

pub fn statements() -> Vec<Statement> {
    vec![
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
