use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied once and recorded in the `log` table.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20260902_0001_create_core_tables",
        description: "Created dogs, reference_clips, sessions, attempts and validated_postures tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS dogs (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            breed       TEXT,
            owner_name  TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS reference_clips (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            posture     TEXT NOT NULL CHECK(posture IN ('assis','debout','a_pieds')),
            video_path  TEXT NOT NULL UNIQUE,
            description TEXT
        );

        CREATE TABLE IF NOT EXISTS sessions (
            id                      INTEGER PRIMARY KEY AUTOINCREMENT,
            dog_id                  INTEGER NOT NULL REFERENCES dogs(id),
            posture                 TEXT NOT NULL CHECK(posture IN ('assis','debout','a_pieds')),
            started_at              TEXT NOT NULL,
            ended_at                TEXT,
            total_frames_processed  INTEGER NOT NULL DEFAULT 0,
            validated               INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS attempts (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            session_id       INTEGER NOT NULL REFERENCES sessions(id),
            clip_id          INTEGER NOT NULL REFERENCES reference_clips(id),
            posture          TEXT NOT NULL CHECK(posture IN ('assis','debout','a_pieds')),
            confidence       REAL NOT NULL,
            outcome          TEXT NOT NULL CHECK(outcome IN ('success','fail')),
            recorded_at      TEXT NOT NULL,
            processing_ms    INTEGER,
            frames_processed INTEGER
        );

        CREATE TABLE IF NOT EXISTS validated_postures (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            dog_id        INTEGER NOT NULL REFERENCES dogs(id),
            posture       TEXT NOT NULL CHECK(posture IN ('assis','debout','a_pieds')),
            session_id    INTEGER NOT NULL REFERENCES sessions(id),
            validated_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20260916_0002_add_lookup_indexes",
        description: "Added lookup indexes and one-validation-per-session constraint",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_clips_posture ON reference_clips(posture, id);
        CREATE INDEX IF NOT EXISTS idx_attempts_session ON attempts(session_id, outcome);
        CREATE INDEX IF NOT EXISTS idx_sessions_dog ON sessions(dog_id);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_validated_session ON validated_postures(session_id);
        "#,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()
}

/// Versions already recorded in the `log` table, oldest first.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;

    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Versions known to this build but not yet applied to `conn`.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut pending = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            pending.push(m.version);
        }
    }
    Ok(pending)
}

/// Apply every migration not yet recorded, in order. Returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;
    let mut applied = 0;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        log::info!("Migration applied: {}", m.version);
        applied += 1;
    }

    Ok(applied)
}
