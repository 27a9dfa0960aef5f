use crate::db::migrate::applied_migrations;
use crate::db::pool::DbPool;
use crate::models::posture::Posture;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Row counts shown by `db --info`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DbCounts {
    pub dogs: i64,
    pub clips: i64,
    pub sessions_open: i64,
    pub sessions_validated: i64,
    pub attempts: i64,
    pub validated_postures: i64,
}

fn count(pool: &DbPool, sql: &str) -> rusqlite::Result<i64> {
    pool.conn.query_row(sql, [], |row| row.get(0))
}

pub fn collect_counts(pool: &DbPool) -> rusqlite::Result<DbCounts> {
    Ok(DbCounts {
        dogs: count(pool, "SELECT COUNT(*) FROM dogs")?,
        clips: count(pool, "SELECT COUNT(*) FROM reference_clips")?,
        sessions_open: count(pool, "SELECT COUNT(*) FROM sessions WHERE validated = 0")?,
        sessions_validated: count(pool, "SELECT COUNT(*) FROM sessions WHERE validated = 1")?,
        attempts: count(pool, "SELECT COUNT(*) FROM attempts")?,
        validated_postures: count(pool, "SELECT COUNT(*) FROM validated_postures")?,
    })
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let c = collect_counts(pool)?;
    println!("{}• Dogs:{} {}{}{}", CYAN, RESET, GREEN, c.dogs, RESET);
    println!(
        "{}• Sessions:{} {} open, {} validated",
        CYAN, RESET, c.sessions_open, c.sessions_validated
    );
    println!("{}• Attempts:{} {}", CYAN, RESET, c.attempts);
    println!(
        "{}• Validated postures:{} {}",
        CYAN, RESET, c.validated_postures
    );

    //
    // 3) CLIPS PER POSTURE
    //
    println!("{}• Reference clips:{} {}", CYAN, RESET, c.clips);
    for p in Posture::ALL {
        let n: i64 = pool.conn.query_row(
            "SELECT COUNT(*) FROM reference_clips WHERE posture = ?1",
            [p.to_db_str()],
            |row| row.get(0),
        )?;
        let color = if n == 0 { GREY } else { RESET };
        println!("    {color}{:<8} {n}{RESET}", p.to_db_str());
    }

    //
    // 4) SCHEMA VERSION
    //
    let migrations = applied_migrations(&pool.conn)?;
    let last = migrations
        .last()
        .cloned()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Schema:{} {}", CYAN, RESET, last);

    println!();
    Ok(())
}
