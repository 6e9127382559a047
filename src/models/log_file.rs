// Log file naming convention
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt;

const TIMESTAMP_LEN: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "INFO" => Some(LogLevel::Info),
            "WARNING" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level suffix used by the `<prefix>.<LEVEL>` symlinks. Note `WARN`, not `WARNING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerLevel {
    Info,
    Warn,
    Error,
}

impl PointerLevel {
    pub const ALL: [PointerLevel; 3] = [PointerLevel::Info, PointerLevel::Warn, PointerLevel::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            PointerLevel::Info => "INFO",
            PointerLevel::Warn => "WARN",
            PointerLevel::Error => "ERROR",
        }
    }

    pub fn pointer_name(&self, prefix: &str) -> String {
        format!("{}.{}", prefix, self.as_str())
    }

    /// Matches `name` against the three pointer names for `prefix`.
    pub fn from_pointer_name(name: &str, prefix: &str) -> Option<Self> {
        let suffix = name.strip_prefix(prefix)?.strip_prefix('.')?;
        Self::ALL.into_iter().find(|level| level.as_str() == suffix)
    }
}

/// A parsed `<prefix>.<host>.<app>.log.<LEVEL>.<YYYYMMDD-HHMMSS>.<pid>` filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFileName {
    pub host: String,
    pub app: String,
    pub level: LogLevel,
    pub timestamp: DateTime<Local>,
    pub pid: u64,
}

impl LogFileName {
    /// Parses `name` for the given prefix. Anything that does not match the
    /// convention exactly yields `None`.
    pub fn parse(name: &str, prefix: &str) -> Option<Self> {
        if prefix.is_empty() {
            return None;
        }
        let rest = name.strip_prefix(prefix)?.strip_prefix('.')?;

        // Exactly six fields after the prefix; a dot in host or app would
        // let a longer prefix such as `vulcan.test` anchor on `vulcan`.
        let fields: Vec<&str> = rest.split('.').collect();
        let [host, app, marker, level, timestamp, pid] = fields.as_slice() else {
            return None;
        };

        if *marker != "log" || host.is_empty() || app.is_empty() {
            return None;
        }

        let level = LogLevel::from_name(level)?;
        let timestamp = parse_timestamp(timestamp)?;
        let pid = parse_pid(pid)?;

        Some(Self {
            host: host.to_string(),
            app: app.to_string(),
            level,
            timestamp,
            pid,
        })
    }

    pub fn file_name(&self, prefix: &str) -> String {
        format!(
            "{}.{}.{}.log.{}.{}.{}",
            prefix,
            self.host,
            self.app,
            self.level,
            format_timestamp(&self.timestamp),
            self.pid
        )
    }
}

pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%Y%m%d-%H%M%S").to_string()
}

/// Fixed-width `YYYYMMDD-HHMMSS` in local time.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let bytes = raw.as_bytes();
    if bytes.len() != TIMESTAMP_LEN || bytes[8] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 8 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let field = |range: std::ops::Range<usize>| raw[range].parse::<u32>().ok();
    let year = field(0..4)? as i32;
    let date = NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?)?;
    let time = chrono::NaiveTime::from_hms_opt(field(9..11)?, field(11..13)?, field(13..15)?)?;

    resolve_local(Local.from_local_datetime(&NaiveDateTime::new(date, time)))
}

/// An autumn fold resolves to its first occurrence; a spring gap never existed.
fn resolve_local<Tz: TimeZone>(result: LocalResult<DateTime<Tz>>) -> Option<DateTime<Tz>> {
    match result {
        LocalResult::Single(at) => Some(at),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

fn parse_pid(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
