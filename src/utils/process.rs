use std::env;
use std::path::Path;

/// Prefix the log writer uses for this process: the executable's base name.
pub fn resolve_service_prefix() -> String {
    env::current_exe()
        .ok()
        .and_then(|path| program_name(&path))
        .or_else(|| env::args_os().next().and_then(|arg| program_name(Path::new(&arg))))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Base name with only the platform executable suffix removed, so
/// `glogutils.test` stays as is while `vulcan.exe` becomes `vulcan` on Windows.
pub fn program_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let name = strip_exe_suffix(name, env::consts::EXE_SUFFIX);
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn strip_exe_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return name;
    }
    name.strip_suffix(suffix).unwrap_or(name)
}
