use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

/// `FIXTUREGEN_QUIET=1` silences the human-readable output lines
pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("FIXTUREGEN_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}
