//! Program name and version, as reported by the `coords` binary.

/// Return the program name. Packagers may override it with `COORDS_PROGRAM_NAME` at build time.
pub const fn name() -> &'static str {
    match option_env!("COORDS_PROGRAM_NAME") {
        Some(s) => s,
        None => "coords",
    }
}

/// Return the program version.
pub const fn version() -> Option<&'static str> {
    option_env!("CARGO_PKG_VERSION")
}

/// `name version`, e.g. `"coords 0.1.0"`.
pub fn describe() -> String {
    format!("{} {}", name(), version().unwrap_or("unknown"))
}

#[cfg(test)]
mod test {
    use super::{describe, name, version};

    #[test]
    fn test_describe() {
        let v = version().unwrap();
        assert!(!name().is_empty());
        assert_eq!(describe(), format!("{} {}", name(), v));
    }
}
