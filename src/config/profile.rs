use crate::error::{AppError, AppResult};

pub const DEFAULT_ALIAS: &str = "default";

/// Canonical on-disk name for a profile: trimmed, without a `.yaml` suffix.
pub fn normalize_name(requested: &str) -> AppResult<String> {
    let trimmed = requested.trim();
    let name = trimmed.strip_suffix(".yaml").unwrap_or(trimmed);

    if name.is_empty() {
        return Err(AppError::InvalidInput(
            "profile name must not be empty".to_string(),
        ));
    }
    if name.starts_with('.') || name.contains(['/', '\\']) {
        return Err(AppError::InvalidInput(format!(
            "profile name `{name}` must not contain path components"
        )));
    }

    Ok(name.to_string())
}

/// True when the caller asked for whatever the default marker points at.
/// An explicit blank name is not a request for the default.
pub fn wants_default(requested: Option<&str>) -> bool {
    requested.is_none_or(|name| name.trim() == DEFAULT_ALIAS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_extension_and_whitespace() {
        assert_eq!(normalize_name("  C8Mach1.yaml ").unwrap(), "C8Mach1");
        assert_eq!(normalize_name("refractor").unwrap(), "refractor");
    }

    #[test]
    fn rejects_path_like_names() {
        assert!(normalize_name("../etc").is_err());
        assert!(normalize_name("a/b").is_err());
        assert!(normalize_name(".yaml").is_err());
        assert!(normalize_name("   ").is_err());
    }

    #[test]
    fn default_alias_and_missing_name_want_default() {
        assert!(wants_default(None));
        assert!(wants_default(Some("default")));
        assert!(wants_default(Some(" default ")));
        assert!(!wants_default(Some("backyard")));
    }

    #[test]
    fn blank_name_does_not_want_default() {
        assert!(!wants_default(Some("")));
        assert!(!wants_default(Some("   ")));
    }
}
