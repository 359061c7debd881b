//! Parsing of `section.key=value` override arguments.
//!
//! Responsibilities:
//! - Parse `-c/--config` values into `ConfigOverride`.
//! - Parse `section.key` lookups for the `get` command.
//! - Fold a list of overrides into the `ConfigValues` override layer.
//!
//! Invariants:
//! - The section is everything before the first `.`; the key is the rest.
//! - Later overrides of the same key win, matching the layer semantics.

use kiln_config::ConfigValues;

/// One `section.key=value` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOverride {
    pub section: String,
    pub key: String,
    pub value: String,
}

/// clap value parser for `section.key=value`.
pub fn parse_override(arg: &str) -> Result<ConfigOverride, String> {
    let (path, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("'{arg}' is not of the form section.key=value"))?;
    let (section, key) = parse_key_path(path.trim())?;
    Ok(ConfigOverride {
        section,
        key,
        value: value.trim().to_string(),
    })
}

/// Split `section.key` into its two parts.
pub fn parse_key_path(path: &str) -> Result<(String, String), String> {
    let (section, key) = path
        .split_once('.')
        .ok_or_else(|| format!("'{path}' is not of the form section.key"))?;
    if section.is_empty() || key.is_empty() {
        return Err(format!(
            "'{path}' must name both a section and a key (section.key)"
        ));
    }
    Ok((section.to_string(), key.to_string()))
}

/// Build the override layer from parsed arguments, in argument order.
pub fn to_config_values(overrides: &[ConfigOverride]) -> ConfigValues {
    let mut values = ConfigValues::new();
    for o in overrides {
        values
            .entry(o.section.clone())
            .or_default()
            .insert(o.key.clone(), o.value.clone());
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        let parsed = parse_override("core.threads=8").unwrap();
        assert_eq!(
            parsed,
            ConfigOverride {
                section: "core".to_string(),
                key: "threads".to_string(),
                value: "8".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_override_keeps_dots_and_equals_in_key_and_value() {
        let parsed = parse_override("java.source.level=x=y").unwrap();
        assert_eq!(parsed.section, "java");
        assert_eq!(parsed.key, "source.level");
        assert_eq!(parsed.value, "x=y");
    }

    #[test]
    fn test_parse_override_allows_empty_value() {
        let parsed = parse_override("cache.dir=").unwrap();
        assert_eq!(parsed.value, "");
    }

    #[test]
    fn test_parse_override_rejects_malformed() {
        assert!(parse_override("core.threads").is_err());
        assert!(parse_override("threads=8").is_err());
        assert!(parse_override(".threads=8").is_err());
        assert!(parse_override("core.=8").is_err());
    }

    #[test]
    fn test_later_override_wins() {
        let overrides = vec![
            parse_override("core.threads=4").unwrap(),
            parse_override("core.mode=fast").unwrap(),
            parse_override("core.threads=8").unwrap(),
        ];
        let values = to_config_values(&overrides);
        assert_eq!(values["core"]["threads"], "8");
        assert_eq!(values["core"]["mode"], "fast");
    }
}
