use std::collections::BTreeMap;

use confkit_core::config::CatalogSettings;
use confkit_core::format::format_message;
use confkit_core::{ConfigError, FormatError};

use super::cli::CheckArgs;

#[derive(Debug, Default)]
pub struct CheckReport {
    pub keys: usize,
    pub invalid: Vec<(String, FormatError)>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.invalid.is_empty()
    }
}

pub fn check(settings: &CatalogSettings, args: &CheckArgs) -> Result<CheckReport, ConfigError> {
    let catalog = settings.open_catalog()?;
    let locale = settings.effective_locale();
    let entries = catalog.entries(&args.catalog, &locale).map_err(|e| {
        ConfigError::localized_full(
            "confkit.cli",
            "check.unavailable",
            "cannot load catalog {0} for locale {1}",
            [args.catalog.clone(), locale.to_string()],
            Some(Box::new(e)),
        )
    })?;
    Ok(check_templates(&entries))
}

pub fn check_templates(entries: &BTreeMap<String, String>) -> CheckReport {
    let mut report = CheckReport {
        keys: entries.len(),
        ..CheckReport::default()
    };
    for (key, template) in entries {
        // Unfilled placeholders are left as-is, so only syntax errors surface.
        if let Err(e) = format_message(template, &[] as &[&str]) {
            tracing::warn!(key = %key, "invalid template: {}", e);
            report.invalid.push((key.clone(), e));
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_templates_flags_syntax_errors() {
        let entries: BTreeMap<String, String> = [
            ("ok", "value {0}"),
            ("quoted", "'{literal}' it''s fine"),
            ("open", "value {0"),
            ("named", "value {name}"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let report = check_templates(&entries);
        assert_eq!(report.keys, 4);
        assert!(!report.is_ok());
        let bad: Vec<&str> = report.invalid.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(bad, vec!["named", "open"]);
    }

    #[test]
    fn test_check_missing_catalog_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings = CatalogSettings {
            dir: dir.path().to_path_buf(),
            locale: Some("en".to_string()),
            ..CatalogSettings::default()
        };
        let err = check(
            &settings,
            &CheckArgs {
                catalog: "absent".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "cannot load catalog absent for locale en");
        assert!(err.cause().is_some());
    }
}
