const SECTIONS: [&str; 4] = ["DATABASE", "AUTH", "SERVER", "GENERAL"];

/// Emit warnings for env var keys that look like config but use a single
/// underscore between section and field, and so were silently ignored.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();
    for (key, _) in env {
        for section in SECTIONS {
            let single = format!("LEDGER_{section}_");
            let double = format!("LEDGER_{section}__");
            if key.starts_with(&single) && !key.starts_with(&double) {
                let field = &key[single.len()..];
                warnings.push(format!(
                    "{key} is ignored. Use double underscores (example: {double}{field})."
                ));
            }
        }
    }
    warnings.sort();
    warnings
}

#[cfg(test)]
mod tests {
    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_sections() {
        let warnings = collect_unconfigured_warnings(env(&[
            "LEDGER_DATABASE_PATH",
            "LEDGER_AUTH_LOGIN_PATH",
        ]));

        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("LEDGER_AUTH__LOGIN_PATH"));
        assert!(warnings[1].contains("LEDGER_DATABASE__PATH"));
    }

    #[test]
    fn does_not_warn_for_well_formed_keys() {
        let warnings = collect_unconfigured_warnings(env(&[
            "LEDGER_DATABASE__PATH",
            "LEDGER_SERVER__BIND",
            "LEDGER_LOG",
            "PATH",
        ]));

        assert!(warnings.is_empty());
    }
}
