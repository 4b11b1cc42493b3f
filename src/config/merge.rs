//! Merge CLI arguments on top of the loaded config.

use crate::domain::Config;

/// Values given on the command line. `None` keeps the config file value.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub internal_domain: Option<String>,
    pub title: Option<String>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if let Some(domain) = cli.internal_domain {
        config.internal_domain = domain;
    }
    if let Some(title) = cli.title {
        config.title = title;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_values_take_precedence() {
        let base = Config { title: "From file".to_string(), ..Config::default() };
        let merged = merge_cli_with_config(
            base,
            CliOverrides { internal_domain: Some("kernel.org".to_string()), title: None },
        );
        assert_eq!(merged.internal_domain, "kernel.org");
        assert_eq!(merged.title, "From file");
    }
}
