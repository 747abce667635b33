use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::EvaluateArgs;
use crate::error::{CliError, Result};
use std::str::FromStr;
use swar::engine::config as core_config;

/// Merges CLI flags, `--set` overrides, the config file and defaults, in that order of
/// precedence.
pub fn build_config(args: &EvaluateArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let sampling_file = file_config.sampling.take().unwrap_or_default();
    let transform_file = file_config.transform.take().unwrap_or_default();
    let output_file = file_config.output.take().unwrap_or_default();

    let seed = args.seed.or(sampling_file.seed).or(defaults.seed);
    let normalize = args.normalize || transform_file.normalize.unwrap_or(defaults.normalize);
    let mirror = args.mirror || transform_file.mirror.unwrap_or(defaults.mirror);

    let core_config = core_config::EvaluationConfigBuilder::new()
        .seed(seed)
        .normalize(normalize)
        .mirror(mirror)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        input_path: args.input.clone(),
        placement_output: args.output.clone().or(output_file.placement),
        edges_output: args.edges.clone().or(output_file.edges),
        core_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "sampling.seed" => {
                config.sampling.get_or_insert_with(Default::default).seed =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "transform.normalize" => {
                config
                    .transform
                    .get_or_insert_with(Default::default)
                    .normalize = Some(parse_value(key, value_str, "boolean")?);
            }
            "transform.mirror" => {
                config.transform.get_or_insert_with(Default::default).mirror =
                    Some(parse_value(key, value_str, "boolean")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use swar::engine::config::SeedSource;
    use tempfile::tempdir;

    fn base_evaluate_args() -> EvaluateArgs {
        EvaluateArgs {
            input: PathBuf::from("schema.swar"),
            config: None,
            seed: None,
            normalize: false,
            mirror: false,
            output: None,
            edges: None,
            set_values: vec![],
        }
    }

    #[test]
    fn defaults_apply_without_file_or_flags() {
        let app = build_config(&base_evaluate_args()).unwrap();
        assert_eq!(app.input_path, PathBuf::from("schema.swar"));
        assert_eq!(app.core_config.seed, SeedSource::Entropy);
        assert!(!app.core_config.transform.normalize);
        assert!(!app.core_config.transform.mirror);
        assert!(app.placement_output.is_none());
        assert!(app.edges_output.is_none());
    }

    #[test]
    fn file_values_are_used_when_flags_are_absent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("swar.toml");
        fs::write(
            &path,
            "[sampling]\nseed = 12\n[transform]\nnormalize = true\n[output]\nplacement = \"out.csv\"\n",
        )
        .unwrap();

        let mut args = base_evaluate_args();
        args.config = Some(path);
        let app = build_config(&args).unwrap();
        assert_eq!(app.core_config.seed, SeedSource::Fixed(12));
        assert!(app.core_config.transform.normalize);
        assert_eq!(app.placement_output, Some(PathBuf::from("out.csv")));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("swar.toml");
        fs::write(&path, "[sampling]\nseed = 12\n[output]\nedges = \"file.csv\"\n").unwrap();

        let mut args = base_evaluate_args();
        args.config = Some(path);
        args.seed = Some(99);
        args.mirror = true;
        args.edges = Some(PathBuf::from("cli.csv"));
        let app = build_config(&args).unwrap();
        assert_eq!(app.core_config.seed, SeedSource::Fixed(99));
        assert!(app.core_config.transform.mirror);
        assert_eq!(app.edges_output, Some(PathBuf::from("cli.csv")));
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("swar.toml");
        fs::write(&path, "[sampling]\nseed = 12\n[transform]\nnormalize = false\n").unwrap();

        let mut args = base_evaluate_args();
        args.config = Some(path);
        args.set_values = vec![
            "sampling.seed=20".to_string(),
            "transform.normalize=true".to_string(),
        ];
        let app = build_config(&args).unwrap();
        assert_eq!(app.core_config.seed, SeedSource::Fixed(20));
        assert!(app.core_config.transform.normalize);
    }

    #[test]
    fn malformed_set_value_is_a_config_error() {
        let mut args = base_evaluate_args();
        args.set_values = vec!["sampling.seed".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["sampling.seed=abc".to_string()];
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));

        args.set_values = vec!["optimizer.steps=3".to_string()];
        let result = build_config(&args);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("optimizer.steps")));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let mut args = base_evaluate_args();
        args.config = Some(dir.path().join("absent.toml"));
        assert!(matches!(build_config(&args), Err(CliError::Io(_))));
    }
}
