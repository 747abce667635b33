use std::path::PathBuf;
use swar::engine::config as core_config;

pub struct AppConfig {
    pub input_path: PathBuf,
    pub placement_output: Option<PathBuf>,
    pub edges_output: Option<PathBuf>,
    pub core_config: core_config::EvaluationConfig,
}
