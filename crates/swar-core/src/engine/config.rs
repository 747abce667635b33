use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Where the random generator for the initial placement comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Seeded generator; equal seeds give equal placements.
    Fixed(u64),
    /// Generator seeded from operating-system entropy.
    Entropy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformConfig {
    pub normalize: bool,
    pub mirror: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationConfig {
    pub seed: SeedSource,
    pub transform: TransformConfig,
}

#[derive(Default)]
pub struct EvaluationConfigBuilder {
    seed: Option<SeedSource>,
    normalize: Option<bool>,
    mirror: Option<bool>,
}

impl EvaluationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = Some(seed.map_or(SeedSource::Entropy, SeedSource::Fixed));
        self
    }
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }
    pub fn mirror(mut self, mirror: bool) -> Self {
        self.mirror = Some(mirror);
        self
    }

    pub fn build(self) -> Result<EvaluationConfig, ConfigError> {
        Ok(EvaluationConfig {
            seed: self.seed.ok_or(ConfigError::MissingParameter("seed"))?,
            transform: TransformConfig {
                normalize: self
                    .normalize
                    .ok_or(ConfigError::MissingParameter("normalize"))?,
                mirror: self.mirror.ok_or(ConfigError::MissingParameter("mirror"))?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_succeeds_with_all_parameters() {
        let config = EvaluationConfigBuilder::new()
            .seed(Some(7))
            .normalize(true)
            .mirror(false)
            .build()
            .unwrap();
        assert_eq!(config.seed, SeedSource::Fixed(7));
        assert!(config.transform.normalize);
        assert!(!config.transform.mirror);
    }

    #[test]
    fn absent_seed_means_entropy() {
        let config = EvaluationConfigBuilder::new()
            .seed(None)
            .normalize(false)
            .mirror(true)
            .build()
            .unwrap();
        assert_eq!(config.seed, SeedSource::Entropy);
    }

    #[test]
    fn build_fails_when_parameter_is_missing() {
        let result = EvaluationConfigBuilder::new().seed(Some(1)).mirror(false).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("normalize")));

        let result = EvaluationConfigBuilder::new().normalize(true).mirror(false).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("seed")));
    }
}
