/// Values used when neither the command line nor the config file sets an option.
#[derive(Debug, Default)]
pub struct DefaultsConfig {
    pub seed: Option<u64>,
    pub normalize: bool,
    pub mirror: bool,
}
