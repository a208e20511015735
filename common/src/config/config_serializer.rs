use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, PersistenceError>;
    fn deserialize(&self, content: &str) -> Result<TConfig, PersistenceError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, PersistenceError> {
        serde_yaml_ng::to_string(config).map_err(|e| PersistenceError::Serialize(e.to_string()))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, PersistenceError> {
        serde_yaml_ng::from_str(content).map_err(|e| PersistenceError::Deserialize(e.to_string()))
    }
}
