use std::path::Path;

use serde_json::Value;
use tracing::warn;

use super::schema::STORAGE_CONFIG_SCHEMA;
use crate::errors::ConfigError;

/// Load a storage-shape configuration record from a YAML or JSON file. The
/// returned value is ready to hand to [`to_form_shape`].
///
/// [`to_form_shape`]: super::reformat::to_form_shape
pub async fn load_storage_config(path: &Path) -> Result<Value, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(ConfigError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
    let config = serde_json::to_value(yaml)?;

    validate_schema(&config)?;

    Ok(config)
}

/// Validate the loaded config against the storage schema. Violations are
/// logged, not fatal, so a stored config with fields newer than this build
/// still loads.
fn validate_schema(config: &Value) -> Result<(), ConfigError> {
    let compiled = jsonschema::JSONSchema::compile(&STORAGE_CONFIG_SCHEMA)
        .map_err(|e| ConfigError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(config) {
        for err in errors {
            warn!(
                validation_error = %format!("{} at {}", err, err.instance_path),
                "Config schema warning"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::reformat::to_form_shape;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_storage_config(Path::new("/nonexistent/island.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }

    #[tokio::test]
    async fn test_load_oversized_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![b'#'; 1_048_577]).unwrap();
        let err = load_storage_config(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }

    #[tokio::test]
    async fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "payloads: [unclosed").unwrap();
        assert!(load_storage_config(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_load_valid_yaml_reformats() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            concat!(
                "payloads:\n",
                "  - name: ransomware\n",
                "    options:\n",
                "      encryption:\n",
                "        enabled: true\n",
                "advanced:\n",
                "  keep_tunnel_open_time: 30\n"
            )
        )
        .unwrap();
        let config = load_storage_config(file.path()).await.unwrap();
        let form = to_form_shape(config).unwrap();
        assert_eq!(form["keep_tunnel_open_time"], 30);
        assert_eq!(form["payloads"]["encryption"]["enabled"], true);
    }

    #[tokio::test]
    async fn test_load_json_is_valid_yaml_subset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"payloads": [{{"name": "ransomware", "options": {{}}}}], "advanced": {{"keep_tunnel_open_time": 0}}}}"#
        )
        .unwrap();
        let config = load_storage_config(file.path()).await.unwrap();
        assert_eq!(config["advanced"]["keep_tunnel_open_time"], 0);
    }
}
