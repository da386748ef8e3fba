use crate::paths::{ConfigError, MoshpitPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;

use toml_edit::{DocumentMut, Item};

/// Backend de configuración por secciones (`[timetable]`, `[festival]`).
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

/// Implementación sobre un único `moshpit.toml`.
///
/// Lee con `toml` (serde) y escribe con `toml_edit` para no pisar los
/// comentarios ni el resto de secciones del archivo.
pub struct TomlConfigBackend {
  paths: MoshpitPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: MoshpitPaths) -> Self {
    Self { paths }
  }

  /// Como `load_section`, pero archivo o sección ausentes valen `Default`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let path = self.paths.config_file();
    let Some(content) = moshpit_fs::read_to_string_opt(&path)? else {
      return Ok(T::default());
    };

    let toml_val: toml::Value = toml::from_str(&content)?;

    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table
    .clone()
    .try_into()
    .map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = std::fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // documento actual, o uno vacío si todavía no existe
    let mut doc: DocumentMut = match moshpit_fs::read_to_string_opt(&path)? {
      Some(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      None => DocumentMut::new(),
    };

    // la sección serializada por serde es una tabla sin cabecera; se
    // re-parsea como documento y se cuelga bajo `[section]`
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    doc[section] = section_item;

    moshpit_fs::atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Probe {
    answer: u32,
  }

  fn backend_in(dir: &std::path::Path) -> TomlConfigBackend {
    let paths = MoshpitPaths {
      base_dir: dir.to_path_buf(),
      config_dir: dir.to_path_buf(),
      data_dir: dir.to_path_buf(),
      cache_dir: dir.to_path_buf(),
    };
    TomlConfigBackend::new(paths)
  }

  #[test]
  fn test_missing_file_yields_default() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    assert_eq!(backend.load_section_with_default::<Probe>("probe").unwrap(), Probe::default());
  }

  #[test]
  fn test_save_then_load_section() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    backend.save_section("probe", &Probe { answer: 42 }).unwrap();
    assert_eq!(backend.load_section::<Probe>("probe").unwrap(), Probe { answer: 42 });
  }

  #[test]
  fn test_save_preserves_other_sections_and_comments() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    let file = tmp.path().join("moshpit.toml");

    std::fs::write(&file, "# tuning manual\n[other]\nkeep = true\n").unwrap();
    backend.save_section("probe", &Probe { answer: 7 }).unwrap();

    let content = std::fs::read_to_string(&file).unwrap();
    assert!(content.contains("# tuning manual"));
    assert!(content.contains("[other]"));
    assert_eq!(backend.load_section::<Probe>("probe").unwrap(), Probe { answer: 7 });
  }
}
