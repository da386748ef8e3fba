use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

/// Escritura atómica: tmp + fsync + rename, para no dejar archivos a medias
/// si el proceso muere durante el write.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)?;
  Ok(())
}

/// Lee un archivo completo; `NotFound` se trata como `None` en vez de error.
pub fn read_to_string_opt(path: &Path) -> io::Result<Option<String>> {
  match fs::read_to_string(path) {
    Ok(s) => Ok(Some(s)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e),
  }
}
