use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::UcdError;

/// UnicodeData.txt - основной файл UCD
pub const UNICODE_DATA: &str = "data/ucd/UnicodeData.txt";
/// свойство Word_Break
pub const WORD_BREAK_PROPERTY: &str = "data/ucd/auxiliary/WordBreakProperty.txt";
/// список бинарных свойств (White_Space и т.д.)
pub const PROP_LIST: &str = "data/ucd/PropList.txt";
/// производные свойства (Default_Ignorable_Code_Point и т.д.)
pub const DERIVED_CORE_PROPERTIES: &str = "data/ucd/DerivedCoreProperties.txt";
/// директория со списками стоп-слов Snowball, по файлу на язык
pub const SNOWBALL_DIR: &str = "data/snowball";

/// утилиты запускаются либо из корня репозитория, либо из директории крейта
const PARENT_DIR: &str = "..";

/// запасной путь - тот же путь относительно родительской директории
pub fn fallback_path(path: impl AsRef<Path>) -> PathBuf
{
    Path::new(PARENT_DIR).join(path)
}

/// прочитать файл целиком, при отсутствии - попробовать запасной путь
pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>, UcdError>
{
    let path = path.as_ref();

    let error = match fs::read(path) {
        Ok(data) => {
            log::debug!("прочитан {} ({} байт)", path.display(), data.len());
            return Ok(data);
        }
        Err(error) => error,
    };

    if error.kind() != ErrorKind::NotFound {
        return Err(UcdError::Io {
            path: path.to_owned(),
            error,
        });
    }

    let fallback = fallback_path(path);

    match fs::read(&fallback) {
        Ok(data) => {
            log::warn!("{} не найден, используем {}", path.display(), fallback.display());
            Ok(data)
        }
        Err(error) if error.kind() == ErrorKind::NotFound => Err(UcdError::FileNotFound {
            path: path.to_owned(),
            fallback,
        }),
        Err(error) => Err(UcdError::Io {
            path: fallback,
            error,
        }),
    }
}

/// прочитать текстовый (UTF-8) файл, с тем же запасным путем
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String, UcdError>
{
    let path = path.as_ref();
    let data = read(path)?;

    String::from_utf8(data).map_err(|error| UcdError::Io {
        path: path.to_owned(),
        error: std::io::Error::new(ErrorKind::InvalidData, error),
    })
}

/// файлы *.{extension} в директории, отсортированные по имени.
/// отсутствующая директория равносильна пустой
pub fn list(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>, UcdError>
{
    let dir = dir.as_ref();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(vec![]),
        Err(error) => {
            return Err(UcdError::Io {
                path: dir.to_owned(),
                error,
            })
        }
    };

    let mut files = vec![];

    for entry in entries {
        let path = entry
            .map_err(|error| UcdError::Io {
                path: dir.to_owned(),
                error,
            })?
            .path();

        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            files.push(path);
        }
    }

    files.sort();

    Ok(files)
}

/// файлы *.{extension} в директории; если там пусто - в той же директории относительно родительской
pub fn list_with_fallback(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>, UcdError>
{
    let dir = dir.as_ref();

    let files = list(dir, extension)?;

    if !files.is_empty() {
        return Ok(files);
    }

    let fallback = fallback_path(dir);
    let files = list(&fallback, extension)?;

    match files.is_empty() {
        true => Err(UcdError::FileNotFound {
            path: dir.join(format!("*.{}", extension)),
            fallback: fallback.join(format!("*.{}", extension)),
        }),
        false => {
            log::warn!("{} пуста, используем {}", dir.display(), fallback.display());
            Ok(files)
        }
    }
}
