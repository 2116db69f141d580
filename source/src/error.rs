use std::fmt;
use std::path::PathBuf;

use crate::properties::PropertiesError;

/// ошибки загрузки данных UCD и списков стоп-слов
#[derive(Debug)]
pub enum UcdError
{
    /// файл не найден ни по основному пути, ни по запасному (в родительской директории)
    FileNotFound
    {
        path: PathBuf,
        fallback: PathBuf,
    },
    /// файл есть, но прочитать его не удалось
    Io
    {
        path: PathBuf,
        error: std::io::Error,
    },
    /// строка не соответствует ожидаемому формату
    MalformedRecord
    {
        line: usize,
        reason: String,
    },
}

impl UcdError
{
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self
    {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }

    /// для ошибок разбора свойств: номер строки известен только загрузчику
    pub(crate) fn property(line: usize, field: &str, value: &str, error: PropertiesError) -> Self
    {
        Self::malformed(line, format!("{}: {:?} ({:?})", field, value, error))
    }
}

impl fmt::Display for UcdError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self {
            Self::FileNotFound { path, fallback } => write!(
                f,
                "файл не найден: {} (также проверен {})",
                path.display(),
                fallback.display()
            ),
            Self::Io { path, error } => write!(f, "ошибка чтения {}: {}", path.display(), error),
            Self::MalformedRecord { line, reason } => {
                write!(f, "некорректная запись в строке {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for UcdError
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
    {
        match self {
            Self::Io { error, .. } => Some(error),
            _ => None,
        }
    }
}
