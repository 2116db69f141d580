use std::path::Path;

use encoding_rs::{Encoding, WINDOWS_1251, WINDOWS_1252};

use crate::files;
use crate::UcdError;

/// после этого символа в строке идет комментарий
const COMMENT: char = '|';

/// список стоп-слов Snowball для одного языка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordList
{
    /// язык - имя файла без расширения
    pub name: String,
    /// слова, отсортированные по возрастанию кодов символов (повторы сохраняются)
    pub words: Vec<String>,
}

impl StopwordList
{
    /// все списки *.txt из директории (или из той же директории относительно родительской),
    /// в порядке названий языков
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Vec<Self>, UcdError>
    {
        let mut lists = vec![];

        for path in files::list_with_fallback(dir, "txt")? {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            let list = Self::parse(name, &files::read(&path)?);

            log::debug!("{}: {} слов", path.display(), list.words.len());
            lists.push(list);
        }

        Ok(lists)
    }

    /// разбор списка: всё после '|' - комментарий, слова разделены пробелами
    pub fn parse(name: impl Into<String>, data: &[u8]) -> Self
    {
        let name = name.into();
        let (text, _) = encoding(&name).decode_without_bom_handling(data);

        let mut words: Vec<String> = text
            .lines()
            .flat_map(|line| {
                let line = match line.split_once(COMMENT) {
                    Some((line, _)) => line,
                    None => line,
                };

                line.split_whitespace().map(str::to_owned)
            })
            .collect();

        // дополнение к списку Snowball
        if name == "english" {
            words.push("will".to_owned());
        }

        words.sort();

        Self { name, words }
    }
}

/// кодировка файла: русский список - в windows-1251, остальные - в latin-1.
/// WHATWG (и encoding_rs) понимает метку latin-1 как windows-1252
fn encoding(name: &str) -> &'static Encoding
{
    match name {
        "russian" => WINDOWS_1251,
        _ => WINDOWS_1252,
    }
}
