use std::collections::HashMap;
use std::path::Path;

use regex::Regex;

use crate::files;
use crate::unicode::UNICODE_MAX;
use crate::UcdError;

lazy_static! {
    /// строка файла свойств: 0041..005A ; ALetter
    static ref PROPERTY_LINE: Regex = Regex::new(
        r"^([0-9A-Fa-f]+)(\.\.([0-9A-Fa-f]+))?\s*;\s*(\w+)\s*$"
    )
    .unwrap();
}

/// значение свойства для каждого кодпоинта 0 ..= U+10FFFF
/// (WordBreakProperty.txt и подобные файлы, где у кодпоинта не более одного значения)
pub struct PropertyTable
{
    /// названия значений свойства в порядке появления
    names: Vec<String>,
    /// название значения -> индекс в names
    index: HashMap<String, usize>,
    /// индекс в names для каждого кодпоинта
    values: Vec<Option<usize>>,
}

impl PropertyTable
{
    /// загрузить файл свойств (с запасным путем в родительской директории)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, UcdError>
    {
        let path = path.as_ref();
        let table = Self::parse(&files::read_to_string(path)?)?;

        log::info!(
            "{}: значений свойства - {}, кодпоинтов - {}",
            path.display(),
            table.names.len(),
            table.len()
        );

        Ok(table)
    }

    /// разбор файла свойств. если кодпоинт встречается несколько раз - побеждает последняя строка
    pub fn parse(data: &str) -> Result<Self, UcdError>
    {
        let mut table = Self {
            names: vec![],
            index: HashMap::new(),
            values: vec![None; UNICODE_MAX as usize + 1],
        };

        for_each_range(data, |range, name| {
            let index = table.intern(name);

            table.values[range.0 as usize ..= range.1 as usize].fill(Some(index));
        })?;

        Ok(table)
    }

    /// значение свойства кодпоинта
    pub fn get(&self, code: u32) -> Option<&str>
    {
        let index = (*self.values.get(code as usize)?)?;

        Some(self.names[index].as_str())
    }

    /// встретившиеся значения свойства
    pub fn names(&self) -> &[String]
    {
        &self.names
    }

    /// количество кодпоинтов, которым назначено значение
    pub fn len(&self) -> usize
    {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_empty(&self) -> bool
    {
        self.values.iter().all(|v| v.is_none())
    }

    fn intern(&mut self, name: &str) -> usize
    {
        if let Some(&index) = self.index.get(name) {
            return index;
        }

        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), self.names.len() - 1);

        self.names.len() - 1
    }
}

/// множества кодпоинтов по значениям свойства.
/// в отличие от PropertyTable, у кодпоинта может быть несколько значений (PropList.txt)
#[derive(Debug, Default)]
pub struct PropertySets
{
    sets: HashMap<String, CodepointSet>,
}

impl PropertySets
{
    /// загрузить файл свойств (с запасным путем в родительской директории)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, UcdError>
    {
        let path = path.as_ref();
        let sets = Self::parse(&files::read_to_string(path)?)?;

        log::info!("{}: свойств - {}", path.display(), sets.sets.len());

        Ok(sets)
    }

    pub fn parse(data: &str) -> Result<Self, UcdError>
    {
        let mut sets = Self::default();

        for_each_range(data, |range, name| {
            sets.sets
                .entry(name.to_owned())
                .or_default()
                .ranges
                .push(range);
        })?;

        Ok(sets)
    }

    /// множество кодпоинтов со значением свойства name
    pub fn get(&self, name: &str) -> Option<&CodepointSet>
    {
        self.sets.get(name)
    }

    pub fn contains(&self, name: &str, code: u32) -> bool
    {
        self.get(name).is_some_and(|set| set.contains(code))
    }

    /// названия свойств, по алфавиту
    pub fn names(&self) -> Vec<&str>
    {
        let mut names: Vec<&str> = self.sets.keys().map(|n| n.as_str()).collect();
        names.sort();

        names
    }
}

/// множество кодпоинтов в виде диапазонов, в порядке строк файла
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CodepointSet
{
    ranges: Vec<(u32, u32)>,
}

impl CodepointSet
{
    pub fn contains(&self, code: u32) -> bool
    {
        self.ranges
            .iter()
            .any(|&(first, last)| (first ..= last).contains(&code))
    }

    /// количество кодпоинтов (диапазоны в UCD не пересекаются)
    pub fn len(&self) -> usize
    {
        self.ranges
            .iter()
            .map(|&(first, last)| (last + 1).saturating_sub(first) as usize)
            .sum()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_
    {
        self.ranges.iter().flat_map(|&(first, last)| first ..= last)
    }
}

/// обход строк вида "0041..005A ; ALetter # комментарий".
/// строки, не подходящие под формат, пропускаются без ошибки
fn for_each_range<F>(data: &str, mut f: F) -> Result<(), UcdError>
where
    F: FnMut((u32, u32), &str),
{
    for (i, line) in data.lines().enumerate() {
        let line = match line.split_once('#') {
            Some((line, _)) => line,
            None => line,
        };

        let captures = match PROPERTY_LINE.captures(line.trim()) {
            Some(captures) => captures,
            None => continue,
        };

        let code = |m: Option<regex::Match>| -> Result<Option<u32>, UcdError> {
            let m = match m {
                Some(m) => m,
                None => return Ok(None),
            };

            match u32::from_str_radix(m.as_str(), 16) {
                Ok(code) if code <= UNICODE_MAX => Ok(Some(code)),
                _ => Err(UcdError::malformed(i + 1, format!("код вне диапазона: {}", m.as_str()))),
            }
        };

        let first = code(captures.get(1))?.unwrap_or_default();
        let last = code(captures.get(3))?.unwrap_or(first);

        // пустой диапазон (first > last) ничего не назначает
        if first > last {
            continue;
        }

        f((first, last), &captures[4]);
    }

    Ok(())
}
