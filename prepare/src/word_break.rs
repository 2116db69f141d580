use std::fmt;

use text_data_source::files;
use text_data_source::{PropertySets, PropertyTable, UcdError, UnicodeData};

/// так в отчете обозначается кодпоинт без значения Word_Break
const NO_PROPERTY: &str = "None";

/// кодпоинт, у которого значение Word_Break отличается от значения первого кодпоинта его декомпозиции
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBreakChange
{
    pub code: u32,
    pub name: String,
    /// Word_Break самого кодпоинта
    pub property: String,
    /// Word_Break каждого кодпоинта полной декомпозиции
    pub decomposition: Vec<String>,
}

impl fmt::Display for WordBreakChange
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{:04X} {} {} -> [", self.code, self.name, self.property)?;

        // список в том же виде, что и в прежних отчетах: ['A', 'B']
        for (i, property) in self.decomposition.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "'{}'", property)?;
        }

        f.write_str("]")
    }
}

/// данные UCD, необходимые для отчета
pub struct WordBreakData
{
    pub unicode: UnicodeData,
    pub word_break: PropertyTable,
}

impl WordBreakData
{
    /// загрузить файлы UCD по стандартным путям
    pub fn load() -> Result<Self, UcdError>
    {
        let unicode = UnicodeData::load(files::UNICODE_DATA)?;
        let word_break = PropertyTable::load(files::WORD_BREAK_PROPERTY)?;

        // в сравнении не участвуют, но без этих файлов отчет не строится
        let word_break_sets = PropertySets::load(files::WORD_BREAK_PROPERTY)?;
        let prop_list = PropertySets::load(files::PROP_LIST)?;
        let derived_core_properties = PropertySets::load(files::DERIVED_CORE_PROPERTIES)?;

        log::debug!(
            "значений Word_Break: {}, White_Space: {} кодпоинтов, Default_Ignorable_Code_Point: {} кодпоинтов",
            word_break_sets.names().len(),
            prop_list.get("White_Space").map_or(0, |s| s.len()),
            derived_core_properties
                .get("Default_Ignorable_Code_Point")
                .map_or(0, |s| s.len()),
        );

        Ok(Self {
            unicode,
            word_break,
        })
    }

    pub fn changes(&self) -> Vec<WordBreakChange>
    {
        changes(&self.unicode, &self.word_break)
    }
}

/// кодпоинты, значение Word_Break которых меняется при полной декомпозиции, по возрастанию кода
pub fn changes(unicode: &UnicodeData, word_break: &PropertyTable) -> Vec<WordBreakChange>
{
    let property = |code: u32| word_break.get(code).unwrap_or(NO_PROPERTY).to_owned();

    let mut result = vec![];

    for (code, record) in unicode.iter() {
        if record.decomposition.is_none() {
            continue;
        }

        // слоги хангыль не раскладываются
        let decomposition = match unicode.decompose(code) {
            Some(decomposition) => decomposition,
            None => continue,
        };

        let decomposition: Vec<String> = decomposition.into_iter().map(&property).collect();
        let original = property(code);

        if decomposition.first() == Some(&original) {
            continue;
        }

        result.push(WordBreakChange {
            code,
            name: record.name.clone(),
            property: original,
            decomposition,
        });
    }

    log::info!("изменений Word_Break при декомпозиции: {}", result.len());

    result
}
