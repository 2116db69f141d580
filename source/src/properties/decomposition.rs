use regex::Regex;

use super::PropertiesError;

/// слоги хангыль: декомпозиция не записана в UnicodeData.txt, а вычисляется алгоритмически
pub const HANGUL_SYLLABLES: core::ops::Range<u32> = 0xAC00 .. 0xD7A4;

lazy_static! {
    static ref DECOMPOSITION: Regex =
        Regex::new(r"^(<(\w+)>)?\s*((\s*[0-9A-Fa-f]+)+)\s*$").unwrap();
}

/// декомпозиция
/// берется из UCD: 6 колонка UnicodeData.txt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decomposition
{
    /// явно записанная декомпозиция, без тега - каноническая
    Mapping
    {
        tag: Option<DecompositionTag>,
        codes: Vec<u32>,
    },
    /// слог хангыль без явной декомпозиции
    Hangul,
}

impl Decomposition
{
    /// разбор колонки декомпозиции кодпоинта code, пустое поле - декомпозиции нет
    pub fn parse(code: u32, field: &str) -> Result<Option<Self>, PropertiesError>
    {
        if field.is_empty() {
            return Ok(match HANGUL_SYLLABLES.contains(&code) {
                true => Some(Self::Hangul),
                false => None,
            });
        }

        let captures = DECOMPOSITION
            .captures(field)
            .ok_or(PropertiesError::InvalidFormat)?;

        let tag = match captures.get(2) {
            Some(tag) => Some(DecompositionTag::try_from(tag.as_str())?),
            None => None,
        };

        let codes = captures[3]
            .split_whitespace()
            .map(|c| u32::from_str_radix(c, 16))
            .collect::<Result<Vec<u32>, _>>()?;

        Ok(Some(Self::Mapping { tag, codes }))
    }

    /// записанные в UCD кодпоинты декомпозиции (у слогов хангыль - пусто)
    pub fn codes(&self) -> &[u32]
    {
        match self {
            Self::Mapping { codes, .. } => codes,
            Self::Hangul => &[],
        }
    }

    /// тег декомпозиции совместимости
    pub fn tag(&self) -> Option<DecompositionTag>
    {
        match self {
            Self::Mapping { tag, .. } => *tag,
            Self::Hangul => None,
        }
    }

    /// каноническая декомпозиция (без тега)
    pub fn is_canonical(&self) -> bool
    {
        matches!(self, Self::Mapping { tag: None, .. })
    }
}

property_values! {
    /// тег декомпозиции совместимости, записывается в угловых скобках перед кодпоинтами
    pub enum DecompositionTag
    {
        /// вариант шрифта
        Font = "font",
        /// неразрывная версия пробела или дефиса
        NoBreak = "noBreak",
        /// начальная форма представления (арабский)
        Initial = "initial",
        /// средняя форма представления (арабский)
        Medial = "medial",
        /// конечная форма представления (арабский)
        Final = "final",
        /// изолированная форма представления (арабский)
        Isolated = "isolated",
        /// окруженная форма
        Circle = "circle",
        /// надстрочная форма
        Super = "super",
        /// подстрочная форма
        Sub = "sub",
        /// вертикальная форма представления
        Vertical = "vertical",
        /// широкий (зэнкаку) вариант
        Wide = "wide",
        /// узкий (ханкаку) вариант
        Narrow = "narrow",
        /// малая форма (совместимость с CNS)
        Small = "small",
        /// вариант шрифта в квадрате CJK
        Square = "square",
        /// обыкновенная дробь
        Fraction = "fraction",
        /// прочие символы совместимости
        Compat = "compat",
    }
}
