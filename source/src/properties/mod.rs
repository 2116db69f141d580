/// перечисление значений свойства вместе с их сокращениями из UCD
macro_rules! property_values {
    (
        $(#[$meta:meta])*
        pub enum $name:ident
        {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $abbr:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, PartialEq, Eq, Clone, Copy)]
        pub enum $name
        {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name
        {
            /// сокращение, под которым значение записано в UCD
            pub fn abbr(&self) -> &'static str
            {
                match self {
                    $(Self::$variant => $abbr,)+
                }
            }
        }

        impl TryFrom<&str> for $name
        {
            type Error = PropertiesError;

            #[inline]
            fn try_from(abbr: &str) -> Result<Self, Self::Error>
            {
                match abbr {
                    $($abbr => Ok(Self::$variant),)+
                    _ => Err(PropertiesError::UnknownPropertyValue),
                }
            }
        }

        impl core::fmt::Display for $name
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
            {
                f.write_str(self.abbr())
            }
        }
    };
}

mod bidi_class;
mod bidi_mirrored;
mod canonical_combining_class;
mod decomposition;
mod general_category;
mod numeric_type;

pub use bidi_class::BidiClass;
pub use bidi_mirrored::BidiMirrored;
pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use decomposition::HANGUL_SYLLABLES;
pub use general_category::GeneralCategory;
pub use numeric_type::NumericType;

/// запись о кодпоинте Unicode
/// источник - UCD, UnicodeData.txt
///
/// код в записи не хранится: он равен индексу в таблице, а записи-заглушки диапазонов
/// (CJK, хангыль, тангутский и т.д.) одна на весь диапазон
#[derive(Debug, Clone, PartialEq)]
pub struct CodepointRecord
{
    /// название
    pub name: String,
    /// категория символа (general category)
    pub gc: GeneralCategory,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: CanonicalCombiningClass,
    /// класс направления (bidi class)
    pub bc: BidiClass,
    /// тип и состав декомпозиции
    pub decomposition: Option<Decomposition>,
    /// числовое значение
    pub numeric: NumericType,
    /// "зеркальный" символ двунаправленного текста (bidi mirrored)
    pub bidi_mirrored: BidiMirrored,
    /// название в Unicode 1.0 (устарело)
    pub unicode_1_name: String,
    /// комментарий ISO 10646 (устарело)
    pub iso_comment: String,
    /// соответствующая прописная буква
    pub simple_uppercase_mapping: Option<u32>,
    /// соответствующая строчная буква
    pub simple_lowercase_mapping: Option<u32>,
    /// соответствующая заглавная буква
    pub simple_titlecase_mapping: Option<u32>,
}

#[derive(Debug, PartialEq)]
pub enum PropertiesError
{
    /// значение не из списка допустимых
    UnknownPropertyValue,
    /// поле не соответствует грамматике
    InvalidFormat,
}

impl From<core::num::ParseIntError> for PropertiesError
{
    fn from(_: core::num::ParseIntError) -> Self
    {
        Self::UnknownPropertyValue
    }
}

/// код в шестнадцатеричной записи, пустое поле - None
pub fn parse_code(value: &str) -> Result<Option<u32>, PropertiesError>
{
    match value.is_empty() {
        true => Ok(None),
        false => Ok(Some(u32::from_str_radix(value, 16)?)),
    }
}
