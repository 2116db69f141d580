use super::PropertiesError;

/// "зеркальный" символ в двунаправленном тексте (Bidi Mirrored), например круглые скобки
/// берется из UCD: 10 колонка UnicodeData.txt
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BidiMirrored(pub bool);

impl TryFrom<&str> for BidiMirrored
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        match value {
            "Y" => Ok(Self(true)),
            "N" => Ok(Self(false)),
            _ => Err(PropertiesError::UnknownPropertyValue),
        }
    }
}
