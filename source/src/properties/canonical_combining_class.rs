use super::PropertiesError;

/// класс канонического комбинирования (Canonical Combining Class, CCC)
/// берется из UCD: третья колонка UnicodeData.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CanonicalCombiningClass(pub u8);

impl From<CanonicalCombiningClass> for u8
{
    #[inline]
    fn from(value: CanonicalCombiningClass) -> Self
    {
        value.0
    }
}

impl TryFrom<&str> for CanonicalCombiningClass
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(Self(value.parse()?))
    }
}
