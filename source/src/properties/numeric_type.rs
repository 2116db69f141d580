use super::PropertiesError;

/// числовое значение (Numeric Type, Numeric Value)
/// берется из UCD: 7, 8, 9 колонки UnicodeData.txt
///
/// колонки вложены друг в друга: десятичная цифра заполняет все три, цифра - две последних,
/// прочие числовые символы (дроби, римские цифры) - только последнюю
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericType
{
    /// не является числовым значением
    None,
    /// десятичная цифра, 0..=9
    Decimal(u8),
    /// цифра, 0..=9 (например, надстрочная)
    Digit(u8),
    /// значение в исходной записи, например "1/2"
    Numeric(String),
}

impl TryFrom<(&str, &str, &str)> for NumericType
{
    type Error = PropertiesError;

    fn try_from((decimal, digit, numeric): (&str, &str, &str)) -> Result<Self, Self::Error>
    {
        let filled = (!decimal.is_empty(), !digit.is_empty(), !numeric.is_empty());

        Ok(match filled {
            (true, true, true) => Self::Decimal(decimal.parse()?),
            (false, true, true) => Self::Digit(digit.parse()?),
            (false, false, true) => Self::Numeric(numeric.to_owned()),
            (false, false, false) => Self::None,
            _ => return Err(PropertiesError::InvalidFormat),
        })
    }
}

#[test]
fn nested_columns()
{
    assert_eq!(NumericType::try_from(("7", "7", "7")), Ok(NumericType::Decimal(7)));
    assert_eq!(NumericType::try_from(("", "1", "1")), Ok(NumericType::Digit(1)));
    assert_eq!(
        NumericType::try_from(("", "", "1/2")),
        Ok(NumericType::Numeric("1/2".to_owned()))
    );
    assert_eq!(NumericType::try_from(("", "", "")), Ok(NumericType::None));
    assert!(NumericType::try_from(("1", "", "")).is_err());
}
