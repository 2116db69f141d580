use std::path::Path;
use std::rc::Rc;

use regex::Regex;

use crate::files;
use crate::properties::*;
use crate::UcdError;

/// последний кодпоинт Unicode
pub const UNICODE_MAX: u32 = 0x10FFFF;

/// количество колонок UnicodeData.txt после кода (последняя может отсутствовать)
const FIELDS: usize = 14;

lazy_static! {
    /// маркер диапазона в названии: <CJK Ideograph, First> ... <CJK Ideograph, Last>
    static ref RANGE: Regex = Regex::new(r"^<([^,]+),\s*(First|Last)>$").unwrap();
}

/// таблица Unicode: запись (или её отсутствие) для каждого кодпоинта 0 ..= U+10FFFF
pub struct UnicodeData
{
    records: Vec<Option<Rc<CodepointRecord>>>,
}

impl UnicodeData
{
    /// загрузить UnicodeData.txt (с запасным путем в родительской директории)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, UcdError>
    {
        let path = path.as_ref();
        let unicode = Self::parse(&files::read_to_string(path)?)?;

        log::info!("{}: записей о кодпоинтах - {}", path.display(), unicode.len());

        Ok(unicode)
    }

    /// разбор содержимого UnicodeData.txt
    pub fn parse(data: &str) -> Result<Self, UcdError>
    {
        let mut records: Vec<Option<Rc<CodepointRecord>>> = vec![None; UNICODE_MAX as usize + 1];

        for (i, line) in data.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let (code, record) = parse_line(i + 1, line)?;

            records[code as usize] = Some(Rc::new(record));
        }

        expand_ranges(&mut records);

        Ok(Self { records })
    }

    /// запись о кодпоинте: собственная, заглушка диапазона или None
    pub fn get(&self, code: u32) -> Option<&CodepointRecord>
    {
        self.records.get(code as usize)?.as_deref()
    }

    /// кодпоинты, для которых есть запись, по возрастанию
    pub fn iter(&self) -> impl Iterator<Item = (u32, &CodepointRecord)>
    {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(code, record)| Some((code as u32, record.as_deref()?)))
    }

    /// количество кодпоинтов с записями, включая заглушки диапазонов
    pub fn len(&self) -> usize
    {
        self.records.iter().filter(|r| r.is_some()).count()
    }

    pub fn is_empty(&self) -> bool
    {
        self.records.iter().all(|r| r.is_none())
    }
}

/// разбор строки UnicodeData.txt
fn parse_line(line_number: usize, line: &str) -> Result<(u32, CodepointRecord), UcdError>
{
    let fields: Vec<&str> = line.split(';').collect();

    if fields.len() < FIELDS || fields.len() > FIELDS + 1 {
        return Err(UcdError::malformed(
            line_number,
            format!("ожидали {} колонок, получили {}", FIELDS + 1, fields.len()),
        ));
    }

    let code = match u32::from_str_radix(fields[0], 16) {
        Ok(code) if code <= UNICODE_MAX => code,
        _ => return Err(UcdError::malformed(line_number, format!("код: {:?}", fields[0]))),
    };

    // последняя колонка (Simple_Titlecase_Mapping) может быть опущена
    let field = |i: usize| fields.get(i).copied().unwrap_or("");

    macro_rules! parse {
        ($name: literal, $value: expr, $parse: expr) => {{
            let value = $value;
            $parse(value).map_err(|e| UcdError::property(line_number, $name, value, e))?
        }};
    }

    let decomposition = parse!("Decomposition_Mapping", field(5), |v| {
        Decomposition::parse(code, v)
    });
    let numeric = parse!("Numeric_Value", field(8), |v| {
        NumericType::try_from((field(6), field(7), v))
    });

    let record = CodepointRecord {
        name: field(1).to_owned(),
        gc: parse!("General_Category", field(2), GeneralCategory::try_from),
        ccc: parse!("Canonical_Combining_Class", field(3), CanonicalCombiningClass::try_from),
        bc: parse!("Bidi_Class", field(4), BidiClass::try_from),
        decomposition,
        numeric,
        bidi_mirrored: parse!("Bidi_Mirrored", field(9), BidiMirrored::try_from),
        unicode_1_name: field(10).to_owned(),
        iso_comment: field(11).to_owned(),
        simple_uppercase_mapping: parse!("Simple_Uppercase_Mapping", field(12), parse_code),
        simple_lowercase_mapping: parse!("Simple_Lowercase_Mapping", field(13), parse_code),
        simple_titlecase_mapping: parse!("Simple_Titlecase_Mapping", field(14), parse_code),
    };

    Ok((code, record))
}

/// заполнение диапазонов, записанных в UCD парой строк First/Last.
///
/// кодпоинты без собственной записи получают текущую заглушку (или None, если мы вне диапазона),
/// заглушка - запись First с названием <RangeName>; запись Last остается собственной и закрывает диапазон
fn expand_ranges(records: &mut [Option<Rc<CodepointRecord>>])
{
    let mut placeholder: Option<Rc<CodepointRecord>> = None;

    for entry in records.iter_mut() {
        let record = match entry.as_ref() {
            Some(record) => record,
            None => {
                *entry = placeholder.clone();
                continue;
            }
        };

        let captures = match RANGE.captures(&record.name) {
            Some(captures) => captures,
            None => continue,
        };

        placeholder = match &captures[2] {
            "First" => Some(Rc::new(CodepointRecord {
                name: format!("<{}>", &captures[1]),
                ..CodepointRecord::clone(record)
            })),
            _ => None,
        };
    }
}
