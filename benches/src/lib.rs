//! синтетические данные для бенчмарков

use text_data_source::StopwordList;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// первый кодпоинт синтетических записей (область для частного использования)
const FIRST: u32 = 0xE000;
/// максимальная глубина цепочки декомпозиций
const DEPTH: u32 = 8;

/// UnicodeData.txt из count записей: каждая раскладывается на предыдущую запись и U+0301,
/// цепочки длиной DEPTH начинаются с латинской буквы
pub fn unicode_data(count: u32) -> String
{
    let mut data = String::from(
        "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;\n\
        0301;COMBINING ACUTE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING ACUTE;;;;\n",
    );

    for i in 0 .. count {
        let code = FIRST + i;
        let base = match i % DEPTH {
            0 => 0x41,
            _ => code - 1,
        };

        data.push_str(
            format!("{:04X};PRIVATE {};Co;0;L;{:04X} 0301;;;;N;;;;;\n", code, i, base).as_str(),
        );
    }

    // диапазон без декомпозиций и слоги хангыль
    data.push_str(
        "4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;\n\
        9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;\n\
        AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;\n\
        D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;\n",
    );

    data
}

/// WordBreakProperty.txt для unicode_data: буквы ALetter, метки Extend,
/// синтетические записи без значения
pub fn word_break() -> String
{
    "0041..005A    ; ALetter\n\
    0300..036F    ; Extend\n\
    AC00..D7A3    ; ALetter\n"
        .to_owned()
}

/// исходный файл списка стоп-слов в latin-1: words слов по одному в строке, с комментариями
pub fn stopword_file(words: usize) -> Vec<u8>
{
    let mut data = b" | synthetic stop word list\n\n".to_vec();

    for i in 0 .. words {
        // слова с символами вне ASCII: \xE6 - "æ"
        data.extend_from_slice(format!("w{}", words - i).as_bytes());
        data.extend_from_slice(b"\xE6 | comment\n");
    }

    data
}

/// languages списков по words слов
pub fn stopword_lists(languages: usize, words: usize) -> Vec<StopwordList>
{
    let file = stopword_file(words);

    (0 .. languages)
        .map(|i| StopwordList::parse(format!("language{}", i), &file))
        .collect()
}
