use text_data_source::{PropertyTable, UnicodeData};

/// выдержка из UnicodeData.txt (Unicode 15.1)
pub const UNICODE_DATA: &str = "\
0031;DIGIT ONE;Nd;0;EN;;1;1;1;N;;;;;
0032;DIGIT TWO;Nd;0;EN;;2;2;2;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0066;LATIN SMALL LETTER F;Ll;0;L;;;;;N;;;0046;;0046
0069;LATIN SMALL LETTER I;Ll;0;L;;;;;N;;;0049;;0049
0073;LATIN SMALL LETTER S;Ll;0;L;;;;;N;;;0053;;0053
00BD;VULGAR FRACTION ONE HALF;No;0;ON;<fraction> 0031 2044 0032;;;1/2;N;FRACTION ONE HALF;;;;
00C5;LATIN CAPITAL LETTER A WITH RING ABOVE;Lu;0;L;0041 030A;;;;N;LATIN CAPITAL LETTER A RING;;;00E5;
017F;LATIN SMALL LETTER LONG S;Ll;0;L;<compat> 0073;;;;N;;;0053;;0053
01FA;LATIN CAPITAL LETTER A WITH RING ABOVE AND ACUTE;Lu;0;L;00C5 0301;;;;N;;;;01FB;
0301;COMBINING ACUTE ACCENT;Mn;230;NSM;;;;;N;NON-SPACING ACUTE;;;;
0307;COMBINING DOT ABOVE;Mn;230;NSM;;;;;N;NON-SPACING DOT ABOVE;;;;
030A;COMBINING RING ABOVE;Mn;230;NSM;;;;;N;NON-SPACING RING ABOVE;;;;
1E9B;LATIN SMALL LETTER LONG S WITH DOT ABOVE;Ll;0;L;017F 0307;;;;N;;;1E60;;1E60
2044;FRACTION SLASH;Sm;0;CS;;;;;N;;;;;
212B;ANGSTROM SIGN;Lu;0;L;00C5;;;;N;ANGSTROM UNIT;;;00E5;
2460;CIRCLED DIGIT ONE;No;0;ON;<circle> 0031;;1;1;N;;;;;
4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
FB01;LATIN SMALL LIGATURE FI;Ll;0;L;<compat> 0066 0069;;;;N;;;;;
";

/// выдержка из WordBreakProperty.txt для тех же кодпоинтов
pub const WORD_BREAK: &str = "\
0030..0039    ; Numeric # Nd  [10] DIGIT ZERO..DIGIT NINE
0041..005A    ; ALetter # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
0061..007A    ; ALetter # L&  [26] LATIN SMALL LETTER A..LATIN SMALL LETTER Z
00C0..00D6    ; ALetter # L&  [23] LATIN CAPITAL LETTER A WITH GRAVE..LATIN CAPITAL LETTER O WITH DIAERESIS
0100..02D7    ; ALetter # L& [472] LATIN CAPITAL LETTER A WITH MACRON..MODIFIER LETTER MINUS SIGN
0300..036F    ; Extend # Mn [112] COMBINING GRAVE ACCENT..COMBINING LATIN SMALL LETTER X
1E00..1F15    ; ALetter # L& [278] LATIN CAPITAL LETTER A WITH RING BELOW..GREEK SMALL LETTER EPSILON WITH DASIA AND OXIA
2044          ; MidNum # Sm       FRACTION SLASH
212B          ; ALetter # Lu       ANGSTROM SIGN
AC00..D7A3    ; ALetter # Lo [11172] HANGUL SYLLABLE GA..HANGUL SYLLABLE HIH
FB00..FB06    ; ALetter # L&   [7] LATIN SMALL LIGATURE FF..LATIN SMALL LIGATURE ST
";

/// кодпоинты выдержки, у которых есть декомпозиция
pub const DECOMPOSED: [u32; 8] = [0xBD, 0xC5, 0x17F, 0x1FA, 0x1E9B, 0x212B, 0x2460, 0xFB01];

pub fn unicode() -> UnicodeData
{
    UnicodeData::parse(UNICODE_DATA).unwrap()
}

pub fn word_break() -> PropertyTable
{
    PropertyTable::parse(WORD_BREAK).unwrap()
}
