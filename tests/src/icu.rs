use icu_normalizer::DecomposingNormalizer;

use crate::data;

/// полная декомпозиция совпадает с NFKD ICU, если элементы не требуют переупорядочивания по CCC
#[test]
fn icu_nfkd()
{
    let unicode = data::unicode();
    let nfkd = DecomposingNormalizer::new_nfkd();

    for code in data::DECOMPOSED {
        let source = char::from_u32(code).unwrap().to_string();

        let decomposed: String = unicode
            .decompose(code)
            .unwrap()
            .into_iter()
            .map(|c| char::from_u32(c).unwrap())
            .collect();

        assert_eq!(decomposed, nfkd.normalize(&source), "U+{:04X}", code);
    }
}

/// кодпоинты без декомпозиции ICU оставляет как есть
#[test]
fn icu_leaves()
{
    let unicode = data::unicode();
    let nfkd = DecomposingNormalizer::new_nfkd();

    for code in [0x31, 0x41, 0x73, 0x301, 0x2044, 0x4E00] {
        let source = char::from_u32(code).unwrap().to_string();

        assert_eq!(unicode.decompose(code), None, "U+{:04X}", code);
        assert_eq!(nfkd.normalize(&source), source, "U+{:04X}", code);
    }
}
