use crate::properties::Decomposition;
use crate::UnicodeData;

// в UnicodeData.txt декомпозиция хранится в сжатом виде: элементы декомпозиции
// сами могут иметь декомпозицию. здесь получаем развернутую версию, без разделения
// на каноническую декомпозицию и декомпозицию совместимости, и без переупорядочивания по CCC

/// в UCD глубина вложенности декомпозиций не превышает нескольких уровней,
/// более глубокая цепочка означает цикл в данных
const MAX_DEPTH: usize = 32;

impl UnicodeData
{
    /// полная (рекурсивная) декомпозиция кодпоинта.
    ///
    /// None - если записи нет, декомпозиции нет, это слог хангыль
    /// (алгоритмическая декомпозиция хангыль не реализована) или декомпозиция зациклена
    pub fn decompose(&self, code: u32) -> Option<Vec<u32>>
    {
        let codes = match self.get(code)?.decomposition.as_ref()? {
            Decomposition::Mapping { codes, .. } => codes,
            Decomposition::Hangul => return None,
        };

        let mut result = Vec::with_capacity(codes.len());

        for &element in codes {
            if !self.expand(element, 1, &mut result) {
                log::warn!("U+{:04X}: декомпозиция зациклена", code);
                return None;
            }
        }

        Some(result)
    }

    /// есть ли у кодпоинта декомпозиция, которую можно развернуть
    pub fn has_decomposition(&self, code: u32) -> bool
    {
        matches!(
            self.get(code).and_then(|r| r.decomposition.as_ref()),
            Some(Decomposition::Mapping { .. })
        )
    }

    /// дописать в result развернутую декомпозицию элемента; false - превышена глубина
    fn expand(&self, code: u32, depth: usize, result: &mut Vec<u32>) -> bool
    {
        if depth > MAX_DEPTH {
            return false;
        }

        match self.get(code).and_then(|r| r.decomposition.as_ref()) {
            Some(Decomposition::Mapping { codes, .. }) => codes
                .iter()
                .all(|&element| self.expand(element, depth + 1, result)),
            _ => {
                result.push(code);
                true
            }
        }
    }
}
