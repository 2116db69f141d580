use text_data_source::StopwordList;

/// описание списка языка в общем массиве слов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordDescriptor
{
    pub name: String,
    /// индекс первого слова в общем массиве
    pub offset: usize,
    /// количество слов (без завершающего NULL)
    pub length: usize,
}

/// таблица стоп-слов в том виде, в котором она записывается в заголовочный файл:
/// слова всех языков подряд, после слов каждого языка - None (NULL)
#[derive(Debug, Default)]
pub struct StopwordTable
{
    descriptors: Vec<StopwordDescriptor>,
    strings: Vec<Option<String>>,
}

impl StopwordTable
{
    /// языки записываются в порядке списков
    pub fn new(lists: Vec<StopwordList>) -> Self
    {
        let mut table = Self::default();

        for list in lists {
            table.descriptors.push(StopwordDescriptor {
                name: list.name,
                offset: table.strings.len(),
                length: list.words.len(),
            });

            table.strings.extend(list.words.into_iter().map(Some));
            table.strings.push(None);
        }

        table
    }

    /// названия языков
    pub fn names(&self) -> impl Iterator<Item = &str>
    {
        self.descriptors.iter().map(|d| d.name.as_str())
    }

    pub fn descriptors(&self) -> &[StopwordDescriptor]
    {
        &self.descriptors
    }

    /// общий массив слов
    pub fn strings(&self) -> &[Option<String>]
    {
        &self.strings
    }

    /// слова языка; для неизвестного языка - пустой срез
    pub fn list(&self, name: &str) -> &[Option<String>]
    {
        match self.descriptors.iter().find(|d| d.name == name) {
            Some(d) => &self.strings[d.offset .. d.offset + d.length],
            None => &[],
        }
    }
}
