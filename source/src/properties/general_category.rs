use super::PropertiesError;

property_values! {
    /// основная категория символа (General Category, GC)
    /// берется из UCD: вторая колонка UnicodeData.txt
    ///
    /// общие категории:
    ///     L (Lu, Ll, Lt, Lm, Lo) - буквы
    ///     M (Mn, Mc, Me) - комбинирующие символы
    ///     N (Nd, Nl, No) - цифры, числовые символы
    ///     P (Pc, Pd, Ps, Pe, Pi, Pf, Po) - знаки препинания
    ///     S (Sm, Sc, Sk, So) - различные символы
    ///     Z (Zs, Zl, Zp) - разделители
    ///     C (Cc, Cf, Cs, Co, Cn) - системные и неназначенные
    pub enum GeneralCategory
    {
        /// прописная буква
        UppercaseLetter = "Lu",
        /// строчная буква
        LowercaseLetter = "Ll",
        /// диграф, первая часть - заглавная буква
        TitlecaseLetter = "Lt",
        /// буква-модификатор
        ModifierLetter = "Lm",
        /// прочие буквы, включая слоги и иероглифы
        OtherLetter = "Lo",
        /// комбинирующий маркер, не занимающий пространства
        NonspacingMark = "Mn",
        /// комбинирующий маркер, занимающий пространство
        SpacingMark = "Mc",
        /// охватывающий комбинирующий маркер
        EnclosingMark = "Me",
        DecimalNumber = "Nd",
        LetterNumber = "Nl",
        OtherNumber = "No",
        ConnectorPunctuation = "Pc",
        DashPunctuation = "Pd",
        OpenPunctuation = "Ps",
        ClosePunctuation = "Pe",
        InitialPunctuation = "Pi",
        FinalPunctuation = "Pf",
        OtherPunctuation = "Po",
        MathSymbol = "Sm",
        CurrencySymbol = "Sc",
        ModifierSymbol = "Sk",
        OtherSymbol = "So",
        SpaceSeparator = "Zs",
        LineSeparator = "Zl",
        ParagraphSeparator = "Zp",
        /// управляющий символ C0 или C1
        Control = "Cc",
        /// управляющий символ форматирования
        Format = "Cf",
        Surrogate = "Cs",
        PrivateUse = "Co",
        /// в UnicodeData.txt не встречается, но допустимо
        Unassigned = "Cn",
    }
}

#[test]
fn abbreviations()
{
    assert_eq!(GeneralCategory::try_from("Lo"), Ok(GeneralCategory::OtherLetter));
    assert_eq!(GeneralCategory::MathSymbol.to_string(), "Sm");
    assert!(GeneralCategory::try_from("L&").is_err());
    assert_eq!(GeneralCategory::NonspacingMark.abbr(), "Mn");
}
