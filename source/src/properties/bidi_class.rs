use super::PropertiesError;

property_values! {
    /// класс направления текста (bidi class)
    /// берется из UCD: четвертая колонка UnicodeData.txt
    ///
    /// strong (L, R, AL) - явно заданное направление
    /// weak (EN, ES, ET, AN, CS, NSM, BN) - направление зависит от контекста
    /// neutral (B, S, WS, ON) - не влияют на направление письма
    /// explicit (LRE, LRO, RLE, RLO, PDF, LRI, RLI, FSI, PDI) - явное управление направлением
    pub enum BidiClass
    {
        LeftToRight = "L",
        RightToLeft = "R",
        ArabicLetter = "AL",
        EuropeanNumber = "EN",
        /// знаки плюса и минуса
        EuropeanSeparator = "ES",
        /// символы валюты, знаки процента и т.п.
        EuropeanTerminator = "ET",
        ArabicNumber = "AN",
        /// запятые, двоеточия, слеши
        CommonSeparator = "CS",
        NonspacingMark = "NSM",
        BoundaryNeutral = "BN",
        ParagraphSeparator = "B",
        SegmentSeparator = "S",
        Whitespace = "WS",
        OtherNeutral = "ON",
        LeftToRightEmbedding = "LRE",
        LeftToRightOverride = "LRO",
        RightToLeftEmbedding = "RLE",
        RightToLeftOverride = "RLO",
        PopDirectionalFormat = "PDF",
        LeftToRightIsolate = "LRI",
        RightToLeftIsolate = "RLI",
        FirstStrongIsolate = "FSI",
        PopDirectionalIsolate = "PDI",
    }
}
