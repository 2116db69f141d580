use std::fmt::Write;

use crate::stopwords::StopwordTable;

use self::format::c_string_literal;

mod format;

/// заголовочный файл C со списками стоп-слов
pub fn header(table: &StopwordTable) -> String
{
    let mut output = String::new();

    // запись в String не возвращает ошибок
    let _ = write_header(&mut output, table);

    output
}

fn write_header(out: &mut String, table: &StopwordTable) -> std::fmt::Result
{
    out.push_str(
        "/* This file is automatically generated. DO NOT EDIT!\n   \
            Instead, edit the word lists and re-run the stopwords generator.  */\n\
        \n\
        #ifndef STOPWORDS_H\n\
        #define STOPWORDS_H\n\
        \n\
        #include <stddef.h>\n\
        #include <stdint.h>\n\
        #include <string.h>\n\
        \n\
        struct stopword_list {\n\
        \tconst char *name;\n\
        \tint offset;\n\
        \tint length;\n\
        };\n\
        \n",
    );

    // названия языков
    writeln!(out, "static const char *stopword_list_names[] = {{")?;
    for name in table.names() {
        writeln!(out, "\t\"{}\",", name)?;
    }
    writeln!(out, "\tNULL\n}};\n")?;

    // расположение списков в общем массиве
    writeln!(out, "static struct stopword_list stopword_lists[] = {{")?;
    for d in table.descriptors() {
        writeln!(out, "\t{{\"{}\", {}, {}}},", d.name, d.offset, d.length)?;
    }
    writeln!(out, "\t{{NULL, 0, 0}}\n}};\n")?;

    // слова всех языков, список каждого языка завершается NULL
    writeln!(out, "static const char * stopword_strings[] = {{")?;
    for (i, d) in table.descriptors().iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        writeln!(out, "\t/* {} */", d.name)?;
        for word in table.list(&d.name).iter().flatten() {
            writeln!(out, "\t{},", c_string_literal(word))?;
        }

        match i + 1 == table.descriptors().len() {
            true => writeln!(out, "\tNULL")?,
            false => writeln!(out, "\tNULL,")?,
        }
    }
    writeln!(out, "}};\n")?;

    out.push_str(
        "static const char **stopword_names(void)\n\
        {\n\
        \treturn (const char **)stopword_list_names;\n\
        }\n\
        \n\
        static const uint8_t **stopword_list(const char *name, int *lenptr)\n\
        {\n\
        \tconst struct stopword_list *ptr = stopword_lists;\n\
        \n\
        \twhile (ptr->name != NULL && strcmp(ptr->name, name) != 0) {\n\
        \t\tptr++;\n\
        \t}\n\
        \n\
        \tif (ptr->name == NULL) {\n\
        \t\tif (lenptr) {\n\
        \t\t\t*lenptr = 0;\n\
        \t\t}\n\
        \t\treturn NULL;\n\
        \t}\n\
        \n\
        \tif (lenptr) {\n\
        \t\t*lenptr = ptr->length;\n\
        \t}\n\
        \treturn (const uint8_t **)(stopword_strings + ptr->offset);\n\
        }\n\
        \n\
        #endif /* STOPWORDS_H */\n",
    );

    Ok(())
}
