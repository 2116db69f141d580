//! кодпоинты, у которых свойство Word_Break меняется при декомпозиции (в том числе совместимости)

use std::io::{self, BufWriter, Write};

use text_data_prepare::word_break::WordBreakData;

fn main() -> anyhow::Result<()>
{
    env_logger::init();

    let data = WordBreakData::load()?;
    let changes = data.changes();

    let mut out = BufWriter::new(io::stdout().lock());

    for change in changes {
        writeln!(out, "{}", change)?;
    }

    out.flush()?;

    Ok(())
}
