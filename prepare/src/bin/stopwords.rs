//! заголовочный файл C со списками стоп-слов Snowball

use std::io::{self, Write};

use anyhow::Context;
use text_data_prepare::output;
use text_data_prepare::stopwords::StopwordTable;
use text_data_source::files::SNOWBALL_DIR;
use text_data_source::StopwordList;

fn main() -> anyhow::Result<()>
{
    env_logger::init();

    let lists = StopwordList::load_dir(SNOWBALL_DIR)
        .with_context(|| format!("не удалось загрузить списки стоп-слов из {}", SNOWBALL_DIR))?;

    let table = StopwordTable::new(lists);

    log::info!(
        "языков: {}, слов (с разделителями): {}",
        table.descriptors().len(),
        table.strings().len()
    );

    io::stdout().lock().write_all(output::header(&table).as_bytes())?;

    Ok(())
}
