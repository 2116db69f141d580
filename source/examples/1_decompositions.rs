use std::collections::BTreeMap;

use text_data_source::{files, UcdError, UnicodeData};

/// давайте поймём:
/// - сколько элементов в полных декомпозициях и насколько они длиннее записей UnicodeData.txt
/// - какая самая длинная декомпозиция
fn main() -> Result<(), UcdError>
{
    let unicode = UnicodeData::load(files::UNICODE_DATA)?;

    // длина декомпозиции -> (канонических, совместимости)
    let mut lengths: BTreeMap<usize, (u32, u32)> = BTreeMap::new();
    let mut expanded = 0;
    let mut longest = (0, 0);

    for (code, record) in unicode.iter() {
        let full = match unicode.decompose(code) {
            Some(full) => full,
            None => continue,
        };

        let canonical = record.decomposition.as_ref().is_some_and(|d| d.is_canonical());
        let entry = lengths.entry(full.len()).or_default();

        match canonical {
            true => entry.0 += 1,
            false => entry.1 += 1,
        }

        if record.decomposition.as_ref().map_or(0, |d| d.codes().len()) != full.len() {
            expanded += 1;
        }

        if full.len() > longest.1 {
            longest = (code, full.len());
        }
    }

    println!("длина | канонических | совместимости");
    for (length, (canonical, compat)) in lengths {
        println!("{:5} | {:12} | {:13}", length, canonical, compat);
    }

    println!("\nраскрыто рекурсивно: {}", expanded);
    println!("самая длинная: U+{:04X} ({})", longest.0, longest.1);

    Ok(())
}
