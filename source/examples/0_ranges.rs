use text_data_source::{files, UcdError, UnicodeData};

/// диапазоны UnicodeData.txt (пары First / Last) и размер каждого
fn main() -> Result<(), UcdError>
{
    let unicode = UnicodeData::load(files::UNICODE_DATA)?;

    let mut first = None;

    for (code, record) in unicode.iter() {
        if record.name.ends_with(", First>") {
            first = Some(code);
        }

        if let (Some(start), Some(name)) = (first, record.name.strip_suffix(", Last>")) {
            println!("{:04X}..{:04X} ({:6}) {}>", start, code, code - start + 1, name);
            first = None;
        }
    }

    Ok(())
}
