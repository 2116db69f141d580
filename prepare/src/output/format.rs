/// строковый литерал C: байты UTF-8 от 128 и выше записываются восьмеричными последовательностями
pub fn c_string_literal(value: &str) -> String
{
    let mut output = String::with_capacity(value.len() + 2);

    output.push('"');

    for &byte in value.as_bytes() {
        match byte < 0x80 {
            true => output.push(byte as char),
            false => output.push_str(format!("\\{:o}", byte).as_str()),
        }
    }

    output.push('"');

    output
}

#[test]
fn escapes_non_ascii()
{
    assert_eq!(c_string_literal("og"), r#""og""#);
    assert_eq!(c_string_literal("v\u{E6}ret"), r#""v\303\246ret""#);
    assert_eq!(c_string_literal("\u{438}"), r#""\320\270""#);
    assert_eq!(c_string_literal(""), r#""""#);
}
