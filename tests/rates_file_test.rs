use fx_converter::config::rates_file::RatesFileConfig;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_rates_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_rates_file_from_disk() {
    let file = write_rates_file(
        r#"
base = "USD"

[rates]
USD = 1.0
EUR = 0.92
JPY = 156.91
"#,
    );

    let table = RatesFileConfig::from_path(file.path())
        .unwrap()
        .into_table()
        .unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.base(), "USD");
    assert_eq!(table.rate("JPY").unwrap(), 156.91);
}

#[test]
fn test_lowercase_codes_normalized_on_load() {
    let file = write_rates_file(
        r#"
base = "usd"

[rates]
usd = 1.0
eur = 0.92
"#,
    );

    let table = RatesFileConfig::from_path(file.path())
        .unwrap()
        .into_table()
        .unwrap();

    assert!(table.contains("EUR"));
    assert_eq!(table.base(), "USD");
}

#[test]
fn test_zero_rate_rejected_eagerly() {
    let file = write_rates_file(
        r#"
base = "USD"

[rates]
USD = 1.0
BAD = 0.0
"#,
    );

    let result = RatesFileConfig::from_path(file.path()).unwrap().into_table();
    assert!(result.is_err());
}

#[test]
fn test_base_missing_from_rates_rejected() {
    let file = write_rates_file(
        r#"
base = "CHF"

[rates]
USD = 1.0
EUR = 0.92
"#,
    );

    let result = RatesFileConfig::from_path(file.path()).unwrap().into_table();
    assert!(result.is_err());
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let file = write_rates_file("base = \"USD\"\n[rates\nUSD = 1.0\n");
    assert!(RatesFileConfig::from_path(file.path()).is_err());
}
