use std::fs;

const DEFAULT_CONFIG: &str = "src/default_config.toml";

/// Every key of the shipped defaults with the type `Config` deserializes it as
const KEYS: [(&str, &str, &str); 3] = [
    ("parser", "strip_frontmatter", "boolean"),
    ("output", "pretty", "boolean"),
    ("logging", "level", "string"),
];

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_CONFIG}");

    let content = fs::read_to_string(DEFAULT_CONFIG)
        .unwrap_or_else(|e| panic!("cannot read {DEFAULT_CONFIG}: {e}"));

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("invalid {DEFAULT_CONFIG}: {e}"),
    };

    // Every key must be spelled out with the right type so the shipped defaults
    // are visible in one place and never fall back to `Config::default()`.
    for (section, key, expected) in KEYS {
        let Some(value) = table.get(section).and_then(|s| s.get(key)) else {
            panic!("{DEFAULT_CONFIG} is missing {section}.{key}");
        };
        if value.type_str() != expected {
            panic!(
                "{DEFAULT_CONFIG}: {section}.{key} must be a {expected}, found {}",
                value.type_str()
            );
        }
    }
}
