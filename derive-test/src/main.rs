use argtable::ArgumentTable;

// one `name=value` line per saved value, so repeated flags keep every entry
fn as_config(table: &ArgumentTable) -> String {
    let mut config = String::new();
    for name in table.names() {
        for value in table.get_args(name) {
            config.push_str(name);
            config.push('=');
            config.push_str(value);
            config.push('\n');
        }
    }
    config
}

fn main() {
    let data = r#"
    {
        "values": {
            "datadir": ["/var/lib/node"],
            "connect": ["10.0.0.1", "10.0.0.2"],
            "nolisten": [""]
        },
        "order": ["datadir", "connect", "nolisten"],
        "positional": []
    }"#;

    // saved defaults first, then whatever this run was given layered on top
    let saved: ArgumentTable = serde_json::from_str(data).unwrap();
    let mut table = ArgumentTable::from_env();
    table.merge_config(&as_config(&saved));
    println!("{}", serde_json::to_string_pretty(&table).unwrap());
}
