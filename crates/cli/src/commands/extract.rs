use std::fs;
use std::path::Path;
use std::process;

use distillara_core::SchemaMapper;
use serde_json::Value;

fn extract(file: &Path, map: impl FnOnce(&mut SchemaMapper, &str) -> Vec<Value>) {
    let text = match fs::read_to_string(file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", file.display(), e);
            process::exit(1);
        }
    };
    let entities = map(&mut SchemaMapper::new(), &text);
    let pretty = serde_json::to_string_pretty(&Value::Array(entities))
        .unwrap_or_else(|e| format!("serialization error: {}", e));
    println!("{}", pretty);
}

pub(crate) fn cmd_ingredients(file: &Path) {
    extract(file, |mapper, text| mapper.map_ingredients(text));
}

pub(crate) fn cmd_potions(file: &Path) {
    extract(file, |mapper, text| mapper.map_potions(text));
}
