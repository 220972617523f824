//! The four-category batch driver.
//!
//! Mirrors the core's best-effort philosophy at the I/O boundary: a missing
//! input file skips only its own category, and any other failure is reported
//! without stopping the remaining categories. The process exits nonzero only
//! when a category that was present failed.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process;

use distillara_core::SchemaMapper;
use serde_json::Value;

const CORE_INPUT: &str = "alchemy_core.json";
const TIERS_INPUT: &str = "Do_not_touch_ingredient_tiers.json";
const INGREDIENTS_INPUT: &str = "Distillara-ingredients.txt";
const POTIONS_INPUT: &str = "Distillara-potions.txt";

const CORE_OUTPUT: &str = "transformed_alchemy_core.json";
const TIERS_OUTPUT: &str = "transformed_ingredient_tiers.json";
const INGREDIENTS_OUTPUT: &str = "transformed_ingredients.json";
const POTIONS_OUTPUT: &str = "transformed_potions.json";

struct Driver {
    mapper: SchemaMapper,
    quiet: bool,
    failed: bool,
}

impl Driver {
    /// Read one source file. `None` means the category is skipped (file
    /// absent) or failed (anything else); only the latter marks the run.
    fn read_input(&mut self, path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if !self.quiet {
                    println!("{} not found, skipping", path.display());
                }
                None
            }
            Err(e) => {
                eprintln!("error: cannot read {}: {}", path.display(), e);
                self.failed = true;
                None
            }
        }
    }

    fn write_output(&mut self, path: &Path, records: &[Value]) {
        let pretty = match serde_json::to_string_pretty(records) {
            Ok(pretty) => pretty,
            Err(e) => {
                eprintln!("error: cannot serialize {}: {}", path.display(), e);
                self.failed = true;
                return;
            }
        };
        if let Err(e) = fs::write(path, pretty) {
            eprintln!("error: cannot write {}: {}", path.display(), e);
            self.failed = true;
            return;
        }
        if !self.quiet {
            println!(
                "Saved {} transformed records to {}",
                records.len(),
                path.display()
            );
        }
    }

    fn report_bad_input(&mut self, path: &Path, what: &str) {
        eprintln!("error: {}: expected {}", path.display(), what);
        self.failed = true;
    }

    fn run_core(&mut self, dir: &Path, out: &Path) {
        let path = dir.join(CORE_INPUT);
        let Some(text) = self.read_input(&path) else {
            return;
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(core)) => {
                let entity = self.mapper.map_core_ruleset(&core);
                self.write_output(&out.join(CORE_OUTPUT), &[entity]);
            }
            Ok(_) => self.report_bad_input(&path, "a JSON object"),
            Err(e) => {
                eprintln!("error: cannot parse {}: {}", path.display(), e);
                self.failed = true;
            }
        }
    }

    fn run_tiers(&mut self, dir: &Path, out: &Path) {
        let path = dir.join(TIERS_INPUT);
        let Some(text) = self.read_input(&path) else {
            return;
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Array(tiers)) => {
                let entities = self.mapper.map_tiers(&tiers);
                self.write_output(&out.join(TIERS_OUTPUT), &entities);
            }
            Ok(_) => self.report_bad_input(&path, "a JSON array"),
            Err(e) => {
                eprintln!("error: cannot parse {}: {}", path.display(), e);
                self.failed = true;
            }
        }
    }

    fn run_ingredients(&mut self, dir: &Path, out: &Path) {
        let Some(text) = self.read_input(&dir.join(INGREDIENTS_INPUT)) else {
            return;
        };
        let entities = self.mapper.map_ingredients(&text);
        self.write_output(&out.join(INGREDIENTS_OUTPUT), &entities);
    }

    fn run_potions(&mut self, dir: &Path, out: &Path) {
        let Some(text) = self.read_input(&dir.join(POTIONS_INPUT)) else {
            return;
        };
        let entities = self.mapper.map_potions(&text);
        self.write_output(&out.join(POTIONS_OUTPUT), &entities);
    }
}

pub(crate) fn cmd_transform(dir: &Path, out: &Path, quiet: bool) {
    let mut driver = Driver {
        mapper: SchemaMapper::new(),
        quiet,
        failed: false,
    };
    driver.run_core(dir, out);
    driver.run_tiers(dir, out);
    driver.run_ingredients(dir, out);
    driver.run_potions(dir, out);
    if driver.failed {
        process::exit(1);
    }
}
