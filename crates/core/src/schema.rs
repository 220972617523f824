//! Schema mapping: raw records and structured source objects into canonical
//! nested entities, wrapped in the common id/cnc/metadata envelope.

use serde_json::{json, Map, Value};

use crate::record::{FieldValue, RawRecord};
use crate::services::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::spatial;
use crate::{CREATED_BY, INSPIRED_BY, SCHEMA_VERSION};

/// Deterministic namespaced classification code:
/// `ECOSYSTEM.Distillara.<TYPE>.<NAME>` with the display name upper-cased and
/// spaces replaced by underscores. Reproduced byte-for-byte across runs.
pub fn classification_code(entity_type: &str, name: &str) -> String {
    format!(
        "ECOSYSTEM.Distillara.{}.{}",
        entity_type,
        name.to_uppercase().replace(' ', "_")
    )
}

/// Maps raw records into canonical entities.
///
/// Identifier and timestamp synthesis go through injected services; the
/// defaults are random UUIDs and the UTC system clock. Mapping never fails:
/// every absent optional field takes its documented default instead.
pub struct SchemaMapper {
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
}

impl Default for SchemaMapper {
    fn default() -> Self {
        SchemaMapper::new()
    }
}

impl SchemaMapper {
    pub fn new() -> Self {
        SchemaMapper {
            ids: Box::new(UuidGenerator),
            clock: Box::new(SystemClock),
        }
    }

    /// Substitute deterministic id/clock services (used by tests).
    pub fn with_services(ids: Box<dyn IdGenerator>, clock: Box<dyn Clock>) -> Self {
        SchemaMapper { ids, clock }
    }

    fn metadata(&self, created_by: &str, inspired_by: &str) -> Value {
        json!({
            "created_by": created_by,
            "inspired_by": inspired_by,
            "version": SCHEMA_VERSION,
            "created_at": self.clock.now(),
            "updated_at": self.clock.now(),
        })
    }

    /// Map one parsed ingredient record.
    pub fn map_ingredient(&mut self, raw: &RawRecord) -> Value {
        let spatial = spatial::resolve(raw.text("description"));
        // The parsed price is a plain string; an absent price stays an
        // empty object for output compatibility.
        let market_price = match raw.get("market_price") {
            Some(FieldValue::Text(s)) => json!(s),
            _ => json!({}),
        };
        json!({
            "id": self.ids.next_id(),
            "cnc": classification_code("INGREDIENT", &raw.name),
            "metadata": self.metadata(CREATED_BY, INSPIRED_BY),
            "spatial_context": spatial,
            "properties": {
                "name": raw.name,
                "scientific_name": raw.text("scientific_name"),
                "common_names": raw.list("other_names"),
                "rarity_level": raw.int_or("rarity_level", 1),
                "elemental_alignment": raw.list("elemental_alignment"),
                "classification": {
                    "type": raw.text_or("type", "Plant"),
                    "source": raw.text("source"),
                    "physical_form": raw.text("physical_form"),
                },
            },
            "effects": {
                "primary_properties": {
                    "potency": raw.text_or("potency", "Low to Moderate"),
                    "unique_effects": raw.text("unique_effects"),
                },
                "applications": {
                    "healing_alchemy": raw.list("healing_applications"),
                    "transformation_alchemy": raw.list("transformation_applications"),
                    "combat_alchemy": raw.list("combat_applications"),
                    "mystical_alchemy": raw.list("mystical_applications"),
                },
                "subject_effects": {
                    "immediate": raw.text("immediate_effects"),
                    "long_term": raw.text("long_term_effects"),
                    "toxicity": raw.text("toxicity"),
                },
            },
            "harvesting": {
                "frequency": raw.text_or("frequency", "Weekly"),
                "environmental_conditions": raw.text("environmental_conditions"),
                "harvesting_method": raw.text("harvesting_method"),
                "associated_risks": raw.list("associated_risks"),
                "harvest_yield": raw.text("harvest_yield"),
            },
            "preparation": {
                "steps": raw.list("preparation_steps"),
            },
            "value": {
                "market_price": market_price,
            },
            // Reserved for future linking; always empty at construction.
            "cross_references": {
                "related_ingredients": [],
                "used_in_potions": [],
                "techniques": [],
            },
        })
    }

    /// Map one parsed potion record.
    pub fn map_potion(&mut self, raw: &RawRecord) -> Value {
        let spatial = spatial::resolve(raw.text("description"));
        json!({
            "id": self.ids.next_id(),
            "cnc": classification_code("POTION", &raw.name),
            "metadata": self.metadata(CREATED_BY, INSPIRED_BY),
            "spatial_context": spatial,
            "properties": {
                "name": raw.name,
                "complexity_level": raw.int_or("complexity_level", 1),
                "rarity_level": raw.int_or("rarity_level", 1),
            },
            "description": raw.text("description"),
            "appearance": {
                "color": raw.text("appearance_and_color"),
                "storage_requirements": raw.text("storage_requirements"),
                "image_prompt": raw.text("image_prompt"),
            },
            "technical_specs": {
                "average_cost": raw.text("average_cost"),
                "duration_of_effect": raw.text("duration_of_effect"),
                "side_effects_and_risks": raw.text("side_effects_and_risks"),
                "usage": raw.text("usage"),
            },
            "lore": raw.text("lore"),
            "case_studies": {
                "studied_by": raw.text("studied_by"),
                "findings": raw.text("findings"),
            },
            "quotes": raw.list("quotes"),
            "ingredients": raw.list("ingredients"),
            "cross_references": {
                "related_potions": [],
                "techniques": [],
            },
        })
    }

    /// Map the already-structured core ruleset object. Pure passthrough of
    /// the rule blocks under a fresh envelope.
    pub fn map_core_ruleset(&mut self, core: &Map<String, Value>) -> Value {
        let field = |key: &str, default: Value| core.get(key).cloned().unwrap_or(default);
        let created_by = core
            .get("created_by")
            .and_then(Value::as_str)
            .unwrap_or(CREATED_BY);
        let inspired_by = core
            .get("inspired_by")
            .and_then(Value::as_str)
            .unwrap_or(INSPIRED_BY);
        json!({
            "id": self.ids.next_id(),
            "cnc": "ECOSYSTEM.Distillara.CORE.ALCHEMY",
            "metadata": self.metadata(created_by, inspired_by),
            "difficulty_factors": field("difficulty_factors", json!({})),
            "failure_table": field("failure_table", json!({})),
            "workspace_modifiers": field("workspace_modifiers", json!([])),
            "techniques": field("techniques", json!([])),
            "difficulty_scale": field("difficulty_scale", json!({})),
        })
    }

    /// Map the already-structured tier sequence, one entity per tier.
    pub fn map_tiers(&mut self, tiers: &[Value]) -> Vec<Value> {
        tiers.iter().map(|tier| self.map_tier(tier)).collect()
    }

    fn map_tier(&mut self, tier: &Value) -> Value {
        let empty = Map::new();
        let obj = tier.as_object().unwrap_or(&empty);
        let field = |key: &str, default: Value| obj.get(key).cloned().unwrap_or(default);
        let level = field("level", json!(1));
        let level_label = match &level {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        json!({
            "id": self.ids.next_id(),
            "cnc": format!("ECOSYSTEM.Distillara.TIER.LEVEL_{level_label}"),
            "metadata": self.metadata(CREATED_BY, INSPIRED_BY),
            "properties": {
                "level": level,
                "rarity": field("rarity", json!("")),
                "availability": field("availability", json!("")),
                "cost": field("cost", json!("")),
                "examples": field("examples", json!([])),
                "applications": field("applications", json!([])),
            },
        })
    }

    /// Parse an ingredient document and map every record.
    pub fn map_ingredients(&mut self, text: &str) -> Vec<Value> {
        crate::parse::parse_ingredients(text)
            .iter()
            .map(|raw| self.map_ingredient(raw))
            .collect()
    }

    /// Parse a potion document and map every record.
    pub fn map_potions(&mut self, text: &str) -> Vec<Value> {
        crate::parse::parse_potions(text)
            .iter()
            .map(|raw| self.map_potion(raw))
            .collect()
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter-backed id source for exact-output assertions.
    struct SeqIds(u32);
    impl IdGenerator for SeqIds {
        fn next_id(&mut self) -> String {
            self.0 += 1;
            format!("id-{:04}", self.0)
        }
    }

    /// Clock pinned to a fixed instant.
    struct FixedClock(&'static str);
    impl Clock for FixedClock {
        fn now(&self) -> String {
            self.0.to_owned()
        }
    }

    fn test_mapper() -> SchemaMapper {
        SchemaMapper::with_services(
            Box::new(SeqIds(0)),
            Box::new(FixedClock("2026-08-25T00:00:00Z")),
        )
    }

    #[test]
    fn classification_code_upper_cases_and_underscores() {
        assert_eq!(
            classification_code("INGREDIENT", "Moon Petal"),
            "ECOSYSTEM.Distillara.INGREDIENT.MOON_PETAL"
        );
        assert_eq!(
            classification_code("POTION", "Elixir of Dawn"),
            "ECOSYSTEM.Distillara.POTION.ELIXIR_OF_DAWN"
        );
    }

    #[test]
    fn ingredient_defaults_fill_every_absent_field() {
        let raw = RawRecord::named("Moon Petal");
        let entity = test_mapper().map_ingredient(&raw);
        assert_eq!(entity["id"], "id-0001");
        assert_eq!(entity["cnc"], "ECOSYSTEM.Distillara.INGREDIENT.MOON_PETAL");
        assert_eq!(entity["metadata"]["created_by"], CREATED_BY);
        assert_eq!(entity["metadata"]["version"], "1.0.0");
        assert_eq!(entity["metadata"]["created_at"], "2026-08-25T00:00:00Z");
        assert_eq!(entity["properties"]["name"], "Moon Petal");
        assert_eq!(entity["properties"]["scientific_name"], "");
        assert_eq!(entity["properties"]["rarity_level"], 1);
        assert_eq!(entity["properties"]["classification"]["type"], "Plant");
        assert_eq!(
            entity["effects"]["primary_properties"]["potency"],
            "Low to Moderate"
        );
        assert_eq!(entity["harvesting"]["frequency"], "Weekly");
        assert_eq!(entity["preparation"]["steps"], json!([]));
        assert_eq!(entity["value"]["market_price"], json!({}));
        assert_eq!(
            entity["cross_references"],
            json!({"related_ingredients": [], "used_in_potions": [], "techniques": []})
        );
        // Default biome when the description is empty.
        assert_eq!(entity["spatial_context"]["region"], "TEMPERATE_FOREST");
    }

    #[test]
    fn ingredient_spatial_context_follows_description() {
        let mut raw = RawRecord::named("Ember Root");
        raw.set(
            "description",
            FieldValue::Text("found near a mountain pass ".to_owned()),
        );
        let entity = test_mapper().map_ingredient(&raw);
        let ctx = &entity["spatial_context"];
        assert_eq!(ctx["region"], "MOUNTAINOUS_REGION");
        assert_eq!(ctx["sub_region"], "MOUNTAINOUS_REGION_OUTSKIRTS");
        assert_eq!(ctx["coordinates"]["latitude"], 40.7128);
        assert_eq!(ctx["coordinates"]["longitude"], -74.0060);
        assert_eq!(ctx["coordinates"]["altitude"], 100);
        assert_eq!(ctx["harvesting_location"]["biome"], "mountainous_region");
    }

    #[test]
    fn market_price_string_passes_through_when_present() {
        let mut raw = RawRecord::named("Moon Petal");
        raw.set("market_price", FieldValue::Text("12 gold".to_owned()));
        let entity = test_mapper().map_ingredient(&raw);
        assert_eq!(entity["value"]["market_price"], "12 gold");
    }

    #[test]
    fn potion_shape_and_defaults() {
        let mut raw = RawRecord::named("Elixir of Dawn");
        raw.set("complexity_level", FieldValue::Int(4));
        raw.push_list("quotes", "\"It burns going down.\"");
        let entity = test_mapper().map_potion(&raw);
        assert_eq!(entity["cnc"], "ECOSYSTEM.Distillara.POTION.ELIXIR_OF_DAWN");
        assert_eq!(entity["properties"]["complexity_level"], 4);
        assert_eq!(entity["properties"]["rarity_level"], 1);
        assert_eq!(entity["description"], "");
        assert_eq!(entity["lore"], "");
        assert_eq!(entity["quotes"], json!(["\"It burns going down.\""]));
        assert_eq!(entity["ingredients"], json!([]));
        assert_eq!(
            entity["cross_references"],
            json!({"related_potions": [], "techniques": []})
        );
    }

    #[test]
    fn mapping_twice_yields_distinct_ids_with_identical_content() {
        let raw = RawRecord::named("Moon Petal");
        let mut mapper = test_mapper();
        let mut a = mapper.map_ingredient(&raw);
        let mut b = mapper.map_ingredient(&raw);
        assert_ne!(a["id"], b["id"]);
        a.as_object_mut().and_then(|m| m.remove("id"));
        b.as_object_mut().and_then(|m| m.remove("id"));
        assert_eq!(a, b);
    }

    #[test]
    fn core_ruleset_passes_blocks_through() {
        let core: Map<String, Value> = serde_json::from_value(json!({
            "created_by": "Archivist Wen",
            "difficulty_factors": {"heat": 2},
            "techniques": ["distillation"],
        }))
        .expect("object literal");
        let entity = test_mapper().map_core_ruleset(&core);
        assert_eq!(entity["cnc"], "ECOSYSTEM.Distillara.CORE.ALCHEMY");
        assert_eq!(entity["metadata"]["created_by"], "Archivist Wen");
        assert_eq!(entity["metadata"]["inspired_by"], INSPIRED_BY);
        assert_eq!(entity["difficulty_factors"], json!({"heat": 2}));
        assert_eq!(entity["failure_table"], json!({}));
        assert_eq!(entity["techniques"], json!(["distillation"]));
        assert_eq!(entity["workspace_modifiers"], json!([]));
        assert_eq!(entity["difficulty_scale"], json!({}));
    }

    #[test]
    fn tiers_map_one_entity_per_tier_with_defaults() {
        let tiers = vec![
            json!({"level": 3, "rarity": "Rare", "examples": ["Moon Petal"]}),
            json!({}),
        ];
        let out = test_mapper().map_tiers(&tiers);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0]["cnc"], "ECOSYSTEM.Distillara.TIER.LEVEL_3");
        assert_eq!(out[0]["properties"]["level"], 3);
        assert_eq!(out[0]["properties"]["rarity"], "Rare");
        assert_eq!(out[0]["properties"]["examples"], json!(["Moon Petal"]));
        assert_eq!(out[1]["cnc"], "ECOSYSTEM.Distillara.TIER.LEVEL_1");
        assert_eq!(out[1]["properties"]["level"], 1);
        assert_eq!(out[1]["properties"]["cost"], "");
        assert_eq!(out[1]["properties"]["applications"], json!([]));
        assert_ne!(out[0]["id"], out[1]["id"]);
    }
}
