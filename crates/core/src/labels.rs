//! Per-entity-type field label tables.
//!
//! Each table enumerates every `Label:` prefix the parser recognizes for one
//! entity type, in a fixed order, together with the parse rule applied to a
//! matching line. The boundary classifier uses the same table as its
//! exclusion set: a line that matches no entry starts a new record.

/// Multi-line accumulation targets opened by [`FieldRule::Section`] labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Free-text prose joined with trailing spaces under `description`.
    Description,
    /// Free-text prose joined with trailing spaces under `lore`.
    Lore,
    /// Discrete quoted lines collected as a list under `quotes`.
    Quotes,
}

impl SectionKind {
    /// Canonical raw-record key the section accumulates into.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Description => "description",
            SectionKind::Lore => "lore",
            SectionKind::Quotes => "quotes",
        }
    }
}

/// Parse rule attached to a recognized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Store the trimmed text after the first `:` under the given key.
    Text(&'static str),
    /// Split the text after the first `:` on `,`, trim each element,
    /// preserve order and duplicates.
    List(&'static str),
    /// Parse the first whitespace token after the `:` as an integer;
    /// any failure degrades to the fixed default `1`.
    Int(&'static str),
    /// Open a multi-line accumulation section; the line stores no value.
    Section(SectionKind),
    /// Structural header recognized only so the line is not mistaken for a
    /// record boundary; stores no value and closes any open section.
    Marker,
}

/// Ordered label table for one entity type.
pub struct LabelTable {
    /// `(label prefix, rule)` pairs; first prefix match wins.
    pub entries: &'static [(&'static str, FieldRule)],
    /// Document-header prefixes skipped outright (neither boundary nor body).
    pub skip_prefixes: &'static [&'static str],
}

impl LabelTable {
    /// First entry whose label is a prefix of `line`, in table order.
    pub fn lookup(&self, line: &str) -> Option<FieldRule> {
        self.entries
            .iter()
            .find(|(label, _)| line.starts_with(label))
            .map(|&(_, rule)| rule)
    }

    /// True for document headers that are ignored entirely.
    pub fn is_skipped(&self, line: &str) -> bool {
        self.skip_prefixes.iter().any(|p| line.starts_with(p))
    }
}

/// Label table for ingredient documents.
///
/// Order mirrors the source document layout; several labels are structural
/// headers (`Classification`, `Applications`, ...) that carry no value of
/// their own but must be recognized so their lines do not read as new
/// ingredient names.
pub static INGREDIENT_LABELS: LabelTable = LabelTable {
    entries: &[
        ("Name:", FieldRule::Text("scientific_name")),
        ("Common Name:", FieldRule::Text("common_name")),
        ("Scientific Name:", FieldRule::Text("scientific_name")),
        ("Other Names:", FieldRule::List("other_names")),
        ("Classification", FieldRule::Marker),
        ("Type:", FieldRule::Text("type")),
        ("Source:", FieldRule::Text("source")),
        ("Physical Form:", FieldRule::Text("physical_form")),
        ("Rarity Level:", FieldRule::Int("rarity_level")),
        ("Precise Description", FieldRule::Section(SectionKind::Description)),
        ("Harvesting Details", FieldRule::Marker),
        ("Frequency:", FieldRule::Text("frequency")),
        (
            "Environmental Conditions:",
            FieldRule::Text("environmental_conditions"),
        ),
        ("Harvesting Method:", FieldRule::Text("harvesting_method")),
        ("Associated Risks:", FieldRule::Marker),
        ("Harvest Yield:", FieldRule::Marker),
        ("Preparation", FieldRule::Marker),
        ("Steps Required:", FieldRule::Marker),
        ("Primary Properties", FieldRule::Marker),
        ("Elemental Alignment:", FieldRule::List("elemental_alignment")),
        ("Potency:", FieldRule::Text("potency")),
        ("Unique Effects:", FieldRule::Text("unique_effects")),
        ("Applications", FieldRule::Marker),
        ("Healing Alchemy:", FieldRule::Marker),
        ("Transformation Alchemy:", FieldRule::Marker),
        ("Combat Alchemy:", FieldRule::Marker),
        ("Mystical Alchemy:", FieldRule::Marker),
        ("Culinary Uses:", FieldRule::Marker),
        ("Industrial Uses:", FieldRule::Marker),
        ("Effects on Subjects", FieldRule::Marker),
        ("Immediate Effects:", FieldRule::Marker),
        ("Long-Term Effects:", FieldRule::Marker),
        ("Toxicity and Side Effects:", FieldRule::Marker),
        ("Value", FieldRule::Marker),
        ("Market Price:", FieldRule::Text("market_price")),
    ],
    skip_prefixes: &["Alchemical Compounds", "level"],
};

/// Label table for potion documents.
pub static POTION_LABELS: LabelTable = LabelTable {
    entries: &[
        ("Description:", FieldRule::Text("description")),
        (
            "Appearance and Color:",
            FieldRule::Text("appearance_and_color"),
        ),
        (
            "Storage Requirements:",
            FieldRule::Text("storage_requirements"),
        ),
        (
            "Image Prompt for AI Generator:",
            FieldRule::Text("image_prompt"),
        ),
        ("Ingredients:", FieldRule::Marker),
        ("Complexity Level:", FieldRule::Int("complexity_level")),
        ("Rarity Level:", FieldRule::Int("rarity_level")),
        ("Average Cost:", FieldRule::Text("average_cost")),
        ("Duration of Effect:", FieldRule::Text("duration_of_effect")),
        (
            "Side Effects and Risks:",
            FieldRule::Text("side_effects_and_risks"),
        ),
        ("Usage:", FieldRule::Text("usage")),
        ("Lore:", FieldRule::Section(SectionKind::Lore)),
        ("Case Studies or Observations:", FieldRule::Marker),
        ("Studied By:", FieldRule::Text("studied_by")),
        ("Findings:", FieldRule::Text("findings")),
        ("Quotes:", FieldRule::Section(SectionKind::Quotes)),
    ],
    skip_prefixes: &["Alchemical Potions", "Combat Potions"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_by_prefix_in_table_order() {
        // "Name:" must not shadow "Common Name:" -- prefix matching anchors
        // at the start of the line, so the two never collide.
        assert_eq!(
            INGREDIENT_LABELS.lookup("Common Name: Moonpetal"),
            Some(FieldRule::Text("common_name"))
        );
        assert_eq!(
            INGREDIENT_LABELS.lookup("Name: Luna petalis"),
            Some(FieldRule::Text("scientific_name"))
        );
    }

    #[test]
    fn structural_headers_are_markers_not_boundaries() {
        assert_eq!(INGREDIENT_LABELS.lookup("Classification"), Some(FieldRule::Marker));
        assert_eq!(INGREDIENT_LABELS.lookup("Applications"), Some(FieldRule::Marker));
        assert_eq!(POTION_LABELS.lookup("Ingredients:"), Some(FieldRule::Marker));
    }

    #[test]
    fn unknown_line_has_no_rule() {
        assert_eq!(INGREDIENT_LABELS.lookup("Moon Petal"), None);
        assert_eq!(POTION_LABELS.lookup("Elixir of Dawn"), None);
    }

    #[test]
    fn document_headers_are_skipped() {
        assert!(INGREDIENT_LABELS.is_skipped("Alchemical Compounds of the Realm"));
        assert!(INGREDIENT_LABELS.is_skipped("level 3 compendium"));
        assert!(POTION_LABELS.is_skipped("Combat Potions"));
        assert!(!POTION_LABELS.is_skipped("Quotes:"));
    }
}
