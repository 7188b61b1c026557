//! Tailwind theme-config serializer.
//!
//! Turns the two palette sets into one deterministic `colors:` block that
//! can be pasted verbatim into a `tailwind.config.ts` theme section. Output
//! is pure derived text with no independent identity; it is recomputed on
//! demand from the palette state.

use crate::models::ShadeRamp;
use crate::palette::PaletteSet;

/// Semantic design tokens that do not depend on any user-editable color.
///
/// Values are references to external theme variables, not literal colors.
/// Emitted exactly once, before all per-key blocks.
const SEMANTIC_PREAMBLE: &str = r#"border: "hsl(var(--border))",
input: "hsl(var(--input))",
ring: "hsl(var(--ring))",
background: "hsl(var(--background))",
foreground: "hsl(var(--foreground))",
muted: {
  DEFAULT: "hsl(var(--muted))",
  foreground: "hsl(var(--muted-foreground))",
},
popover: {
  DEFAULT: "hsl(var(--popover))",
  foreground: "hsl(var(--popover-foreground))",
},
card: {
  DEFAULT: "hsl(var(--card))",
  foreground: "hsl(var(--card-foreground))",
},
destructive: {
  DEFAULT: "hsl(var(--destructive))",
  foreground: "hsl(var(--destructive-foreground))",
},"#;

/// Foreground value written into every per-key block.
///
/// Constant white by design, never contrast-computed; changing this would
/// change the output contract.
const BLOCK_FOREGROUND: &str = "#FFFFFF";

/// Serializes both palette sets into one Tailwind `colors:` block.
///
/// Pure, deterministic, and total: the palette invariant guarantees every
/// canonical value is valid, so serialization cannot fail. Brand blocks come
/// first, then swatch blocks, each in key-table order with eleven entries:
/// stops 100-900, `DEFAULT` (verbatim stop 500) and `foreground`.
#[must_use]
pub fn serialize(brand: &PaletteSet, swatch: &PaletteSet) -> String {
    let mut out = String::from("colors: {\n");
    out.push_str(SEMANTIC_PREAMBLE);

    for set in [brand, swatch] {
        for (key, ramp) in set.ramps() {
            out.push('\n');
            out.push_str(&key_block(key.key, &ramp));
        }
    }

    out.push_str("\n}");
    out
}

/// Renders one per-key color block.
fn key_block(key: &str, ramp: &ShadeRamp) -> String {
    let mut block = format!("  {key}: {{\n");
    for (level, color) in ramp.iter() {
        block.push_str(&format!("    '{level}': '{color}',\n"));
    }
    block.push_str(&format!("    'DEFAULT': '{}',\n", ramp.base()));
    block.push_str(&format!("    'foreground': '{BLOCK_FOREGROUND}'\n"));
    block.push_str("},");
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HexColor;

    fn snippet() -> String {
        serialize(&PaletteSet::brand(), &PaletteSet::swatch())
    }

    #[test]
    fn test_snippet_opens_and_closes() {
        let code = snippet();
        assert!(code.starts_with("colors: {\n"));
        assert!(code.ends_with("\n}"));
    }

    #[test]
    fn test_fifteen_blocks_with_eleven_entries_each() {
        let code = snippet();
        assert_eq!(code.matches("    'DEFAULT': '").count(), 15);
        assert_eq!(code.matches("    'foreground': '#FFFFFF'").count(), 15);
        assert_eq!(code.matches("    '100': '").count(), 15);
        assert_eq!(code.matches("    '900': '").count(), 15);
    }

    #[test]
    fn test_preamble_appears_once_before_all_blocks() {
        let code = snippet();
        assert_eq!(code.matches("border: \"hsl(var(--border))\",").count(), 1);
        assert_eq!(code.matches("destructive: {").count(), 1);

        let preamble_pos = code.find("border: \"hsl(var(--border))\"").unwrap();
        let first_block_pos = code.find("  primary: {").unwrap();
        assert!(preamble_pos < first_block_pos);
    }

    #[test]
    fn test_brand_blocks_precede_swatch_blocks() {
        let code = snippet();
        let dark = code.find("  dark: {").unwrap();
        let gray = code.find("  gray: {").unwrap();
        assert!(dark < gray, "All brand keys come before swatch keys");
    }

    #[test]
    fn test_default_is_verbatim_stop_500() {
        let mut brand = PaletteSet::brand();
        // Lowercase input must survive serialization untouched
        brand.set_from_buffer("primary", "#12ab34");

        let code = serialize(&brand, &PaletteSet::swatch());
        assert!(code.contains("    '500': '#12ab34',"));
        assert!(code.contains("    'DEFAULT': '#12ab34',"));
    }

    #[test]
    fn test_mint_picker_scenario() {
        let mut swatch = PaletteSet::swatch();
        swatch.set_from_picker("mint", HexColor::parse("#3EFF6E").unwrap());

        let code = serialize(&PaletteSet::brand(), &swatch);
        let mint_block = &code[code.find("  mint: {").unwrap()..];
        let mint_block = &mint_block[..mint_block.find("},").unwrap()];
        assert!(mint_block.contains("    '500': '#3EFF6E',"));
        assert!(mint_block.contains("    'DEFAULT': '#3EFF6E',"));
        assert!(mint_block.contains("    'foreground': '#FFFFFF'"));
    }

    #[test]
    fn test_block_layout_matches_reference_emitter() {
        let ramp = ShadeRamp::generate(&HexColor::parse("#000000").unwrap());
        let block = key_block("dark", &ramp);

        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines[0], "  dark: {");
        assert_eq!(lines[1], "    '100': '#555555',");
        assert_eq!(lines[5], "    '500': '#000000',");
        assert_eq!(lines[9], "    '900': '#000000',");
        assert_eq!(lines[10], "    'DEFAULT': '#000000',");
        assert_eq!(lines[11], "    'foreground': '#FFFFFF'");
        assert_eq!(lines[12], "},");
    }

    #[test]
    fn test_serialization_is_deterministic() {
        assert_eq!(snippet(), snippet());
    }
}
