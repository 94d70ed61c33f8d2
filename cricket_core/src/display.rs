//! # Display Model
//!
//! Toolkit-independent view of the catalog: records grouped into the three
//! size tabs, each turned into a [`RecordRow`] with color-coded attribute
//! cells. The GUI and CLI only draw what this module produces.

use crate::category::{classify_value, Category};
use crate::record::{Cricket, SizeClass};

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

pub const LOW_COLOR: Rgb = Rgb::new(0x87, 0x00, 0x07);
pub const DEFAULT_COLOR: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const HIGH_COLOR: Rgb = Rgb::new(0x00, 0x80, 0x00);
pub const SUPER_COLOR: Rgb = Rgb::new(0x11, 0xc6, 0xf9);
pub const GOD_COLOR: Rgb = Rgb::new(0xff, 0xa5, 0x00);

/// Text color for an attribute band. Medium and unknown use the default.
pub fn band_color(category: Option<Category>) -> Rgb {
    match category {
        Some(Category::Low) => LOW_COLOR,
        Some(Category::High) => HIGH_COLOR,
        Some(Category::Super) => SUPER_COLOR,
        Some(Category::God) => GOD_COLOR,
        Some(Category::Medium) | None => DEFAULT_COLOR,
    }
}

/// Tab a record is listed under. Unknown sizes fall back to small.
pub fn display_group(cricket: &Cricket) -> SizeClass {
    cricket.size_class().unwrap_or(SizeClass::Small)
}

/// One `name: value` label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeCell {
    pub text: String,
    pub band: Option<Category>,
    pub color: Rgb,
}

/// One line of a size tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    /// The record itself, handed back by the row's edit action
    pub cricket: Cricket,
    pub level_label: String,
    pub attributes: Vec<AttributeCell>,
}

impl RecordRow {
    /// Cell colors follow the band [`classify_value`] finds, so off-table
    /// ranges such as "2-4" are colored too.
    pub fn from_cricket(cricket: &Cricket) -> Self {
        let attributes = cricket
            .ordered_attributes()
            .into_iter()
            .map(|(name, value)| {
                let band = classify_value(value);
                AttributeCell {
                    text: format!("{}: {}", name, value),
                    band,
                    color: band_color(band),
                }
            })
            .collect();

        RecordRow {
            cricket: cricket.clone(),
            level_label: format!("Level: {}", cricket.level),
            attributes,
        }
    }

    pub fn name(&self) -> &str {
        &self.cricket.name
    }
}

/// Rows for all three tabs, each in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeGroups {
    pub small: Vec<RecordRow>,
    pub medium: Vec<RecordRow>,
    pub large: Vec<RecordRow>,
}

impl SizeGroups {
    pub fn get(&self, size: SizeClass) -> &[RecordRow] {
        match size {
            SizeClass::Small => &self.small,
            SizeClass::Medium => &self.medium,
            SizeClass::Large => &self.large,
        }
    }

    fn get_mut(&mut self, size: SizeClass) -> &mut Vec<RecordRow> {
        match size {
            SizeClass::Small => &mut self.small,
            SizeClass::Medium => &mut self.medium,
            SizeClass::Large => &mut self.large,
        }
    }

    pub fn total(&self) -> usize {
        self.small.len() + self.medium.len() + self.large.len()
    }
}

/// Partition the catalog into the three size tabs.
pub fn render_groups(crickets: &[Cricket]) -> SizeGroups {
    let mut groups = SizeGroups::default();
    for cricket in crickets {
        groups
            .get_mut(display_group(cricket))
            .push(RecordRow::from_cricket(cricket));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Attribute;

    #[test]
    fn test_band_colors() {
        assert_eq!(band_color(Some(Category::Low)), Rgb::new(0x87, 0x00, 0x07));
        assert_eq!(band_color(Some(Category::Medium)), Rgb::new(0x00, 0x00, 0x00));
        assert_eq!(band_color(Some(Category::High)), Rgb::new(0x00, 0x80, 0x00));
        assert_eq!(band_color(Some(Category::Super)), Rgb::new(0x11, 0xc6, 0xf9));
        assert_eq!(band_color(Some(Category::God)), Rgb::new(0xff, 0xa5, 0x00));
        assert_eq!(band_color(None), DEFAULT_COLOR);
    }

    #[test]
    fn test_off_table_ranges_take_their_band_color() {
        let cricket = Cricket::new("A", "", "", "小")
            .with_attribute(Attribute::Attack, "2-4")
            .with_attribute(Attribute::Defense, "10-12")
            .with_attribute(Attribute::Spirit, "12");
        let row = RecordRow::from_cricket(&cricket);

        assert_eq!(row.attributes[0].band, Some(Category::Low));
        assert_eq!(row.attributes[0].color, LOW_COLOR);
        assert_eq!(row.attributes[1].band, Some(Category::Super));
        assert_eq!(row.attributes[1].color, SUPER_COLOR);
        assert_eq!(row.attributes[2].band, None);
        assert_eq!(row.attributes[2].color, DEFAULT_COLOR);
    }

    #[test]
    fn test_unknown_size_goes_to_small() {
        let crickets = vec![
            Cricket::new("big", "", "", "大"),
            Cricket::new("odd", "", "", "extra-large"),
            Cricket::new("tiny", "", "", "小"),
        ];
        let groups = render_groups(&crickets);

        let small: Vec<_> = groups.small.iter().map(RecordRow::name).collect();
        assert_eq!(small, vec!["odd", "tiny"]);
        assert_eq!(groups.large.len(), 1);
        assert!(groups.medium.is_empty());
        assert_eq!(groups.total(), 3);
    }

    #[test]
    fn test_medium_record_row() {
        let cricket = Cricket::new("A", "B", "5", "中")
            .with_attribute(Attribute::Attack, "7-9")
            .with_attribute(Attribute::Defense, "2")
            .with_attribute(Attribute::Speed, "custom");
        let groups = render_groups(&[cricket]);

        assert!(groups.get(SizeClass::Small).is_empty());
        assert!(groups.get(SizeClass::Large).is_empty());
        let rows = groups.get(SizeClass::Medium);
        assert_eq!(rows.len(), 1);

        let row = &rows[0];
        assert_eq!(row.name(), "A");
        assert_eq!(row.level_label, "Level: 5");
        assert_eq!(row.attributes[0].text, "攻击: 7-9");
        assert_eq!(row.attributes[0].band, Some(Category::High));
        assert_eq!(row.attributes[0].color, HIGH_COLOR);
        assert_eq!(row.attributes[1].color, LOW_COLOR);
        assert_eq!(row.attributes[2].text, "攻速: custom");
        assert_eq!(row.attributes[2].color, DEFAULT_COLOR);
    }

    #[test]
    fn test_groups_keep_catalog_order() {
        let crickets: Vec<_> = ["c", "a", "b"]
            .iter()
            .map(|n| Cricket::new(*n, "", "", "中"))
            .collect();
        let groups = render_groups(&crickets);
        let names: Vec<_> = groups.medium.iter().map(RecordRow::name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
