//! Plain-text rendering of the chest screen.

use chestgrid_inventory::{InventoryState, Section, SectionName};

/// Render one section as a grid, one line per row.
///
/// Cells are left-aligned to the widest label in the section so columns line up.
pub fn render_section(section: &Section, empty_glyph: &str) -> String {
    let shape = section.shape();
    let width = section
        .iter()
        .map(|view| view.occupant.map_or(empty_glyph.len(), |item| item.as_str().len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{} ({}x{})\n",
        section.name(),
        shape.rows,
        shape.columns
    ));
    let cells: Vec<&str> = section
        .iter()
        .map(|view| view.occupant.map_or(empty_glyph, |item| item.as_str()))
        .collect();
    for row in cells.chunks(usize::from(shape.columns)) {
        let line = row
            .iter()
            .map(|cell| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render the requested sections, separated by blank lines.
pub fn render_state(state: &InventoryState, sections: &[SectionName], empty_glyph: &str) -> String {
    sections
        .iter()
        .map(|&name| render_section(state.section(name), empty_glyph))
        .collect::<Vec<_>>()
        .join("\n")
}
