//! Plain-text rendering of results, the shape menu and the formula table.

use std::fmt::Write;

use solidcalc::{formula, formulas, ShapeKind, Slant, Solid};

/// `" cm³"` style suffix for a unit raised to `power`, or nothing for an
/// empty unit.
fn unit_suffix(unit: &str, power: u32) -> String {
    let sup = match power {
        2 => "²",
        3 => "³",
        _ => "",
    };
    if unit.is_empty() {
        String::new()
    } else {
        format!(" {unit}{sup}")
    }
}

/// Describe the shape and its lengths, e.g. `cone (radius = 4, height = 6)`.
pub fn describe(solid: &Solid) -> String {
    let dims: Vec<String> = solid
        .parameters()
        .dimensions()
        .into_iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect();
    format!("{} ({})", solid.kind(), dims.join(", "))
}

/// Multi-line result block with values rounded to `precision` places.
pub fn report(solid: &Solid, precision: usize, unit: &str) -> String {
    let m = solid.metrics();
    let linear = unit_suffix(unit, 1);
    let mut out = String::new();

    let _ = writeln!(out, "{}", describe(solid));
    let _ = writeln!(out, "Volume: {:.precision$}{}", m.volume, unit_suffix(unit, 3));
    let _ = writeln!(
        out,
        "Surface area: {:.precision$}{}",
        m.surface_area,
        unit_suffix(unit, 2)
    );
    match m.slant {
        Some(Slant::Cone { slant }) => {
            let _ = writeln!(out, "Slant height: {slant:.precision$}{linear}");
        }
        Some(Slant::Pyramid {
            over_width_faces,
            over_length_faces,
        }) => {
            let _ = writeln!(
                out,
                "Slant height (length faces): {over_length_faces:.precision$}{linear}"
            );
            let _ = writeln!(
                out,
                "Slant height (width faces): {over_width_faces:.precision$}{linear}"
            );
        }
        None => {}
    }
    out
}

/// Numbered shape menu with each shape's parameters.
pub fn shape_menu() -> String {
    let mut out = String::new();
    for (i, kind) in ShapeKind::ALL.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}) {} ({})",
            i + 1,
            kind,
            kind.parameter_names().join(", ")
        );
    }
    out
}

/// Aligned formula table for one shape, or for every shape.
pub fn formula_table(shape: Option<ShapeKind>) -> String {
    let selected = match shape {
        Some(kind) => std::slice::from_ref(formula(kind)),
        None => formulas(),
    };
    let rows: Vec<[String; 3]> = selected
        .iter()
        .map(|f| [f.kind.to_string(), f.volume.to_string(), f.surface_area.to_string()])
        .collect();
    let header = ["Shape", "Volume", "Surface area"];

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<w0$}  {:<w1$}  {}",
        header[0],
        header[1],
        header[2],
        w0 = widths[0],
        w1 = widths[1]
    );
    let _ = writeln!(
        out,
        "{}  {}  {}",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    );
    for (row, f) in rows.iter().zip(selected) {
        let _ = writeln!(
            out,
            "{:<w0$}  {:<w1$}  {}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1]
        );
        if let Some(note) = f.note {
            let _ = writeln!(out, "{:<w0$}  {}", "", note, w0 = widths[0]);
        }
    }
    out
}
