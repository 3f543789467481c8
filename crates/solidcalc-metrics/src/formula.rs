//! Human-readable formula table, one row per shape.

use crate::ShapeKind;

/// Text form of the volume and surface-area formulas for one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula {
    /// Shape the row describes.
    pub kind: ShapeKind,
    /// Volume formula.
    pub volume: &'static str,
    /// Surface-area formula.
    pub surface_area: &'static str,
    /// Extra remark, such as symbol definitions or known approximations.
    pub note: Option<&'static str>,
}

static FORMULAS: [Formula; 7] = [
    Formula {
        kind: ShapeKind::Cube,
        volume: "s³",
        surface_area: "6·s²",
        note: None,
    },
    Formula {
        kind: ShapeKind::Cuboid,
        volume: "p·l·t",
        surface_area: "2·(p·l + p·t + l·t)",
        note: None,
    },
    Formula {
        kind: ShapeKind::Sphere,
        volume: "(4/3)·π·r³",
        surface_area: "4·π·r²",
        note: None,
    },
    Formula {
        kind: ShapeKind::Cylinder,
        volume: "π·r²·t",
        surface_area: "2·π·r·(r + t)",
        note: None,
    },
    Formula {
        kind: ShapeKind::Cone,
        volume: "(1/3)·π·r²·t",
        surface_area: "π·r·(r + s)",
        note: Some("s = √(r² + t²)"),
    },
    Formula {
        kind: ShapeKind::Pyramid,
        volume: "(1/3)·p·l·t",
        surface_area: "p·l + p·s_w + l·s_p",
        note: Some("s_p = √((p/2)² + t²), s_w = √((l/2)² + t²)"),
    },
    Formula {
        kind: ShapeKind::TriangularPrism,
        volume: "(1/2)·a·h·L",
        surface_area: "a·h + 3·L·a",
        note: Some("approximation: side faces taken as a × L rectangles"),
    },
];

/// The formula table in [`ShapeKind::ALL`] order.
pub fn formulas() -> &'static [Formula] {
    &FORMULAS
}

/// Formula row for a single shape.
pub fn formula(kind: ShapeKind) -> &'static Formula {
    // FORMULAS is laid out in ShapeKind::ALL order.
    &FORMULAS[kind as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_shape_in_order() {
        let kinds: Vec<_> = formulas().iter().map(|f| f.kind).collect();
        assert_eq!(kinds, ShapeKind::ALL);
        for kind in ShapeKind::ALL {
            assert_eq!(formula(kind).kind, kind);
        }
    }

    #[test]
    fn test_prism_row_flags_approximation() {
        let row = formula(ShapeKind::TriangularPrism);
        assert!(row.note.is_some_and(|n| n.contains("approximation")));
    }
}
