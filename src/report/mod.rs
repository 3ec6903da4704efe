// ==========================================
// Spool Winding Production System - Report Layer
// ==========================================
// Table model handed to the renderer, plus the fixed-layout
// image renderer. Layout only, no business logic.
// ==========================================

pub mod renderer;

use crate::domain::report::{ZoneQualityComparison, ZoneSupervisorReport};

pub use renderer::{RenderError, ReportRenderer, SvgTableRenderer};

// ==========================================
// ReportTable - stringified table for rendering
// ==========================================
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Format a quality value the way the form shows it
/// (whole counts without a decimal tail)
fn fmt_quality(q: f64) -> String {
    if q.fract() == 0.0 {
        format!("{q:.0}")
    } else {
        format!("{q}")
    }
}

impl ReportTable {
    /// Report 1 layout: zone & quality weekly comparison
    pub fn zone_quality(rows: &[ZoneQualityComparison]) -> Self {
        Self {
            columns: [
                "Zone",
                "Quality",
                "Kg Frame",
                "Kg Winder",
                "Prev Kg Frame",
                "Prev Kg Winder",
                "Diff Kg/Frame",
                "Diff Kg/Winder",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            rows: rows
                .iter()
                .map(|r| {
                    vec![
                        r.zone.to_string(),
                        fmt_quality(r.quality),
                        format!("{:.2}", r.kg_frame),
                        format!("{:.2}", r.kg_winder),
                        format!("{:.2}", r.prev_kg_frame),
                        format!("{:.2}", r.prev_kg_winder),
                        format!("{:.2}", r.diff_kg_frame),
                        format!("{:.2}", r.diff_kg_winder),
                    ]
                })
                .collect(),
        }
    }

    /// Report 2 layout: zone-wise supervisor performance
    pub fn zone_supervisor(rows: &[ZoneSupervisorReport]) -> Self {
        Self {
            columns: [
                "Zone",
                "Supervisor Name",
                "Quality",
                "Machines",
                "Kg Frame",
                "Kg Winder",
                "Difference",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            rows: rows
                .iter()
                .map(|r| {
                    vec![
                        r.zone.to_string(),
                        r.supervisor_name.clone(),
                        fmt_quality(r.quality),
                        r.machines.to_string(),
                        format!("{:.2}", r.kg_frame),
                        format!("{:.2}", r.kg_winder),
                        r.difference.to_string(),
                    ]
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Zone;

    #[test]
    fn test_fmt_quality() {
        assert_eq!(fmt_quality(40.0), "40");
        assert_eq!(fmt_quality(40.5), "40.5");
    }

    #[test]
    fn test_zone_quality_table_shape() {
        let table = ReportTable::zone_quality(&[ZoneQualityComparison {
            zone: Zone::Red,
            quality: 40.0,
            kg_frame: 52.0,
            kg_winder: 104.0,
            prev_kg_frame: 0.0,
            prev_kg_winder: 0.0,
            diff_kg_frame: 52.0,
            diff_kg_winder: 104.0,
        }]);
        assert_eq!(table.columns.len(), 8);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][0], "Red");
        assert_eq!(table.rows[0][2], "52.00");
    }
}
