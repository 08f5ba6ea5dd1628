//! Plain-text cut sheet generator.
//!
//! Three blocks: a summary of the plan metrics, a one-line-per-bar
//! breakdown, and numbered cutting instructions meant to be printed and
//! followed at the saw.

use std::fmt::Write;

use crate::model::{Bar, CuttingPlan};

/// Render a cutting plan as a printable cut sheet.
pub fn render_plan(plan: &CuttingPlan) -> String {
    let mut output = String::new();

    render_summary(&mut output, plan);

    if plan.bars.is_empty() {
        writeln!(output, "No pieces to cut.").unwrap();
        return output;
    }

    render_breakdown(&mut output, plan);
    render_instructions(&mut output, plan);

    output
}

/// Write the plan metrics block.
fn render_summary(output: &mut String, plan: &CuttingPlan) {
    writeln!(output, "Cutting plan summary").unwrap();
    writeln!(
        output,
        "  Bars required ({} cm): {}",
        plan.bar_length,
        plan.bar_count()
    )
    .unwrap();
    writeln!(output, "  Total waste: {} cm", plan.total_waste()).unwrap();
    writeln!(
        output,
        "  Material utilization: {:.1}%",
        plan.utilization_percent()
    )
    .unwrap();
    writeln!(output).unwrap();
}

/// Write the one-line-per-bar breakdown.
fn render_breakdown(output: &mut String, plan: &CuttingPlan) {
    for bar in &plan.bars {
        let pieces = bar
            .pieces
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        writeln!(
            output,
            "Bar #{}: {} | used {} cm, waste {} cm",
            bar.number,
            pieces,
            bar.used_length(),
            bar.waste()
        )
        .unwrap();
    }
    writeln!(output).unwrap();
}

/// Write the numbered per-bar cutting instructions.
fn render_instructions(output: &mut String, plan: &CuttingPlan) {
    writeln!(output, "Cutting instructions").unwrap();
    for bar in &plan.bars {
        render_bar_instructions(output, bar);
    }
}

fn render_bar_instructions(output: &mut String, bar: &Bar) {
    writeln!(
        output,
        "Bar #{} - take one {} cm bar and cut:",
        bar.number, bar.capacity
    )
    .unwrap();
    for (i, piece) in bar.pieces.iter().enumerate() {
        writeln!(
            output,
            "  {}. {} for opening {}: {} cm",
            i + 1,
            piece.role,
            piece.opening,
            piece.length
        )
        .unwrap();
    }
    writeln!(output, "  Leftover: {} cm", bar.waste()).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PieceRole, RequiredPiece};

    fn sample_plan() -> CuttingPlan {
        let mut bar = Bar::new(1, 600);
        bar.push(RequiredPiece::new(PieceRole::HeightLeft, 1, 150));
        bar.push(RequiredPiece::new(PieceRole::HeightRight, 1, 150));
        bar.push(RequiredPiece::new(PieceRole::WidthBottom, 1, 150));
        CuttingPlan {
            bars: vec![bar],
            bar_length: 600,
        }
    }

    #[test]
    fn test_summary_block() {
        let report = render_plan(&sample_plan());
        assert!(report.contains("Bars required (600 cm): 1"));
        assert!(report.contains("Total waste: 150 cm"));
        assert!(report.contains("Material utilization: 75.0%"));
    }

    #[test]
    fn test_breakdown_line() {
        let report = render_plan(&sample_plan());
        assert!(report.contains(
            "Bar #1: Left height opening 1 (150 cm) + Right height opening 1 (150 cm) \
             + Bottom width opening 1 (150 cm) | used 450 cm, waste 150 cm"
        ));
    }

    #[test]
    fn test_instructions_block() {
        let report = render_plan(&sample_plan());
        assert!(report.contains("Bar #1 - take one 600 cm bar and cut:"));
        assert!(report.contains("  1. Left height for opening 1: 150 cm"));
        assert!(report.contains("  3. Bottom width for opening 1: 150 cm"));
        assert!(report.contains("  Leftover: 150 cm"));
    }

    #[test]
    fn test_empty_plan_report() {
        let report = render_plan(&CuttingPlan::empty(600));
        assert!(report.contains("Bars required (600 cm): 0"));
        assert!(report.contains("Material utilization: 0.0%"));
        assert!(report.contains("No pieces to cut."));
        assert!(!report.contains("Cutting instructions"));
    }
}
