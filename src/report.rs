//! Plain-text rendering of an [`EstimationResult`] for terminals and overlays.

use crate::geometry::round_half_up;
use crate::types::EstimationResult;

/// Candidates listed under "TOP CANDIDATES".
pub const LISTED_CANDIDATES: usize = 6;

const NO_CANDIDATES: &str = "No candidates found.\n\n\
Tips:\n\
- Check coordinates\n\
- Make sure positions are 50+ blocks apart\n\
- Verify pixel change value (usually 0.5-10)";

pub fn render_text(result: &EstimationResult) -> String {
    let Some(best) = result.best() else {
        return NO_CANDIDATES.to_string();
    };
    let mut out = format!(
        "=== STRONGHOLD RESULTS ===\n\n\
         METHOD: {}\n\n\
         BEST ESTIMATE:\n\
         Overworld: ({}, {})\n\
         Nether: ({}, {})\n\
         Probability: {}\n\
         Distance: {} blocks\n\n\
         TOP CANDIDATES:\n",
        result.method.label(),
        best.projection.0,
        best.projection.1,
        best.secondary.0,
        best.secondary.1,
        percent(best.conditional_probability),
        round_half_up(best.distance_from_anchor),
    );
    let listed: Vec<String> = result
        .candidates
        .iter()
        .take(LISTED_CANDIDATES)
        .enumerate()
        .map(|(i, c)| {
            format!(
                "{}. ({}, {}) {}\n   Nether: ({}, {})",
                i + 1,
                c.projection.0,
                c.projection.1,
                percent(c.conditional_probability),
                c.secondary.0,
                c.secondary.1
            )
        })
        .collect();
    out.push_str(&listed.join("\n\n"));
    out
}

fn percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}
