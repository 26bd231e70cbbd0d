//! Pass 2: partnership centering.

use kindred_core::Relations;

use crate::{LayoutConfig, Placement};

/// Pulls each partnership together around its pass-1 average x, a
/// `partner_gap` apart, and redistributes the couple's common children
/// evenly under that average.
///
/// Pairs are processed in sorted id-pair order (each unordered pair exactly
/// once); the partner currently further left stays on the left.
pub fn center_partners(rel: &Relations, cfg: &LayoutConfig, placement: &mut Placement) {
    for (a, b) in rel.partner_pairs() {
        let avg = (placement.x[a] + placement.x[b]) / 2.0;
        let (left, right) = if placement.x[a] <= placement.x[b] {
            (a, b)
        } else {
            (b, a)
        };
        placement.x[left] = avg - cfg.partner_gap / 2.0;
        placement.x[right] = avg + cfg.partner_gap / 2.0;

        let mut kids = rel.common_children(a, b);
        if kids.is_empty() {
            continue;
        }
        kids.sort_by(|&p, &q| rel.id(p).cmp(rel.id(q)));
        let span = (kids.len() - 1) as f64 * cfg.sibling_spacing;
        for (i, &kid) in kids.iter().enumerate() {
            placement.x[kid] = avg - span / 2.0 + i as f64 * cfg.sibling_spacing;
        }
    }
}
