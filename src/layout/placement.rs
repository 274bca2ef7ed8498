//! Rejection-sampling placement of motifs
//!
//! Candidates are drawn uniformly inside the canvas and accepted only when they do
//! not overlap an accepted motif by more than a fraction of the smaller radius, and
//! (after the first motif) when they sit near at least one accepted motif. The
//! proximity rule discards far-away candidates even when they fit, so the result
//! forms clusters separated by open space rather than an even scatter.

use crate::color::{PaletteId, PaletteRegistry};
use crate::layout::settings::LayoutSettings;
use crate::math::sampling::RandomSelector;
use crate::spatial::{CanvasSize, Motif, Point};

/// How a candidate circle relates to the motifs accepted so far
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateVerdict {
    /// No severe overlap and near an accepted motif (or the first motif)
    Accepted,
    /// Overlaps an accepted motif by more than the allowed fraction
    Overlapping,
    /// Fits, but lies far from every accepted motif
    Isolated,
}

/// Motifs accepted by one placement run
#[derive(Clone, Debug)]
pub struct PlacementOutcome {
    /// Accepted motifs in acceptance order
    pub motifs: Vec<Motif>,
    /// Candidate draws consumed, accepted or not
    pub attempts_used: usize,
}

impl PlacementOutcome {
    /// How many motifs short of `target` the run stopped
    pub fn shortfall(&self, target: usize) -> usize {
        target.saturating_sub(self.motifs.len())
    }
}

/// Judge a candidate against the accepted motifs using their base radii
pub fn evaluate_candidate(
    center: Point,
    radius: f64,
    accepted: &[Motif],
    settings: &LayoutSettings,
) -> CandidateVerdict {
    if accepted.is_empty() {
        return CandidateVerdict::Accepted;
    }

    let mut has_nearby = false;
    for other in accepted {
        let distance = center.distance(other.position());
        let combined = radius + other.base_radius();
        let allowed_overlap = radius.min(other.base_radius()) * settings.overlap_factor;

        if distance < combined - allowed_overlap {
            return CandidateVerdict::Overlapping;
        }
        if distance < combined * settings.proximity_factor {
            has_nearby = true;
        }
    }

    if has_nearby {
        CandidateVerdict::Accepted
    } else {
        CandidateVerdict::Isolated
    }
}

/// Scatter up to `settings.motif_count` motifs across the canvas
///
/// Stops after `settings.max_attempts` draws even when fewer motifs were accepted;
/// a short result is a valid layout. A drawn radius too large for the canvas
/// consumes its attempt without producing a candidate.
pub fn place_motifs(
    canvas: CanvasSize,
    settings: &LayoutSettings,
    registry: &PaletteRegistry,
    selector: &mut RandomSelector,
) -> PlacementOutcome {
    let (min_radius, max_radius) = settings.radius_bounds(canvas);
    let mut motifs: Vec<Motif> = Vec::with_capacity(settings.motif_count);
    let mut previous_palette: Option<PaletteId> = None;
    let mut attempts_used = 0;

    while motifs.len() < settings.motif_count && attempts_used < settings.max_attempts {
        attempts_used += 1;

        let radius = selector.uniform(min_radius, max_radius);
        if !canvas.fits_radius(radius) {
            continue;
        }
        let center = Point::new(
            selector.uniform(radius, canvas.width_f64() - radius),
            selector.uniform(radius, canvas.height_f64() - radius),
        );

        if evaluate_candidate(center, radius, &motifs, settings) != CandidateVerdict::Accepted {
            continue;
        }

        let palette_id = registry.pick_after(previous_palette, selector);
        let Some(palette) = registry.get(palette_id).copied() else {
            continue;
        };
        let decoration_seed = selector.angle();

        motifs.push(Motif::new(
            center,
            radius,
            palette_id,
            palette,
            decoration_seed,
        ));
        previous_palette = Some(palette_id);
    }

    PlacementOutcome {
        motifs,
        attempts_used,
    }
}
