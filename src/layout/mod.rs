//! Layout generation and animation
//!
//! A layout generation is produced in two steps: the placement engine accepts motifs,
//! then the link graph builder derives connectors from them. Generations are
//! replaced as a whole on every (re)initialization.

/// Noise-driven radius animation
pub mod animation;
/// Proximity links between motifs
pub mod links;
/// Rejection-sampling motif placement
pub mod placement;
/// Layout and animation parameters
pub mod settings;

pub use settings::{AnimationSettings, LayoutSettings};

use crate::color::PaletteRegistry;
use crate::math::sampling::RandomSelector;
use crate::spatial::{CanvasSize, Connector, Motif};
use links::LinkGraph;
use log::debug;

/// One generation of motifs and the connectors between them
#[derive(Clone, Debug)]
pub struct Layout {
    /// Motifs in acceptance order
    pub motifs: Vec<Motif>,
    /// Connectors referencing motifs by index
    pub connectors: Vec<Connector>,
    /// Candidate draws the placement engine consumed
    pub attempts_used: usize,
}

impl Layout {
    /// Adjacency view over the connectors
    pub fn link_graph(&self) -> LinkGraph {
        LinkGraph::from_connectors(self.motifs.len(), &self.connectors)
    }

    /// The two motifs joined by a connector
    pub fn endpoints_of(&self, connector: &Connector) -> Option<(&Motif, &Motif)> {
        let (a, b) = connector.endpoints();
        Some((self.motifs.get(a)?, self.motifs.get(b)?))
    }
}

/// Place motifs on the canvas and link the close ones
///
/// Never fails: an exhausted attempt budget yields fewer motifs than requested.
pub fn initialize_layout(
    canvas: CanvasSize,
    settings: &LayoutSettings,
    registry: &PaletteRegistry,
    selector: &mut RandomSelector,
) -> Layout {
    let outcome = placement::place_motifs(canvas, settings, registry, selector);
    let shortfall = outcome.shortfall(settings.motif_count);
    if shortfall > 0 {
        debug!(
            "placement stopped {shortfall} motif(s) short after {} attempts on {canvas}",
            outcome.attempts_used
        );
    }

    let connectors = links::build_connectors(
        &outcome.motifs,
        settings.link_distance_factor,
        registry,
        selector,
    );

    let layout = Layout {
        motifs: outcome.motifs,
        connectors,
        attempts_used: outcome.attempts_used,
    };
    debug!(
        "layout {canvas}: {} motifs, {} connectors, {} isolated, {} attempts",
        layout.motifs.len(),
        layout.connectors.len(),
        layout.link_graph().isolated_count(),
        layout.attempts_used
    );
    layout
}
