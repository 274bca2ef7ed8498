//! Proximity links between placed motifs
//!
//! Every unordered pair of motifs whose centers are closer than a multiple of their
//! combined base radii gets exactly one connector. The scan is a full pairwise pass,
//! which is cheap for the few dozen motifs a layout holds.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::color::PaletteRegistry;
use crate::math::sampling::RandomSelector;
use crate::spatial::{Connector, Motif};

/// Symmetric matrix of center distances between motifs
pub fn distance_matrix(motifs: &[Motif]) -> Array2<f64> {
    let n = motifs.len();
    let mut distances = Array2::zeros((n, n));
    for (i, a) in motifs.iter().enumerate() {
        for (j, b) in motifs.iter().enumerate().skip(i + 1) {
            let d = a.position().distance(b.position());
            if let Some(cell) = distances.get_mut([i, j]) {
                *cell = d;
            }
            if let Some(cell) = distances.get_mut([j, i]) {
                *cell = d;
            }
        }
    }
    distances
}

/// Index pairs `(i, j)` with `i < j` that qualify for a connector, in lexicographic order
pub fn linked_pairs(motifs: &[Motif], link_distance_factor: f64) -> Vec<(usize, usize)> {
    let distances = distance_matrix(motifs);
    let mut pairs = Vec::new();
    for (i, a) in motifs.iter().enumerate() {
        for (j, b) in motifs.iter().enumerate().skip(i + 1) {
            let Some(&d) = distances.get([i, j]) else {
                continue;
            };
            if d < (a.base_radius() + b.base_radius()) * link_distance_factor {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Build one connector per qualifying pair, colored by a random palette's dominant color
pub fn build_connectors(
    motifs: &[Motif],
    link_distance_factor: f64,
    registry: &PaletteRegistry,
    selector: &mut RandomSelector,
) -> Vec<Connector> {
    linked_pairs(motifs, link_distance_factor)
        .into_iter()
        .filter_map(|(i, j)| {
            let from = motifs.get(i)?;
            let to = motifs.get(j)?;
            Some(Connector::between(
                i,
                from,
                j,
                to,
                registry.random_dominant(selector),
            ))
        })
        .collect()
}

/// Undirected adjacency over the motifs of one layout
///
/// Stored as a dense bit matrix; the diagonal is never set.
#[derive(Clone, Debug)]
pub struct LinkGraph {
    adjacency: BitVec,
    size: usize,
    edge_count: usize,
}

impl LinkGraph {
    /// Build the graph for `size` motifs from index pairs
    ///
    /// Self-pairs, out-of-range indices and duplicates are ignored.
    pub fn from_pairs(size: usize, pairs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self {
            adjacency: bitvec![0; size * size],
            size,
            edge_count: 0,
        };
        for (a, b) in pairs {
            if a == b || a >= size || b >= size || graph.are_linked(a, b) {
                continue;
            }
            graph.adjacency.set(a * size + b, true);
            graph.adjacency.set(b * size + a, true);
            graph.edge_count += 1;
        }
        graph
    }

    /// Build the graph described by a connector set
    pub fn from_connectors(size: usize, connectors: &[Connector]) -> Self {
        Self::from_pairs(size, connectors.iter().map(Connector::endpoints))
    }

    /// Number of motifs covered by the graph
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the graph covers no motifs
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of undirected links
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether motifs `a` and `b` are linked
    pub fn are_linked(&self, a: usize, b: usize) -> bool {
        if a >= self.size || b >= self.size {
            return false;
        }
        self.adjacency.get(a * self.size + b).as_deref() == Some(&true)
    }

    /// Indices linked to motif `index`, ascending
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        if index >= self.size {
            return Vec::new();
        }
        let row = index * self.size;
        self.adjacency
            .get(row..row + self.size)
            .map(|bits| bits.iter_ones().collect())
            .unwrap_or_default()
    }

    /// Number of links touching motif `index`
    pub fn degree(&self, index: usize) -> usize {
        self.neighbors(index).len()
    }

    /// Motifs without any link
    pub fn isolated_count(&self) -> usize {
        (0..self.size).filter(|&i| self.degree(i) == 0).count()
    }
}
