mod geometry;
mod motif;
