//! Penteract (5D hypercube) geometry
//!
//! A penteract has 32 vertices (all combinations of ±1 for x,y,z,w,v)
//! and 80 edges joining vertices that differ in exactly one coordinate.
//! Only topology lives here; rotation and projection produce new points
//! every frame and never touch these vertices.

use crate::Vec5;

/// Number of vertices of the 5-cube
pub const VERTEX_COUNT: usize = 32;

/// Number of edges of the 5-cube
pub const EDGE_COUNT: usize = 80;

/// An unordered pair of vertex indices, stored with `a < b`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge, normalizing index order
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i <= j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }
}

/// Generate all 32 corners of {−1, +1}^5
///
/// Enumeration is nested with the x axis outermost and the v axis innermost,
/// so vertex `i` has coordinate `k` set to +1 when bit `4 - k` of `i` is set.
pub fn generate_vertices() -> Vec<Vec5> {
    (0..VERTEX_COUNT)
        .map(|i| {
            let mut p = Vec5::ZERO;
            for axis in 0..Vec5::DIM {
                p[axis] = if (i >> (Vec5::DIM - 1 - axis)) & 1 == 1 { 1.0 } else { -1.0 };
            }
            p
        })
        .collect()
}

/// Connect every pair of vertices at Hamming distance exactly 1
///
/// Pairs are visited as (i, j) with i < j, so each edge appears once.
pub fn generate_edges(vertices: &[Vec5]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(EDGE_COUNT);
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if vertices[i].hamming_distance(vertices[j]) == 1 {
                edges.push(Edge::new(i, j));
            }
        }
    }
    edges
}

/// A penteract - vertices and edges, immutable after construction
#[derive(Clone, Debug)]
pub struct Penteract5D {
    vertices: Vec<Vec5>,
    edges: Vec<Edge>,
}

impl Penteract5D {
    /// Build the unit penteract (coordinates ±1)
    pub fn new() -> Self {
        let vertices = generate_vertices();
        let edges = generate_edges(&vertices);
        Self { vertices, edges }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec5] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for Penteract5D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_count_and_distinct() {
        let verts = generate_vertices();
        assert_eq!(verts.len(), 32);

        let unique: HashSet<[i32; 5]> = verts
            .iter()
            .map(|v| {
                let a = v.to_array();
                [a[0] as i32, a[1] as i32, a[2] as i32, a[3] as i32, a[4] as i32]
            })
            .collect();
        assert_eq!(unique.len(), 32);
    }

    #[test]
    fn test_vertex_coordinates_are_unit_signs() {
        for v in generate_vertices() {
            for c in v.to_array() {
                assert!(c == 1.0 || c == -1.0, "coordinate {} not ±1", c);
            }
        }
    }

    #[test]
    fn test_enumeration_order() {
        let verts = generate_vertices();
        assert_eq!(verts[0], Vec5::new(-1.0, -1.0, -1.0, -1.0, -1.0));
        // innermost axis (v) flips first
        assert_eq!(verts[1], Vec5::new(-1.0, -1.0, -1.0, -1.0, 1.0));
        // outermost axis (x) flips last
        assert_eq!(verts[16], Vec5::new(1.0, -1.0, -1.0, -1.0, -1.0));
        assert_eq!(verts[31], Vec5::new(1.0, 1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_edge_count() {
        let p = Penteract5D::new();
        assert_eq!(p.edge_count(), 80);
    }

    #[test]
    fn test_edges_join_neighbours_only() {
        let p = Penteract5D::new();
        for e in p.edges() {
            assert_ne!(e.a, e.b);
            assert!(e.a < e.b);
            assert_eq!(p.vertices()[e.a].hamming_distance(p.vertices()[e.b]), 1);
        }
    }

    #[test]
    fn test_no_duplicate_edges() {
        let p = Penteract5D::new();
        let unique: HashSet<Edge> = p.edges().iter().copied().collect();
        assert_eq!(unique.len(), p.edge_count());
    }

    #[test]
    fn test_every_vertex_has_degree_five() {
        let p = Penteract5D::new();
        let mut degree = [0usize; VERTEX_COUNT];
        for e in p.edges() {
            degree[e.a] += 1;
            degree[e.b] += 1;
        }
        assert!(degree.iter().all(|&d| d == 5));
    }

    #[test]
    fn test_edge_new_normalizes() {
        assert_eq!(Edge::new(7, 3), Edge { a: 3, b: 7 });
    }
}
