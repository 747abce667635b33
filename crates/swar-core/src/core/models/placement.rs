use super::node::NodeName;
use crate::core::utils::geometry::{distance, norm, sample_unit_disk};
use itertools::Itertools;
use nalgebra::{Point2, Vector2};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

/// Distance between the points of two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDistance<'a> {
    pub u: &'a NodeName,
    pub v: &'a NodeName,
    pub distance: f64,
}

/// Assignment of one 2-D point to every node of a graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Placement {
    points: BTreeMap<NodeName, Point2<f64>>,
}

impl Placement {
    /// Samples an independent point inside the unit disk for each node.
    ///
    /// The generator is owned by the caller, so equal seeds and equal node sets produce
    /// equal placements.
    pub fn random<'a>(nodes: impl IntoIterator<Item = &'a NodeName>, rng: &mut impl Rng) -> Self {
        let points = nodes
            .into_iter()
            .map(|node| (node.clone(), sample_unit_disk(rng)))
            .collect();
        Self { points }
    }

    pub fn location_of(&self, node: &NodeName) -> Option<Point2<f64>> {
        self.points.get(node).copied()
    }

    pub fn contains(&self, node: &NodeName) -> bool {
        self.points.contains_key(node)
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NodeName> {
        self.points.keys()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&NodeName, &Point2<f64>)> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Every unordered pair of distinct nodes, in sorted order.
    pub fn node_pairs(&self) -> impl Iterator<Item = (&NodeName, &NodeName)> {
        self.points.keys().tuple_combinations()
    }

    /// Recomputes the distance of every unordered node pair.
    pub fn distance_table(&self) -> Vec<PairDistance<'_>> {
        self.node_pairs()
            .map(|(u, v)| PairDistance {
                u,
                v,
                distance: distance(&self.points[u], &self.points[v]),
            })
            .collect()
    }

    pub fn centroid(&self) -> Option<Point2<f64>> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .values()
            .fold(Vector2::zeros(), |acc, p| acc + p.coords);
        Some(Point2::from(sum / self.points.len() as f64))
    }

    /// Recenters the points on their centroid and scales them so the farthest point lies on
    /// the unit circle.
    ///
    /// With no nodes, or when every point coincides with the centroid, nothing is changed.
    pub fn normalize(&mut self) {
        let Some(centroid) = self.centroid() else {
            debug!("Skipping normalization of an empty placement.");
            return;
        };
        let scale = self
            .points
            .values()
            .map(|p| norm(&(p - centroid)))
            .fold(0.0, f64::max);
        if scale <= 0.0 {
            debug!("Skipping normalization: all points coincide with the centroid.");
            return;
        }
        for point in self.points.values_mut() {
            *point = Point2::from((*point - centroid) / scale);
        }
    }

    /// Returns the mirror image across the vertical axis.
    pub fn mirror(&self) -> Self {
        let points = self
            .points
            .iter()
            .map(|(node, p)| (node.clone(), Point2::new(-p.x, p.y)))
            .collect();
        Self { points }
    }
}

impl FromIterator<(NodeName, Point2<f64>)> for Placement {
    fn from_iter<I: IntoIterator<Item = (NodeName, Point2<f64>)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
