//! Step-by-step records of how a collision test reached its verdict.
//!
//! Each `narrate_*` function performs the same test as its counterpart in
//! [`detection`](crate::collision::detection) and returns an ordered list
//! of immutable records describing what was examined and what was
//! concluded. The records are purely observational; the final contact is
//! identical to what the plain function produces.

use crate::collision::contact::Contact;
use crate::collision::detection::{
    check_circle_circle, check_polygon_circle, classify_circle_region, find_facing_edge,
    CircleRegion,
};
use crate::math::Vec2;
use crate::objects::Body;

/// One step in a narrated collision test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionStep {
    /// Circle-circle: the radial distance test that decides everything.
    RadialDistanceTested {
        center_distance: f64,
        radius_sum: f64,
    },
    /// Polygon-circle: the edge chosen as facing the circle center.
    /// `separation` is the center's signed distance along the edge normal;
    /// `center_inside` means no edge had the center in front of it.
    FacingEdgeFound {
        edge_start: Vec2,
        edge_end: Vec2,
        separation: f64,
        center_inside: bool,
    },
    /// Polygon-circle: which feature of the facing edge is nearest.
    RegionClassified { region: CircleRegion },
    /// The test produced a contact.
    ContactFound { contact: Contact },
    /// The test concluded the shapes are separated.
    Separated,
}

/// Narrated circle-vs-circle test.
pub fn narrate_circle_circle(
    a: &Body,
    a_index: usize,
    b: &Body,
    b_index: usize,
) -> Vec<DetectionStep> {
    let mut steps = Vec::new();
    let (Some(ca), Some(cb)) = (a.shape.circle(), b.shape.circle()) else {
        return steps;
    };

    steps.push(DetectionStep::RadialDistanceTested {
        center_distance: (b.position - a.position).magnitude(),
        radius_sum: ca.radius + cb.radius,
    });

    match check_circle_circle(a, a_index, b, b_index) {
        Some(contact) => steps.push(DetectionStep::ContactFound { contact }),
        None => steps.push(DetectionStep::Separated),
    }
    steps
}

/// Narrated polygon-vs-circle test.
pub fn narrate_polygon_circle(
    polygon: &Body,
    polygon_index: usize,
    circle: &Body,
    circle_index: usize,
) -> Vec<DetectionStep> {
    let mut steps = Vec::new();
    let Some(poly) = polygon.shape.polygon() else {
        return steps;
    };
    if circle.shape.circle().is_none() {
        return steps;
    }

    let center = circle.position;
    let edge = find_facing_edge(poly, center);
    steps.push(DetectionStep::FacingEdgeFound {
        edge_start: edge.start,
        edge_end: edge.end,
        separation: edge.separation,
        center_inside: !edge.outside,
    });

    if edge.outside {
        steps.push(DetectionStep::RegionClassified {
            region: classify_circle_region(&edge, center),
        });
    }

    match check_polygon_circle(polygon, polygon_index, circle, circle_index) {
        Some(contact) => steps.push(DetectionStep::ContactFound { contact }),
        None => steps.push(DetectionStep::Separated),
    }
    steps
}
