//! Narrow-phase tests for each shape-type pair.
//!
//! Circle-circle is a radial distance check. Polygon-polygon uses the
//! separating axis theorem with reference/incident edge clipping and can
//! produce up to two contact points. Polygon-circle searches for the edge
//! facing the circle center and classifies the center against the edge
//! span (corner regions vs the edge itself).

use crate::collision::contact::Contact;
use crate::math::Vec2;
use crate::objects::Body;
use crate::shapes::Polygon;

/// Checks two bodies for collision, dispatching on their shape types.
/// Produced contacts are always oriented to the caller's argument order:
/// `a`/`b` indices match `a_index`/`b_index` and the normal points from
/// the first argument toward the second.
pub fn check_collision(a: &Body, a_index: usize, b: &Body, b_index: usize) -> Vec<Contact> {
    match (a.shape.is_circle(), b.shape.is_circle()) {
        (true, true) => check_circle_circle(a, a_index, b, b_index)
            .into_iter()
            .collect(),
        (false, false) => check_polygon_polygon(a, a_index, b, b_index),
        (false, true) => check_polygon_circle(a, a_index, b, b_index)
            .into_iter()
            .collect(),
        (true, false) => check_polygon_circle(b, b_index, a, a_index)
            .map(|c| Contact {
                a: a_index,
                b: b_index,
                start: c.end,
                end: c.start,
                normal: -c.normal,
                depth: c.depth,
            })
            .into_iter()
            .collect(),
    }
}

/// Circle-vs-circle. Touching circles (distance equal to the radius sum)
/// count as colliding.
pub fn check_circle_circle(a: &Body, a_index: usize, b: &Body, b_index: usize) -> Option<Contact> {
    let (ca, cb) = (a.shape.circle()?, b.shape.circle()?);

    let ab = b.position - a.position;
    let radius_sum = ca.radius + cb.radius;
    if ab.magnitude_squared() > radius_sum * radius_sum {
        return None;
    }

    let normal = ab.normalize();
    let start = b.position - normal * cb.radius;
    let end = a.position + normal * ca.radius;

    Some(Contact {
        a: a_index,
        b: b_index,
        start,
        end,
        normal,
        depth: (end - start).magnitude(),
    })
}

/// Polygon-vs-polygon via SAT. If no separating axis exists, clips the
/// incident edge against the reference polygon's side planes and emits a
/// contact for every clipped point behind the reference face.
pub fn check_polygon_polygon(a: &Body, a_index: usize, b: &Body, b_index: usize) -> Vec<Contact> {
    let (Some(pa), Some(pb)) = (a.shape.polygon(), b.shape.polygon()) else {
        return Vec::new();
    };

    let (ab_separation, a_ref_index, _) = pa.find_min_separation(pb);
    if ab_separation >= 0.0 {
        return Vec::new();
    }
    let (ba_separation, b_ref_index, _) = pb.find_min_separation(pa);
    if ba_separation >= 0.0 {
        return Vec::new();
    }

    // The less negative separation picks the reference polygon. On a tie
    // B is the reference.
    let (reference, incident, ref_index, flipped) = if ab_separation > ba_separation {
        (pa, pb, a_ref_index, false)
    } else {
        (pb, pa, b_ref_index, true)
    };

    let ref_normal = reference.edge_at(ref_index).right_unit_normal();

    let incident_index = incident.find_incident_edge(ref_normal);
    let mut contact_points = vec![
        incident.world_vertices[incident_index],
        incident.world_vertex_after(incident_index),
    ];

    for i in 0..reference.vertex_count() {
        if i == ref_index {
            continue;
        }
        let c0 = reference.world_vertices[i];
        let c1 = reference.world_vertex_after(i);
        let clipped = clip_segment_to_line(&contact_points, c0, c1);
        // Degenerate clip: the incident edge fell entirely outside one of
        // the reference side planes, so there is no contact manifold
        if clipped.len() < 2 {
            return Vec::new();
        }
        contact_points = clipped;
    }

    let ref_vertex = reference.world_vertices[ref_index];
    let mut contacts = Vec::new();
    for &point in &contact_points {
        let separation = (point - ref_vertex).dot(ref_normal);
        if separation > 0.0 {
            continue;
        }
        let depth = -separation;
        let mut contact = Contact {
            a: a_index,
            b: b_index,
            start: point,
            end: point + ref_normal * depth,
            normal: ref_normal,
            depth,
        };
        if flipped {
            std::mem::swap(&mut contact.start, &mut contact.end);
            contact.normal = -contact.normal;
        }
        contacts.push(contact);
    }
    contacts
}

/// The polygon edge most facing a given point, found by projecting the
/// point onto each edge's outward normal. The search stops at the first
/// strictly positive projection; if none exists the point is inside the
/// polygon and the edge with the largest (least negative) projection is
/// kept instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FacingEdge {
    pub start: Vec2,
    pub end: Vec2,
    /// Signed distance from the point to the edge line, along the outward
    /// normal. Negative when the point is behind the edge.
    pub separation: f64,
    /// False when the point is inside the polygon.
    pub outside: bool,
}

pub(crate) fn find_facing_edge(polygon: &Polygon, point: Vec2) -> FacingEdge {
    let n = polygon.vertex_count();
    let mut best = FacingEdge {
        start: Vec2::ZERO,
        end: Vec2::ZERO,
        separation: f64::MIN,
        outside: false,
    };

    for i in 0..n {
        let normal = polygon.edge_at(i).right_unit_normal();
        let projection = (point - polygon.world_vertices[i]).dot(normal);

        if projection > 0.0 {
            return FacingEdge {
                start: polygon.world_vertices[i],
                end: polygon.world_vertex_after(i),
                separation: projection,
                outside: true,
            };
        }
        if projection > best.separation {
            best.start = polygon.world_vertices[i];
            best.end = polygon.world_vertex_after(i);
            best.separation = projection;
        }
    }
    best
}

/// Where a circle center falls relative to a facing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleRegion {
    /// Past the edge's start vertex; the nearest feature is that vertex.
    BeyondStart,
    /// Past the edge's end vertex; the nearest feature is that vertex.
    BeyondEnd,
    /// Within the edge span; the nearest feature is the edge itself.
    EdgeSpan,
}

pub(crate) fn classify_circle_region(edge: &FacingEdge, center: Vec2) -> CircleRegion {
    if (center - edge.start).dot(edge.end - edge.start) < 0.0 {
        CircleRegion::BeyondStart
    } else if (center - edge.end).dot(edge.start - edge.end) < 0.0 {
        CircleRegion::BeyondEnd
    } else {
        CircleRegion::EdgeSpan
    }
}

/// Polygon-vs-circle. The produced contact has the polygon as A and the
/// circle as B; `check_collision` flips it when the caller passed the
/// circle first.
pub fn check_polygon_circle(
    polygon: &Body,
    polygon_index: usize,
    circle: &Body,
    circle_index: usize,
) -> Option<Contact> {
    let poly = polygon.shape.polygon()?;
    let radius = circle.shape.circle()?.radius;
    let center = circle.position;

    let edge = find_facing_edge(poly, center);

    let make_contact = |normal: Vec2, depth: f64| {
        let start = center - normal * radius;
        Contact {
            a: polygon_index,
            b: circle_index,
            start,
            end: start + normal * depth,
            normal,
            depth,
        }
    };

    let corner_contact = |vertex: Vec2| {
        let to_center = center - vertex;
        let distance = to_center.magnitude();
        if distance > radius {
            None
        } else {
            Some(make_contact(to_center.normalize(), radius - distance))
        }
    };

    if edge.outside {
        match classify_circle_region(&edge, center) {
            CircleRegion::BeyondStart => corner_contact(edge.start),
            CircleRegion::BeyondEnd => corner_contact(edge.end),
            CircleRegion::EdgeSpan => {
                if edge.separation > radius {
                    None
                } else {
                    let normal = (edge.end - edge.start).right_unit_normal();
                    Some(make_contact(normal, radius - edge.separation))
                }
            }
        }
    } else {
        // Center inside the polygon: always a hit, resolved along the
        // least-penetrated edge's normal.
        let normal = (edge.end - edge.start).right_unit_normal();
        Some(make_contact(normal, radius - edge.separation))
    }
}

fn clip_segment_to_line(points: &[Vec2], c0: Vec2, c1: Vec2) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(2);
    let normal = (c1 - c0).normalize();

    let dist0 = (points[0] - c0).cross(normal);
    let dist1 = (points[1] - c0).cross(normal);

    if dist0 <= 0.0 {
        out.push(points[0]);
    }
    if dist1 <= 0.0 {
        out.push(points[1]);
    }
    // The segment straddles the line: add the intersection point
    if dist0 * dist1 < 0.0 {
        let t = dist0 / (dist0 - dist1);
        out.push(points[0] + (points[1] - points[0]) * t);
    }
    out
}
