use std::f64::consts::PI;

/// Progress through the scrollable part of the document.
///
/// Not clamped: a viewport resize at the very bottom can push it past 1 for
/// a moment. A document that cannot scroll reports 0.
pub fn scroll_ratio(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    scroll_y / range
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub rotation_deg: f64,
    pub scale: f64,
}

impl CardTransform {
    pub fn css(&self) -> String {
        format!("rotate({}deg) scale({})", self.rotation_deg, self.scale)
    }
}

pub fn card_transform(ratio: f64, index: usize) -> CardTransform {
    CardTransform {
        rotation_deg: ratio * 360.0 * (index + 1) as f64,
        scale: 1.0 + (ratio * PI * 2.0).sin() * 0.1,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleOffset {
    pub x: f64,
    pub y: f64,
}

impl ParticleOffset {
    pub fn css(&self) -> String {
        format!("translateX({}px) translateY({}px)", self.x, self.y)
    }
}

/// Particles orbit on three different frequencies, picked by `index % 3`.
pub fn particle_transform(ratio: f64, index: usize) -> ParticleOffset {
    let phase = ratio * 100.0 * ((index % 3) + 1) as f64;
    ParticleOffset {
        x: phase.sin() * 50.0,
        y: phase.cos() * 30.0,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeTransform {
    pub translate_y: f64,
    pub rotation_deg: f64,
}

impl ShapeTransform {
    pub fn css(&self) -> String {
        format!("translateY({}px) rotate({}deg)", self.translate_y, self.rotation_deg)
    }
}

/// Background shapes drift down, later ones faster.
pub fn shape_transform(ratio: f64, index: usize) -> ShapeTransform {
    let speed = (index + 1) as f64 * 0.5;
    ShapeTransform {
        translate_y: ratio * 100.0 * speed,
        rotation_deg: ratio * 180.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_ratio() {
        assert_eq!(scroll_ratio(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_ratio(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_ratio(2000.0, 3000.0, 1000.0), 1.0);
        // no clamp after a resize
        assert!(scroll_ratio(2100.0, 3000.0, 1000.0) > 1.0);
    }

    #[test]
    fn test_unscrollable_document_is_at_start() {
        assert_eq!(scroll_ratio(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_ratio(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_card_boundaries() {
        let start = card_transform(0.0, 0);
        assert_eq!(start.rotation_deg, 0.0);
        assert_eq!(start.scale, 1.0);
        assert_eq!(start.css(), "rotate(0deg) scale(1)");

        let end = card_transform(1.0, 0);
        assert_eq!(end.rotation_deg, 360.0);
        assert!((end.scale - 1.0).abs() < 1e-12);

        assert_eq!(card_transform(1.0, 2).rotation_deg, 1080.0);
    }

    #[test]
    fn test_card_scale_peaks_at_quarter() {
        let quarter = card_transform(0.25, 0);
        assert!((quarter.scale - 1.1).abs() < 1e-12);
        let three_quarters = card_transform(0.75, 1);
        assert!((three_quarters.scale - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_transforms_are_pure() {
        for index in 0..6 {
            let ratio = 0.3719;
            let a = card_transform(ratio, index);
            let b = card_transform(ratio, index);
            assert_eq!(a.rotation_deg.to_bits(), b.rotation_deg.to_bits());
            assert_eq!(a.scale.to_bits(), b.scale.to_bits());

            let p = particle_transform(ratio, index);
            let q = particle_transform(ratio, index);
            assert_eq!(p.x.to_bits(), q.x.to_bits());
            assert_eq!(p.y.to_bits(), q.y.to_bits());

            assert_eq!(shape_transform(ratio, index).css(), shape_transform(ratio, index).css());
        }
    }

    #[test]
    fn test_particles_cycle_every_three() {
        assert_eq!(particle_transform(0.42, 1), particle_transform(0.42, 4));
        assert_ne!(particle_transform(0.42, 1), particle_transform(0.42, 2));

        let rest = particle_transform(0.0, 0);
        assert_eq!(rest, ParticleOffset { x: 0.0, y: 30.0 });
    }

    #[test]
    fn test_shapes_drift_by_index() {
        let first = shape_transform(0.5, 0);
        let third = shape_transform(0.5, 2);
        assert_eq!(first, ShapeTransform { translate_y: 25.0, rotation_deg: 90.0 });
        assert_eq!(third.translate_y, 75.0);
        assert_eq!(third.css(), "translateY(75px) rotate(90deg)");
    }
}
