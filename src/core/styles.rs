/// Style strategies — four composition policies over the same inputs.
///
/// Every strategy maps (palette, intensity, energy, canvas) to a list of
/// elements. They differ in element count, shape mix and opacity policy.
/// The i-th element always takes `palette.color(i)`.
use rand::Rng;

use crate::core::geometry::{flowing_line, irregular_polygon, organic_path, regular_polygon};
use crate::schema::directive::{ArtStyle, Palette};
use crate::schema::element::{Canvas, Element, FilterRef, Length, LineCap, Paint, Point, Style};

/// Numeric dials shared by all strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dials {
    pub intensity: f64,
    pub energy: f64,
}

impl ArtStyle {
    /// Number of elements this style emits for the given dials.
    pub fn element_count(&self, dials: Dials) -> usize {
        let Dials { intensity, energy } = dials;
        let count = match self {
            Self::Expressionist => (intensity * 3.0 + energy * 2.0).floor(),
            Self::Minimalist => (intensity + 2.0).min(5.0),
            Self::Surreal => (intensity * 2.0 + 3.0).floor(),
            Self::Abstract => (intensity * 4.0 + energy * 2.0).floor(),
        };
        count.max(0.0) as usize
    }

    pub fn compose<R: Rng + ?Sized>(
        &self,
        palette: &Palette,
        dials: Dials,
        canvas: Canvas,
        rng: &mut R,
    ) -> Vec<Element> {
        match self {
            Self::Expressionist => expressionist(palette, dials, canvas, rng),
            Self::Minimalist => minimalist(palette, dials, canvas),
            Self::Surreal => surreal(palette, dials, canvas, rng),
            Self::Abstract => abstract_shapes(palette, dials, canvas, rng),
        }
    }
}

fn random_point<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Point {
    let x = rng.gen::<f64>() * canvas.width_f64();
    let y = rng.gen::<f64>() * canvas.height_f64();
    Point::new(x, y)
}

/// Jittered polygons and thick round-capped brushstrokes.
pub fn expressionist<R: Rng + ?Sized>(
    palette: &Palette,
    dials: Dials,
    canvas: Canvas,
    rng: &mut R,
) -> Vec<Element> {
    let count = ArtStyle::Expressionist.element_count(dials);
    let mut elements = Vec::with_capacity(count);

    for i in 0..count {
        let color = palette.color(i);
        let opacity = rng.gen::<f64>() * 0.7 + 0.3;
        let origin = random_point(canvas, rng);
        let size = rng.gen::<f64>() * 200.0 + 50.0;

        if rng.gen::<f64>() > 0.5 {
            elements.push(Element::Polygon {
                points: irregular_polygon(origin, size, 6, rng),
                style: Style::filled(color)
                    .opacity(opacity)
                    .filter(FilterRef::RoughPaper),
            });
        } else {
            let stroke_width = dials.intensity * 10.0 + 5.0;
            let to = Point::new(
                origin.x + rng.gen::<f64>() * 200.0 - 100.0,
                origin.y + rng.gen::<f64>() * 200.0 - 100.0,
            );
            let mut style = Style::stroked(color, stroke_width).opacity(opacity);
            style.stroke_linecap = Some(LineCap::Round);
            elements.push(Element::Line {
                from: origin,
                to,
                style,
            });
        }
    }

    elements
}

/// Alternating circles and bars along a sine-offset baseline. Consumes no
/// randomness.
pub fn minimalist(palette: &Palette, dials: Dials, canvas: Canvas) -> Vec<Element> {
    let count = ArtStyle::Minimalist.element_count(dials);
    let spacing = canvas.width_f64() / (count as f64 + 1.0);
    let mut elements = Vec::with_capacity(count);

    for i in 0..count {
        let color = palette.color(i);
        let x = spacing * (i as f64 + 1.0);
        let y = canvas.height_f64() / 2.0 + (i as f64 * 0.5).sin() * 100.0;

        if i % 2 == 0 {
            elements.push(Element::Circle {
                center: Point::new(x, y),
                radius: 50.0 + dials.intensity * 10.0,
                style: Style::filled(color).opacity(0.8),
            });
        } else {
            let width = 20.0 + dials.energy * 5.0;
            let height = 100.0 + dials.intensity * 20.0;
            elements.push(Element::Rect {
                origin: Point::new(x - width / 2.0, y - height / 2.0),
                width: Length::Units(width),
                height: Length::Units(height),
                style: Style::filled(color).opacity(0.7),
            });
        }
    }

    elements
}

/// Blurred organic blobs, rotated irregular polygons and flowing lines.
pub fn surreal<R: Rng + ?Sized>(
    palette: &Palette,
    dials: Dials,
    canvas: Canvas,
    rng: &mut R,
) -> Vec<Element> {
    let count = ArtStyle::Surreal.element_count(dials);
    let mut elements = Vec::with_capacity(count);

    for i in 0..count {
        let color = palette.color(i);
        let origin = random_point(canvas, rng);

        if rng.gen::<f64>() > 0.6 {
            let data = organic_path(origin, 100.0 + dials.intensity * 20.0, rng);
            elements.push(Element::Path {
                data,
                style: Style::filled(color)
                    .opacity(0.6)
                    .filter(FilterRef::Blur),
            });
        } else if rng.gen::<f64>() > 0.3 {
            let size = 30.0 + rng.gen::<f64>() * 100.0;
            let rotation = rng.gen::<f64>() * 360.0;
            let sides = 3 + rng.gen_range(0..5);
            elements.push(Element::Polygon {
                points: irregular_polygon(origin, size, sides, rng),
                style: Style::filled(color).opacity(0.7).rotate(rotation, origin),
            });
        } else {
            let data = flowing_line(origin, dials.energy * 50.0 + 100.0, rng);
            let mut style = Style::stroked(color, dials.intensity + 2.0).opacity(0.8);
            style.fill = Some(Paint::None);
            elements.push(Element::Path { data, style });
        }
    }

    elements
}

/// Circles, rotated rectangles and regular polygons with random opacity.
pub fn abstract_shapes<R: Rng + ?Sized>(
    palette: &Palette,
    dials: Dials,
    canvas: Canvas,
    rng: &mut R,
) -> Vec<Element> {
    let count = ArtStyle::Abstract.element_count(dials);
    let mut elements = Vec::with_capacity(count);

    for i in 0..count {
        let color = palette.color(i);
        let origin = random_point(canvas, rng);
        let size = rng.gen::<f64>() * 150.0 + 50.0;
        let shape_type = rng.gen::<f64>();

        if shape_type > 0.7 {
            elements.push(Element::Circle {
                center: origin,
                radius: size / 2.0,
                style: Style::filled(color).opacity(random_opacity(rng)),
            });
        } else if shape_type > 0.4 {
            let rotation = rng.gen::<f64>() * 360.0;
            elements.push(Element::Rect {
                origin: Point::new(origin.x - size / 2.0, origin.y - size / 2.0),
                width: Length::Units(size),
                height: Length::Units(size * 0.6),
                style: Style::filled(color)
                    .opacity(random_opacity(rng))
                    .rotate(rotation, origin),
            });
        } else {
            let sides = 3 + rng.gen_range(0..4);
            elements.push(Element::Polygon {
                points: regular_polygon(origin, size / 2.0, sides),
                style: Style::filled(color).opacity(random_opacity(rng)),
            });
        }
    }

    elements
}

/// Uniform in [0.4, 1.0).
fn random_opacity<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen::<f64>() * 0.6 + 0.4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::element::ElementKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dials(intensity: f64, energy: f64) -> Dials {
        Dials { intensity, energy }
    }

    #[test]
    fn element_count_formulas() {
        assert_eq!(ArtStyle::Expressionist.element_count(dials(4.0, 3.0)), 18);
        assert_eq!(ArtStyle::Minimalist.element_count(dials(10.0, 5.0)), 5);
        assert_eq!(ArtStyle::Minimalist.element_count(dials(1.0, 1.0)), 3);
        assert_eq!(ArtStyle::Surreal.element_count(dials(5.0, 1.0)), 13);
        assert_eq!(ArtStyle::Abstract.element_count(dials(2.0, 4.0)), 16);
    }

    #[test]
    fn composed_lengths_match_formulas() {
        let palette = Palette::new(["#000", "#fff"]);
        let mut rng = StdRng::seed_from_u64(1);
        for style in ArtStyle::ALL {
            for intensity in 1..=10 {
                let d = dials(intensity as f64, 3.0);
                let elements = style.compose(&palette, d, Canvas::DEFAULT, &mut rng);
                assert_eq!(elements.len(), style.element_count(d), "{style} at {intensity}");
            }
        }
    }

    #[test]
    fn minimalist_layout_is_deterministic() {
        let palette = Palette::new(["#111", "#222"]);
        let d = dials(3.0, 2.0);
        let elements = minimalist(&palette, d, Canvas::DEFAULT);
        assert_eq!(elements.len(), 5);

        let kinds: Vec<ElementKind> = elements.iter().map(Element::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Circle,
                ElementKind::Rect,
                ElementKind::Circle,
                ElementKind::Rect,
                ElementKind::Circle
            ]
        );

        let Element::Circle { center, radius, .. } = &elements[0] else {
            panic!("expected circle first");
        };
        assert_eq!(*radius, 80.0);
        assert!((center.x - 800.0 / 6.0).abs() < 1e-9);
        assert_eq!(center.y, 300.0);

        let Element::Rect { width, height, .. } = &elements[1] else {
            panic!("expected rect second");
        };
        assert_eq!(*width, Length::Units(30.0));
        assert_eq!(*height, Length::Units(160.0));
    }

    #[test]
    fn expressionist_mix_and_stroke_width() {
        let palette = Palette::new(["#a00"]);
        let mut rng = StdRng::seed_from_u64(9);
        let elements = expressionist(&palette, dials(6.0, 4.0), Canvas::DEFAULT, &mut rng);
        for el in &elements {
            match el {
                Element::Polygon { points, style } => {
                    assert_eq!(points.len(), 6);
                    assert_eq!(style.filter, Some(FilterRef::RoughPaper));
                }
                Element::Line { style, .. } => {
                    assert_eq!(style.stroke_width, Some(65.0));
                    assert_eq!(style.stroke_linecap, Some(LineCap::Round));
                }
                other => panic!("unexpected element {:?}", other.kind()),
            }
            let opacity = el.style().opacity.unwrap();
            assert!((0.3..1.0).contains(&opacity));
        }
    }

    #[test]
    fn surreal_categories() {
        let palette = Palette::new(["#123456", "#654321"]);
        let mut rng = StdRng::seed_from_u64(21);
        let mut seen_blob = false;
        let mut seen_polygon = false;
        let mut seen_line = false;
        for _ in 0..10 {
            for el in surreal(&palette, dials(8.0, 2.0), Canvas::DEFAULT, &mut rng) {
                match el {
                    Element::Path { ref data, ref style } if data.is_closed() => {
                        assert_eq!(style.filter, Some(FilterRef::Blur));
                        assert_eq!(style.opacity, Some(0.6));
                        seen_blob = true;
                    }
                    Element::Path { ref style, .. } => {
                        assert_eq!(style.fill, Some(Paint::None));
                        assert_eq!(style.stroke_width, Some(10.0));
                        seen_line = true;
                    }
                    Element::Polygon { ref points, ref style } => {
                        assert!((3..=7).contains(&points.len()));
                        assert!(style.transform.is_some());
                        seen_polygon = true;
                    }
                    other => panic!("unexpected element {:?}", other.kind()),
                }
            }
        }
        assert!(seen_blob && seen_polygon && seen_line);
    }

    #[test]
    fn abstract_opacity_range() {
        let palette = Palette::new(["#0f0", "#00f", "#f00"]);
        let mut rng = StdRng::seed_from_u64(4);
        let elements = abstract_shapes(&palette, dials(10.0, 5.0), Canvas::DEFAULT, &mut rng);
        assert_eq!(elements.len(), 50);
        for (i, el) in elements.iter().enumerate() {
            let opacity = el.style().opacity.unwrap();
            assert!((0.4..1.0).contains(&opacity));
            assert_eq!(el.style().color(), Some(palette.color(i)));
            if let Element::Polygon { points, .. } = el {
                assert!((3..=6).contains(&points.len()));
            }
        }
    }
}
