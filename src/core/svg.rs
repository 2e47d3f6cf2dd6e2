/// Markup serializer — element list plus filter definitions to one SVG document.
///
/// String assembly only. Fragment contents are not validated or escaped,
/// and rendering cannot fail.
use std::fmt::{self, Write};

use crate::schema::element::{Canvas, Element, FilterRef};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A reusable filter declared in `<defs>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    GaussianBlur {
        std_deviation: f64,
    },
    /// Turbulence noise fed into a displacement map.
    RoughPaper {
        base_frequency: f64,
        octaves: u32,
        scale: f64,
    },
}

impl Filter {
    /// Blur whose deviation is half the emotion intensity.
    pub fn blur_for_intensity(intensity: f64) -> Self {
        Self::GaussianBlur {
            std_deviation: intensity / 2.0,
        }
    }

    pub fn rough_paper() -> Self {
        Self::RoughPaper {
            base_frequency: 0.04,
            octaves: 5,
            scale: 1.0,
        }
    }

    pub fn reference(&self) -> FilterRef {
        match self {
            Self::GaussianBlur { .. } => FilterRef::Blur,
            Self::RoughPaper { .. } => FilterRef::RoughPaper,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    <filter id=\"{}\">", self.reference().id())?;
        match self {
            Self::GaussianBlur { std_deviation } => {
                writeln!(f, "      <feGaussianBlur stdDeviation=\"{}\"/>", std_deviation)?;
            }
            Self::RoughPaper {
                base_frequency,
                octaves,
                scale,
            } => {
                writeln!(
                    f,
                    "      <feTurbulence baseFrequency=\"{}\" numOctaves=\"{}\" result=\"noise\"/>",
                    base_frequency, octaves
                )?;
                writeln!(
                    f,
                    "      <feDisplacementMap in=\"SourceGraphic\" in2=\"noise\" scale=\"{}\"/>",
                    scale
                )?;
            }
        }
        write!(f, "    </filter>")
    }
}

/// A complete drawing ready to serialize. `elements[0]` paints first.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub canvas: Canvas,
    pub filters: Vec<Filter>,
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            filters: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Serialize to a standalone SVG string. The root element is the only
    /// one carrying literal `width`/`height` pixel attributes.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) -> fmt::Result {
        let Canvas { width, height } = self.canvas;
        writeln!(
            out,
            "<svg width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\" xmlns=\"{SVG_NAMESPACE}\">"
        )?;
        if !self.filters.is_empty() {
            writeln!(out, "  <defs>")?;
            for filter in &self.filters {
                writeln!(out, "{}", filter)?;
            }
            writeln!(out, "  </defs>")?;
        }
        for element in &self.elements {
            writeln!(out, "  {}", element)?;
        }
        writeln!(out, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::element::{Point, Style};

    fn sample_document() -> Document {
        let mut doc = Document::new(Canvas::DEFAULT);
        doc.filters.push(Filter::blur_for_intensity(3.0));
        doc.filters.push(Filter::rough_paper());
        doc.elements.push(Element::background("#111"));
        doc.elements.push(Element::Circle {
            center: Point::new(10.0, 10.0),
            radius: 5.0,
            style: Style::filled("#222").opacity(0.8),
        });
        doc
    }

    #[test]
    fn root_carries_dimensions_once() {
        let svg = sample_document().render();
        assert!(svg.starts_with("<svg width=\"800\" height=\"600\""));
        assert_eq!(svg.matches("width=\"800\"").count(), 1);
        assert_eq!(svg.matches("height=\"600\"").count(), 1);
        assert_eq!(svg.matches("<svg").count(), 1);
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn filters_declared_in_defs() {
        let svg = sample_document().render();
        assert!(svg.contains("<filter id=\"blur\">"));
        assert!(svg.contains("<feGaussianBlur stdDeviation=\"1.5\"/>"));
        assert!(svg.contains("<filter id=\"roughPaper\">"));
        assert!(svg.contains("baseFrequency=\"0.04\" numOctaves=\"5\""));
        assert!(svg.contains("scale=\"1\""));
        let defs_end = svg.find("</defs>").unwrap();
        let first_shape = svg.find("<rect").unwrap();
        assert!(defs_end < first_shape);
    }

    #[test]
    fn elements_in_paint_order() {
        let svg = sample_document().render();
        let rect = svg.find("<rect").unwrap();
        let circle = svg.find("<circle").unwrap();
        assert!(rect < circle);
    }

    #[test]
    fn no_defs_without_filters() {
        let doc = Document::new(Canvas::DEFAULT);
        let svg = doc.render();
        assert!(!svg.contains("<defs>"));
        assert_eq!(svg.lines().count(), 2);
    }

    #[test]
    fn colors_pass_through_unvalidated() {
        let mut doc = Document::new(Canvas::DEFAULT);
        doc.elements.push(Element::background("not a color"));
        assert!(doc.render().contains("fill=\"not a color\""));
    }
}
