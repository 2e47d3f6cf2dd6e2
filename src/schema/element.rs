/// Drawable primitives — a typed model of the SVG shapes the engine emits.
///
/// Elements are built once by the style strategies and only ever read by
/// the serializer. Attribute values are written verbatim; nothing here
/// validates or escapes color strings.
use std::fmt;

/// Fixed logical drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const DEFAULT: Canvas = Canvas {
        width: 800,
        height: 600,
    };

    pub fn width_f64(&self) -> f64 {
        self.width as f64
    }

    pub fn height_f64(&self) -> f64 {
        self.height as f64
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// One command in a path's `d` attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    /// A `Q` command followed by a flat coordinate list. Consecutive
    /// control/end pairs rely on SVG's implicit command repetition.
    QuadTo(Vec<Point>),
    Close,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Every coordinate in command order, including control points.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.commands.iter().flat_map(|cmd| match cmd {
            PathCommand::MoveTo(p) => std::slice::from_ref(p),
            PathCommand::QuadTo(points) => points.as_slice(),
            PathCommand::Close => &[] as &[Point],
        })
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {}", p)?,
                PathCommand::QuadTo(points) => {
                    f.write_str("Q")?;
                    for p in points {
                        write!(f, " {}", p)?;
                    }
                }
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Paint {
    Color(String),
    None,
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => f.write_str(c),
            Self::None => f.write_str("none"),
        }
    }
}

/// Reference to one of the filters every document declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRef {
    Blur,
    RoughPaper,
}

impl FilterRef {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::RoughPaper => "roughPaper",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Rotation in degrees about a pivot.
    Rotate { angle: f64, pivot: Point },
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotate { angle, pivot } => write!(f, "rotate({} {})", angle, pivot),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
}

/// Presentation attributes shared by every shape. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub fill: Option<Paint>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub stroke_linecap: Option<LineCap>,
    pub filter: Option<FilterRef>,
    pub transform: Option<Transform>,
}

impl Style {
    pub fn filled(color: &str) -> Self {
        Self {
            fill: Some(Paint::Color(color.to_string())),
            ..Self::default()
        }
    }

    pub fn stroked(color: &str, width: f64) -> Self {
        Self {
            stroke: Some(color.to_string()),
            stroke_width: Some(width),
            ..Self::default()
        }
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn filter(mut self, filter: FilterRef) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn rotate(mut self, angle: f64, pivot: Point) -> Self {
        self.transform = Some(Transform::Rotate { angle, pivot });
        self
    }

    /// The primary color: fill when filled, otherwise stroke.
    pub fn color(&self) -> Option<&str> {
        match (&self.fill, &self.stroke) {
            (Some(Paint::Color(c)), _) => Some(c.as_str()),
            (_, Some(c)) => Some(c.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref fill) = self.fill {
            write!(f, " fill=\"{}\"", fill)?;
        }
        if let Some(ref stroke) = self.stroke {
            write!(f, " stroke=\"{}\"", stroke)?;
        }
        if let Some(width) = self.stroke_width {
            write!(f, " stroke-width=\"{}\"", width)?;
        }
        if let Some(opacity) = self.opacity {
            write!(f, " opacity=\"{}\"", opacity)?;
        }
        if let Some(LineCap::Round) = self.stroke_linecap {
            f.write_str(" stroke-linecap=\"round\"")?;
        }
        if let Some(filter) = self.filter {
            write!(f, " filter=\"url(#{})\"", filter.id())?;
        }
        if let Some(ref transform) = self.transform {
            write!(f, " transform=\"{}\"", transform)?;
        }
        Ok(())
    }
}

/// A rectangle dimension: absolute units or a share of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Units(f64),
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Units(v) => write!(f, "{}", v),
            Self::Percent(v) => write!(f, "{}%", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Rect,
    Circle,
    Polygon,
    Path,
    Line,
}

/// A single drawable shape. Insertion order in a document is paint order.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect {
        origin: Point,
        width: Length,
        height: Length,
        style: Style,
    },
    Circle {
        center: Point,
        radius: f64,
        style: Style,
    },
    Polygon {
        points: Vec<Point>,
        style: Style,
    },
    Path {
        data: PathData,
        style: Style,
    },
    Line {
        from: Point,
        to: Point,
        style: Style,
    },
}

impl Element {
    /// Full-canvas rectangle filled with `color`.
    pub fn background(color: &str) -> Self {
        Self::Rect {
            origin: Point::new(0.0, 0.0),
            width: Length::Percent(100.0),
            height: Length::Percent(100.0),
            style: Style::filled(color),
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Rect { .. } => ElementKind::Rect,
            Self::Circle { .. } => ElementKind::Circle,
            Self::Polygon { .. } => ElementKind::Polygon,
            Self::Path { .. } => ElementKind::Path,
            Self::Line { .. } => ElementKind::Line,
        }
    }

    pub fn style(&self) -> &Style {
        match self {
            Self::Rect { style, .. }
            | Self::Circle { style, .. }
            | Self::Polygon { style, .. }
            | Self::Path { style, .. }
            | Self::Line { style, .. } => style,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect {
                origin,
                width,
                height,
                style,
            } => write!(
                f,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
                origin.x, origin.y, width, height, style
            ),
            Self::Circle {
                center,
                radius,
                style,
            } => write!(
                f,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
                center.x, center.y, radius, style
            ),
            Self::Polygon { points, style } => {
                f.write_str("<polygon points=\"")?;
                for (i, p) in points.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{},{}", p.x, p.y)?;
                }
                write!(f, "\"{}/>", style)
            }
            Self::Path { data, style } => write!(f, "<path d=\"{}\"{}/>", data, style),
            Self::Line { from, to, style } => write!(
                f,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
                from.x, from.y, to.x, to.y, style
            ),
        }
    }
}
