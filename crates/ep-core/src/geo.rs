//! Grid, metric, and geographic coordinates.
//!
//! Scenario positions are given in **grid units**.  Multiplying by the run's
//! `unit_length_m` gives a [`MetricPoint`] on a local planar frame, which is
//! what every distance computation uses.  [`GeoCenter`] anchors that frame to
//! WGS-84 so downstream map tooling can place cells.

/// Mean equatorial radius used by the local tangent-plane projection.
pub const EARTH_RADIUS_EQUATORIAL_M: f64 = 6_378_137.0;

// ── GridPoint ─────────────────────────────────────────────────────────────────

/// A position in grid units.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale to metres.
    #[inline]
    pub fn to_metric(self, unit_length_m: f64) -> MetricPoint {
        MetricPoint::new(self.x * unit_length_m, self.y * unit_length_m)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ── MetricPoint ───────────────────────────────────────────────────────────────

/// A position in metres on the local planar frame.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct MetricPoint {
    pub x: f64,
    pub y: f64,
}

impl MetricPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in metres.
    #[inline]
    pub fn distance_m(self, other: MetricPoint) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance.  Cheaper than `distance_m` for comparisons.
    #[inline]
    pub fn distance_sq(self, other: MetricPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> MetricPoint {
        MetricPoint::new(self.x + dx, self.y + dy)
    }
}

impl std::fmt::Display for MetricPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2} m, {:.2} m)", self.x, self.y)
    }
}

// ── GeoPoint ──────────────────────────────────────────────────────────────────

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── GeoCenter ─────────────────────────────────────────────────────────────────

/// Geographic anchor of the metric frame's origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoCenter {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCenter {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Project a metric offset from the origin to latitude/longitude.
    ///
    /// Local flat-earth approximation: `y` shifts latitude, `x` shifts
    /// longitude scaled by `cos(lat)`.  Good to well under a metre across a
    /// few kilometres.
    pub fn project(&self, p: MetricPoint) -> GeoPoint {
        let deg = 180.0 / std::f64::consts::PI;
        let lat = self.lat + (p.y / EARTH_RADIUS_EQUATORIAL_M) * deg;
        let lon = self.lon
            + (p.x / (EARTH_RADIUS_EQUATORIAL_M * self.lat.to_radians().cos())) * deg;
        GeoPoint::new(lat, lon)
    }
}
