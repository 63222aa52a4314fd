use std::f64::consts::FRAC_PI_4;

/// Sphere radius used for projected coordinates, in metres.
const EARTH_RADIUS: f64 = 6_370_997.0;

/// Geographic bounding box, degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub west: f64,
    pub east: f64,
    pub south: f64,
    pub north: f64,
}

/// Fixed extent covering metropolitan France.
pub const FRANCE_EXTENT: Extent = Extent {
    west: -5.0,
    east: 10.0,
    south: 41.0,
    north: 52.0,
};

/// Lambert conformal conic projection on a sphere.
///
/// A conic projection preserves shape and angles well at France's
/// mid-latitudes, where a plain lon/lat grid looks visibly distorted. The
/// precomputed constants follow the standard two-parallel formulation.
#[derive(Debug, Clone, Copy)]
pub struct LambertConformal {
    cone_constant: f64,
    scale: f64,
    rho_origin: f64,
    central_longitude: f64,
}

impl LambertConformal {
    /// Projection centred on France, with the conventional standard
    /// parallels at 33° and 45°.
    pub fn france() -> Self {
        Self::new(3.0, 46.5, (33.0, 45.0))
    }

    pub fn new(
        central_longitude: f64,
        central_latitude: f64,
        standard_parallels: (f64, f64),
    ) -> Self {
        let phi_1 = standard_parallels.0.to_radians();
        let phi_2 = standard_parallels.1.to_radians();
        let phi_0 = central_latitude.to_radians();

        let cone_constant = if (phi_1 - phi_2).abs() < 1e-10 {
            phi_1.sin()
        } else {
            (phi_1.cos() / phi_2.cos()).ln()
                / (half_colatitude_tan(phi_2) / half_colatitude_tan(phi_1)).ln()
        };
        let scale = phi_1.cos() * half_colatitude_tan(phi_1).powf(cone_constant) / cone_constant;

        let mut projection = Self {
            cone_constant,
            scale,
            rho_origin: 0.0,
            central_longitude: central_longitude.to_radians(),
        };
        projection.rho_origin = projection.rho(phi_0);
        projection
    }

    /// Projects a lon/lat pair (degrees) to planar metres.
    pub fn project(&self, longitude: f64, latitude: f64) -> (f64, f64) {
        let rho = self.rho(latitude.to_radians());
        let theta = self.cone_constant * (longitude.to_radians() - self.central_longitude);
        (rho * theta.sin(), self.rho_origin - rho * theta.cos())
    }

    fn rho(&self, latitude: f64) -> f64 {
        EARTH_RADIUS * self.scale / half_colatitude_tan(latitude).powf(self.cone_constant)
    }
}

fn half_colatitude_tan(latitude: f64) -> f64 {
    (FRAC_PI_4 + latitude / 2.0).tan()
}

/// Planar envelope of a geographic extent under a projection.
///
/// The conic projection bows the edges of a lon/lat rectangle, so the
/// envelope is found by sampling along each edge rather than projecting the
/// four corners alone.
pub fn projected_bounds(
    projection: &LambertConformal,
    extent: &Extent,
) -> ((f64, f64), (f64, f64)) {
    const STEPS: usize = 64;

    let mut min = (f64::INFINITY, f64::INFINITY);
    let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    let mut visit = |longitude: f64, latitude: f64| {
        let (x, y) = projection.project(longitude, latitude);
        min.0 = min.0.min(x);
        min.1 = min.1.min(y);
        max.0 = max.0.max(x);
        max.1 = max.1.max(y);
    };

    for step in 0..=STEPS {
        let t = step as f64 / STEPS as f64;
        let longitude = extent.west + t * (extent.east - extent.west);
        let latitude = extent.south + t * (extent.north - extent.south);
        visit(longitude, extent.south);
        visit(longitude, extent.north);
        visit(extent.west, latitude);
        visit(extent.east, latitude);
    }

    (min, max)
}
