use std::f64::consts::PI;

use crate::{position::Position, sucursal::Sucursal};

const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;
const MILES_PER_NAUTICAL_MILE: f64 = 1.1515;
const KM_PER_MILE: f64 = 1.609344;

fn radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// Great-circle distance in kilometers between a point and a sucursal, using the spherical law
/// of cosines.
pub fn distance_km(point: &Position, sucursal: &Sucursal) -> f64 {
    let lat1 = radians(point.latitude);
    let lat2 = radians(sucursal.latitude);
    let theta = radians(point.longitude - sucursal.longitude);

    // Rounding can push this just past 1 for (nearly) identical points, acos would give NaN
    let cos_c = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * theta.cos()).min(1.0);

    let degrees = cos_c.acos() * 180.0 / PI;
    degrees * NAUTICAL_MILES_PER_DEGREE * MILES_PER_NAUTICAL_MILE * KM_PER_MILE
}
