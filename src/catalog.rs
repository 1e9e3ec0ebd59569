//! The fixed solar-system catalog the simulation starts from.
//!
//! Every planet starts on the x-axis with a purely vertical velocity. The
//! inner and outer planets sit on opposite sides of the Sun, as in the classic
//! pygame planet demo this layout comes from.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::body::Body;

const YELLOW: Color = Color::srgb(1.0, 1.0, 0.0);
const BLUE: Color = Color::srgb(0.0, 0.0, 1.0);
const RED: Color = Color::srgb(0.737, 0.153, 0.196);
const DARK_GREY: Color = Color::srgb(0.314, 0.306, 0.318);
const WHITE: Color = Color::srgb(1.0, 1.0, 1.0);

/// Initial conditions for one catalog body.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub name: &'static str,
    /// Signed distance from the origin along the x-axis, in AU.
    pub distance_au: f64,
    /// Initial velocity along y in m/s.
    pub velocity_y: f64,
    /// Mass in kg.
    pub mass: f64,
    /// Display radius in pixels at the default zoom.
    pub radius: f32,
    pub color: Color,
    pub anchor: bool,
}

impl CatalogEntry {
    /// Build a body, converting the AU distance with `astronomical_unit` meters.
    pub fn to_body(&self, astronomical_unit: f64) -> Body {
        let position = DVec2::new(self.distance_au * astronomical_unit, 0.0);
        let body = Body::new(self.name, position, self.mass, self.radius, self.color)
            .with_velocity(DVec2::new(0.0, self.velocity_y));
        if self.anchor { body.anchored() } else { body }
    }
}

/// Sun and the eight planets, in simulation order.
pub static SOLAR_SYSTEM: &[CatalogEntry] = &[
    SUN,
    EARTH,
    MARS,
    MERCURY,
    VENUS,
    JUPITER,
    SATURN,
    URANUS,
    NEPTUNE,
];

pub const SUN: CatalogEntry = CatalogEntry {
    name: "Sun",
    distance_au: 0.0,
    velocity_y: 0.0,
    mass: 1.98892e30,
    radius: 30.0,
    color: YELLOW,
    anchor: true,
};

pub const EARTH: CatalogEntry = CatalogEntry {
    name: "Earth",
    distance_au: -1.0,
    velocity_y: 29_783.0,
    mass: 5.9742e24,
    radius: 16.0,
    color: BLUE,
    anchor: false,
};

pub const MARS: CatalogEntry = CatalogEntry {
    name: "Mars",
    distance_au: -1.524,
    velocity_y: 24_783.0,
    mass: 1.98892e23,
    radius: 12.0,
    color: RED,
    anchor: false,
};

pub const MERCURY: CatalogEntry = CatalogEntry {
    name: "Mercury",
    distance_au: 0.387,
    velocity_y: -47_783.0,
    mass: 3.30e23,
    radius: 8.0,
    color: DARK_GREY,
    anchor: false,
};

pub const VENUS: CatalogEntry = CatalogEntry {
    name: "Venus",
    distance_au: 0.723,
    velocity_y: -35_020.0,
    mass: 4.8685e24,
    radius: 14.0,
    color: WHITE,
    anchor: false,
};

pub const JUPITER: CatalogEntry = CatalogEntry {
    name: "Jupiter",
    distance_au: 5.203,
    velocity_y: -13_100.0,
    mass: 1.90e27,
    radius: 25.0,
    color: RED,
    anchor: false,
};

pub const SATURN: CatalogEntry = CatalogEntry {
    name: "Saturn",
    distance_au: 9.539,
    velocity_y: -9_700.0,
    mass: 5.69e26,
    radius: 23.0,
    color: YELLOW,
    anchor: false,
};

pub const URANUS: CatalogEntry = CatalogEntry {
    name: "Uranus",
    distance_au: 19.18,
    velocity_y: -6_800.0,
    mass: 8.68e25,
    radius: 21.0,
    color: BLUE,
    anchor: false,
};

pub const NEPTUNE: CatalogEntry = CatalogEntry {
    name: "Neptune",
    distance_au: 30.06,
    velocity_y: -5_400.0,
    mass: 1.02e26,
    radius: 22.0,
    color: WHITE,
    anchor: false,
};
