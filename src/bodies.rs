// src/bodies.rs

use std::fmt;

/// Solar-system bodies with a known surface gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Body {
    Moon,
    Mercury,
    Venus,
    #[default]
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

// (body, name, surface gravity in m/s²)
static BODY_TABLE: [(Body, &str, f64); 9] = [
    (Body::Moon, "Moon", 1.622),
    (Body::Mercury, "Mercury", 3.7),
    (Body::Venus, "Venus", 8.87),
    (Body::Earth, "Earth", 9.80665),
    (Body::Mars, "Mars", 3.72076),
    (Body::Jupiter, "Jupiter", 24.79),
    (Body::Saturn, "Saturn", 10.44),
    (Body::Uranus, "Uranus", 8.69),
    (Body::Neptune, "Neptune", 11.15),
];

impl Body {
    pub const ALL: [Body; 9] = [
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    fn entry(self) -> &'static (Body, &'static str, f64) {
        // BODY_TABLE is ordered like the enum declaration.
        &BODY_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    /// Surface gravity in m/s².
    pub fn gravity(self) -> f64 {
        self.entry().2
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
