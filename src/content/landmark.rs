//! Map landmarks - the fixed set of places a career location can sit on

use serde::Serialize;

use super::CareerLocation;

/// Locations closer than this (in percentage units) count as nearby
pub const NEARBY_RADIUS: f64 = 10.0;

/// Known map landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Landmark {
    StartupForest,
    CorporateCastle,
    ProductOcean,
    InnovationMountains,
    CommunityVillage,
}

/// Visual parameters the map UI draws a marker with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub icon: &'static str,
    pub decoration: Option<&'static str>,
    pub background: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    pub size: &'static str,
}

impl MarkerStyle {
    /// Generic pin for anything that is not a known landmark
    pub const fn fallback() -> Self {
        Self {
            icon: "📍",
            decoration: None,
            background: "bg-gray-800",
            border: "border-gray-500",
            shadow: "shadow-gray-500/50",
            size: "w-12 h-12",
        }
    }
}

/// A landmark as exposed over the API
#[derive(Debug, Clone, Serialize)]
pub struct LandmarkInfo {
    pub id: &'static str,
    pub x: f64,
    pub y: f64,
    pub style: MarkerStyle,
}

impl Landmark {
    pub const ALL: [Landmark; 5] = [
        Landmark::StartupForest,
        Landmark::CorporateCastle,
        Landmark::ProductOcean,
        Landmark::InnovationMountains,
        Landmark::CommunityVillage,
    ];

    /// Look up a landmark by its markdown identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Landmark::StartupForest => "startup-forest",
            Landmark::CorporateCastle => "corporate-castle",
            Landmark::ProductOcean => "product-ocean",
            Landmark::InnovationMountains => "innovation-mountains",
            Landmark::CommunityVillage => "community-village",
        }
    }

    /// Position on the map as (x, y) percentages
    pub fn coordinates(self) -> (f64, f64) {
        match self {
            Landmark::StartupForest => (20.0, 70.0),
            Landmark::CorporateCastle => (40.0, 40.0),
            Landmark::ProductOcean => (70.0, 60.0),
            Landmark::InnovationMountains => (85.0, 25.0),
            Landmark::CommunityVillage => (55.0, 85.0),
        }
    }

    pub fn style(self) -> MarkerStyle {
        match self {
            Landmark::StartupForest => MarkerStyle {
                icon: "🌲",
                decoration: Some("🌱"),
                background: "bg-green-800",
                border: "border-green-500",
                shadow: "shadow-green-500/50",
                size: "w-14 h-14",
            },
            Landmark::CorporateCastle => MarkerStyle {
                icon: "🏰",
                decoration: Some("👑"),
                background: "bg-indigo-900",
                border: "border-indigo-500",
                shadow: "shadow-indigo-500/50",
                size: "w-16 h-16",
            },
            Landmark::ProductOcean => MarkerStyle {
                icon: "🌊",
                decoration: Some("🚢"),
                background: "bg-blue-800",
                border: "border-blue-500",
                shadow: "shadow-blue-500/50",
                size: "w-14 h-14",
            },
            Landmark::InnovationMountains => MarkerStyle {
                icon: "🏔️",
                decoration: Some("💡"),
                background: "bg-purple-900",
                border: "border-purple-500",
                shadow: "shadow-purple-500/50",
                size: "w-15 h-15",
            },
            Landmark::CommunityVillage => MarkerStyle {
                icon: "🏘️",
                decoration: Some("👥"),
                background: "bg-amber-800",
                border: "border-amber-500",
                shadow: "shadow-amber-500/50",
                size: "w-14 h-14",
            },
        }
    }

    pub fn info(self) -> LandmarkInfo {
        let (x, y) = self.coordinates();
        LandmarkInfo {
            id: self.id(),
            x,
            y,
            style: self.style(),
        }
    }
}

/// Style for an arbitrary location id, falling back to the generic pin
pub fn style_for(id: &str) -> MarkerStyle {
    Landmark::from_id(id).map_or_else(MarkerStyle::fallback, Landmark::style)
}

/// The location closest to (x, y), if it lies within [`NEARBY_RADIUS`]
pub fn nearest_location(locations: &[CareerLocation], x: f64, y: f64) -> Option<&CareerLocation> {
    let mut nearest: Option<(&CareerLocation, f64)> = None;

    for location in locations {
        let distance = (location.x - x).hypot(location.y - y);
        if nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((location, distance));
        }
    }

    nearest
        .filter(|(_, distance)| *distance < NEARBY_RADIUS)
        .map(|(location, _)| location)
}
