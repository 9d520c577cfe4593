//! List site content

use anyhow::Result;

use crate::content::landmark::style_for;
use crate::content::{iso_millis, CareerLocation};
use crate::Portfolio;

/// One line per location, with its map icon
fn location_line(loc: &CareerLocation) -> String {
    format!(
        "  {} {} ({}) at {},{} - {} achievements [{}]",
        style_for(&loc.id).icon,
        loc.name,
        loc.years,
        loc.x,
        loc.y,
        loc.achievements.len(),
        loc.id
    )
}

/// List site content by type
pub fn run(portfolio: &Portfolio, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" | "blog" => {
            let posts = portfolio.blog_posts()?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!("  {} - {} [{}]", iso_millis(&post.date), post.title, post.id);
            }
        }
        "location" | "locations" | "career" => {
            let locations = portfolio.career_locations();
            println!("Locations ({}):", locations.len());
            for loc in &locations {
                println!("{}", location_line(loc));
            }
        }
        "bio" | "biography" => {
            let biography = portfolio.biography();
            println!("{}", biography.content);
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, locations, biography",
                content_type
            );
        }
    }

    Ok(())
}
