//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use serde::Serialize;

use bitemark_core::{CardDisplayModel, Navigator, RestaurantId};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn is_human(&self) -> bool {
        matches!(self.format, OutputFormat::Human)
    }

    /// Print a single card with all its details
    pub fn print_card(&self, card: &CardDisplayModel) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:         {}", card.id);
                println!("Name:       {}", card.name);
                if !card.tag_line.is_empty() {
                    println!("Tags:       {}", card.tag_line);
                }
                println!("Rating:     {:.1} ({})", card.rating, card.review_count);
                println!("Distance:   {}", card.distance);
                println!("Time:       {}", card.time);
                println!("Poster:     {}", card.poster_url);
                println!(
                    "Bookmarked: {}",
                    if card.is_bookmarked { "yes" } else { "no" }
                );
            }
            OutputFormat::Json => print_json(card),
            OutputFormat::Quiet => {
                println!("{}", card.id);
            }
        }
    }

    /// Print a list of cards
    pub fn print_cards(&self, cards: &[CardDisplayModel]) {
        match self.format {
            OutputFormat::Human => {
                if cards.is_empty() {
                    println!("No restaurants found.");
                    return;
                }
                for card in cards {
                    print_card_row(card);
                }
                println!("\n{} restaurant(s)", cards.len());
            }
            OutputFormat::Json => print_json(&cards),
            OutputFormat::Quiet => {
                for card in cards {
                    println!("{}", card.id);
                }
            }
        }
    }

    /// Print the bookmarked cards
    pub fn print_bookmarks(&self, cards: &[CardDisplayModel]) {
        match self.format {
            OutputFormat::Human => {
                if cards.is_empty() {
                    println!("No bookmarks yet.");
                    return;
                }
                for card in cards {
                    println!("{} | {}", card.id, truncate(&card.name, 40));
                }
                println!("\n{} bookmark(s)", cards.len());
            }
            OutputFormat::Json => {
                let ids: Vec<_> = cards.iter().map(|c| &c.id).collect();
                print_json(&ids);
            }
            OutputFormat::Quiet => {
                for card in cards {
                    println!("{}", card.id);
                }
            }
        }
    }

    /// Report a bookmark state change
    pub fn bookmark_changed(&self, id: &RestaurantId, bookmarked: bool) {
        match self.format {
            OutputFormat::Human => {
                if bookmarked {
                    println!("★ Bookmarked {}", id);
                } else {
                    println!("☆ Removed bookmark {}", id);
                }
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"restaurant_id": id, "bookmarked": bookmarked})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an error without aborting
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "error", "message": message})
                );
            }
            _ => eprintln!("Error: {}", message),
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Activating a card in the terminal prints where it would navigate to
impl Navigator for Output {
    fn navigate(&self, id: &RestaurantId) {
        match self.format {
            OutputFormat::Human => println!("→ Opening restaurant {}", id),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"navigate": id}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

fn print_card_row(card: &CardDisplayModel) {
    let mark = if card.is_bookmarked { "★" } else { "☆" };
    println!(
        "{} {} | {} | {:.1} ({}) | {} | {}",
        mark,
        card.id,
        truncate(&card.name, 30),
        card.rating,
        card.review_count,
        card.distance,
        card.time
    );
    if !card.tag_line.is_empty() {
        println!("    {}", truncate(&card.tag_line, 60));
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize output: {}", e),
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Italian • Pizza • Pasta", 12), "Italian •...");
    }
}
