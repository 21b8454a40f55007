//! Star rating input
//!
//! Picks an integer 1..=max with the keyboard and emits it on commit.

use ratatui::prelude::*;

use crate::ui::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRating {
    max: u8,
    /// Star under the cursor, 0 when nothing is highlighted
    hover: u8,
    /// Last committed value, 0 when unrated
    rating: u8,
}

impl StarRating {
    pub fn new(max: u8) -> Self {
        Self {
            max: max.max(1),
            hover: 0,
            rating: 0,
        }
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn hover(&self) -> u8 {
        self.hover
    }

    /// Stars lit right now: the hover wins over the committed value
    pub fn displayed(&self) -> u8 {
        if self.hover > 0 {
            self.hover
        } else {
            self.rating
        }
    }

    pub fn reset(&mut self) {
        self.hover = 0;
        self.rating = 0;
    }

    pub fn left(&mut self) {
        self.hover = self.displayed().saturating_sub(1).max(1);
    }

    pub fn right(&mut self) {
        self.hover = (self.displayed() + 1).min(self.max);
    }

    /// Commit the highlighted star
    pub fn commit(&mut self) -> Option<u8> {
        if self.hover == 0 {
            return None;
        }
        self.rating = self.hover;
        Some(self.rating)
    }

    /// Jump straight to a value and commit it
    pub fn choose(&mut self, value: u8) -> Option<u8> {
        if value == 0 || value > self.max {
            return None;
        }
        self.hover = value;
        self.commit()
    }

    /// Digit keys: '1'..='9' map to themselves, '0' means 10
    pub fn value_for_digit(c: char) -> Option<u8> {
        match c {
            '0' => Some(10),
            '1'..='9' => c.to_digit(10).map(|d| d as u8),
            _ => None,
        }
    }

    pub fn line(&self) -> Line<'static> {
        let lit = self.displayed();
        let mut spans: Vec<Span> = (1..=self.max)
            .map(|i| {
                if i <= lit {
                    Span::styled("★", Theme::star())
                } else {
                    Span::styled("☆", Theme::star_empty())
                }
            })
            .collect();

        let label = if lit > 0 {
            format!("  {}", lit)
        } else {
            String::new()
        };
        spans.push(Span::styled(label, Theme::star()));
        Line::from(spans)
    }
}
