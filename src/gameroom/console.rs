use super::event::Event;
use super::event::Listener;
use crate::PALETTE;
use crate::gameplay::Side;
use colored::Color;
use colored::Colorize;
use rand::Rng;
use rand::rngs::SmallRng;

/// Prints match progress to stdout, tinting each round with a random palette color.
#[derive(Debug)]
pub struct Console {
    rng: SmallRng,
    tint: Option<Color>,
    plain: bool,
}

impl Console {
    pub fn new(rng: SmallRng, plain: bool) -> Self {
        Self {
            rng,
            tint: None,
            plain,
        }
    }
    fn paint(&self, text: String) -> String {
        match self.tint {
            Some(color) => text.color(color).to_string(),
            None => text,
        }
    }
}

impl Listener for Console {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::Start(_) => println!("Game start!"),
            Event::Next(k) => {
                self.tint = match self.plain {
                    true => None,
                    false => Some(PALETTE[self.rng.random_range(0..PALETTE.len())]),
                };
                println!("\n{}", self.paint(format!("Round {}:", k)));
            }
            Event::Round(round) => println!("{}", self.paint(round.to_string())),
            Event::Over(verdict, (one, two)) => {
                self.tint = None;
                println!("Game over!");
                println!(
                    "Final Score: {}: {} | {}: {}",
                    Side::One,
                    one,
                    Side::Two,
                    two
                );
                println!("{}", verdict);
            }
        }
    }
}
