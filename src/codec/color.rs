use serde::{Deserialize, Serialize};

/// Standard resistor band colors, in digit order (Black=0 .. White=9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum Color {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
}

impl Color {
    pub fn from_index(index: u8) -> Option<Color> {
        match index {
            0 => Some(Color::Black),
            1 => Some(Color::Brown),
            2 => Some(Color::Red),
            3 => Some(Color::Orange),
            4 => Some(Color::Yellow),
            5 => Some(Color::Green),
            6 => Some(Color::Blue),
            7 => Some(Color::Violet),
            8 => Some(Color::Grey),
            9 => Some(Color::White),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Brown => "brown",
            Color::Red => "red",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Violet => "violet",
            Color::Grey => "grey",
            Color::White => "white",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
