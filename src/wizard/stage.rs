use serde::{Deserialize, Serialize};
use std::fmt;

/// Steps of the listing form, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    BasicInfo = 1,
    Details = 2,
    Photos = 3,
    Review = 4,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::BasicInfo, Stage::Details, Stage::Photos, Stage::Review];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(n: u8) -> Option<Stage> {
        match n {
            1 => Some(Stage::BasicInfo),
            2 => Some(Stage::Details),
            3 => Some(Stage::Photos),
            4 => Some(Stage::Review),
            _ => None,
        }
    }

    /// Following stage, staying on Review at the end
    pub fn next(&self) -> Stage {
        Stage::from_number(self.number() + 1).unwrap_or(Stage::Review)
    }

    /// Preceding stage, staying on BasicInfo at the start
    pub fn previous(&self) -> Stage {
        Stage::from_number(self.number().saturating_sub(1)).unwrap_or(Stage::BasicInfo)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::BasicInfo => "Basic Information",
            Stage::Details => "Property Details",
            Stage::Photos => "Photos",
            Stage::Review => "Review & Contact",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of 4: {}", self.number(), self.title())
    }
}
