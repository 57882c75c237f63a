//! Static pool of pre-validated gift ideas used to pad or replace unusable
//! model output.

use super::models::GiftRecord;

/// How padding records are drawn from the fallback pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Walk the pool from its start, wrapping around as needed
    #[default]
    Cycle,
    /// Skip pool entries resembling an accepted title, then sample at random
    Diverse,
}

impl std::fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackPolicy::Cycle => write!(f, "cycle"),
            FallbackPolicy::Diverse => write!(f, "diverse"),
        }
    }
}

impl std::str::FromStr for FallbackPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cycle" => Ok(FallbackPolicy::Cycle),
            "diverse" => Ok(FallbackPolicy::Diverse),
            other => anyhow::bail!("Unknown fallback policy: {}", other),
        }
    }
}

/// Fresh copy of the fallback pool, in its canonical order
pub fn fallback_pool() -> Vec<GiftRecord> {
    vec![
        GiftRecord::new(
            "Smart BBQ Thermometer",
            "Let dad monitor his grilling masterpiece from his phone. Because standing next to the grill with a beer was too easy!",
            "Wireless Meat Thermometer for Grilling",
            &["$25", "$50"],
            &["BBQ", "Tech"],
            &["Father's Day", "Birthday", "Christmas"],
        ),
        GiftRecord::new(
            "Premium Tool Belt",
            "For the dad who loves DIY but keeps losing his tools. Now he can lose them all in one organized place!",
            "Professional Tool Belt",
            &["$30", "$60"],
            &["Tools", "DIY"],
            &["Father's Day", "Christmas", "Birthday"],
        ),
        GiftRecord::new(
            "Deluxe Coffee Station",
            "Transform dad's morning routine from 'don't talk to me yet' to 'let me tell you about coffee origins'.",
            "Home Coffee Bar Station",
            &["$50", "$100"],
            &["Coffee", "Luxury"],
            &["Christmas", "Birthday", "Father's Day"],
        ),
        GiftRecord::new(
            "Smart Home Starter Kit",
            "Give dad the power to control everything from his chair. Warning: May result in excessive 'Who touched the thermostat?' questions.",
            "Smart Home Hub Starter Kit",
            &["$75", "$150"],
            &["Tech", "Gadgets"],
            &["Christmas", "Birthday", "Father's Day"],
        ),
        GiftRecord::new(
            "Personalized Grilling Set",
            "Custom BBQ tools that say 'These are dad's tongs' so everyone knows who's really the grill master.",
            "Personalized BBQ Grilling Tools Set",
            &["$40", "$80"],
            &["BBQ", "Outdoors"],
            &["Father's Day", "Birthday", "Christmas"],
        ),
        GiftRecord::new(
            "Noise-Canceling Headphones",
            "For when dad says 'I just want some peace and quiet' but still wants to listen to his favorite tunes.",
            "Premium Noise Canceling Headphones",
            &["$100", "$200"],
            &["Tech", "Music"],
            &["Birthday", "Christmas", "Father's Day"],
        ),
        GiftRecord::new(
            "Multi-Tool Watch",
            "A watch that's also a toolkit. Perfect for the dad who likes to fix things on the go!",
            "Multi Tool Watch",
            &["$75", "$150"],
            &["Tools", "Luxury", "Tech"],
            &["Birthday", "Christmas", "Father's Day"],
        ),
        GiftRecord::new(
            "Indoor Putting Green",
            "Let dad practice his golf game without leaving the house. Comes with built-in excuses for missed putts!",
            "Indoor Putting Green Mat",
            &["$30", "$60"],
            &["Sports", "Golf"],
            &["Birthday", "Christmas", "Father's Day"],
        ),
        GiftRecord::new(
            "Vintage Style Record Player",
            "Help dad relive his glory days with a modern record player. Now he can tell you how music 'used to sound better' in HD!",
            "Bluetooth Vintage Record Player",
            &["$60", "$120"],
            &["Music", "Tech", "Luxury"],
            &["Birthday", "Christmas", "Father's Day"],
        ),
    ]
}
