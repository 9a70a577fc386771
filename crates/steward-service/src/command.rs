//! Text commands
//!
//! A privileged broadcast command plus a handful of static-content
//! responders. Parsing here is name/argument resolution only; prefix
//! stripping happens upstream in the platform runtime.

/// Map image asset filename (resolved under the configured asset directory).
pub const MAP_IMAGE: &str = "venue_map.png";

/// Tables-and-chairs diagram asset filename (shared by `tables` and `chairs`).
pub const TABLES_IMAGE: &str = "tables_and_chairs.png";

/// Phone list asset filename.
pub const PHONE_LIST: &str = "phones.txt";

/// Delegate allocation per county.
///
/// Data-driven so the rendered total is computed, never hand-maintained.
pub const DELEGATE_ALLOCATION: &[(&str, u32)] = &[
    ("Beaver", 10),
    ("Box Elder", 84),
    ("Cache", 179),
    ("Carbon", 28),
    ("Daggett", 3),
    ("Davis", 547),
    ("Duchesne", 34),
    ("Emery", 18),
    ("Garfield", 11),
    ("Grand", 12),
    ("Iron", 73),
    ("Juab", 17),
    ("Kane", 13),
    ("Millard", 23),
    ("Morgan", 23),
    ("Piute", 5),
    ("Rich", 5),
    ("Salt Lake", 1160),
    ("San Juan", 21),
    ("Sanpete", 44),
    ("Sevier", 39),
    ("Summit", 51),
    ("Tooele", 79),
    ("Uintah", 58),
    ("Utah", 867),
    ("Wasatch", 45),
    ("Washington", 256),
    ("Wayne", 7),
    ("Weber", 288),
];

/// A recognized command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Admin-only: send a message as the bot into a named channel
    Broadcast { channel: String, message: String },
    /// Venue map image
    Map,
    /// Leadership phone list
    Phone,
    /// Delegate-allocation table
    Allocation,
    /// Tables-and-chairs diagram
    Tables,
    /// Same diagram under its other name
    Chairs,
}

impl Command {
    /// Resolve a command name and its arguments.
    ///
    /// Unrecognized names return `None`; callers treat that as a silent
    /// no-op rather than an error.
    pub fn parse(name: &str, args: &[String]) -> Option<Self> {
        match name {
            "msg" => {
                let (channel, message) = args.split_first()?;
                Some(Self::Broadcast {
                    channel: channel.clone(),
                    message: message.join(" "),
                })
            }
            "map" => Some(Self::Map),
            "phone" => Some(Self::Phone),
            "allocation" => Some(Self::Allocation),
            "tables" => Some(Self::Tables),
            "chairs" => Some(Self::Chairs),
            _ => None,
        }
    }
}

/// Total number of delegates across all counties.
pub fn allocation_total() -> u32 {
    DELEGATE_ALLOCATION.iter().map(|(_, n)| n).sum()
}

/// Render the delegate-allocation table with its computed total.
pub fn render_allocation() -> String {
    let mut out = String::new();
    for (county, count) in DELEGATE_ALLOCATION {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(county);
        out.push_str(": ");
        out.push_str(&count.to_string());
    }
    out.push_str(&format!("\n\nTOTAL: {}", allocation_total()));
    out
}
