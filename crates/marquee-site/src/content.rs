#![forbid(unsafe_code)]

//! Event copy for the IONWAVE page.
//!
//! All page text lives here as constants so the section renderers stay free
//! of prose and the tests can assert against one source of truth.

pub const EVENT_NAME: &str = "IONWAVE";
pub const EVENT_YEAR: &str = "2026";
pub const TAGLINE: &str = "BUILD CLOSE TO THE METAL";
pub const PRIZE_AMOUNT: &str = "$10,000";
pub const PRIZE_CAPTION: &str = "PRIZE POOL";
pub const EVENT_DATE: &str = "20-22 MARCH, 2026";
pub const EVENT_CITY: &str = "TALLINN";

pub const DESCRIPTION: &str = "A 36 hour systems hackathon where kernel hackers, protocol \
designers, and tooling authors team up to ship working low-level software. Three days of \
schedulers, parsers, wire formats, and profilers - built, broken, and rebuilt on real hardware.";

pub const ORGANIZER: &str = "Organized by the Systems Software Guild in collaboration with the \
Baltic Open Firmware Lab.";

/// Hero stat blocks: label + figure. Figures scramble in with digits.
pub const STATS: &[(&str, &str)] = &[
    ("DURATION", "36 hours"),
    ("HACKERS", "300+ expected"),
    ("MENTORS", "40+ onsite"),
];

pub const ABOUT_EYEBROW: &str = "ABOUT";
pub const ABOUT_TITLE: &str = "What is IONWAVE?";
pub const ABOUT_BODY: &str = "IONWAVE is the flagship hackathon of the Systems Software Guild, \
dedicated to software that talks to hardware: kernels, drivers, embedded runtimes, and the \
protocols that bind them. Teams get real boards, real buses, and 36 hours to take an idea from \
datasheet to demo. Judging rewards working code over slideware - if it boots, it counts.";
pub const ABOUT_CARDS: &[(&str, &str, &str)] = &[
    (
        "OWNERSHIP",
        "Guild-run, community-owned.",
        "Curated and owned by the Systems Software Guild, with a standing commitment to keep \
         every winning prototype open source.",
    ),
    (
        "HARDWARE",
        "Real boards, real buses.",
        "Bench stations stocked with dev boards, logic analyzers, and enough jumper wire to \
         reach the harbor.",
    ),
];

pub const HISTORY_EYEBROW: &str = "HISTORY";
pub const HISTORY_TITLE: &str = "From SOCKETSTORM to IONWAVE.";
pub const HISTORY_BODY: &str = "IONWAVE traces back to 2023, when the guild ran SOCKETSTORM, a \
weekend sprint around a single challenge: implement a reliable transport over a deliberately \
lossy serial link. The format stuck - small teams, hard constraints, running code - and grew a \
hardware track, a protocol track, and finally a new name. IONWAVE keeps the original rule: \
nothing ships unless it runs on the bench.";
pub const HISTORY_MILESTONES: &[(&str, &str, &str)] = &[
    (
        "2023",
        "SOCKETSTORM",
        "Weekend transport-protocol sprint over lossy serial links; 14 teams, 9 working stacks.",
    ),
    (
        "2024",
        "STORM -> IONWAVE",
        "Renamed and expanded with a firmware track and the first public bench demos.",
    ),
];

pub const TRACKS_EYEBROW: &str = "TRACKS";
pub const TRACKS_TITLE: &str = "Two tracks. One bare-metal mindset.";
pub const TRACKS_INTRO: &str = "Pick the lane that matches your build - kernel and firmware \
work, or protocol and network plumbing.";
pub const TRACKS: &[(&str, &str, &str)] = &[
    (
        "COREWAVE (Kernel & Firmware)",
        "Drivers, schedulers, and boot paths on real boards - prototype at ring zero and show \
         it booting.",
        "01",
    ),
    (
        "MESHWAVE (Protocols & Networks)",
        "Wire formats, transports, and resilient distributed plumbing - design it, fuzz it, \
         ship it.",
        "02",
    ),
];

pub const PROBLEMS_EYEBROW: &str = "PROBLEM STATEMENTS";
pub const PROBLEMS_TITLE: &str = "The build starts with a real problem.";
pub const PROBLEMS_BODY: &str = "Final problem statements land two weeks before the event, \
aligned to both tracks. Once released you can pick a statement, map it to a track, and start \
prototyping immediately.";
pub const PROBLEMS_STATUS: &str = "Coming soon.";

pub const FOOTER_NOTE: &str = "(c) IONWAVE 2026";
